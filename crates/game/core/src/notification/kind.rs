//! Notification categories and their fixed display-order codes.
//!
//! The code table is part of the presentation contract: every code is four
//! digits wide, so lexicographic comparison of [`NotificationKind::display_order`]
//! agrees with numeric comparison of [`NotificationKind::priority`].

use strum::IntoEnumIterator;

/// Category of an end-of-turn notification.
///
/// Variants are declared in display order. Adding a variant without extending
/// [`NotificationKind::display_order`] is a compile error.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NotificationKind {
    /// Newly scouted systems; precedes plunder notifications.
    SystemsScouted,
    /// Random galactic event; precedes tech notifications.
    RandomEvent,
    DiscoverTech,
    PlunderTech,
    StealTech,
    /// Player-facing message for a tech theft.
    StealTechMessage,
    Sabotage,
    /// System scan results; after all tech discovery.
    SystemScanned,
    /// Bombard prompt; before colonize prompts.
    PromptBombard,
    /// Colonize prompt; after scans and ship combat.
    PromptColonize,
    CouncilNotify,
    /// Research selection; after all tech discovery.
    SelectNewTech,
    GnnNotify,
    DiplomaticMessage,
    AllocateSystems,
    ConstructShip,
    SpiesCaptured,
    Advice,
}

impl NotificationKind {
    /// Width of every display-order code.
    pub const CODE_WIDTH: usize = 4;

    /// Fixed-width display-order code for this category.
    pub const fn display_order(self) -> &'static str {
        use NotificationKind::*;
        match self {
            SystemsScouted => "0001",
            RandomEvent => "0002",
            DiscoverTech => "0020",
            PlunderTech => "0021",
            StealTech => "0022",
            StealTechMessage => "0023",
            Sabotage => "0030",
            SystemScanned => "3000",
            PromptBombard => "4000",
            PromptColonize => "4001",
            CouncilNotify => "5000",
            SelectNewTech => "7000",
            GnnNotify => "8000",
            DiplomaticMessage => "8500",
            AllocateSystems => "9000",
            ConstructShip => "9100",
            SpiesCaptured => "9150",
            Advice => "9950",
        }
    }

    /// Numeric value of [`display_order`](Self::display_order). Lower values
    /// are presented first.
    pub const fn priority(self) -> u16 {
        let bytes = self.display_order().as_bytes();
        let mut value = 0u16;
        let mut i = 0;
        while i < bytes.len() {
            value = value * 10 + (bytes[i] - b'0') as u16;
            i += 1;
        }
        value
    }

    /// Category whose notification must be presented directly before this one,
    /// if the ordering depends on it.
    pub const fn must_follow(self) -> Option<Self> {
        match self {
            Self::StealTechMessage => Some(Self::StealTech),
            Self::PromptColonize => Some(Self::PromptBombard),
            _ => None,
        }
    }

    /// Reverse lookup of a display-order code.
    pub fn from_display_order(code: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.display_order() == code)
    }

    /// Iterates every category in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl PartialOrd for NotificationKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NotificationKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use strum::EnumCount;

    use super::*;

    #[test]
    fn codes_are_unique_and_fixed_width() {
        let codes: HashSet<_> = NotificationKind::all()
            .map(|kind| kind.display_order())
            .collect();
        assert_eq!(codes.len(), NotificationKind::COUNT);
        assert!(
            codes
                .iter()
                .all(|code| code.len() == NotificationKind::CODE_WIDTH
                    && code.bytes().all(|b| b.is_ascii_digit()))
        );
    }

    #[test]
    fn priority_agrees_with_lexicographic_code_order() {
        for a in NotificationKind::all() {
            for b in NotificationKind::all() {
                assert_eq!(
                    a.priority().cmp(&b.priority()),
                    a.display_order().cmp(b.display_order()),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn declaration_order_is_display_order() {
        let kinds: Vec<_> = NotificationKind::all().collect();
        assert!(kinds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(kinds.first(), Some(&NotificationKind::SystemsScouted));
        assert_eq!(kinds.last(), Some(&NotificationKind::Advice));
    }

    #[test]
    fn known_codes() {
        assert_eq!(NotificationKind::SystemsScouted.priority(), 1);
        assert_eq!(NotificationKind::StealTechMessage.display_order(), "0023");
        assert_eq!(NotificationKind::SpiesCaptured.priority(), 9150);
        assert_eq!(NotificationKind::Advice.display_order(), "9950");
    }

    #[test]
    fn dependent_pairs_sort_adjacent_and_after() {
        for kind in NotificationKind::all() {
            if let Some(before) = kind.must_follow() {
                assert!(before < kind);
                let between = NotificationKind::all().filter(|k| before < *k && *k < kind);
                assert_eq!(between.count(), 0, "{before} must directly precede {kind}");
            }
        }
    }

    #[test]
    fn lookup_by_code_and_name() {
        assert_eq!(
            NotificationKind::from_display_order("4001"),
            Some(NotificationKind::PromptColonize)
        );
        assert_eq!(NotificationKind::from_display_order("4002"), None);
        assert_eq!(
            NotificationKind::from_str("GNN_NOTIFY").unwrap(),
            NotificationKind::GnnNotify
        );
        assert_eq!(NotificationKind::StealTech.to_string(), "steal_tech");
    }
}
