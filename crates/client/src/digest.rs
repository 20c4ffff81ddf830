//! End-of-turn digest: the console presentation of delivered notifications.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use game_content::ScriptedNotification;
use game_core::util::format::{TurnDisplay, fmt_auto, fmt_places, star_date};
use game_core::util::parse::{parse_int, string_at, var_tokens};
use game_core::{GameConfig, GameError, Location, NotificationKind};
use runtime::{DeliveryContext, DeliveryReport, HandlerError, MetricsSnapshot, NotificationHandler};
use serde::Serialize;

/// One delivered notification as shown to the player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DigestEntry {
    pub code: &'static str,
    pub kind: NotificationKind,
    pub message: String,
    pub focus: Option<Location>,
}

impl DigestEntry {
    /// `[code] kind: message`, plus the map focus when one was requested.
    pub fn render(&self) -> String {
        let mut line = format!("[{}] {}: {}", self.code, self.kind, self.message);
        if let Some(focus) = self.focus {
            let _ = write!(
                line,
                " (map -> {}, {})",
                fmt_places(focus.x, 1),
                fmt_places(focus.y, 1)
            );
        }
        line
    }
}

/// Replaces `[system_N]` tokens with the N-th system name.
///
/// Unparseable indices leave the token untouched; out-of-range indices fall
/// back to the first name.
pub fn expand_system_names(message: &str, names: &[String]) -> String {
    let mut expanded = message.to_string();
    for token in var_tokens(message, "system") {
        let index = match parse_int(&token[1..]) {
            Ok(index) => index,
            Err(error) => {
                tracing::debug!(
                    token = %token,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Leaving system token unresolved"
                );
                continue;
            }
        };
        let Some(name) = usize::try_from(index)
            .ok()
            .and_then(|index| string_at(names, index))
        else {
            continue;
        };
        expanded = expanded.replace(&format!("[system{token}]"), name);
    }
    expanded
}

/// Delivery handler that appends each notification to the digest and
/// centers the map on its focus.
#[derive(Clone)]
pub struct DigestHandler {
    system_names: Arc<[String]>,
    entries: Arc<Mutex<Vec<DigestEntry>>>,
}

impl DigestHandler {
    pub fn new(system_names: Vec<String>) -> Self {
        Self {
            system_names: system_names.into(),
            entries: Arc::default(),
        }
    }

    /// Entries delivered so far, leaving the handler empty.
    pub fn take_entries(&self) -> Vec<DigestEntry> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotificationHandler<ScriptedNotification> for DigestHandler {
    fn name(&self) -> &'static str {
        "digest"
    }

    async fn notify_player(
        &self,
        notification: &ScriptedNotification,
        ctx: &mut DeliveryContext<'_>,
    ) -> Result<(), HandlerError> {
        if let Some(focus) = notification.focus {
            ctx.request_focus(&focus);
        }

        let entry = DigestEntry {
            code: notification.kind.display_order(),
            kind: notification.kind,
            message: expand_system_names(&notification.message, &self.system_names),
            focus: notification.focus,
        };
        tracing::debug!(code = entry.code, kind = %entry.kind, "Presenting notification");

        self.entries
            .lock()
            .map_err(|_| "digest entries lock poisoned")?
            .push(entry);
        Ok(())
    }
}

/// Everything the player sees for one turn.
#[derive(Clone, Debug, Serialize)]
pub struct Digest {
    pub heading: String,
    /// Calendar date of the turn when the game displays years.
    pub star_date: Option<String>,
    pub turn: u32,
    pub entries: Vec<DigestEntry>,
    pub report: DeliveryReport,
    pub metrics: MetricsSnapshot,
}

impl Digest {
    pub fn new(
        game: &GameConfig,
        entries: Vec<DigestEntry>,
        report: DeliveryReport,
        metrics: MetricsSnapshot,
    ) -> Self {
        let star_date = game
            .display_year
            .then(|| star_date(game.year_of_turn(report.turn) as f32));
        Self {
            heading: TurnDisplay::new(game).label(report.turn),
            star_date,
            turn: report.turn,
            entries,
            report,
            metrics,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.heading);
        for entry in &self.entries {
            out.push_str(&entry.render());
            out.push('\n');
        }

        let _ = write!(out, "{} delivered", self.report.delivered_count());
        if !self.report.skipped.is_empty() {
            let _ = write!(out, ", {} skipped", self.report.skipped.len());
        }
        if !self.report.failures.is_empty() {
            let _ = write!(
                out,
                ", {} failed ({}% success)",
                self.report.failures.len(),
                fmt_auto(self.metrics.success_rate as f32)
            );
        }
        out.push('\n');
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["Sol".into(), "Vega".into(), "Rigel".into()]
    }

    #[test]
    fn system_tokens_expand_to_names() {
        assert_eq!(
            expand_system_names("Colony ship arrived at [system_2]", &names()),
            "Colony ship arrived at Rigel"
        );
        assert_eq!(
            expand_system_names("[system_0] and [system_1] signed a pact", &names()),
            "Sol and Vega signed a pact"
        );
        assert_eq!(
            expand_system_names("Lost contact with [system_9]", &names()),
            "Lost contact with Sol"
        );
        assert_eq!(
            expand_system_names("Unknown [system_x]", &names()),
            "Unknown [system_x]"
        );
        assert_eq!(expand_system_names("[system_1]", &[]), "[system_1]");
        assert_eq!(
            expand_system_names("Relay [system_[system_1] online", &names()),
            "Relay [system_Vega online"
        );
    }

    #[test]
    fn entry_renders_code_kind_and_focus() {
        let entry = DigestEntry {
            code: NotificationKind::PromptColonize.display_order(),
            kind: NotificationKind::PromptColonize,
            message: "Colonize Vega?".into(),
            focus: Some(Location::new(12.0, 4.5)),
        };
        assert_eq!(
            entry.render(),
            "[4001] prompt_colonize: Colonize Vega? (map -> 12.0, 4.5)"
        );
    }

    #[test]
    fn text_digest_uses_year_heading() {
        let mut report = DeliveryReport::new(3);
        report.delivered.push(NotificationKind::Advice);
        let entry = DigestEntry {
            code: NotificationKind::Advice.display_order(),
            kind: NotificationKind::Advice,
            message: "Build more farms".into(),
            focus: None,
        };
        let metrics = runtime::DeliveryMetrics::new().snapshot();
        let digest = Digest::new(
            &GameConfig::with_display_year(2300),
            vec![entry],
            report,
            metrics,
        );

        assert_eq!(
            digest.render_text(),
            "== Year 2302 ==\n[9950] advice: Build more farms\n1 delivered\n"
        );
        let json = digest.render_json().unwrap();
        assert!(json.contains("\"heading\": \"Year 2302\""));
        assert!(json.contains("\"star_date\": \"2302.Jan.1\""));
    }

    #[test]
    fn failures_show_success_rate() {
        let mut report = DeliveryReport::new(4);
        report.delivered = vec![NotificationKind::Advice; 2];
        report.failures.push(runtime::DeliveryFailure {
            kind: NotificationKind::CouncilNotify,
            handler: "council",
            criticality: runtime::HandlerCriticality::Important,
            error: "screen unavailable".into(),
        });
        let metrics = runtime::DeliveryMetrics::new();
        metrics.record_report(&report);

        let digest = Digest::new(&GameConfig::default(), Vec::new(), report, metrics.snapshot());
        assert_eq!(digest.star_date, None);
        assert_eq!(
            digest.render_text(),
            "== Turn 4 ==\n2 delivered, 1 failed (66% success)\n"
        );
    }
}
