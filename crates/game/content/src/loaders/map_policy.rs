//! Galaxy-map presentation policy loader.

use std::path::Path;

use game_core::MapPolicy;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`MapPolicy`] from TOML files.
///
/// ```toml
/// fleet_display = "all_flight_paths"
/// system_click_radius = 0.75
/// system_overlays = "DRAW_STAR | SHOW_OWNERSHIP | DRAW_BANNER"
///
/// [[system]]
/// id = 4
/// overlays = "DRAW_STAR | DRAW_SHIELD"
/// label = { secondary = "capital" }
/// ```
pub struct MapPolicyLoader;

impl MapPolicyLoader {
    pub fn load(path: &Path) -> LoadResult<MapPolicy> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapPolicy> {
        let policy: MapPolicy = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map policy TOML: {}", e))?;

        if !(policy.system_click_radius.is_finite() && policy.system_click_radius >= 0.0) {
            anyhow::bail!(
                "system_click_radius must be a non-negative number, got {}",
                policy.system_click_radius
            );
        }

        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{FleetDisplay, HoverTargets, SystemId, SystemOverlays};

    use super::*;

    #[test]
    fn empty_file_is_default_policy() {
        assert_eq!(MapPolicyLoader::parse("").unwrap(), MapPolicy::default());
    }

    #[test]
    fn parses_knobs_flags_and_system_overrides() {
        let policy = MapPolicyLoader::parse(
            r#"
fleet_display = "all_flight_paths"
system_click_radius = 0.75
hover = "SYSTEMS"
system_overlays = "DRAW_STAR | SHOW_OWNERSHIP | DRAW_BANNER"

[[system]]
id = 4
overlays = "DRAW_STAR | DRAW_SHIELD"
owner_reach = 2.5
label = { secondary = "capital", color = { r = 255, g = 0, b = 0, a = 255 } }
"#,
        )
        .unwrap();

        assert_eq!(policy.fleet_display, FleetDisplay::AllFlightPaths);
        assert_eq!(policy.system_click_radius, 0.75);
        assert!(policy.hovers(HoverTargets::SYSTEMS));
        assert!(!policy.hovers(HoverTargets::FLEETS));
        assert!(policy.draw_banner(SystemId(1)));
        assert_eq!(
            policy.overlays_for(SystemId(4)),
            SystemOverlays::DRAW_STAR | SystemOverlays::DRAW_SHIELD
        );
        assert_eq!(policy.owner_reach(SystemId(4)), 2.5);
    }

    #[test]
    fn rejects_negative_click_radius() {
        assert!(MapPolicyLoader::parse("system_click_radius = -1.0").is_err());
    }
}
