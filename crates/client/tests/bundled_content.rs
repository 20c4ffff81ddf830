use std::path::PathBuf;

use galaxy_client::{CliConfig, LoadedContent, run_turn};
use game_core::NotificationKind;

fn bundled_config() -> CliConfig {
    CliConfig {
        content_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
        scenario: Some("opening".into()),
        collector_capacity: 2,
        ..CliConfig::default()
    }
}

#[test]
fn bundled_content_loads() {
    let content = LoadedContent::load(&bundled_config()).expect("bundled content should load");

    assert_eq!(content.scenario.turn, 12);
    assert_eq!(content.scenario.notification_count(), 9);
    assert_eq!(content.system_names[0], "Sol");
    assert!(content.game.display_year);
    assert_eq!(
        content.map_policy.label_for(&game_core::StarSystemView::new(
            game_core::SystemId(0),
            "Sol",
            game_core::Location::ORIGIN,
            game_core::Rgb::WHITE,
        ))
        .secondary,
        "capital"
    );
}

/// The opening scenario, run with concurrent producers, prints the digest in
/// display order regardless of scheduling.
#[tokio::test]
async fn opening_digest_is_ordered() {
    let config = bundled_config();
    let content = LoadedContent::load(&config).expect("bundled content should load");

    let digest = run_turn(content, config.collector_capacity)
        .await
        .expect("turn should deliver");

    let kinds: Vec<_> = digest.entries.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::SystemsScouted,
            NotificationKind::DiscoverTech,
            NotificationKind::StealTech,
            NotificationKind::StealTechMessage,
            NotificationKind::PromptBombard,
            NotificationKind::PromptColonize,
            NotificationKind::SelectNewTech,
            NotificationKind::ConstructShip,
            NotificationKind::ConstructShip,
        ]
    );

    let text = digest.render_text();
    assert!(text.starts_with("== Year 2311 ==\n[0001] systems_scouted: Scouts reached Procyon\n"));
    assert!(text.contains("[9100] construct_ship: Scout completed at Sol\n[9100] construct_ship: Frigate completed at Sol\n"));
    assert!(text.ends_with("9 delivered\n"));
    assert_eq!(digest.report.focus_changes.len(), 2);
}
