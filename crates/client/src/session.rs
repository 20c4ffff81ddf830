//! Runs one scripted turn through the runtime.
use anyhow::{Context, Result};
use tracing::{info, warn};

use game_content::{ProducerScript, ScriptedNotification};
use game_core::{GameRng, compute_seed};
use runtime::{Runtime, RuntimeConfig};

use crate::content::LoadedContent;
use crate::digest::{Digest, DigestHandler};

/// Spawns every scripted producer, ends the turn and builds the digest.
pub async fn run_turn(content: LoadedContent, collector_capacity: usize) -> Result<Digest> {
    let LoadedContent {
        game,
        map_policy,
        system_names,
        scenario,
    } = content;

    let handler = DigestHandler::new(system_names);
    let mut runtime = Runtime::<ScriptedNotification>::builder()
        .config(RuntimeConfig {
            collector_capacity,
            first_turn: scenario.turn,
        })
        .map_policy(map_policy)
        .fallback_handler(handler.clone())
        .build()?;

    info!(
        turn = scenario.turn,
        producers = scenario.producers.len(),
        notifications = scenario.notification_count(),
        "Resolving turn"
    );

    // Launch order comes from the scenario seed. Each producer keeps its
    // declaration index as origin slot, so the digest does not depend on it.
    let mut rng = GameRng::new(compute_seed(scenario.seed, scenario.turn.into(), 0, 0));
    let mut producers = Vec::with_capacity(scenario.producers.len());
    for (index, producer) in scenario.producers.into_iter().enumerate() {
        let origin = u32::try_from(index).context("Too many producers in scenario")?;
        producers.push((origin, producer));
    }

    let mut session = runtime.begin_turn();
    for (origin, producer) in shuffled(producers, &mut rng) {
        let ProducerScript {
            name,
            notifications,
        } = producer;
        let task_name = name.clone();
        session.spawn_producer_at(origin, name, move |sender| async move {
            for notification in notifications {
                if let Err(error) = sender.submit(notification).await {
                    warn!(producer = %task_name, error = %error, "Producer stopped early");
                    return;
                }
            }
        });
    }

    let report = runtime
        .end_turn(session)
        .await
        .context("Turn delivery failed")?;

    Ok(Digest::new(
        &game,
        handler.take_entries(),
        report,
        runtime.metrics().snapshot(),
    ))
}

/// Fisher-Yates shuffle driven by `rng`.
fn shuffled<P>(mut items: Vec<P>, rng: &mut GameRng) -> Vec<P> {
    for i in (1..items.len()).rev() {
        let j = rng.roll(0, i as i32) as usize;
        items.swap(i, j);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::Scenario;
    use game_core::{GameConfig, Location, MapPolicy, NotificationKind};

    fn content() -> LoadedContent {
        let producer = |name: &str, notifications| ProducerScript {
            name: name.to_string(),
            notifications,
        };
        LoadedContent {
            game: GameConfig::default(),
            map_policy: MapPolicy::default(),
            system_names: vec!["Sol".into(), "Vega".into()],
            scenario: Scenario {
                turn: 5,
                seed: 0,
                producers: vec![
                    producer(
                        "colonies",
                        vec![
                            ScriptedNotification::new(
                                NotificationKind::PromptColonize,
                                "Colonize [system_1]?",
                            )
                            .with_focus(Location::new(2.0, 3.0)),
                        ],
                    ),
                    producer(
                        "combat",
                        vec![ScriptedNotification::new(
                            NotificationKind::PromptBombard,
                            "Bombard [system_0]?",
                        )],
                    ),
                ],
            },
        }
    }

    #[tokio::test]
    async fn digest_lists_notifications_in_display_order() {
        let digest = run_turn(content(), 1).await.unwrap();

        assert_eq!(digest.heading, "Turn 5");
        let messages: Vec<_> = digest.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Bombard Sol?", "Colonize Vega?"]);
        assert_eq!(digest.report.focus_changes.len(), 1);
        assert_eq!(digest.metrics.delivered, 2);
    }

    #[tokio::test]
    async fn digest_is_independent_of_seed() {
        let mut reseeded = content();
        reseeded.scenario.seed = 99;

        let first = run_turn(content(), 4).await.unwrap();
        let second = run_turn(reseeded, 4).await.unwrap();
        assert_eq!(first.entries, second.entries);
    }

    #[tokio::test]
    async fn cross_producer_ties_follow_declaration_order() {
        let mut base = content();
        base.scenario.producers = ["A", "B", "C", "D"]
            .into_iter()
            .map(|tag| ProducerScript {
                name: format!("yard {tag}"),
                notifications: vec![ScriptedNotification::new(
                    NotificationKind::ConstructShip,
                    tag,
                )],
            })
            .collect();

        for seed in 0..16 {
            let mut seeded = base.clone();
            seeded.scenario.seed = seed;
            let digest = run_turn(seeded, 1).await.unwrap();
            let tags: String = digest.entries.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(tags, "ABCD", "seed {seed}");
        }
    }

    #[test]
    fn shuffle_keeps_every_producer() {
        let mut rng = GameRng::new(3);
        let producers = content().scenario.producers;
        let mut names: Vec<_> = shuffled(producers, &mut rng)
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["colonies", "combat"]);
    }
}
