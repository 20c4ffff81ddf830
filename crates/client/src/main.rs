//! `turn-digest` binary.
//!
//! Resolves one scripted turn and prints its notifications in display order.
//!
//! # Examples
//!
//! ```bash
//! # Scenario from data/scenarios/opening.ron, text digest
//! SCENARIO=opening cargo run -p galaxy-client
//!
//! # Explicit scenario file, JSON digest
//! SCENARIO_PATH=turn_042.ron DIGEST_FORMAT=json cargo run -p galaxy-client
//! ```

use anyhow::Result;
use galaxy_client::{CliConfig, DigestFormat, LoadedContent, logging, run_turn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    logging::setup_logging(
        config.session_id.as_deref(),
        config.log_dir.as_deref(),
        config.log_to_stderr,
    )?;

    tracing::info!(content_dir = %config.content_dir.display(), "Loading content");
    let content = LoadedContent::load(&config)?;

    let digest = run_turn(content, config.collector_capacity).await?;

    match config.format {
        DigestFormat::Text => print!("{}", digest.render_text()),
        DigestFormat::Json => println!("{}", digest.render_json()?),
    }

    tracing::info!(turn = digest.turn, "Digest complete");
    Ok(())
}
