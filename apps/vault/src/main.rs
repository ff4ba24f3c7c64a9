use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use vault::{build_orchestrator, GameConfig, Rotation, TurnReport};

mod telemetry;
mod terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    // Settings come from VAULT_* environment variables; see GameConfig::from_env.
    let config = GameConfig::from_env()?;
    info!(?config, "Starting vault");

    let screen = terminal::TerminalStage::new();
    let orchestrator = Arc::new(
        build_orchestrator()
            .with_config(config)
            .with_stage(screen.stage())
            .build(),
    );

    println!("Crack the vault: type cw / ccw (or r / l) per turn, q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "q" | "quit" | "exit") {
            break;
        }

        let direction = match input.parse::<Rotation>() {
            Ok(direction) => direction,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if !screen.input_enabled() {
            println!("The handle will not budge right now.");
        }

        // One task per turn; turns typed mid-animation are dropped by the orchestrator.
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            match orchestrator.on_direction(direction).await {
                Ok(TurnReport::Progressing(progress)) => println!("Click. {progress}"),
                Ok(TurnReport::Failed { .. }) => {
                    println!("The lock resets with a new combination.")
                }
                Ok(TurnReport::Unlocked) => println!("Unlocked! A new combination is set."),
                Ok(TurnReport::Dropped) => {}
                Ok(TurnReport::Aborted { missing }) => {
                    println!("Nothing happens ({missing} not ready).")
                }
                Err(e) => error!(error = %e, code = e.code(), "Turn failed"),
            }
        });
    }

    info!(
        failed_attempts = orchestrator.failed_attempts(),
        "Leaving the vault"
    );
    Ok(())
}
