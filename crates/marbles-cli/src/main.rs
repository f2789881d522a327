//! Marble Duel in the terminal: play against the computer on stdin/stdout.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod input;
mod render;
mod session;

use config::CliConfig;
use input::{Command, CommandError};
use session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env().context("Invalid configuration")?;
    let mut session = Session::new(&config);

    info!("Starting Marble Duel...");
    println!("{}", input::HELP);
    println!();
    println!("{}", render::render_board(&session.game));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match input::parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!(input = %line.trim(), "{}", e);
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", input::HELP),
            Command::State => println!("{}", serde_json::to_string_pretty(&session.game)?),
            _ => {
                let Some(action) = command.action() else {
                    continue;
                };

                match session.handle(action) {
                    Ok(Some(delay)) => {
                        println!("{}", render::render_board(&session.game));
                        // Input is not read while the computer is thinking
                        tokio::time::sleep(delay).await;
                        session.computer_turn()?;
                        println!("{}", render::render_board(&session.game));
                    }
                    Ok(None) => println!("{}", render::render_board(&session.game)),
                    Err(e) => {
                        warn!("Rejected input: {}", e);
                        println!("{}", e);
                    }
                }
            }
        }
    }

    info!("Goodbye");
    Ok(())
}
