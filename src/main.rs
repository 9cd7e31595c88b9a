use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wonderland::{Config, Session};

fn main() -> ExitCode {
    // stdout carries the game itself, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "starting");

    let mut session = match Session::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to build the world");
            eprintln!("Failed to build the world: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match session.run(stdin.lock(), &mut out) {
        Ok(ending) => {
            tracing::info!(?ending, "finished");
            let _ = out.flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "terminal i/o failed");
            ExitCode::FAILURE
        }
    }
}
