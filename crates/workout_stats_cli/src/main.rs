use std::process::ExitCode;

use workout_stats::config::{Config, OutputFormat};
use workout_stats_cli::{CliResult, logging, process_files, render};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal; values may come from the real environment.
    let _ = dotenvy::dotenv();

    let (log_env, env_filter) = logging::log_filter(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("workout-stats: log filter: {}", log_env);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "workout-stats: run failed");
            eprintln!("Error processing files: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CliResult<()> {
    let config = Config::from_env()?;

    match config.format {
        OutputFormat::Text => {
            print!("{}", render::preamble(&config.user_name));
            let summary = process_files(&config).await?;
            print!("{}", render::render_text(&summary));
        }
        OutputFormat::Json => {
            let summary = process_files(&config).await?;
            println!("{}", render::render_json(&summary)?);
        }
    }
    Ok(())
}
