use clap::Parser;
use mdpipe::utils::error::ErrorSeverity;
use mdpipe::utils::{logger, validation::Validate};
use mdpipe::{Backend, BatchSummary, CliConfig, MarkitdownConverter, NativeConverter, WorkerEngine};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mdpipe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run_batch(&config).await {
        Ok(summary) => {
            tracing::info!(
                "Batch complete: {} converted, {} failed",
                summary.converted,
                summary.failed
            );
        }
        Err(e) => {
            tracing::error!("mdpipe failed: {} (severity: {:?})", e, e.severity());
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_batch(config: &CliConfig) -> mdpipe::Result<BatchSummary> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    match config.backend {
        Backend::Native => {
            let engine = WorkerEngine::new(NativeConverter::new());
            engine.run(stdin, stdout).await
        }
        Backend::Markitdown => {
            let converter = MarkitdownConverter::new(config.clone());
            converter.ensure_installed().await?;
            let engine = WorkerEngine::new(converter);
            engine.run(stdin, stdout).await
        }
    }
}
