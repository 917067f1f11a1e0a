// file: src/main.rs
// description: commandline entry point that runs one ingestion pass
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use stack_ingest::utils::logging::{format_step, format_success, init_logger};
use stack_ingest::{Config, EnvReport, FailureDelay, IngestPipeline, IngestStats};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "stack_ingest")]
#[command(version)]
#[command(about = "Load a docs folder into a Llama Stack vector database", long_about = None)]
struct Cli {
    /// Seconds to wait before exiting when the run fails
    #[arg(long, value_name = "SECONDS", default_value = "0", allow_hyphen_values = true)]
    delay: String,

    /// Optional toml file with lower-case variable names as keys
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print LLAMA_* environment variables and exit
    #[arg(long, action = ArgAction::SetTrue)]
    debug_env: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    init_logger(cli.color, cli.verbose);

    if cli.debug_env {
        print!("{}", EnvReport::from_process_env());
        return ExitCode::SUCCESS;
    }

    let delay = FailureDelay::from_arg(&cli.delay);
    info!("Delaying for {} seconds if task fails", delay.secs());

    // on_failure has already logged the error
    match delay.on_failure(run(&cli).await).await {
        Ok(stats) => {
            println!("{}", format_success(&stats.summary()));
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

async fn run(cli: &Cli) -> Result<IngestStats> {
    info!("{}", format_step(1, 3, "Loading configuration"));
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    debug!("Host: '{}'", config.server.host);
    debug!("Port: '{}'", config.server.port);
    debug!("Secure: '{}'", config.server.secure);
    debug!("Docs folder: {}", config.ingest.docs_folder.display());

    info!("{}", format_step(2, 3, "Connecting to LlamaStack"));
    let show_progress = cli.color && std::io::stderr().is_terminal();
    let pipeline = IngestPipeline::new(config)
        .context("Failed to create LlamaStack client")?
        .with_progress(show_progress);

    info!("{}", format_step(3, 3, "Ingesting documents"));
    let stats = pipeline.run().await.context("Ingestion failed")?;

    info!(
        "Loaded {} documents ({} bytes), inserted {} in {:.2}s ({:.1} KB/s)",
        stats.documents_loaded,
        stats.total_bytes,
        stats.documents_inserted,
        stats.elapsed.as_secs_f64(),
        stats.bytes_per_second() / 1024.0
    );

    Ok(stats)
}
