use clap::Parser;
use ferrous_lookup_application::use_cases::BatchSummary;
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_infrastructure::system::read_domain_list;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - concurrent DNS record lookups with caching")]
struct Cli {
    /// Domain to resolve, or IP address for a reverse lookup
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    target: Option<String>,

    /// Newline-delimited file of domains to resolve concurrently
    #[arg(short = 'f', long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Treat TARGET as an IP address and look up its hostnames
    #[arg(short = 'r', long)]
    reverse: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file, empty for stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// Per-lookup timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Maximum concurrent resolutions in batch mode (0 = unbounded)
    #[arg(long)]
    concurrency: Option<usize>,
}

fn is_reverse_target(target: &str) -> bool {
    target.contains(':') || target.parse::<IpAddr>().is_ok()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout_ms: cli.timeout_ms,
        max_concurrency: cli.concurrency,
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Ferrous Lookup");

    let services = di::LookupServices::new(&config)?;

    if let Some(path) = cli.file {
        let domains = read_domain_list(&path).await?;
        info!(path = %path.display(), domains = domains.len(), "Loaded domain list");

        let shutdown = services.shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling outstanding lookups");
                shutdown.cancel();
            }
        });

        let summary = services
            .batch
            .execute(domains, Arc::new(output::ConsoleReporter))
            .await;
        return finish_batch(summary);
    }

    let Some(target) = cli.target else {
        anyhow::bail!("either TARGET or --file is required");
    };

    if cli.reverse || is_reverse_target(&target) {
        let hostnames = services.reverse.execute(&target).await;
        output::emit(&output::format_reverse(&hostnames));
    } else {
        let records = services.resolve.execute(&target).await;
        output::emit(&output::format_records(&target, &records));
    }

    Ok(())
}

fn finish_batch(summary: BatchSummary) -> anyhow::Result<()> {
    info!(
        submitted = summary.submitted,
        completed = summary.completed,
        cancelled = summary.cancelled,
        panicked = summary.panicked,
        "Batch finished"
    );

    if summary.cancelled > 0 {
        anyhow::bail!(
            "batch interrupted: {} of {} lookups cancelled",
            summary.cancelled,
            summary.submitted
        );
    }
    Ok(())
}
