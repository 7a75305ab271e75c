use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pewpew_core::app::{LevelDataFetchJob, MonthlyRotationJob, TwoDayReportJob};
use pewpew_core::domain::{DEFAULT_SELECTION_COUNT, RotationSettings, RunOutcome};
use pewpew_core::impls::{FsStorage, HttpFetcher, RandomSampler, TracingEventSink};
use pewpew_core::ports::SystemClock;

#[derive(Parser)]
#[command(name = "pewpew")]
#[command(about = "Scheduled data maintenance for PewPew World")]
#[command(version)]
struct Cli {
    /// Data directory that holds config.json and the data/ tree
    #[arg(long, env = "PEWPEW_DATA_DIR", default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick this month's leaderboard levels
    Rotate {
        /// Number of levels to select
        #[arg(long, default_value_t = DEFAULT_SELECTION_COUNT)]
        count: usize,
    },

    /// Download the CSV snapshots and record metadata.json
    Fetch {
        /// Base URL the snapshot files are served from
        #[arg(long, env = "PEWPEW_DATA_BASE_URL")]
        base_url: String,
    },

    /// Write the two-day placeholder report
    TwoDay,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let storage = FsStorage::new(&cli.data_dir);
    let events = TracingEventSink;
    info!(data_dir = %cli.data_dir.display(), "starting maintenance job");

    match cli.command {
        Commands::Rotate { count } => {
            let settings = RotationSettings::default().with_count(count);
            let job = MonthlyRotationJob::new(settings, RandomSampler, &storage, &events);
            // スキップは正常終了（次回のスケジュール実行に任せる）
            if let RunOutcome::Rotated(rotation) = job.run()? {
                info!(pool_size = rotation.pool_size, "rotation complete");
            }
        }
        Commands::Fetch { base_url } => {
            let fetcher = HttpFetcher::default();
            let clock = SystemClock;
            LevelDataFetchJob::new(base_url, &fetcher, &storage, &clock, &events)
                .run()
                .await?;
        }
        Commands::TwoDay => {
            let clock = SystemClock;
            TwoDayReportJob::new(&storage, &clock, &events).run()?;
        }
    }

    Ok(())
}
