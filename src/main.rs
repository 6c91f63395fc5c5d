use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

mod config;
mod discover;
mod error;
mod log;
mod logging;
mod model;
mod pipeline;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "toplog")]
#[command(about = "Top URLs by bytes and top referrers from combined access logs", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate every matching log file and print the rankings.
    Report {
        /// Directory holding the log files.
        dir: Option<PathBuf>,

        #[arg(short, long, default_value_t = config::DEFAULT_WORKERS)]
        workers: usize,

        #[arg(short, long, default_value = config::DEFAULT_PATTERN)]
        pattern: String,

        /// Entries shown per ranking.
        #[arg(short, long, default_value_t = config::DEFAULT_TOP)]
        top: usize,

        /// Ranking tables keep `top * capacity_factor` entries while merging.
        #[arg(long, default_value_t = config::CAPACITY_FACTOR)]
        capacity_factor: usize,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the log files a report would read.
    Files {
        dir: Option<PathBuf>,

        #[arg(short, long, default_value = config::DEFAULT_PATTERN)]
        pattern: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn log_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| {
        warn!(default = config::DEFAULT_LOG_DIR, "log directory not specified");
        PathBuf::from(config::DEFAULT_LOG_DIR)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json);

    match cli.cmd {
        Commands::Report {
            dir,
            workers,
            pattern,
            top,
            capacity_factor,
            format,
        } => {
            let settings = config::Settings::new(top, capacity_factor)?;
            let dir = log_dir(dir);

            let files = discover::discover(&dir, &pattern)?;
            if files.is_empty() {
                anyhow::bail!("no files matching {:?} in {}", pattern, dir.display());
            }

            let report = pipeline::run(&files, workers, &settings)?;

            let out = match format {
                Format::Text => render::render_text_report(&report)?,
                Format::Json => render::render_json_report(&report)?,
            };
            print!("{}", out);
        }
        Commands::Files { dir, pattern } => {
            let dir = log_dir(dir);
            for path in discover::discover(&dir, &pattern)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
