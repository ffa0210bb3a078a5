use crate::config::{Mechanism, MechFile};
use std::{io::Write, path::PathBuf, process::ExitCode};

mod logger;
mod mobility;
mod sweep;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("reading file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ron deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("ron serialization error: {0}")]
    RonSer(#[from] ron::Error),
    #[error("csv serialization error: {0}")]
    Csv(#[from] linkage::csv::Error),
    #[error("invalid linkage: {0}")]
    Linkage(#[from] linkage::Error),
}

pub(crate) type CliResult<T = ()> = Result<T, CliError>;

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    /// Raise the log level, repeat for more (`RUST_LOG` also works)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Sweep the crank of a mechanism file, write the states in CSV format
    Sweep(sweep::SweepCfg),
    /// Solve a mechanism file at one crank angle
    Pose(sweep::PoseCfg),
    /// Degrees of freedom by the Kutzbach criterion
    Mobility(mobility::MobilityCfg),
    /// Write an example mechanism file
    Example(ExampleCfg),
}

impl Entry {
    pub(crate) fn main() -> ExitCode {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        init_logger(entry.verbose);
        let res = match entry.cmd {
            Cmd::Sweep(cfg) => sweep::sweep(cfg),
            Cmd::Pose(cfg) => sweep::pose(cfg),
            Cmd::Mobility(cfg) => mobility::mobility(cfg),
            Cmd::Example(cfg) => example(cfg),
        };
        match res {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{APP_NAME}: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

fn init_logger(verbose: u8) {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ExampleKind {
    FourBar,
    SliderCrank,
}

#[derive(clap::Args)]
struct ExampleCfg {
    /// Mechanism type
    #[clap(value_enum, default_value_t = ExampleKind::FourBar)]
    kind: ExampleKind,
    /// Output path (in RON format), default to stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn example(cfg: ExampleCfg) -> CliResult {
    let mechanism = match cfg.kind {
        ExampleKind::FourBar => Mechanism::FourBar(linkage::FourBar::example()),
        ExampleKind::SliderCrank => Mechanism::SliderCrank(linkage::SliderCrank::example()),
    };
    let s = MechFile::new(mechanism).to_ron()?;
    match cfg.output {
        Some(path) => {
            std::fs::write(&path, s)?;
            tracing::info!(path = %path.display(), "example written");
        }
        None => writeln!(std::io::stdout().lock(), "{s}")?,
    }
    Ok(())
}
