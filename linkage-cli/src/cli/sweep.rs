use super::{logger::Logger, CliResult};
use crate::config::{check_finite, MechFile, Mechanism, SweepSettings};
use linkage::{BranchPolicy, Error, Linkage, State, Sweep, VelStatus};
use std::{io::Write, path::PathBuf};
use tracing::{debug, info, warn};

#[derive(clap::Args)]
pub(super) struct SweepCfg {
    /// Mechanism file (in RON format)
    file: PathBuf,
    /// Output path of the table (in CSV format), default to stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Number of samples
    #[clap(short = 'n', long)]
    samples: Option<usize>,
    /// Start crank angle (rad)
    #[clap(long, allow_hyphen_values = true)]
    start: Option<f64>,
    /// End crank angle (rad), default to one revolution from the start
    #[clap(long, allow_hyphen_values = true)]
    end: Option<f64>,
    #[clap(flatten)]
    drive: Drive,
}

#[derive(clap::Args)]
pub(super) struct PoseCfg {
    /// Mechanism file (in RON format)
    file: PathBuf,
    /// Crank angle (rad)
    #[clap(allow_hyphen_values = true)]
    theta: f64,
    #[clap(flatten)]
    drive: Drive,
}

#[derive(clap::Args)]
struct Drive {
    /// Crank angular velocity (rad/s), solves the velocities
    #[clap(long, allow_hyphen_values = true)]
    omega: Option<f64>,
    /// Override the assembly branch of the file
    #[clap(short, long, value_enum)]
    branch: Option<BranchPolicy>,
}

impl Drive {
    fn apply(&self, file: &mut MechFile) {
        if let Some(omega) = self.omega {
            file.sweep.omega = Some(omega);
        }
        if let Some(branch) = self.branch {
            file.mechanism.set_branch(branch);
        }
    }
}

pub(super) fn sweep(cfg: SweepCfg) -> CliResult {
    let SweepCfg { file: path, output, samples, start, end, drive } = cfg;
    let mut file = MechFile::load(&path)?;
    drive.apply(&mut file);
    if let Some(n) = samples {
        file.sweep.n = n;
    }
    if let Some(start) = start {
        file.sweep.start = start;
    }
    if let Some(end) = end {
        file.sweep.end = Some(end);
    }
    file.validate()?;
    let SweepSettings { start, end, n, omega } = &file.sweep;
    debug!(start, ?end, n, ?omega, "sweep settings");
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    match &file.mechanism {
        Mechanism::FourBar(fb) => write_table(fb, &file.sweep, writer)?,
        Mechanism::SliderCrank(sc) => write_table(sc, &file.sweep, writer)?,
    }
    if let Some(path) = output {
        info!(path = %path.display(), "table written");
    }
    Ok(())
}

fn write_table<L: Linkage>(linkage: &L, settings: &SweepSettings, writer: impl Write) -> CliResult {
    let states = Sweep::new(linkage, settings.angles(), settings.omega).collect::<Vec<_>>();
    let infeasible = states.iter().filter(|s| !s.is_feasible()).count();
    let singular = states
        .iter()
        .filter(|s| s.vel_status() == Some(VelStatus::Singular))
        .count();
    if infeasible > 0 {
        let total = states.len();
        warn!(infeasible, total, "samples cannot be assembled, fallback positions written");
    }
    info!(samples = states.len(), infeasible, singular, "sweep solved");
    linkage::csv::write_states(writer, &states)?;
    Ok(())
}

pub(super) fn pose(cfg: PoseCfg) -> CliResult {
    let PoseCfg { file: path, theta, drive } = cfg;
    let mut file = MechFile::load(&path)?;
    drive.apply(&mut file);
    file.mechanism.validate()?;
    let omega = file.sweep.omega;
    check_drive(theta, omega)?;
    let mut stdout = std::io::stdout().lock();
    let mut logger = Logger::new(&mut stdout);
    logger.top_title("pose")?;
    logger.log("mechanism", file.mechanism.name())?;
    match &file.mechanism {
        Mechanism::FourBar(fb) => {
            logger.log("type", fb.ty().name())?;
            logger.log("bound", fb.angle_bound().description())?;
            logger.log("branch", fb.branch)?;
            report(&mut logger, &fb.state(theta, omega))?;
        }
        Mechanism::SliderCrank(sc) => {
            match sc.stroke() {
                Some(stroke) => logger.log_f64("stroke", stroke)?,
                None => logger.log("stroke", "partial rotation")?,
            }
            logger.log("branch", sc.branch)?;
            report(&mut logger, &sc.state(theta, omega))?;
        }
    }
    logger.flush()?;
    Ok(())
}

fn check_drive(theta: f64, omega: Option<f64>) -> Result<(), Error> {
    check_finite("theta", theta)?;
    match omega {
        Some(omega) => check_finite("omega", omega),
        None => Ok(()),
    }
}

fn report<W: Write, S: State>(logger: &mut Logger<W>, state: &S) -> CliResult {
    if !state.is_feasible() {
        warn!(theta = state.theta(), "cannot be assembled, showing the fallback position");
    }
    if let Some(status) = state.vel_status().filter(|s| !s.is_solved()) {
        warn!(?status, "velocities are not exact");
    }
    logger.title("state")?;
    logger.log_fields(state)?;
    Ok(())
}
