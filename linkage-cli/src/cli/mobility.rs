use super::{logger::Logger, CliResult};
use linkage::mobility::Mobility;

#[derive(clap::Args)]
pub(super) struct MobilityCfg {
    /// Number of links, ground included
    #[clap(short = 'n', long)]
    links: u32,
    /// Number of lower pairs (revolute and prismatic joints)
    #[clap(short = 'j', long)]
    lower: u32,
    /// Number of higher pairs (cam and gear contacts)
    #[clap(short = 'H', long, default_value_t = 0)]
    higher: u32,
}

pub(super) fn mobility(cfg: MobilityCfg) -> CliResult {
    let MobilityCfg { links, lower, higher } = cfg;
    let m = Mobility::new(links, lower, higher);
    let mut stdout = std::io::stdout().lock();
    let mut logger = Logger::new(&mut stdout);
    logger.top_title("mobility")?;
    logger.log("links", links)?;
    logger.log("lower", lower)?;
    logger.log("higher", higher)?;
    logger.log("formula", format_args!("3({links} - 1) - 2*{lower} - {higher}"))?;
    logger.log("dof", m.kutzbach())?;
    logger.log("type", m.ty())?;
    logger.flush()?;
    Ok(())
}
