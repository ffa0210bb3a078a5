//! Mechanism files in RON format.
use crate::cli::CliResult;
use linkage::{linspace, revolution, BranchPolicy, Error, FourBar, Linspace, SliderCrank};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A mechanism of any supported kind.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub(crate) enum Mechanism {
    FourBar(FourBar),
    SliderCrank(SliderCrank),
}

impl Mechanism {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::FourBar(_) => "four-bar",
            Self::SliderCrank(_) => "slider-crank",
        }
    }

    pub(crate) fn set_branch(&mut self, branch: BranchPolicy) {
        match self {
            Self::FourBar(fb) => fb.branch = branch,
            Self::SliderCrank(sc) => sc.branch = branch,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self {
            Self::FourBar(fb) => fb.validate(),
            Self::SliderCrank(sc) => sc.validate(),
        }
    }
}

/// Crank angles to sweep, in radians.
///
/// Without an end angle the sweep covers one revolution from `start`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct SweepSettings {
    pub(crate) start: f64,
    pub(crate) end: Option<f64>,
    pub(crate) n: usize,
    /// Crank angular velocity, velocities are solved if provided
    pub(crate) omega: Option<f64>,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self { start: 0., end: None, n: 360, omega: None }
    }
}

impl SweepSettings {
    pub(crate) fn angles(&self) -> Linspace {
        match self.end {
            Some(end) => linspace(self.start, end, self.n),
            None => revolution(self.start, self.n),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.n == 0 {
            return Err(Error::EmptySweep);
        }
        check_finite("sweep.start", self.start)?;
        if let Some(end) = self.end {
            check_finite("sweep.end", end)?;
        }
        if let Some(omega) = self.omega {
            check_finite("sweep.omega", omega)?;
        }
        Ok(())
    }
}

pub(crate) fn check_finite(name: &'static str, v: f64) -> Result<(), Error> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { name })
    }
}

/// Content of a mechanism file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub(crate) struct MechFile {
    pub(crate) mechanism: Mechanism,
    #[serde(default)]
    pub(crate) sweep: SweepSettings,
}

impl MechFile {
    pub(crate) fn new(mechanism: Mechanism) -> Self {
        Self { mechanism, sweep: SweepSettings::default() }
    }

    /// Parse without validation.
    pub(crate) fn from_ron(s: &str) -> CliResult<Self> {
        Ok(ron::from_str(s)?)
    }

    pub(crate) fn load(path: &Path) -> CliResult<Self> {
        let s = std::fs::read_to_string(path)?;
        let file = Self::from_ron(&s)?;
        tracing::debug!(path = %path.display(), mechanism = file.mechanism.name(), "loaded");
        Ok(file)
    }

    pub(crate) fn to_ron(&self) -> CliResult<String> {
        let cfg = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, cfg)?)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.mechanism.validate()?;
        self.sweep.validate()
    }
}
