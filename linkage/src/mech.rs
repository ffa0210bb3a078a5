//! Linkage mechanism types.
pub use self::{fb::*, sc::*, stat::*};
use crate::{Error, Sweep, Trajectory, VelStatus};

pub mod fb;
pub mod sc;
mod stat;

/// Flatten a value into named numeric columns.
pub trait Tabular {
    /// Column names and values, in a fixed order for the same mechanism.
    fn fields(&self) -> Vec<(String, f64)>;
}

/// Common view of a mechanism state at one crank angle.
pub trait State: Tabular {
    /// Driver angle of this state.
    fn theta(&self) -> f64;
    /// Return true if every joint satisfies its constraints.
    fn is_feasible(&self) -> bool;
    /// Status of the velocity solution, if velocities were requested.
    fn vel_status(&self) -> Option<VelStatus>;
}

/// A mechanism driven by a crank angle.
///
/// Every evaluation is independent: the state at one angle does not depend
/// on any earlier evaluation.
pub trait Linkage {
    /// State type produced for each angle.
    type State: State;

    /// Solve the positions at crank angle `theta`, and the velocities if the
    /// crank angular velocity `omega` is provided.
    fn state(&self, theta: f64, omega: Option<f64>) -> Self::State;

    /// Solve the positions only.
    fn pose(&self, theta: f64) -> Self::State {
        self.state(theta, None)
    }

    /// Lazy positions over the angles.
    fn sweep<I>(&self, angles: I) -> Sweep<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = f64>,
    {
        Sweep::new(self, angles, None)
    }

    /// Lazy positions and velocities over the angles, at a constant crank
    /// angular velocity.
    fn sweep_vel<I>(&self, angles: I, omega: f64) -> Sweep<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = f64>,
    {
        Sweep::new(self, angles, Some(omega))
    }

    /// Collect `n` samples from `start` to `end` (inclusive) for playback.
    fn trajectory(
        &self,
        start: f64,
        end: f64,
        n: usize,
        omega: Option<f64>,
    ) -> Result<Trajectory<Self::State>, Error>
    where
        Self: Sized,
    {
        Trajectory::new(self, start, end, n, omega)
    }
}

pub(crate) fn push_xy(fields: &mut Vec<(String, f64)>, name: &str, x: f64, y: f64) {
    fields.push((format!("{name}.x"), x));
    fields.push((format!("{name}.y"), y));
}

pub(crate) fn push_flag(fields: &mut Vec<(String, f64)>, name: &str, flag: bool) {
    fields.push((name.to_string(), if flag { 1. } else { 0. }));
}
