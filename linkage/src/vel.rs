//! First-order kinematics: rigid-body point velocities and loop closure.
use crate::{perp, Vec2};
use nalgebra as na;

/// Relative tolerance of a dead point.
///
/// A loop-closure system is treated as singular when its determinant is
/// below this fraction of the product of the link lengths, that is, when
/// the sine of the angle between the links is below it.
pub const DEAD_POINT_TOL: f64 = 1e-9;

/// Outcome of a loop-closure velocity solve.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum VelStatus {
    /// Exact solution
    #[default]
    Solved,
    /// Dead point, zeros reported as an approximation
    Singular,
    /// Zero-length link vector, zeros reported
    Degenerate,
    /// The position was infeasible, zeros reported
    Unresolved,
}

impl VelStatus {
    /// Return true if the velocities are exact.
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Two unknowns of a loop-closure velocity equation.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct LoopVel {
    /// Unknowns, in the order of the solver's documentation
    pub x: [f64; 2],
    /// Outcome
    pub status: VelStatus,
}

impl LoopVel {
    /// Zero velocities with a status.
    pub const fn zero(status: VelStatus) -> Self {
        Self { x: [0.; 2], status }
    }
}

/// Velocity of the tip of `r` rotating at `omega`: `omega × r`.
#[inline]
pub fn cross(omega: f64, r: Vec2) -> Vec2 {
    omega * perp(r)
}

/// Rigid-body relation: `v_ref + omega × r`, where `r` points from the
/// reference point to the tracked point.
#[inline]
pub fn rigid(v_ref: Vec2, omega: f64, r: Vec2) -> Vec2 {
    v_ref + cross(omega, r)
}

fn solve2(c1: Vec2, c2: Vec2, rhs: Vec2, scale: f64) -> LoopVel {
    let m = na::Matrix2::from_columns(&[c1, c2]);
    let det = m.determinant();
    if !det.is_finite() || det.abs() <= DEAD_POINT_TOL * scale {
        tracing::trace!(det, "singular loop closure, reporting zeros");
        return LoopVel::zero(VelStatus::Singular);
    }
    let x0 = (rhs.x * c2.y - rhs.y * c2.x) / det;
    let x1 = (c1.x * rhs.y - c1.y * rhs.x) / det;
    LoopVel { x: [x0, x1], status: VelStatus::Solved }
}

/// Solve `[ω3, ω4]` of a four-bar loop.
///
/// `r_ba` points from the driver joint to the coupler joint, `r_bo4` from the
/// output pivot to the coupler joint, and `v_a` is the driver joint
/// velocity. The coupler joint velocity computed through either link must
/// agree:
///
/// `ω3 × r_ba − ω4 × r_bo4 = −v_a`
pub fn loop_closure(r_ba: Vec2, r_bo4: Vec2, v_a: Vec2) -> LoopVel {
    let (n3, n4) = (r_ba.norm(), r_bo4.norm());
    if n3 < f64::EPSILON || n4 < f64::EPSILON {
        return LoopVel::zero(VelStatus::Degenerate);
    }
    solve2(perp(r_ba), -perp(r_bo4), -v_a, n3 * n4)
}

/// Solve `[ω3, ṡ]` of a slider-crank loop.
///
/// `r_cb` points from the crank pin to the slider, `axis` is the slider
/// direction, and `v_b` is the crank pin velocity. The slider moves along the
/// axis only:
///
/// `ω3 × r_cb − ṡ·u = −v_b`
///
/// where `u` is the unit axis and `ṡ` the signed slider speed along it.
pub fn slider_closure(r_cb: Vec2, axis: Vec2, v_b: Vec2) -> LoopVel {
    let (n3, nu) = (r_cb.norm(), axis.norm());
    if n3 < f64::EPSILON || nu < f64::EPSILON {
        return LoopVel::zero(VelStatus::Degenerate);
    }
    solve2(perp(r_cb), -axis / nu, -v_b, n3)
}
