//! Planar linkage kinematics.
//!
//! The kernel behind mechanism animations: it places the joints of a
//! four-bar or slider-crank for a given crank angle by circle intersection,
//! solves the loop-closure velocity equations, and sweeps the crank over a
//! range of angles.
//!
//! ```
//! use linkage::*;
//!
//! let fb = FourBar::example();
//! let state = fb.state(120f64.to_radians(), Some(45f64.to_radians()));
//! assert!(state.is_feasible());
//! let vel = state.vel.unwrap();
//! assert_eq!(vel.status, VelStatus::Solved);
//! ```
//!
//! None of the solvers fail: infeasible geometry is reported through
//! [`Solution::Infeasible`] with a fallback point, and dead points through
//! [`VelStatus::Singular`] with zero angular velocities.
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
pub use crate::{
    branch::BranchPolicy,
    error::Error,
    mech::*,
    point::*,
    pos::*,
    sweep::*,
    vel::{LoopVel, VelStatus, DEAD_POINT_TOL},
};
#[doc(no_inline)]
pub use nalgebra as na;

mod branch;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod error;
pub mod mech;
pub mod mobility;
mod point;
mod pos;
pub mod statics;
mod sweep;
pub mod vel;
#[cfg(test)]
mod tests;
