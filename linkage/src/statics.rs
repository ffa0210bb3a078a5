//! Plane stress transformation and beam support reactions.
use std::f64::consts::FRAC_PI_4;

/// Plane stress state of an element.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct PlaneStress {
    /// Normal stress on the x face
    pub sx: f64,
    /// Normal stress on the y face
    pub sy: f64,
    /// Shear stress
    pub txy: f64,
}

/// Principal stresses.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Principal {
    /// Maximum normal stress
    pub s1: f64,
    /// Minimum normal stress
    pub s2: f64,
    /// Angle from the x-axis to the direction of `s1`
    pub theta: f64,
}

impl PlaneStress {
    /// Create a new instance.
    pub const fn new(sx: f64, sy: f64, txy: f64) -> Self {
        Self { sx, sy, txy }
    }

    fn center_radius(&self) -> (f64, f64) {
        let c = (self.sx + self.sy) / 2.;
        let r = ((self.sx - self.sy) / 2.).hypot(self.txy);
        (c, r)
    }

    /// Stresses on an element rotated counter-clockwise by `theta`.
    pub fn transform(&self, theta: f64) -> Self {
        let (s, c) = (2. * theta).sin_cos();
        let avg = (self.sx + self.sy) / 2.;
        let half = (self.sx - self.sy) / 2.;
        Self {
            sx: avg + half * c + self.txy * s,
            sy: avg - half * c - self.txy * s,
            txy: -half * s + self.txy * c,
        }
    }

    /// Normal stress along the direction at `theta`.
    pub fn normal_at(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        self.sx * c * c + self.sy * s * s + 2. * self.txy * s * c
    }

    /// Principal stresses and direction.
    pub fn principal(&self) -> Principal {
        let (c, r) = self.center_radius();
        let theta = if r == 0. { 0. } else { 0.5 * (2. * self.txy).atan2(self.sx - self.sy) };
        Principal { s1: c + r, s2: c - r, theta }
    }

    /// Maximum in-plane shear stress.
    pub fn max_shear(&self) -> f64 {
        self.center_radius().1
    }

    /// Angle of the maximum shear plane.
    pub fn max_shear_angle(&self) -> f64 {
        self.principal().theta - FRAC_PI_4
    }
}

/// Beam resting on two end supports.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct SimpleBeam {
    /// Span between the supports
    pub length: f64,
}

impl SimpleBeam {
    /// Create a new instance.
    pub const fn new(length: f64) -> Self {
        Self { length }
    }

    /// Support reactions `[left, right]` under a point load at distance `x`
    /// from the left support.
    ///
    /// The load position is clamped to the span. A span without length
    /// shares the load evenly.
    pub fn reactions(&self, load: f64, x: f64) -> [f64; 2] {
        if self.length.is_nan() || self.length <= 0. {
            return [load / 2.; 2];
        }
        let x = x.clamp(0., self.length);
        let right = load * x / self.length;
        [load - right, right]
    }
}
