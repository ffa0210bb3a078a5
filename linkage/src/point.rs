use nalgebra as na;

/// A 2D coordinate.
pub type Point2D = na::Point2<f64>;
/// A 2D displacement or velocity.
pub type Vec2 = na::Vector2<f64>;

/// Unit vector at angle `a`.
#[inline]
pub fn unit(a: f64) -> Vec2 {
    Vec2::new(a.cos(), a.sin())
}

/// The point at distance `d0` and absolute angle `a0` from `p`.
#[inline]
pub fn pla(p: Point2D, d0: f64, a0: f64) -> Point2D {
    p + d0 * unit(a0)
}

/// Rotate a vector by a quarter turn counter-clockwise.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit direction from `p` to `q`, or the x-axis when they coincide.
pub(crate) fn dir_or_x(p: Point2D, q: Point2D) -> Vec2 {
    let d = q - p;
    let n = d.norm();
    if n < f64::EPSILON {
        Vec2::x()
    } else {
        d / n
    }
}

/// A point rigidly attached to a link.
///
/// The offsets are measured in the link frame: the origin is the first joint
/// of the link and the x-axis points toward the second joint.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LinkPoint {
    /// Offset along the link
    pub along: f64,
    /// Offset normal to the link (counter-clockwise positive)
    pub normal: f64,
}

impl LinkPoint {
    /// Create a new instance from the link-frame offsets.
    pub const fn new(along: f64, normal: f64) -> Self {
        Self { along, normal }
    }

    /// Create from the extended length and its angle to the link.
    pub fn polar(length: f64, angle: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    /// Distance from the frame origin.
    pub fn length(&self) -> f64 {
        self.along.hypot(self.normal)
    }

    /// Offset vector in the global frame, for a link pointing along `u`.
    pub fn offset(&self, u: Vec2) -> Vec2 {
        self.along * u + self.normal * perp(u)
    }

    /// Global position on the link from `origin` toward `toward`.
    ///
    /// Coincident joints leave the link direction undefined; the global
    /// x-axis is used instead.
    pub fn locate(&self, origin: Point2D, toward: Point2D) -> Point2D {
        origin + self.offset(dir_or_x(origin, toward))
    }
}
