//! Position solving by circle intersection.
use crate::{perp, BranchPolicy, Point2D, Vec2};

/// Why an intersection has no real solution.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Infeasible {
    /// The centers are farther apart than the links can reach
    TooFar,
    /// One circle lies inside the other
    Contained,
    /// The two centers coincide
    Coincident,
    /// A radius is zero, negative or not finite, a point is not finite, or
    /// the axis has no direction
    DegenerateLink,
}

impl std::fmt::Display for Infeasible {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::TooFar => write!(f, "links cannot reach"),
            Self::Contained => write!(f, "one circle contains the other"),
            Self::Coincident => write!(f, "coincident centers"),
            Self::DegenerateLink => write!(f, "degenerate link"),
        }
    }
}

/// The two solutions of an intersection, before branch selection.
///
/// For two circles, `direct` lies on the counter-clockwise side of the line
/// from the first center to the second. For a circle and a line, `direct` is
/// ahead along the line direction. The two are mirror images across that
/// reference line.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Candidates {
    /// Direct solution
    pub direct: Point2D,
    /// Inverse solution
    pub inverse: Point2D,
}

/// Intersection result, before branch selection.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Intersection {
    /// Two real solutions, which coincide at tangency
    Pair(Candidates),
    /// No real solution
    None {
        /// Deterministic stand-in position
        fallback: Point2D,
        /// Cause
        reason: Infeasible,
    },
}

impl Intersection {
    /// Apply the branch policy.
    pub fn select(self, policy: BranchPolicy) -> Solution {
        match self {
            Self::Pair(c) => Solution::Feasible(policy.pick(c)),
            Self::None { fallback, reason } => {
                tracing::trace!(%reason, "infeasible intersection, using fallback");
                Solution::Infeasible { fallback, reason }
            }
        }
    }

    /// Get the candidates if the intersection is real.
    pub fn candidates(&self) -> Option<Candidates> {
        match self {
            Self::Pair(c) => Some(*c),
            Self::None { .. } => None,
        }
    }
}

/// A solved position.
///
/// Infeasible geometry is a normal state of a mechanism swept through its
/// dead points, so it is returned as a value instead of an error.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Solution {
    /// The point satisfies every distance constraint
    Feasible(Point2D),
    /// No real solution; `fallback` only keeps the distance to the first
    /// center
    Infeasible {
        /// Deterministic stand-in position
        fallback: Point2D,
        /// Cause
        reason: Infeasible,
    },
}

impl Solution {
    /// The solved point, or the fallback.
    pub fn point(&self) -> Point2D {
        match self {
            Self::Feasible(p) | Self::Infeasible { fallback: p, .. } => *p,
        }
    }

    /// The solved point, if feasible.
    pub fn feasible(&self) -> Option<Point2D> {
        match self {
            Self::Feasible(p) => Some(*p),
            Self::Infeasible { .. } => None,
        }
    }

    /// The cause of infeasibility.
    pub fn reason(&self) -> Option<Infeasible> {
        match self {
            Self::Feasible(_) => None,
            Self::Infeasible { reason, .. } => Some(*reason),
        }
    }

    /// Return true if the point satisfies its constraints.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }
}

fn is_link(r: f64) -> bool {
    r.is_finite() && r > 0.
}

/// Intersect the circle around `s` with radius `r1` and the circle around
/// `b` with radius `r2`.
///
/// When infeasible, the fallback is `s + (r1, 0)`, or `s` itself for a
/// degenerate radius or a center that is not finite.
pub fn circle_circle(s: Point2D, r1: f64, b: Point2D, r2: f64) -> Intersection {
    if !is_link(r1) || !is_link(r2) {
        return Intersection::None { fallback: s, reason: Infeasible::DegenerateLink };
    }
    let sb = b - s;
    let d = sb.norm();
    if !d.is_finite() {
        return Intersection::None { fallback: s, reason: Infeasible::DegenerateLink };
    }
    let fallback = s + r1 * Vec2::x();
    let reason = if d < f64::EPSILON {
        Infeasible::Coincident
    } else if d > r1 + r2 {
        Infeasible::TooFar
    } else if d < (r1 - r2).abs() {
        Infeasible::Contained
    } else {
        let a = (r1 * r1 - r2 * r2 + d * d) / (2. * d);
        // Clamped for tangency
        let h = (r1 * r1 - a * a).max(0.).sqrt();
        let u = sb / d;
        let foot = s + a * u;
        let offset = h * perp(u);
        let c = Candidates { direct: foot + offset, inverse: foot - offset };
        return Intersection::Pair(c);
    };
    Intersection::None { fallback, reason }
}

/// Intersect the circle around `c` with radius `r` and the line through `p0`
/// along `dir`.
///
/// When infeasible, the fallback is `c + (r, 0)`, or `c` itself for a
/// degenerate radius or direction, or a point that is not finite.
pub fn circle_line(c: Point2D, r: f64, p0: Point2D, dir: Vec2) -> Intersection {
    let n = dir.norm();
    if !is_link(r) || !n.is_finite() || n < f64::EPSILON {
        return Intersection::None { fallback: c, reason: Infeasible::DegenerateLink };
    }
    let u = dir / n;
    let foot = p0 + (c - p0).dot(&u) * u;
    let e = (c - foot).norm();
    if !e.is_finite() {
        return Intersection::None { fallback: c, reason: Infeasible::DegenerateLink };
    }
    if e > r {
        let fallback = c + r * Vec2::x();
        return Intersection::None { fallback, reason: Infeasible::TooFar };
    }
    let h = (r * r - e * e).max(0.).sqrt();
    let c = Candidates { direct: foot + h * u, inverse: foot - h * u };
    Intersection::Pair(c)
}

/// The point at distance `r1` from `s` and `r2` from `b`.
pub fn pllp(s: Point2D, r1: f64, b: Point2D, r2: f64, policy: BranchPolicy) -> Solution {
    circle_circle(s, r1, b, r2).select(policy)
}

/// The point at distance `r` from `c` on the line through `p0` along `dir`.
pub fn plp(c: Point2D, r: f64, p0: Point2D, dir: Vec2, policy: BranchPolicy) -> Solution {
    circle_line(c, r, p0, dir).select(policy)
}
