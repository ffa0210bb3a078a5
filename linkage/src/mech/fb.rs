//! Planar four-bar linkages.
use super::{push_flag, push_xy, AngleBound, FourBarTy, Linkage, State, Tabular};
use crate::{
    error::{check_finite, check_link},
    pla, pllp,
    vel::{self, LoopVel},
    BranchPolicy, Error, Infeasible, LinkPoint, Point2D, Vec2, VelStatus,
};

/// Four-bar linkage.
///
/// # Parameters
///
/// + Driver pivot `o2` and follower pivot `o4` (the ground link)
/// + Driver link `l2`, from `o2` to joint `A`
/// + Coupler link `l3`, from `A` to joint `B`
/// + Follower link `l4`, from `o4` to joint `B`
/// + Tracked points on the coupler (frame `A → B`) and on the follower
///   (frame `o4 → B`)
///
/// The crank angle is absolute, measured from the global x-axis.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FourBar {
    /// Driver link pivot
    pub o2: [f64; 2],
    /// Follower link pivot
    pub o4: [f64; 2],
    /// Length of the driver link
    pub l2: f64,
    /// Length of the coupler link
    pub l3: f64,
    /// Length of the follower link
    pub l4: f64,
    /// Tracked points on the coupler
    #[cfg_attr(feature = "serde", serde(default))]
    pub coupler: Vec<LinkPoint>,
    /// Tracked points on the follower
    #[cfg_attr(feature = "serde", serde(default))]
    pub rocker: Vec<LinkPoint>,
    /// Assembly of joint `B`
    #[cfg_attr(feature = "serde", serde(default))]
    pub branch: BranchPolicy,
}

impl Default for FourBar {
    fn default() -> Self {
        Self::example()
    }
}

impl FourBar {
    /// Create a new instance from the pivots and the link lengths.
    pub const fn new(o2: [f64; 2], o4: [f64; 2], l2: f64, l3: f64, l4: f64) -> Self {
        Self {
            o2,
            o4,
            l2,
            l3,
            l4,
            coupler: Vec::new(),
            rocker: Vec::new(),
            branch: BranchPolicy::Upper,
        }
    }

    /// An example crank rocker.
    pub const fn example() -> Self {
        Self::new([0., 0.], [2.5, 0.], 1., 2.5, 3.)
    }

    /// Build with a tracked point on the coupler.
    pub fn with_coupler(mut self, p: LinkPoint) -> Self {
        self.coupler.push(p);
        self
    }

    /// Build with a tracked point on the follower.
    pub fn with_rocker(mut self, p: LinkPoint) -> Self {
        self.rocker.push(p);
        self
    }

    /// Build with a branch policy.
    pub fn with_branch(mut self, branch: BranchPolicy) -> Self {
        self.branch = branch;
        self
    }

    /// Length of the ground link.
    pub fn l1(&self) -> f64 {
        (Point2D::from(self.o4) - Point2D::from(self.o2)).norm()
    }

    /// Angle of the ground link.
    pub fn ground_angle(&self) -> f64 {
        let [x2, y2] = self.o2;
        let [x4, y4] = self.o4;
        (y4 - y2).atan2(x4 - x2)
    }

    /// Link lengths `[l1, l2, l3, l4]`.
    pub fn planar_loop(&self) -> [f64; 4] {
        [self.l1(), self.l2, self.l3, self.l4]
    }

    /// Return the type of this linkage.
    pub fn ty(&self) -> FourBarTy {
        FourBarTy::from_loop(self.planar_loop())
    }

    /// Absolute crank angle ranges where `B` can be assembled.
    pub fn angle_bound(&self) -> AngleBound {
        AngleBound::from_planar_loop(self.planar_loop()).rotate(self.ground_angle())
    }

    /// Check the dimensions.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, v) in [
            ("o2.x", self.o2[0]),
            ("o2.y", self.o2[1]),
            ("o4.x", self.o4[0]),
            ("o4.y", self.o4[1]),
        ] {
            check_finite(name, v)?;
        }
        check_link("l2", self.l2)?;
        check_link("l3", self.l3)?;
        check_link("l4", self.l4)?;
        for p in self.coupler.iter().chain(&self.rocker) {
            check_finite("link point", p.along)?;
            check_finite("link point", p.normal)?;
        }
        if self.l1() < f64::EPSILON {
            return Err(Error::CoincidentPivots);
        }
        Ok(())
    }
}

/// Velocities of a four-bar state.
#[derive(Clone, Debug, PartialEq)]
pub struct FourBarVel {
    /// Angular velocity of the driver link
    pub omega2: f64,
    /// Angular velocity of the coupler link
    pub omega3: f64,
    /// Angular velocity of the follower link
    pub omega4: f64,
    /// Velocity of joint `A`
    pub a: Vec2,
    /// Velocity of joint `B`
    pub b: Vec2,
    /// Velocities of the coupler points
    pub coupler: Vec<Vec2>,
    /// Velocities of the follower points
    pub rocker: Vec<Vec2>,
    /// Outcome of the loop-closure solve
    pub status: VelStatus,
}

/// Four-bar positions at one crank angle.
#[derive(Clone, Debug, PartialEq)]
pub struct FourBarState {
    /// Crank angle
    pub theta: f64,
    /// Driver link pivot
    pub o2: Point2D,
    /// Follower link pivot
    pub o4: Point2D,
    /// Driver and coupler joint
    pub a: Point2D,
    /// Coupler and follower joint, or its fallback when infeasible
    pub b: Point2D,
    /// Coupler points
    pub coupler: Vec<Point2D>,
    /// Follower points
    pub rocker: Vec<Point2D>,
    /// Why `B` could not be assembled
    pub infeasible: Option<Infeasible>,
    /// Velocities, if requested
    pub vel: Option<FourBarVel>,
}

impl Linkage for FourBar {
    type State = FourBarState;

    fn state(&self, theta: f64, omega: Option<f64>) -> FourBarState {
        let o2 = Point2D::from(self.o2);
        let o4 = Point2D::from(self.o4);
        let a = pla(o2, self.l2, theta);
        let sol = pllp(a, self.l3, o4, self.l4, self.branch);
        let b = sol.point();
        let coupler = self.coupler.iter().map(|p| p.locate(a, b)).collect::<Vec<_>>();
        let rocker = self.rocker.iter().map(|p| p.locate(o4, b)).collect::<Vec<_>>();
        let vel = omega.map(|omega2| {
            let va = vel::cross(omega2, a - o2);
            let lv = if sol.is_feasible() {
                vel::loop_closure(b - a, b - o4, va)
            } else {
                LoopVel::zero(VelStatus::Unresolved)
            };
            let [omega3, omega4] = lv.x;
            FourBarVel {
                omega2,
                omega3,
                omega4,
                a: va,
                b: vel::rigid(va, omega3, b - a),
                coupler: coupler.iter().map(|&p| vel::rigid(va, omega3, p - a)).collect(),
                rocker: rocker.iter().map(|&p| vel::cross(omega4, p - o4)).collect(),
                status: lv.status,
            }
        });
        FourBarState {
            theta,
            o2,
            o4,
            a,
            b,
            coupler,
            rocker,
            infeasible: sol.reason(),
            vel,
        }
    }
}

impl FourBarState {
    /// Angle of the coupler link.
    pub fn theta3(&self) -> f64 {
        let d = self.b - self.a;
        d.y.atan2(d.x)
    }

    /// Angle of the follower link.
    pub fn theta4(&self) -> f64 {
        let d = self.b - self.o4;
        d.y.atan2(d.x)
    }

    /// Joints in drawing order `[o2, A, B, o4]`.
    pub fn joints(&self) -> [Point2D; 4] {
        [self.o2, self.a, self.b, self.o4]
    }
}

impl State for FourBarState {
    fn theta(&self) -> f64 {
        self.theta
    }

    fn is_feasible(&self) -> bool {
        self.infeasible.is_none()
    }

    fn vel_status(&self) -> Option<VelStatus> {
        self.vel.as_ref().map(|v| v.status)
    }
}

impl Tabular for FourBarState {
    fn fields(&self) -> Vec<(String, f64)> {
        let mut fields = vec![("theta".to_string(), self.theta)];
        push_xy(&mut fields, "a", self.a.x, self.a.y);
        push_xy(&mut fields, "b", self.b.x, self.b.y);
        for (i, p) in self.coupler.iter().enumerate() {
            push_xy(&mut fields, &format!("coupler{i}"), p.x, p.y);
        }
        for (i, p) in self.rocker.iter().enumerate() {
            push_xy(&mut fields, &format!("rocker{i}"), p.x, p.y);
        }
        push_flag(&mut fields, "feasible", self.is_feasible());
        if let Some(vel) = &self.vel {
            fields.push(("omega2".to_string(), vel.omega2));
            fields.push(("omega3".to_string(), vel.omega3));
            fields.push(("omega4".to_string(), vel.omega4));
            push_xy(&mut fields, "v_a", vel.a.x, vel.a.y);
            push_xy(&mut fields, "v_b", vel.b.x, vel.b.y);
            for (i, v) in vel.coupler.iter().enumerate() {
                push_xy(&mut fields, &format!("v_coupler{i}"), v.x, v.y);
            }
            for (i, v) in vel.rocker.iter().enumerate() {
                push_xy(&mut fields, &format!("v_rocker{i}"), v.x, v.y);
            }
            push_flag(&mut fields, "vel_solved", vel.status.is_solved());
        }
        fields
    }
}
