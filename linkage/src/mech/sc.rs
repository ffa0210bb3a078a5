//! Offset slider-crank linkages.
use super::{push_flag, push_xy, Linkage, State, Tabular};
use crate::{
    error::{check_finite, check_link},
    perp, pla, plp, unit,
    vel::{self, LoopVel},
    BranchPolicy, Error, Infeasible, LinkPoint, Point2D, Vec2, VelStatus,
};

#[cfg(feature = "serde")]
fn forward() -> BranchPolicy {
    BranchPolicy::Direct
}

/// Slider-crank linkage with an offset slider axis.
///
/// # Parameters
///
/// + Crank pivot `a`
/// + Crank `r2`, from `a` to the crank pin `B`
/// + Connecting rod `r3`, from `B` to the slider `C`
/// + Offset of the slider axis, measured to the clockwise side of the axis
///   direction (below the pivot for a horizontal axis)
/// + Axis angle, zero for a horizontal axis
/// + Tracked points on the rod (frame `B → C`)
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCrank {
    /// Crank pivot
    pub a: [f64; 2],
    /// Length of the crank
    pub r2: f64,
    /// Length of the connecting rod
    pub r3: f64,
    /// Offset of the slider axis
    pub offset: f64,
    /// Angle of the slider axis
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis: f64,
    /// Tracked points on the connecting rod
    #[cfg_attr(feature = "serde", serde(default))]
    pub rod: Vec<LinkPoint>,
    /// Assembly of the slider, ahead along the axis by default
    #[cfg_attr(feature = "serde", serde(default = "forward"))]
    pub branch: BranchPolicy,
}

impl Default for SliderCrank {
    fn default() -> Self {
        Self::example()
    }
}

impl SliderCrank {
    /// Create a new instance with a horizontal axis.
    pub const fn new(a: [f64; 2], r2: f64, r3: f64, offset: f64) -> Self {
        Self {
            a,
            r2,
            r3,
            offset,
            axis: 0.,
            rod: Vec::new(),
            branch: BranchPolicy::Direct,
        }
    }

    /// An example offset slider-crank, with a point `N` on the rod and a
    /// point `D` projected from it.
    pub fn example() -> Self {
        Self::new([0., 0.], 50., 140., 20.)
            .with_rod(LinkPoint::new(80., 0.))
            .with_rod(LinkPoint::new(80., -50.))
    }

    /// Build with a tracked point on the rod.
    pub fn with_rod(mut self, p: LinkPoint) -> Self {
        self.rod.push(p);
        self
    }

    /// Build with a slider axis angle.
    pub fn with_axis(mut self, axis: f64) -> Self {
        self.axis = axis;
        self
    }

    /// Build with a branch policy.
    pub fn with_branch(mut self, branch: BranchPolicy) -> Self {
        self.branch = branch;
        self
    }

    /// Unit direction of the slider axis.
    pub fn axis_dir(&self) -> Vec2 {
        unit(self.axis)
    }

    /// Foot of the crank pivot on the slider axis.
    pub fn axis_origin(&self) -> Point2D {
        Point2D::from(self.a) - self.offset * perp(self.axis_dir())
    }

    /// Return true if the crank turns a full revolution.
    pub fn is_full_rotation(&self) -> bool {
        self.r3 - self.r2 >= self.offset.abs()
    }

    /// Slider travel between the two dead-center positions, if the crank
    /// turns a full revolution.
    pub fn stroke(&self) -> Option<f64> {
        if !self.is_full_rotation() {
            return None;
        }
        let e2 = self.offset * self.offset;
        let far = ((self.r3 + self.r2).powi(2) - e2).sqrt();
        let near = ((self.r3 - self.r2).powi(2) - e2).sqrt();
        Some(far - near)
    }

    /// Check the dimensions.
    pub fn validate(&self) -> Result<(), Error> {
        check_finite("a.x", self.a[0])?;
        check_finite("a.y", self.a[1])?;
        check_link("r2", self.r2)?;
        check_link("r3", self.r3)?;
        check_finite("offset", self.offset)?;
        check_finite("axis", self.axis)?;
        for p in &self.rod {
            check_finite("link point", p.along)?;
            check_finite("link point", p.normal)?;
        }
        Ok(())
    }
}

/// Velocities of a slider-crank state.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCrankVel {
    /// Angular velocity of the crank
    pub omega2: f64,
    /// Angular velocity of the connecting rod
    pub omega3: f64,
    /// Signed slider speed along the axis
    pub slider: f64,
    /// Velocity of the crank pin
    pub b: Vec2,
    /// Velocity of the slider
    pub c: Vec2,
    /// Velocities of the rod points
    pub rod: Vec<Vec2>,
    /// Outcome of the loop-closure solve
    pub status: VelStatus,
}

/// Slider-crank positions at one crank angle.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCrankState {
    /// Crank angle
    pub theta: f64,
    /// Crank pivot
    pub a: Point2D,
    /// Crank pin
    pub b: Point2D,
    /// Slider, or its fallback when infeasible
    pub c: Point2D,
    /// Rod points
    pub rod: Vec<Point2D>,
    /// Signed slider position along the axis, from the foot of the pivot
    pub slider: f64,
    /// Why the slider could not be assembled
    pub infeasible: Option<Infeasible>,
    /// Velocities, if requested
    pub vel: Option<SliderCrankVel>,
}

impl Linkage for SliderCrank {
    type State = SliderCrankState;

    fn state(&self, theta: f64, omega: Option<f64>) -> SliderCrankState {
        let a = Point2D::from(self.a);
        let u = self.axis_dir();
        let p0 = self.axis_origin();
        let b = pla(a, self.r2, theta);
        let sol = plp(b, self.r3, p0, u, self.branch);
        let c = sol.point();
        let rod = self.rod.iter().map(|p| p.locate(b, c)).collect::<Vec<_>>();
        let vel = omega.map(|omega2| {
            let vb = vel::cross(omega2, b - a);
            let lv = if sol.is_feasible() {
                vel::slider_closure(c - b, u, vb)
            } else {
                LoopVel::zero(VelStatus::Unresolved)
            };
            let [omega3, slider] = lv.x;
            SliderCrankVel {
                omega2,
                omega3,
                slider,
                b: vb,
                c: slider * u,
                rod: rod.iter().map(|&p| vel::rigid(vb, omega3, p - b)).collect(),
                status: lv.status,
            }
        });
        SliderCrankState {
            theta,
            a,
            b,
            c,
            rod,
            slider: (c - p0).dot(&u),
            infeasible: sol.reason(),
            vel,
        }
    }
}

impl State for SliderCrankState {
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

impl Tabular for SliderCrankState {
    fn fields(&self) -> Vec<(String, f64)> {
        let mut fields = vec![("theta".to_string(), self.theta)];
        push_xy(&mut fields, "b", self.b.x, self.b.y);
        push_xy(&mut fields, "c", self.c.x, self.c.y);
        for (i, p) in self.rod.iter().enumerate() {
            push_xy(&mut fields, &format!("rod{i}"), p.x, p.y);
        }
        fields.push(("slider".to_string(), self.slider));
        push_flag(&mut fields, "feasible", self.is_feasible());
        if let Some(vel) = &self.vel {
            fields.push(("omega2".to_string(), vel.omega2));
            fields.push(("omega3".to_string(), vel.omega3));
            fields.push(("v_slider".to_string(), vel.slider));
            push_xy(&mut fields, "v_b", vel.b.x, vel.b.y);
            for (i, v) in vel.rod.iter().enumerate() {
                push_xy(&mut fields, &format!("v_rod{i}"), v.x, v.y);
            }
            push_flag(&mut fields, "vel_solved", vel.status.is_solved());
        }
        fields
    }
}
