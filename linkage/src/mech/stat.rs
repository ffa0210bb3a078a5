use std::f64::consts::TAU;

/// Crank angle ranges where the loop can be assembled.
///
/// Angles are measured from the ground link direction unless the bound was
/// rotated by [`AngleBound::rotate()`].
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum AngleBound {
    /// Every crank angle
    Closed,
    /// One range `[start, end]`
    Open([f64; 2]),
    /// Two disjoint ranges, one per circuit
    OpenTwo([[f64; 2]; 2]),
    /// No crank angle
    #[default]
    Invalid,
}

impl AngleBound {
    /// Name of the angle bound.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Closed => "Full rotation",
            Self::Open(_) => "Open range",
            Self::OpenTwo(_) => "Two open ranges",
            Self::Invalid => "Invalid",
        }
    }

    /// Check angle bound from a planar loop `[l1, l2, l3, l4]` (ground,
    /// driver, coupler, follower).
    pub fn from_planar_loop(mut planar_loop: [f64; 4]) -> Self {
        let [l1, l2, l3, l4] = planar_loop;
        planar_loop.sort_unstable_by(f64::total_cmp);
        if planar_loop[0] <= 0. || planar_loop[3] > planar_loop[..3].iter().sum() {
            return Self::Invalid;
        }
        let cos = |l33: f64| ((l1 * l1 + l2 * l2 - l33 * l33) / (2. * l1 * l2)).clamp(-1., 1.);
        match (l1 + l2 <= l3 + l4, (l1 - l2).abs() >= (l3 - l4).abs()) {
            (true, true) => Self::Closed,
            (true, false) => {
                let d = cos(l3 - l4).acos();
                Self::Open([d, TAU - d])
            }
            (false, true) => {
                let d = cos(l3 + l4).acos();
                Self::Open([-d, d])
            }
            (false, false) => {
                let d1 = cos(l3 - l4).acos();
                let d2 = cos(l3 + l4).acos();
                Self::OpenTwo([[d1, d2], [TAU - d2, TAU - d1]])
            }
        }
    }

    /// Shift the ranges by an angle offset.
    pub fn rotate(self, a: f64) -> Self {
        match self {
            Self::Open([s, e]) => Self::Open([s + a, e + a]),
            Self::OpenTwo(r) => Self::OpenTwo(r.map(|[s, e]| [s + a, e + a])),
            _ => self,
        }
    }

    /// Turn into range values. A closed bound is `[0, 2π]`.
    pub fn ranges(&self) -> Vec<[f64; 2]> {
        match self {
            Self::Closed => vec![[0., TAU]],
            Self::Open(r) => vec![*r],
            Self::OpenTwo(r) => r.to_vec(),
            Self::Invalid => Vec::new(),
        }
    }

    /// Return true if the crank angle lies in the bound.
    pub fn contains(&self, theta: f64) -> bool {
        match self {
            Self::Closed => true,
            Self::Invalid => false,
            _ => self.ranges().into_iter().any(|[s, e]| {
                let span = (e - s).rem_euclid(TAU);
                (theta - s).rem_euclid(TAU) <= span
            }),
        }
    }

    /// Return true if the bound is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_) | Self::OpenTwo(_))
    }

    /// Check if the data is valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Type of the four-bar linkage.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum FourBarTy {
    /// Grashof double crank (Drag-link)
    GCCC,
    /// Grashof crank rocker
    GCRR,
    /// Grashof double rocker
    GRCR,
    /// Grashof rocker crank
    GRRC,
    /// Non-Grashof triple rocker (ground link is the longest)
    RRR1,
    /// Non-Grashof triple rocker (driver link is the longest)
    RRR2,
    /// Non-Grashof triple rocker (coupler link is the longest)
    RRR3,
    /// Non-Grashof triple rocker (follower link is the longest)
    RRR4,
    /// Invalid
    Invalid,
}

impl FourBarTy {
    /// Detect from four-bar loop `[l1, l2, l3, l4]`.
    pub fn from_loop(fb_loop: [f64; 4]) -> Self {
        let mut sorted = fb_loop;
        sorted.sort_unstable_by(f64::total_cmp);
        let [s, p, q, l] = sorted;
        if s <= 0. || l > s + p + q {
            return Self::Invalid;
        }
        let (key, types) = if s + l < p + q {
            (s, [Self::GCCC, Self::GCRR, Self::GRCR, Self::GRRC])
        } else {
            (l, [Self::RRR1, Self::RRR2, Self::RRR3, Self::RRR4])
        };
        fb_loop
            .iter()
            .position(|&d| d == key)
            .map_or(Self::Invalid, |i| types[i])
    }

    /// Name of the type.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GCCC => "Grashof double crank (Drag-link, GCCC)",
            Self::GCRR => "Grashof crank rocker (GCRR)",
            Self::GRCR => "Grashof double rocker (GRCR)",
            Self::GRRC => "Grashof rocker crank (GRRC)",
            Self::RRR1 => "Non-Grashof triple rocker (RRR1)",
            Self::RRR2 => "Non-Grashof triple rocker (RRR2)",
            Self::RRR3 => "Non-Grashof triple rocker (RRR3)",
            Self::RRR4 => "Non-Grashof triple rocker (RRR4)",
            Self::Invalid => "Invalid",
        }
    }

    /// Check if the type is valid.
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Return true if the type is Grashof linkage.
    pub const fn is_grashof(&self) -> bool {
        matches!(self, Self::GCCC | Self::GCRR | Self::GRCR | Self::GRRC)
    }

    /// Return true if the driver link turns a full revolution.
    pub const fn is_crank(&self) -> bool {
        matches!(self, Self::GCCC | Self::GCRR)
    }
}
