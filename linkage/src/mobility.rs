//! Mobility (degrees of freedom) of planar mechanisms.
//!
//! Each free link in the plane has three degrees of freedom. A lower pair
//! (revolute or prismatic joint) removes two, a higher pair (cam or gear
//! contact) removes one:
//!
//! `M = 3(N − 1) − 2J − H`

/// Counts of a planar mechanism.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub struct Mobility {
    /// Number of links, ground included
    pub links: u32,
    /// Number of lower pairs
    pub lower: u32,
    /// Number of higher pairs
    #[cfg_attr(feature = "serde", serde(default))]
    pub higher: u32,
}

/// Classification by mobility.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum MobilityTy {
    /// Movable with this many independent inputs
    Mechanism(u32),
    /// Statically determinate structure
    Structure,
    /// Statically indeterminate (preloaded) structure
    Preloaded,
}

impl std::fmt::Display for MobilityTy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Mechanism(1) => write!(f, "mechanism with 1 degree of freedom"),
            Self::Mechanism(n) => write!(f, "mechanism with {n} degrees of freedom"),
            Self::Structure => write!(f, "statically determinate structure"),
            Self::Preloaded => write!(f, "preloaded structure"),
        }
    }
}

impl Mobility {
    /// Create a new instance.
    pub const fn new(links: u32, lower: u32, higher: u32) -> Self {
        Self { links, lower, higher }
    }

    /// The four-bar linkage: four links, four revolute joints.
    pub const fn four_bar() -> Self {
        Self::new(4, 4, 0)
    }

    /// The slider-crank: four links, three revolute joints and a slider.
    pub const fn slider_crank() -> Self {
        Self::new(4, 4, 0)
    }

    /// Kutzbach criterion `M = 3(N − 1) − 2J − H`.
    pub fn kutzbach(&self) -> i64 {
        self.gruebler() - i64::from(self.higher)
    }

    /// Gruebler criterion, lower pairs only: `M = 3(N − 1) − 2J`.
    pub fn gruebler(&self) -> i64 {
        3 * (i64::from(self.links) - 1) - 2 * i64::from(self.lower)
    }

    /// Classify by the Kutzbach mobility.
    pub fn ty(&self) -> MobilityTy {
        match self.kutzbach() {
            m if m > 0 => MobilityTy::Mechanism(u32::try_from(m).unwrap_or(u32::MAX)),
            0 => MobilityTy::Structure,
            _ => MobilityTy::Preloaded,
        }
    }
}
