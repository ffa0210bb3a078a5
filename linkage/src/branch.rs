use crate::{Candidates, Point2D};

/// Rule to choose one of the two candidates of an intersection.
///
/// The rule is applied to each evaluation on its own, so a sweep stays
/// continuous only while the true solution does not cross the rule's
/// switching boundary. For example, [`BranchPolicy::Upper`] jumps to the other
/// assembly when the two candidates swap their vertical order.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum BranchPolicy {
    /// The candidate with the larger y-coordinate
    #[default]
    Upper,
    /// The candidate with the smaller y-coordinate
    Lower,
    /// The candidate with the larger x-coordinate
    Right,
    /// The candidate with the smaller x-coordinate
    Left,
    /// The candidate on the counter-clockwise side of the reference direction
    /// (circles), or ahead along the axis (circle and line)
    Direct,
    /// The mirror of [`BranchPolicy::Direct`]
    Inverse,
}

impl std::fmt::Display for BranchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl BranchPolicy {
    /// Get the lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Right => "right",
            Self::Left => "left",
            Self::Direct => "direct",
            Self::Inverse => "inverse",
        }
    }

    /// The policy choosing the other candidate.
    pub const fn mirror(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Direct => Self::Inverse,
            Self::Inverse => Self::Direct,
        }
    }

    /// Choose a candidate.
    ///
    /// Ties go to the direct candidate for `Upper` and `Right`, and to the
    /// inverse one for their mirrors, so a policy and its mirror never agree.
    pub fn pick(self, c: Candidates) -> Point2D {
        let Candidates { direct, inverse } = c;
        let direct_first = match self {
            Self::Upper => direct.y >= inverse.y,
            Self::Lower => direct.y < inverse.y,
            Self::Right => direct.x >= inverse.x,
            Self::Left => direct.x < inverse.x,
            Self::Direct => true,
            Self::Inverse => false,
        };
        if direct_first {
            direct
        } else {
            inverse
        }
    }
}
