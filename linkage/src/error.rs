use thiserror::Error;

/// Errors of an invalid mechanism definition.
///
/// Solvers never return them; they come from validating dimensions before a
/// mechanism is used, e.g. when it is loaded from a file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A link length is zero or negative
    #[error("link `{name}` must be positive, got {value}")]
    NonPositiveLink {
        /// Name of the link
        name: &'static str,
        /// The given length
        value: f64,
    },

    /// A dimension is NaN or infinite
    #[error("`{name}` is not a finite number")]
    NonFinite {
        /// Name of the dimension
        name: &'static str,
    },

    /// The two ground pivots are at the same place
    #[error("ground pivots are coincident")]
    CoincidentPivots,

    /// A sweep was requested with zero samples
    #[error("sweep needs at least one sample")]
    EmptySweep,
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { name })
    }
}

pub(crate) fn check_link(name: &'static str, value: f64) -> Result<(), Error> {
    check_finite(name, value)?;
    if value > 0. {
        Ok(())
    } else {
        Err(Error::NonPositiveLink { name, value })
    }
}
