use std::{io, path::PathBuf};

/// Everything that can go wrong while loading a network or running an
/// experiment on it. None of these are fatal to the library; the binary
/// decides whether to abort.
#[derive(Debug, thiserror::Error)]
pub enum SimError
{
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String
    },

    #[error("page rank did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence {
        iterations: usize,
        residual: f64
    },

    #[error("no node survives vaccination ({vaccinated} of {population} removed)")]
    DegenerateGraph {
        population: usize,
        vaccinated: usize
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },

    #[error("line {line} is not a valid edge: {content:?}")]
    Parse {
        line: usize,
        content: String
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError
{
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self
    {
        Self::InvalidInput { field, reason: reason.into() }
    }
}

/// Checks that a probability or ratio lies in [0, 1].
pub(crate) fn check_unit_interval(field: &'static str, value: f64) -> Result<()>
{
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::invalid(field, format!("{value} is outside [0, 1]")))
    }
}
