//! Scene construction errors.

use std::error::Error;
use std::fmt;

use plume_core::ConfigError;

/// Errors from [`Scene::new`](crate::Scene::new) and
/// [`SceneConfig::validate`](crate::SceneConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    /// The derived grid configuration was rejected.
    Grid(ConfigError),
    /// A scene parameter is out of range.
    InvalidParameter {
        /// Description of the rejected parameter.
        reason: String,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidParameter { reason } => write!(f, "invalid scene parameter: {reason}"),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_is_wrapped_with_source() {
        let inner = ConfigError::InvalidCellSize { value: 0.0 };
        let err: SceneError = inner.clone().into();
        assert_eq!(err, SceneError::Grid(inner));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("grid: "));
    }

    #[test]
    fn parameter_error_has_no_source() {
        let err = SceneError::InvalidParameter {
            reason: "resolution must be at least 1".into(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("resolution"));
    }
}
