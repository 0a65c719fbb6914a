use magneto_core::MagnetoError;
use magneto_time::TimeError;
use thiserror::Error;

pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised while building a model or by the checked evaluation entry point.
///
/// The evaluator itself never fails; see [`eval_field`](crate::eval_field).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid model: {message}")]
    InvalidModel { message: String },

    #[error("Coefficient data line {line}: {message}")]
    CoefficientParse { line: usize, message: String },

    #[error("Invalid evaluation time: {source}")]
    Time {
        #[from]
        source: TimeError,
    },

    #[error("Core calculation failed: {source}")]
    Core {
        #[from]
        source: MagnetoError,
    },
}

impl FieldError {
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel {
            message: message.into(),
        }
    }

    pub fn coefficient_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CoefficientParse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model() {
        let err = FieldError::invalid_model("no epochs");
        assert_eq!(err.to_string(), "Invalid model: no epochs");
    }

    #[test]
    fn test_coefficient_parse_names_line() {
        let err = FieldError::coefficient_parse(7, "order 3 exceeds degree 2");
        assert_eq!(
            err.to_string(),
            "Coefficient data line 7: order 3 exceeds degree 2"
        );
    }

    #[test]
    fn test_from_core_and_time() {
        let err: FieldError = MagnetoError::invalid_coordinate("latitude 95").into();
        assert!(err.to_string().contains("latitude 95"));

        let err: FieldError = TimeError::InvalidDate.into();
        assert_eq!(err.to_string(), "Invalid evaluation time: Invalid date");
    }
}
