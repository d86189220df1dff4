//! Error type for map-sheet assembly.

use thiserror::Error;

use crate::plss::MalformedCodeError;
use crate::spatial::{EngineError, SelectError};

use super::template::TemplateError;

/// Errors that can occur while assembling a map sheet.
///
/// Everything here is propagated immediately; the assembler never retries
/// and never suppresses. Hosts catch this at the request boundary and
/// present a readable message.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// Attribute selection failed (missing field or engine fault).
    #[error("Attribute selection failed: {0}")]
    Select(#[from] SelectError),

    /// A reference feature carried a malformed PLSS code.
    #[error("PLSS decoding failed: {0}")]
    Plss(#[from] MalformedCodeError),

    /// A direct geometry query (centroid, extent) failed.
    #[error("Geometry query failed: {0}")]
    Geometry(#[from] EngineError),

    /// The template backend rejected a text update.
    #[error("Template update failed: {0}")]
    Template(#[from] TemplateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_error_wraps() {
        let err: AssembleError = SelectError::FieldNotFound {
            layer: "plss".to_string(),
            field: "PLSSID".to_string(),
        }
        .into();
        assert!(err
            .to_string()
            .contains("Field 'PLSSID' not found on reference layer 'plss'"));
    }

    #[test]
    fn test_plss_error_wraps() {
        let err: AssembleError = MalformedCodeError::TooShort {
            code: "XYZ".to_string(),
            length: 3,
        }
        .into();
        assert!(err.to_string().starts_with("PLSS decoding failed"));
        assert!(err.to_string().contains("XYZ"));
    }
}
