//! Map-template collaborator contract.

use thiserror::Error;

/// Errors reported by a map-template backend.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The backend failed to update a text element it claims to have.
    #[error("Failed to write template element '{element}': {message}")]
    WriteFailed { element: String, message: String },
}

/// Contract for the external map-template collaborator.
///
/// A template exposes pre-named text placeholders ("County", "Quad", "PLSS",
/// and so on). The assembler writes report text onto matching names and
/// silently skips names the template does not carry.
pub trait MapTemplate {
    /// Whether the template carries a text element with this name.
    fn has_element(&self, name: &str) -> bool;

    /// Replace the text of the named element.
    fn set_text(&mut self, name: &str, value: &str) -> Result<(), TemplateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failed_display() {
        let err = TemplateError::WriteFailed {
            element: "County".to_string(),
            message: "element locked".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write template element 'County': element locked"
        );
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn _assert(_: &mut dyn MapTemplate) {}
    }
}
