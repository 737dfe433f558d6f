//! DOM Node Operations
//!
//! Error type shared by tree mutation, import and serialization.

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("Node not found")]
    NotFound,
    /// Hierarchy error (e.g., inserting an ancestor, appending to text)
    #[error("Hierarchy request error")]
    HierarchyRequest,
    /// Node belongs to another document and must be imported first
    #[error("Wrong document")]
    WrongDocument,
    /// Node kind not allowed for the operation
    #[error("Invalid node type")]
    InvalidNodeType,
    /// Tag or attribute name that cannot be written as markup
    #[error("Invalid character in name {0:?}")]
    InvalidCharacter(String),
    /// Document arena is full
    #[error("Document node capacity exceeded")]
    CapacityExceeded,
    /// Writer failed or produced invalid output
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for DomError {
    fn from(err: std::io::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Check a tag or attribute name before it enters the tree.
///
/// Empty names, and names containing whitespace, quotes, angle brackets,
/// `/`, `=` or NUL, would break the serialized markup.
pub(crate) fn validate_name(name: &str) -> DomResult<()> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '\0'));
    if invalid {
        return Err(DomError::InvalidCharacter(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        for ok in ["div", "data-item-id", "aria-label", "x:y", "h1", "custom-el"] {
            assert_eq!(validate_name(ok), Ok(()), "{ok}");
        }
        for bad in ["", "a b", "a\tb", "a\"", "it's", "a>", "a<b", "a/b", "a=b", "a\0"] {
            assert_eq!(
                validate_name(bad),
                Err(DomError::InvalidCharacter(bad.to_string())),
                "{bad:?}"
            );
        }
    }
}
