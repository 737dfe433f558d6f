//! Structural errors raised while building a tag tree

/// Structural violation of the void-element rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Cannot add children to a void element <{tag}>.")]
    VoidElementChildren { tag: String },

    #[error("Cannot rename <{from}> to void element <{to}> while it has children.")]
    VoidRename { from: String, to: String },
}
