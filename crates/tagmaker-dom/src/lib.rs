//! tagmaker DOM - Native document engine
//!
//! Arena-backed document that tag trees are materialized into before
//! serialization. Escaping and tag serialization are delegated to html5ever.

mod document;
mod node;
mod operations;
mod serializer;

use std::sync::atomic::{AtomicU32, Ordering};

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use serializer::{HtmlSerializer, VOID_ELEMENTS};

/// Document identifier, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(u32);

impl DocumentId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Node identifier (index into the owning document's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    document: DocumentId,
    index: u32,
}

impl NodeId {
    /// Id of the arena slot `index`; arenas hold at most `u32::MAX + 1` nodes
    pub(crate) fn new(document: DocumentId, index: usize) -> DomResult<Self> {
        let index = u32::try_from(index).map_err(|_| DomError::CapacityExceeded)?;
        Ok(Self { document, index })
    }

    /// Id of a document's root node
    pub(crate) fn root(document: DocumentId) -> Self {
        Self { document, index: 0 }
    }

    /// Document whose arena holds this node
    #[inline]
    pub fn owner_document(&self) -> DocumentId {
        self.document
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }
}
