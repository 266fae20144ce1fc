//! form-tree - Composite container tree for form elements
//!
//! Arena-based tree of fields and containers. Containers own an ordered list
//! of children, each element keeps a handle to its single owning container,
//! and every structural edit updates both sides in one `&mut` call.

mod config;
mod error;
mod node;
mod operations;
mod registry;
mod tree;
mod tree_walker;

pub use config::TreeConfig;
pub use error::{FormError, FormResult};
pub use node::{ContainerData, ContainerKind, Element, FieldType, NodeData};
pub use registry::IdRegistry;
pub use tree::FormTree;
pub use tree_walker::{Children, Descendants};

/// Element identifier (index into the arena of one tree)
///
/// Carries the tag of the tree that issued it, so a handle from another
/// tree is never mistaken for a local element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId {
    pub(crate) tree: u32,
    pub(crate) index: u32,
}

impl ElementId {
    #[inline]
    pub(crate) const fn new(tree: u32, index: u32) -> Self {
        Self { tree, index }
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.tree, self.index)
    }
}
