use crate::path::NodePath;
use thiserror::Error;

pub type TreeResult<T> = Result<T, TreeError>;

/// Addressing failures when reading or splicing the tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("No element at {0}")]
    NotFound(NodePath),

    #[error("Element at {0} is not a container")]
    NotAContainer(NodePath),

    #[error("Index {index} out of bounds for container {parent} with {len} children")]
    IndexOutOfBounds {
        parent: NodePath,
        index: usize,
        len: usize,
    },

    #[error("The root container cannot be removed")]
    RootRemoval,
}
