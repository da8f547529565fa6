#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RbTreeError {
    /// Asked for an element of a tree that holds none.
    #[error("the collection is empty")]
    EmptyCollection,
}
