// src/domain/membership.rs

/// Result of adding an entry to a set the store keeps free of duplicates,
/// such as favorites or follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<T> {
    Added(T),
    AlreadyPresent,
}

/// Result of removing an entry from such a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<T> {
    Removed(T),
    Absent,
}
