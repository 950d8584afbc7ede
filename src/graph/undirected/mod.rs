//! Implementations of undirected graphs

mod arena_backed;
pub use self::arena_backed::*;
