//! Word dictionary and spelling suggestions for splaydict.
//!
//! Words live in a splay tree that counts repeated insertions; suggestions
//! are every dictionary word within an edit-distance threshold of a query.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod shared;
pub mod splay_tree;
pub mod suggest;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use shared::*;
pub use splay_tree::*;
pub use suggest::*;
