//! driveinsight: interactive terminal usage browser for remote storage
//! listings.
//!
//! A `Lister` resolves opaque folder references into entries; the builder
//! aggregates them bottom-up into an arena-backed `UsageTree`; the `Browser`
//! navigates the tree with a cursor and scroll window; the renderer turns the
//! current view into display lines for the terminal layer.

pub mod browser;
pub mod builder;
pub mod error;
pub mod lister;
pub mod render;
pub mod tree;

pub use browser::{Browser, NavEvent};
pub use builder::build_tree;
pub use error::{BuildError, ListError, SnapshotError};
pub use lister::{Entry, ItemRef, Lister, SnapshotLister};
pub use tree::{ItemKind, UsageNode, UsageTree};
