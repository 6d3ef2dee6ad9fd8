//! contexta workspace facade.
//!
//! Provide a value for the dynamic extent of a closure or future and read it
//! anywhere inside, across `.await` points and concurrent branches:
//!
//! ```
//! use contexta::{create_context, use_context};
//!
//! let theme = create_context("light");
//! theme.run("dark", || assert_eq!(use_context(&theme), "dark"));
//! assert_eq!(use_context(&theme), "light");
//! ```
//!
//! This crate re-exports functionality from the workspace sub-crates.

pub use contexta_core::{
    Context, ContextId, PropagateExt, Scoped, Snapshot, create_context, spawn, spawn_blocking,
    spawn_local, use_context,
};

pub mod context {
    pub use contexta_core::context::*;
}

pub mod snapshot {
    pub use contexta_core::snapshot::*;
}
