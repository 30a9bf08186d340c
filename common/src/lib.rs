//! # vfind common
//!
//! Domain models shared by every `vfind` crate. Nothing in here performs IO.
//!
//! * **[`inventory`]**: object type tags, references, resolved elements and typed handles.
//! * **[`path`]**: the inventory path parser.
//! * **[`error`]**: the lookup error taxonomy.
//! * **[`config`]**: user facing configuration.

pub mod config;
pub mod error;
pub mod inventory;
pub mod path;

pub use error::{FindError, Result};
