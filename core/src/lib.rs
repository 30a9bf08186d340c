//! # vfind core
//!
//! Path based object resolution over a remote, hierarchical inventory.
//!
//! * **[`ports`]**: traits the resolver needs from the outside world (inventory
//!   client, tree walking recurser).
//! * **[`finder`]**: the [`Finder`], its root anchors and the typed accessors.
//! * **[`memory`]**: an in-memory inventory implementing both ports, used by
//!   the CLI and the tests.

pub mod finder;
pub mod memory;
pub mod ports;

pub use finder::{Anchor, Finder, Lookup};
pub use memory::{InMemoryInventory, SnapshotNode};
pub use ports::{InventoryClient, Recurser};
