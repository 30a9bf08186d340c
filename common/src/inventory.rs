//! # Inventory Model
//!
//! Types describing objects in the remote inventory tree.
//!
//! * [`reference::ObjectType`]: the closed set of wire types the resolver understands.
//! * [`reference::ManagedObjectReference`]: identity of a single remote object.
//! * [`element::Element`]: an absolute inventory path paired with a reference.
//! * [`objects`]: typed handles produced by the finder's accessors.

pub mod element;
pub mod objects;
pub mod reference;

pub use element::{DatacenterFolders, Element, ManagedEntity};
pub use objects::{
    Datacenter, Datastore, DistributedVirtualPortgroup, HostSystem, InventoryObject, Network,
    NetworkReference, ObjectKind, ResourcePool, VirtualMachine,
};
pub use reference::{ManagedObjectReference, ObjectType};
