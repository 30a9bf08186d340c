//! # Typed Inventory Handles
//!
//! Handles returned by the finder's typed accessors. Each one carries the
//! reference of the remote object and the absolute inventory path it was
//! resolved at. Handles are only ever built from a resolved element, so the
//! path annotation always matches what the traversal reported.

use std::fmt;

use crate::inventory::reference::{ManagedObjectReference, ObjectType};

/// Common accessors for every typed handle.
pub trait InventoryObject {
    fn reference(&self) -> &ManagedObjectReference;
    fn inventory_path(&self) -> &str;
}

/// Category a typed lookup resolves to, used to label lookup errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Datacenter,
    Datastore,
    Host,
    Network,
    ResourcePool,
    VirtualMachine,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::Datacenter => "datacenter",
            ObjectKind::Datastore => "datastore",
            ObjectKind::Host => "host",
            ObjectKind::Network => "network",
            ObjectKind::ResourcePool => "resource pool",
            ObjectKind::VirtualMachine => "vm",
        };
        f.write_str(label)
    }
}

macro_rules! inventory_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            reference: ManagedObjectReference,
            inventory_path: String,
        }

        impl $name {
            pub fn new(
                reference: ManagedObjectReference,
                inventory_path: impl Into<String>,
            ) -> Self {
                Self {
                    reference,
                    inventory_path: inventory_path.into(),
                }
            }
        }

        impl InventoryObject for $name {
            fn reference(&self) -> &ManagedObjectReference {
                &self.reference
            }

            fn inventory_path(&self) -> &str {
                &self.inventory_path
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} ({})", self.inventory_path, self.reference)
            }
        }
    };
}

inventory_object!(
    /// A datacenter; the unit lookups are scoped to.
    Datacenter
);
inventory_object!(Datastore);
inventory_object!(
    /// A host. When resolved through a compute resource, the path annotation
    /// is the compute resource's path.
    HostSystem
);
inventory_object!(Network);
inventory_object!(DistributedVirtualPortgroup);
inventory_object!(ResourcePool);
inventory_object!(VirtualMachine);

/// Anything a virtual NIC can be backed by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkReference {
    Network(Network),
    DistributedVirtualPortgroup(DistributedVirtualPortgroup),
}

impl NetworkReference {
    /// Classifies a reference by its wire type. Other types are not networks.
    pub fn from_reference(
        reference: ManagedObjectReference,
        inventory_path: impl Into<String>,
    ) -> Option<Self> {
        match reference.kind {
            ObjectType::Network => Some(NetworkReference::Network(Network::new(
                reference,
                inventory_path,
            ))),
            ObjectType::DistributedVirtualPortgroup => Some(
                NetworkReference::DistributedVirtualPortgroup(DistributedVirtualPortgroup::new(
                    reference,
                    inventory_path,
                )),
            ),
            ObjectType::Folder
            | ObjectType::StoragePod
            | ObjectType::Datacenter
            | ObjectType::Datastore
            | ObjectType::HostSystem
            | ObjectType::ComputeResource
            | ObjectType::ClusterComputeResource
            | ObjectType::ResourcePool
            | ObjectType::VirtualApp
            | ObjectType::VirtualMachine
            | ObjectType::DistributedVirtualSwitch => None,
        }
    }
}

impl InventoryObject for NetworkReference {
    fn reference(&self) -> &ManagedObjectReference {
        match self {
            NetworkReference::Network(n) => n.reference(),
            NetworkReference::DistributedVirtualPortgroup(pg) => pg.reference(),
        }
    }

    fn inventory_path(&self) -> &str {
        match self {
            NetworkReference::Network(n) => n.inventory_path(),
            NetworkReference::DistributedVirtualPortgroup(pg) => pg.inventory_path(),
        }
    }
}

impl fmt::Display for NetworkReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkReference::Network(n) => fmt::Display::fmt(n, f),
            NetworkReference::DistributedVirtualPortgroup(pg) => fmt::Display::fmt(pg, f),
        }
    }
}
