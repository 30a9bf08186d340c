//! # Managed Object References
//!
//! Every object in the remote inventory is addressed by a `(type, value)` pair.
//! The type half is modeled as the closed [`ObjectType`] enum so that mapping
//! code can `match` exhaustively instead of comparing type strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Wire type of a remote inventory object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Folder,
    StoragePod,
    Datacenter,
    Datastore,
    HostSystem,
    ComputeResource,
    ClusterComputeResource,
    ResourcePool,
    VirtualApp,
    VirtualMachine,
    Network,
    DistributedVirtualPortgroup,
    DistributedVirtualSwitch,
}

impl ObjectType {
    pub const ALL: [ObjectType; 13] = [
        ObjectType::Folder,
        ObjectType::StoragePod,
        ObjectType::Datacenter,
        ObjectType::Datastore,
        ObjectType::HostSystem,
        ObjectType::ComputeResource,
        ObjectType::ClusterComputeResource,
        ObjectType::ResourcePool,
        ObjectType::VirtualApp,
        ObjectType::VirtualMachine,
        ObjectType::Network,
        ObjectType::DistributedVirtualPortgroup,
        ObjectType::DistributedVirtualSwitch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Folder => "Folder",
            ObjectType::StoragePod => "StoragePod",
            ObjectType::Datacenter => "Datacenter",
            ObjectType::Datastore => "Datastore",
            ObjectType::HostSystem => "HostSystem",
            ObjectType::ComputeResource => "ComputeResource",
            ObjectType::ClusterComputeResource => "ClusterComputeResource",
            ObjectType::ResourcePool => "ResourcePool",
            ObjectType::VirtualApp => "VirtualApp",
            ObjectType::VirtualMachine => "VirtualMachine",
            ObjectType::Network => "Network",
            ObjectType::DistributedVirtualPortgroup => "DistributedVirtualPortgroup",
            ObjectType::DistributedVirtualSwitch => "DistributedVirtualSwitch",
        }
    }

    /// Containers whose contents are listed when a path ends on them and
    /// leaf traversal is enabled.
    pub fn is_traversable(&self) -> bool {
        matches!(
            self,
            ObjectType::Folder
                | ObjectType::StoragePod
                | ObjectType::Datacenter
                | ObjectType::ComputeResource
                | ObjectType::ClusterComputeResource
        )
    }

    /// Both standalone and clustered compute resources expose hosts.
    pub fn is_compute_resource(&self) -> bool {
        matches!(
            self,
            ObjectType::ComputeResource | ObjectType::ClusterComputeResource
        )
    }

    /// Prefix used for generated reference values, e.g. `vm-42`.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ObjectType::Folder | ObjectType::StoragePod => "group",
            ObjectType::Datacenter => "datacenter",
            ObjectType::Datastore => "datastore",
            ObjectType::HostSystem => "host",
            ObjectType::ComputeResource | ObjectType::ClusterComputeResource => "domain",
            ObjectType::ResourcePool => "resgroup",
            ObjectType::VirtualApp => "resgroup-v",
            ObjectType::VirtualMachine => "vm",
            ObjectType::Network => "network",
            ObjectType::DistributedVirtualPortgroup => "dvportgroup",
            ObjectType::DistributedVirtualSwitch => "dvs",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown object type: {s}"))
    }
}

/// Identity of one remote inventory object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagedObjectReference {
    #[serde(rename = "type")]
    pub kind: ObjectType,
    pub value: String,
}

impl ManagedObjectReference {
    pub fn new(kind: ObjectType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
