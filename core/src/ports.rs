//! # Outbound Ports
//!
//! Contracts the finder depends on. The finder never talks to the inventory
//! service directly; implementations live in adapters such as [`crate::memory`].
//!
//! ## Rules
//! 1. Failures are reported as `anyhow::Error` and passed through untouched.
//! 2. Calls are awaited one at a time; timeouts and retries belong to the implementation.

use async_trait::async_trait;
use vfind_common::inventory::{DatacenterFolders, Element, ManagedEntity, ManagedObjectReference};

/// Session with the remote inventory service.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Reference of the inventory root folder.
    fn root_folder(&self) -> ManagedObjectReference;

    /// Ancestor chain of `object`, root first, ending with `object` itself.
    async fn ancestors(
        &self,
        object: &ManagedObjectReference,
    ) -> anyhow::Result<Vec<ManagedEntity>>;

    /// The typed folders of `datacenter`.
    async fn datacenter_folders(
        &self,
        datacenter: &ManagedObjectReference,
    ) -> anyhow::Result<DatacenterFolders>;

    /// Hosts of a compute resource or cluster, in inventory order.
    async fn compute_resource_hosts(
        &self,
        compute_resource: &ManagedObjectReference,
    ) -> anyhow::Result<Vec<ManagedObjectReference>>;
}

/// Walks the inventory below `root`, matching one glob pattern per part.
#[async_trait]
pub trait Recurser: Send + Sync {
    /// Expands `root` with the remaining `parts`.
    ///
    /// With `traverse_leafs` set, a container the path ends on is listed
    /// instead of being returned itself.
    async fn recurse(
        &self,
        root: Element,
        parts: &[String],
        traverse_leafs: bool,
    ) -> anyhow::Result<Vec<Element>>;
}
