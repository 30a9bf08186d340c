use async_trait::async_trait;
use tracing::debug;
use vfind_common::inventory::{
    Datacenter, Datastore, Element, HostSystem, NetworkReference, ObjectKind, ObjectType,
    ResourcePool, VirtualMachine,
};

use super::Anchor;
use crate::ports::InventoryClient;

/// Configuration of one typed lookup.
///
/// The finder resolves paths from [`Lookup::ANCHOR`], then asks
/// [`Lookup::from_element`] to map each element. Elements mapping to `None`
/// are of another kind and are dropped.
#[async_trait]
pub trait Lookup: Sized + Send {
    const KIND: ObjectKind;
    const ANCHOR: Anchor;
    /// Whether a container the path ends on is listed rather than returned.
    const TRAVERSE_LEAFS: bool = false;
    /// Path used by the `default_*` accessors.
    const DEFAULT_PATH: &'static str = "*";

    async fn from_element(
        client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>>;
}

#[async_trait]
impl Lookup for Datacenter {
    const KIND: ObjectKind = ObjectKind::Datacenter;
    const ANCHOR: Anchor = Anchor::RootFolder;

    async fn from_element(
        _client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        Ok(match element.object.kind {
            ObjectType::Datacenter => Some(Datacenter::new(element.object, element.path)),
            _ => None,
        })
    }
}

#[async_trait]
impl Lookup for Datastore {
    const KIND: ObjectKind = ObjectKind::Datastore;
    const ANCHOR: Anchor = Anchor::DatastoreFolder;

    async fn from_element(
        _client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        Ok(match element.object.kind {
            ObjectType::Datastore => Some(Datastore::new(element.object, element.path)),
            _ => None,
        })
    }
}

#[async_trait]
impl Lookup for HostSystem {
    const KIND: ObjectKind = ObjectKind::Host;
    const ANCHOR: Anchor = Anchor::HostFolder;
    const DEFAULT_PATH: &'static str = "*/*";

    /// Compute resources stand in for their first host.
    async fn from_element(
        client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        let Element { path, object } = element;

        match object.kind {
            ObjectType::HostSystem => Ok(Some(HostSystem::new(object, path))),
            ObjectType::ComputeResource | ObjectType::ClusterComputeResource => {
                let hosts = client.compute_resource_hosts(&object).await?;
                match hosts.into_iter().next() {
                    Some(host) => Ok(Some(HostSystem::new(host, path))),
                    None => {
                        debug!("compute resource {} at {} has no hosts", object, path);
                        Ok(None)
                    }
                }
            }
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl Lookup for NetworkReference {
    const KIND: ObjectKind = ObjectKind::Network;
    const ANCHOR: Anchor = Anchor::NetworkFolder;

    async fn from_element(
        _client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        Ok(NetworkReference::from_reference(element.object, element.path))
    }
}

#[async_trait]
impl Lookup for ResourcePool {
    const KIND: ObjectKind = ObjectKind::ResourcePool;
    const ANCHOR: Anchor = Anchor::HostFolder;
    const TRAVERSE_LEAFS: bool = true;
    const DEFAULT_PATH: &'static str = "*/Resources";

    async fn from_element(
        _client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        Ok(match element.object.kind {
            ObjectType::ResourcePool => Some(ResourcePool::new(element.object, element.path)),
            _ => None,
        })
    }
}

#[async_trait]
impl Lookup for VirtualMachine {
    const KIND: ObjectKind = ObjectKind::VirtualMachine;
    const ANCHOR: Anchor = Anchor::VmFolder;

    async fn from_element(
        _client: &dyn InventoryClient,
        element: Element,
    ) -> anyhow::Result<Option<Self>> {
        Ok(match element.object.kind {
            ObjectType::VirtualMachine => Some(VirtualMachine::new(element.object, element.path)),
            _ => None,
        })
    }
}
