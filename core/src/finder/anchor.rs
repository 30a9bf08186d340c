use tracing::trace;
use vfind_common::inventory::{DatacenterFolders, InventoryObject, ManagedObjectReference};
use vfind_common::{FindError, Result};

use super::Finder;

/// Where a relative (`.`) path starts resolving from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// The inventory root folder.
    RootFolder,
    /// The current datacenter.
    Datacenter,
    VmFolder,
    HostFolder,
    DatastoreFolder,
    NetworkFolder,
}

impl Finder {
    pub(super) async fn resolve_anchor(
        &mut self,
        anchor: Anchor,
    ) -> Result<ManagedObjectReference> {
        let reference = match anchor {
            Anchor::RootFolder => self.client.root_folder(),
            Anchor::Datacenter => self
                .current_datacenter()
                .ok_or(FindError::NoDatacenterSpecified)?
                .reference()
                .clone(),
            Anchor::VmFolder => self.folders().await?.vm_folder.clone(),
            Anchor::HostFolder => self.folders().await?.host_folder.clone(),
            Anchor::DatastoreFolder => self.folders().await?.datastore_folder.clone(),
            Anchor::NetworkFolder => self.folders().await?.network_folder.clone(),
        };

        Ok(reference)
    }

    /// Folders of the current datacenter, fetched once per datacenter.
    async fn folders(&mut self) -> Result<&DatacenterFolders> {
        let scope = self
            .scope
            .as_mut()
            .ok_or(FindError::NoDatacenterSpecified)?;

        match scope.folders {
            Some(ref folders) => {
                trace!("datacenter folders cached for {}", scope.datacenter);
                Ok(folders)
            }
            None => {
                trace!("fetching datacenter folders for {}", scope.datacenter);
                let folders = self
                    .client
                    .datacenter_folders(scope.datacenter.reference())
                    .await?;
                Ok(scope.folders.insert(folders))
            }
        }
    }
}
