//! # Finder
//!
//! Resolves shell-like inventory paths (`dc1/vm/*prod*`) to inventory objects.
//!
//! Every lookup goes through the same steps:
//! 1. The path is split into parts by [`vfind_common::path::to_parts`].
//! 2. A leading `..` is rejected. A leading `.` is replaced by the lookup's
//!    [`Anchor`], whose absolute inventory path is rebuilt from its ancestors.
//! 3. The [`Recurser`] expands the remaining parts into elements.
//! 4. Typed accessors keep the elements of the wanted kind ([`Lookup`]) and,
//!    for single results, enforce that exactly one matched.
//!
//! The finder keeps the selected datacenter and a memoized copy of its folders.
//! Lookups take `&mut self` because of that memo; share a finder across tasks
//! only behind a lock, or give each task its own.

use std::sync::Arc;

use tracing::debug;
use vfind_common::inventory::{
    Datacenter, DatacenterFolders, Datastore, Element, HostSystem, ManagedObjectReference,
    NetworkReference, ResourcePool, VirtualMachine,
};
use vfind_common::path;
use vfind_common::{FindError, Result};

use crate::ports::{InventoryClient, Recurser};

mod anchor;
mod lookup;

pub use anchor::Anchor;
pub use lookup::Lookup;

pub struct Finder {
    client: Arc<dyn InventoryClient>,
    recurser: Arc<dyn Recurser>,
    scope: Option<DatacenterScope>,
}

/// The selected datacenter and, once fetched, its folders.
///
/// Replaced as a whole so the folders can never outlive their datacenter.
struct DatacenterScope {
    datacenter: Datacenter,
    folders: Option<DatacenterFolders>,
}

macro_rules! typed_accessors {
    ($kind:ty, $list:ident, $single:ident, $default:ident) => {
        pub async fn $list(&mut self, paths: &[&str]) -> Result<Vec<$kind>> {
            self.list_of::<$kind>(paths).await
        }

        pub async fn $single(&mut self, path: &str) -> Result<$kind> {
            self.one::<$kind>(path).await
        }

        pub async fn $default(&mut self) -> Result<$kind> {
            self.default_of::<$kind>().await
        }
    };
}

impl Finder {
    pub fn new(client: Arc<dyn InventoryClient>, recurser: Arc<dyn Recurser>) -> Self {
        Self {
            client,
            recurser,
            scope: None,
        }
    }

    /// Scopes subsequent lookups to `datacenter` and drops the cached folders.
    pub fn set_datacenter(&mut self, datacenter: Datacenter) -> &mut Self {
        debug!("scoping finder to datacenter {}", datacenter);
        self.scope = Some(DatacenterScope {
            datacenter,
            folders: None,
        });
        self
    }

    pub fn current_datacenter(&self) -> Option<&Datacenter> {
        self.scope.as_ref().map(|scope| &scope.datacenter)
    }

    /// Resolves every path in order and concatenates the results.
    ///
    /// The first failing path aborts the whole call.
    pub async fn find(
        &mut self,
        anchor: Anchor,
        traverse_leafs: bool,
        paths: &[&str],
    ) -> Result<Vec<Element>> {
        let mut out = Vec::new();

        for arg in paths {
            let elements = self.list(anchor, traverse_leafs, arg).await?;
            out.extend(elements);
        }

        Ok(out)
    }

    async fn list(
        &mut self,
        anchor: Anchor,
        traverse_leafs: bool,
        arg: &str,
    ) -> Result<Vec<Element>> {
        let mut root = Element::new("/", self.client.root_folder());
        let mut parts = path::to_parts(arg);

        match parts.first().map(String::as_str) {
            Some(path::PARENT) => {
                return Err(FindError::UnsupportedOperation {
                    path: arg.to_owned(),
                });
            }
            Some(path::PIVOT) => {
                let pivot = self.resolve_anchor(anchor).await?;
                root = Element::new(self.inventory_path(&pivot).await?, pivot);
                parts.remove(0);
            }
            _ => {}
        }

        debug!(path = arg, root = %root.path, ?parts, traverse_leafs, "resolving inventory path");

        Ok(self.recurser.recurse(root, &parts, traverse_leafs).await?)
    }

    /// Absolute inventory path of `object`, built from its ancestor names.
    ///
    /// The root entity has no parent and contributes no segment.
    async fn inventory_path(&self, object: &ManagedObjectReference) -> Result<String> {
        let entities = self.client.ancestors(object).await?;

        let inventory_path = entities
            .iter()
            .filter(|entity| entity.parent.is_some())
            .fold(String::from("/"), |acc, entity| path::join(&acc, &entity.name));

        Ok(inventory_path)
    }

    /// Lists raw elements below the current datacenter, or below the root
    /// folder when no datacenter is set. No paths means `.`.
    pub async fn managed_object_list(&mut self, paths: &[&str]) -> Result<Vec<Element>> {
        let anchor = if self.scope.is_some() {
            Anchor::Datacenter
        } else {
            Anchor::RootFolder
        };

        let paths = if paths.is_empty() {
            &[path::PIVOT][..]
        } else {
            paths
        };

        self.find(anchor, true, paths).await
    }

    /// Resolves `paths` and keeps the elements that map to `K`.
    pub async fn list_of<K: Lookup>(&mut self, paths: &[&str]) -> Result<Vec<K>> {
        let elements = self.find(K::ANCHOR, K::TRAVERSE_LEAFS, paths).await?;

        let mut out = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(object) = K::from_element(self.client.as_ref(), element).await? {
                out.push(object);
            }
        }

        Ok(out)
    }

    /// Resolves `path` to exactly one `K`.
    pub async fn one<K: Lookup>(&mut self, path: &str) -> Result<K> {
        let mut found = self.list_of::<K>(&[path]).await?;

        if found.len() > 1 {
            return Err(FindError::Ambiguous {
                kind: K::KIND,
                path: path.to_owned(),
            });
        }

        found.pop().ok_or_else(|| FindError::NotFound {
            kind: K::KIND,
            path: path.to_owned(),
        })
    }

    /// Resolves the default `K`, reporting cardinality failures as default errors.
    pub async fn default_of<K: Lookup>(&mut self) -> Result<K> {
        self.one::<K>(K::DEFAULT_PATH)
            .await
            .map_err(FindError::into_default)
    }

    typed_accessors!(Datacenter, datacenter_list, datacenter, default_datacenter);
    typed_accessors!(Datastore, datastore_list, datastore, default_datastore);
    typed_accessors!(HostSystem, host_system_list, host_system, default_host_system);
    typed_accessors!(NetworkReference, network_list, network, default_network);
    typed_accessors!(ResourcePool, resource_pool_list, resource_pool, default_resource_pool);
    typed_accessors!(
        VirtualMachine,
        virtual_machine_list,
        virtual_machine,
        default_virtual_machine
    );
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
