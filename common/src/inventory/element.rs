use crate::inventory::reference::ManagedObjectReference;

/// A resolved inventory object together with its absolute inventory path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub path: String,
    pub object: ManagedObjectReference,
}

impl Element {
    pub fn new(path: impl Into<String>, object: ManagedObjectReference) -> Self {
        Self {
            path: path.into(),
            object,
        }
    }
}

/// One link of an object's ancestor chain.
///
/// `parent` is `None` only for the top-level root entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagedEntity {
    pub reference: ManagedObjectReference,
    pub name: String,
    pub parent: Option<ManagedObjectReference>,
}

/// The four typed folders every datacenter owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatacenterFolders {
    pub vm_folder: ManagedObjectReference,
    pub host_folder: ManagedObjectReference,
    pub datastore_folder: ManagedObjectReference,
    pub network_folder: ManagedObjectReference,
}
