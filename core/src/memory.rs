//! # In-Memory Inventory
//!
//! An inventory held entirely in memory, built from a [`SnapshotNode`] tree.
//! It implements both [`InventoryClient`] and [`Recurser`], which makes it a
//! drop-in stand-in for a live inventory service.
//!
//! Datacenter folders are the datacenter's `Folder` children named `vm`,
//! `host`, `datastore` and `network`. Hosts of a compute resource are its
//! `HostSystem` children.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, bail};
use async_trait::async_trait;
use glob::Pattern;
use tracing::warn;
use vfind_common::inventory::{
    DatacenterFolders, Element, ManagedEntity, ManagedObjectReference, ObjectType,
};
use vfind_common::path;

use crate::ports::{InventoryClient, Recurser};

mod snapshot;

pub use snapshot::SnapshotNode;

const ROOT: usize = 0;

pub struct InMemoryInventory {
    nodes: Vec<Node>,
    index: HashMap<ManagedObjectReference, usize>,
}

struct Node {
    reference: ManagedObjectReference,
    name: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl InMemoryInventory {
    /// Builds the inventory rooted at `root`.
    ///
    /// Missing ids are generated. An id already used by an object of the same
    /// type is replaced by a generated one.
    pub fn new(root: SnapshotNode) -> Self {
        let mut inventory = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        let mut taken: HashSet<ManagedObjectReference> = HashSet::new();
        let mut counter: usize = 0;

        inventory.insert(root, None, &mut taken, &mut counter);
        inventory
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        SnapshotNode::load(path).map(Self::new)
    }

    fn insert(
        &mut self,
        snapshot: SnapshotNode,
        parent: Option<usize>,
        taken: &mut HashSet<ManagedObjectReference>,
        counter: &mut usize,
    ) -> usize {
        let SnapshotNode {
            kind,
            name,
            id,
            children,
        } = snapshot;

        let reference = match id.map(|id| ManagedObjectReference::new(kind, id)) {
            Some(reference) if !taken.contains(&reference) => reference,
            requested => {
                if let Some(duplicate) = requested {
                    warn!("duplicate reference {duplicate} for '{name}', generating a new one");
                }
                loop {
                    *counter += 1;
                    let value = format!("{}-{}", kind.id_prefix(), counter);
                    let generated = ManagedObjectReference::new(kind, value);
                    if !taken.contains(&generated) {
                        break generated;
                    }
                }
            }
        };
        taken.insert(reference.clone());

        let idx = self.nodes.len();
        self.index.insert(reference.clone(), idx);
        self.nodes.push(Node {
            reference,
            name,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_idx = self.insert(child, Some(idx), taken, counter);
            self.nodes[idx].children.push(child_idx);
        }

        idx
    }

    fn node(&self, reference: &ManagedObjectReference) -> anyhow::Result<&Node> {
        match self.index.get(reference) {
            Some(&idx) => Ok(&self.nodes[idx]),
            None => bail!("managed object {reference} not found"),
        }
    }

    fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(|&idx| &self.nodes[idx])
    }

    fn walk(
        &self,
        root: Element,
        parts: &[String],
        traverse_leafs: bool,
    ) -> anyhow::Result<Vec<Element>> {
        let node = self.node(&root.object)?;

        let Some((head, rest)) = parts.split_first() else {
            if traverse_leafs && node.reference.kind.is_traversable() {
                return Ok(self
                    .children(node)
                    .map(|child| child_element(&root, child))
                    .collect());
            }
            return Ok(vec![root]);
        };

        let pattern = Pattern::new(head).with_context(|| format!("invalid path segment '{head}'"))?;

        let mut out = Vec::new();
        for child in self.children(node).filter(|child| pattern.matches(&child.name)) {
            out.extend(self.walk(child_element(&root, child), rest, traverse_leafs)?);
        }

        Ok(out)
    }
}

fn child_element(parent: &Element, child: &Node) -> Element {
    Element::new(path::join(&parent.path, &child.name), child.reference.clone())
}

#[async_trait]
impl InventoryClient for InMemoryInventory {
    fn root_folder(&self) -> ManagedObjectReference {
        self.nodes[ROOT].reference.clone()
    }

    async fn ancestors(
        &self,
        object: &ManagedObjectReference,
    ) -> anyhow::Result<Vec<ManagedEntity>> {
        let mut entities = Vec::new();
        let mut current = Some(self.node(object)?);

        while let Some(node) = current {
            let parent = node.parent.map(|idx| &self.nodes[idx]);
            entities.push(ManagedEntity {
                reference: node.reference.clone(),
                name: node.name.clone(),
                parent: parent.map(|p| p.reference.clone()),
            });
            current = parent;
        }

        entities.reverse();
        Ok(entities)
    }

    async fn datacenter_folders(
        &self,
        datacenter: &ManagedObjectReference,
    ) -> anyhow::Result<DatacenterFolders> {
        let node = self.node(datacenter)?;
        if node.reference.kind != ObjectType::Datacenter {
            bail!("{datacenter} is not a datacenter");
        }

        let folder = |name: &str| -> anyhow::Result<ManagedObjectReference> {
            self.children(node)
                .find(|child| child.reference.kind == ObjectType::Folder && child.name == name)
                .map(|child| child.reference.clone())
                .with_context(|| format!("datacenter '{}' has no {name} folder", node.name))
        };

        Ok(DatacenterFolders {
            vm_folder: folder("vm")?,
            host_folder: folder("host")?,
            datastore_folder: folder("datastore")?,
            network_folder: folder("network")?,
        })
    }

    async fn compute_resource_hosts(
        &self,
        compute_resource: &ManagedObjectReference,
    ) -> anyhow::Result<Vec<ManagedObjectReference>> {
        let node = self.node(compute_resource)?;
        if !node.reference.kind.is_compute_resource() {
            bail!("{compute_resource} is not a compute resource");
        }

        Ok(self
            .children(node)
            .filter(|child| child.reference.kind == ObjectType::HostSystem)
            .map(|child| child.reference.clone())
            .collect())
    }
}

#[async_trait]
impl Recurser for InMemoryInventory {
    async fn recurse(
        &self,
        root: Element,
        parts: &[String],
        traverse_leafs: bool,
    ) -> anyhow::Result<Vec<Element>> {
        self.walk(root, parts, traverse_leafs)
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
