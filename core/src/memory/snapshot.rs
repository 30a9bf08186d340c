use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use vfind_common::inventory::ObjectType;

/// One object of an inventory snapshot and everything below it.
///
/// ```json
/// { "type": "Datacenter", "name": "dc1", "children": [
///     { "type": "Folder", "name": "vm", "children": [
///         { "type": "VirtualMachine", "name": "web", "id": "vm-42" } ] } ] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    #[serde(rename = "type")]
    pub kind: ObjectType,
    pub name: String,
    /// Reference value; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    pub fn new(kind: ObjectType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            id: None,
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self::new(ObjectType::Folder, name)
    }

    pub fn datacenter(name: impl Into<String>) -> Self {
        Self::new(ObjectType::Datacenter, name)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: SnapshotNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parsing inventory snapshot")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading inventory snapshot {}", path.display()))?;
        Self::from_json(&json)
    }
}
