use std::sync::Arc;

use vfind_common::inventory::{InventoryObject, NetworkReference, ObjectKind, ObjectType};
use vfind_common::FindError;
use vfind_core::{Finder, InMemoryInventory, SnapshotNode};

use crate::fixtures::{self, CountingClient};

#[tokio::test]
async fn same_vm_name_in_two_datacenters() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());

    let err = finder.virtual_machine("/*/vm/web").await.unwrap_err();
    assert!(matches!(
        err,
        FindError::Ambiguous { kind: ObjectKind::VirtualMachine, ref path } if path == "/*/vm/web"
    ));

    let vm = finder.virtual_machine("/A/vm/web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/A/vm/web");
    assert_eq!(vm.reference().kind, ObjectType::VirtualMachine);
}

#[tokio::test]
async fn relative_vm_lookup_in_nested_folders() {
    let vm_folder = SnapshotNode::folder("vm")
        .child(
            SnapshotNode::folder("A").child(SnapshotNode::new(ObjectType::VirtualMachine, "web")),
        )
        .child(
            SnapshotNode::folder("B").child(SnapshotNode::new(ObjectType::VirtualMachine, "web")),
        );
    let dc = SnapshotNode::datacenter("dc1")
        .child(vm_folder)
        .child(SnapshotNode::folder("host"))
        .child(SnapshotNode::folder("datastore"))
        .child(SnapshotNode::folder("network"));
    let mut finder = fixtures::finder(Arc::new(InMemoryInventory::new(fixtures::root(vec![dc]))));

    let dc = finder.datacenter("dc1").await.unwrap();
    finder.set_datacenter(dc);

    let err = finder.virtual_machine("*/web").await.unwrap_err();
    assert!(matches!(err, FindError::Ambiguous { .. }));

    let vm = finder.virtual_machine("A/web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/dc1/vm/A/web");
}

#[tokio::test]
async fn scoped_lookup_uses_current_datacenter() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());

    let b = finder.datacenter("B").await.unwrap();
    assert_eq!(b.inventory_path(), "/B");
    finder.set_datacenter(b);

    let vm = finder.virtual_machine("web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/B/vm/web");
}

#[tokio::test]
async fn switching_datacenter_invalidates_folders() {
    let inventory = fixtures::two_datacenters();
    let client = Arc::new(CountingClient::new(inventory.clone()));
    let mut finder = Finder::new(client.clone(), inventory);

    let a = finder.datacenter("A").await.unwrap();
    let b = finder.datacenter("B").await.unwrap();

    finder.set_datacenter(a);
    let vm = finder.virtual_machine("web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/A/vm/web");
    assert_eq!(client.fetches(), 1);

    finder.virtual_machine_list(&["*"]).await.unwrap();
    finder.default_datastore().await.unwrap_err();
    assert_eq!(client.fetches(), 1, "folders should be memoized");

    finder.set_datacenter(b);
    let vm = finder.virtual_machine("web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/B/vm/web");
    assert_eq!(client.fetches(), 2);
}

#[tokio::test]
async fn host_from_cluster_keeps_cluster_path() {
    let host_folder = SnapshotNode::folder("host").child(
        SnapshotNode::new(ObjectType::ClusterComputeResource, "prod")
            .child(SnapshotNode::new(ObjectType::HostSystem, "esx-a").with_id("host-10"))
            .child(SnapshotNode::new(ObjectType::HostSystem, "esx-b").with_id("host-11"))
            .child(SnapshotNode::new(ObjectType::ResourcePool, "Resources")),
    );
    let dc = SnapshotNode::datacenter("dc1")
        .child(SnapshotNode::folder("vm"))
        .child(host_folder)
        .child(SnapshotNode::folder("datastore"))
        .child(SnapshotNode::folder("network"));
    let mut finder = fixtures::finder(Arc::new(InMemoryInventory::new(fixtures::root(vec![dc]))));
    let dc = finder.datacenter("dc1").await.unwrap();
    finder.set_datacenter(dc);

    let hosts = finder.host_system_list(&["prod"]).await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].reference().value, "host-10");
    assert_eq!(hosts[0].inventory_path(), "/dc1/host/prod");

    let pool = finder.default_resource_pool().await.unwrap();
    assert_eq!(pool.inventory_path(), "/dc1/host/prod/Resources");
}

#[tokio::test]
async fn network_list_skips_unrelated_types() {
    let network_folder = SnapshotNode::folder("network")
        .child(SnapshotNode::folder("archive"))
        .child(SnapshotNode::new(ObjectType::DistributedVirtualSwitch, "dvs"))
        .child(SnapshotNode::new(ObjectType::DistributedVirtualPortgroup, "dvs-uplinks"))
        .child(SnapshotNode::new(ObjectType::Network, "VM Network"));
    let dc = SnapshotNode::datacenter("dc1")
        .child(SnapshotNode::folder("vm"))
        .child(SnapshotNode::folder("host"))
        .child(SnapshotNode::folder("datastore"))
        .child(network_folder);
    let mut finder = fixtures::finder(Arc::new(InMemoryInventory::new(fixtures::root(vec![dc]))));
    let dc = finder.datacenter("dc1").await.unwrap();
    finder.set_datacenter(dc);

    let networks = finder.network_list(&["*"]).await.unwrap();
    let paths: Vec<&str> = networks.iter().map(|n| n.inventory_path()).collect();
    assert_eq!(paths, vec!["/dc1/network/dvs-uplinks", "/dc1/network/VM Network"]);
    assert!(matches!(networks[0], NetworkReference::DistributedVirtualPortgroup(_)));
    assert!(matches!(networks[1], NetworkReference::Network(_)));

    assert!(finder.network_list(&["archive"]).await.unwrap().is_empty());
    assert!(matches!(
        finder.network("archive").await,
        Err(FindError::NotFound { kind: ObjectKind::Network, .. })
    ));
}

#[tokio::test]
async fn single_lookup_agrees_with_list() {
    let mut finder = fixtures::finder(Arc::new(InMemoryInventory::new(fixtures::root(vec![
        fixtures::datacenter("dc1", &["web-1", "web-2", "db"]),
    ]))));
    let dc = finder.datacenter("dc1").await.unwrap();
    finder.set_datacenter(dc);

    for path in ["web-*", "db", "missing", "*", "/dc1/vm/db", "/dc1/vm"] {
        let list = finder.virtual_machine_list(&[path]).await.unwrap();
        let single = finder.virtual_machine(path).await;

        match list.len() {
            0 => assert!(matches!(single, Err(FindError::NotFound { .. })), "{path}"),
            1 => assert_eq!(single.unwrap(), list[0], "{path}"),
            _ => assert!(matches!(single, Err(FindError::Ambiguous { .. })), "{path}"),
        }
    }
}

#[tokio::test]
async fn pivot_path_under_nested_folders() {
    let root = fixtures::root(vec![
        SnapshotNode::folder("emea").child(fixtures::datacenter("dc1", &["web"])),
    ]);
    let mut finder = fixtures::finder(Arc::new(InMemoryInventory::new(root)));

    let dc = finder.datacenter("/emea/dc1").await.unwrap();
    assert_eq!(dc.inventory_path(), "/emea/dc1");
    finder.set_datacenter(dc);

    let vm = finder.virtual_machine("web").await.unwrap();
    assert_eq!(vm.inventory_path(), "/emea/dc1/vm/web");

    let listed: Vec<String> = finder
        .managed_object_list(&["vm"])
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(listed, vec!["/emea/dc1/vm/web"]);
}
