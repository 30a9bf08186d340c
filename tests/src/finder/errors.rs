use std::sync::Arc;

use vfind_common::inventory::{Datacenter, ManagedObjectReference, ObjectKind, ObjectType};
use vfind_common::FindError;
use vfind_core::{Finder, InMemoryInventory, InventoryClient, SnapshotNode};

use crate::fixtures::{self, UnreachableClient};

#[tokio::test]
async fn parent_path_on_fresh_finder() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());

    for result in [
        finder.managed_object_list(&[".."]).await,
        finder.managed_object_list(&["../A"]).await,
    ] {
        assert!(matches!(result, Err(FindError::UnsupportedOperation { .. })));
    }

    // Rejected before the missing datacenter is noticed.
    assert!(matches!(
        finder.virtual_machine_list(&[".."]).await,
        Err(FindError::UnsupportedOperation { .. })
    ));
}

#[tokio::test]
async fn default_lookups_only_raise_default_errors() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());
    let err = finder.default_datacenter().await.unwrap_err();
    assert!(matches!(
        err,
        FindError::DefaultAmbiguous { kind: ObjectKind::Datacenter, ref path } if path == "*"
    ));

    let empty = Arc::new(InMemoryInventory::new(SnapshotNode::folder("Datacenters")));
    let mut finder = fixtures::finder(empty);
    let err = finder.default_datacenter().await.unwrap_err();
    assert!(matches!(err, FindError::DefaultNotSpecified { kind: ObjectKind::Datacenter, .. }));
    assert_eq!(err.to_string(), "no default datacenter found");

    let mut finder = fixtures::finder(fixtures::two_datacenters());
    let a = finder.datacenter("A").await.unwrap();
    finder.set_datacenter(a);
    for err in [
        finder.default_datastore().await.unwrap_err(),
        finder.default_network().await.unwrap_err(),
        finder.default_host_system().await.unwrap_err(),
        finder.default_resource_pool().await.unwrap_err(),
    ] {
        assert!(err.is_default_error(), "{err:?}");
    }
}

#[tokio::test]
async fn default_lookups_keep_other_errors() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());
    let err = finder.default_virtual_machine().await.unwrap_err();
    assert!(matches!(err, FindError::NoDatacenterSpecified));
}

#[tokio::test]
async fn remote_failures_pass_through() {
    let inventory = fixtures::two_datacenters();
    let client = Arc::new(UnreachableClient {
        root: inventory.root_folder(),
    });
    let mut finder = Finder::new(client, inventory);

    // Absolute paths never ask the client for ancestors.
    let dcs = finder.datacenter_list(&["/*"]).await.unwrap();
    assert_eq!(dcs.len(), 2);

    let err = finder.datacenter_list(&["A"]).await.unwrap_err();
    assert!(matches!(err, FindError::Remote(_)));
    assert_eq!(err.to_string(), "connection reset by peer");

    finder.set_datacenter(dcs[0].clone());
    let err = finder.virtual_machine("web").await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset by peer");
}

#[tokio::test]
async fn unknown_datacenter_reference_fails_remotely() {
    let mut finder = fixtures::finder(fixtures::two_datacenters());
    let ghost = Datacenter::new(
        ManagedObjectReference::new(ObjectType::Datacenter, "datacenter-404"),
        "/ghost",
    );
    finder.set_datacenter(ghost);

    let err = finder.datastore_list(&["*"]).await.unwrap_err();
    assert!(matches!(err, FindError::Remote(_)));
    assert_eq!(
        err.to_string(),
        "managed object Datacenter:datacenter-404 not found"
    );
}
