use anyhow::anyhow;
use vfind_common::config::Config;
use vfind_common::inventory::{
    Datacenter, Datastore, HostSystem, InventoryObject, ManagedObjectReference, NetworkReference,
    ResourcePool, VirtualMachine,
};
use vfind_common::FindError;
use vfind_core::{Finder, Lookup};

use super::Kind;
use crate::terminal::print;

type Row = (String, ManagedObjectReference);

enum Mode<'a> {
    List(&'a [&'a str]),
    One(&'a str),
    Default,
}

pub async fn find(
    finder: &mut Finder,
    kind: Kind,
    paths: &[String],
    cfg: &Config,
) -> anyhow::Result<()> {
    let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    let rows = dispatch(finder, kind, Mode::List(&paths)).await?;

    if rows.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print_rows(&rows, cfg);
    print::summary(rows.len(), cfg.quiet);
    Ok(())
}

pub async fn get(finder: &mut Finder, kind: Kind, path: &str, cfg: &Config) -> anyhow::Result<()> {
    let rows = dispatch(finder, kind, Mode::One(path)).await?;
    print_rows(&rows, cfg);
    Ok(())
}

pub async fn default(finder: &mut Finder, kind: Kind, cfg: &Config) -> anyhow::Result<()> {
    match dispatch(finder, kind, Mode::Default).await {
        Ok(rows) => {
            print_rows(&rows, cfg);
            Ok(())
        }
        Err(err) if err.is_default_error() => Err(anyhow!(
            "{err} (no {kind} was selected; use `get {kind} <PATH>` to pick one)"
        )),
        Err(err) => Err(err.into()),
    }
}

async fn dispatch(finder: &mut Finder, kind: Kind, mode: Mode<'_>) -> Result<Vec<Row>, FindError> {
    match kind {
        Kind::Datacenter => run::<Datacenter>(finder, mode).await,
        Kind::Datastore => run::<Datastore>(finder, mode).await,
        Kind::Host => run::<HostSystem>(finder, mode).await,
        Kind::Network => run::<NetworkReference>(finder, mode).await,
        Kind::Pool => run::<ResourcePool>(finder, mode).await,
        Kind::Vm => run::<VirtualMachine>(finder, mode).await,
    }
}

async fn run<K>(finder: &mut Finder, mode: Mode<'_>) -> Result<Vec<Row>, FindError>
where
    K: Lookup + InventoryObject,
{
    let objects: Vec<K> = match mode {
        Mode::List(paths) => finder.list_of::<K>(paths).await?,
        Mode::One(path) => vec![finder.one::<K>(path).await?],
        Mode::Default => vec![finder.default_of::<K>().await?],
    };

    Ok(objects
        .iter()
        .map(|object| (object.inventory_path().to_owned(), object.reference().clone()))
        .collect())
}

fn print_rows(rows: &[Row], cfg: &Config) {
    for (path, reference) in rows {
        print::object_line(path, reference, cfg.quiet);
    }
}
