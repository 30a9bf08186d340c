use tracing::{debug, info};
use vfind_common::config::Config;
use vfind_common::inventory::InventoryObject;
use vfind_core::Finder;

/// Scopes `finder` to the configured datacenter, or to the default one.
///
/// Without a configured datacenter, a missing or ambiguous default leaves the
/// finder unscoped; only datacenter-independent lookups will work then.
pub async fn select_datacenter(finder: &mut Finder, cfg: &Config) -> anyhow::Result<()> {
    let datacenter = match &cfg.datacenter {
        Some(path) => finder.datacenter(path).await?,
        None => match finder.default_datacenter().await {
            Ok(datacenter) => datacenter,
            Err(err) if err.is_default_error() => {
                debug!("{err}, continuing without a datacenter");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        },
    };

    info!("Using datacenter {}", datacenter.inventory_path());
    finder.set_datacenter(datacenter);
    Ok(())
}
