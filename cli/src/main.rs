mod commands;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, Commands, ls, lookup, scope};
use terminal::{logging, print};
use vfind_common::config::Config;
use vfind_core::{Finder, InMemoryInventory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        datacenter: commands.datacenter,
        quiet: commands.quiet,
    };

    let inventory = Arc::new(InMemoryInventory::load(&commands.inventory)?);
    let mut finder = Finder::new(inventory.clone(), inventory);
    scope::select_datacenter(&mut finder, &cfg).await?;

    match commands.command {
        Commands::Ls { paths, types } => {
            print::header("inventory listing", cfg.quiet);
            ls::ls(&mut finder, &paths, &types, &cfg).await
        }
        Commands::Find { kind, paths } => {
            print::header(&format!("{kind} lookup"), cfg.quiet);
            lookup::find(&mut finder, kind, &paths, &cfg).await
        }
        Commands::Get { kind, path } => {
            print::header(&format!("{kind} lookup"), cfg.quiet);
            lookup::get(&mut finder, kind, &path, &cfg).await
        }
        Commands::Default { kind } => {
            print::header(&format!("default {kind}"), cfg.quiet);
            lookup::default(&mut finder, kind, &cfg).await
        }
    }
}
