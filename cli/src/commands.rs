pub mod lookup;
pub mod ls;
pub mod scope;

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vfind_common::inventory::ObjectType;

#[derive(Parser)]
#[command(name = "vfind")]
#[command(about = "Find objects in a virtual infrastructure inventory by path.")]
pub struct CommandLine {
    /// Inventory snapshot (JSON) to search
    #[arg(short, long, env = "VFIND_INVENTORY")]
    pub inventory: PathBuf,
    /// Datacenter to scope lookups to
    #[arg(short, long, env = "VFIND_DATACENTER")]
    pub datacenter: Option<String>,
    /// Less output; repeat for results only
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List inventory objects (defaults to the current datacenter)
    Ls {
        paths: Vec<String>,
        /// Only list objects of this wire type (e.g. VirtualMachine); repeatable
        #[arg(short = 't', long = "type")]
        types: Vec<ObjectType>,
    },
    /// List every object of a kind matching the paths
    #[command(alias = "f")]
    Find { kind: Kind, paths: Vec<String> },
    /// Resolve a path to exactly one object
    #[command(alias = "g")]
    Get { kind: Kind, path: String },
    /// Resolve the default object of a kind
    #[command(alias = "d")]
    Default { kind: Kind },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Kind {
    Datacenter,
    Datastore,
    Host,
    Network,
    Pool,
    Vm,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Datacenter => "datacenter",
            Kind::Datastore => "datastore",
            Kind::Host => "host",
            Kind::Network => "network",
            Kind::Pool => "resource pool",
            Kind::Vm => "vm",
        };
        f.write_str(label)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
