//! cluster_topology
//!
//! Derives a cluster machine topology from user-supplied address specifications:
//! which addresses act as control-plane masters and which as worker nodes,
//! grouped by SSH access port. The resulting host records are embedded into a
//! cluster specification that bootstrap tooling consumes.
//!
//! The crate is organized as:
//! - [address]: expansion and validation of comma-separated address lists,
//!   including IPv4 ranges ("10.0.0.1-10.0.0.3"), and host/port splitting.
//! - [topology]: the host-list derivation itself: grouping by (role, port),
//!   deduplication, "primary master first" ordering, and the local-machine
//!   fallback when no valid topology is supplied.
//! - [localip]: discovery of the local machine's default address.
//! - [cluster]: assembly of the final cluster specification, and JSON
//!   save/read of it.
//! - [utility]: resolution of options via command line, .env file or defaults.
#[macro_use]
extern crate serde_derive;

use clap::Parser;

pub mod address;
pub mod cluster;
pub mod localip;
pub mod topology;
pub mod utility;

/// API version written into the generated cluster specification.
pub const API_VERSION: &str = "cluster.io/v2";
/// Kind written into the generated cluster specification.
pub const KIND_CLUSTER: &str = "Cluster";

pub const DEFAULT_SSH_PORT: &str = "22";
pub const DEFAULT_SSH_USER: &str = "root";
pub const DEFAULT_CLUSTER_NAME: &str = "default-cluster";

/// The commandline options.
#[derive(Debug, Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Comma-separated master address list ("host[:port]"), ranges allowed. The first address becomes the primary master.
    #[arg(short, long, value_name = "address,address,..")]
    pub masters: Option<String>,
    /// Comma-separated node address list ("host[:port]"), ranges allowed.
    #[arg(short, long, value_name = "address,address,..")]
    pub nodes: Option<String>,
    /// Default SSH port for addresses without an explicit port.
    #[arg(short, long, value_name = "port")]
    pub port: Option<String>,
    /// SSH user.
    #[arg(short, long, default_value = DEFAULT_SSH_USER)]
    pub user: String,
    /// SSH password.
    #[arg(long)]
    pub passwd: Option<String>,
    /// SSH private key file.
    #[arg(long)]
    pub pk: Option<String>,
    /// SSH private key passphrase.
    #[arg(long)]
    pub pk_passwd: Option<String>,
    /// Cluster name.
    #[arg(long, default_value = DEFAULT_CLUSTER_NAME)]
    pub name: String,
    /// Cluster image.
    #[arg(short, long)]
    pub image: Option<String>,
    /// Extra environment settings (key=value), may be specified multiple times.
    #[arg(short, long)]
    pub env: Vec<String>,
    /// Extra command arguments, may be specified multiple times.
    #[arg(long, allow_hyphen_values = true)]
    pub cmd_args: Vec<String>,
    /// Write the cluster specification to this file instead of stdout.
    #[arg(short, long, value_name = "file")]
    pub output: Option<String>,
    /// Write changed masters/nodes/port options to .env.
    #[arg(short, long)]
    pub write_dotenv: bool,
}
