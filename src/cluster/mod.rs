//! Module for assembling the cluster specification.
//!
//! The specification carries everything bootstrap tooling needs to provision a
//! cluster from an image:
//! - metadata: api_version, kind, name.
//! - the image to run.
//! - extra environment settings and command arguments, copied verbatim.
//! - SSH access: user, password, private key, key passphrase and default port.
//! - the derived host records ([crate::topology::Host]).
//!
//! The cluster functionality is called from:
//! - the binary -> [Cluster::from_args] (build the specification from options)
//! - the binary -> [save_cluster_json] (write the specification to a file)
//! - consumers -> [read_cluster_json] (read a previously written specification)
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
