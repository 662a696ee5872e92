//! Module for address list handling.
//!
//! An address list is a comma-separated string of "host[:port]" tokens, where a
//! segment may also be an IPv4 range "start-end" that expands to every address
//! in the inclusive range. The functions here normalize such a list into flat
//! token sequences, validate that a token sequence forms a well-formed host
//! list, and split an individual token into its host and port parts.
//!
//! The address functionality is called from:
//! - [crate::cluster::Cluster::from_args] (expand and split the masters and nodes options)
//! - [crate::topology::build_hosts] (host list validation, host/port splitting)
mod functions;

pub use functions::*;
