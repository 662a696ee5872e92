//! Module for deriving the machine topology from address token lists.
//!
//! This is the core of the crate: two ordered token lists (candidate masters,
//! candidate nodes) plus a default SSH port go in, and an ordered, deduplicated,
//! role-annotated, port-grouped sequence of [Host] records comes out.
//!
//! Ordering rules:
//! - The group holding the first master token (the primary master) is always
//!   the first master record.
//! - Remaining master groups follow in first-seen order, then node groups in
//!   first-seen order. Grouping uses an insertion-ordered vector, so this
//!   ordering is deliberate rather than a side effect of map iteration.
//!
//! When the master token list does not validate as a host list (or a non-empty
//! node token list does not), all explicit input is discarded and the local
//! machine's default address becomes a single-master topology.
//!
//! The topology functionality is called from:
//! - [crate::cluster::Cluster::from_args] -> [build_hosts]
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
