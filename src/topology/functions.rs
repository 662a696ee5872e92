//! The impls and functions
//!
use std::fmt;
use itertools::Itertools;
use log::*;
use anyhow::Result;
use crate::address;
use crate::localip;
use crate::topology::{Host, HostGroup, Role};

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Master => write!(f, "master"),
            Role::Node => write!(f, "node"),
        }
    }
}

/// Derive the ordered host record sequence from the master and node token
/// lists, using the default port for every token without an explicit one.
///
/// Tokens must be already-expanded literals (see
/// [crate::address::expand_address_list]). When the master list does not
/// validate, or a non-empty node list does not, the explicit input is discarded
/// and the local machine becomes the single master at the default port. The
/// only error is the fallback path failing to determine a local address.
pub fn build_hosts(
    master_tokens: &[String],
    node_tokens: &[String],
    default_port: &str,
) -> Result<Vec<Host>>
{
    if !address::is_host_list(master_tokens)
        || !(node_tokens.is_empty() || address::is_host_list(node_tokens)) {
        return local_fallback_hosts(default_port);
    };

    let mut hosts = hosts_grouped_by_port(master_tokens, Role::Master, default_port);
    if !node_tokens.is_empty() {
        hosts.append(&mut hosts_grouped_by_port(node_tokens, Role::Node, default_port));
    };
    debug!("derived {} host records from {} master and {} node tokens", hosts.len(), master_tokens.len(), node_tokens.len());
    Ok(hosts)
}

/// Group the addresses of one role by effective SSH port, preserving first-seen
/// group order. Because the group of the first token is created first, the
/// primary master group naturally leads the master records.
fn hosts_grouped_by_port(
    tokens: &[String],
    role: Role,
    default_port: &str,
) -> Vec<Host>
{
    let mut groups: Vec<HostGroup> = Vec::new();
    for token in tokens {
        let (host, port) = address::host_and_port_or_default(token, default_port);
        match groups.iter().position(|group| group.port == port) {
            Some(index) => groups[index].ips.push(host),
            None => groups.push(HostGroup { port, role, ips: vec![host] }),
        };
    }

    let mut hosts: Vec<Host> = Vec::new();
    for group in groups {
        // deduplicate in first-seen order and drop empty address strings;
        // a group left without addresses is not emitted.
        let ips: Vec<String> = group.ips.into_iter()
            .filter(|ip| !ip.is_empty())
            .unique()
            .collect();
        if ips.is_empty() {
            continue;
        };
        hosts.push(Host { ips, roles: vec![group.role], ssh_port: group.port });
    }
    hosts
}

/// The fallback topology: the local machine's default address as the single
/// master, no nodes.
fn local_fallback_hosts(
    default_port: &str,
) -> Result<Vec<Host>>
{
    let local_address = localip::local_default_ip()?;
    info!("no valid topology supplied, using local address {} as single master", local_address);
    Ok(vec![Host {
        ips: vec![local_address],
        roles: vec![Role::Master],
        ssh_port: default_port.to_string(),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn unit_build_hosts_groups_masters_and_nodes_by_port() {
        let masters = tokens(&["10.0.0.1:22", "10.0.0.2:22", "10.0.0.3:6443"]);
        let nodes = tokens(&["10.0.0.4:22"]);
        let hosts = build_hosts(&masters, &nodes, "22").unwrap();

        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts[0].ips, tokens(&["10.0.0.1", "10.0.0.2"]));
        assert_eq!(hosts[0].roles, vec![Role::Master]);
        assert_eq!(hosts[0].ssh_port, "22");
        assert_eq!(hosts[1].ips, tokens(&["10.0.0.3"]));
        assert_eq!(hosts[1].roles, vec![Role::Master]);
        assert_eq!(hosts[1].ssh_port, "6443");
        assert_eq!(hosts[2].ips, tokens(&["10.0.0.4"]));
        assert_eq!(hosts[2].roles, vec![Role::Node]);
        assert_eq!(hosts[2].ssh_port, "22");
    }
    #[test]
    fn unit_build_hosts_primary_master_group_first() {
        // the first master token carries a non-default port: its group must
        // still lead the output.
        let masters = tokens(&["10.0.0.3:6443", "10.0.0.1", "10.0.0.2:6443"]);
        let hosts = build_hosts(&masters, &[], "22").unwrap();

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].ssh_port, "6443");
        assert_eq!(hosts[0].ips, tokens(&["10.0.0.3", "10.0.0.2"]));
        assert_eq!(hosts[1].ssh_port, "22");
        assert_eq!(hosts[1].ips, tokens(&["10.0.0.1"]));
    }
    #[test]
    fn unit_build_hosts_deduplicates_addresses_within_group() {
        let masters = tokens(&["10.0.0.1", "10.0.0.1"]);
        let hosts = build_hosts(&masters, &[], "22").unwrap();

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].ips, tokens(&["10.0.0.1"]));
        assert_eq!(hosts[0].roles, vec![Role::Master]);
        assert_eq!(hosts[0].ssh_port, "22");
    }
    #[test]
    fn unit_build_hosts_same_address_on_two_ports_stays_in_both_groups() {
        let masters = tokens(&["10.0.0.1:22", "10.0.0.1:2222"]);
        let hosts = build_hosts(&masters, &[], "22").unwrap();

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].ips, tokens(&["10.0.0.1"]));
        assert_eq!(hosts[0].ssh_port, "22");
        assert_eq!(hosts[1].ips, tokens(&["10.0.0.1"]));
        assert_eq!(hosts[1].ssh_port, "2222");
    }
    #[test]
    fn unit_build_hosts_default_port_merges_with_explicit_default() {
        let masters = tokens(&["10.0.0.1", "10.0.0.2:22"]);
        let hosts = build_hosts(&masters, &[], "22").unwrap();

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].ips, tokens(&["10.0.0.1", "10.0.0.2"]));
    }
    #[test]
    fn unit_build_hosts_no_empty_ips_emitted() {
        let masters = tokens(&["10.0.0.1", "10.0.0.2"]);
        let nodes = tokens(&["10.0.0.3"]);
        let hosts = build_hosts(&masters, &nodes, "22").unwrap();

        for host in &hosts {
            assert!(!host.ips.is_empty());
            assert!(host.ips.iter().all(|ip| !ip.is_empty()));
        }
    }
    #[test]
    fn unit_build_hosts_idempotent() {
        let masters = tokens(&["10.0.0.1:22", "10.0.0.2:2222", "10.0.0.1"]);
        let nodes = tokens(&["10.0.0.9"]);
        let first = build_hosts(&masters, &nodes, "22").unwrap();
        let second = build_hosts(&masters, &nodes, "22").unwrap();

        assert_eq!(first, second);
    }
    #[test]
    fn unit_build_hosts_malformed_masters_falls_back_to_local_master() {
        let masters = tokens(&["", ""]);
        match build_hosts(&masters, &[], "22") {
            Ok(hosts) => {
                assert_eq!(hosts.len(), 1);
                assert_eq!(hosts[0].roles, vec![Role::Master]);
                assert_eq!(hosts[0].ssh_port, "22");
                assert_eq!(hosts[0].ips.len(), 1);
                assert!(!hosts[0].ips[0].is_empty());
            },
            // a test environment without a routable interface cannot resolve
            // a local default address; the error is the documented outcome.
            Err(error) => {
                assert!(error.to_string().contains("local default address"));
            },
        }
    }
    #[test]
    fn unit_build_hosts_malformed_masters_with_valid_nodes_falls_back() {
        // malformed masters take the fallback even when the node list is
        // well-formed; the node tokens are ignored entirely.
        let masters = tokens(&["not-an-address"]);
        let nodes = tokens(&["10.0.0.1"]);
        match build_hosts(&masters, &nodes, "22") {
            Ok(hosts) => {
                assert_eq!(hosts.len(), 1);
                assert_eq!(hosts[0].roles, vec![Role::Master]);
                assert_eq!(hosts[0].ssh_port, "22");
                assert_eq!(hosts[0].ips.len(), 1);
                assert!(!hosts[0].ips[0].is_empty());
            },
            Err(error) => {
                assert!(error.to_string().contains("local default address"));
            },
        }
    }
    #[test]
    fn unit_build_hosts_malformed_nodes_discards_valid_masters() {
        let masters = tokens(&["10.0.0.1"]);
        let nodes = tokens(&["not-an-address"]);
        match build_hosts(&masters, &nodes, "22") {
            Ok(hosts) => {
                assert_eq!(hosts.len(), 1);
                assert_eq!(hosts[0].roles, vec![Role::Master]);
                assert_eq!(hosts[0].ips.len(), 1);
            },
            Err(error) => {
                assert!(error.to_string().contains("local default address"));
            },
        }
    }
    #[test]
    fn unit_role_display() {
        assert_eq!(Role::Master.to_string(), "master");
        assert_eq!(Role::Node.to_string(), "node");
    }
}
