//! The functions
//!
use std::net::{IpAddr, Ipv4Addr};
use anyhow::{Context, Result, bail};
use log::*;

// A range spanning more addresses than this is a typo, not a cluster.
const MAX_RANGE_ADDRESSES: u64 = 65536;

/// Expand every IPv4 range segment ("10.0.0.1-10.0.0.3") in a comma-separated
/// address list into its individual addresses, leaving other segments alone.
/// An empty input stays empty.
pub fn expand_address_list(
    list: &str,
) -> Result<String>
{
    if list.is_empty() {
        return Ok(String::new());
    };
    let mut expanded: Vec<String> = Vec::new();
    for segment in list.split(',') {
        match segment.split_once('-') {
            Some((start, end)) => expanded.append(&mut expand_ip_range(start, end)?),
            None => expanded.push(segment.to_string()),
        };
    }
    Ok(expanded.join(","))
}

fn expand_ip_range(
    start: &str,
    end: &str,
) -> Result<Vec<String>>
{
    let start_ip: Ipv4Addr = start.parse()
        .with_context(|| format!("Error parsing range start as IPv4 address: {}", start))?;
    let end_ip: Ipv4Addr = end.parse()
        .with_context(|| format!("Error parsing range end as IPv4 address: {}", end))?;
    let start_number = u32::from(start_ip);
    let end_number = u32::from(end_ip);
    if end_number < start_number {
        bail!("Invalid address range, end lies before start: {}-{}", start, end);
    };
    let range_size = (end_number - start_number) as u64 + 1;
    if range_size > MAX_RANGE_ADDRESSES {
        bail!("Invalid address range, {}-{} expands to {} addresses (limit: {})", start, end, range_size, MAX_RANGE_ADDRESSES);
    };
    debug!("expanding address range {}-{}: {} addresses", start, end, range_size);
    Ok((start_number..=end_number).map(|number| Ipv4Addr::from(number).to_string()).collect())
}

/// Split a comma-separated address list into tokens.
/// An empty input yields no tokens rather than a single empty token, so that an
/// unset nodes option does not produce an empty node host.
pub fn split_address_list(
    list: &str,
) -> Vec<String>
{
    if list.is_empty() {
        return Vec::new();
    };
    list.split(',').map(|token| token.to_string()).collect()
}

/// Validate that a token sequence forms a well-formed host list: it is
/// non-empty, every host part parses as an IP address, and any explicit port
/// parses as a port number.
pub fn is_host_list(
    tokens: &[String],
) -> bool
{
    if tokens.is_empty() {
        return false;
    };
    tokens.iter().all(|token| {
        let (host, _port) = host_and_port_or_default(token, "0");
        host.parse::<IpAddr>().is_ok()
    })
}

/// Split an address token into host and port.
/// The explicit port wins when present and parseable; any other shape keeps the
/// whole token as the host and adopts the default port.
pub fn host_and_port_or_default(
    token: &str,
    default_port: &str,
) -> (String, String)
{
    match token.rsplit_once(':') {
        Some((host, port)) if port.parse::<u16>().is_ok() => (host.to_string(), port.to_string()),
        _ => (token.to_string(), default_port.to_string()),
    }
}
