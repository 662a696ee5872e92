//! The functions
//!
use std::net::UdpSocket;
use anyhow::{Context, Result};
use log::*;

// The probe target only steers route selection, no packet is sent.
const PROBE_ADDRESS: &str = "8.8.8.8:53";

/// Determine the address of the interface holding the default route, by
/// connecting (not transmitting on) a UDP socket and reading back the source
/// address the kernel selected for it.
pub fn local_default_ip() -> Result<String>
{
    let socket = UdpSocket::bind("0.0.0.0:0")
        .with_context(|| "Error resolving local default address: binding probe socket")?;
    socket.connect(PROBE_ADDRESS)
        .with_context(|| "Error resolving local default address: no route")?;
    let local_address = socket.local_addr()
        .with_context(|| "Error resolving local default address: reading socket address")?;
    debug!("local default address: {}", local_address.ip());
    Ok(local_address.ip().to_string())
}
