//! The impls and functions
//!
use std::fs;
use std::path::Path;
use log::*;
use anyhow::{Context, Result};
use crate::address;
use crate::topology;
use crate::cluster::{Cluster, ClusterSpec, Ssh};
use crate::{Opts, API_VERSION, KIND_CLUSTER};

impl Cluster {
    pub fn new() -> Self { Default::default() }
    /// Build the cluster specification from the commandline options and the
    /// resolved masters, nodes and default port settings: expand the address
    /// lists, derive the host records, and copy the remaining fields verbatim.
    pub fn from_args(
        options: &Opts,
        masters: &str,
        nodes: &str,
        default_port: &str,
    ) -> Result<Cluster>
    {
        let masters = address::expand_address_list(masters)?;
        let nodes = address::expand_address_list(nodes)?;
        let master_tokens = address::split_address_list(&masters);
        let node_tokens = address::split_address_list(&nodes);

        let hosts = topology::build_hosts(&master_tokens, &node_tokens, default_port)?;

        Ok(Cluster {
            api_version: API_VERSION.to_string(),
            kind: KIND_CLUSTER.to_string(),
            name: options.name.clone(),
            spec: ClusterSpec {
                image: options.image.clone().unwrap_or_default(),
                env: options.env.clone(),
                cmd_args: options.cmd_args.clone(),
                ssh: Ssh {
                    user: options.user.clone(),
                    passwd: options.passwd.clone().unwrap_or_default(),
                    pk: options.pk.clone().unwrap_or_default(),
                    pk_passwd: options.pk_passwd.clone().unwrap_or_default(),
                    port: default_port.to_string(),
                },
                hosts,
            },
        })
    }
}

pub fn save_cluster_json(
    cluster: &Cluster,
    filepath: &Path,
) -> Result<()>
{
    fs::write(filepath, serde_json::to_string_pretty(cluster)
        .with_context(|| "Json serialization error")?
    ).with_context(|| format!("Error saving cluster specification: {}", filepath.display()))?;
    info!("cluster specification written: {}", filepath.display());
    Ok(())
}

pub fn read_cluster_json(
    filepath: &Path,
) -> Result<Cluster>
{
    let cluster = {
        let read_from_file = fs::read_to_string(filepath)
            .with_context(|| format!("Error reading cluster specification: {}", filepath.display()))?;
        serde_json::from_str(&read_from_file).with_context(|| "Json deserialization error")?
    };
    Ok(cluster)
}
