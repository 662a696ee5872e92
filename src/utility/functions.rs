//! The functions
//!
use std::{collections::HashMap, env, fs, io::Write};
use log::*;
use anyhow::{Context, Result};
use crate::DEFAULT_SSH_PORT;

pub fn set_masters(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    // is --masters/-m set?
    let masters = if option.is_some() {
        info!("masters argument set: using: {}", &option.as_ref().unwrap());
        // insert into changed_options to be written later on.
        changed_options.insert("TOPOLOGY_MASTERS", option.as_ref().unwrap().to_string());
        option.clone().unwrap()
    } else {
        // is the environment variable TOPOLOGY_MASTERS set (via dotenv().ok())?
        match env::var("TOPOLOGY_MASTERS") {
            Ok(set_var) => {
                info!("masters not set: set via .env: TOPOLOGY_MASTERS: {}", set_var);
                changed_options.insert("TOPOLOGY_MASTERS", set_var.to_owned());
                set_var
            }
            Err(_e) => {
                // an empty master list triggers the local machine fallback.
                info!("masters not set: and not set via .env: using local machine fallback");
                String::new()
            }
        }
    };
    masters
}

pub fn set_nodes(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    // is --nodes/-n set?
    let nodes = if option.is_some() {
        info!("nodes argument set: using: {}", &option.as_ref().unwrap());
        // insert into changed_options to be written later on.
        changed_options.insert("TOPOLOGY_NODES", option.as_ref().unwrap().to_string());
        option.clone().unwrap()
    } else {
        // is the environment variable TOPOLOGY_NODES set (via dotenv().ok())?
        match env::var("TOPOLOGY_NODES") {
            Ok(set_var) => {
                info!("nodes not set: set via .env: TOPOLOGY_NODES: {}", set_var);
                changed_options.insert("TOPOLOGY_NODES", set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("nodes not set: and not set via .env: no nodes");
                String::new()
            }
        }
    };
    nodes
}

pub fn set_port(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    // is --port/-p set?
    let port = if option.is_some() {
        info!("port argument set: using: {}", &option.as_ref().unwrap());
        // insert into changed_options to be written later on.
        changed_options.insert("TOPOLOGY_SSH_PORT", option.as_ref().unwrap().to_string());
        option.clone().unwrap()
    } else {
        // is the environment variable TOPOLOGY_SSH_PORT set (via dotenv().ok())?
        match env::var("TOPOLOGY_SSH_PORT") {
            Ok(set_var) => {
                info!("port not set: set via .env: TOPOLOGY_SSH_PORT: {}", set_var);
                changed_options.insert("TOPOLOGY_SSH_PORT", set_var.to_owned());
                set_var
            }
            Err(_e) => {
                info!("port not set: and not set via .env: using DEFAULT_SSH_PORT: {}", DEFAULT_SSH_PORT);
                DEFAULT_SSH_PORT.to_string()
            }
        }
    };
    port
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "Error writing .env file: .env")?;

        for (key, value) in changed_options {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_set_masters_prefers_argument() {
        let mut changed_options = HashMap::new();
        let masters = set_masters(&Some("10.0.0.1,10.0.0.2".to_string()), &mut changed_options);
        assert_eq!(masters, "10.0.0.1,10.0.0.2");
        assert_eq!(changed_options.get("TOPOLOGY_MASTERS"), Some(&"10.0.0.1,10.0.0.2".to_string()));
    }
    #[test]
    fn unit_set_port_prefers_argument() {
        let mut changed_options = HashMap::new();
        let port = set_port(&Some("2222".to_string()), &mut changed_options);
        assert_eq!(port, "2222");
        assert_eq!(changed_options.get("TOPOLOGY_SSH_PORT"), Some(&"2222".to_string()));
    }
    #[test]
    fn unit_set_nodes_prefers_argument() {
        let mut changed_options = HashMap::new();
        let nodes = set_nodes(&Some("10.0.0.3".to_string()), &mut changed_options);
        assert_eq!(nodes, "10.0.0.3");
        assert_eq!(changed_options.get("TOPOLOGY_NODES"), Some(&"10.0.0.3".to_string()));
    }
}
