use std::collections::HashMap;
use std::path::Path;
use clap::Parser;
use dotenv::dotenv;
use anyhow::Result;

use cluster_topology::{cluster, utility, Opts};

fn main() -> Result<()>
{
    env_logger::init();
    // load the .env file, making its settings available as environment variables.
    dotenv().ok();
    let options = Opts::parse();

    let mut changed_options: HashMap<&str, String> = HashMap::new();
    let masters = utility::set_masters(&options.masters, &mut changed_options);
    let nodes = utility::set_nodes(&options.nodes, &mut changed_options);
    let port = utility::set_port(&options.port, &mut changed_options);
    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    let cluster = cluster::Cluster::from_args(&options, &masters, &nodes, &port)?;

    match &options.output {
        Some(filepath) => cluster::save_cluster_json(&cluster, Path::new(filepath))?,
        None => println!("{}", serde_json::to_string_pretty(&cluster)?),
    };
    Ok(())
}
