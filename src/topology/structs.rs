/// The role a host group plays in the cluster.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    Node,
}

/// One emitted host record: every address sharing one role and SSH port.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Host {
    pub ips: Vec<String>,
    pub roles: Vec<Role>,
    pub ssh_port: String,
}

/// Intermediate per-port aggregation of addresses, before deduplication and
/// emission as a [Host].
#[derive(Debug)]
pub struct HostGroup {
    pub port: String,
    pub role: Role,
    pub ips: Vec<String>,
}
