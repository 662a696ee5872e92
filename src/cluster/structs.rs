use crate::topology::Host;

/// SSH access settings, copied verbatim from the options. Credentials are not
/// validated or used here; they travel with the specification.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Ssh {
    pub user: String,
    pub passwd: String,
    pub pk: String,
    pub pk_passwd: String,
    pub port: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClusterSpec {
    pub image: String,
    pub env: Vec<String>,
    pub cmd_args: Vec<String>,
    pub ssh: Ssh,
    pub hosts: Vec<Host>,
}

/// The complete cluster specification as written to and read from disk.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Cluster {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub spec: ClusterSpec,
}
