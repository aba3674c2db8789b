use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const ANSIBLE_USER: &str = "ubuntu";

#[derive(clap::ValueEnum, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of `terraform output -json` this tool understands. Any other
/// output is ignored. A recognized key that is present must hold an output
/// object, so `null` is rejected rather than read as absent.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TerraformOutputs {
    #[serde(default, deserialize_with = "present_output")]
    pub webserver_ips: Option<TerraformOutput<Vec<String>>>,
    #[serde(default, deserialize_with = "present_output")]
    pub appserver_ips: Option<TerraformOutput<Vec<String>>>,
    #[serde(default, deserialize_with = "present_output")]
    pub dbserver_ips: Option<TerraformOutput<Vec<String>>>,
    #[serde(default, deserialize_with = "present_output")]
    pub database_primary_ip: Option<TerraformOutput<String>>,
    #[serde(default, deserialize_with = "present_output")]
    pub database_replica_ips: Option<TerraformOutput<Vec<String>>>,
    #[serde(default, deserialize_with = "present_output")]
    pub monitoring_ips: Option<TerraformOutput<Vec<String>>>,
}

/// A single Terraform output. `type` and `sensitive` are not modelled.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TerraformOutput<T> {
    pub value: T,
}

fn present_output<'de, D, T>(deserializer: D) -> Result<Option<TerraformOutput<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    TerraformOutput::deserialize(deserializer).map(Some)
}

// Field order is the emitted key order and must stay alphabetical.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Inventory {
    pub all: RootGroup,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RootGroup {
    pub children: BTreeMap<String, Group>,
    pub vars: GroupVars,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GroupVars {
    pub ansible_ssh_private_key_file: String,
    pub ansible_user: String,
    pub environment: Environment,
}

impl GroupVars {
    pub fn for_environment(environment: Environment) -> Self {
        GroupVars {
            ansible_ssh_private_key_file: format!("~/.ssh/{environment}_key.pem"),
            ansible_user: ANSIBLE_USER.into(),
            environment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Group {
    Hosts {
        hosts: BTreeMap<String, HostVars>,
    },
    Children {
        children: BTreeMap<String, Group>,
    },
}

impl Group {
    /// Number of hosts in this group and all of its sub-groups.
    pub fn host_count(&self) -> usize {
        match self {
            Group::Hosts { hosts } => hosts.len(),
            Group::Children { children } => children.values().map(Group::host_count).sum(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HostVars {
    pub ansible_host: String,
}
