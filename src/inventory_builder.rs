use std::collections::BTreeMap;

use tracing::debug;

use crate::types::{
    Environment, Group, GroupVars, HostVars, Inventory, RootGroup, TerraformOutput,
    TerraformOutputs,
};

/// Builds the inventory for `environment`. Groups are only emitted for outputs
/// that are present; an empty list still produces a group without hosts.
pub fn build_inventory(outputs: &TerraformOutputs, environment: Environment) -> Inventory {
    let mut children = BTreeMap::new();

    let flat_groups = [
        ("webservers", "web", &outputs.webserver_ips),
        ("appservers", "app", &outputs.appserver_ips),
        ("dbservers", "db", &outputs.dbserver_ips),
    ];

    for (group_name, prefix, output) in flat_groups {
        if let Some(output) = output {
            children.insert(
                group_name.to_string(),
                hosts_group(&output.value, |index| format!("{prefix}{index:02}")),
            );
        }
    }

    if let Some(databases) = databases_group(outputs, environment) {
        children.insert("databases".to_string(), databases);
    }

    if let Some(monitoring) = &outputs.monitoring_ips {
        children.insert(
            "monitoring".to_string(),
            hosts_group(&monitoring.value, |index| {
                format!("monitor-{environment}-{index:02}")
            }),
        );
    }

    for (name, group) in &children {
        debug!("Built group {} with {} host(s)", name, group.host_count());
    }

    Inventory {
        all: RootGroup {
            children,
            vars: GroupVars::for_environment(environment),
        },
    }
}

fn databases_group(outputs: &TerraformOutputs, environment: Environment) -> Option<Group> {
    if outputs.database_primary_ip.is_none() && outputs.database_replica_ips.is_none() {
        return None;
    }

    let mut children = BTreeMap::new();

    if let Some(TerraformOutput { value: address }) = &outputs.database_primary_ip {
        children.insert(
            "primary".to_string(),
            Group::Hosts {
                hosts: BTreeMap::from_iter(vec![(
                    format!("db-{environment}-primary"),
                    host_vars(address),
                )]),
            },
        );
    }

    if let Some(replicas) = &outputs.database_replica_ips {
        children.insert(
            "replicas".to_string(),
            hosts_group(&replicas.value, |index| {
                format!("db-{environment}-replica-{index:02}")
            }),
        );
    }

    Some(Group::Children { children })
}

/// Names hosts by their 1-based position in `addresses`.
fn hosts_group(addresses: &[String], name_for: impl Fn(usize) -> String) -> Group {
    let hosts = addresses
        .iter()
        .enumerate()
        .map(|(index, address)| (name_for(index + 1), host_vars(address)))
        .collect();

    Group::Hosts { hosts }
}

fn host_vars(address: &str) -> HostVars {
    HostVars {
        ansible_host: address.into(),
    }
}
