//! Permission grouping for the role editor's checkbox matrix.
//!
//! Permissions are named `resource:action`; the editor renders one group per
//! resource with a toggle-all header, so grouping order must be stable.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use std::collections::HashSet;

use crate::net::types::Permission;

/// One checkbox group in the role editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionGroup {
    /// Resource prefix (e.g. `"projects"`).
    pub resource: String,
    /// Permissions under this resource, in catalog order.
    pub entries: Vec<Permission>,
}

/// Group a flat catalog by resource prefix, preserving first-seen group order
/// and catalog order within each group. Names without a `:` separator are
/// grouped under `"general"`.
pub fn group_by_resource(catalog: &[Permission]) -> Vec<PermissionGroup> {
    let mut groups: Vec<PermissionGroup> = Vec::new();
    for permission in catalog {
        let resource = permission
            .name
            .split_once(':')
            .map_or("general", |(resource, _)| resource);
        match groups.iter_mut().find(|g| g.resource == resource) {
            Some(group) => group.entries.push(permission.clone()),
            None => groups.push(PermissionGroup {
                resource: resource.to_owned(),
                entries: vec![permission.clone()],
            }),
        }
    }
    groups
}

/// Whether every entry of a group is in the selected set.
pub fn group_fully_selected(group: &PermissionGroup, selected: &HashSet<String>) -> bool {
    !group.entries.is_empty() && group.entries.iter().all(|p| selected.contains(&p.name))
}

/// Toggle one permission name in the selected set.
pub fn toggle(selected: &mut HashSet<String>, name: &str) {
    if !selected.remove(name) {
        selected.insert(name.to_owned());
    }
}

/// Toggle a whole group: select all entries unless all are already selected,
/// in which case deselect all.
pub fn toggle_group(selected: &mut HashSet<String>, group: &PermissionGroup) {
    if group_fully_selected(group, selected) {
        for permission in &group.entries {
            selected.remove(&permission.name);
        }
    } else {
        for permission in &group.entries {
            selected.insert(permission.name.clone());
        }
    }
}

/// Selected names in catalog order, for a stable PATCH payload.
pub fn selected_in_catalog_order(catalog: &[Permission], selected: &HashSet<String>) -> Vec<String> {
    catalog
        .iter()
        .filter(|p| selected.contains(&p.name))
        .map(|p| p.name.clone())
        .collect()
}
