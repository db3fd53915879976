use super::*;

fn permission(id: &str, name: &str) -> Permission {
    Permission { id: id.to_owned(), name: name.to_owned() }
}

fn catalog() -> Vec<Permission> {
    vec![
        permission("1", "projects:read"),
        permission("2", "projects:create"),
        permission("3", "users:read"),
        permission("4", "projects:delete"),
        permission("5", "billing"),
    ]
}

// =============================================================
// group_by_resource
// =============================================================

#[test]
fn groups_preserve_first_seen_order() {
    let groups = group_by_resource(&catalog());
    let resources: Vec<&str> = groups.iter().map(|g| g.resource.as_str()).collect();
    assert_eq!(resources, ["projects", "users", "general"]);
}

#[test]
fn entries_keep_catalog_order_within_group() {
    let groups = group_by_resource(&catalog());
    let names: Vec<&str> = groups[0].entries.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["projects:read", "projects:create", "projects:delete"]);
}

#[test]
fn names_without_separator_land_in_general() {
    let groups = group_by_resource(&catalog());
    let general = groups.iter().find(|g| g.resource == "general").expect("general group");
    assert_eq!(general.entries.len(), 1);
    assert_eq!(general.entries[0].name, "billing");
}

#[test]
fn empty_catalog_yields_no_groups() {
    assert!(group_by_resource(&[]).is_empty());
}

// =============================================================
// toggle / toggle_group
// =============================================================

#[test]
fn toggle_flips_membership() {
    let mut selected = HashSet::new();
    toggle(&mut selected, "projects:read");
    assert!(selected.contains("projects:read"));
    toggle(&mut selected, "projects:read");
    assert!(!selected.contains("projects:read"));
}

#[test]
fn toggle_group_selects_all_when_partially_selected() {
    let groups = group_by_resource(&catalog());
    let mut selected: HashSet<String> = ["projects:read".to_owned()].into_iter().collect();
    toggle_group(&mut selected, &groups[0]);
    assert!(group_fully_selected(&groups[0], &selected));
}

#[test]
fn toggle_group_clears_all_when_fully_selected() {
    let groups = group_by_resource(&catalog());
    let mut selected: HashSet<String> = groups[0].entries.iter().map(|p| p.name.clone()).collect();
    toggle_group(&mut selected, &groups[0]);
    assert!(selected.is_empty());
}

#[test]
fn group_fully_selected_is_false_for_empty_group() {
    let group = PermissionGroup { resource: "x".to_owned(), entries: Vec::new() };
    assert!(!group_fully_selected(&group, &HashSet::new()));
}

// =============================================================
// selected_in_catalog_order
// =============================================================

#[test]
fn patch_payload_follows_catalog_order() {
    let catalog = catalog();
    let selected: HashSet<String> = ["users:read".to_owned(), "projects:read".to_owned()].into_iter().collect();
    assert_eq!(selected_in_catalog_order(&catalog, &selected), ["projects:read", "users:read"]);
}
