//! User, role, and permission directory state for admin screens.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use crate::net::types::{Permission, Role, User};

/// Directory state shared by the users and roles screens.
#[derive(Clone, Debug, Default)]
pub struct TeamState {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TeamState {
    pub fn upsert_user(&mut self, user: User) {
        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            *existing = user;
        } else {
            self.users.push(user);
        }
    }

    pub fn upsert_role(&mut self, role: Role) {
        if let Some(existing) = self.roles.iter_mut().find(|r| r.id == role.id) {
            *existing = role;
        } else {
            self.roles.push(role);
        }
    }

    /// Look up a user's display name for message authorship and task rows.
    pub fn user_name(&self, user_id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.name.as_str())
    }
}
