//! Project, directory, and catalog REST endpoints extracted from `api`.

use crate::net::types::{Milestone, Permission, Project, Role, Service, TaskItem, User};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn project_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn project_milestones_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}/milestones")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn project_tasks_endpoint(project_id: &str) -> String {
    format!("/projects/{project_id}/tasks")
}

/// Fetch all projects visible to the current user.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/projects").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one project via `GET /projects/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_project(project_id: &str) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&project_endpoint(project_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}

/// Create a project via `POST /projects`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_project(name: &str, client_name: Option<&str>) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "client_name": client_name });
        super::post_json("/projects", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, client_name);
        Err("not available on server".to_owned())
    }
}

/// Update project fields via `PATCH /projects/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_project(project_id: &str, fields: serde_json::Value) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        super::patch_json(&project_endpoint(project_id), &fields).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, fields);
        Err("not available on server".to_owned())
    }
}

/// Delete a project via `DELETE /projects/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_project(project_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::delete_empty(&project_endpoint(project_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a project's milestones.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_milestones(project_id: &str) -> Result<Vec<Milestone>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&project_milestones_endpoint(project_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}

/// Create a milestone under a project.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_milestone(
    project_id: &str,
    title: &str,
    due_date: Option<&str>,
) -> Result<Milestone, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "due_date": due_date });
        super::post_json(&project_milestones_endpoint(project_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, title, due_date);
        Err("not available on server".to_owned())
    }
}

/// Toggle a milestone's completed flag via `PATCH /milestones/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn set_milestone_completed(milestone_id: &str, completed: bool) -> Result<Milestone, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "completed": completed });
        super::patch_json(&format!("/milestones/{milestone_id}"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (milestone_id, completed);
        Err("not available on server".to_owned())
    }
}

/// Fetch a project's tasks.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_tasks(project_id: &str) -> Result<Vec<TaskItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&project_tasks_endpoint(project_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        Err("not available on server".to_owned())
    }
}

/// Create a task under a project.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_task(
    project_id: &str,
    title: &str,
    milestone_id: Option<&str>,
    assignee_id: Option<&str>,
) -> Result<TaskItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "milestone_id": milestone_id,
            "assignee_id": assignee_id,
        });
        super::post_json(&project_tasks_endpoint(project_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, title, milestone_id, assignee_id);
        Err("not available on server".to_owned())
    }
}

/// Move a task to a new workflow status via `PATCH /tasks/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn set_task_status(task_id: &str, status: &str) -> Result<TaskItem, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        super::patch_json(&format!("/tasks/{task_id}"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task_id, status);
        Err("not available on server".to_owned())
    }
}

/// Delete a task via `DELETE /tasks/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_task(task_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::delete_empty(&format!("/tasks/{task_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = task_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the user directory.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a user account via `POST /users`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_user(name: &str, email: &str, role: Option<&str>) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "role": role });
        super::post_json("/users", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, role);
        Err("not available on server".to_owned())
    }
}

/// Update user fields (role, active flag) via `PATCH /users/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_user(user_id: &str, fields: serde_json::Value) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        super::patch_json(&format!("/users/{user_id}"), &fields).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, fields);
        Err("not available on server".to_owned())
    }
}

/// Fetch all roles.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_roles() -> Result<Vec<Role>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/roles").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the full permission catalog.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_permissions() -> Result<Vec<Permission>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/permissions").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a role via `POST /roles`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_role(name: &str) -> Result<Role, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        super::post_json("/roles", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// Replace a role's permission set via `PATCH /roles/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_role_permissions(role_id: &str, permissions: &[String]) -> Result<Role, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "permissions": permissions });
        super::patch_json(&format!("/roles/{role_id}"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role_id, permissions);
        Err("not available on server".to_owned())
    }
}

/// Fetch the service catalog.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_services() -> Result<Vec<Service>, String> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/services").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a service via `POST /services`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn create_service(name: &str, description: Option<&str>, rate: Option<f64>) -> Result<Service, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "description": description, "rate": rate });
        super::post_json("/services", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, description, rate);
        Err("not available on server".to_owned())
    }
}

/// Update service fields via `PATCH /services/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_service(service_id: &str, fields: serde_json::Value) -> Result<Service, String> {
    #[cfg(feature = "hydrate")]
    {
        super::patch_json(&format!("/services/{service_id}"), &fields).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (service_id, fields);
        Err("not available on server".to_owned())
    }
}

/// Delete a service via `DELETE /services/:id`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_service(service_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        super::delete_empty(&format!("/services/{service_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = service_id;
        Err("not available on server".to_owned())
    }
}
