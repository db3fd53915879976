//! Project-list and project-detail state for dashboard views.
//!
//! DESIGN
//! ======
//! Separating list state from active-project state avoids accidental
//! coupling between navigation inventory and in-project editing data.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::{Milestone, Project, TaskItem};

/// Shared project list state backed by REST fetches.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub create_pending: bool,
    /// Id of a just-created project, consumed by the page to navigate there.
    pub created_project_id: Option<String>,
    pub error: Option<String>,
}

impl ProjectsState {
    /// Insert or replace a project by id; new items go to the front.
    pub fn upsert(&mut self, project: Project) {
        if let Some(existing) = self.items.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            self.items.insert(0, project);
        }
    }

    pub fn remove(&mut self, project_id: &str) {
        self.items.retain(|p| p.id != project_id);
    }
}

/// State of one opened project: header fields plus milestone and task lists.
#[derive(Clone, Debug, Default)]
pub struct ProjectDetailState {
    pub project: Option<Project>,
    pub milestones: Vec<Milestone>,
    pub tasks: Vec<TaskItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectDetailState {
    pub fn upsert_milestone(&mut self, milestone: Milestone) {
        if let Some(existing) = self.milestones.iter_mut().find(|m| m.id == milestone.id) {
            *existing = milestone;
        } else {
            self.milestones.push(milestone);
        }
    }

    pub fn upsert_task(&mut self, task: TaskItem) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        } else {
            self.tasks.push(task);
        }
    }

    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }

    /// Tasks scheduled under a milestone, or backlog tasks for `None`.
    pub fn tasks_for_milestone(&self, milestone_id: Option<&str>) -> Vec<&TaskItem> {
        self.tasks
            .iter()
            .filter(|t| t.milestone_id.as_deref() == milestone_id)
            .collect()
    }
}
