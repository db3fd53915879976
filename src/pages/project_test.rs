use super::*;
use crate::net::types::Milestone;

// =============================================================
// next_task_status
// =============================================================

#[test]
fn task_status_cycles_forward() {
    assert_eq!(next_task_status("todo"), "doing");
    assert_eq!(next_task_status("doing"), "done");
    assert_eq!(next_task_status("done"), "todo");
}

#[test]
fn unknown_status_resets_to_todo() {
    assert_eq!(next_task_status("blocked"), "todo");
}

// =============================================================
// milestone_progress
// =============================================================

fn milestone(id: &str, completed: bool) -> Milestone {
    Milestone {
        id: id.to_owned(),
        project_id: "p1".to_owned(),
        title: format!("m {id}"),
        due_date: None,
        completed,
    }
}

#[test]
fn progress_counts_completed_over_total() {
    let mut state = ProjectDetailState::default();
    state.upsert_milestone(milestone("m1", true));
    state.upsert_milestone(milestone("m2", false));
    state.upsert_milestone(milestone("m3", true));
    assert_eq!(milestone_progress(&state), (2, 3));
}

#[test]
fn progress_of_empty_project_is_zero() {
    assert_eq!(milestone_progress(&ProjectDetailState::default()), (0, 0));
}
