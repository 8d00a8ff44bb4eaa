use super::*;

fn task(id: u64, title: &str, completed: bool) -> Task {
    Task {
        id: TaskId::from(id),
        title: title.to_owned(),
        completed,
    }
}

fn loaded(tasks: Vec<Task>) -> TaskListState {
    let mut state = TaskListState::default();
    state.replace_all(tasks);
    state
}

// =============================================================
// Defaults and load status
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = TaskListState::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.tasks.is_empty());
    assert!(state.draft.is_empty());
    assert!(state.editing.is_empty());
}

#[test]
fn replace_all_marks_loaded() {
    let state = loaded(vec![task(1, "milk", false)]);
    assert_eq!(state.status, LoadStatus::Loaded);
    assert_eq!(state.tasks.len(), 1);
}

#[test]
fn replace_all_drops_edits_for_vanished_tasks() {
    let mut state = loaded(vec![task(1, "milk", false), task(2, "bread", false)]);
    state.begin_edit(&TaskId::from(1));
    state.begin_edit(&TaskId::from(2));
    state.replace_all(vec![task(2, "bread", false)]);
    assert!(!state.is_editing(&TaskId::from(1)));
    assert!(state.is_editing(&TaskId::from(2)));
}

#[test]
fn mark_load_failed_sets_failed() {
    let mut state = TaskListState::default();
    state.mark_load_failed();
    assert_eq!(state.status, LoadStatus::Failed);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn append_keeps_order() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    state.append(task(2, "bread", false));
    let ids: Vec<_> = state.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn replace_swaps_matching_task_only() {
    let mut state = loaded(vec![task(1, "milk", false), task(2, "bread", false)]);
    assert!(state.replace(task(1, "milk", true)));
    assert_eq!(state.tasks, vec![task(1, "milk", true), task(2, "bread", false)]);
}

#[test]
fn replace_unknown_id_is_noop() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    assert!(!state.replace(task(9, "ghost", true)));
    assert_eq!(state.tasks, vec![task(1, "milk", false)]);
}

#[test]
fn remove_drops_task_and_edit() {
    let mut state = loaded(vec![task(1, "milk", false), task(2, "bread", true)]);
    state.begin_edit(&TaskId::from(1));
    assert!(state.remove(&TaskId::from(1)));
    assert_eq!(state.tasks, vec![task(2, "bread", true)]);
    assert!(!state.is_editing(&TaskId::from(1)));
}

#[test]
fn remove_unknown_id_reports_false() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    assert!(!state.remove(&TaskId::from(5)));
    assert_eq!(state.tasks.len(), 1);
}

// =============================================================
// Edit side map
// =============================================================

#[test]
fn begin_edit_seeds_scratch_with_title() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    assert!(state.begin_edit(&TaskId::from(1)));
    assert_eq!(state.edit_text(&TaskId::from(1)), Some("milk"));
}

#[test]
fn begin_edit_unknown_id_is_rejected() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    assert!(!state.begin_edit(&TaskId::from(2)));
    assert!(state.editing.is_empty());
}

#[test]
fn begin_edit_twice_keeps_scratch() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    state.begin_edit(&TaskId::from(1));
    state.set_edit_text(&TaskId::from(1), "oat milk");
    state.begin_edit(&TaskId::from(1));
    assert_eq!(state.edit_text(&TaskId::from(1)), Some("oat milk"));
}

#[test]
fn set_edit_text_ignores_rows_not_in_edit_mode() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    state.set_edit_text(&TaskId::from(1), "oat milk");
    assert!(!state.is_editing(&TaskId::from(1)));
}

#[test]
fn cancel_edit_discards_scratch_and_keeps_task() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    state.begin_edit(&TaskId::from(1));
    state.set_edit_text(&TaskId::from(1), "whatever");
    state.cancel_edit(&TaskId::from(1));
    assert!(!state.is_editing(&TaskId::from(1)));
    assert_eq!(state.tasks, vec![task(1, "milk", false)]);
}

#[test]
fn editing_never_touches_canonical_task() {
    let mut state = loaded(vec![task(1, "milk", false)]);
    state.begin_edit(&TaskId::from(1));
    state.set_edit_text(&TaskId::from(1), "changed");
    assert_eq!(state.get(&TaskId::from(1)).map(|t| t.title.as_str()), Some("milk"));
}

// =============================================================
// Projections
// =============================================================

#[test]
fn pending_count_counts_incomplete() {
    let state = loaded(vec![task(1, "a", false), task(2, "b", true), task(3, "c", false)]);
    assert_eq!(state.pending_count(), 2);
}

#[test]
fn visible_applies_filter() {
    let state = loaded(vec![task(1, "a", false), task(2, "b", true)]);
    assert_eq!(state.visible(TaskFilter::Completed), vec![task(2, "b", true)]);
    assert_eq!(state.visible(TaskFilter::All).len(), 2);
}

#[test]
fn normalize_title_trims_and_rejects_blank() {
    assert_eq!(normalize_title("  milk \n"), Some("milk".to_owned()));
    assert_eq!(normalize_title(""), None);
    assert_eq!(normalize_title(" \t "), None);
}

// =============================================================
// RefCell store
// =============================================================

#[test]
fn refcell_store_reads_and_writes() {
    let store = RefCell::new(TaskListState::default());
    store.write(|s| s.draft.push_str("milk"));
    assert_eq!(store.read(|s| s.draft.clone()), "milk");
}
