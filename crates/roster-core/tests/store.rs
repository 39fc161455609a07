//! Store-level tests: each action against a seeded roster.

use roster_core::{
    Action, FilterPolicy, IgnoreReason, PageRequest, RosterEvent, RosterStore, reduce,
};
use roster_model::{Record, RecordField, RecordId};

fn id(value: impl Into<String>) -> RecordId {
    RecordId::new(value)
}

/// Records 1..=count; every third one is an admin.
fn roster(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| {
            let role = if i % 3 == 0 { "admin" } else { "member" };
            Record::new(
                id(i.to_string()),
                format!("User {i}"),
                format!("user{i}@mailinator.com"),
                role,
            )
        })
        .collect()
}

fn store(count: usize) -> RosterStore {
    RosterStore::from_records(roster(count), FilterPolicy::ClearOnEdit)
}

fn ids_of<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records.into_iter().map(|r| r.id.to_string()).collect()
}

fn select(store: &mut RosterStore, value: &str) {
    store.dispatch(Action::ToggleOne {
        id: id(value),
        checked: true,
    });
}

#[test]
fn load_seeds_master_and_filtered() {
    let mut store = RosterStore::new();
    assert_eq!(store.state().total_pages(), 1);
    let events = store.dispatch(Action::Load(roster(12)));
    assert_eq!(events, vec![RosterEvent::Loaded { count: 12 }]);
    assert_eq!(store.state().master().len(), 12);
    assert_eq!(store.state().filtered_len(), 12);
    assert_eq!(store.state().total_pages(), 2);
    assert_eq!(store.state().current_page(), 1);
}

#[test]
fn search_resets_page_and_filters() {
    let mut store = store(25);
    store.dispatch(Action::GoToPage(PageRequest::Number(3)));
    assert_eq!(store.state().current_page(), 3);

    let events = store.dispatch(Action::Search("ADMIN".to_string()));
    assert_eq!(
        events,
        vec![
            RosterEvent::QueryChanged { matches: 8 },
            RosterEvent::PageChanged {
                page: 1,
                total_pages: 1
            },
        ]
    );
    assert!(store.state().filtered().all(|r| r.role == "admin"));
}

#[test]
fn repeating_the_same_query_changes_nothing() {
    let mut store = store(25);
    store.dispatch(Action::Search("user1".to_string()));
    store.dispatch(Action::GoToPage(PageRequest::Next));
    let before = store.state().clone();
    let events = store.dispatch(Action::Search("user1".to_string()));
    assert!(events.is_empty());
    assert_eq!(store.state(), &before);
}

#[test]
fn page_requests_outside_range_are_rejected() {
    let mut store = store(12);
    let events = store.dispatch(Action::GoToPage(PageRequest::Number(3)));
    assert_eq!(
        events,
        vec![RosterEvent::PageRejected {
            requested: 3,
            total_pages: 2
        }]
    );
    assert_eq!(store.state().current_page(), 1);

    let events = store.dispatch(Action::GoToPage(PageRequest::Previous));
    assert!(matches!(
        events.as_slice(),
        [RosterEvent::PageRejected { requested: 0, .. }]
    ));

    store.dispatch(Action::GoToPage(PageRequest::Last));
    assert_eq!(store.state().current_page(), 2);
    assert_eq!(ids_of(store.state().visible()), ["11", "12"]);
}

#[test]
fn selection_survives_search_changes() {
    let mut store = store(12);
    store.dispatch(Action::Search("admin".to_string()));
    // id 1 is a member, hidden by the search
    select(&mut store, "1");
    assert!(store.state().selection().contains(&id("1")));

    store.dispatch(Action::clear_search());
    assert_eq!(store.state().selection().len(), 1);
    assert!(store.state().selection().contains(&id("1")));
}

#[test]
fn selecting_an_unknown_id_is_ignored() {
    let mut store = store(3);
    let events = store.dispatch(Action::ToggleOne {
        id: id("404"),
        checked: true,
    });
    assert_eq!(
        events,
        vec![RosterEvent::Ignored(IgnoreReason::UnknownRecord(id("404")))]
    );
    assert!(store.state().selection().is_empty());
}

#[test]
fn deselect_all_on_another_page_clears_everything() {
    let mut store = store(25);
    select(&mut store, "1");
    select(&mut store, "2");
    store.dispatch(Action::GoToPage(PageRequest::Number(2)));
    store.dispatch(Action::ToggleVisible { checked: false });
    assert!(store.state().selection().is_empty());
    assert!(!store.state().select_all());
}

#[test]
fn select_all_replaces_with_visible_page() {
    let mut store = store(25);
    select(&mut store, "1");
    store.dispatch(Action::GoToPage(PageRequest::Number(2)));
    store.dispatch(Action::ToggleVisible { checked: true });
    let selected: Vec<String> = store.state().selection().iter().map(ToString::to_string).collect();
    let mut expected: Vec<String> = (11_u32..=20).map(|i| format!("{i}")).collect();
    expected.sort();
    assert_eq!(selected, expected);
    assert!(store.state().select_all());
}

#[test]
fn edit_preserves_id_and_touches_only_target() {
    let mut store = store(2);
    let first = store.state().master().records()[0].clone();
    let events = store.dispatch(Action::CommitEdit(Record::new(
        id("2"),
        "Renamed",
        "renamed@example.com",
        "admin",
    )));
    assert_eq!(events, vec![RosterEvent::RecordUpdated(id("2"))]);
    let records = store.state().master().records();
    assert_eq!(records[0], first);
    assert_eq!(records[1].id, id("2"));
    assert_eq!(records[1].name, "Renamed");
    assert_eq!(records[1].role, "admin");
}

#[test]
fn edit_clears_active_search_by_default() {
    let mut store = store(12);
    store.dispatch(Action::Search("admin".to_string()));
    assert_eq!(store.state().filtered_len(), 4);

    let events = store.dispatch(Action::CommitEdit(Record::new(id("3"), "x", "y", "admin")));
    assert!(events.contains(&RosterEvent::FilterCleared));
    assert_eq!(store.state().query(), "");
    assert_eq!(store.state().filtered_len(), 12);
}

#[test]
fn edit_reapplies_search_under_reapply_policy() {
    let mut store = RosterStore::from_records(roster(12), FilterPolicy::Reapply);
    store.dispatch(Action::Search("admin".to_string()));
    store.dispatch(Action::CommitEdit(Record::new(id("3"), "x", "y", "member")));
    assert_eq!(store.state().query(), "admin");
    assert_eq!(ids_of(store.state().filtered()), ["6", "9", "12"]);
}

#[test]
fn reapply_clamps_page_when_edit_shrinks_view() {
    let mut store = RosterStore::from_records(roster(11), FilterPolicy::Reapply);
    store.dispatch(Action::Search("user".to_string()));
    store.dispatch(Action::GoToPage(PageRequest::Last));
    assert_eq!(store.state().current_page(), 2);

    let events = store.dispatch(Action::CommitEdit(Record::new(id("11"), "x", "y", "z")));
    assert!(events.contains(&RosterEvent::PageChanged {
        page: 1,
        total_pages: 1
    }));
    assert_eq!(store.state().current_page(), 1);
}

#[test]
fn draft_save_commits_and_closes() {
    let mut store = store(3);
    store.dispatch(Action::BeginEdit(id("2")));
    store.dispatch(Action::UpdateDraft {
        id: id("2"),
        field: RecordField::Email,
        value: String::new(),
    });
    // uncommitted drafts leave the master untouched
    assert_eq!(store.state().master().get(&id("2")).unwrap().email, "user2@mailinator.com");

    let events = store.dispatch(Action::SaveEdit(id("2")));
    assert_eq!(
        events,
        vec![
            RosterEvent::DraftClosed(id("2")),
            RosterEvent::RecordUpdated(id("2"))
        ]
    );
    assert_eq!(store.state().master().get(&id("2")).unwrap().email, "");
    assert!(store.state().drafts().is_empty());
}

#[test]
fn draft_cancel_discards_changes() {
    let mut store = store(3);
    store.dispatch(Action::BeginEdit(id("1")));
    store.dispatch(Action::UpdateDraft {
        id: id("1"),
        field: RecordField::Name,
        value: "Nope".to_string(),
    });
    store.dispatch(Action::CancelEdit(id("1")));
    assert_eq!(store.state().master().get(&id("1")).unwrap().name, "User 1");
    assert_eq!(
        store.dispatch(Action::SaveEdit(id("1"))),
        vec![RosterEvent::Ignored(IgnoreReason::NoDraft(id("1")))]
    );
}

#[test]
fn edits_leave_the_selection_untouched() {
    for policy in [FilterPolicy::ClearOnEdit, FilterPolicy::Reapply] {
        let mut store = RosterStore::from_records(roster(12), policy);
        select(&mut store, "2");
        select(&mut store, "3");
        store.dispatch(Action::Search("user".to_string()));

        store.dispatch(Action::CommitEdit(Record::new(id("2"), "Renamed", "r@x.io", "owner")));
        store.dispatch(Action::BeginEdit(id("3")));
        store.dispatch(Action::UpdateDraft {
            id: id("3"),
            field: RecordField::Name,
            value: "Also renamed".to_string(),
        });
        store.dispatch(Action::SaveEdit(id("3")));

        let selected: Vec<String> = store.state().selection().iter().map(ToString::to_string).collect();
        assert_eq!(selected, ["2", "3"], "policy {policy}");
    }
}

#[test]
fn whitespace_query_is_not_reported_as_cleared_by_edit() {
    let mut store = store(3);
    store.dispatch(Action::Search("   ".to_string()));
    let events = store.dispatch(Action::CommitEdit(Record::new(id("1"), "A", "a@x.io", "admin")));
    assert_eq!(events, vec![RosterEvent::RecordUpdated(id("1"))]);
    assert_eq!(store.state().query(), "");
    assert_eq!(store.state().filtered_len(), 3);
}

#[test]
fn bulk_delete_example() {
    let mut store = store(12);
    for value in ["3", "7", "11"] {
        select(&mut store, value);
    }
    let signal_before = store.state().selection_reset_signal();

    let events = store.dispatch(Action::DeleteSelected);
    assert_eq!(
        events,
        vec![
            RosterEvent::RecordsDeleted(vec![id("3"), id("7"), id("11")]),
            RosterEvent::SelectionCleared,
        ]
    );
    let state = store.state();
    assert_eq!(state.master().len(), 9);
    assert!(
        state
            .master()
            .iter()
            .all(|r| !["3", "7", "11"].contains(&r.id.as_str()))
    );
    assert!(state.selection().is_empty());
    assert_ne!(state.selection_reset_signal(), signal_before);
}

#[test]
fn bulk_delete_resets_select_all_and_clamps_page() {
    let mut store = store(12);
    store.dispatch(Action::GoToPage(PageRequest::Number(2)));
    store.dispatch(Action::ToggleVisible { checked: true });
    assert!(store.state().select_all());

    let events = store.dispatch(Action::DeleteSelected);
    assert!(events.contains(&RosterEvent::PageChanged {
        page: 1,
        total_pages: 1
    }));
    assert!(!store.state().select_all());
    assert_eq!(store.state().master().len(), 10);
}

#[test]
fn bulk_delete_with_empty_selection_still_signals_reset() {
    let mut store = store(5);
    let events = store.dispatch(Action::DeleteSelected);
    assert_eq!(events, vec![RosterEvent::SelectionCleared]);
    assert_eq!(store.state().master().len(), 5);
    assert!(store.state().selection_reset_signal());
}

#[test]
fn single_delete_example_is_idempotent() {
    let mut store = store(12);
    store.dispatch(Action::DeleteOne(id("5")));
    assert_eq!(store.state().master().len(), 11);
    assert!(store.state().master().get(&id("5")).is_none());

    let events = store.dispatch(Action::DeleteOne(id("5")));
    assert_eq!(
        events,
        vec![RosterEvent::Ignored(IgnoreReason::UnknownRecord(id("5")))]
    );
    assert_eq!(store.state().master().len(), 11);
}

#[test]
fn delete_while_filtered_keeps_the_query() {
    let mut store = store(12);
    store.dispatch(Action::Search("admin".to_string()));
    store.dispatch(Action::DeleteOne(id("6")));
    assert_eq!(store.state().query(), "admin");
    assert_eq!(ids_of(store.state().filtered()), ["3", "9", "12"]);
    assert!(store.state().is_consistent());
}

#[test]
fn delete_purges_selected_id() {
    let mut store = store(4);
    select(&mut store, "2");
    let events = store.dispatch(Action::DeleteOne(id("2")));
    assert!(events.contains(&RosterEvent::SelectionChanged { selected: 0 }));
    assert!(store.state().selection().is_empty());
}

#[test]
fn reduce_is_a_pure_transition() {
    let state = store(12).into_state();
    let (next, events) = reduce(state.clone(), Action::DeleteOne(id("1")));
    assert_eq!(state.master().len(), 12);
    assert_eq!(next.master().len(), 11);
    assert_eq!(events, vec![RosterEvent::RecordsDeleted(vec![id("1")])]);
}

#[test]
fn page_view_reflects_selection_and_drafts() {
    let mut store = store(12);
    select(&mut store, "2");
    store.dispatch(Action::BeginEdit(id("3")));
    let view = store.page_view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.page_numbers, vec![1, 2]);
    assert_eq!(view.total_records, 12);
    assert_eq!(view.selected, 1);
    assert!(view.rows[1].selected);
    assert!(!view.rows[0].selected);
    assert!(view.rows[2].draft.is_some());
}

#[test]
fn reload_resets_view_state() {
    let mut store = store(12);
    store.dispatch(Action::Search("admin".to_string()));
    select(&mut store, "3");
    store.dispatch(Action::Load(roster(4)));
    let state = store.state();
    assert_eq!(state.query(), "");
    assert!(state.selection().is_empty());
    assert_eq!(state.filtered_len(), 4);
}
