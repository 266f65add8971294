//! Tests for DirectoryState

use super::*;
use crate::test_utils::test_helpers::sample_directory;

fn loaded(layout: LayoutMode, sort: SortKey) -> DirectoryState {
    let mut state = DirectoryState::new(layout, sort);
    state.set_directory(&sample_directory());
    state
}

fn visible_names(state: &DirectoryState) -> Vec<String> {
    state
        .visible_contributors()
        .map(|c| c.username.clone())
        .collect()
}

fn type_search(state: &mut DirectoryState, text: &str) {
    state.search_textarea_mut().insert_str(text);
    state.update_filter();
}

#[test]
fn test_initial_order_is_by_points() {
    let state = loaded(LayoutMode::Grid, SortKey::Points);

    assert_eq!(
        visible_names(&state),
        vec!["alice", "bob", "carol", "dave", "erin", "frank"]
    );
    assert_eq!(state.selected_contributor().unwrap().username, "alice");
}

#[test]
fn test_sort_by_name_uses_display_name() {
    let state = loaded(LayoutMode::Grid, SortKey::Name);

    // frank has no display name and sorts by username
    assert_eq!(
        visible_names(&state),
        vec!["alice", "bob", "carol", "dave", "erin", "frank"]
    );
}

#[test]
fn test_sort_by_activity_breaks_ties_by_username() {
    let state = loaded(LayoutMode::Grid, SortKey::Activity);

    assert_eq!(
        visible_names(&state),
        vec!["bob", "alice", "carol", "dave", "erin", "frank"]
    );
}

#[test]
fn test_reverse_flips_primary_order_only() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Activity);
    state.toggle_reverse();

    assert_eq!(
        visible_names(&state),
        vec!["carol", "dave", "erin", "frank", "alice", "bob"]
    );
}

#[test]
fn test_cycle_sort_resets_direction() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.toggle_reverse();
    state.cycle_sort();

    assert_eq!(state.sort(), SortKey::Name);
    assert!(!state.is_reversed());
}

#[test]
fn test_role_filter_cycles_through_roles_then_all() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);

    state.cycle_role_filter();
    assert_eq!(state.role_filter(), Some("core"));
    assert_eq!(visible_names(&state), vec!["alice", "carol"]);

    state.cycle_role_filter();
    assert_eq!(state.role_filter(), Some("contributor"));
    assert_eq!(visible_names(&state), vec!["bob", "dave", "erin"]);

    state.cycle_role_filter();
    assert_eq!(state.role_filter(), None);
    assert_eq!(state.visible_count(), 6);
}

#[test]
fn test_period_filter_uses_merged_periods() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);

    state.cycle_period_filter();
    assert_eq!(state.period_filter(), Some("week"));
    assert_eq!(visible_names(&state), vec!["alice", "bob", "carol"]);

    state.cycle_period_filter();
    assert_eq!(state.period_filter(), Some("month"));
    assert_eq!(visible_names(&state), vec!["alice", "dave", "erin", "frank"]);
}

#[test]
fn test_search_and_filters_compose() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.cycle_role_filter(); // core
    type_search(&mut state, "carol");

    assert_eq!(visible_names(&state), vec!["carol"]);
    assert!(state.has_active_filters());

    state.clear_filters();
    assert_eq!(state.visible_count(), 6);
    assert!(!state.has_active_filters());
    assert_eq!(state.search_query(), "");
}

#[test]
fn test_search_matches_display_name() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    type_search(&mut state, "brockovich");

    assert_eq!(visible_names(&state), vec!["erin"]);
}

#[test]
fn test_selection_follows_person_across_refilter() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.select_position(2); // carol
    state.cycle_role_filter(); // core: alice, carol

    assert_eq!(state.selected_contributor().unwrap().username, "carol");
    assert_eq!(state.selected_index(), 1);
}

#[test]
fn test_selection_clamps_when_person_filtered_out() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.select_last(); // frank
    type_search(&mut state, "alice");

    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.selected_contributor().unwrap().username, "alice");
}

#[test]
fn test_no_matches_has_no_selection() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    type_search(&mut state, "zzzzzz");

    assert_eq!(state.visible_count(), 0);
    assert!(state.selected_contributor().is_none());
}

#[test]
fn test_grid_row_navigation_uses_columns() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.set_columns(4);

    state.select_down();
    assert_eq!(state.selected_index(), 4);

    // Not enough items for another full row
    state.select_down();
    assert_eq!(state.selected_index(), 4);

    state.select_up();
    assert_eq!(state.selected_index(), 0);

    state.select_up();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_list_row_navigation_moves_one_item() {
    let mut state = loaded(LayoutMode::List, SortKey::Points);
    state.set_columns(4);

    state.select_down();
    assert_eq!(state.selected_index(), 1);
}

#[test]
fn test_next_and_previous_are_clamped() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);

    state.select_previous();
    assert_eq!(state.selected_index(), 0);

    state.select_last();
    state.select_next();
    assert_eq!(state.selected_index(), 5);
}

#[test]
fn test_reload_drops_filters_that_no_longer_apply() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.cycle_period_filter(); // week

    let mut directory = sample_directory();
    for c in &mut directory.contributors {
        c.periods = vec!["year".to_string()];
    }
    state.set_directory(&directory);

    assert_eq!(state.period_filter(), None);
    assert_eq!(state.visible_count(), 6);
}

#[test]
fn test_toggle_layout() {
    let mut state = loaded(LayoutMode::Grid, SortKey::Points);
    state.toggle_layout();
    assert_eq!(state.layout(), LayoutMode::List);
    state.toggle_layout();
    assert_eq!(state.layout(), LayoutMode::Grid);
}
