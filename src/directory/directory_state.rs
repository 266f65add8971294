use ratatui::style::Style;
use tui_textarea::TextArea;

use super::directory_matcher::ContributorMatcher;
use super::view_options::{LayoutMode, SortKey, compare_contributors};
use crate::repository::{Contributor, Directory};
use crate::theme;

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// Cycle `current` through `options` and back to `None` ("all")
fn next_filter(current: &Option<String>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|option| option == value)
            .and_then(|idx| options.get(idx + 1))
            .cloned(),
    }
}

/// Search, sort, filter and selection state of the contributor list
pub struct DirectoryState {
    contributors: Vec<Contributor>,
    roles: Vec<String>,
    periods: Vec<String>,
    /// Indices into `contributors`, in display order
    visible: Vec<usize>,
    /// Position within `visible`
    selected: usize,
    sort: SortKey,
    reversed: bool,
    role_filter: Option<String>,
    period_filter: Option<String>,
    layout: LayoutMode,
    /// Cards per grid row, as last laid out
    columns: usize,
    search_textarea: TextArea<'static>,
    search_focused: bool,
    matcher: ContributorMatcher,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(LayoutMode::default(), SortKey::default())
    }
}

impl DirectoryState {
    pub fn new(layout: LayoutMode, sort: SortKey) -> Self {
        Self {
            contributors: Vec::new(),
            roles: Vec::new(),
            periods: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            sort,
            reversed: false,
            role_filter: None,
            period_filter: None,
            layout,
            columns: 1,
            search_textarea: create_search_textarea(),
            search_focused: false,
            matcher: ContributorMatcher::new(),
        }
    }

    /// Replace the data set; filters that no longer apply are dropped
    pub fn set_directory(&mut self, directory: &Directory) {
        self.roles = directory.roles();
        self.periods = directory.periods();
        self.contributors = directory.contributors.clone();

        if self
            .role_filter
            .as_ref()
            .is_some_and(|role| !self.roles.contains(role))
        {
            self.role_filter = None;
        }
        if self
            .period_filter
            .as_ref()
            .is_some_and(|period| !self.periods.contains(period))
        {
            self.period_filter = None;
        }

        self.selected = 0;
        self.update_filter();
    }

    /// Recompute the visible list, keeping the selected person when still visible
    pub fn update_filter(&mut self) {
        let previously_selected = self.selected_contributor_index();
        let query = self.search_query();

        let mut visible: Vec<usize> = self
            .contributors
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                self.role_filter
                    .as_ref()
                    .is_none_or(|role| c.role.as_ref() == Some(role))
            })
            .filter(|(_, c)| {
                self.period_filter
                    .as_ref()
                    .is_none_or(|period| c.periods.contains(period))
            })
            .filter(|(_, c)| self.matcher.matches(&query, c))
            .map(|(idx, _)| idx)
            .collect();

        visible.sort_by(|&a, &b| {
            compare_contributors(
                self.sort,
                self.reversed,
                &self.contributors[a],
                &self.contributors[b],
            )
        });

        self.visible = visible;
        self.selected = previously_selected
            .and_then(|idx| self.visible.iter().position(|&v| v == idx))
            .unwrap_or_else(|| self.selected.min(self.visible.len().saturating_sub(1)));
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn contributor(&self, idx: usize) -> Option<&Contributor> {
        self.contributors.get(idx)
    }

    pub fn visible_contributors(&self) -> impl Iterator<Item = &Contributor> {
        self.visible.iter().map(|&idx| &self.contributors[idx])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.contributors.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Index into `contributors()` of the highlighted person
    pub fn selected_contributor_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    pub fn selected_contributor(&self) -> Option<&Contributor> {
        self.selected_contributor_index()
            .and_then(|idx| self.contributors.get(idx))
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move one grid row down; in list layout this is one item
    pub fn select_down(&mut self) {
        let step = self.row_step();
        if self.selected + step < self.visible.len() {
            self.selected += step;
        }
    }

    /// Move one grid row up; in list layout this is one item
    pub fn select_up(&mut self) {
        let step = self.row_step();
        if self.selected >= step {
            self.selected -= step;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    pub fn select_position(&mut self, position: usize) {
        if position < self.visible.len() {
            self.selected = position;
        }
    }

    fn row_step(&self) -> usize {
        match self.layout {
            LayoutMode::Grid => self.columns.max(1),
            LayoutMode::List => 1,
        }
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.reversed = false;
        self.update_filter();
    }

    pub fn toggle_reverse(&mut self) {
        self.reversed = !self.reversed;
        self.update_filter();
    }

    pub fn role_filter(&self) -> Option<&str> {
        self.role_filter.as_deref()
    }

    pub fn period_filter(&self) -> Option<&str> {
        self.period_filter.as_deref()
    }

    pub fn cycle_role_filter(&mut self) {
        self.role_filter = next_filter(&self.role_filter, &self.roles);
        self.update_filter();
    }

    pub fn cycle_period_filter(&mut self) {
        self.period_filter = next_filter(&self.period_filter, &self.periods);
        self.update_filter();
    }

    pub fn has_active_filters(&self) -> bool {
        self.role_filter.is_some() || self.period_filter.is_some() || !self.search_query().is_empty()
    }

    /// Drop role, period and search filters
    pub fn clear_filters(&mut self) {
        self.role_filter = None;
        self.period_filter = None;
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.update_filter();
    }

    pub fn search_query(&self) -> String {
        self.search_textarea
            .lines()
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }

    pub fn search_textarea(&self) -> &TextArea<'static> {
        &self.search_textarea
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }
}

#[cfg(test)]
#[path = "directory_state_tests.rs"]
mod directory_state_tests;
