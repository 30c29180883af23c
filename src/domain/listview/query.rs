use crate::domain::listview::sort::{SortDirection, SortSpec};

/// Live search/sort/page selections driving a list view. Owned by the
/// screen; reset whenever the underlying collection identity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    pub sort: SortSpec,
    pub current_page: usize,
}

impl QueryState {
    pub fn new(default_column: impl Into<String>) -> Self {
        Self {
            search_term: String::new(),
            sort: SortSpec {
                column: default_column.into(),
                direction: SortDirection::Asc,
            },
            current_page: 1,
        }
    }

    /// Clicking the current sort column flips direction; clicking a new
    /// column sorts ascending on it.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort.column = column.to_string();
            self.sort.direction = SortDirection::Asc;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Back to defaults after the collection changed (add/edit/delete
    /// refetch). The sort column is kept, the direction is not.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.sort.direction = SortDirection::Asc;
        self.current_page = 1;
    }
}
