use std::collections::BTreeSet;

/// Checked record ids, kept across page navigation until explicitly
/// cleared. The all/indeterminate header-checkbox states are computed over
/// the current page's visible ids only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: i64, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Checks or unchecks every visible id; selections on other pages are
    /// untouched.
    pub fn select_all(&mut self, checked: bool, visible_ids: &[i64]) {
        for id in visible_ids {
            self.toggle(*id, checked);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_all_selected(&self, visible_ids: &[i64]) -> bool {
        !visible_ids.is_empty() && visible_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn is_indeterminate(&self, visible_ids: &[i64]) -> bool {
        let selected = visible_ids.iter().filter(|id| self.ids.contains(id)).count();
        selected > 0 && selected < visible_ids.len()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
