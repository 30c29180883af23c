use crate::domain::entities::record::TableRow;

/// Keeps the records where at least one searchable field contains the
/// search term, case-insensitively. An empty term matches everything.
pub fn filter_rows<T: TableRow + Clone>(rows: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| matches_term(*row, &needle))
        .cloned()
        .collect()
}

fn matches_term<T: TableRow>(row: &T, needle: &str) -> bool {
    T::searchable()
        .iter()
        .any(|column| row.field(column).search_text().to_lowercase().contains(needle))
}
