//! The list-view pipeline: filter, optionally group, sort, paginate.
//! Pure functions recomputed on every input change; memoization is a
//! caller-side optimization, never a correctness requirement.

use crate::domain::entities::{Department, Designation, Employee, EmployeeRow, TableRow};
use crate::domain::listview::{
    clamp_page, filter_rows, group_by_date, group_by_year, has_next, has_previous, order_rows,
    page_count, page_strip, slice_page, Group, PageStripItem, QueryState, FLAT_PAGE_SIZE,
    GROUP_PAGE_SIZE,
};

/// One rendered page of a flat list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    /// Records surviving the filter, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub strip: Vec<PageStripItem>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T: TableRow> PageView<T> {
    /// Ids on this page, in display order. Drives the select-all checkbox.
    pub fn visible_ids(&self) -> Vec<i64> {
        self.rows.iter().map(TableRow::id).collect()
    }
}

/// One rendered page of a grouped list; pagination counts groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPageView<T> {
    pub groups: Vec<Group<T>>,
    pub total_groups: usize,
    pub page: usize,
    pub page_count: usize,
    pub strip: Vec<PageStripItem>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Grouping {
    /// Partition on a date-string column, most recent first.
    Date { column: &'static str },
    /// Partition on an integer-year column, latest first; zero or missing
    /// years fall back to the given year.
    Year { column: &'static str, fallback: i64 },
}

/// Source snapshot -> filter -> sort -> paginate.
pub fn flat_view<T: TableRow + Clone>(rows: &[T], query: &QueryState) -> PageView<T> {
    let mut filtered = filter_rows(rows, &query.search_term);
    order_rows(&mut filtered, &query.sort);

    let total = filtered.len();
    let pages = page_count(total, FLAT_PAGE_SIZE);
    let page = clamp_page(query.current_page, pages);

    PageView {
        rows: slice_page(&filtered, page, FLAT_PAGE_SIZE),
        total,
        page,
        page_count: pages,
        strip: page_strip(page, pages),
        has_previous: has_previous(page),
        has_next: has_next(page, pages),
    }
}

/// Source snapshot -> filter -> group -> per-group sort -> paginate groups.
pub fn grouped_view<T: TableRow + Clone>(
    rows: &[T],
    query: &QueryState,
    grouping: Grouping,
) -> GroupedPageView<T> {
    let filtered = filter_rows(rows, &query.search_term);
    let mut groups = match grouping {
        Grouping::Date { column } => group_by_date(&filtered, column),
        Grouping::Year { column, fallback } => group_by_year(&filtered, column, fallback),
    };
    for group in &mut groups {
        order_rows(&mut group.rows, &query.sort);
    }

    let total_groups = groups.len();
    let pages = page_count(total_groups, GROUP_PAGE_SIZE);
    let page = clamp_page(query.current_page, pages);

    GroupedPageView {
        groups: slice_page(&groups, page, GROUP_PAGE_SIZE),
        total_groups,
        page,
        page_count: pages,
        strip: page_strip(page, pages),
        has_previous: has_previous(page),
        has_next: has_next(page, pages),
    }
}

/// Joins employees with the reference names the table shows; ids without a
/// match render as `-` and take part in search and sort exactly as shown.
pub fn resolve_employee_rows(
    employees: &[Employee],
    departments: &[Department],
    designations: &[Designation],
) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|employee| EmployeeRow {
            department_name: departments
                .iter()
                .find(|d| d.department_id == employee.department_id)
                .map(|d| d.department_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            designation_name: designations
                .iter()
                .find(|d| d.designation_id == employee.designation_id)
                .map(|d| d.designation_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            employee: employee.clone(),
        })
        .collect()
}
