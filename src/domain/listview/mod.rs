pub mod filter;
pub mod group;
pub mod paginate;
pub mod query;
pub mod selection;
pub mod sort;

pub use filter::filter_rows;
pub use group::{group_by_date, group_by_year, Group, GroupKey};
pub use paginate::{
    clamp_page, has_next, has_previous, page_count, page_strip, slice_page, PageStripItem,
    FLAT_PAGE_SIZE, GROUP_PAGE_SIZE,
};
pub use query::QueryState;
pub use selection::SelectionSet;
pub use sort::{compare_values, order_rows, SortDirection, SortSpec};
