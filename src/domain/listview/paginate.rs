/// Page size for flat table screens.
pub const FLAT_PAGE_SIZE: usize = 10;
/// Page size for grouped screens, counted in groups.
pub const GROUP_PAGE_SIZE: usize = 5;

pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The slice for a 1-indexed page. Pages past the end are empty.
pub fn slice_page<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * page_size;
    items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect()
}

/// Clamps a requested page into `[1, page_count]`; an empty list pins the
/// page at 1 and the screen renders its empty state.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripItem {
    Page(usize),
    Ellipsis,
}

/// Display policy for the navigation strip: first page, last page, the
/// current page plus/minus two, one ellipsis per gap.
pub fn page_strip(current: usize, page_count: usize) -> Vec<PageStripItem> {
    let mut strip = Vec::new();
    for page in 1..=page_count {
        let distance = page.abs_diff(current);
        if page == 1 || page == page_count || distance <= 2 {
            strip.push(PageStripItem::Page(page));
        } else if distance == 3 {
            strip.push(PageStripItem::Ellipsis);
        }
    }
    strip
}

pub fn has_previous(current: usize) -> bool {
    current > 1
}

pub fn has_next(current: usize, page_count: usize) -> bool {
    current < page_count
}
