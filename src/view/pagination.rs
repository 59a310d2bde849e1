//! Page window for the pagination widget.

/// Pagination widget state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationViewModel {
    pub active_page: u32,
    pub total_pages: u32,
    /// Page numbers to render as links, ascending
    pub pages: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Page numbers to show around `page`, at most `range` of them.
///
/// The window is centred on the current page where possible and slides
/// to stay within `1..=total_pages` near either end.
pub fn page_window(page: u32, per_page: u32, total_count: u64, range: u32) -> PaginationViewModel {
    let total_pages = if per_page == 0 {
        0
    } else {
        u32::try_from(total_count.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
    };

    if total_pages == 0 || range == 0 {
        return PaginationViewModel {
            active_page: page,
            total_pages,
            pages: Vec::new(),
            has_prev: false,
            has_next: false,
        };
    }

    // A window wider than the page count shows every page
    let range = range.min(total_pages);
    let current = page.clamp(1, total_pages);
    let half = range / 2;
    let mut first = current.saturating_sub(half).max(1);
    let mut last = current.saturating_add(half).min(total_pages);

    if last - first + 1 < range {
        let missing = range - (last - first);
        if u64::from(current) * 2 < u64::from(total_pages) {
            last = last.saturating_add(missing).min(total_pages);
        } else {
            first = first.saturating_sub(missing).max(1);
        }
    }

    if last - first + 1 > range {
        if u64::from(current) * 2 > u64::from(total_pages) {
            first += 1;
        } else {
            last -= 1;
        }
    }

    PaginationViewModel {
        active_page: current,
        total_pages,
        pages: (first..=last).collect(),
        has_prev: current > 1,
        has_next: current < total_pages,
    }
}
