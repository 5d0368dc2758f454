//! Recent activity feed and its pagination.

use serde::{Deserialize, Serialize};

/// Smallest page the feed will render.
pub const MIN_PAGE_SIZE: usize = 15;

/// Page numbers shown on each side of the current page.
pub const PAGE_WINDOW: usize = 3;

/// Direction of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Send,
    Receive,
    Deposit,
}

impl ActivityKind {
    /// Money leaving the account.
    pub fn is_outbound(&self) -> bool {
        matches!(self, ActivityKind::Send)
    }
}

/// A past transaction as shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    /// Secondary line, e.g. `"USD • Aug 12"`.
    pub meta: String,
    /// Signed display amount, e.g. `"- $45.00"`.
    pub amount: String,
}

/// One page of the feed plus the pager state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityPage<'a> {
    pub items: &'a [Activity],
    /// Current page, 1-based, after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based index of the first item shown, 0 when the feed is empty.
    pub showing_from: usize,
    pub showing_to: usize,
    pub can_prev: bool,
    pub can_next: bool,
    /// Page numbers to render around the current page.
    pub window: Vec<usize>,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
}

impl ActivityPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Slice `items` into the requested page.
///
/// The page size is raised to [`MIN_PAGE_SIZE`] and the page number is
/// clamped into `1..=total_pages`.
pub fn paginate(items: &[Activity], requested_page: usize, page_size: usize) -> ActivityPage<'_> {
    let size = page_size.max(MIN_PAGE_SIZE);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size).max(1);
    let page = requested_page.clamp(1, total_pages);

    let start = ((page - 1) * size).min(total_items);
    let end = (start + size).min(total_items);

    let window_start = page.saturating_sub(PAGE_WINDOW).max(1);
    let window_end = (page + PAGE_WINDOW).min(total_pages);

    ActivityPage {
        items: &items[start..end],
        page,
        page_size: size,
        total_pages,
        total_items,
        showing_from: if total_items == 0 { 0 } else { start + 1 },
        showing_to: (page * size).min(total_items),
        can_prev: page > 1,
        can_next: page < total_pages,
        window: (window_start..=window_end).collect(),
        leading_ellipsis: window_start > 1,
        trailing_ellipsis: window_end < total_pages,
    }
}
