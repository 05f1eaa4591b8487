//! Plant list query identity and page bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server filters, sorts and counts. The client only decides which
//! (search, page, limit, sort) tuple to ask for, and which page buttons to
//! offer once the match count is known. [`PlantListState`] holds that tuple
//! and enforces the reset and clamping rules; the debounce timer that feeds it
//! lives in the `client` crate.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Most page buttons rendered before the window collapses with ellipses.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// How the list is laid out. The layout decides the page size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

impl ViewMode {
    #[must_use]
    pub fn page_size(self) -> u32 {
        match self {
            Self::Grid => 6,
            Self::List => 5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("unknown view mode '{other}' (expected grid or list)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
}

impl SortField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Name => "name",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort selection, written `field-order` (e.g. `createdAt-desc`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortOption {
    pub const NEWEST_FIRST: Self = Self { field: SortField::CreatedAt, order: SortOrder::Desc };
    pub const OLDEST_FIRST: Self = Self { field: SortField::CreatedAt, order: SortOrder::Asc };
    pub const NAME_ASC: Self = Self { field: SortField::Name, order: SortOrder::Asc };
    pub const NAME_DESC: Self = Self { field: SortField::Name, order: SortOrder::Desc };

    /// The selectable options, in menu order.
    pub const ALL: [Self; 4] = [Self::NEWEST_FIRST, Self::OLDEST_FIRST, Self::NAME_ASC, Self::NAME_DESC];

    #[must_use]
    pub fn label(self) -> &'static str {
        match (self.field, self.order) {
            (SortField::CreatedAt, SortOrder::Desc) => "Newest First",
            (SortField::CreatedAt, SortOrder::Asc) => "Oldest First",
            (SortField::Name, SortOrder::Asc) => "Name (A-Z)",
            (SortField::Name, SortOrder::Desc) => "Name (Z-A)",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field.as_str(), self.order.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.to_string() == s.trim())
            .ok_or_else(|| {
                let names: Vec<String> = Self::ALL.iter().map(ToString::to_string).collect();
                format!("unknown sort '{s}' (expected one of {})", names.join(", "))
            })
    }
}

/// The parameter tuple that identifies one cached page of results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlantListQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
    pub sort: SortOption,
}

impl Default for PlantListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: ViewMode::default().page_size(),
            sort: SortOption::default(),
        }
    }
}

impl PlantListQuery {
    /// Query-string pairs in the names the API expects.
    #[must_use]
    pub fn params(&self) -> [(&'static str, String); 5] {
        [
            ("searchTerm", self.search.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.sort.field.as_str().to_owned()),
            ("sortOrder", self.sort.order.as_str().to_owned()),
        ]
    }
}

/// `ceil(total / limit)`; zero when there is nothing to show.
#[must_use]
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

/// One slot in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons for `current` of `total`.
///
/// Up to [`MAX_PAGE_BUTTONS`] pages are listed in full. Beyond that the first
/// and last pages are always present, the neighbours of `current` are listed,
/// and gaps are marked with [`PageItem::Ellipsis`].
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= MAX_PAGE_BUTTONS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut items = vec![PageItem::Page(1)];
    if current > 2 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current + 1 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Search, paging, layout and sort state behind the plant list.
///
/// `search_input` is what the user is typing; `search_term` is the settled
/// value that takes part in the query. The page is reset to 1 whenever the
/// search or sort changes and is kept inside the known page range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlantListState {
    search_input: String,
    search_term: String,
    page: u32,
    view_mode: ViewMode,
    sort: SortOption,
    total: Option<u64>,
}

impl PlantListState {
    #[must_use]
    pub fn new() -> Self {
        Self { page: 1, ..Self::default() }
    }

    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.view_mode.page_size()
    }

    /// Match count from the last response, if one has arrived.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total.map(|total| total_pages(total, self.limit()))
    }

    /// Record a keystroke-level change. The page resets immediately; the
    /// query itself only changes once the term settles.
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        self.page = 1;
    }

    /// Adopt a debounced search term. Returns true when the query changed.
    pub fn settle_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.page = 1;
        self.total = None;
        true
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Switch layout, keeping the first item of the current page in view.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }
        let first_index = u64::from(self.page() - 1) * u64::from(self.limit());
        self.view_mode = mode;
        let page = first_index / u64::from(self.limit()) + 1;
        self.page = u32::try_from(page).unwrap_or(u32::MAX);
        self.clamp_page();
    }

    /// Record the match count from a response and pull the page back into range.
    pub fn observe_total(&mut self, total: u64) {
        self.total = Some(total);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page().saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page().saturating_sub(1));
    }

    /// Select a page, clamped to `[1, total_pages]` when the total is known.
    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
        self.clamp_page();
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.total_pages().is_none_or(|pages| self.page() < pages)
    }

    /// The current query identity.
    #[must_use]
    pub fn query(&self) -> PlantListQuery {
        PlantListQuery {
            search: self.search_term.clone(),
            page: self.page(),
            limit: self.limit(),
            sort: self.sort,
        }
    }

    /// Page buttons to render; empty while a single page (or none) exists.
    #[must_use]
    pub fn page_window(&self) -> Vec<PageItem> {
        match self.total_pages() {
            Some(pages) if pages > 1 => page_window(self.page(), pages),
            _ => Vec::new(),
        }
    }

    fn clamp_page(&mut self) {
        let page = self.page.max(1);
        self.page = match self.total_pages() {
            Some(pages) if pages > 0 => page.min(pages),
            Some(_) => 1,
            None => page,
        };
    }
}
