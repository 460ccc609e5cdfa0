/// Items shown per catalog page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A 1-based page over the in-memory item list.
///
/// All bounds are computed against the full fetched list, before the
/// active-item filter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageWindow {
    /// First page. A zero page size is bumped to one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// Exclusive end of the slice, clamped to `total`.
    pub fn end_index(&self, total: usize) -> usize {
        (self.start_index() + self.items_per_page).min(total)
    }

    /// The contiguous slice this page covers.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index(items.len());
        let start = self.start_index().min(end);
        &items[start..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.end_index(total) < total
    }

    /// Step back one page. Returns false on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page if another page starts before `total`.
    pub fn next(&mut self, total: usize) -> bool {
        if self.current_page * self.items_per_page >= total {
            return false;
        }
        self.current_page += 1;
        true
    }
}
