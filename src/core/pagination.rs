// LogPager - core/pagination.rs
//
// Page-window arithmetic over an already filtered, ordered collection.

use crate::core::model::PageResult;
use crate::util::constants;
use crate::util::error::ListingError;

/// A validated page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Validate a caller-supplied page request: `size` must lie in `1..=max_size`.
    pub fn new(page: usize, size: usize, max_size: usize) -> Result<Self, ListingError> {
        if size == 0 || size > max_size {
            return Err(ListingError::InvalidPageSize {
                size,
                max: max_size,
            });
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: constants::DEFAULT_PAGE,
            size: constants::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Slice `items` into the page `[page_index * page_size, +page_size)`.
///
/// A window starting past the end yields an empty page while the counts
/// still describe the whole collection.
///
/// # Panics
/// If `page_size` is zero. Callers validate page sizes upstream
/// (see [`PageRequest::new`]); a zero here is a programming error.
pub fn paginate<T>(items: Vec<T>, page_index: usize, page_size: usize) -> PageResult<T> {
    assert!(page_size > 0, "page_size must be at least 1");

    let total_elements = items.len();
    let total_pages = total_elements.div_ceil(page_size);

    let start = page_index.saturating_mul(page_size);
    let page_items = if start >= total_elements {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(total_elements);
        items.into_iter().skip(start).take(end - start).collect()
    };

    PageResult {
        items: page_items,
        total_elements,
        current_page: page_index,
        total_pages,
    }
}
