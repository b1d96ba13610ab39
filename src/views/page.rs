//! Display-level chunking of a list. Storage always holds the full list.

use crate::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> AppResult<Page<'_, T>> {
    if page == 0 {
        return Err(AppError::InvalidPage(page));
    }

    let size = page_size.max(1);
    let total_pages = items.len().div_ceil(size).max(1);
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Ok(Page {
        items: &items[start..end],
        number: page,
        total_pages,
        total_items: items.len(),
    })
}
