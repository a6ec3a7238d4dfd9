//! Pagination policy for search results.
//!
//! Pure functions of `(page, num_pages)`: no state, no side effects.
//!
//! | situation                         | previous | next |
//! |-----------------------------------|----------|------|
//! | `num_pages <= 1`                  | –        | –    |
//! | page 1 of many                    | –        | ✓    |
//! | last page of many                 | ✓        | –    |
//! | interior page                     | ✓        | ✓    |
//! | page 0 or beyond the last page    | –        | –    |

use crate::ui::viewmodel::PaginationControls;

/// Number of pages needed for `total` results, `ceil(total / per_page)`.
///
/// Returns 0 when `per_page` is 0.
///
/// # Example
///
/// ```rust
/// use forkify::app::pagination::num_pages;
///
/// assert_eq!(num_pages(25, 10), 3);
/// assert_eq!(num_pages(30, 10), 3);
/// assert_eq!(num_pages(0, 10), 0);
/// ```
#[must_use]
pub const fn num_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Bounds `[start, end)` of `page` (1-based) in a sequence of `total` items.
///
/// Both bounds are clamped to `total`, so an out-of-range page yields an empty
/// window rather than an error. Page 0 is out of range.
///
/// # Example
///
/// ```rust
/// use forkify::app::pagination::page_bounds;
///
/// assert_eq!(page_bounds(3, 10, 25), 20..25);
/// assert_eq!(page_bounds(4, 10, 25), 25..25);
/// assert_eq!(page_bounds(0, 10, 25), 0..0);
/// ```
#[must_use]
pub fn page_bounds(page: usize, per_page: usize, total: usize) -> std::ops::Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = page.saturating_mul(per_page).min(total);
    start..end
}

/// Decides which pagination buttons to show on `page` of `num_pages`.
#[must_use]
pub const fn controls(page: usize, num_pages: usize) -> PaginationControls {
    let in_range = page >= 1 && page <= num_pages;
    let many = num_pages > 1;

    PaginationControls {
        page,
        num_pages,
        previous: if in_range && many && page > 1 { Some(page - 1) } else { None },
        next: if in_range && many && page < num_pages { Some(page + 1) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_shows_nothing() {
        assert!(controls(1, 1).is_empty());
        assert!(controls(1, 0).is_empty());
    }

    #[test]
    fn first_page_shows_only_next() {
        let c = controls(1, 3);
        assert_eq!(c.previous, None);
        assert_eq!(c.next, Some(2));
    }

    #[test]
    fn interior_page_shows_both() {
        let c = controls(2, 3);
        assert_eq!(c.previous, Some(1));
        assert_eq!(c.next, Some(3));
    }

    #[test]
    fn last_page_shows_only_previous() {
        let c = controls(3, 3);
        assert_eq!(c.previous, Some(2));
        assert_eq!(c.next, None);
    }

    #[test]
    fn out_of_range_pages_show_nothing() {
        assert!(controls(0, 3).is_empty());
        assert!(controls(7, 3).is_empty());
    }

    #[test]
    fn every_full_page_has_per_page_items() {
        let total = 25;
        let per_page = 10;
        for page in 1..=num_pages(total, per_page) {
            let len = page_bounds(page, per_page, total).len();
            if page < num_pages(total, per_page) {
                assert_eq!(len, per_page);
            } else {
                assert_eq!(len, total % per_page);
            }
        }
        assert_eq!(page_bounds(2, 10, 20).len(), 10);
    }
}
