use std::ops::Range;

/// Chapters shown per page of the chapter list
pub const CHAPTERS_PER_PAGE: usize = 50;

/// Zero based page arithmetic over a list of `total` items.
/// There is always at least one page, even for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    per_page: usize,
}

impl Pagination {
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn clamp(&self, page: usize) -> usize {
        page.min(self.page_count() - 1)
    }

    /// Index range of the items on `page`
    pub fn range(&self, page: usize) -> Range<usize> {
        let start = (self.clamp(page) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn has_previous(&self, page: usize) -> bool {
        self.clamp(page) > 0
    }

    pub fn has_next(&self, page: usize) -> bool {
        self.clamp(page) + 1 < self.page_count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let pagination = Pagination::new(0, CHAPTERS_PER_PAGE);

        assert_eq!(pagination.page_count(), 1);
        assert_eq!(pagination.range(0), 0..0);
        assert!(!pagination.has_previous(0));
        assert!(!pagination.has_next(0));
    }

    #[test]
    fn test_last_page_is_partial() {
        let pagination = Pagination::new(120, 50);

        assert_eq!(pagination.page_count(), 3);
        assert_eq!(pagination.range(1), 50..100);
        assert_eq!(pagination.range(2), 100..120);
        assert!(pagination.has_previous(2));
        assert!(!pagination.has_next(2));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let pagination = Pagination::new(100, 50);

        assert_eq!(pagination.clamp(9), 1);
        assert_eq!(pagination.range(9), 50..100);
    }

    #[test]
    fn test_zero_per_page_is_treated_as_one() {
        let pagination = Pagination::new(3, 0);

        assert_eq!(pagination.page_count(), 3);
        assert_eq!(pagination.range(2), 2..3);
    }
}
