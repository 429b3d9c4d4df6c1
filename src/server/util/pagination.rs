/// Number of pages needed to show `total` items, `limit` at a time.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Zero-based page index for a one-indexed `page`, or `None` when the row offset of that
/// page does not fit in an SQL `OFFSET`.
pub fn page_index(page: u64, limit: u64) -> Option<u64> {
    page.checked_mul(limit)
        .filter(|end| *end <= i64::MAX as u64)
        .map(|_| page.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_pages_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn page_index_rejects_overflowing_offsets() {
        assert_eq!(page_index(1, 20), Some(0));
        assert_eq!(page_index(3, 100), Some(2));
        assert_eq!(page_index(i64::MAX as u64, 100), None);
        assert_eq!(page_index(u64::MAX, 2), None);
    }
}
