use super::value_objects::PageMeta;

/// Derives pagination accounting for a page of results. Trusts `page` and
/// `limit` as echoed by the repository; no re-clamping happens here, the
/// translator already enforced `limit >= 1`.
///
/// `total_pages` is reported as `1` when the result set is empty so that a
/// first-page request over no data reads as "you are on the only page".
pub fn page_meta(total: u64, page: i64, limit: i64) -> PageMeta {
    let total_pages = if total == 0 {
        1
    } else {
        (total as i64 + limit - 1) / limit
    };

    PageMeta {
        page,
        limit,
        total,
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_three_pages() {
        let meta = page_meta(15, 1, 5);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_last_page() {
        let meta = page_meta(15, 3, 5);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_partial_final_page_rounds_up() {
        assert_eq!(page_meta(11, 1, 5).total_pages, 3);
    }

    #[test]
    fn test_empty_result_set_is_a_single_page() {
        let meta = page_meta(0, 1, 10);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_page_beyond_data_has_previous_but_no_next() {
        let meta = page_meta(15, 9, 5);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_non_positive_pages_report_no_previous_page() {
        assert!(!page_meta(15, 0, 5).has_previous_page);
        assert!(!page_meta(15, -2, 5).has_previous_page);
    }
}
