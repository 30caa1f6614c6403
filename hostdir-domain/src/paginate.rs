use hostdir_types::page::Page;

/// Slice one page out of `items`.
///
/// There is always at least one page. Out-of-range requests are clamped into
/// `[1, page_count]` and the clamped number is returned in [`Page::page`]. A
/// `page_size` of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);

    let safe_page = usize::try_from(page.max(1))
        .unwrap_or(usize::MAX)
        .min(page_count);
    let start = (safe_page - 1) * page_size;
    let end = (start + page_size).min(total);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page: safe_page,
        page_count,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_has_one_empty_page() {
        let page = paginate::<u32>(&[], 3, 10);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn out_of_range_page_is_clamped_to_last() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 999, 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn zero_and_negative_pages_clamp_to_first() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&items, 0, 2).page, 1);
        assert_eq!(paginate(&items, -4, 2).items, vec![0, 1]);
    }

    #[test]
    fn middle_page_slice() {
        let items: Vec<u32> = (0..12).collect();
        let page = paginate(&items, 2, 5);
        assert_eq!(page.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = vec!["a", "b"];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.items, vec!["b"]);
    }
}
