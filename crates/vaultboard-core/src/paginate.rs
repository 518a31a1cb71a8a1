/// Slice one 1-based page out of an ordered sequence. A page past the end
/// is not an error; it yields an empty slice (callers are expected to clamp
/// before requesting).
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Vec<T> {
    if page_size == 0 || page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect()
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        item_count.div_ceil(page_size)
    }
}

/// Clamp a requested page into the valid range for the current item count.
/// A stale index pointing past a freshly narrowed set resets to page 1.
pub fn clamp_page(page: usize, item_count: usize, page_size: usize) -> usize {
    let total = total_pages(item_count, page_size);
    if page == 0 || page > total { 1 } else { page }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_are_one_based() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 10, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 10, 3), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 10, 2).is_empty());
        assert!(paginate(&items, 10, usize::MAX).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn narrowing_below_current_page_resets_to_one() {
        // On page 3 of a 25-item set, a filter change shrinks it to 12 items
        // (2 pages): the visible page must reset to 1.
        assert_eq!(clamp_page(3, 25, 10), 3);
        assert_eq!(clamp_page(3, 12, 10), 1);
    }

    #[test]
    fn zero_page_size_is_inert() {
        let items = vec![1, 2, 3];
        assert!(paginate(&items, 0, 1).is_empty());
        assert_eq!(total_pages(3, 0), 0);
    }
}
