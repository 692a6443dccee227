//! Near-equal splitting of ordered sequences with overlap.

use std::iter::FusedIterator;

/// Lazy iterator over overlapping groups of a slice.
///
/// Created by [`split_groups`]. Cloning the iterator before it is consumed
/// gives an independent pass over the same groups.
#[derive(Debug, Clone)]
pub struct Groups<'a, T> {
    items: &'a [T],
    /// Adjusted group size; `None` when the whole slice is one group.
    step: Option<f64>,
    half_overlap: usize,
    index: usize,
    finished: bool,
}

/// Split `items` into groups of roughly `target` elements where neighbouring
/// groups share `overlap` elements.
///
/// When `target` is at least the slice length the whole slice is the only
/// group. Otherwise the group size is adjusted to `len / round(len / target)`
/// so all groups come out nearly the same size, and group `i` spans
/// `round(i * size) - overlap/2 .. round((i + 1) * size) + overlap/2`,
/// clipped to the slice.
///
/// `overlap` is expected to be even and smaller than `target`; a `target` of
/// zero is treated as one.
pub fn split_groups<T>(items: &[T], target: usize, overlap: usize) -> Groups<'_, T> {
    #[allow(clippy::cast_precision_loss)]
    let target = target.max(1) as f64;
    split_groups_by_size(items, target, overlap)
}

/// Like [`split_groups`], but with a real-valued target size.
///
/// A target of `len / k` for `1 <= k <= len` yields exactly `k` groups,
/// which is how a bank is cut into a fixed number of bins. Targets below one
/// are treated as one.
pub fn split_groups_by_size<T>(items: &[T], target: f64, overlap: usize) -> Groups<'_, T> {
    let target = target.max(1.0);

    #[allow(clippy::cast_precision_loss)]
    let len = items.len() as f64;
    let step = (target < len).then(|| len / (len / target).round());

    Groups {
        items,
        step,
        half_overlap: overlap / 2,
        index: 0,
        finished: false,
    }
}

impl<'a, T> Iterator for Groups<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(step) = self.step else {
            self.finished = true;
            return Some(self.items);
        };

        let len = self.items.len();

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let (start, end) = {
            let i = self.index as f64;
            let start = (i * step).round() as usize;
            let end = ((i + 1.0) * step).round() as usize;
            (
                start.saturating_sub(self.half_overlap),
                end + self.half_overlap,
            )
        };

        self.index += 1;
        if end >= len {
            self.finished = true;
        }

        Some(&self.items[start..end.min(len)])
    }
}

impl<T> FusedIterator for Groups<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(len: usize, target: usize, overlap: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..len).collect();
        split_groups(&items, target, overlap).map(<[usize]>::len).collect()
    }

    #[test]
    fn test_target_covers_everything() {
        let items = vec![1, 2, 3];
        let groups: Vec<&[i32]> = split_groups(&items, 3, 0).collect();
        assert_eq!(groups, vec![&items[..]]);

        let groups: Vec<&[i32]> = split_groups(&items, 10, 2).collect();
        assert_eq!(groups, vec![&items[..]]);
    }

    #[test]
    fn test_even_split_without_overlap() {
        assert_eq!(sizes(100, 20, 0), vec![20; 5]);
    }

    #[test]
    fn test_even_split_with_overlap() {
        assert_eq!(sizes(100, 20, 4), vec![22, 24, 24, 24, 22]);
    }

    #[test]
    fn test_adjusted_size_for_uneven_length() {
        // 95 / round(9.5) = 9.5 per group
        let sizes = sizes(95, 10, 0);
        assert_eq!(sizes.len(), 10);
        assert_eq!(sizes.iter().sum::<usize>(), 95);
        assert!(sizes.iter().all(|&s| s == 9 || s == 10));
    }

    #[test]
    fn test_overlap_is_shared_between_neighbours() {
        let items: Vec<usize> = (0..50).collect();
        let groups: Vec<&[usize]> = split_groups(&items, 10, 4).collect();
        for pair in groups.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(&a[a.len() - 4..], &b[..4]);
        }
    }

    #[test]
    fn test_restartable_by_clone() {
        let items: Vec<usize> = (0..30).collect();
        let groups = split_groups(&items, 7, 2);
        let first: Vec<&[usize]> = groups.clone().collect();
        let second: Vec<&[usize]> = groups.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let items = [1, 2, 3, 4];
        let mut groups = split_groups(&items, 2, 0);
        assert_eq!(groups.next(), Some(&items[..2]));
        assert_eq!(groups.next(), Some(&items[2..]));
        assert_eq!(groups.next(), None);
        assert_eq!(groups.next(), None);
    }

    #[test]
    fn test_zero_target_treated_as_one() {
        assert_eq!(sizes(3, 0, 0), vec![1, 1, 1]);
    }

    #[test]
    fn test_fractional_target_gives_requested_group_count() {
        let items: Vec<usize> = (0..11).collect();
        let groups: Vec<&[usize]> = split_groups_by_size(&items, 11.0 / 4.0, 0).collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups.concat(), items);
        assert!(groups.iter().all(|g| g.len() == 2 || g.len() == 3));
    }

    #[test]
    fn test_fractional_target_at_or_above_len_is_whole_slice() {
        let items = [1, 2, 3];
        let groups: Vec<&[i32]> = split_groups_by_size(&items, 3.0, 0).collect();
        assert_eq!(groups, vec![&items[..]]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_group() {
        let items: [u8; 0] = [];
        let groups: Vec<&[u8]> = split_groups(&items, 5, 0).collect();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_empty());
    }
}
