//! Property tests for near-equal overlapping splitting.

use banksplit::split::split_groups;

fn groups(len: usize, target: usize, overlap: usize) -> Vec<Vec<usize>> {
    let items: Vec<usize> = (0..len).collect();
    split_groups(&items, target, overlap)
        .map(<[usize]>::to_vec)
        .collect()
}

const CASES: [(usize, usize, usize); 8] = [
    (100, 20, 4),
    (95, 10, 0),
    (1000, 64, 8),
    (37, 5, 2),
    (12, 11, 0),
    (250, 50, 10),
    (7, 3, 0),
    (500, 100, 0),
];

#[test]
fn test_every_item_is_covered() {
    for (len, target, overlap) in CASES {
        let mut seen = vec![false; len];
        for group in groups(len, target, overlap) {
            for idx in group {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "gap for {len}/{target}/{overlap}");
    }
}

#[test]
fn test_groups_are_contiguous_and_ordered() {
    for (len, target, overlap) in CASES {
        let groups = groups(len, target, overlap);
        assert_eq!(groups[0][0], 0);
        assert_eq!(groups.last().and_then(|g| g.last()), Some(&(len - 1)));
        for group in &groups {
            assert!(group.windows(2).all(|w| w[1] == w[0] + 1));
        }
        for pair in groups.windows(2) {
            assert!(pair[0][0] < pair[1][0]);
        }
    }
}

#[test]
fn test_neighbours_share_exactly_the_overlap() {
    for (len, target, overlap) in CASES {
        for pair in groups(len, target, overlap).windows(2) {
            let shared = pair[0].iter().filter(|i| pair[1].contains(i)).count();
            assert_eq!(shared, overlap, "overlap for {len}/{target}/{overlap}");
        }
    }
}

#[test]
fn test_groups_are_near_target_size() {
    for (len, target, overlap) in CASES {
        let groups = groups(len, target, overlap);
        let last = groups.len() - 1;
        for (i, group) in groups.iter().enumerate() {
            assert!(!group.is_empty());
            if i != 0 && i != last {
                assert!(group.len() >= target / 2);
                assert!(group.len() <= 2 * target + overlap);
            }
        }
    }
}

#[test]
fn test_no_split_when_target_covers_length() {
    for len in [1, 5, 20] {
        let groups = groups(len, 20, 0);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), len);
    }
}

#[test]
fn test_worked_example_sizes() {
    let sizes: Vec<usize> = groups(100, 20, 4).iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![22, 24, 24, 24, 22]);

    let sizes: Vec<usize> = groups(95, 10, 0).iter().map(Vec::len).collect();
    assert_eq!(sizes.len(), 10);
    assert_eq!(sizes.iter().sum::<usize>(), 95);
}
