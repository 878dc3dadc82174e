use std::cmp::Ordering;

// Runs at or below this length are insertion-sorted.
const INSERTION_THRESHOLD: usize = 16;

/// Stable merge sort that tolerates comparators which are not a total order.
///
/// `slice::sort_by` may panic on an inconsistent comparator; the falsy and
/// `NaN` rules produce exactly such comparators, so sorting goes through here.
/// Every comparator, however inconsistent, yields some permutation.
pub(crate) fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let mut scratch = items.to_vec();
    sort_run(items, &mut scratch, &mut compare);
}

fn sort_run<T, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_THRESHOLD {
        insertion_sort(items, compare);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        sort_run(left, scratch_left, compare);
        sort_run(right, scratch_right, compare);
    }

    // halves already in order across the seam
    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    merge(left, right, items, compare);
}

// Take from the left run unless the right head is strictly less.
fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);

    for slot in out.iter_mut() {
        let take_right = j < right.len()
            && (i >= left.len() || compare(&right[j], &left[i]) == Ordering::Less);

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_and_keeps_equal_keys_in_input_order() {
        let mut items: Vec<(u8, usize)> = (0..40).map(|i| ((i % 3) as u8, i)).collect();
        stable_sort_by(&mut items, |a, b| a.0.cmp(&b.0));

        assert!(items.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(
            items
                .windows(2)
                .filter(|w| w[0].0 == w[1].0)
                .all(|w| w[0].1 < w[1].1)
        );
    }

    proptest! {
        #[test]
        fn matches_std_stable_sort(mut items in prop::collection::vec(any::<i16>(), 0..200)) {
            let mut expected = items.clone();
            expected.sort();
            stable_sort_by(&mut items, Ord::cmp);

            prop_assert_eq!(items, expected);
        }

        #[test]
        fn inconsistent_comparator_still_yields_a_permutation(
            len in 0usize..120,
            answers in prop::collection::vec(0u8..3, 1..64),
        ) {
            let mut items: Vec<usize> = (0..len).collect();
            let mut step = 0usize;
            stable_sort_by(&mut items, |_, _| {
                step += 1;
                match answers[step % answers.len()] {
                    0 => Ordering::Less,
                    1 => Ordering::Equal,
                    _ => Ordering::Greater,
                }
            });

            let mut seen = items.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..len).collect::<Vec<_>>());
        }
    }
}
