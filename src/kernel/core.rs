//! Shared binary-search engine the row-strided, bitfield, and
//! column-contiguous kernel families all funnel into, parameterised over a
//! probe closure `Fn(usize) -> u64` that decodes (and, for the `_sub`
//! family, masks) the key at a row index. One generic core instead of one
//! copy per width/order/layout/direction combination.

/// Least index in `[*first, *last]` whose probed key equals `search`, or
/// `*last + 1` if none. Narrows `[*first, *last]` to the final probing
/// window on return.
pub(crate) fn find_first_by(probe: impl Fn(usize) -> u64, first: &mut usize, last: &mut usize, search: u64) -> usize {
    let mut f = *first;
    let mut l = *last;
    let mut found = l.wrapping_add(1);
    while f <= l {
        let mid = f + (l - f) / 2;
        let x = probe(mid);
        if x == search {
            if mid == 0 {
                *first = f;
                *last = l;
                return 0;
            }
            found = mid;
            l = mid - 1;
        } else if x < search {
            f = mid + 1;
        } else if mid == 0 {
            *first = f;
            *last = l;
            return found;
        } else {
            l = mid - 1;
        }
    }
    *first = f;
    *last = l;
    found
}

/// Greatest index in `[*first, *last]` whose probed key equals `search`, or
/// `*last + 1` if none. Narrows `[*first, *last]` to the final probing
/// window on return.
pub(crate) fn find_last_by(probe: impl Fn(usize) -> u64, first: &mut usize, last: &mut usize, search: u64) -> usize {
    let mut f = *first;
    let mut l = *last;
    let mut found = l.wrapping_add(1);
    while f <= l {
        let mid = f + (l - f) / 2;
        let x = probe(mid);
        if x == search {
            found = mid;
            f = mid + 1;
        } else if x < search {
            f = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            l = mid - 1;
        }
    }
    *first = f;
    *last = l;
    found
}

/// Advances `*pos` to `*pos + 1` and returns `true` iff that index is within
/// `[..=last]` and its probed key still equals `search`.
pub(crate) fn has_next_by(probe: impl Fn(usize) -> u64, pos: &mut usize, last: usize, search: u64) -> bool {
    let next = *pos + 1;
    if next > last {
        return false;
    }
    if probe(next) == search {
        *pos = next;
        true
    } else {
        false
    }
}

/// Decrements `*pos` to `*pos - 1` and returns `true` iff that index is
/// within `[first..]` and its probed key still equals `search`.
pub(crate) fn has_prev_by(probe: impl Fn(usize) -> u64, first: usize, pos: &mut usize, search: u64) -> bool {
    if *pos == 0 || *pos - 1 < first {
        return false;
    }
    let prev = *pos - 1;
    if probe(prev) == search {
        *pos = prev;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(data: &[u64]) -> impl Fn(usize) -> u64 + '_ {
        move |i| data[i]
    }

    #[test]
    fn find_first_returns_least_matching_index() {
        let data = [1u64, 3, 3, 3, 5, 7];
        let (mut f, mut l) = (0usize, data.len() - 1);
        assert_eq!(find_first_by(probe(&data), &mut f, &mut l, 3), 1);
    }

    #[test]
    fn find_first_miss_returns_last_plus_one() {
        let data = [1u64, 3, 5, 7];
        let (mut f, mut l) = (0usize, data.len() - 1);
        assert_eq!(find_first_by(probe(&data), &mut f, &mut l, 4), 4);
    }

    #[test]
    fn find_first_matches_at_index_zero_takes_fast_path() {
        let data = [2u64, 3, 5];
        let (mut f, mut l) = (0usize, data.len() - 1);
        assert_eq!(find_first_by(probe(&data), &mut f, &mut l, 2), 0);
    }

    #[test]
    fn find_last_returns_greatest_matching_index() {
        let data = [1u64, 3, 3, 3, 5, 7];
        let (mut f, mut l) = (0usize, data.len() - 1);
        assert_eq!(find_last_by(probe(&data), &mut f, &mut l, 3), 3);
    }

    #[test]
    fn empty_window_returns_last_plus_one_unchanged() {
        let data = [1u64, 3, 5];
        let (mut f, mut l) = (2usize, 1usize); // first > last
        assert_eq!(find_first_by(probe(&data), &mut f, &mut l, 3), 2);
        assert_eq!((f, l), (2, 1));
    }

    #[test]
    fn has_next_walks_the_contiguous_match_run() {
        let data = [1u64, 3, 3, 3, 5];
        let (mut f, mut l) = (0usize, data.len() - 1);
        let mut pos = find_first_by(probe(&data), &mut f, &mut l, 3);
        assert_eq!(pos, 1);
        assert!(has_next_by(probe(&data), &mut pos, 4, 3));
        assert_eq!(pos, 2);
        assert!(has_next_by(probe(&data), &mut pos, 4, 3));
        assert_eq!(pos, 3);
        assert!(!has_next_by(probe(&data), &mut pos, 4, 3));
        assert_eq!(pos, 3);
    }

    #[test]
    fn has_prev_walks_backward_from_find_last() {
        let data = [1u64, 3, 3, 3, 5];
        let (mut f, mut l) = (0usize, data.len() - 1);
        let mut pos = find_last_by(probe(&data), &mut f, &mut l, 3);
        assert_eq!(pos, 3);
        assert!(has_prev_by(probe(&data), 0, &mut pos, 3));
        assert_eq!(pos, 2);
        assert!(has_prev_by(probe(&data), 0, &mut pos, 3));
        assert_eq!(pos, 1);
        assert!(!has_prev_by(probe(&data), 0, &mut pos, 3));
    }

    /// `find_first`'s result is a valid lower bound to reuse for `find_last`
    /// over the original upper bound — the "narrowed window" chaining the
    /// kernels are meant to support.
    #[test]
    fn position_from_find_first_reused_as_find_last_lower_bound() {
        let data = [1u64, 3, 3, 3, 5, 7];
        let (mut f, mut l) = (0usize, data.len() - 1);
        let first = find_first_by(probe(&data), &mut f, &mut l, 3);

        let expected_last = {
            let (mut f, mut l) = (0usize, data.len() - 1);
            find_last_by(probe(&data), &mut f, &mut l, 3)
        };

        let (mut f, mut l) = (first, data.len() - 1);
        assert_eq!(find_last_by(probe(&data), &mut f, &mut l, 3), expected_last);
    }
}
