//! Bubble sort.
//!
//! Runs one full pass per element, each pass bubbling the largest remaining element to the end
//! of the unsorted prefix. Once the input is ordered the remaining passes only compare. The sort
//! is stable, equal elements are never swapped.

use std::cmp::Ordering;

sort_impl!("rust_bubble_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for pass in 0..len {
        // After `pass` passes the last `pass` elements are in their final position.
        let unsorted_end = len - pass;

        for i in 1..unsorted_end {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        let mut v = [3, 1, 2];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3]);

        let mut v: [i32; 0] = [];
        sort(&mut v);
        assert_eq!(v, []);

        let mut v = [5];
        sort(&mut v);
        assert_eq!(v, [5]);
    }

    #[test]
    fn floats_total_cmp() {
        let mut v = [2.5f64, -0.0, 999_999.9, 1.0, 2.5];
        sort_by(&mut v, f64::total_cmp);
        assert_eq!(v, [-0.0, 1.0, 2.5, 2.5, 999_999.9]);
    }

    #[test]
    fn counts_comparisons() {
        // len passes, pass p compares len - p - 1 pairs.
        let len = 10;
        let mut v: Vec<i32> = (0..len).rev().collect();
        let mut comp_count = 0;
        sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        assert_eq!(comp_count, (len * (len - 1) / 2) as usize);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}
