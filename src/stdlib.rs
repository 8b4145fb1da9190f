//! Standard library sorts wrapped as [`crate::Sort`] implementations, used as the reference
//! result in tests and as the baseline in benchmarks.

pub mod stable {
    use std::cmp::Ordering;

    sort_impl!("rust_std_stable");

    #[inline]
    pub fn sort<T: Ord>(v: &mut [T]) {
        v.sort();
    }

    #[inline]
    pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
        v.sort_by(compare);
    }
}

pub mod unstable {
    use std::cmp::Ordering;

    sort_impl!("rust_std_unstable");

    #[inline]
    pub fn sort<T: Ord>(v: &mut [T]) {
        v.sort_unstable();
    }

    #[inline]
    pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
        v.sort_unstable_by(compare);
    }
}
