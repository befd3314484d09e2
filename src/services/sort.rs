//! Hand-rolled sorting strategies used by the report pipeline and the
//! benchmark harness.
//!
//! All three algorithms sort in place through a key extractor, so the same
//! code path orders quotes by price and plain dates by calendar order. Keys
//! only need `PartialOrd`: on float keys every comparison against NaN is
//! false, which leaves NaN-bearing elements in unspecified positions but
//! never drops or duplicates them.

use crate::models::DailyQuote;

/// Pivot selection policy for [`quicksort_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotPolicy {
    /// Partition around the last element of the range.
    Last,
    /// Order the first, middle and last elements of the range, then partition
    /// around their median. Less likely to go quadratic on partially ordered
    /// input such as date lists.
    MedianOfThree,
}

/// Classic insertion sort: shifts predecessors right until the held-out
/// element fits. O(n²) in general, O(n) on already sorted input, stable.
pub fn insertion_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let current = items[i].clone();
        let current_key = key(&current);
        let mut j = i;
        while j > 0 && key(&items[j - 1]) > current_key {
            items[j] = items[j - 1].clone();
            j -= 1;
        }
        items[j] = current;
    }
}

/// Iterative quicksort over an explicit range stack, Lomuto partition.
///
/// Average O(n log n), worst O(n²) on adversarial pivots. Not stable. The
/// longer partition is pushed first so the stack never grows past O(log n)
/// ranges.
pub fn quicksort_by_key<T, K, F>(items: &mut [T], policy: PivotPolicy, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, items.len() - 1)];
    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(items, low, high, policy, &key);

        let left_len = pivot - low;
        let right_len = high - pivot;
        if left_len > right_len {
            if pivot > low {
                stack.push((low, pivot - 1));
            }
            if pivot < high {
                stack.push((pivot + 1, high));
            }
        } else {
            if pivot < high {
                stack.push((pivot + 1, high));
            }
            if pivot > low {
                stack.push((low, pivot - 1));
            }
        }
    }
}

/// Lomuto partition of `items[low..=high]`; returns the pivot's final index.
fn partition<T, K, F>(
    items: &mut [T],
    low: usize,
    high: usize,
    policy: PivotPolicy,
    key: &F,
) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if policy == PivotPolicy::MedianOfThree && high - low >= 2 {
        let mid = low + (high - low) / 2;
        if key(&items[mid]) < key(&items[low]) {
            items.swap(mid, low);
        }
        if key(&items[high]) < key(&items[low]) {
            items.swap(high, low);
        }
        if key(&items[high]) < key(&items[mid]) {
            items.swap(high, mid);
        }
        // Median sits at mid; park it in the pivot slot.
        items.swap(mid, high);
    }

    let pivot_key = key(&items[high]);
    let mut store = low;
    for j in low..high {
        if key(&items[j]) <= pivot_key {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

/// Top-down merge sort. O(n log n) in every case and stable, at the cost of
/// two half-length temporaries per recursion level.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    merge_sort_recursive(items, &key);
}

fn merge_sort_recursive<T, K, F>(items: &mut [T], key: &F)
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();
    merge_sort_recursive(&mut left, key);
    merge_sort_recursive(&mut right, key);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // Take from the right only when strictly smaller, so equal keys keep
        // their input order.
        if key(&right[j]) < key(&left[i]) {
            items[k] = right[j].clone();
            j += 1;
        } else {
            items[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        items[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

/// Sorting strategy selected at the benchmark prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Insertion,
    Quick,
    Merge,
}

impl SortAlgorithm {
    /// Map a one-letter prompt code to an algorithm.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "i" => Some(SortAlgorithm::Insertion),
            "q" => Some(SortAlgorithm::Quick),
            "m" => Some(SortAlgorithm::Merge),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Quick => "QuickSort",
            SortAlgorithm::Merge => "Merge Sort",
        }
    }

    /// Sort quotes ascending by their daily low price.
    pub fn sort_by_low(&self, quotes: &mut [DailyQuote]) {
        match self {
            SortAlgorithm::Insertion => insertion_sort_by_key(quotes, |q| q.low),
            SortAlgorithm::Quick => quicksort_by_key(quotes, PivotPolicy::Last, |q| q.low),
            SortAlgorithm::Merge => merge_sort_by_key(quotes, |q| q.low),
        }
    }
}
