//! Sorting Algorithms
//!
//! Every function sorts its slice in place into non-decreasing order. Empty and
//! single-element slices return immediately. All index arithmetic stays within
//! `[0, n)` and midpoints are computed as `lo + (hi - lo) / 2`.

/// InsertionSort algorithm
///
/// O(n²) worst case, O(n) on already-sorted input. Shifts larger elements right
/// instead of swapping.
pub fn insertionsort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// ShellSort algorithm
///
/// Halving gap sequence `n/2, n/4, ..., 1`. The final pass with gap 1 is a plain
/// insertion sort over an almost-sorted slice.
pub fn shellsort(data: &mut [i64]) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > key {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = key;
        }
        gap /= 2;
    }
}

/// MergeSort algorithm
///
/// Top-down over the inclusive range `[lo, hi]`. A single scratch buffer of
/// length `n` is allocated per call and shared by every merge in that call.
pub fn mergesort(data: &mut [i64]) {
    if data.len() <= 1 {
        return;
    }
    let mut buffer = vec![0i64; data.len()];
    let hi = data.len() - 1;
    mergesort_range(data, &mut buffer, 0, hi);
}

fn mergesort_range(data: &mut [i64], buffer: &mut [i64], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    mergesort_range(data, buffer, lo, mid);
    mergesort_range(data, buffer, mid + 1, hi);

    // Halves already in order
    if data[mid] <= data[mid + 1] {
        return;
    }
    merge(data, buffer, lo, mid, hi);
}

fn merge(data: &mut [i64], buffer: &mut [i64], lo: usize, mid: usize, hi: usize) {
    buffer[lo..=hi].copy_from_slice(&data[lo..=hi]);

    let mut i = lo;
    let mut j = mid + 1;
    let mut k = lo;
    while i <= mid && j <= hi {
        // `<=` keeps equal keys in their original order
        if buffer[i] <= buffer[j] {
            data[k] = buffer[i];
            i += 1;
        } else {
            data[k] = buffer[j];
            j += 1;
        }
        k += 1;
    }
    while i <= mid {
        data[k] = buffer[i];
        i += 1;
        k += 1;
    }
    while j <= hi {
        data[k] = buffer[j];
        j += 1;
        k += 1;
    }
}

/// QuickSort algorithm
///
/// Pivot policy: median of three (`lo`, midpoint, `hi`), so sorted and
/// reverse-sorted columns partition evenly instead of degrading to O(n²).
/// Hoare partitioning stops on keys equal to the pivot, which keeps inputs with
/// many duplicates balanced too. The smaller partition is recursed into and the
/// larger one is handled by the loop, bounding stack depth to O(log n).
pub fn quicksort(data: &mut [i64]) {
    if data.len() <= 1 {
        return;
    }
    let hi = data.len() - 1;
    quicksort_range(data, 0, hi);
}

fn quicksort_range(data: &mut [i64], mut lo: usize, mut hi: usize) {
    while lo < hi {
        let split = partition(data, lo, hi);
        if split - lo < hi - split {
            quicksort_range(data, lo, split);
            lo = split + 1;
        } else {
            quicksort_range(data, split + 1, hi);
            hi = split;
        }
    }
}

/// Orders `data[lo]`, `data[mid]`, `data[hi]` so the median sits at `mid`.
fn median_of_three(data: &mut [i64], lo: usize, mid: usize, hi: usize) {
    if data[mid] < data[lo] {
        data.swap(lo, mid);
    }
    if data[hi] < data[lo] {
        data.swap(lo, hi);
    }
    if data[hi] < data[mid] {
        data.swap(mid, hi);
    }
}

/// Hoare partition of `[lo, hi]` (requires `lo < hi`).
///
/// Returns `split` in `[lo, hi)` such that every element of `[lo, split]` is
/// `<=` every element of `[split + 1, hi]`.
fn partition(data: &mut [i64], lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi);
    let pivot = data[mid];

    // data[lo] <= pivot <= data[hi] bounds both scans
    let mut i = lo;
    let mut j = hi;
    loop {
        while data[i] < pivot {
            i += 1;
        }
        while data[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// HeapSort algorithm
///
/// Builds a max-heap over the whole slice, then repeatedly swaps the root to
/// the tail and restores the heap over the shrinking prefix. O(1) extra space.
pub fn heapsort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(data, n, root);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

fn sift_down(data: &mut [i64], heap_size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < heap_size && data[left] > data[largest] {
            largest = left;
        }
        if right < heap_size && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        data.swap(root, largest);
        root = largest;
    }
}

/// True when every element is `<=` its successor
pub fn is_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
