//! Merge sort driver.

use super::{SORT_HOLD, SortAlgo};
use crate::seq::{Driver, Emitter, Hold, MarkRole, StepError};

/// Top-down merge sort. Recursion stays inside the driver; sub-range
/// boundaries are plain parameters and all events land in one linear
/// stream.
pub struct MergeSort {
    arr: Vec<i64>,
}

impl MergeSort {
    pub fn new(arr: Vec<i64>) -> MergeSort {
        MergeSort { arr }
    }

    fn sort_range(
        &mut self,
        start: usize,
        end: usize,
        em: &mut Emitter<'_, Vec<i64>>,
    ) -> Result<(), StepError> {
        if start >= end {
            return Ok(());
        }
        let mid = (start + end) / 2;
        self.sort_range(start, mid, em)?;
        self.sort_range(mid + 1, end, em)?;
        self.merge(start, mid, end, em)
    }

    fn merge(
        &mut self,
        start: usize,
        mid: usize,
        end: usize,
        em: &mut Emitter<'_, Vec<i64>>,
    ) -> Result<(), StepError> {
        let left = self.arr[start..=mid].to_vec();
        let right = self.arr[mid + 1..=end].to_vec();

        let (mut i, mut j, mut k) = (0, 0, start);
        while i < left.len() && j < right.len() {
            em.mark(MarkRole::Compare, vec![start + i, mid + 1 + j], SORT_HOLD)?;
            if left[i] <= right[j] {
                self.arr[k] = left[i];
                i += 1;
            } else {
                self.arr[k] = right[j];
                j += 1;
            }
            em.mark(MarkRole::Swap, vec![k], Hold::ZERO)?;
            em.snapshot(self.arr.clone(), SORT_HOLD)?;
            em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
            k += 1;
        }
        while i < left.len() {
            em.mark(MarkRole::Swap, vec![k], Hold::ZERO)?;
            self.arr[k] = left[i];
            em.snapshot(self.arr.clone(), SORT_HOLD)?;
            em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
            i += 1;
            k += 1;
        }
        while j < right.len() {
            em.mark(MarkRole::Swap, vec![k], Hold::ZERO)?;
            self.arr[k] = right[j];
            em.snapshot(self.arr.clone(), SORT_HOLD)?;
            em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
            j += 1;
            k += 1;
        }
        Ok(())
    }
}

impl Driver<Vec<i64>> for MergeSort {
    fn name(&self) -> &'static str {
        "merge sort"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.complexity(SortAlgo::Merge.complexity())?;
        em.log("Starting Merge Sort...")?;
        let n = self.arr.len();
        if n > 1 {
            self.sort_range(0, n - 1, em)?;
        }
        em.mark(MarkRole::Sorted, (0..n).collect(), Hold::ZERO)?;
        em.log("Merge Sort Completed")?;
        em.mark(MarkRole::Compare, vec![], Hold::ZERO)?;
        Ok(())
    }
}
