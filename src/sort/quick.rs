//! Quick sort driver.

use super::{SORT_HOLD, SortAlgo};
use crate::seq::{Driver, Emitter, Hold, MarkRole, StepError};

/// Lomuto partition with the last element as pivot. Recursion stays inside
/// the driver and emits into the single linear event stream.
pub struct QuickSort {
    arr: Vec<i64>,
}

impl QuickSort {
    pub fn new(arr: Vec<i64>) -> QuickSort {
        QuickSort { arr }
    }

    fn sort_range(
        &mut self,
        low: usize,
        high: usize,
        em: &mut Emitter<'_, Vec<i64>>,
    ) -> Result<(), StepError> {
        if low >= high {
            return Ok(());
        }
        let pi = self.partition(low, high, em)?;
        if pi > 0 {
            self.sort_range(low, pi - 1, em)?;
        }
        self.sort_range(pi + 1, high, em)
    }

    /// Returns the final pivot index.
    fn partition(
        &mut self,
        low: usize,
        high: usize,
        em: &mut Emitter<'_, Vec<i64>>,
    ) -> Result<usize, StepError> {
        let pivot = self.arr[high];
        em.log(format!("Pivot: {pivot}"))?;
        em.mark(MarkRole::Swap, vec![high], Hold::ZERO)?;

        // next slot for a value smaller than the pivot
        let mut store = low;
        for j in low..high {
            em.mark(MarkRole::Compare, vec![j, high], SORT_HOLD)?;
            if self.arr[j] < pivot {
                self.arr.swap(store, j);
                em.snapshot(self.arr.clone(), SORT_HOLD)?;
                store += 1;
            }
        }
        self.arr.swap(store, high);
        em.snapshot(self.arr.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Swap, vec![], SORT_HOLD)?;
        Ok(store)
    }
}

impl Driver<Vec<i64>> for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.complexity(SortAlgo::Quick.complexity())?;
        em.log("Starting Quick Sort...")?;
        let n = self.arr.len();
        if n > 1 {
            self.sort_range(0, n - 1, em)?;
        }
        em.mark(MarkRole::Sorted, (0..n).collect(), Hold::ZERO)?;
        em.log("Quick Sort Completed")?;
        em.mark(MarkRole::Compare, vec![], Hold::ZERO)?;
        Ok(())
    }
}
