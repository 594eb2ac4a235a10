//! Insertion sort driver.

use super::{SORT_HOLD, SortAlgo};
use crate::seq::{Driver, Emitter, Hold, MarkRole, StepError};

/// Grows a sorted prefix by shifting larger values right and dropping the
/// key into the gap.
pub struct InsertionSort {
    arr: Vec<i64>,
}

impl InsertionSort {
    pub fn new(arr: Vec<i64>) -> InsertionSort {
        InsertionSort { arr }
    }
}

impl Driver<Vec<i64>> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion sort"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.complexity(SortAlgo::Insertion.complexity())?;
        em.log("Starting Insertion Sort...")?;
        let n = self.arr.len();

        for i in 1..n {
            let key = self.arr[i];
            em.log(format!("Inserting {key}..."))?;
            em.mark(MarkRole::Compare, vec![i], SORT_HOLD)?;

            let mut j = i;
            while j > 0 && self.arr[j - 1] > key {
                em.mark(MarkRole::Compare, vec![j - 1, j], Hold::ZERO)?;
                em.mark(MarkRole::Swap, vec![j], Hold::ZERO)?;
                self.arr[j] = self.arr[j - 1];
                em.snapshot(self.arr.clone(), SORT_HOLD)?;
                j -= 1;
            }
            if j != i {
                self.arr[j] = key;
                em.snapshot(self.arr.clone(), Hold::ZERO)?;
            }
            em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
        }

        em.mark(MarkRole::Sorted, (0..n).collect(), Hold::ZERO)?;
        em.log("Insertion Sort Completed")?;
        em.mark(MarkRole::Compare, vec![], Hold::ZERO)?;
        Ok(())
    }
}
