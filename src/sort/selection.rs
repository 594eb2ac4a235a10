//! Selection sort driver.

use super::{SORT_HOLD, SortAlgo};
use crate::seq::{Driver, Emitter, Hold, MarkRole, StepError};

/// Finds the minimum of the unsorted suffix and swaps it into place;
/// index `i` is settled right after its swap.
pub struct SelectionSort {
    arr: Vec<i64>,
    sorted: Vec<usize>,
}

impl SelectionSort {
    pub fn new(arr: Vec<i64>) -> SelectionSort {
        SelectionSort {
            arr,
            sorted: Vec::new(),
        }
    }
}

impl Driver<Vec<i64>> for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.complexity(SortAlgo::Selection.complexity())?;
        em.log("Starting Selection Sort...")?;
        let n = self.arr.len();

        for i in 0..n {
            let mut min_idx = i;
            em.mark(MarkRole::Compare, vec![i], Hold::ZERO)?;
            for j in i + 1..n {
                em.mark(MarkRole::Compare, vec![min_idx, j], SORT_HOLD)?;
                if self.arr[j] < self.arr[min_idx] {
                    min_idx = j;
                }
            }

            if min_idx != i {
                em.log(format!("Swapping {} and {}", self.arr[i], self.arr[min_idx]))?;
                em.mark(MarkRole::Swap, vec![i, min_idx], Hold::ZERO)?;
                self.arr.swap(i, min_idx);
                em.snapshot(self.arr.clone(), SORT_HOLD)?;
                em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
            }
            self.sorted.push(i);
            em.mark(MarkRole::Sorted, self.sorted.clone(), Hold::ZERO)?;
        }

        em.log("Selection Sort Completed")?;
        em.mark(MarkRole::Compare, vec![], Hold::ZERO)?;
        Ok(())
    }
}
