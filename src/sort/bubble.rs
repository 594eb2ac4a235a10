//! Bubble sort driver.

use super::{SORT_HOLD, SortAlgo};
use crate::seq::{Driver, Emitter, Hold, MarkRole, StepError};

/// Settles the largest remaining value at the tail of each outer pass, so
/// the sorted tail grows right to left.
pub struct BubbleSort {
    arr: Vec<i64>,
    sorted: Vec<usize>,
}

impl BubbleSort {
    pub fn new(arr: Vec<i64>) -> BubbleSort {
        BubbleSort {
            arr,
            sorted: Vec::new(),
        }
    }
}

impl Driver<Vec<i64>> for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.complexity(SortAlgo::Bubble.complexity())?;
        em.log("Starting Bubble Sort...")?;
        let n = self.arr.len();

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                em.mark(MarkRole::Compare, vec![j, j + 1], SORT_HOLD)?;
                if self.arr[j] > self.arr[j + 1] {
                    em.log(format!("Swapping {} and {}", self.arr[j], self.arr[j + 1]))?;
                    em.mark(MarkRole::Swap, vec![j, j + 1], Hold::ZERO)?;
                    self.arr.swap(j, j + 1);
                    em.snapshot(self.arr.clone(), SORT_HOLD)?;
                }
                em.mark(MarkRole::Swap, vec![], Hold::ZERO)?;
            }
            // the tail element of this pass is now settled
            self.sorted.push(n - 1 - i);
            em.mark(MarkRole::Sorted, self.sorted.clone(), Hold::ZERO)?;
        }
        if n > 0 {
            self.sorted.push(0);
            em.mark(MarkRole::Sorted, self.sorted.clone(), Hold::ZERO)?;
        }
        em.log("Bubble Sort Completed")?;
        em.mark(MarkRole::Compare, vec![], Hold::ZERO)?;
        Ok(())
    }
}
