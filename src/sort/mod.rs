//! Sorting visualization drivers.
//!
//! Five comparison sorts over an integer array. Every comparison emits a
//! compare mark naming the positions; only when an exchange happens does a
//! snapshot mutation follow, with a log line naming the exchanged values.
//! Sorted indices accumulate at each algorithm's natural certainty point.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::seq::{Complexity, Hold, Pacer, Reject, RunOutcome, Sequencer};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base pacing between sort steps.
pub const SORT_HOLD: Hold = Hold(200);

/// Bars shown by the on-screen renderer.
pub const DEFAULT_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgo {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl SortAlgo {
    pub fn label(self) -> &'static str {
        match self {
            SortAlgo::Bubble => "Bubble Sort",
            SortAlgo::Insertion => "Insertion Sort",
            SortAlgo::Selection => "Selection Sort",
            SortAlgo::Merge => "Merge Sort",
            SortAlgo::Quick => "Quick Sort",
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            SortAlgo::Bubble => Complexity::new("Bubble Sort", "O(n²)", "O(1)"),
            SortAlgo::Insertion => Complexity::new("Insertion Sort", "O(n²)", "O(1)"),
            SortAlgo::Selection => Complexity::new("Selection Sort", "O(n²)", "O(1)"),
            SortAlgo::Merge => Complexity::new("Merge Sort", "O(n log n)", "O(n)"),
            SortAlgo::Quick => Complexity::new("Quick Sort", "O(n log n)", "O(log n)"),
        }
    }
}

/// Random bar heights in `10..60`, the range the bar renderer scales well.
pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.random_range(0..50) + 10).collect()
}

/// Persistent array plus its sequencer.
pub struct SortWorld {
    seq: Sequencer<Vec<i64>>,
}

impl SortWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> SortWorld {
        SortWorld {
            seq: Sequencer::new(Vec::new(), pacer),
        }
    }

    /// Replaces the array; also clears logs, marks and complexity.
    pub fn seed(&mut self, values: Vec<i64>) {
        self.seq.reset();
        self.seq.seed(values);
    }

    pub fn sort(&mut self, algo: SortAlgo) -> Result<RunOutcome, Reject> {
        let arr = self.seq.stage().snapshot().clone();
        match algo {
            SortAlgo::Bubble => self.seq.run(&mut BubbleSort::new(arr)),
            SortAlgo::Insertion => self.seq.run(&mut InsertionSort::new(arr)),
            SortAlgo::Selection => self.seq.run(&mut SelectionSort::new(arr)),
            SortAlgo::Merge => self.seq.run(&mut MergeSort::new(arr)),
            SortAlgo::Quick => self.seq.run(&mut QuickSort::new(arr)),
        }
    }

    pub fn seq(&self) -> &Sequencer<Vec<i64>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
