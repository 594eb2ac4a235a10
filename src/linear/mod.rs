//! Linear-structure visualization drivers.
//!
//! List, doubly linked list, stack and queue share the three-phase mutation
//! shape: tag the affected element as pending, hold, commit the structural
//! change, hold, clear the tag. Bounded structures reject overflow and
//! underflow before any event is emitted.

mod dll;
mod list;
mod queue;
mod stack;

pub use dll::DllWorld;
pub use list::ListWorld;
pub use queue::{QUEUE_CAPACITY, QueueWorld};
pub use stack::{STACK_CAPACITY, StackWorld};

use crate::seq::{Hold, Reject};
use serde::{Deserialize, Serialize};

/// One visible cell with a stable identity, so renderers can animate a
/// moving element instead of destroying and recreating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub value: String,
}

pub(crate) const ENTER_HOLD: Hold = Hold(500);
pub(crate) const COMMIT_HOLD: Hold = Hold(800);
pub(crate) const LEAVE_HOLD: Hold = Hold(600);
pub(crate) const SCAN_HOLD: Hold = Hold(400);

pub(crate) fn non_empty(value: &str) -> Result<String, Reject> {
    let v = value.trim();
    if v.is_empty() {
        Err(Reject::InvalidInput("value must not be empty".to_string()))
    } else {
        Ok(v.to_string())
    }
}
