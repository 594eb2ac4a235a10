//! 同步拒绝
//!
//! 被拒绝的操作不发出任何事件、不改动任何结构；调用方通过
//! 状态消息通道向用户报告。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reject {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{structure} Overflow! Max size {capacity} reached.")]
    Overflow {
        structure: &'static str,
        capacity: usize,
    },
    #[error("{structure} Underflow! {structure} is empty.")]
    Underflow { structure: &'static str },
    #[error("{0} already exists")]
    Duplicate(i64),
    /// 已有运行在进行中；按设计静默忽略，不作为错误上报。
    #[error("a run is already active")]
    Busy,
}
