//! 可视化事件
//!
//! 一次可观察的状态变化：种类、载荷与节奏指令（hold）。
//! 事件全序；对初始快照按序重放必须逐一复现每个中间状态。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 节奏指令：事件应用之后、下一个事件应用之前需要保持的时长（毫秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Hold(pub u64);

impl Hold {
    pub const ZERO: Hold = Hold(0);

    pub fn from_millis(ms: u64) -> Hold {
        Hold(ms)
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

/// 高亮集合的角色（渲染层据此着色）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkRole {
    Compare,
    Swap,
    Sorted,
    Pending,
    Deleted,
    Highlight,
    Visited,
    Frontier,
    Current,
}

/// 复杂度标签：本次操作的 Big-O 类别（静态元数据，不是测量值）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub operation: String,
    pub time: String,
    pub space: String,
}

impl Complexity {
    pub fn new(operation: &str, time: &str, space: &str) -> Complexity {
        Complexity {
            operation: operation.to_string(),
            time: time.to_string(),
            space: space.to_string(),
        }
    }
}

/// 事件种类与载荷。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind<S> {
    /// 整体替换快照
    MutateSnapshot { snapshot: S },
    /// 替换某个角色的完整下标/节点号集合（空集合等于清除该角色）
    MarkIndices { role: MarkRole, indices: Vec<usize> },
    /// 活动日志行
    Log { message: String },
    /// 本次操作的复杂度标签
    SetComplexity { complexity: Complexity },
    /// 驱动结束（由序列器合成，驱动不得自行发出）
    Complete,
}

/// 一条可重放的可视化事件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEvent<S> {
    #[serde(flatten)]
    pub kind: EventKind<S>,
    pub hold: Hold,
}
