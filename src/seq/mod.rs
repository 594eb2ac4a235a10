//! 步进可视化核心模块
//!
//! 此模块包含步进式算法可视化的核心组件：可视化事件、观察状态（Stage）、
//! 节奏控制与步进序列器（Sequencer）。

// 子模块声明
mod driver;
mod event;
mod pacer;
mod reject;
mod sequencer;
mod stage;

// 重新导出公共接口
pub use driver::{Driver, Emitter, StepError};
pub use event::{Complexity, EventKind, Hold, MarkRole, VisualEvent};
pub use pacer::{Control, ControlHandle, InstantPacer, Pacer, RealtimePacer, ScriptedPacer};
pub use reject::Reject;
pub use sequencer::{RunOutcome, Sequencer};
pub use stage::Stage;
