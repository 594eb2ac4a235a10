//! 驱动接口与事件发射器
//!
//! 驱动只关心“改什么”；节奏与取消由序列器统一处理。每次 emit
//! 应用一个事件并按其 hold 保持，构成一个挂起点；驱动在两次
//! 变更之间必须恰好经过一个挂起点。

use super::event::{Complexity, EventKind, Hold, MarkRole, VisualEvent};
use super::pacer::{Control, ControlHandle, Pacer};
use super::stage::Stage;
use thiserror::Error;

/// 驱动在一个步骤中被打断或失败。
#[derive(Debug, Error)]
pub enum StepError {
    /// 在挂起点观察到取消请求；已应用的状态不回滚。
    #[error("run cancelled")]
    Cancelled,
    /// 在挂起点观察到重置请求；序列器清空观察状态并丢弃剩余事件。
    #[error("reset requested")]
    ResetRequested,
    /// 算法内部故障；序列器记录日志后按取消处理。
    #[error("driver fault: {0}")]
    Fault(String),
}

/// 一个算法驱动：向发射器产出有限的事件序列。
///
/// 驱动不可重启：新一次运行必须基于当前持久结构构造新的驱动实例。
pub trait Driver<S: Clone> {
    /// 操作名（用于日志与故障报告）。
    fn name(&self) -> &'static str;

    fn run(&mut self, em: &mut Emitter<'_, S>) -> Result<(), StepError>;
}

/// 事件发射器：应用事件、记录重放带、执行挂起点。
pub struct Emitter<'a, S: Clone> {
    stage: &'a mut Stage<S>,
    pacer: &'a mut dyn Pacer,
    ctl: &'a ControlHandle,
    tape: &'a mut Vec<VisualEvent<S>>,
}

impl<'a, S: Clone> Emitter<'a, S> {
    pub(crate) fn new(
        stage: &'a mut Stage<S>,
        pacer: &'a mut dyn Pacer,
        ctl: &'a ControlHandle,
        tape: &'a mut Vec<VisualEvent<S>>,
    ) -> Emitter<'a, S> {
        Emitter {
            stage,
            pacer,
            ctl,
            tape,
        }
    }

    /// 应用一个事件并保持。控制请求在应用之前检查，因此取消/重置
    /// 之后不会再有事件被应用。
    pub fn emit(&mut self, kind: EventKind<S>, hold: Hold) -> Result<(), StepError> {
        match self.ctl.take() {
            Control::Continue => {}
            Control::Cancel => return Err(StepError::Cancelled),
            Control::Reset => return Err(StepError::ResetRequested),
        }
        let ev = VisualEvent { kind, hold };
        self.stage.apply(&ev);
        self.tape.push(ev);
        self.pacer.hold(hold.as_duration());
        Ok(())
    }

    pub fn snapshot(&mut self, snapshot: S, hold: Hold) -> Result<(), StepError> {
        self.emit(EventKind::MutateSnapshot { snapshot }, hold)
    }

    pub fn mark(&mut self, role: MarkRole, indices: Vec<usize>, hold: Hold) -> Result<(), StepError> {
        self.emit(EventKind::MarkIndices { role, indices }, hold)
    }

    pub fn log(&mut self, message: impl Into<String>) -> Result<(), StepError> {
        self.emit(
            EventKind::Log {
                message: message.into(),
            },
            Hold::ZERO,
        )
    }

    /// 带保持时长的日志行（源于“记录并等待”的动画节拍）。
    pub fn log_held(&mut self, message: impl Into<String>, hold: Hold) -> Result<(), StepError> {
        self.emit(
            EventKind::Log {
                message: message.into(),
            },
            hold,
        )
    }

    pub fn complexity(&mut self, complexity: Complexity) -> Result<(), StepError> {
        self.emit(EventKind::SetComplexity { complexity }, Hold::ZERO)
    }

    /// 当前快照（驱动读取自己上一步的工作状态）。
    pub fn current(&self) -> &S {
        self.stage.snapshot()
    }
}
