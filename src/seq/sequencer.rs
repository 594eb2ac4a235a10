//! 步进序列器
//!
//! 把“改什么”（驱动）与“多快展示”（节奏）解耦，并为所有驱动提供
//! 统一的取消点。同一实例同时只允许一个运行；运行期间的新请求被
//! 拒绝而不是交错，因此不需要锁。

use super::driver::{Driver, Emitter, StepError};
use super::event::{EventKind, Hold, VisualEvent};
use super::pacer::{ControlHandle, Pacer};
use super::reject::Reject;
use super::stage::Stage;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 一次运行的结束方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Cancelled,
    Reset,
    Faulted,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::Cancelled => "cancelled",
            RunOutcome::Reset => "reset",
            RunOutcome::Faulted => "faulted",
        }
    }
}

pub struct Sequencer<S: Clone> {
    stage: Stage<S>,
    pacer: Box<dyn Pacer>,
    ctl: ControlHandle,
    tape: Vec<VisualEvent<S>>,
    busy: bool,
    empty: S,
}

impl<S: Clone> Sequencer<S> {
    pub fn new(empty: S, pacer: Box<dyn Pacer>) -> Sequencer<S> {
        Sequencer::with_control(empty, pacer, ControlHandle::default())
    }

    /// 用外部提供的控制句柄构造（测试与宿主循环共享同一句柄）。
    pub fn with_control(empty: S, pacer: Box<dyn Pacer>, ctl: ControlHandle) -> Sequencer<S> {
        Sequencer {
            stage: Stage::new(empty.clone()),
            pacer,
            ctl,
            tape: Vec::new(),
            busy: false,
            empty,
        }
    }

    pub fn stage(&self) -> &Stage<S> {
        &self.stage
    }

    pub fn control(&self) -> ControlHandle {
        self.ctl.clone()
    }

    /// 上一次运行实际应用的事件带。
    pub fn tape(&self) -> &[VisualEvent<S>] {
        &self.tape
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// 运行之外写入持久快照（挂载、重新生成数组等）。
    pub fn seed(&mut self, snapshot: S) {
        self.stage.seed(snapshot);
    }

    /// 设置一次性状态消息（溢出/下溢等拒绝的用户可见报告）。
    pub fn post_message(&mut self, message: impl Into<String>) {
        self.stage.set_message(message);
    }

    /// 运行一个驱动直到完成、取消或重置。正常结束时合成 `Complete`
    /// 事件；驱动故障表现为一条日志并按取消处理，不会向上崩溃。
    pub fn run(&mut self, driver: &mut dyn Driver<S>) -> Result<RunOutcome, Reject> {
        if self.busy {
            debug!(driver = driver.name(), "run rejected: already busy");
            return Err(Reject::Busy);
        }
        self.busy = true;
        self.stage.clear_message();
        self.tape.clear();
        // 丢弃运行开始前遗留的过期控制请求
        let _ = self.ctl.take();

        debug!(driver = driver.name(), "run started");
        let result = {
            let mut em = Emitter::new(&mut self.stage, self.pacer.as_mut(), &self.ctl, &mut self.tape);
            driver.run(&mut em)
        };

        let outcome = match result {
            Ok(()) => {
                let ev = VisualEvent {
                    kind: EventKind::Complete,
                    hold: Hold::ZERO,
                };
                self.stage.apply(&ev);
                self.tape.push(ev);
                debug!(driver = driver.name(), events = self.tape.len(), "run completed");
                RunOutcome::Completed
            }
            Err(StepError::Cancelled) => {
                debug!(driver = driver.name(), "run cancelled at suspension point");
                RunOutcome::Cancelled
            }
            Err(StepError::ResetRequested) => {
                self.stage.clear(self.empty.clone());
                self.tape.clear();
                debug!(driver = driver.name(), "run discarded: reset won");
                RunOutcome::Reset
            }
            Err(StepError::Fault(msg)) => {
                warn!(driver = driver.name(), %msg, "driver fault");
                let ev = VisualEvent {
                    kind: EventKind::Log {
                        message: format!("Error in {}: {msg}", driver.name()),
                    },
                    hold: Hold::ZERO,
                };
                self.stage.apply(&ev);
                self.tape.push(ev);
                RunOutcome::Faulted
            }
        };
        self.busy = false;
        Ok(outcome)
    }

    /// 请求取消在途运行；在下一个挂起点生效，已应用的状态不回滚。
    pub fn cancel(&mut self) {
        if self.busy {
            self.ctl.cancel();
        }
    }

    /// 清空观察状态。对在途运行而言重置总是获胜：其后续事件在下一个
    /// 挂起点被整体丢弃。
    pub fn reset(&mut self) {
        if self.busy {
            self.ctl.reset();
        } else {
            let _ = self.ctl.take();
            self.stage.clear(self.empty.clone());
            self.tape.clear();
        }
    }
}
