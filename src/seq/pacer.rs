//! 节奏与协作式取消
//!
//! 每个 emit 都是一个挂起点：先应用事件，再按 hold 指令保持。
//! 取消/重置请求写入控制句柄，在下一个挂起点被观察到；没有抢占。

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

/// 挂起点上观察到的控制请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Cancel,
    Reset,
}

const CTL_NONE: u8 = 0;
const CTL_CANCEL: u8 = 1;
const CTL_RESET: u8 = 2;

/// 可克隆的控制句柄：从宿主循环或其他线程请求取消/重置。
#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    cell: Arc<AtomicU8>,
}

impl ControlHandle {
    pub fn cancel(&self) {
        self.cell.store(CTL_CANCEL, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.cell.store(CTL_RESET, Ordering::SeqCst);
    }

    /// 取走当前请求（读后清零）。
    pub fn take(&self) -> Control {
        match self.cell.swap(CTL_NONE, Ordering::SeqCst) {
            CTL_CANCEL => Control::Cancel,
            CTL_RESET => Control::Reset,
            _ => Control::Continue,
        }
    }
}

/// 节奏控制：在两个事件之间保持多久。
pub trait Pacer {
    fn hold(&mut self, d: Duration);
}

/// 不等待；用于测试与离线 CLI 运行。
#[derive(Debug, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn hold(&mut self, _d: Duration) {}
}

/// 真实时间：按 hold 指令睡眠。
#[derive(Debug, Default)]
pub struct RealtimePacer;

impl Pacer for RealtimePacer {
    fn hold(&mut self, d: Duration) {
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}

/// 脚本化节奏（测试用）：在第 N 个挂起点向控制句柄注入请求。
#[derive(Debug)]
pub struct ScriptedPacer {
    ctl: ControlHandle,
    request: Control,
    trigger_at: u64,
    holds: u64,
}

impl ScriptedPacer {
    pub fn new(ctl: ControlHandle, request: Control, trigger_at: u64) -> ScriptedPacer {
        ScriptedPacer {
            ctl,
            request,
            trigger_at,
            holds: 0,
        }
    }
}

impl Pacer for ScriptedPacer {
    fn hold(&mut self, _d: Duration) {
        self.holds += 1;
        if self.holds == self.trigger_at {
            match self.request {
                Control::Cancel => self.ctl.cancel(),
                Control::Reset => self.ctl.reset(),
                Control::Continue => {}
            }
        }
    }
}
