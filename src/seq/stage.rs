//! 观察状态（Stage）
//!
//! 渲染层的只读投影：快照、角色高亮集合、活动日志（最新在前）、
//! 复杂度标签与一次性状态消息。只有序列器应用事件；每次应用对
//! 观察者是原子的。

use super::event::{Complexity, EventKind, MarkRole, VisualEvent};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub struct Stage<S> {
    snapshot: S,
    marks: BTreeMap<MarkRole, BTreeSet<usize>>,
    log: VecDeque<String>,
    complexity: Option<Complexity>,
    message: Option<String>,
    done: bool,
}

impl<S: Clone> Stage<S> {
    pub fn new(initial: S) -> Stage<S> {
        Stage {
            snapshot: initial,
            marks: BTreeMap::new(),
            log: VecDeque::new(),
            complexity: None,
            message: None,
            done: false,
        }
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// 角色的当前集合（缺省为空集）。
    pub fn marks(&self, role: MarkRole) -> &BTreeSet<usize> {
        static EMPTY: BTreeSet<usize> = BTreeSet::new();
        self.marks.get(&role).unwrap_or(&EMPTY)
    }

    /// 活动日志，最新在前。
    pub fn log(&self) -> impl Iterator<Item = &str> + '_ {
        self.log.iter().map(String::as_str)
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn complexity(&self) -> Option<&Complexity> {
        self.complexity.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// 拒绝的操作不产生事件，只设置状态消息。
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// 挂载或一次运行之外写入持久快照（不产生事件）。
    pub fn seed(&mut self, snapshot: S) {
        self.snapshot = snapshot;
    }

    /// 回到空/初始状态。
    pub fn clear(&mut self, initial: S) {
        self.snapshot = initial;
        self.marks.clear();
        self.log.clear();
        self.complexity = None;
        self.message = None;
        self.done = false;
    }

    /// 应用一个事件；对观察者是一次原子的可见变更。
    pub fn apply(&mut self, ev: &VisualEvent<S>) {
        match &ev.kind {
            EventKind::MutateSnapshot { snapshot } => self.snapshot = snapshot.clone(),
            EventKind::MarkIndices { role, indices } => {
                if indices.is_empty() {
                    self.marks.remove(role);
                } else {
                    self.marks.insert(*role, indices.iter().copied().collect());
                }
            }
            EventKind::Log { message } => self.log.push_front(message.clone()),
            EventKind::SetComplexity { complexity } => self.complexity = Some(complexity.clone()),
            EventKind::Complete => self.done = true,
        }
    }

    /// 对初始快照按序重放一条事件带，重建观察状态。
    pub fn replay(initial: S, tape: &[VisualEvent<S>]) -> Stage<S> {
        let mut stage = Stage::new(initial);
        for ev in tape {
            stage.apply(ev);
        }
        stage
    }
}
