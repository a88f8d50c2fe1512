//! Scheduling primitives: frame gate, debouncer, one-shot timer queue.
//!
//! These bound handler frequency the way the storefront script did: scroll
//! work runs at most once per display frame, resize work waits for a quiet
//! period timed from the last event, and everything deferred (notice
//! dismissal, transition cleanup, settle delays) lives in a deadline-ordered
//! queue of one-shot tasks.

use crate::ids::{ElemId, NoticeId};

/// One-frame-in-flight guard. Any number of burst events may arm it within a
/// frame; the frame pass takes it at most once.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// True at most once per frame, regardless of how many events armed it.
    #[inline]
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

/// Delays work until a quiet period with no new pokes has elapsed.
#[derive(Debug)]
pub struct Debouncer {
    window_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            deadline: None,
        }
    }

    /// Reset the deadline to `now + window`; the timer is timed from the last
    /// poke, not the first.
    pub fn poke(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.window_ms);
    }

    #[inline]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires once when the quiet period has elapsed.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Deferred work carried by the timer queue. Tasks have identity: scheduling a
/// task equal to a pending one replaces it (cancel-and-reset semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    DismissNotice(NoticeId),
    ClearDrawerTransition(ElemId),
    ReinitializePage,
    RefreshViewportUnit,
}

#[derive(Debug)]
struct TimerEntry {
    due_ms: f64,
    task: TimerTask,
}

/// Deadline-ordered one-shot timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` at `due_ms`, replacing any pending task with the same
    /// identity.
    pub fn schedule(&mut self, due_ms: f64, task: TimerTask) {
        self.entries.retain(|e| e.task != task);
        self.entries.push(TimerEntry { due_ms, task });
    }

    pub fn cancel(&mut self, task: &TimerTask) {
        self.entries.retain(|e| e.task != *task);
    }

    /// Cancel every pending task matching the predicate.
    pub fn cancel_where(&mut self, pred: impl Fn(&TimerTask) -> bool) {
        self.entries.retain(|e| !pred(&e.task));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return every task due at `now_ms`, in deadline order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<TimerTask> {
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].due_ms <= now_ms {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|e| e.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_coalesces_bursts() {
        let mut gate = FrameGate::new();
        assert!(!gate.take());
        gate.arm();
        gate.arm();
        gate.arm();
        assert!(gate.take());
        assert!(!gate.take());
    }

    #[test]
    fn debounce_times_from_last_poke() {
        let mut d = Debouncer::new(250.0);
        d.poke(0.0);
        d.poke(100.0);
        d.poke(200.0);
        assert!(!d.fire(260.0));
        assert!(!d.fire(449.0));
        assert!(d.fire(450.0));
        // One-shot until poked again.
        assert!(!d.fire(1000.0));
    }

    #[test]
    fn timer_replacement_by_identity() {
        let mut q = TimerQueue::new();
        q.schedule(100.0, TimerTask::ReinitializePage);
        q.schedule(200.0, TimerTask::ReinitializePage);
        assert_eq!(q.len(), 1);
        assert!(q.drain_due(150.0).is_empty());
        assert_eq!(q.drain_due(200.0), vec![TimerTask::ReinitializePage]);
    }

    #[test]
    fn distinct_notice_timers_coexist() {
        let mut q = TimerQueue::new();
        q.schedule(300.0, TimerTask::DismissNotice(NoticeId(0)));
        q.schedule(400.0, TimerTask::DismissNotice(NoticeId(1)));
        assert_eq!(q.len(), 2);
        let due = q.drain_due(500.0);
        assert_eq!(
            due,
            vec![
                TimerTask::DismissNotice(NoticeId(0)),
                TimerTask::DismissNotice(NoticeId(1)),
            ]
        );
    }

    #[test]
    fn cancel_where_filters_by_kind() {
        let mut q = TimerQueue::new();
        q.schedule(100.0, TimerTask::ClearDrawerTransition(ElemId(3)));
        q.schedule(200.0, TimerTask::DismissNotice(NoticeId(0)));
        q.cancel_where(|t| matches!(t, TimerTask::ClearDrawerTransition(_)));
        assert_eq!(
            q.drain_due(1000.0),
            vec![TimerTask::DismissNotice(NoticeId(0))]
        );
    }

    #[test]
    fn cancel_removes_pending() {
        let mut q = TimerQueue::new();
        q.schedule(100.0, TimerTask::RefreshViewportUnit);
        q.cancel(&TimerTask::RefreshViewportUnit);
        assert!(q.drain_due(1000.0).is_empty());
    }
}
