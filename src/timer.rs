use crate::domain::{format_remaining, Task};
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// Why a countdown was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The user skipped the task
    Skipped,
    /// The tracked task was deleted
    TaskRemoved,
    /// Time ran out and the user said the task isn't finished
    NotCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { task_id: Uuid, deadline: Instant },
    Completed { task_id: Uuid },
    /// Time ran out; waiting for the user to say whether the task got done
    Expired { task_id: Uuid },
    Cancelled { task_id: Uuid, reason: CancelReason },
}

/// What a tick observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing running
    Idle,
    Remaining(Duration),
    /// The tracked task was found done
    Completed(Uuid),
    /// Deadline passed on this tick
    Expired(Uuid),
    /// The tracked task no longer exists
    TaskVanished(Uuid),
}

/// Single countdown for the current selection
#[derive(Debug, Clone)]
pub struct Countdown {
    state: TimerState,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self.state, TimerState::Expired { .. })
    }

    /// Task the countdown is (or was) about
    pub fn task_id(&self) -> Option<Uuid> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Running { task_id, .. }
            | TimerState::Completed { task_id }
            | TimerState::Expired { task_id }
            | TimerState::Cancelled { task_id, .. } => Some(task_id),
        }
    }

    /// Start counting down `minutes` for a task, replacing any previous countdown
    pub fn start(&mut self, task_id: Uuid, minutes: u32, now: Instant) {
        self.stop();
        let deadline = now + Duration::from_secs(u64::from(minutes) * 60);
        debug!(%task_id, minutes, "countdown started");
        self.state = TimerState::Running { task_id, deadline };
    }

    /// Drop whatever countdown exists. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Abandon the countdown, if there is one
    pub fn cancel(&mut self, reason: CancelReason) {
        if let Some(task_id) = self.task_id() {
            debug!(%task_id, ?reason, "countdown cancelled");
            self.state = TimerState::Cancelled { task_id, reason };
        }
    }

    /// The tracked task was marked done, possibly after its countdown was abandoned
    pub fn complete(&mut self, task_id: Uuid) -> bool {
        match self.state {
            TimerState::Running { task_id: tracked, .. }
            | TimerState::Expired { task_id: tracked }
            | TimerState::Cancelled { task_id: tracked, .. }
                if tracked == task_id =>
            {
                debug!(%task_id, "countdown completed");
                self.state = TimerState::Completed { task_id };
                true
            }
            _ => false,
        }
    }

    /// Time left, only while running
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TimerState::Running { deadline, .. } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Re-evaluate against the current state of the tracked task.
    ///
    /// `task` must be the latest copy from the store, `None` if it was removed.
    pub fn tick(&mut self, now: Instant, task: Option<&Task>) -> TickEvent {
        let TimerState::Running { task_id, deadline } = self.state else {
            return TickEvent::Idle;
        };

        let Some(task) = task.filter(|t| t.id == task_id) else {
            self.state = TimerState::Cancelled {
                task_id,
                reason: CancelReason::TaskRemoved,
            };
            return TickEvent::TaskVanished(task_id);
        };

        if task.done {
            self.state = TimerState::Completed { task_id };
            return TickEvent::Completed(task_id);
        }

        if now >= deadline {
            debug!(%task_id, "countdown expired");
            self.state = TimerState::Expired { task_id };
            return TickEvent::Expired(task_id);
        }

        TickEvent::Remaining(deadline - now)
    }

    /// Answer the "did you finish?" question after expiry.
    ///
    /// Returns the task id to mark done when the answer is yes.
    pub fn confirm(&mut self, completed: bool) -> Option<Uuid> {
        let TimerState::Expired { task_id } = self.state else {
            return None;
        };
        if completed {
            self.state = TimerState::Completed { task_id };
            Some(task_id)
        } else {
            self.state = TimerState::Cancelled {
                task_id,
                reason: CancelReason::NotCompleted,
            };
            None
        }
    }

    /// Line shown under the current task
    pub fn status_line(&self, now: Instant) -> String {
        match self.state {
            TimerState::Idle => String::new(),
            TimerState::Running { .. } => {
                let remaining = self.remaining(now).unwrap_or_default();
                format!("⏳ Time remaining: {}", format_remaining(remaining))
            }
            TimerState::Completed { .. } => "Marked done ✅ Timer stopped.".to_string(),
            TimerState::Expired { .. } => "⏰ Time is up.".to_string(),
            TimerState::Cancelled {
                reason: CancelReason::NotCompleted,
                ..
            } => "Not marked done. Still in the list.".to_string(),
            TimerState::Cancelled { .. } => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;

    fn one_minute_task() -> Task {
        Task::from_draft(&TaskDraft::new("Stretch", "1", "Home", "")).unwrap()
    }

    #[test]
    fn test_running_reports_remaining() {
        let task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, task.duration, t0);

        let event = timer.tick(t0 + Duration::from_millis(250), Some(&task));
        assert_eq!(event, TickEvent::Remaining(Duration::from_millis(59_750)));
        assert_eq!(
            timer.status_line(t0 + Duration::from_millis(250)),
            "⏳ Time remaining: 0:59"
        );
    }

    #[test]
    fn test_expiry_without_confirmation_leaves_task_active() {
        let task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, t0);

        let event = timer.tick(t0 + Duration::from_secs(60), Some(&task));
        assert_eq!(event, TickEvent::Expired(task.id));
        assert!(timer.is_awaiting_confirmation());
        assert!(!timer.is_running());

        // No further ticking once expired
        assert_eq!(timer.tick(t0 + Duration::from_secs(61), Some(&task)), TickEvent::Idle);

        assert_eq!(timer.confirm(false), None);
        assert_eq!(
            timer.state(),
            TimerState::Cancelled {
                task_id: task.id,
                reason: CancelReason::NotCompleted
            }
        );
        assert_eq!(timer.status_line(t0), "Not marked done. Still in the list.");
    }

    #[test]
    fn test_expiry_confirmed_completes() {
        let task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, t0);
        timer.tick(t0 + Duration::from_secs(90), Some(&task));

        assert_eq!(timer.confirm(true), Some(task.id));
        assert_eq!(timer.state(), TimerState::Completed { task_id: task.id });
        assert_eq!(timer.tick(t0 + Duration::from_secs(91), Some(&task)), TickEvent::Idle);
    }

    #[test]
    fn test_confirm_outside_expired_is_noop() {
        let task = one_minute_task();
        let mut timer = Countdown::new();
        assert_eq!(timer.confirm(true), None);

        timer.start(task.id, 1, Instant::now());
        assert_eq!(timer.confirm(true), None);
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_sees_task_done_elsewhere() {
        let mut task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, t0);

        task.mark_done();
        assert_eq!(timer.tick(t0, Some(&task)), TickEvent::Completed(task.id));
        assert_eq!(timer.state(), TimerState::Completed { task_id: task.id });
    }

    #[test]
    fn test_tick_sees_task_removed() {
        let task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, t0);

        assert_eq!(timer.tick(t0, None), TickEvent::TaskVanished(task.id));
        assert!(!timer.is_running());
        assert_eq!(timer.status_line(t0), "");
    }

    #[test]
    fn test_start_replaces_previous_countdown() {
        let first = one_minute_task();
        let second = Task::from_draft(&TaskDraft::new("Read", "30", "Home", "")).unwrap();
        let t0 = Instant::now();
        let mut timer = Countdown::new();

        timer.start(first.id, 1, t0);
        timer.start(second.id, second.duration, t0);

        assert_eq!(timer.task_id(), Some(second.id));
        assert_eq!(timer.remaining(t0), Some(Duration::from_secs(30 * 60)));
    }

    #[test]
    fn test_complete_only_matches_tracked_task() {
        let task = one_minute_task();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, Instant::now());

        assert!(!timer.complete(Uuid::new_v4()));
        assert!(timer.is_running());
        assert!(timer.complete(task.id));
        assert!(!timer.is_running());
        assert!(!timer.complete(task.id));
    }

    #[test]
    fn test_complete_after_not_completed_answer() {
        let task = one_minute_task();
        let t0 = Instant::now();
        let mut timer = Countdown::new();
        timer.start(task.id, 1, t0);
        timer.tick(t0 + Duration::from_secs(60), Some(&task));
        timer.confirm(false);

        assert!(timer.complete(task.id));
        assert_eq!(timer.state(), TimerState::Completed { task_id: task.id });
        assert_eq!(timer.status_line(t0), "Marked done ✅ Timer stopped.");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = Countdown::new();
        timer.stop();
        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);
        timer.cancel(CancelReason::Skipped);
        assert_eq!(timer.state(), TimerState::Idle);
    }
}
