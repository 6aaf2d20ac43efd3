/// Identifies one compute pass; a deferred apply only runs while its token is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateToken(u64);

impl UpdateToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Coalesces update requests into at most one pending cycle.
///
/// Time is supplied by the caller (`now_ms`), so the scheduler works the same under a browser
/// timer, a frame loop or a test clock.
#[derive(Clone, Debug, Default)]
pub struct UpdateScheduler {
    due_ms: Option<u64>,
    token: u64,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a cycle `delay_ms` from now unless one is already pending.
    ///
    /// Returns `true` when a new cycle was scheduled; a pending request is never pushed back.
    pub fn request_update(&mut self, now_ms: u64, delay_ms: u64) -> bool {
        if self.due_ms.is_some() {
            return false;
        }
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
        true
    }

    /// Schedules a cycle `delay_ms` from now, pulling a later pending request earlier.
    pub fn request_forced(&mut self, now_ms: u64, delay_ms: u64) {
        let due = now_ms.saturating_add(delay_ms);
        self.due_ms = Some(match self.due_ms {
            Some(cur) => cur.min(due),
            None => due,
        });
    }

    pub fn cancel_pending(&mut self) {
        self.due_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Consumes the pending request if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Starts a new compute pass, making every earlier token stale.
    pub fn stamp(&mut self) -> UpdateToken {
        self.token = self.token.wrapping_add(1);
        UpdateToken(self.token)
    }

    pub fn is_current(&self, token: UpdateToken) -> bool {
        token.0 == self.token
    }
}
