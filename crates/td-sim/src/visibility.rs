//! `VisibilityGate` — one-shot deferral of the first start.

use crate::StartPolicy;

/// Decides whether the dashboard starts at build time or on first visibility.
///
/// The gate fires at most once.  After that, visibility changes are ignored:
/// a dashboard scrolled out of view keeps animating, and the user's own
/// `pause`/`start` commands are never overridden.
#[derive(Clone, Debug)]
pub struct VisibilityGate {
    policy: StartPolicy,
    fired:  bool,
}

impl VisibilityGate {
    pub fn new(policy: StartPolicy) -> Self {
        Self { policy, fired: false }
    }

    #[inline]
    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// `true` once the gate has released the initial start.
    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Release the initial start at build time if the policy allows it.
    pub fn fire_at_load(&mut self) -> bool {
        self.release(self.policy == StartPolicy::Immediate)
    }

    /// Feed a visibility signal.  Returns `true` exactly once, on the first
    /// `visible == true` under [`StartPolicy::WhenVisible`].
    pub fn notify(&mut self, visible: bool) -> bool {
        self.release(visible && self.policy == StartPolicy::WhenVisible)
    }

    /// Mark the initial start as already consumed.
    ///
    /// Called on every explicit start so a late first visibility signal
    /// cannot restart a dashboard the user has since paused.
    pub(crate) fn disarm(&mut self) {
        self.fired = true;
    }

    fn release(&mut self, ready: bool) -> bool {
        if self.fired || !ready {
            return false;
        }
        self.fired = true;
        true
    }
}
