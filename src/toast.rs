//! Toast notification lifecycle.
//!
//! Each toast moves through `Entering -> Shown -> Leaving` and is then
//! removed. Timing lives in the host; this model only records where every
//! toast is, so the host can render the stack from it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::motion::MotionStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-position so the entrance can animate.
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

/// What the host should do after [`ToastStack::begin_exit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastExit {
    /// Already removed.
    Removed,
    /// Call [`ToastStack::remove`] after this many milliseconds.
    RemoveAfter(u32),
    /// Unknown or already leaving toast.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    motion: MotionStrategy,
    exit_ms: u32,
}

impl ToastStack {
    #[must_use]
    pub fn new(motion: MotionStrategy, exit_ms: u32) -> Self {
        Self { toasts: Vec::new(), next_id: 0, motion, exit_ms }
    }

    #[must_use]
    pub fn motion(&self) -> MotionStrategy {
        self.motion
    }

    /// Add a toast. Empty messages produce nothing.
    ///
    /// Under reduced motion the toast starts `Shown`.
    pub fn show(&mut self, message: &str) -> Option<ToastId> {
        if message.is_empty() {
            return None;
        }
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let phase = if self.motion.animates() { ToastPhase::Entering } else { ToastPhase::Shown };
        self.toasts.push(Toast { id, message: message.to_owned(), phase });
        Some(id)
    }

    /// Move an entering toast to its resting position.
    pub fn reveal(&mut self, id: ToastId) {
        if let Some(toast) = self.get_mut(id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Shown;
            }
        }
    }

    /// Start removing a toast once its hold time has elapsed.
    pub fn begin_exit(&mut self, id: ToastId) -> ToastExit {
        let exit = self.motion.settle_delay(self.exit_ms);
        let Some(toast) = self.get_mut(id) else {
            return ToastExit::Ignored;
        };
        if toast.phase == ToastPhase::Leaving {
            return ToastExit::Ignored;
        }
        match exit {
            Some(delay_ms) => {
                toast.phase = ToastPhase::Leaving;
                ToastExit::RemoveAfter(delay_ms)
            }
            None => {
                self.remove(id);
                ToastExit::Removed
            }
        }
    }

    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(|t| t.id).collect()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.get(id).map(|t| t.phase)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}
