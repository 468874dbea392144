//! Animation strategy, chosen once at startup.
//!
//! Reduced-motion preference and view-transition support are presentation
//! concerns; the rest of the crate asks this type instead of branching on
//! them directly.

/// How state changes are animated on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionStrategy {
    /// Menu changes run inside `document.startViewTransition`; CSS transitions elsewhere.
    ViewTransition,
    /// No view transitions, but CSS transitions still play.
    #[default]
    CssTransition,
    /// The user asked for reduced motion: every change is applied at once.
    Reduced,
}

impl MotionStrategy {
    /// Pick the strategy from the browser's capabilities.
    #[must_use]
    pub fn select(prefers_reduced_motion: bool, supports_view_transition: bool) -> Self {
        if prefers_reduced_motion {
            Self::Reduced
        } else if supports_view_transition {
            Self::ViewTransition
        } else {
            Self::CssTransition
        }
    }

    #[must_use]
    pub fn uses_view_transition(self) -> bool {
        self == Self::ViewTransition
    }

    /// Whether CSS transitions play at all.
    #[must_use]
    pub fn animates(self) -> bool {
        self != Self::Reduced
    }

    /// Delay before a closing animation is finalized, or `None` to finalize immediately.
    #[must_use]
    pub fn settle_delay(self, delay_ms: u32) -> Option<u32> {
        if self.animates() { Some(delay_ms) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_wins_over_view_transition_support() {
        assert_eq!(MotionStrategy::select(true, true), MotionStrategy::Reduced);
        assert_eq!(MotionStrategy::select(true, false), MotionStrategy::Reduced);
    }

    #[test]
    fn view_transition_selected_when_supported() {
        assert_eq!(MotionStrategy::select(false, true), MotionStrategy::ViewTransition);
        assert_eq!(MotionStrategy::select(false, false), MotionStrategy::CssTransition);
    }

    #[test]
    fn settle_delay_skipped_under_reduced_motion() {
        assert_eq!(MotionStrategy::Reduced.settle_delay(300), None);
        assert_eq!(MotionStrategy::CssTransition.settle_delay(300), Some(300));
        assert_eq!(MotionStrategy::ViewTransition.settle_delay(220), Some(220));
    }
}
