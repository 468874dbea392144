//! Slide-out navigation menu state machine.
//!
//! The menu is mirrored across three elements (panel, overlay, trigger) and
//! the page's scroll lock. [`MenuController`] is the only owner of that state
//! and answers every request with the list of [`MenuEffect`]s the host must
//! apply.
//!
//! Closing happens in two steps when motion is enabled: the visual state is
//! reverted at once, and the bookkeeping (overlay `hidden`, scroll unlock,
//! focus return) runs after the CSS transition. The second step is keyed by
//! a ticket; reopening before it fires invalidates the ticket, so overlapping
//! open/close requests cannot unlock scroll under an open menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::motion::MotionStrategy;

/// Identifies one pending close finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

/// Current menu phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Closed,
    Open,
    /// Visually closed, waiting for the finalization step.
    Closing { ticket: CloseTicket, return_focus: bool },
}

/// One change the host applies to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Toggle the panel's open class.
    SetPanelOpen(bool),
    /// Toggle the overlay's active class.
    SetOverlayActive(bool),
    /// Set the overlay's `hidden` attribute.
    SetOverlayHidden(bool),
    /// Set the trigger's `aria-expanded`.
    SetTriggerExpanded(bool),
    /// Remember the body's overflow and set it to `hidden`.
    LockScroll,
    /// Restore the remembered body overflow.
    UnlockScroll,
    /// Focus the first focusable element inside the panel.
    FocusFirstInPanel,
    /// Focus the menu trigger.
    FocusTrigger,
}

/// A batch of effects and whether it should run inside a view transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuTransition {
    pub animate: bool,
    pub effects: Vec<MenuEffect>,
    /// Finalization to schedule after `delay_ms`.
    pub finish: Option<ScheduledFinish>,
}

impl MenuTransition {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.finish.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFinish {
    pub ticket: CloseTicket,
    pub delay_ms: u32,
}

/// Options for [`MenuController::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseOptions {
    pub return_focus: bool,
}

impl Default for CloseOptions {
    fn default() -> Self {
        Self { return_focus: true }
    }
}

#[derive(Debug, Clone)]
pub struct MenuController {
    phase: MenuPhase,
    scroll_locked: bool,
    next_ticket: u64,
    motion: MotionStrategy,
    close_delay_ms: u32,
    /// False when the page lacks the trigger, panel or overlay.
    present: bool,
}

impl MenuController {
    #[must_use]
    pub fn new(motion: MotionStrategy, close_delay_ms: u32, present: bool) -> Self {
        Self { phase: MenuPhase::Closed, scroll_locked: false, next_ticket: 0, motion, close_delay_ms, present }
    }

    #[must_use]
    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Whether the menu is open (a pending close counts as closed).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Reveal panel and overlay, lock scroll, and move focus into the panel.
    pub fn open(&mut self) -> MenuTransition {
        if !self.present || self.is_open() {
            return MenuTransition::default();
        }
        // Entering from `Closing` drops the pending ticket; the overlay is
        // still unhidden and scroll is still locked.
        self.phase = MenuPhase::Open;
        let mut effects = vec![
            MenuEffect::SetPanelOpen(true),
            MenuEffect::SetOverlayActive(true),
            MenuEffect::SetOverlayHidden(false),
            MenuEffect::SetTriggerExpanded(true),
        ];
        if !self.scroll_locked {
            self.scroll_locked = true;
            effects.push(MenuEffect::LockScroll);
        }
        effects.push(MenuEffect::FocusFirstInPanel);
        log::debug!("menu opened");
        MenuTransition { animate: self.motion.uses_view_transition(), effects, finish: None }
    }

    /// Revert the visual state and, immediately or after the close delay,
    /// hide the overlay, unlock scroll and optionally refocus the trigger.
    pub fn close(&mut self, options: CloseOptions) -> MenuTransition {
        if !self.present || !self.is_open() {
            return MenuTransition::default();
        }
        let mut effects = vec![
            MenuEffect::SetPanelOpen(false),
            MenuEffect::SetOverlayActive(false),
            MenuEffect::SetTriggerExpanded(false),
        ];
        let animate = self.motion.uses_view_transition();
        match self.motion.settle_delay(self.close_delay_ms) {
            Some(delay_ms) => {
                let ticket = CloseTicket(self.next_ticket);
                self.next_ticket += 1;
                self.phase = MenuPhase::Closing { ticket, return_focus: options.return_focus };
                log::debug!("menu closing, finish in {delay_ms}ms");
                MenuTransition { animate, effects, finish: Some(ScheduledFinish { ticket, delay_ms }) }
            }
            None => {
                self.phase = MenuPhase::Closed;
                effects.extend(self.settle(options.return_focus));
                log::debug!("menu closed");
                MenuTransition { animate, effects, finish: None }
            }
        }
    }

    /// Open when closed (or closing), close otherwise.
    pub fn toggle(&mut self) -> MenuTransition {
        if self.is_open() { self.close(CloseOptions::default()) } else { self.open() }
    }

    /// Run the delayed part of a close. Stale tickets are ignored.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> Vec<MenuEffect> {
        match self.phase {
            MenuPhase::Closing { ticket: pending, return_focus } if pending == ticket => {
                self.phase = MenuPhase::Closed;
                log::debug!("menu closed");
                self.settle(return_focus)
            }
            _ => Vec::new(),
        }
    }

    fn settle(&mut self, return_focus: bool) -> Vec<MenuEffect> {
        let mut effects = vec![MenuEffect::SetOverlayHidden(true)];
        if self.scroll_locked {
            self.scroll_locked = false;
            effects.push(MenuEffect::UnlockScroll);
        }
        if return_focus {
            effects.push(MenuEffect::FocusTrigger);
        }
        effects
    }
}
