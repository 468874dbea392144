use super::*;

fn reduced() -> MenuController {
    MenuController::new(MotionStrategy::Reduced, 300, true)
}

fn animated() -> MenuController {
    MenuController::new(MotionStrategy::CssTransition, 300, true)
}

// =============================================================
// open / close
// =============================================================

#[test]
fn open_expands_trigger_and_locks_scroll() {
    let mut menu = reduced();
    let t = menu.open();
    assert!(menu.is_open());
    assert!(menu.is_scroll_locked());
    assert!(t.effects.contains(&MenuEffect::SetTriggerExpanded(true)));
    assert!(t.effects.contains(&MenuEffect::LockScroll));
    assert_eq!(t.effects.last(), Some(&MenuEffect::FocusFirstInPanel));
}

#[test]
fn close_reverts_and_returns_focus_by_default() {
    let mut menu = reduced();
    menu.open();
    let t = menu.close(CloseOptions::default());
    assert_eq!(menu.phase(), MenuPhase::Closed);
    assert!(!menu.is_scroll_locked());
    assert!(t.effects.contains(&MenuEffect::SetTriggerExpanded(false)));
    assert!(t.effects.contains(&MenuEffect::UnlockScroll));
    assert!(t.effects.contains(&MenuEffect::SetOverlayHidden(true)));
    assert_eq!(t.effects.last(), Some(&MenuEffect::FocusTrigger));
    assert!(t.finish.is_none());
}

#[test]
fn close_without_return_focus_leaves_focus_alone() {
    let mut menu = reduced();
    menu.open();
    let t = menu.close(CloseOptions { return_focus: false });
    assert!(!t.effects.contains(&MenuEffect::FocusTrigger));
}

#[test]
fn open_twice_is_noop() {
    let mut menu = reduced();
    menu.open();
    assert!(menu.open().is_empty());
}

#[test]
fn close_when_closed_is_noop() {
    let mut menu = reduced();
    assert!(menu.close(CloseOptions::default()).is_empty());
}

#[test]
fn missing_markup_makes_menu_inert() {
    let mut menu = MenuController::new(MotionStrategy::Reduced, 300, false);
    assert!(menu.open().is_empty());
    assert!(menu.toggle().is_empty());
    assert!(!menu.is_open());
}

#[test]
fn toggle_dispatches_on_state() {
    let mut menu = reduced();
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());
}

// =============================================================
// Motion
// =============================================================

#[test]
fn view_transition_strategy_animates_open() {
    let mut menu = MenuController::new(MotionStrategy::ViewTransition, 300, true);
    assert!(menu.open().animate);
    let mut menu = animated();
    assert!(!menu.open().animate);
}

#[test]
fn animated_close_defers_bookkeeping() {
    let mut menu = animated();
    menu.open();
    let t = menu.close(CloseOptions::default());
    assert!(t.effects.contains(&MenuEffect::SetPanelOpen(false)));
    assert!(!t.effects.contains(&MenuEffect::UnlockScroll));
    let finish = t.finish.expect("close should be scheduled");
    assert_eq!(finish.delay_ms, 300);
    assert!(menu.is_scroll_locked());

    let settled = menu.finish_close(finish.ticket);
    assert_eq!(
        settled,
        vec![MenuEffect::SetOverlayHidden(true), MenuEffect::UnlockScroll, MenuEffect::FocusTrigger]
    );
    assert_eq!(menu.phase(), MenuPhase::Closed);
}

#[test]
fn reopen_during_close_invalidates_pending_finish() {
    let mut menu = animated();
    menu.open();
    let finish = menu.close(CloseOptions::default()).finish.expect("scheduled");

    let reopened = menu.open();
    assert!(!reopened.effects.contains(&MenuEffect::LockScroll));
    assert!(menu.is_open());

    assert!(menu.finish_close(finish.ticket).is_empty());
    assert!(menu.is_open());
    assert!(menu.is_scroll_locked());
}

#[test]
fn only_latest_close_ticket_finishes() {
    let mut menu = animated();
    menu.open();
    let first = menu.close(CloseOptions::default()).finish.expect("scheduled");
    menu.open();
    let second = menu.close(CloseOptions::default()).finish.expect("scheduled");
    assert_ne!(first.ticket, second.ticket);
    assert!(menu.finish_close(first.ticket).is_empty());
    assert!(!menu.finish_close(second.ticket).is_empty());
}
