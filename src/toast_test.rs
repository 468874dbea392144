use super::*;

#[test]
fn empty_message_creates_nothing() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    assert_eq!(stack.show(""), None);
    assert!(stack.toasts().is_empty());
}

#[test]
fn toast_present_immediately() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    let id = stack.show("Item adicionado ao carrinho").expect("toast");
    assert_eq!(stack.get(id).map(|t| t.message.as_str()), Some("Item adicionado ao carrinho"));
    assert_eq!(stack.phase(id), Some(ToastPhase::Entering));
    stack.reveal(id);
    assert_eq!(stack.phase(id), Some(ToastPhase::Shown));
}

#[test]
fn animated_exit_waits_before_removal() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    let id = stack.show("saved").expect("toast");
    stack.reveal(id);
    assert_eq!(stack.begin_exit(id), ToastExit::RemoveAfter(220));
    assert_eq!(stack.phase(id), Some(ToastPhase::Leaving));
    stack.remove(id);
    assert!(stack.get(id).is_none());
}

#[test]
fn reduced_motion_skips_animations() {
    let mut stack = ToastStack::new(MotionStrategy::Reduced, 220);
    let id = stack.show("saved").expect("toast");
    assert_eq!(stack.phase(id), Some(ToastPhase::Shown));
    assert_eq!(stack.begin_exit(id), ToastExit::Removed);
    assert!(stack.toasts().is_empty());
}

#[test]
fn toasts_have_independent_lifecycles() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    let a = stack.show("same").expect("toast");
    let b = stack.show("same").expect("toast");
    assert_ne!(a, b);
    assert_eq!(stack.ids(), vec![a, b]);

    stack.begin_exit(a);
    stack.remove(a);
    assert_eq!(stack.ids(), vec![b]);
    assert_eq!(stack.phase(b), Some(ToastPhase::Entering));
}

#[test]
fn begin_exit_twice_is_ignored() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    let id = stack.show("x").expect("toast");
    stack.begin_exit(id);
    assert_eq!(stack.begin_exit(id), ToastExit::Ignored);
}

#[test]
fn reveal_does_not_resurrect_leaving_toast() {
    let mut stack = ToastStack::new(MotionStrategy::CssTransition, 220);
    let id = stack.show("x").expect("toast");
    stack.begin_exit(id);
    stack.reveal(id);
    assert_eq!(stack.phase(id), Some(ToastPhase::Leaving));
}
