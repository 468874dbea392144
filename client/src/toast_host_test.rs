use super::*;

#[test]
fn host_style_is_fixed_and_click_through() {
    assert!(HOST_STYLE.contains("position:fixed"));
    assert!(HOST_STYLE.contains("pointer-events:none"));
    assert!(HOST_STYLE.contains("z-index:9999"));
}

#[test]
fn entering_toast_starts_offset_and_transparent() {
    let style = toast_style(Some(ToastPhase::Entering), MotionStrategy::CssTransition);
    assert!(style.contains("transform:translateY(12px)"));
    assert!(style.contains("opacity:0"));
}

#[test]
fn shown_toast_is_in_place_and_opaque() {
    let style = toast_style(Some(ToastPhase::Shown), MotionStrategy::CssTransition);
    assert!(style.contains("transform:translateY(0)"));
    assert!(style.contains("opacity:1"));
    assert!(style.contains("transition:transform .25s ease"));
}

#[test]
fn leaving_toast_slides_down_and_fades() {
    let style = toast_style(Some(ToastPhase::Leaving), MotionStrategy::ViewTransition);
    assert!(style.contains("translateY(8px)"));
    assert!(style.contains("opacity:0"));
}

#[test]
fn reduced_motion_disables_transition() {
    let style = toast_style(Some(ToastPhase::Shown), MotionStrategy::Reduced);
    assert!(style.ends_with("transition:none"));
}
