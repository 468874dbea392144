//! Live region rendering the toast stack.
//!
//! The region is appended to `<body>` once at startup and announced to
//! assistive technology (`aria-live="polite"`). Each toast runs its own
//! timers; nothing queues or deduplicates them.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;
use shopfront::motion::MotionStrategy;
use shopfront::toast::{ToastPhase, ToastStack};

pub const HOST_STYLE: &str = "position:fixed;inset:auto 0 16px 0;display:grid;place-items:center;gap:10px;pointer-events:none;z-index:9999";

const TOAST_BASE_STYLE: &str = "pointer-events:auto;max-width:92vw;padding:12px 16px;background:rgba(15,15,15,0.92);color:#fff;border-radius:12px;font-size:14px;box-shadow:0 10px 30px rgba(0,0,0,.35)";

/// Inline style of one toast in `phase`.
#[must_use]
pub fn toast_style(phase: Option<ToastPhase>, motion: MotionStrategy) -> String {
    let (transform, opacity) = match phase {
        Some(ToastPhase::Shown) => ("translateY(0)", "1"),
        Some(ToastPhase::Leaving) => ("translateY(8px)", "0"),
        Some(ToastPhase::Entering) | None => ("translateY(12px)", "0"),
    };
    let transition = if motion.animates() { "transform .25s ease, opacity .25s ease" } else { "none" };
    format!("{TOAST_BASE_STYLE};transform:{transform};opacity:{opacity};transition:{transition}")
}

#[component]
pub fn ToastHost(stack: RwSignal<ToastStack>) -> impl IntoView {
    view! {
        <div class="toast-host" aria-live="polite" aria-atomic="true" style=HOST_STYLE>
            <For
                each=move || stack.with(ToastStack::ids)
                key=|id| *id
                children=move |id| {
                    let message = stack
                        .with_untracked(|s| s.get(id).map(|t| t.message.clone()))
                        .unwrap_or_default();
                    let motion = stack.with_untracked(ToastStack::motion);
                    view! {
                        <div class="toast" role="status" style=move || toast_style(stack.with(|s| s.phase(id)), motion)>
                            {message}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Handle for showing toasts from anywhere in the host.
#[cfg(feature = "csr")]
#[derive(Clone, Copy)]
pub struct Toasts {
    stack: RwSignal<ToastStack>,
    hold_ms: u32,
}

#[cfg(feature = "csr")]
impl Toasts {
    /// Append the live region to `<body>`.
    pub fn mount(motion: MotionStrategy, hold_ms: u32, exit_ms: u32) -> Self {
        let stack = RwSignal::new(ToastStack::new(motion, exit_ms));
        leptos::mount::mount_to_body(move || view! { <ToastHost stack=stack/> });
        Self { stack, hold_ms }
    }

    /// Show `message` for the hold duration, then animate it out and remove it.
    /// Empty messages are ignored.
    pub fn show(self, message: &str) {
        use gloo_timers::callback::Timeout;
        use leptos::leptos_dom::helpers::request_animation_frame;
        use shopfront::toast::ToastExit;

        let mut shown = None;
        self.stack.update(|s| shown = s.show(message));
        let Some(id) = shown else {
            return;
        };

        let stack = self.stack;
        if stack.with_untracked(|s| s.phase(id)) == Some(ToastPhase::Entering) {
            // Two frames so the off-position style is painted before the move.
            request_animation_frame(move || {
                request_animation_frame(move || stack.update(|s| s.reveal(id)));
            });
        }

        Timeout::new(self.hold_ms, move || {
            let mut exit = ToastExit::Ignored;
            stack.update(|s| exit = s.begin_exit(id));
            if let ToastExit::RemoveAfter(delay_ms) = exit {
                Timeout::new(delay_ms, move || stack.update(|s| s.remove(id))).forget();
            }
        })
        .forget();
    }
}
