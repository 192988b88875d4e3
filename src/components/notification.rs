use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_VISIBLE_MS: u32 = 4000;

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
    // Distinguishes repeats of the same text so each one restarts the timer.
    serial: u64,
}

impl ToastMessage {
    fn new(kind: ToastKind, text: String) -> Self {
        Self { kind, text, serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed) }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text.into())
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

/// Bottom-right notification that dismisses itself after a few seconds.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message| {
                let timeout = message
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_VISIBLE_MS, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let Some(message) = props.message.as_ref() else {
        return html! {};
    };
    let class = match message.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={class} role="status">
            <span>{&message.text}</span>
            <button class="toast-close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_messages_are_distinct() {
        let first = ToastMessage::success("Saved");
        let second = ToastMessage::success("Saved");
        assert_eq!(first.text, second.text);
        assert_ne!(first, second);
        assert_eq!(first.clone(), first);
    }
}
