//! Transient notifications appended to `<body>`, removed after three seconds.

use gloo_timers::callback::Timeout;

const TOAST_VISIBLE_MS: u32 = 3_000;
const TOAST_FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(kind.class());
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    Timeout::new(TOAST_VISIBLE_MS, move || {
        let _ = toast.set_attribute("style", "opacity: 0");
        Timeout::new(TOAST_FADE_MS, move || toast.remove()).forget();
    })
    .forget();
}

pub fn toast_success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn toast_error(message: &str) {
    log::error!("{}", message);
    show_toast(message, ToastKind::Error);
}
