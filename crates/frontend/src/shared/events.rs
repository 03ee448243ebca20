//! Window events that let one tab tell the others to reload.

use leptos::prelude::*;

/// Fired after an intent is created.
pub const INTENT_CREATED: &str = "intentCreated";
/// Fired after a delivery is received; intent statuses may have moved.
pub const DELIVERY_RECEIVED: &str = "upcomingDeliveryRefresh";

/// Events that make the intent list reload.
pub const INTENT_LIST_REFRESH: [&str; 2] = [INTENT_CREATED, DELIVERY_RECEIVED];

pub fn dispatch_window_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::Event::new(name) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("cannot create {} event: {:?}", name, e),
    }
}

/// Runs `on_event` whenever one of `names` fires, until the owner is cleaned up.
pub fn use_window_events(names: &[&'static str], on_event: Callback<()>) {
    let handles: Vec<WindowListenerHandle> = names
        .iter()
        .map(|name| window_event_listener_untyped(name, move |_| on_event.run(())))
        .collect();
    on_cleanup(move || handles.into_iter().for_each(WindowListenerHandle::remove));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_list_reloads_after_receipt() {
        assert_eq!(INTENT_LIST_REFRESH, ["intentCreated", "upcomingDeliveryRefresh"]);
        assert_ne!(INTENT_CREATED, DELIVERY_RECEIVED);
    }
}
