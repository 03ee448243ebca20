//! Periodic refresh for list pages.

use contracts::shared::polling::PollingPolicy;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Runs `on_tick` every `policy.interval_ms` (plus jitter) and, when enabled,
/// whenever the window regains focus. Stops when the owning component is
/// cleaned up. The initial load is the caller's job.
pub fn use_polling(policy: PollingPolicy, on_tick: Callback<()>) {
    let active = Arc::new(AtomicBool::new(true));

    if policy.is_interval_enabled() {
        let active = Arc::clone(&active);
        spawn_local(async move {
            loop {
                let delay = policy.next_delay(js_sys::Math::random());
                TimeoutFuture::new(delay).await;
                if !active.load(Ordering::Relaxed) {
                    break;
                }
                log::debug!("polling tick after {} ms", delay);
                on_tick.run(());
            }
        });
    }

    if policy.refetch_on_focus {
        let active_for_focus = Arc::clone(&active);
        let handle = window_event_listener(leptos::ev::focus, move |_| {
            if active_for_focus.load(Ordering::Relaxed) {
                on_tick.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    on_cleanup(move || active.store(false, Ordering::Relaxed));
}
