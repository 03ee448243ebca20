use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Closes on Escape for as long as the calling component is mounted.
fn close_on_escape(on_close: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    close_on_escape(on_close);

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Sheet sliding up from the bottom edge; closes on a click outside it.
#[component]
pub fn BottomSheet(on_close: Callback<()>, children: Children) -> impl IntoView {
    close_on_escape(on_close);

    view! {
        <div class="sheet-overlay" on:click=move |_| on_close.run(())>
            <div class="sheet" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="sheet__handle"></div>
                {children()}
            </div>
        </div>
    }
}
