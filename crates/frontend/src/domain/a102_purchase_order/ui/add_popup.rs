use crate::shared::icons::icon;
use crate::shared::modal::BottomSheet;
use leptos::prelude::*;

/// Bottom sheet behind the floating "+" button of the intent list.
#[component]
pub fn AddIntentPopup(on_close: Callback<()>, on_create: Callback<()>) -> impl IntoView {
    view! {
        <BottomSheet on_close=on_close>
            <h3 class="sheet__title">"Create New Intent"</h3>
            <div class="sheet__actions">
                <button
                    class="sheet__option"
                    on:click=move |_| {
                        on_close.run(());
                        on_create.run(());
                    }
                >
                    <span class="sheet__option-icon">{icon("clipboard")}</span>
                    <span class="sheet__option-text">
                        <strong>"Create Intent (PO)"</strong>
                        <small>"Fill form to create new intent"</small>
                    </span>
                </button>
                <button class="button button--secondary sheet__cancel" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </BottomSheet>
    }
}
