//! Single-select with type-to-filter. Open/search state lives in
//! `contracts::shared::dropdown::DropdownState`; the committed value is
//! owned by the parent and only changes through `on_change`.

use crate::shared::icons::icon;
use contracts::shared::dropdown::DropdownState;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn SearchableDropdown(
    /// Committed value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::new());
    let root_ref = NodeRef::<html::Div>::new();

    // A press anywhere outside the control closes it without committing.
    let handle = window_event_listener(ev::mousedown, move |event| {
        if !state.with_untracked(|s| s.open) {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            state.update(|s| s.dismiss());
        }
    });
    on_cleanup(move || handle.remove());

    let activate = move || state.update(|s| s.activate(disabled.get_untracked()));

    let select = move |option: String| {
        let mut committed = String::new();
        state.update(|s| committed = s.select(&option));
        on_change.run(committed);
    };

    let placeholder_text =
        move || placeholder.get().unwrap_or_else(|| "Select or type...".to_string());

    view! {
        <div class="dropdown" class:dropdown--disabled=move || disabled.get() node_ref=root_ref>
            <div class="dropdown__control">
                <input
                    type="text"
                    class="dropdown__input"
                    autocomplete="off"
                    placeholder=placeholder_text
                    disabled=move || disabled.get()
                    prop:value=move || state.with(|s| s.display_value(&value.get()))
                    on:click=move |_| activate()
                    on:focus=move |_| activate()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.input(&text, disabled.get_untracked()));
                    }
                />
                <span
                    class="dropdown__chevron"
                    class:dropdown__chevron--open=move || state.with(|s| s.is_expanded(disabled.get()))
                >
                    {icon("chevron-down")}
                </span>
            </div>

            <Show when=move || state.with(|s| s.is_expanded(disabled.get()))>
                <div class="dropdown__menu">
                    {move || {
                        let visible = options.with(|all| state.with(|s| s.visible_options(all)));
                        if visible.is_empty() {
                            return view! { <div class="dropdown__empty">"No results found"</div> }
                                .into_any();
                        }
                        let current = value.get();
                        view! {
                            <ul class="dropdown__list">
                                {visible
                                    .into_iter()
                                    .map(|option| {
                                        let is_selected = option == current;
                                        let option_for_click = option.clone();
                                        view! {
                                            <li
                                                class="dropdown__option"
                                                class:dropdown__option--selected=is_selected
                                                on:click=move |_| select(option_for_click.clone())
                                            >
                                                {option}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
