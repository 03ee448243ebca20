use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / "page / total" / Next. Hidden when everything fits on one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the requested page (1-indexed)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    <span>"Previous"</span>
                </button>
                <span class="pagination-info">
                    {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get_untracked();
                        if page < total_pages.get_untracked() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    <span>"Next"</span>
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
