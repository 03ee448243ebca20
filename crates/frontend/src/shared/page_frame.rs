//! Root wrapper for every page rendered inside a tab.
//!
//! Sets `id="{entity}--{category}"` (e.g. `"a103_grn--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
