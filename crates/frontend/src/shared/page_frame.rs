//! PageFrame — root wrapper for every POS screen.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"a002_sale--entry"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! The `--` separator keeps the entity searchable: the id copied from the
//! DOM inspector leads to the `domain/{entity}/` directory.

use leptos::prelude::*;

/// Document entry screen (cart + header + submit).
pub const PAGE_CAT_ENTRY: &str = "entry";

/// Fallback / informational page.
pub const PAGE_CAT_INFO: &str = "info";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Heading shown in `page__header`
    title: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let class = match category {
        PAGE_CAT_ENTRY => "page page--entry",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
