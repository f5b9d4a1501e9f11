use leptos::prelude::*;

use crate::content::site;

/// Site title with the animated shine treatment.  Rendered only while the
/// Home view is active.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="animate-fade-up">
            <h1 class="text-white font-bold text-center py-10 text-4xl sm:text-5xl italic tracking-tight">
                <span class="shine-text">{site().owner.as_str()}</span>
            </h1>
        </header>
    }
}
