use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};

/// Copies a literal string to the clipboard.  Shows a transient check mark
/// while the `copied` signal from leptos-use is high; disabled where the
/// Clipboard API is unavailable.
#[component]
pub fn CopyButton(text: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    view! {
        <button
            class=format!(
                "px-3 py-2 rounded-xl border border-cyan-500/40 text-cyan-200 hover:bg-cyan-500/10 active:scale-95 transition-all duration-200 disabled:opacity-40 {class}",
            )
            disabled=move || !is_supported.get()
            aria-label="Copy to clipboard"
            on:click=move |_| copy(&text)
        >
            {move || if copied.get() { "✓" } else { "⧉" }}
        </button>
    }
}
