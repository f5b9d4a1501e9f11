use leptos::prelude::*;

use crate::content::site;

use super::copy_button::CopyButton;
use super::motion::enter_delay;
use super::view_mode::use_view_state;

// Per-link border/glow treatment, keyed by the content document
fn accent_classes(accent: &str) -> &'static str {
    match accent {
        "blue" => "border-blue-500/50 shadow-blue-900/40 hover:shadow-blue-500/50",
        "pink" => "border-pink-500/50 shadow-pink-900/40 hover:shadow-pink-500/50",
        _ => "border-cyan-500/50 shadow-cyan-900/40 hover:shadow-cyan-500/50",
    }
}

#[component]
pub fn ConnectPanel() -> impl IntoView {
    let view_state = use_view_state();
    let connect = &site().connect;

    view! {
        <div class="w-full flex flex-col gap-6 py-8">
            <div
                class="animate-rise-in flex items-center gap-5 p-6 rounded-2xl bg-gray-900/60 backdrop-blur-md border border-cyan-500/50 shadow-xl shadow-cyan-900/40 text-white text-lg font-medium hover:scale-[1.02] transition-transform duration-300"
                style=enter_delay(0)
            >
                <img
                    src=connect.phone.icon.as_str()
                    alt="Phone"
                    class="w-10 h-10 object-contain flex-shrink-0"
                />
                <span>{connect.phone.number.as_str()}</span>
                <CopyButton text=connect.phone.number.clone() class="ml-6" />
            </div>

            {connect
                .links
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    view! {
                        <a
                            href=link.href.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class=format!(
                                "animate-rise-in flex items-center gap-5 p-6 rounded-2xl cursor-pointer bg-gray-900/60 backdrop-blur-md border shadow-xl text-white text-lg font-medium hover:scale-[1.04] active:scale-[0.96] transition-all duration-300 {}",
                                accent_classes(&link.accent),
                            )
                            style=enter_delay(index + 1)
                        >
                            <img
                                src=link.icon.as_str()
                                alt=link.label.as_str()
                                class="w-10 h-10 object-contain flex-shrink-0"
                            />
                            <span>{link.label.as_str()}</span>
                        </a>
                    }
                })
                .collect_view()}

            <button
                class="animate-fade-up mt-10 px-10 py-4 text-lg font-bold bg-gray-800 hover:bg-gray-700 border border-gray-600 rounded-full text-white transition-all duration-300 active:scale-95"
                style=enter_delay(3)
                on:click=move |_| view_state.select_home()
            >
                {connect.footer_label.as_str()}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_accents_have_distinct_treatments() {
        assert_ne!(accent_classes("blue"), accent_classes("pink"));
    }

    #[test]
    fn test_unknown_accent_falls_back() {
        assert_eq!(accent_classes("teal"), accent_classes(""));
    }
}
