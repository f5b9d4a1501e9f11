use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::site;

use super::about::AboutPanel;
use super::connect::ConnectPanel;
use super::header::SiteHeader;
use super::marquee::LogoMarquee;
use super::view_mode::{use_view_state, ViewState};

/// Root of the bio card.  Owns the view-mode state for the page session and
/// swaps the three top-level panels on it.
#[component]
pub fn HomePage() -> impl IntoView {
    let view_state = ViewState::new();
    provide_context(view_state);

    view! {
        <Title text="Bio" />
        <div class="relative z-10 min-h-dvh w-full max-w-[390px] mx-auto flex flex-col items-center gap-10 px-5 pt-6 pb-20">
            {move || {
                view_state
                    .mode()
                    .shows_home()
                    .then(|| {
                        view! {
                            <SiteHeader />
                            <LogoMarquee />
                            <HeroCard />
                        }
                    })
            }}
            {move || view_state.mode().shows_about().then(|| view! { <AboutPanel /> })}
            {move || view_state.mode().shows_connect().then(|| view! { <ConnectPanel /> })}
        </div>
    }
}

#[component]
fn HeroCard() -> impl IntoView {
    let view_state = use_view_state();
    let hero = &site().hero;

    view! {
        <main class="animate-fade-up flex flex-col items-center text-center w-full border-4 border-white/70 rounded-3xl bg-gray-950/50 backdrop-blur-md p-8 sm:p-10 gap-5 text-white shadow-2xl shadow-blue-950/40 transition-all duration-300 active:scale-[0.96]">
            <h1 class="font-bold text-3xl sm:text-4xl tracking-wide">{hero.greeting.as_str()}</h1>
            <h2 class="text-2xl sm:text-3xl font-medium">{hero.intro.as_str()}</h2>
            <h3 class="text-gray-400 text-lg sm:text-xl mt-1">{hero.lead.as_str()}</h3>

            <button
                class="group flex items-center justify-center gap-2 mt-6 px-2 py-4 font-bold bg-gradient-to-r from-blue-700 via-blue-600 to-blue-500 hover:from-blue-600 hover:via-blue-500 hover:to-blue-400 rounded-3xl shadow-xl shadow-blue-700/50 border border-blue-400/40 transition-all duration-300 active:scale-95 active:shadow-blue-600/60"
                on:click=move |_| view_state.select_connect()
            >
                {hero.connect_label.as_str()}
                <i
                    class="extra-badge-check text-2xl group-hover:scale-110 transition-transform duration-200"
                    aria-hidden="true"
                ></i>
            </button>
        </main>

        <button
            class="animate-fade-up relative overflow-hidden px-10 py-5 mt-4 text-xl font-bold text-white tracking-wide bg-gradient-to-br from-indigo-600/80 via-purple-600/70 to-blue-700/80 backdrop-blur-lg border-2 border-indigo-400/60 rounded-2xl shadow-2xl shadow-indigo-900/50 hover:shadow-indigo-500/60 hover:scale-[1.08] transition-all duration-400 active:scale-95"
            on:click=move |_| view_state.select_about()
        >
            <span class="shimmer absolute inset-0" aria-hidden="true"></span>
            {hero.about_label.as_str()}
        </button>
    }
}
