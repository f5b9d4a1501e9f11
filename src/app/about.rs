use leptos::prelude::*;

use crate::content::site;

use super::motion::enter_delay;
use super::view_mode::use_view_state;

#[component]
pub fn AboutPanel() -> impl IntoView {
    let view_state = use_view_state();
    let about = &site().about;

    view! {
        <div class="w-full flex flex-col items-center gap-10 py-10 px-4 text-white">
            <h1
                class="animate-fade-up text-5xl sm:text-6xl font-extrabold bg-gradient-to-r from-cyan-400 via-blue-400 to-indigo-500 bg-clip-text text-transparent tracking-tight drop-shadow-2xl"
                style=enter_delay(0)
            >
                {about.heading.as_str()}
            </h1>

            <IdentityCard />
            <FavoritesGrid />

            <button
                class="animate-fade-up mt-16 px-14 py-6 text-2xl font-bold bg-gradient-to-r from-blue-800 via-indigo-700 to-blue-900 hover:from-blue-700 hover:via-indigo-600 hover:to-blue-800 border border-cyan-600/60 rounded-3xl shadow-2xl shadow-cyan-900/50 text-white transition-all duration-400 active:scale-95 hover:shadow-cyan-600/70"
                style=enter_delay(2)
                on:click=move |_| view_state.select_home()
            >
                {about.footer_label.as_str()}
            </button>
        </div>
    }
}

#[component]
fn IdentityCard() -> impl IntoView {
    let about = &site().about;

    view! {
        <div
            class="animate-fade-up w-full max-w-lg p-8 rounded-3xl bg-gradient-to-br from-blue-950/90 via-indigo-950/80 to-cyan-950/70 backdrop-blur-2xl border border-cyan-500/40 shadow-2xl shadow-cyan-900/70 hover:shadow-cyan-600/80 transition-shadow duration-500"
            style=enter_delay(1)
        >
            <div class="space-y-8 text-center sm:text-left">
                {about
                    .facts
                    .iter()
                    .map(|fact| {
                        view! {
                            <div class="flex flex-col sm:flex-row items-center gap-5">
                                <span class="text-5xl drop-shadow-md">{fact.icon.as_str()}</span>
                                <div>
                                    <div class="text-cyan-300 font-semibold text-2xl">
                                        {fact.label.as_str()}
                                    </div>
                                    <div class="text-3xl font-bold text-white">
                                        {fact.value.as_str()}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FavoritesGrid() -> impl IntoView {
    let about = &site().about;

    view! {
        <div class="w-full">
            <h2 class="text-4xl sm:text-5xl font-extrabold text-center mb-10 bg-gradient-to-r from-cyan-400 via-blue-500 to-indigo-600 bg-clip-text text-transparent drop-shadow-lg">
                {about.favorites_heading.as_str()}
            </h2>

            <div class="grid grid-cols-2 sm:grid-cols-3 gap-6">
                {about
                    .favorites
                    .iter()
                    .enumerate()
                    .map(|(index, fav)| {
                        view! {
                            <div
                                class="animate-rise-in flex flex-col items-center gap-4 p-4 rounded-3xl bg-gradient-to-br from-blue-950/80 to-indigo-950/70 backdrop-blur-xl border border-cyan-600/50 shadow-xl shadow-cyan-900/60 hover:shadow-cyan-500/80 hover:border-cyan-400/70 hover:scale-110 hover:-translate-y-2.5 hover:rotate-2 transition-all duration-400"
                                style=enter_delay(index)
                            >
                                <img
                                    src=fav.image.as_str()
                                    alt=fav.name.as_str()
                                    class="w-20 h-20 sm:w-24 sm:h-24 object-contain drop-shadow-2xl"
                                />
                                <span class="text-lg sm:text-xl font-bold text-cyan-200">
                                    {fav.name.as_str()}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
