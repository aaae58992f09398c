//! Landing page with navigation links to the admin routes.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Static navigation page. The only behavior here is the dark-mode
/// toggle; everything else is links.
#[component]
pub fn HomePage() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Pick up the stored preference once the browser is driving.
    Effect::new(move || {
        let pref = dark_mode::read_preference();
        dark_mode::apply(pref);
        dark.set(pref);
    });

    let on_toggle = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Supplybase Admin"</h1>
                <button class="btn" on:click=on_toggle>
                    {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                </button>
            </header>

            <nav class="home-page__nav">
                <a class="home-page__link" href="/supplier-material-names">
                    "Supplier material names"
                </a>
                <a class="home-page__link" href="/companies/new">
                    "New company"
                </a>
            </nav>
        </div>
    }
}
