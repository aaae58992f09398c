//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    company_form::CompanyFormPage, home::HomePage, supplier_names::SupplierNamesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component with client-side routing.
///
/// Pages keep their own local state; there is no shared mutable state
/// across routes, so no context providers are needed here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/supplybase-admin.css"/>
        <Title text="Supplybase Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("supplier-material-names")
                    view=SupplierNamesPage
                />
                <Route
                    path=(StaticSegment("companies"), StaticSegment("new"))
                    view=|| view! { <CompanyFormPage/> }
                />
            </Routes>
        </Router>
    }
}
