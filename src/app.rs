use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::HashRouter;
use crate::ui::pages::NotFoundPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/spa-shell.css"/>

        <Title text="SPA Shell"/>

        // Server paths: the shell lives at UI_MOUNT_PATH, pages below it are
        // chosen from the URL fragment by HashRouter
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/demo") view=|| view! { <HashRouter/> }/>
            </Routes>
        </Router>
    }
}
