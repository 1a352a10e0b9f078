//! Fragment-based router
//!
//! Reads the page path from `location.hash`, follows `hashchange` events and
//! renders the page the route table resolves. The server never sees the
//! fragment, so SSR renders `/` and the client re-resolves after hydration.

use leptos::prelude::*;

use crate::core::{Page, RouteTable};
use crate::ui::pages::{AntdPage, HomePage, LoginPage, NotFoundPage};

/// Router shell rendering exactly one page for the current fragment
#[component]
pub fn HashRouter(
    /// Route table; defaults to the exact-home ordering
    #[prop(optional)]
    table: Option<RouteTable>,
) -> impl IntoView {
    let table = table.unwrap_or_default();
    let path = RwSignal::new("/".to_string());
    let page = Memo::new(move |_| path.with(|p| table.resolve(p)));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::hashchange;

        let sync = move || {
            let hash = window().location().hash().unwrap_or_default();
            path.set(crate::core::path_from_hash(&hash));
        };

        // Runs once after hydration
        Effect::new(move |_| sync());

        let handle = window_event_listener(hashchange, move |_| {
            sync();
            leptos::logging::log!("Navigated to {}", path.get_untracked());
        });
        on_cleanup(move || drop(handle));
    }

    view! {
        <div class="app-shell">
            <NavBar page=page />
            <main class="app-main">{move || render_page(page.get())}</main>
        </div>
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Antd => view! { <AntdPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Top navigation with fragment links
#[component]
fn NavBar(page: Memo<Page>) -> impl IntoView {
    view! {
        <nav class="app-nav">
            {[Page::Home, Page::Login, Page::Antd]
                .into_iter()
                .filter_map(|target| target.href().map(|href| (target, href)))
                .map(|(target, href)| {
                    view! {
                        <a
                            href=href
                            class=move || {
                                if page.get() == target { "nav-link nav-link-active" } else { "nav-link" }
                            }
                        >
                            {target.title()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
