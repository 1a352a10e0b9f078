//! Not found page component
//!
//! Rendered when no route matches, both for unknown fragments and for
//! unknown server paths.

use leptos::prelude::*;

use crate::core::UI_MOUNT_PATH;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let home_href = format!("{}#/", UI_MOUNT_PATH);

    view! {
        <div class="not-found-page">
            <div class="text-center">
                <div class="not-found-icon">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <a href=home_href class="btn-base btn-primary">"Go Home"</a>
            </div>
        </div>
    }
}
