//! Home page: hero banner followed by a feature grid

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
    }
}

/// Landing banner with links to the other pages
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"SPA Shell"</h1>
            <p class="hero-subtitle">
                "A server-rendered shell with fragment routing and a single API probe."
            </p>
            <div class="hero-actions">
                <a href="#/antd" class="btn-base btn-primary">"Try the demo"</a>
                <a href="#/login" class="btn-base btn-secondary">"Sign in"</a>
            </div>
        </section>
    }
}

/// One feature tile
#[derive(Clone, Copy)]
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: icons::TABLE,
        title: "Ordered routes",
        description: "Routes are checked in declaration order and a catch-all can only come last.",
    },
    Feature {
        icon: icons::LIGHTNING,
        title: "Hydrated views",
        description: "Pages render on the server and come alive in the browser.",
    },
    Feature {
        icon: icons::CHECK,
        title: "Visible failures",
        description: "Network errors show up next to the button that caused them.",
    },
];

/// Feature grid below the hero
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features-grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <Icon name=feature.icon class="w-6 h-6" />
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
