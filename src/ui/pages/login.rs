//! Login page component
//!
//! Placeholder markup only; no credentials are checked or sent anywhere.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <Icon name=icons::KEY class="w-8 h-8" />
                    <h1 class="login-title">"Login"</h1>
                </div>
                <p class="login-hint">"Authentication is not available in this demo."</p>
                <a href="#/" class="btn-base btn-ghost">"Back to home"</a>
            </div>
        </div>
    }
}
