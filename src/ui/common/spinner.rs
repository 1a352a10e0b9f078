use leptos::prelude::*;

/// Small spinner for buttons or text
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <div class="spinner spinner-circle spinner-sm spinner-inline" role="status" aria-live="polite">
            <div class="spinner-circle-inner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
