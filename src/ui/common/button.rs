use leptos::prelude::*;

use crate::ui::common::spinner::InlineSpinner;

/// Primary button that stays disabled while its action is in flight
#[component]
pub fn Button(
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is in loading state; clicks are ignored while set
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="btn-base btn-primary"
            on:click=move |_| {
                if !loading.get_untracked() {
                    on_click.run(())
                }
            }
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show when=move || loading.get()>
                <InlineSpinner />
            </Show>
            {children()}
        </button>
    }
}
