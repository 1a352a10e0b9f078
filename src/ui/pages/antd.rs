//! Antd demo page
//!
//! A title, some text and a Ping button. The ping outcome is kept in the
//! page's own state and rendered inline; the button is disabled while a
//! request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::PingStatus;
use crate::ui::common::{Button, ErrorMessage, SuccessMessage};
use crate::ui::ping_client::fetch_ping;

/// Antd demo page component
#[component]
pub fn AntdPage() -> impl IntoView {
    let status = RwSignal::new(PingStatus::Idle);
    let pending = Signal::derive(move || status.with(PingStatus::is_pending));

    let on_ping = Callback::new(move |_: ()| {
        if status.with_untracked(PingStatus::is_pending) {
            return;
        }
        status.set(PingStatus::Pending);

        spawn_local(async move {
            let result = fetch_ping().await;
            match &result {
                Ok(response) => leptos::logging::log!("Ping answered: {:?}", response),
                Err(e) => leptos::logging::warn!("Ping failed: {}", e),
            }
            status.set(result.into());
        });
    });

    view! {
        <AntdPageView status=status on_ping=on_ping pending=pending />
    }
}

/// Markup of the demo page for a given ping state
#[component]
fn AntdPageView(
    status: RwSignal<PingStatus>,
    on_ping: Callback<()>,
    pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="antd-page">
            <h1>"AntdPage Title"</h1>
            <p>"AntdPage Content"</p>
            <Button on_click=on_ping loading=pending>"Ping"</Button>
            <div class="ping-result" aria-live="polite">
                <SuccessMessage message=Signal::derive(move || status.with(PingStatus::success_text)) />
                <ErrorMessage error=Signal::derive(move || status.with(PingStatus::error_text)) />
            </div>
        </div>
    }
}
