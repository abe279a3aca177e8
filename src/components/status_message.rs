use leptos::prelude::*;
use todo_sync::RequestStatus;

/// Full-page placeholder shown instead of the list while loading or after a failed load
#[component]
pub fn StatusMessage(status: RequestStatus) -> impl IntoView {
    let (class, text) = match status {
        RequestStatus::Loading => ("status loading", "Loading..."),
        RequestStatus::Error => ("status error", "Error Occured!"),
        RequestStatus::Ready => ("status", ""),
    };
    view! { <div class=class>{text}</div> }
}
