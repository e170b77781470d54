use yew::prelude::*;

/// Shared loading / error / empty fragments so every view renders the four
/// controller states the same way.

pub fn loading(message: &str) -> Html {
    html! { <div class="loading">{message}</div> }
}

pub fn empty_state(message: &str) -> Html {
    html! { <div class="empty-state">{message}</div> }
}

pub fn select_child_hint() -> Html {
    empty_state("Select a child to see this page.")
}

pub fn error_banner(message: &str, on_retry: &Callback<()>) -> Html {
    let onclick = on_retry.reform(|_: MouseEvent| ());
    html! {
        <div class="error-banner">
            <span>{message}</span>
            <button class="btn btn-link" {onclick}>{"Retry"}</button>
        </div>
    }
}
