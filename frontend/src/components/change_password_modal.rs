use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::ChangePasswordRequest;

use crate::services::api::ApiClient;

const MIN_PASSWORD_LEN: usize = 8;

/// Client-side checks only; the server may still reject the change and its
/// message is shown verbatim.
pub(crate) fn validate_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("All fields are required");
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err("The new password must be at least 8 characters");
    }
    if new != confirm {
        return Err("The new passwords do not match");
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ChangePasswordModalProps {
    pub api_client: ApiClient,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ChangePasswordModal)]
pub fn change_password_modal(props: &ChangePasswordModalProps) -> Html {
    let current = use_state(String::new);
    let new = use_state(String::new);
    let confirm = use_state(String::new);
    let saving = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    if !props.open {
        return html! {};
    }

    let field_handler = |field: UseStateHandle<String>, form_error: UseStateHandle<Option<String>>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
            form_error.set(None);
        })
    };

    let on_current_change = field_handler(current.clone(), form_error.clone());
    let on_new_change = field_handler(new.clone(), form_error.clone());
    let on_confirm_change = field_handler(confirm.clone(), form_error.clone());

    let onsubmit = {
        let api_client = props.api_client.clone();
        let current = current.clone();
        let new = new.clone();
        let confirm = confirm.clone();
        let saving = saving.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(message) = validate_change(&current, &new, &confirm) {
                form_error.set(Some(message.to_string()));
                return;
            }

            let api_client = api_client.clone();
            let current = current.clone();
            let new = new.clone();
            let confirm = confirm.clone();
            let saving = saving.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                saving.set(true);
                form_error.set(None);
                form_success.set(false);

                let request = ChangePasswordRequest {
                    current_password: (*current).clone(),
                    new_password: (*new).clone(),
                };

                match api_client.change_password(&request).await {
                    Ok(()) => {
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                        form_success.set(true);
                    }
                    Err(err) => {
                        // Keep the fields so the user can correct and retry.
                        form_error.set(Some(err.to_string()));
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        Callback::from(move |_: MouseEvent| {
            form_error.set(None);
            form_success.set(false);
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{"Change password"}</h2>

                {if let Some(error) = (*form_error).as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                {if *form_success {
                    html! { <div class="form-message success">{"Password updated."}</div> }
                } else { html! {} }}

                <form class="change-password-form" {onsubmit}>
                    <div class="form-group">
                        <label for="current-password">{"Current password"}</label>
                        <input
                            type="password"
                            id="current-password"
                            value={(*current).clone()}
                            onchange={on_current_change}
                            disabled={*saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="new-password">{"New password"}</label>
                        <input
                            type="password"
                            id="new-password"
                            value={(*new).clone()}
                            onchange={on_new_change}
                            disabled={*saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="confirm-password">{"Confirm new password"}</label>
                        <input
                            type="password"
                            id="confirm-password"
                            value={(*confirm).clone()}
                            onchange={on_confirm_change}
                            disabled={*saving}
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_close}>
                            {"Close"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={*saving}>
                            {if *saving { "Saving..." } else { "Update password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn rejects_missing_fields() {
        assert!(validate_change("", "longenough", "longenough").is_err());
        assert!(validate_change("old", "", "").is_err());
    }

    #[wasm_bindgen_test]
    fn rejects_short_or_mismatched_passwords() {
        assert!(validate_change("old", "short", "short").is_err());
        assert!(validate_change("old", "longenough", "different1").is_err());
    }

    #[wasm_bindgen_test]
    fn accepts_a_valid_change() {
        assert!(validate_change("old", "longenough", "longenough").is_ok());
    }
}
