use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::LoginRequest;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub error: Option<String>,
    pub pending: bool,
    pub on_submit: Callback<LoginRequest>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            local_error.set(None);
        })
    };

    let on_password_change = {
        let password = password.clone();
        let local_error = local_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            local_error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                local_error.set(Some("Email and password are required".to_string()));
                return;
            }

            on_submit.emit(LoginRequest {
                email: email_value,
                password: password_value,
            });
        })
    };

    // Server-side failures and local validation share the same banner slot.
    let banner = local_error
        .as_ref()
        .cloned()
        .or_else(|| props.error.clone());

    html! {
        <div class="login-page">
            <div class="login-card">
                <h1>{"EduSync Parent Portal"}</h1>
                <p class="login-subtitle">{"Sign in to follow your child's school life."}</p>

                {if let Some(message) = banner {
                    html! { <div class="form-message error">{message}</div> }
                } else { html! {} }}

                <form class="login-form" {onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            onchange={on_email_change}
                            disabled={props.pending}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            disabled={props.pending}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={props.pending}>
                        {if props.pending { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
