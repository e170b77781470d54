use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use shared::SendMessageRequest;

use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ComposeMessageFormProps {
    pub api_client: ApiClient,
    pub student_id: i64,
    /// Fired after a successful send so the list above refreshes.
    pub on_sent: Callback<()>,
}

#[function_component(ComposeMessageForm)]
pub fn compose_message_form(props: &ComposeMessageFormProps) -> Html {
    let recipient = use_state(String::new);
    let subject = use_state(String::new);
    let body = use_state(String::new);
    let sending = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let form_success = use_state(|| false);

    let on_recipient_change = {
        let recipient = recipient.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            recipient.set(select.value());
            form_error.set(None);
        })
    };

    let on_subject_change = {
        let subject = subject.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
            form_error.set(None);
        })
    };

    let on_body_change = {
        let body = body.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            body.set(textarea.value());
            form_error.set(None);
        })
    };

    let onsubmit = {
        let api_client = props.api_client.clone();
        let student_id = props.student_id;
        let recipient = recipient.clone();
        let subject = subject.clone();
        let body = body.clone();
        let sending = sending.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let on_sent = props.on_sent.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if recipient.is_empty() || subject.trim().is_empty() || body.trim().is_empty() {
                form_error.set(Some(
                    "Recipient, subject and message are all required".to_string(),
                ));
                return;
            }

            let api_client = api_client.clone();
            let recipient = recipient.clone();
            let subject = subject.clone();
            let body = body.clone();
            let sending = sending.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let on_sent = on_sent.clone();

            spawn_local(async move {
                form_error.set(None);
                form_success.set(false);
                sending.set(true);

                let request = SendMessageRequest {
                    recipient: (*recipient).clone(),
                    subject: subject.trim().to_string(),
                    message: body.trim().to_string(),
                };

                match api_client.send_message(student_id, &request).await {
                    Ok(_response) => {
                        recipient.set(String::new());
                        subject.set(String::new());
                        body.set(String::new());
                        form_success.set(true);
                        on_sent.emit(());

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(err) => {
                        // Keep the draft so the user can retry.
                        form_error.set(Some(err.to_string()));
                    }
                }

                sending.set(false);
            });
        })
    };

    html! {
        <section class="compose-message-section">
            <h3>{"Write a message"}</h3>

            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if *form_success {
                html! { <div class="form-message success">{"Message sent."}</div> }
            } else { html! {} }}

            <form class="compose-message-form" {onsubmit}>
                <div class="form-group">
                    <label for="recipient">{"To"}</label>
                    <select id="recipient" onchange={on_recipient_change} disabled={*sending}>
                        <option value="" selected={recipient.is_empty()}>
                            {"Choose a recipient"}
                        </option>
                        <option value="teachers" selected={*recipient == "teachers"}>
                            {"Teachers"}
                        </option>
                        <option value="administration" selected={*recipient == "administration"}>
                            {"Administration"}
                        </option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="subject">{"Subject"}</label>
                    <input
                        type="text"
                        id="subject"
                        placeholder="Absence, homework, appointment..."
                        value={(*subject).clone()}
                        onchange={on_subject_change}
                        disabled={*sending}
                    />
                </div>

                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        rows="5"
                        value={(*body).clone()}
                        onchange={on_body_change}
                        disabled={*sending}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*sending}>
                    {if *sending { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
