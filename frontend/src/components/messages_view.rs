use chrono::NaiveDateTime;
use yew::prelude::*;

use shared::{ChildRecord, MessageFilters, MessageRecord, MessagesData};

use super::feedback;
use super::forms::compose_message_form::ComposeMessageForm;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

const PAGE_SIZE: u32 = 20;

/// The backend emits naive ISO-8601 timestamps (no timezone). Fall back to
/// the raw string rather than hiding the date on a parse failure.
pub(crate) fn format_message_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(datetime) => datetime.format("%d %b %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct MessagesViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(MessagesView)]
pub fn messages_view(props: &MessagesViewProps) -> Html {
    let page = use_state(|| 1u32);

    let student_id = props.student.as_ref().map(|student| student.id);

    let messages = {
        let api_client = props.api_client.clone();
        let deps = student_id.map(|id| (id, *page));
        use_remote(deps, move |(student_id, page): (i64, u32)| {
            let api_client = api_client.clone();
            async move {
                api_client
                    .student_messages(
                        student_id,
                        &MessageFilters {
                            page: Some(page),
                            limit: Some(PAGE_SIZE),
                        },
                    )
                    .await
            }
        })
    };

    let body = match &messages.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading messages..."),
        Remote::Failed(message) => feedback::error_banner(message, &messages.refresh),
        Remote::Ready(data) => render_messages(&props.api_client, data, &page),
    };

    html! {
        <section class="messages-view">
            <h2>{"Messages"}</h2>
            {body}
            {if let Some(student_id) = student_id {
                html! {
                    <ComposeMessageForm
                        api_client={props.api_client.clone()}
                        student_id={student_id}
                        on_sent={messages.refresh.clone()}
                    />
                }
            } else { html! {} }}
        </section>
    }
}

fn render_messages(api_client: &ApiClient, data: &MessagesData, page: &UseStateHandle<u32>) -> Html {
    let list = if data.messages.is_empty() {
        feedback::empty_state("No messages yet.")
    } else {
        html! {
            <div class="message-list">
                {for data.messages.iter().map(|message| render_message(api_client, message))}
            </div>
        }
    };

    let pages = data.pagination.pages;
    let current = data.pagination.page.max(1);

    let pager = if pages > 1 {
        let prev = {
            let page = page.clone();
            Callback::from(move |_: MouseEvent| page.set((*page - 1).max(1)))
        };
        let next = {
            let page = page.clone();
            Callback::from(move |_: MouseEvent| page.set(*page + 1))
        };
        html! {
            <div class="pager">
                <button class="btn btn-secondary" onclick={prev} disabled={current <= 1}>
                    {"Newer"}
                </button>
                <span class="pager-info">{format!("Page {} of {}", current, pages)}</span>
                <button class="btn btn-secondary" onclick={next} disabled={current >= pages}>
                    {"Older"}
                </button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            {list}
            {pager}
        </>
    }
}

fn render_message(api_client: &ApiClient, message: &MessageRecord) -> Html {
    let classes = classes!(
        "message-card",
        message.is_from_parent.then(|| "from-parent"),
        (!message.is_read).then(|| "unread"),
    );

    html! {
        <article class={classes}>
            <header class="message-header">
                <span class="message-subject">{&message.subject}</span>
                <span class="message-date">
                    {message.created_at.as_deref().map(format_message_date).unwrap_or_default()}
                </span>
            </header>
            <div class="message-meta">
                {if message.is_from_parent {
                    format!("You, to {}", message.recipient_name)
                } else {
                    format!("From {}", message.sender_name)
                }}
            </div>
            <div class="message-body">{&message.content}</div>
            {if !message.attachments.is_empty() {
                html! {
                    <ul class="message-attachments">
                        {for message.attachments.iter().map(|attachment| html! {
                            <li>
                                <a href={api_client.absolute_url(&attachment.url)}
                                   target="_blank" rel="noopener">
                                    {format!("{} ({} kB)", attachment.name, attachment.size / 1024)}
                                </a>
                            </li>
                        })}
                    </ul>
                }
            } else { html! {} }}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn naive_timestamps_are_formatted() {
        assert_eq!(format_message_date("2026-03-05T10:42:00"), "05 Mar 2026 10:42");
        assert_eq!(
            format_message_date("2026-03-05T10:42:00.123456"),
            "05 Mar 2026 10:42"
        );
    }

    #[wasm_bindgen_test]
    fn unparseable_timestamps_fall_through() {
        assert_eq!(format_message_date("yesterday"), "yesterday");
    }
}
