use yew::prelude::*;

use shared::{ChildRecord, TeachersData};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TeachersViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(TeachersView)]
pub fn teachers_view(props: &TeachersViewProps) -> Html {
    let remote = {
        let api_client = props.api_client.clone();
        use_remote(
            props.student.as_ref().map(|student| student.id),
            move |student_id: i64| {
                let api_client = api_client.clone();
                async move { api_client.student_teachers(student_id).await }
            },
        )
    };

    let body = match &remote.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading teachers..."),
        Remote::Failed(message) => feedback::error_banner(message, &remote.refresh),
        Remote::Ready(data) => render_teachers(data),
    };

    html! {
        <section class="teachers-view">
            <h2>{"Teachers"}</h2>
            {body}
        </section>
    }
}

fn render_teachers(data: &TeachersData) -> Html {
    if data.teachers.is_empty() {
        return feedback::empty_state("No teachers found for this child.");
    }

    html! {
        <div class="teacher-cards">
            {for data.teachers.iter().map(|teacher| html! {
                <div class="card teacher-card">
                    <div class="teacher-name">{&teacher.name}</div>
                    <div class="teacher-subject">{&teacher.subject}</div>
                    {if !teacher.email.is_empty() {
                        html! {
                            <a class="teacher-contact" href={format!("mailto:{}", teacher.email)}>
                                {&teacher.email}
                            </a>
                        }
                    } else { html! {} }}
                    {if !teacher.mobile.is_empty() {
                        html! { <div class="teacher-contact">{&teacher.mobile}</div> }
                    } else { html! {} }}
                </div>
            })}
        </div>
    }
}
