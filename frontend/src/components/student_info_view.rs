use yew::prelude::*;

use shared::{ChildRecord, StudentDetails};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentInfoViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(StudentInfoView)]
pub fn student_info_view(props: &StudentInfoViewProps) -> Html {
    let remote = {
        let api_client = props.api_client.clone();
        use_remote(
            props.student.as_ref().map(|student| student.id),
            move |student_id: i64| {
                let api_client = api_client.clone();
                async move { api_client.student_info(student_id).await }
            },
        )
    };

    match &remote.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading student record..."),
        Remote::Failed(message) => feedback::error_banner(message, &remote.refresh),
        Remote::Ready(data) => render_details(&data.student),
    }
}

fn render_details(student: &StudentDetails) -> Html {
    let row = |label: &str, value: String| {
        html! {
            <div class="info-row">
                <dt>{label.to_string()}</dt>
                <dd>{if value.is_empty() { "-".to_string() } else { value }}</dd>
            </div>
        }
    };

    html! {
        <section class="student-info">
            <h2>{&student.name}</h2>
            <dl class="info-grid">
                {row("Registration no.", student.gr_no.clone())}
                {row("Course", student.course.clone())}
                {row("Class", student.batch.clone())}
                {row("Email", student.email.clone())}
                {row("Mobile", student.mobile.clone())}
                {row("Born", student.birth_date.clone().unwrap_or_default())}
                {row("Gender", student.gender.clone())}
            </dl>
        </section>
    }
}
