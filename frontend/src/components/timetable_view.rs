use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{ChildRecord, TimetableData, TimetableFilters};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TimetableViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(TimetableView)]
pub fn timetable_view(props: &TimetableViewProps) -> Html {
    let teacher = use_state(String::new);

    let student_id = props.student.as_ref().map(|student| student.id);

    let teacher_filter = {
        let trimmed = teacher.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    };

    let timetable = {
        let api_client = props.api_client.clone();
        let deps = student_id.map(|id| (id, teacher_filter));
        use_remote(
            deps,
            move |(student_id, teacher): (i64, Option<String>)| {
                let api_client = api_client.clone();
                async move {
                    api_client
                        .student_timetable(student_id, &TimetableFilters { teacher })
                        .await
                }
            },
        )
    };

    let on_teacher_change = {
        let teacher = teacher.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            teacher.set(input.value());
        })
    };

    let body = match &timetable.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading timetable..."),
        Remote::Failed(message) => feedback::error_banner(message, &timetable.refresh),
        Remote::Ready(data) => render_timetable(data),
    };

    html! {
        <section class="timetable-view">
            <h2>{"Timetable"}</h2>
            {if student_id.is_some() {
                html! {
                    <div class="filter-bar">
                        <input
                            type="text"
                            placeholder="Filter by teacher"
                            value={(*teacher).clone()}
                            onchange={on_teacher_change}
                        />
                    </div>
                }
            } else { html! {} }}
            {body}
        </section>
    }
}

fn render_timetable(data: &TimetableData) -> Html {
    if data.timetable.is_empty() {
        return feedback::empty_state("No timetable entries for this selection.");
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Day"}</th>
                    <th>{"Start"}</th>
                    <th>{"End"}</th>
                    <th>{"Subject"}</th>
                    <th>{"Teacher"}</th>
                    <th>{"Room"}</th>
                </tr>
            </thead>
            <tbody>
                {for data.timetable.iter().map(|slot| html! {
                    <tr>
                        <td>{&slot.day_of_week}</td>
                        <td>{&slot.start_time}</td>
                        <td>{&slot.end_time}</td>
                        <td>{&slot.subject}</td>
                        <td>{&slot.teacher}</td>
                        <td>{&slot.classroom}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
