use yew::prelude::*;

use shared::{ChildRecord, DashboardData};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let remote = {
        let api_client = props.api_client.clone();
        use_remote(
            props.student.as_ref().map(|student| student.id),
            move |student_id: i64| {
                let api_client = api_client.clone();
                async move { api_client.student_dashboard(student_id).await }
            },
        )
    };

    match &remote.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading dashboard..."),
        Remote::Failed(message) => feedback::error_banner(message, &remote.refresh),
        Remote::Ready(data) => render_dashboard(data),
    }
}

fn render_dashboard(data: &DashboardData) -> Html {
    html! {
        <div class="dashboard">
            <section class="dashboard-cards">
                <div class="card">
                    <h3>{"Attendance this month"}</h3>
                    <div class="card-value">{format!("{:.0}%", data.attendance.percentage)}</div>
                    <div class="card-detail">
                        {format!("{} of {} days present",
                            data.attendance.present_days, data.attendance.total_days)}
                    </div>
                </div>

                <div class="card">
                    <h3>{"Fees"}</h3>
                    <div class="card-value">{format!("{:.2} due", data.fees.outstanding)}</div>
                    <div class="card-detail">
                        {format!("{:.2} paid of {:.2}", data.fees.paid, data.fees.total)}
                    </div>
                </div>

                <div class="card">
                    <h3>{"Class"}</h3>
                    <div class="card-value">{&data.student.course}</div>
                    <div class="card-detail">{&data.student.batch}</div>
                </div>
            </section>

            <section class="dashboard-grades">
                <h2>{"Recent grades"}</h2>
                {if data.grades.is_empty() {
                    feedback::empty_state("No recent grades.")
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Subject"}</th>
                                    <th>{"Assessment"}</th>
                                    <th>{"Marks"}</th>
                                    <th>{"Date"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for data.grades.iter().map(|grade| html! {
                                    <tr>
                                        <td>{&grade.subject}</td>
                                        <td>{&grade.exam}</td>
                                        <td>{format!("{}/{}", grade.marks, grade.total_marks)}</td>
                                        <td>{grade.date.clone().unwrap_or_default()}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section class="dashboard-schedule">
                <h2>{"Today's schedule"}</h2>
                {if data.today_schedule.is_empty() {
                    feedback::empty_state("No classes scheduled today.")
                } else {
                    html! {
                        <ul class="schedule-list">
                            {for data.today_schedule.iter().map(|slot| html! {
                                <li class="schedule-slot">
                                    <span class="slot-time">
                                        {format!("{} - {}", slot.start_time, slot.end_time)}
                                    </span>
                                    <span class="slot-subject">{&slot.subject}</span>
                                    <span class="slot-teacher">{&slot.teacher}</span>
                                    <span class="slot-room">{&slot.classroom}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>
        </div>
    }
}
