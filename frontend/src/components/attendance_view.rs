use chrono::Datelike;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use shared::{AttendanceData, AttendanceFilters, ChildRecord};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

fn status_class(status: &str) -> &'static str {
    match status {
        "present" => "status-chip present",
        "absent" => "status-chip absent",
        "late" => "status-chip late",
        "excused" => "status-chip excused",
        _ => "status-chip",
    }
}

#[derive(Properties, PartialEq)]
pub struct AttendanceViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(AttendanceView)]
pub fn attendance_view(props: &AttendanceViewProps) -> Html {
    let month = use_state(|| Option::<u32>::None);
    let year = use_state(|| Option::<i32>::None);

    let student_id = props.student.as_ref().map(|student| student.id);

    let attendance = {
        let api_client = props.api_client.clone();
        let deps = student_id.map(|id| (id, *month, *year));
        use_remote(
            deps,
            move |(student_id, month, year): (i64, Option<u32>, Option<i32>)| {
                let api_client = api_client.clone();
                async move {
                    api_client
                        .student_attendance(student_id, &AttendanceFilters { month, year })
                        .await
                }
            },
        )
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            month.set(select.value().parse().ok());
        })
    };

    let on_year_change = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            year.set(select.value().parse().ok());
        })
    };

    let current_year = chrono::Utc::now().year();

    let filter_bar = html! {
        <div class="filter-bar">
            <select onchange={on_month_change}>
                <option value="" selected={month.is_none()}>{"All months"}</option>
                {for (1..=12u32).map(|m| html! {
                    <option value={m.to_string()} selected={*month == Some(m)}>
                        {month_name(m)}
                    </option>
                })}
            </select>
            <select onchange={on_year_change}>
                <option value="" selected={year.is_none()}>{"All years"}</option>
                {for (current_year - 2..=current_year).map(|y| html! {
                    <option value={y.to_string()} selected={*year == Some(y)}>
                        {y.to_string()}
                    </option>
                })}
            </select>
        </div>
    };

    let body = match &attendance.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading attendance..."),
        Remote::Failed(message) => feedback::error_banner(message, &attendance.refresh),
        Remote::Ready(data) => render_attendance(data),
    };

    html! {
        <section class="attendance-view">
            <h2>{"Attendance"}</h2>
            {if student_id.is_some() { filter_bar } else { html! {} }}
            {body}
        </section>
    }
}

fn render_attendance(data: &AttendanceData) -> Html {
    if data.attendance.is_empty() {
        return feedback::empty_state("No attendance records for this selection.");
    }

    let stats = &data.statistics;

    html! {
        <>
            <div class="stats-strip">
                <span class="stat">{format!("Present: {}", stats.present_days)}</span>
                <span class="stat">{format!("Absent: {}", stats.absent_days)}</span>
                <span class="stat">{format!("Late: {}", stats.late_days)}</span>
                <span class="stat">
                    <strong>{format!("Rate: {:.0}%", stats.attendance_rate)}</strong>
                </span>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Subject"}</th>
                        <th>{"Status"}</th>
                        <th>{"Remark"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for data.attendance.iter().map(|record| html! {
                        <tr>
                            <td>{&record.date}</td>
                            <td>{&record.subject}</td>
                            <td><span class={status_class(&record.status)}>{&record.status}</span></td>
                            <td>{&record.remark}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}
