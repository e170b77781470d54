use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{ChildRecord, GradeFilters, GradesData};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

/// Grades are reported out of 20 across the school, whatever the exam's raw
/// scale was.
pub(crate) fn format_average(average: f64) -> String {
    format!("{}/20", average)
}

#[derive(Properties, PartialEq)]
pub struct GradesViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(GradesView)]
pub fn grades_view(props: &GradesViewProps) -> Html {
    let period = use_state(|| Option::<String>::None);
    let subject = use_state(String::new);

    let student_id = props.student.as_ref().map(|student| student.id);

    // Periods feed the filter dropdown and change rarely; they are keyed by
    // the student only.
    let periods = {
        let api_client = props.api_client.clone();
        use_remote(student_id, move |student_id: i64| {
            let api_client = api_client.clone();
            async move { api_client.academic_periods(student_id).await }
        })
    };

    let subject_filter = {
        let trimmed = subject.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    };

    let grades = {
        let api_client = props.api_client.clone();
        let deps = student_id.map(|id| (id, (*period).clone(), subject_filter));
        use_remote(
            deps,
            move |(student_id, period, subject): (i64, Option<String>, Option<String>)| {
                let api_client = api_client.clone();
                async move {
                    api_client
                        .student_grades(student_id, &GradeFilters { period, subject })
                        .await
                }
            },
        )
    };

    let on_period_change = {
        let period = period.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            period.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };

    let filter_bar = html! {
        <div class="filter-bar">
            <select onchange={on_period_change}>
                <option value="" selected={period.is_none()}>{"All periods"}</option>
                {if let Some(data) = periods.state.data() {
                    data.periods.iter().map(|year| html! {
                        <optgroup label={year.name.clone()}>
                            <option value={year.id.clone()}
                                    selected={period.as_deref() == Some(year.id.as_str())}>
                                {format!("Whole {}", year.name)}
                            </option>
                            {for year.terms.iter().map(|term| html! {
                                <option value={term.id.clone()}
                                        selected={period.as_deref() == Some(term.id.as_str())}>
                                    {term.name.clone()}
                                </option>
                            })}
                        </optgroup>
                    }).collect::<Html>()
                } else { html! {} }}
            </select>
            <input
                type="text"
                placeholder="Filter by subject"
                value={(*subject).clone()}
                onchange={on_subject_change}
            />
        </div>
    };

    let body = match &grades.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading grades..."),
        Remote::Failed(message) => feedback::error_banner(message, &grades.refresh),
        Remote::Ready(data) => render_grades(data),
    };

    html! {
        <section class="grades-view">
            <h2>{"Grades"}</h2>
            {if student_id.is_some() { filter_bar } else { html! {} }}
            {body}
        </section>
    }
}

fn render_grades(data: &GradesData) -> Html {
    if data.grades.is_empty() {
        return feedback::empty_state("No grades recorded for this selection.");
    }

    html! {
        <>
            {if let Some(average) = data.statistics.average_grade {
                html! {
                    <div class="stats-strip">
                        <span class="stat">
                            <strong>{"Average: "}</strong>{format_average(average)}
                        </span>
                        {if let Some(highest) = data.statistics.highest_grade {
                            html! { <span class="stat">{format!("Best: {}", format_average(highest))}</span> }
                        } else { html! {} }}
                        {if let Some(lowest) = data.statistics.lowest_grade {
                            html! { <span class="stat">{format!("Lowest: {}", format_average(lowest))}</span> }
                        } else { html! {} }}
                    </div>
                }
            } else { html! {} }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Subject"}</th>
                        <th>{"Assessment"}</th>
                        <th>{"Grade"}</th>
                        <th>{"Teacher"}</th>
                        <th>{"Period"}</th>
                        <th>{"Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for data.grades.iter().map(|grade| html! {
                        <tr>
                            <td>{&grade.subject}</td>
                            <td>{&grade.exam}</td>
                            <td class="grade-cell">
                                {format!("{}/{}", grade.grade, grade.max_grade)}
                            </td>
                            <td>{&grade.teacher}</td>
                            <td>{&grade.period}</td>
                            <td>{grade.date.clone().unwrap_or_default()}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn average_is_rendered_out_of_twenty() {
        assert_eq!(format_average(14.2), "14.2/20");
        assert_eq!(format_average(15.0), "15/20");
    }
}
