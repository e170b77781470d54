use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use shared::{ChildRecord, ReportFilters, ReportRecord, ReportsData};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const REPORT_KINDS: [(&str, &str); 4] = [
    ("academic", "Academic"),
    ("behavioral", "Behavioral"),
    ("medical", "Medical"),
    ("other", "Other"),
];

pub(crate) fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        String::new()
    } else if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{} kB", bytes / 1024)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportsViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(ReportsView)]
pub fn reports_view(props: &ReportsViewProps) -> Html {
    let kind = use_state(|| Option::<String>::None);
    let download_error = use_state(|| Option::<String>::None);
    let downloading = use_state(|| Option::<String>::None);

    let student_id = props.student.as_ref().map(|student| student.id);

    let reports = {
        let api_client = props.api_client.clone();
        let deps = student_id.map(|id| (id, (*kind).clone()));
        use_remote(deps, move |(student_id, kind): (i64, Option<String>)| {
            let api_client = api_client.clone();
            async move {
                api_client
                    .student_reports(student_id, &ReportFilters { kind })
                    .await
            }
        })
    };

    let on_kind_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            kind.set(if value.is_empty() { None } else { Some(value) });
        })
    };

    // Downloads go back through the API so access is re-checked server-side;
    // the response carries the actual file URL.
    let on_download = {
        let api_client = props.api_client.clone();
        let download_error = download_error.clone();
        let downloading = downloading.clone();
        Callback::from(move |report_id: String| {
            let Some(student_id) = student_id else {
                return;
            };
            let api_client = api_client.clone();
            let download_error = download_error.clone();
            let downloading = downloading.clone();

            spawn_local(async move {
                download_error.set(None);
                downloading.set(Some(report_id.clone()));

                match api_client.report_download(student_id, &report_id).await {
                    Ok(data) => {
                        let url = api_client.absolute_url(&data.download_url);
                        if let Some(window) = web_sys::window() {
                            if window.open_with_url(&url).is_err() {
                                Logger::warn("reports", &format!("could not open {}", url));
                            }
                        }
                    }
                    Err(err) => {
                        download_error.set(Some(err.to_string()));
                    }
                }

                downloading.set(None);
            });
        })
    };

    let body = match &reports.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading reports..."),
        Remote::Failed(message) => feedback::error_banner(message, &reports.refresh),
        Remote::Ready(data) => render_reports(data, &downloading, &on_download),
    };

    html! {
        <section class="reports-view">
            <h2>{"Reports"}</h2>
            {if student_id.is_some() {
                html! {
                    <div class="filter-bar">
                        <select onchange={on_kind_change}>
                            <option value="" selected={kind.is_none()}>{"All reports"}</option>
                            {for REPORT_KINDS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={kind.as_deref() == Some(*value)}>
                                    {*label}
                                </option>
                            })}
                        </select>
                    </div>
                }
            } else { html! {} }}

            {if let Some(error) = (*download_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {body}
        </section>
    }
}

fn render_reports(
    data: &ReportsData,
    downloading: &UseStateHandle<Option<String>>,
    on_download: &Callback<String>,
) -> Html {
    if data.reports.is_empty() {
        return feedback::empty_state("No reports for this selection.");
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Type"}</th>
                    <th>{"Date"}</th>
                    <th>{"Size"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for data.reports.iter().map(|report| render_report_row(report, downloading, on_download))}
            </tbody>
        </table>
    }
}

fn render_report_row(
    report: &ReportRecord,
    downloading: &UseStateHandle<Option<String>>,
    on_download: &Callback<String>,
) -> Html {
    let is_downloading = downloading.as_deref() == Some(report.id.as_str());

    let onclick = {
        let on_download = on_download.clone();
        let report_id = report.id.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(report_id.clone()))
    };

    html! {
        <tr>
            <td>
                {&report.name}
                {if report.is_generated {
                    html! { <span class="report-badge">{"generated"}</span> }
                } else { html! {} }}
            </td>
            <td>{&report.kind}</td>
            <td>{report.create_date.clone().unwrap_or_default()}</td>
            <td>{format_file_size(report.file_size)}</td>
            <td>
                <button class="btn btn-secondary" {onclick} disabled={is_downloading}>
                    {if is_downloading { "Preparing..." } else { "Download" }}
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn file_sizes_scale_with_magnitude() {
        assert_eq!(format_file_size(0), "");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2 kB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
