use yew::prelude::*;

use shared::{ChildRecord, FeesData};

use super::feedback;
use crate::hooks::use_remote::{use_remote, Remote};
use crate::services::api::ApiClient;

fn state_class(state: &str) -> &'static str {
    match state {
        "paid" => "fee-state paid",
        "unpaid" => "fee-state unpaid",
        "partial" => "fee-state partial",
        _ => "fee-state",
    }
}

#[derive(Properties, PartialEq)]
pub struct FeesViewProps {
    pub api_client: ApiClient,
    pub student: Option<ChildRecord>,
}

#[function_component(FeesView)]
pub fn fees_view(props: &FeesViewProps) -> Html {
    let remote = {
        let api_client = props.api_client.clone();
        use_remote(
            props.student.as_ref().map(|student| student.id),
            move |student_id: i64| {
                let api_client = api_client.clone();
                async move { api_client.student_fees(student_id).await }
            },
        )
    };

    let body = match &remote.state {
        Remote::Idle => feedback::select_child_hint(),
        Remote::Loading => feedback::loading("Loading fees..."),
        Remote::Failed(message) => feedback::error_banner(message, &remote.refresh),
        Remote::Ready(data) => render_fees(data),
    };

    html! {
        <section class="fees-view">
            <h2>{"Fees"}</h2>
            {body}
        </section>
    }
}

fn render_fees(data: &FeesData) -> Html {
    if data.fees.is_empty() {
        return feedback::empty_state("No fee lines for this child.");
    }

    html! {
        <>
            <div class="stats-strip">
                <span class="stat">{format!("Total: {:.2}", data.summary.total)}</span>
                <span class="stat">{format!("Paid: {:.2}", data.summary.paid)}</span>
                <span class="stat">
                    <strong>{format!("Outstanding: {:.2}", data.summary.outstanding)}</strong>
                </span>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Description"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Status"}</th>
                        <th>{"Due date"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for data.fees.iter().map(|line| html! {
                        <tr>
                            <td>{&line.name}</td>
                            <td class="amount">{format!("{:.2}", line.amount)}</td>
                            <td><span class={state_class(&line.state)}>{&line.state}</span></td>
                            <td>{line.due_date.clone().unwrap_or_default()}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </>
    }
}
