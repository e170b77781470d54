mod components;
mod hooks;
mod services;

use yew::prelude::*;

use shared::{ChildRecord, ParentProfile};

use components::attendance_view::AttendanceView;
use components::change_password_modal::ChangePasswordModal;
use components::dashboard_view::DashboardView;
use components::fees_view::FeesView;
use components::grades_view::GradesView;
use components::header::Header;
use components::login_form::LoginForm;
use components::messages_view::MessagesView;
use components::reports_view::ReportsView;
use components::student_info_view::StudentInfoView;
use components::teachers_view::TeachersView;
use components::timetable_view::TimetableView;
use hooks::use_session::{use_session, SessionPhase};
use services::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Dashboard,
    Grades,
    Attendance,
    Timetable,
    Fees,
    Messages,
    Teachers,
    Reports,
    Info,
}

impl Tab {
    const ALL: [Tab; 9] = [
        Tab::Dashboard,
        Tab::Grades,
        Tab::Attendance,
        Tab::Timetable,
        Tab::Fees,
        Tab::Messages,
        Tab::Teachers,
        Tab::Reports,
        Tab::Info,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Grades => "Grades",
            Tab::Attendance => "Attendance",
            Tab::Timetable => "Timetable",
            Tab::Fees => "Fees",
            Tab::Messages => "Messages",
            Tab::Teachers => "Teachers",
            Tab::Reports => "Reports",
            Tab::Info => "Student record",
        }
    }
}

#[derive(Properties, PartialEq)]
struct PortalProps {
    pub api_client: ApiClient,
    pub profile: ParentProfile,
    pub on_logout: Callback<()>,
}

#[function_component(Portal)]
fn portal(props: &PortalProps) -> Html {
    // Exactly one dependent is selected at a time; every detail view below is
    // keyed by it.
    let selected = use_state(|| props.profile.children.first().cloned());
    let active_tab = use_state(|| Tab::Dashboard);
    let password_modal_open = use_state(|| false);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |child: ChildRecord| selected.set(Some(child)))
    };

    let on_open_password = {
        let password_modal_open = password_modal_open.clone();
        Callback::from(move |_| password_modal_open.set(true))
    };

    let on_close_password = {
        let password_modal_open = password_modal_open.clone();
        Callback::from(move |_| password_modal_open.set(false))
    };

    let student = (*selected).clone();

    let content = match *active_tab {
        Tab::Dashboard => html! {
            <DashboardView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Grades => html! {
            <GradesView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Attendance => html! {
            <AttendanceView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Timetable => html! {
            <TimetableView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Fees => html! {
            <FeesView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Messages => html! {
            <MessagesView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Teachers => html! {
            <TeachersView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Reports => html! {
            <ReportsView api_client={props.api_client.clone()} student={student.clone()} />
        },
        Tab::Info => html! {
            <StudentInfoView api_client={props.api_client.clone()} student={student.clone()} />
        },
    };

    html! {
        <>
            <Header
                profile={props.profile.clone()}
                selected={student.clone()}
                on_select={on_select}
                on_change_password={on_open_password}
                on_logout={props.on_logout.clone()}
            />

            <nav class="tab-bar">
                <div class="container">
                    {for Tab::ALL.iter().map(|tab| {
                        let is_active = *active_tab == *tab;
                        let onclick = {
                            let active_tab = active_tab.clone();
                            let tab = *tab;
                            Callback::from(move |_: MouseEvent| active_tab.set(tab))
                        };
                        html! {
                            <button
                                class={classes!("tab", is_active.then(|| "active"))}
                                {onclick}
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
                </div>
            </nav>

            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>

            <ChangePasswordModal
                api_client={props.api_client.clone()}
                open={*password_modal_open}
                on_close={on_close_password}
            />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_state(ApiClient::new);
    let session = use_session((*api_client).clone());

    match &session.phase {
        SessionPhase::Restoring => html! {
            <div class="loading splash">{"Restoring your session..."}</div>
        },
        SessionPhase::Unauthenticated => html! {
            <LoginForm
                error={session.login_error.clone()}
                pending={session.logging_in}
                on_submit={session.actions.login.clone()}
            />
        },
        SessionPhase::Authenticated(profile) => html! {
            <Portal
                api_client={(*api_client).clone()}
                profile={profile.clone()}
                on_logout={session.actions.logout.clone()}
            />
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
