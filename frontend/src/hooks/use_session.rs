use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{LoginRequest, ParentProfile};

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// A persisted session exists and is being validated against the server.
    Restoring,
    Unauthenticated,
    Authenticated(ParentProfile),
}

#[derive(Clone, PartialEq)]
pub struct SessionActions {
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub phase: SessionPhase,
    pub login_error: Option<String>,
    pub logging_in: bool,
    pub actions: SessionActions,
}

/// Session lifecycle controller: restore on mount, establish on login,
/// teardown on logout. The two persisted browser entries are only ever
/// written from here (and from the global 401 handler).
#[hook]
pub fn use_session(api_client: ApiClient) -> UseSessionResult {
    let phase = use_state(|| {
        if session::persisted_session_id().is_some() && session::persisted_profile().is_some() {
            SessionPhase::Restoring
        } else {
            SessionPhase::Unauthenticated
        }
    });
    let login_error = use_state(|| Option::<String>::None);
    let logging_in = use_state(|| false);

    // Restore: the cached profile is only trusted once the dependents list
    // confirms the session cookie is still valid.
    {
        let api_client = api_client.clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            if *phase == SessionPhase::Restoring {
                let cached = session::persisted_profile().unwrap_or_default();
                spawn_local(async move {
                    match api_client.children().await {
                        Ok(data) => {
                            let mut profile = cached;
                            profile.children = data.children;
                            session::persist_profile(&profile);
                            Logger::info("session", "restored persisted session");
                            phase.set(SessionPhase::Authenticated(profile));
                        }
                        Err(err) => {
                            Logger::warn("session", &format!("session restore failed: {}", err));
                            session::clear();
                            phase.set(SessionPhase::Unauthenticated);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let api_client = api_client.clone();
        let phase = phase.clone();
        let login_error = login_error.clone();
        let logging_in = logging_in.clone();

        Callback::from(move |request: LoginRequest| {
            let api_client = api_client.clone();
            let phase = phase.clone();
            let login_error = login_error.clone();
            let logging_in = logging_in.clone();

            spawn_local(async move {
                login_error.set(None);
                logging_in.set(true);

                match api_client.login(&request).await {
                    Ok(data) => {
                        let mut profile = data.parent;
                        session::persist(&data.session_id, &profile);

                        // Merge the authoritative dependents list before
                        // entering the portal; keep the login payload's list
                        // if the follow-up fetch fails.
                        match api_client.children().await {
                            Ok(children) => {
                                profile.children = children.children;
                                session::persist_profile(&profile);
                            }
                            Err(err) => {
                                Logger::warn(
                                    "session",
                                    &format!("dependents fetch after login failed: {}", err),
                                );
                            }
                        }

                        Logger::info("session", &format!("signed in as {}", profile.name));
                        phase.set(SessionPhase::Authenticated(profile));
                    }
                    Err(err) => {
                        login_error.set(Some(err.to_string()));
                        phase.set(SessionPhase::Unauthenticated);
                    }
                }

                logging_in.set(false);
            });
        })
    };

    let logout = {
        let api_client = api_client.clone();
        let phase = phase.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let phase = phase.clone();

            spawn_local(async move {
                // Best effort only; local teardown never waits on the server.
                if let Err(err) = api_client.logout().await {
                    Logger::warn("session", &format!("server logout failed: {}", err));
                }
                session::clear();
                Logger::info("session", "signed out");
                phase.set(SessionPhase::Unauthenticated);
            });
        })
    };

    UseSessionResult {
        phase: (*phase).clone(),
        login_error: (*login_error).clone(),
        logging_in: *logging_in,
        actions: SessionActions { login, logout },
    }
}
