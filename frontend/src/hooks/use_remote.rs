use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiError;
use crate::services::logging::Logger;

/// Lifecycle of one remote fetch bound to a view.
///
/// `Idle` means the required input (usually the selected child) is missing.
/// A failure always replaces the previous data; stale rows are never shown
/// next to an error banner.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Remote::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic ticket counter per controller. A response only applies if its
/// ticket is still the newest one issued, so a slow fetch that resolves after
/// a newer one was started is discarded instead of overwriting fresher state.
#[derive(Debug, Default)]
struct FetchSequence(u64);

impl FetchSequence {
    fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

pub struct UseRemoteResult<T> {
    pub state: Remote<T>,
    /// Re-issues the current fetch, e.g. after sending a message or from the
    /// retry affordance on an error banner.
    pub refresh: Callback<()>,
}

/// One data controller for every view in the portal: re-runs `fetch` whenever
/// `deps` changes, drops to `Idle` when `deps` is `None`, and keeps exactly
/// one response live via the ticket counter.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: Option<D>, fetch: F) -> UseRemoteResult<T>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Remote::<T>::Idle);
    let sequence = use_mut_ref(FetchSequence::default);
    let tick = use_state(|| 0u32);

    {
        let state = state.clone();
        let sequence = sequence.clone();
        use_effect_with((deps, *tick), move |(deps, _)| {
            // Every dependency change supersedes whatever fetch is in flight.
            let ticket = sequence.borrow_mut().issue();

            match deps {
                None => state.set(Remote::Idle),
                Some(deps) => {
                    state.set(Remote::Loading);
                    let future = fetch(deps.clone());
                    spawn_local(async move {
                        let outcome = future.await;
                        if !sequence.borrow().is_current(ticket) {
                            return;
                        }
                        match outcome {
                            Ok(data) => state.set(Remote::Ready(data)),
                            Err(err) => {
                                Logger::warn("remote", &format!("fetch failed: {}", err));
                                state.set(Remote::Failed(err.to_string()));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let refresh = {
        let tick = tick.clone();
        Callback::from(move |_| tick.set(tick.wrapping_add(1)))
    };

    UseRemoteResult {
        state: (*state).clone(),
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn remote_accessors_follow_the_lifecycle() {
        let idle = Remote::<u32>::Idle;
        assert!(idle.is_idle());
        assert_eq!(idle.data(), None);
        assert_eq!(idle.error(), None);

        let loading = Remote::<u32>::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);

        let ready = Remote::Ready(7u32);
        assert_eq!(ready.data(), Some(&7));
        assert_eq!(ready.error(), None);

        let failed = Remote::<u32>::Failed("Invalid credentials".to_string());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some("Invalid credentials"));
    }

    #[wasm_bindgen_test]
    fn superseded_tickets_are_not_current() {
        let mut sequence = FetchSequence::default();

        let first = sequence.issue();
        assert!(sequence.is_current(first));

        // A second fetch is issued before the first resolves: the first
        // response must be discarded, whichever order they complete in.
        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
