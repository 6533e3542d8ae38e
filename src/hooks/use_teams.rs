use std::rc::Rc;
use yew::prelude::*;

use crate::models::session::Credentials;
use crate::models::team::Team;
use crate::services::api::fetch_teams;
use crate::utils::sequence::RequestSequence;
use wasm_bindgen_futures::spawn_local;

pub const TEAMS_LOAD_FAILED: &str = "Failed to load teams. Please refresh the page.";

#[derive(Clone, PartialEq, Debug)]
pub enum TeamsState {
    Idle,
    Loading,
    Loaded(Rc<Vec<Team>>),
    Error(String),
}

impl TeamsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TeamsState::Loading)
    }

    /// Loaded teams, or an empty slice in any other state.
    pub fn teams(&self) -> &[Team] {
        match self {
            TeamsState::Loaded(teams) => teams.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TeamsState::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Loads the team directory once per set of credentials. No automatic retry.
#[hook]
pub fn use_teams(credentials: Option<Credentials>) -> UseStateHandle<TeamsState> {
    let state = use_state(|| TeamsState::Idle);
    let sequence = use_memo((), |_| RequestSequence::new());

    {
        let state = state.clone();
        let sequence = (*sequence).clone();

        use_effect_with(credentials, move |credentials| {
            let cleanup_sequence = sequence.clone();

            match credentials.clone() {
                Some(credentials) => {
                    let ticket = sequence.begin();
                    state.set(TeamsState::Loading);

                    spawn_local(async move {
                        let result = fetch_teams(&credentials).await;
                        if !sequence.is_current(ticket) {
                            return;
                        }
                        match result {
                            Ok(teams) => state.set(TeamsState::Loaded(Rc::new(teams))),
                            Err(e) => {
                                gloo::console::error!(&format!("Failed to fetch teams: {e}"));
                                state.set(TeamsState::Error(TEAMS_LOAD_FAILED.to_string()));
                            }
                        }
                    });
                }
                None => state.set(TeamsState::Idle),
            }

            move || cleanup_sequence.invalidate()
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_empty_unless_loaded() {
        assert!(TeamsState::Idle.teams().is_empty());
        assert!(TeamsState::Loading.teams().is_empty());
        assert!(TeamsState::Error(TEAMS_LOAD_FAILED.to_string())
            .teams()
            .is_empty());

        let loaded = TeamsState::Loaded(Rc::new(vec![Team {
            id: 3,
            name: "Acme".to_string(),
        }]));
        assert_eq!(loaded.teams().len(), 1);
        assert!(loaded.error().is_none());
    }

    #[test]
    fn test_error_accessor() {
        let state = TeamsState::Error(TEAMS_LOAD_FAILED.to_string());
        assert_eq!(state.error(), Some(TEAMS_LOAD_FAILED));
        assert!(!state.is_loading());
        assert!(TeamsState::Loading.is_loading());
    }
}
