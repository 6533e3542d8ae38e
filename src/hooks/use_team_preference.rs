use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;

/// Handle returned by `use_team_preference` hook
#[derive(Clone, PartialEq)]
pub struct TeamPreferenceHandle {
    pub team_name: Option<String>,
    pub set_team_name: Callback<String>,
}

/// Remembers the last selected team name in localStorage. Credentials never go here.
#[hook]
pub fn use_team_preference() -> TeamPreferenceHandle {
    let team_name = use_state(load_team_preference);

    {
        let team_name = (*team_name).clone();
        use_effect_with(team_name, move |team_name| {
            match team_name {
                Some(name) => save_team_preference(name),
                None => clear_team_preference(),
            }
            || ()
        });
    }

    let set_team_name = {
        let team_name = team_name.clone();
        Callback::from(move |name: String| {
            team_name.set(normalize_team_name(name));
        })
    };

    TeamPreferenceHandle {
        team_name: (*team_name).clone(),
        set_team_name,
    }
}

/// A blank selection means no remembered team.
fn normalize_team_name(name: String) -> Option<String> {
    if name.trim().is_empty() { None } else { Some(name) }
}

/// Load team preference from localStorage
fn load_team_preference() -> Option<String> {
    gloo_storage::LocalStorage::get(Config::TEAM_PREFERENCE_KEY).ok()
}

/// Save team preference to localStorage
fn save_team_preference(team_name: &str) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::TEAM_PREFERENCE_KEY, team_name) {
        web_sys::console::warn_1(&format!("Failed to save team preference: {e:?}").into());
    }
}

/// Remove team preference from localStorage
fn clear_team_preference() {
    gloo_storage::LocalStorage::delete(Config::TEAM_PREFERENCE_KEY);
}
