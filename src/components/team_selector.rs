use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::team::Team;

#[derive(Properties, PartialEq)]
pub struct TeamSelectorProps {
    pub teams: Vec<Team>,
    pub selected: String,
    pub disabled: bool,
    pub on_change: Callback<String>,
}

/// Team dropdown; the empty option means no team chosen
#[function_component(TeamSelector)]
pub fn team_selector(props: &TeamSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <div class="form-group">
            <label for="team-select">{"Select Team/Company:"}</label>
            <select
                id="team-select"
                class="form-select"
                onchange={on_change}
                disabled={props.disabled}
            >
                <option value="" selected={props.selected.is_empty()}>{"Choose a team..."}</option>
                {
                    props.teams.iter().map(|team| {
                        let selected = team.name == props.selected;
                        html! {
                            <option key={team.id.to_string()} value={team.name.clone()} {selected}>
                                {&team.name}
                            </option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}
