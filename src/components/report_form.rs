use yew::prelude::*;

use crate::components::period_row::PeriodRow;
use crate::components::team_selector::TeamSelector;
use crate::models::query::ReportForm;
use crate::models::team::Team;

#[derive(Properties, PartialEq)]
pub struct ReportFormProps {
    pub form: ReportForm,
    pub teams: Vec<Team>,
    pub max_year: i32,
    pub teams_loading: bool,
    pub fetching: bool,
    pub exporting: bool,
    pub on_change: Callback<ReportForm>,
    pub on_fetch: Callback<()>,
    pub on_export: Callback<()>,
}

/// Team selection, period rows and the two query actions.
#[function_component(ReportFormView)]
pub fn report_form_view(props: &ReportFormProps) -> Html {
    let busy = props.fetching || props.exporting;

    // Every edit goes back up as a whole new form value
    let edit = |apply: fn(&mut ReportForm, usize, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |(index, value): (usize, String)| {
            let mut next = form.clone();
            apply(&mut next, index, value);
            on_change.emit(next);
        })
    };

    let on_team = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |team_name: String| {
            on_change.emit(ReportForm {
                team_name,
                ..form.clone()
            });
        })
    };

    let on_month = edit(|form, index, value| form.periods.set_month(index, value));
    let on_year = edit(|form, index, value| form.periods.set_year(index, value));

    let on_remove = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |index: usize| {
            let mut next = form.clone();
            next.periods.remove(index);
            on_change.emit(next);
        })
    };

    let on_add = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = form.clone();
            next.periods.add();
            on_change.emit(next);
        })
    };

    let on_fetch = {
        let callback = props.on_fetch.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let on_export = {
        let callback = props.on_export.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let removable = props.form.periods.can_remove();

    html! {
        <div class="form-container">
            <TeamSelector
                teams={props.teams.clone()}
                selected={props.form.team_name.clone()}
                disabled={busy || props.teams_loading}
                on_change={on_team}
            />

            <div class="form-group">
                <label>{"Select Reporting Periods:"}</label>
                {
                    props.form.periods.rows().iter().enumerate().map(|(index, period)| html! {
                        <PeriodRow
                            key={index.to_string()}
                            {index}
                            period={period.clone()}
                            max_year={props.max_year}
                            {removable}
                            disabled={busy}
                            on_month={on_month.clone()}
                            on_year={on_year.clone()}
                            on_remove={on_remove.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>

            <div class="button-group">
                <button class="btn-secondary" onclick={on_add} disabled={busy}>
                    {"Add Month"}
                </button>
                <button class="btn-primary" onclick={on_fetch} disabled={busy}>
                    { if props.fetching { "Loading..." } else { "Fetch Invoices" } }
                </button>
                <button class="btn-success" onclick={on_export} disabled={busy}>
                    { if props.exporting { "Generating..." } else { "Generate Excel File" } }
                </button>
            </div>
        </div>
    }
}
