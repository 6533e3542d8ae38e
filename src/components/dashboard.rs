use chrono::{Datelike, Local};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::report_form::ReportFormView;
use crate::components::result_table::ResultTable;
use crate::components::status::{Status, pick_notice};
use crate::hooks::use_export::use_export;
use crate::hooks::use_invoices::use_invoices;
use crate::hooks::use_team_preference::use_team_preference;
use crate::hooks::use_teams::{TeamsState, use_teams};
use crate::models::error::ValidationError;
use crate::models::query::{ReportForm, ReportQuery};
use crate::models::session::Credentials;
use crate::models::team::preselect;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub credentials: Credentials,
    pub on_logout: Callback<()>,
}

/// Authenticated screen: team and period form, actions, results.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let teams = use_teams(Some(props.credentials.clone()));
    let preference = use_team_preference();
    let invoices = use_invoices();
    let export = use_export();
    let form = use_state(ReportForm::default);
    let validation = use_state(|| None::<ValidationError>);

    let current_year = Local::now().year();

    // Pre-select the remembered team once the directory arrives
    {
        let form = form.clone();
        let preferred = preference.team_name.clone();
        use_effect_with((*teams).clone(), move |teams| {
            if let TeamsState::Loaded(list) = teams {
                if form.team_name.is_empty() {
                    if let Some(team) = preselect(list, preferred.as_deref()) {
                        form.set(ReportForm {
                            team_name: team.name.clone(),
                            ..(*form).clone()
                        });
                    }
                }
            }
            || ()
        });
    }

    let on_change = {
        let form = form.clone();
        let validation = validation.clone();
        let set_team_name = preference.set_team_name.clone();
        let dismiss_invoices = invoices.dismiss.clone();
        let dismiss_export = export.dismiss.clone();
        Callback::from(move |next: ReportForm| {
            if next.team_name != form.team_name {
                set_team_name.emit(next.team_name.clone());
            }
            // Messages about the previous inputs no longer apply
            validation.set(None);
            dismiss_invoices.emit(());
            dismiss_export.emit(());
            form.set(next);
        })
    };

    // Validates the current form; on failure records the message and yields nothing
    let submit = {
        let form = form.clone();
        let validation = validation.clone();
        let credentials = props.credentials.clone();
        Rc::new(move || -> Option<ReportQuery> {
            match form.validate(&credentials, current_year) {
                Ok(query) => {
                    validation.set(None);
                    Some(query)
                }
                Err(e) => {
                    validation.set(Some(e));
                    None
                }
            }
        })
    };

    let on_fetch = {
        let submit = submit.clone();
        let fetch = invoices.fetch.clone();
        let reset_export = export.reset.clone();
        Callback::from(move |()| {
            if let Some(query) = submit() {
                reset_export.emit(());
                fetch.emit(query);
            }
        })
    };

    let on_export = {
        let submit = submit.clone();
        let generate = export.generate.clone();
        let dismiss_invoices = invoices.dismiss.clone();
        Callback::from(move |()| {
            if let Some(query) = submit() {
                dismiss_invoices.emit(());
                generate.emit(query);
            }
        })
    };

    let on_logout = {
        let callback = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let notice = pick_notice(
        (*validation).as_ref(),
        &export.state,
        &invoices.state,
        &teams,
    );

    html! {
        <div class="invoice-fetcher">
            <div class="header">
                <img src="/img/CoMotion_Logo.jpeg" alt="CoMotion Logo" />
                <div class="header-content">
                    <h1>{"CoMotion Financial Reports"}</h1>
                    <span class="signed-in-as">{&props.credentials.email}</span>
                    <button class="logout-btn" onclick={on_logout}>{"Logout"}</button>
                </div>
            </div>

            <Status {notice} />

            <ReportFormView
                form={(*form).clone()}
                teams={teams.teams().to_vec()}
                max_year={current_year + 1}
                teams_loading={teams.is_loading()}
                fetching={invoices.state.is_loading()}
                exporting={export.state.is_generating()}
                {on_change}
                {on_fetch}
                {on_export}
            />

            <ResultTable records={invoices.state.records.clone()} />
        </div>
    }
}
