use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::period::PeriodInput;

#[derive(Properties, PartialEq)]
pub struct PeriodRowProps {
    pub index: usize,
    pub period: PeriodInput,
    pub max_year: i32,
    pub removable: bool,
    pub disabled: bool,
    pub on_month: Callback<(usize, String)>,
    pub on_year: Callback<(usize, String)>,
    pub on_remove: Callback<usize>,
}

#[function_component(PeriodRow)]
pub fn period_row(props: &PeriodRowProps) -> Html {
    let index = props.index;

    let on_month = {
        let callback = props.on_month.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit((index, input.value()));
        })
    };

    let on_year = {
        let callback = props.on_year.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit((index, input.value()));
        })
    };

    let on_remove = {
        let callback = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| callback.emit(index))
    };

    html! {
        <div class="date-selection">
            <input
                type="number"
                class="month-input"
                placeholder="Month (1-12)"
                min="1"
                max="12"
                value={props.period.month.clone()}
                oninput={on_month}
                disabled={props.disabled}
            />
            <input
                type="number"
                class="year-input"
                placeholder="Year (e.g., 2023)"
                min={crate::config::Config::MIN_REPORT_YEAR.to_string()}
                max={props.max_year.to_string()}
                value={props.period.year.clone()}
                oninput={on_year}
                disabled={props.disabled}
            />
            if props.removable {
                <button
                    type="button"
                    class="remove-btn"
                    onclick={on_remove}
                    disabled={props.disabled}
                >
                    {"Remove"}
                </button>
            }
        </div>
    }
}
