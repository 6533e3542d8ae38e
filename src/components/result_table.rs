use crate::models::invoice::{InvoiceRecord, format_amount, summarize};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultTableProps {
    pub records: Rc<Vec<InvoiceRecord>>,
}

#[function_component(ResultTable)]
pub fn result_table(props: &ResultTableProps) -> Html {
    if props.records.is_empty() {
        return html! {};
    }

    let summary = summarize(&props.records);

    html! {
        <div class="table-container">
            <h3>{format!("Invoice Results ({} found)", summary.count)}</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Invoice ID"}</th>
                        <th>{"Team Name"}</th>
                        <th>{"Invoice From Date"}</th>
                        <th>{"Invoice To Date"}</th>
                        <th>{"Gross Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.records.iter().enumerate().map(|(row, invoice)| html! {
                            <tr key={format!("{row}-{}", invoice.id_display())}>
                                <td>{invoice.id_display()}</td>
                                <td>{&invoice.team_name}</td>
                                <td>{invoice.from_date_display()}</td>
                                <td>{invoice.to_date_display()}</td>
                                <td class="amount">{invoice.gross_amount_display()}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="4">{"Total"}</td>
                        <td class="amount">{format_amount(summary.total_gross)}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
