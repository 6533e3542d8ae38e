use std::rc::Rc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::invoice::InvoiceRecord;
use crate::models::query::ReportQuery;
use crate::services::api::fetch_invoices;
use crate::utils::sequence::RequestSequence;
use wasm_bindgen_futures::spawn_local;

pub const INVOICES_FETCH_FAILED: &str = "Failed to fetch invoices. Please try again.";
pub const NO_INVOICES_FOUND: &str = "No invoices found for the selected periods";

#[derive(Clone, PartialEq, Debug)]
pub enum QueryStatus {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Last successful result set plus the status of the latest request.
///
/// Only a successful response replaces `records`; loading and failures leave
/// the previously displayed rows in place.
#[derive(Clone, PartialEq, Debug)]
pub struct InvoiceState {
    pub records: Rc<Vec<InvoiceRecord>>,
    pub status: QueryStatus,
}

impl Default for InvoiceState {
    fn default() -> Self {
        Self {
            records: Rc::new(Vec::new()),
            status: QueryStatus::Idle,
        }
    }
}

pub enum InvoiceAction {
    Begin,
    Finish(Result<Vec<InvoiceRecord>, AppError>),
    /// Clears a shown error or notice without touching the rows.
    Dismiss,
}

impl Reducible for InvoiceState {
    type Action = InvoiceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let records = self.records.clone();
        let next = match action {
            InvoiceAction::Begin => InvoiceState {
                records,
                status: QueryStatus::Loading,
            },
            InvoiceAction::Finish(Ok(fetched)) => InvoiceState {
                records: Rc::new(fetched),
                status: QueryStatus::Loaded,
            },
            InvoiceAction::Finish(Err(e)) => InvoiceState {
                records,
                status: QueryStatus::Error(e.user_message(INVOICES_FETCH_FAILED)),
            },
            InvoiceAction::Dismiss if self.is_loading() => return self,
            InvoiceAction::Dismiss => InvoiceState {
                records,
                status: QueryStatus::Idle,
            },
        };
        Rc::new(next)
    }
}

impl InvoiceState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Loading)
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        self.records.as_slice()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Informational notice for a successful query that matched nothing.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            QueryStatus::Loaded if self.records.is_empty() => Some(NO_INVOICES_FOUND),
            _ => None,
        }
    }
}

/// Handle returned by `use_invoices` hook
#[derive(Clone, PartialEq)]
pub struct InvoicesHandle {
    pub state: InvoiceState,
    pub fetch: Callback<ReportQuery>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_invoices() -> InvoicesHandle {
    let state = use_reducer(InvoiceState::default);
    let sequence = use_memo((), |_| RequestSequence::new());

    // Drop late responses once the owning component is gone
    {
        let sequence = (*sequence).clone();
        use_effect_with((), move |_| move || sequence.invalidate());
    }

    let fetch = {
        let dispatcher = state.dispatcher();
        let sequence = (*sequence).clone();
        Callback::from(move |query: ReportQuery| {
            let dispatcher = dispatcher.clone();
            let sequence = sequence.clone();
            let ticket = sequence.begin();
            dispatcher.dispatch(InvoiceAction::Begin);

            spawn_local(async move {
                let result = fetch_invoices(&query).await;
                if !sequence.is_current(ticket) {
                    return;
                }
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Invoice fetch error: {e}"));
                }
                dispatcher.dispatch(InvoiceAction::Finish(result));
            });
        })
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(InvoiceAction::Dismiss))
    };

    InvoicesHandle {
        state: (*state).clone(),
        fetch,
        dismiss,
    }
}
