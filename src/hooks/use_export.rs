use chrono::Utc;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::query::ReportQuery;
use crate::services::api::generate_excel;
use crate::services::download::{export_file_name, trigger_download};
use crate::utils::sequence::RequestSequence;
use wasm_bindgen_futures::spawn_local;

pub const EXCEL_FAILED: &str = "Failed to generate Excel file";
pub const EXCEL_UNREACHABLE: &str = "Failed to generate Excel file. Please try again.";

#[derive(Clone, PartialEq, Debug)]
pub enum ExportState {
    Idle,
    Generating,
    Error(String),
}

impl ExportState {
    pub fn is_generating(&self) -> bool {
        matches!(self, ExportState::Generating)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExportState::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Drops a shown error. A running export is left alone.
    pub fn dismissed(&self) -> ExportState {
        match self {
            ExportState::Error(_) => ExportState::Idle,
            other => other.clone(),
        }
    }
}

/// A decoded backend `error` field, or a generic message when there was none
/// or no response arrived at all.
pub fn export_error_message(error: &AppError) -> String {
    if error.is_unreachable() {
        EXCEL_UNREACHABLE.to_string()
    } else {
        error.user_message(EXCEL_FAILED)
    }
}

/// Handle returned by `use_export` hook
#[derive(Clone, PartialEq)]
pub struct ExportHandle {
    pub state: ExportState,
    pub generate: Callback<ReportQuery>,
    pub reset: Callback<()>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_export() -> ExportHandle {
    let state = use_state(|| ExportState::Idle);
    let sequence = use_memo((), |_| RequestSequence::new());

    {
        let sequence = (*sequence).clone();
        use_effect_with((), move |_| move || sequence.invalidate());
    }

    let generate = {
        let state = state.clone();
        let sequence = (*sequence).clone();
        Callback::from(move |query: ReportQuery| {
            let state = state.clone();
            let sequence = sequence.clone();
            let ticket = sequence.begin();
            state.set(ExportState::Generating);

            spawn_local(async move {
                let result = generate_excel(&query).await;
                if !sequence.is_current(ticket) {
                    return;
                }

                let result = result.and_then(|file| {
                    let name = export_file_name(&query.team_name, Utc::now());
                    trigger_download(&file.bytes, &name)?;
                    gloo::console::log!(&format!("Downloaded {name} ({} bytes)", file.bytes.len()));
                    Ok(())
                });

                match result {
                    Ok(()) => state.set(ExportState::Idle),
                    Err(e) => {
                        gloo::console::error!(&format!("Excel generation error: {e}"));
                        state.set(ExportState::Error(export_error_message(&e)));
                    }
                }
            });
        })
    };

    let reset = {
        let state = state.clone();
        let sequence = (*sequence).clone();
        Callback::from(move |()| {
            sequence.invalidate();
            state.set(ExportState::Idle);
        })
    };

    let dismiss = {
        let state = state.clone();
        Callback::from(move |()| {
            if state.error().is_some() {
                state.set(state.dismissed());
            }
        })
    };

    ExportHandle {
        state: (*state).clone(),
        generate,
        reset,
        dismiss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::error_for_status;

    #[test]
    fn test_decoded_backend_error() {
        let error = error_for_status(404, br#"{"error": "No invoices found for the selected periods"}"#);
        assert_eq!(
            export_error_message(&error),
            "No invoices found for the selected periods"
        );
    }

    #[test]
    fn test_undecodable_error_body() {
        let error = error_for_status(500, b"\x00\x01garbage");
        assert_eq!(export_error_message(&error), EXCEL_FAILED);
    }

    #[test]
    fn test_no_response() {
        let error = AppError::Network("connection refused".to_string());
        assert_eq!(export_error_message(&error), EXCEL_UNREACHABLE);
    }

    #[test]
    fn test_dismiss_only_clears_errors() {
        assert_eq!(
            ExportState::Error(EXCEL_FAILED.to_string()).dismissed(),
            ExportState::Idle
        );
        assert_eq!(ExportState::Generating.dismissed(), ExportState::Generating);
        assert_eq!(ExportState::Idle.dismissed(), ExportState::Idle);
    }

    #[test]
    fn test_browser_failure_uses_generic_message() {
        let error = AppError::BrowserError("Failed to append anchor".to_string());
        assert!(!error.is_unreachable());
        assert_eq!(export_error_message(&error), EXCEL_FAILED);
    }

    #[test]
    fn test_state_accessors() {
        assert!(ExportState::Generating.is_generating());
        assert!(ExportState::Idle.error().is_none());
        assert_eq!(
            ExportState::Error(EXCEL_FAILED.to_string()).error(),
            Some(EXCEL_FAILED)
        );
    }
}
