use crate::hooks::use_export::ExportState;
use crate::hooks::use_invoices::InvoiceState;
use crate::hooks::use_teams::TeamsState;
use crate::models::error::ValidationError;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Error,
    Info,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Chooses the single message shown above the form.
///
/// Local validation beats export errors, which beat query errors, which beat
/// a failed team load. The empty-result notice only shows when nothing failed.
pub fn pick_notice(
    validation: Option<&ValidationError>,
    export: &ExportState,
    invoices: &InvoiceState,
    teams: &TeamsState,
) -> Option<Notice> {
    if let Some(e) = validation {
        return Some(Notice::error(e.to_string()));
    }

    export
        .error()
        .or_else(|| invoices.error())
        .or_else(|| teams.error())
        .map(Notice::error)
        .or_else(|| invoices.notice().map(Notice::info))
}

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub notice: Option<Notice>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.notice {
        Some(Notice {
            kind: NoticeKind::Error,
            message,
        }) => html! {
            <div class="status error" role="alert">
                <p>{message}</p>
            </div>
        },
        Some(Notice {
            kind: NoticeKind::Info,
            message,
        }) => html! {
            <div class="status info">
                <p>{message}</p>
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_invoices::{InvoiceAction, NO_INVOICES_FOUND, QueryStatus};
    use crate::hooks::use_teams::TEAMS_LOAD_FAILED;
    use std::rc::Rc;

    fn invoices(status: QueryStatus) -> InvoiceState {
        InvoiceState {
            status,
            ..InvoiceState::default()
        }
    }

    #[test]
    fn test_validation_takes_precedence() {
        let notice = pick_notice(
            Some(&ValidationError::NoTeam),
            &ExportState::Error("export broke".to_string()),
            &invoices(QueryStatus::Error("query broke".to_string())),
            &TeamsState::Error(TEAMS_LOAD_FAILED.to_string()),
        );
        assert_eq!(notice, Some(Notice::error("Please select a team")));
    }

    #[test]
    fn test_action_error_order() {
        let notice = pick_notice(
            None,
            &ExportState::Idle,
            &invoices(QueryStatus::Error("query broke".to_string())),
            &TeamsState::Error(TEAMS_LOAD_FAILED.to_string()),
        );
        assert_eq!(notice, Some(Notice::error("query broke")));

        let notice = pick_notice(
            None,
            &ExportState::Idle,
            &invoices(QueryStatus::Idle),
            &TeamsState::Error(TEAMS_LOAD_FAILED.to_string()),
        );
        assert_eq!(notice, Some(Notice::error(TEAMS_LOAD_FAILED)));
    }

    #[test]
    fn test_empty_result_is_info() {
        let notice = pick_notice(
            None,
            &ExportState::Idle,
            &invoices(QueryStatus::Loaded),
            &TeamsState::Loaded(Rc::new(Vec::new())),
        );
        assert_eq!(notice, Some(Notice::info(NO_INVOICES_FOUND)));
    }

    #[test]
    fn test_dismissed_messages_leave_nothing_to_show() {
        let invoices = Rc::new(invoices(QueryStatus::Loaded))
            .reduce(InvoiceAction::Dismiss);
        let export = ExportState::Error("export broke".to_string()).dismissed();

        let notice = pick_notice(
            None,
            &export,
            &invoices,
            &TeamsState::Loaded(Rc::new(Vec::new())),
        );
        assert!(notice.is_none());
    }

    #[test]
    fn test_nothing_to_show() {
        let notice = pick_notice(
            None,
            &ExportState::Generating,
            &invoices(QueryStatus::Loading),
            &TeamsState::Loading,
        );
        assert!(notice.is_none());
    }
}
