use super::error::ValidationError;
use super::period::{Period, PeriodRows, YearWindow};
use super::session::Credentials;
use serde::Serialize;

/// Request body shared by `/get_invoices` and `/generate_excel`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportQuery {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub team_name: String,
    #[serde(rename = "months")]
    pub periods: Vec<Period>,
}

/// Unvalidated report form contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub team_name: String,
    pub periods: PeriodRows,
}

impl ReportForm {
    /// Team first, then each period in row order. The first failure wins.
    pub fn validate(
        &self,
        credentials: &Credentials,
        current_year: i32,
    ) -> Result<ReportQuery, ValidationError> {
        if self.team_name.trim().is_empty() {
            return Err(ValidationError::NoTeam);
        }

        let periods = self
            .periods
            .validate(YearWindow::for_current_year(current_year))?;

        Ok(ReportQuery {
            credentials: credentials.clone(),
            team_name: self.team_name.clone(),
            periods,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::PeriodInput;

    fn credentials() -> Credentials {
        Credentials::parse("member@comotion.org", "pw").unwrap()
    }

    #[test]
    fn test_team_required_before_periods() {
        let form = ReportForm {
            team_name: String::new(),
            periods: PeriodRows::from_inputs(vec![PeriodInput::new("13", "")]),
        };
        assert_eq!(
            form.validate(&credentials(), 2026),
            Err(ValidationError::NoTeam)
        );
    }

    #[test]
    fn test_query_body_shape() {
        let form = ReportForm {
            team_name: "Acme".to_string(),
            periods: PeriodRows::from_inputs(vec![
                PeriodInput::new("1", "2025"),
                PeriodInput::new("12", "2024"),
            ]),
        };

        let query = form.validate(&credentials(), 2026).unwrap();
        let body = serde_json::to_value(&query).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "email": "member@comotion.org",
                "password": "pw",
                "team_name": "Acme",
                "months": [
                    {"month": 1, "year": 2025},
                    {"month": 12, "year": 2024}
                ]
            })
        );
    }
}
