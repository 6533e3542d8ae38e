use super::error::ValidationError;
use crate::config::Config;
use serde::Serialize;

/// One validated reporting month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

/// Accepted year range, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    /// From the fixed minimum up to the year after `current_year`.
    pub fn for_current_year(current_year: i32) -> Self {
        Self {
            min: Config::MIN_REPORT_YEAR,
            max: current_year + 1,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// A month/year row exactly as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodInput {
    pub month: String,
    pub year: String,
}

impl PeriodInput {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// `position` is the 1-based row number used in the message.
    pub fn validate(&self, position: usize, window: YearWindow) -> Result<Period, ValidationError> {
        let month = self.month.trim();
        let year = self.year.trim();
        if month.is_empty() || year.is_empty() {
            return Err(ValidationError::IncompletePeriod(position));
        }

        let month = month
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(ValidationError::MonthOutOfRange)?;

        let year = year
            .parse::<i32>()
            .ok()
            .filter(|y| window.contains(*y))
            .ok_or(ValidationError::YearOutOfRange)?;

        Ok(Period { month, year })
    }
}

/// Ordered form rows; always holds at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodRows {
    rows: Vec<PeriodInput>,
}

impl Default for PeriodRows {
    fn default() -> Self {
        Self {
            rows: vec![PeriodInput::default()],
        }
    }
}

impl PeriodRows {
    /// Builds rows from existing input; an empty list becomes a single blank row.
    pub fn from_inputs(rows: Vec<PeriodInput>) -> Self {
        if rows.is_empty() {
            Self::default()
        } else {
            Self { rows }
        }
    }

    pub fn rows(&self) -> &[PeriodInput] {
        &self.rows
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn add(&mut self) {
        self.rows.push(PeriodInput::default());
    }

    /// Ignored for the last remaining row or an out-of-range index.
    pub fn remove(&mut self, index: usize) {
        if self.can_remove() && index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn set_month(&mut self, index: usize, month: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.month = month;
        }
    }

    pub fn set_year(&mut self, index: usize, year: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.year = year;
        }
    }

    /// Validates rows in order and stops at the first failure.
    pub fn validate(&self, window: YearWindow) -> Result<Vec<Period>, ValidationError> {
        validate_inputs(&self.rows, window)
    }
}

pub fn validate_inputs(
    rows: &[PeriodInput],
    window: YearWindow,
) -> Result<Vec<Period>, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::NoPeriods);
    }

    rows.iter()
        .enumerate()
        .map(|(i, row)| row.validate(i + 1, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: YearWindow = YearWindow {
        min: 2020,
        max: 2027,
    };

    #[test]
    fn test_window_for_current_year() {
        let window = YearWindow::for_current_year(2026);
        assert_eq!(window.min, 2020);
        assert_eq!(window.max, 2027);
        assert!(window.contains(2020));
        assert!(window.contains(2027));
        assert!(!window.contains(2019));
        assert!(!window.contains(2028));
    }

    #[test]
    fn test_blank_fields_report_row_number() {
        let rows = PeriodRows::from_inputs(vec![
            PeriodInput::new("3", "2024"),
            PeriodInput::new("", "2024"),
        ]);
        assert_eq!(
            rows.validate(WINDOW),
            Err(ValidationError::IncompletePeriod(2))
        );

        let row = PeriodInput::new("4", "  ");
        assert_eq!(
            row.validate(1, WINDOW),
            Err(ValidationError::IncompletePeriod(1))
        );
    }

    #[test]
    fn test_month_bounds() {
        for month in ["0", "13", "-1", "abc", "1.5"] {
            assert_eq!(
                PeriodInput::new(month, "2024").validate(1, WINDOW),
                Err(ValidationError::MonthOutOfRange),
                "month {month}"
            );
        }
        for month in 1..=12 {
            let period = PeriodInput::new(month.to_string(), "2024")
                .validate(1, WINDOW)
                .unwrap();
            assert_eq!(period.month, month);
        }
    }

    #[test]
    fn test_year_bounds() {
        for year in ["2019", "2028", "20x4"] {
            assert_eq!(
                PeriodInput::new("5", year).validate(1, WINDOW),
                Err(ValidationError::YearOutOfRange),
                "year {year}"
            );
        }
        assert_eq!(
            PeriodInput::new(" 5 ", " 2027 ").validate(1, WINDOW),
            Ok(Period {
                month: 5,
                year: 2027
            })
        );
    }

    #[test]
    fn test_month_checked_before_year() {
        assert_eq!(
            PeriodInput::new("13", "1999").validate(1, WINDOW),
            Err(ValidationError::MonthOutOfRange)
        );
    }

    #[test]
    fn test_rows_keep_at_least_one() {
        let mut rows = PeriodRows::default();
        assert_eq!(rows.rows().len(), 1);
        assert!(!rows.can_remove());

        rows.remove(0);
        assert_eq!(rows.rows().len(), 1);

        rows.add();
        rows.add();
        assert_eq!(rows.rows().len(), 3);

        rows.remove(7);
        assert_eq!(rows.rows().len(), 3);

        rows.remove(0);
        rows.remove(0);
        rows.remove(0);
        assert_eq!(rows.rows().len(), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut rows = PeriodRows::from_inputs(vec![
            PeriodInput::new("1", "2024"),
            PeriodInput::new("2", "2024"),
            PeriodInput::new("3", "2024"),
        ]);
        rows.remove(1);
        let months: Vec<&str> = rows.rows().iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["1", "3"]);
    }

    #[test]
    fn test_edits_target_single_row() {
        let mut rows = PeriodRows::default();
        rows.add();
        rows.set_month(1, "11".to_string());
        rows.set_year(1, "2025".to_string());
        rows.set_month(9, "12".to_string());

        assert_eq!(rows.rows()[0], PeriodInput::default());
        assert_eq!(rows.rows()[1], PeriodInput::new("11", "2025"));
    }

    #[test]
    fn test_empty_input_list() {
        assert_eq!(
            validate_inputs(&[], WINDOW),
            Err(ValidationError::NoPeriods)
        );
        assert_eq!(PeriodRows::from_inputs(Vec::new()).rows().len(), 1);
    }
}
