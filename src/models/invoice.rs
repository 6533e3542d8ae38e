use crate::config::Config;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// One invoice row as returned by the backend. Read-only.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InvoiceRecord {
    #[serde(rename = "RecordID", default)]
    pub id: Option<u64>,
    #[serde(rename = "Invoice_BillToName", default, deserialize_with = "text_or_blank")]
    pub team_name: String,
    #[serde(
        rename = "Invoice_InvoiceFromDate",
        default,
        deserialize_with = "text_or_blank"
    )]
    pub from_date: String,
    #[serde(
        rename = "Invoice_InvoiceToDate",
        default,
        deserialize_with = "text_or_blank"
    )]
    pub to_date: String,
    #[serde(
        rename = "Invoice_TotalGrossAmount",
        default,
        deserialize_with = "amount_from_any"
    )]
    pub gross_amount: f64,
}

impl InvoiceRecord {
    pub fn id_display(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn from_date_display(&self) -> String {
        display_date(&self.from_date)
    }

    pub fn to_date_display(&self) -> String {
        display_date(&self.to_date)
    }

    pub fn gross_amount_display(&self) -> String {
        format_amount(self.gross_amount)
    }
}

/// Body of a successful `POST /get_invoices`.
#[derive(Debug, Default, Deserialize)]
pub struct InvoiceBatch {
    #[serde(default)]
    pub data: Vec<InvoiceRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub count: usize,
    pub total_gross: f64,
}

pub fn summarize(records: &[InvoiceRecord]) -> InvoiceSummary {
    InvoiceSummary {
        count: records.len(),
        total_gross: records.iter().map(|r| r.gross_amount).sum(),
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("{}{amount:.2}", Config::CURRENCY_SYMBOL)
}

/// Renders backend timestamps as `DD/MM/YYYY`, or verbatim when unrecognised.
pub fn display_date(raw: &str) -> String {
    const OUT: &str = "%d/%m/%Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(OUT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(OUT).to_string();
    }

    raw.to_string()
}

// Amounts arrive as numbers, numeric strings or null depending on the record.
fn amount_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(n)) => n,
        Some(RawAmount::Text(s)) => s.trim().parse().unwrap_or(0.0),
        Some(RawAmount::Other(_)) | None => 0.0,
    })
}

// Nexudus passes null for unset text fields.
fn text_or_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
