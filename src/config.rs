/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL; set `COMOTION_API_BASE_URL` at build time to override
    pub const API_BASE_URL: &'static str = match option_env!("COMOTION_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:5000",
    };

    /// Earliest year accepted in a reporting period
    pub const MIN_REPORT_YEAR: i32 = 2020;

    /// localStorage key for the last selected team
    pub const TEAM_PREFERENCE_KEY: &'static str = "team_name";

    pub const XLSX_MIME_TYPE: &'static str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    pub const CURRENCY_SYMBOL: &'static str = "$";
}
