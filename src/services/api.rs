use crate::config::Config;
use crate::models::{
    error::AppError,
    invoice::{InvoiceBatch, InvoiceRecord},
    query::ReportQuery,
    session::Credentials,
    team::{Team, TeamDirectory},
};
use serde::Deserialize;

// ENDPOINTS
const LOGIN_PATH: &str = "/login";
const TEAMS_PATH: &str = "/get_teams";
const INVOICES_PATH: &str = "/get_invoices";
const EXCEL_PATH: &str = "/generate_excel";

// API CONFIGURATION
/// Configuration for the report backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    pub fn teams_url(&self) -> String {
        self.endpoint(TEAMS_PATH)
    }

    pub fn invoices_url(&self) -> String {
        self.endpoint(INVOICES_PATH)
    }

    pub fn excel_url(&self) -> String {
        self.endpoint(EXCEL_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
/// Error envelope the backend uses for every non-2xx response.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<String>,
}

/// Extracts the backend's `error` field from a raw response body.
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}

/// Spreadsheet bytes as returned by `/generate_excel`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExcelFile {
    pub bytes: Vec<u8>,
}

// COMOTION CLIENT
/// HTTP client for the CoMotion report backend.
pub struct ComotionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ComotionClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Checks credentials against the backend. Any 2xx counts as success.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.config.login_url())
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Lists the teams visible to the given workspace account.
    pub async fn fetch_teams(&self, credentials: &Credentials) -> Result<Vec<Team>, AppError> {
        let response = self
            .http
            .get(self.config.teams_url())
            .header("username", &credentials.email)
            .header("password", &credentials.password)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let directory: TeamDirectory = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse teams: {e}")))?;

        Ok(directory.records)
    }

    /// Fetches invoice records for every period in the query.
    pub async fn fetch_invoices(&self, query: &ReportQuery) -> Result<Vec<InvoiceRecord>, AppError> {
        let response = self
            .http
            .post(self.config.invoices_url())
            .json(query)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let batch: InvoiceBatch = Self::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse invoices: {e}")))?;

        Ok(batch.data)
    }

    /// Requests the spreadsheet export. Errors arrive on the same byte channel.
    pub async fn generate_excel(&self, query: &ReportQuery) -> Result<ExcelFile, AppError> {
        let response = self
            .http
            .post(self.config.excel_url())
            .json(query)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let bytes = Self::ensure_success(response)
            .await?
            .bytes()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to read spreadsheet: {e}")))?;

        Ok(ExcelFile {
            bytes: bytes.to_vec(),
        })
    }

    /// Passes 2xx responses through and turns anything else into `AppError::Backend`.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        Err(error_for_status(status.as_u16(), &body))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_builder() {
            AppError::ConfigError(format!("Invalid request: {error}"))
        } else {
            AppError::Network(format!("{error}"))
        }
    }
}

/// Creates an error from an HTTP status code and the raw error body.
pub fn error_for_status(status: u16, body: &[u8]) -> AppError {
    AppError::Backend {
        status,
        message: decode_error_message(body),
    }
}

// CONVENIENCE FUNCTIONS
pub async fn login(credentials: &Credentials) -> Result<(), AppError> {
    ComotionClient::new()?.login(credentials).await
}

pub async fn fetch_teams(credentials: &Credentials) -> Result<Vec<Team>, AppError> {
    ComotionClient::new()?.fetch_teams(credentials).await
}

pub async fn fetch_invoices(query: &ReportQuery) -> Result<Vec<InvoiceRecord>, AppError> {
    ComotionClient::new()?.fetch_invoices(query).await
}

pub async fn generate_excel(query: &ReportQuery) -> Result<ExcelFile, AppError> {
    ComotionClient::new()?.generate_excel(query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::builder()
            .base_url("https://reports.example.org/")
            .build();

        assert_eq!(config.login_url(), "https://reports.example.org/login");
        assert_eq!(config.teams_url(), "https://reports.example.org/get_teams");
        assert_eq!(
            config.invoices_url(),
            "https://reports.example.org/get_invoices"
        );
        assert_eq!(
            config.excel_url(),
            "https://reports.example.org/generate_excel"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ComotionClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_decode_error_message() {
        assert_eq!(
            decode_error_message(br#"{"error": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(decode_error_message(br#"{"message": "nope"}"#), None);
        assert_eq!(decode_error_message(br#"{"error": ""}"#), None);
        assert_eq!(decode_error_message(b"PK\x03\x04 not json"), None);
        assert_eq!(decode_error_message(b""), None);
    }

    #[test]
    fn test_error_for_status_keeps_backend_message() {
        let error = error_for_status(404, br#"{"error": "No invoices found for the selected periods"}"#);
        assert_eq!(
            error.user_message("Failed to generate Excel file"),
            "No invoices found for the selected periods"
        );

        let error = error_for_status(502, b"<html>Bad Gateway</html>");
        assert!(matches!(
            error,
            AppError::Backend {
                status: 502,
                message: None
            }
        ));
        assert_eq!(
            error.user_message("Failed to generate Excel file"),
            "Failed to generate Excel file"
        );
    }
}
