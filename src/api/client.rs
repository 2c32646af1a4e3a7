//! HTTP API Client
//!
//! Functions for communicating with the divergence analysis backend.

use gloo_net::http::{Request, Response};

use crate::state::global::{AnalysisProgress, DivergentStock};

/// Backend base address, compiled in. There is no runtime configuration.
const BACKEND_BASE: &str = "https://bullishmacddivergence-b4738fb587c2.herokuapp.com";

/// Backend base address without a trailing slash, ready for path composition.
pub fn backend_base() -> &'static str {
    BACKEND_BASE.trim_end_matches('/')
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct StockListResponse {
    pub stocks: Vec<DivergentStock>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ChartResponse {
    #[serde(rename = "chartUrl")]
    pub chart_url: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch the current divergence list.
pub async fn fetch_stocks() -> Result<Vec<DivergentStock>, String> {
    let response = Request::get(&format!("{}/stocks", backend_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    let result: StockListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.stocks)
}

/// Fetch analysis job progress.
pub async fn fetch_progress() -> Result<AnalysisProgress, String> {
    let response = Request::get(&format!("{}/progress", backend_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the chart for one stock. Returns the absolute chart URL, composed
/// from the backend-relative path in the response.
pub async fn fetch_stock_chart(stock_id: &str) -> Result<String, String> {
    let response = Request::get(&format!("{}/stock/{}", backend_base(), stock_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    let result: ChartResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(compose_chart_url(backend_base(), &result.chart_url))
}

/// Compose a backend-relative chart path with the base address.
pub fn compose_chart_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Turn a non-success response into a human-readable reason. The backend
/// reports failures as `{ "error": "..." }` when it can; fall back to the
/// bare HTTP status otherwise.
async fn status_error(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_chart_url() {
        assert_eq!(
            compose_chart_url("https://backend.example.com", "/charts/2330.png"),
            "https://backend.example.com/charts/2330.png"
        );
    }

    #[test]
    fn test_compose_chart_url_trims_trailing_slash() {
        assert_eq!(
            compose_chart_url("https://backend.example.com/", "/charts/2330.png"),
            "https://backend.example.com/charts/2330.png"
        );
    }

    #[test]
    fn test_backend_base_has_no_trailing_slash() {
        assert!(!backend_base().ends_with('/'));
    }

    #[test]
    fn test_stock_list_wire_format() {
        let json = r#"{
            "stocks": [
                { "stockId": "2330", "divergentDates": ["2024-01-05", "2024-02-10"] },
                { "stockId": "2317", "divergentDates": ["2024-03-01"] }
            ]
        }"#;

        let parsed: StockListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.stocks.len(), 2);
        assert_eq!(parsed.stocks[0].stock_id, "2330");
        assert_eq!(
            parsed.stocks[0].divergent_dates,
            vec!["2024-01-05", "2024-02-10"]
        );
        assert_eq!(parsed.stocks[1].stock_id, "2317");
    }

    #[test]
    fn test_chart_wire_format() {
        let parsed: ChartResponse =
            serde_json::from_str(r#"{ "chartUrl": "/charts/2330.png" }"#).unwrap();
        assert_eq!(parsed.chart_url, "/charts/2330.png");
    }

    #[test]
    fn test_api_error_wire_format() {
        let parsed: ApiError =
            serde_json::from_str(r#"{ "error": "analysis not finished" }"#).unwrap();
        assert_eq!(parsed.error, "analysis not finished");
    }
}
