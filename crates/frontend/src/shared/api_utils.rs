//! API utilities for frontend-backend communication
//!
//! Every request goes through [`get_json`] or [`post_multipart`], so the
//! error mapping and schema validation live in one place:
//! - non-2xx → [`ApiError::Http`] with the backend `{error|message}` text
//! - undecodable or invalid 2xx body → [`ApiError::Schema`]
//!
//! The decode half is kept free of browser types so it can be unit tested.

use crate::shared::config::config;
use crate::shared::error::ApiError;
use contracts::shared::upload::{ErrorBody, UploadReply, UploadResponse};
use contracts::shared::validation::Validate;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/sales/summary");
/// ```
pub fn api_url(path: &str) -> String {
    config().url(path)
}

/// Append a serialized query string; `None` fields never reach the URL
pub fn with_query<Q: Serialize>(url: String, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Validation(format!("Failed to encode query: {}", e)))?;
    if qs.is_empty() {
        Ok(url)
    } else {
        Ok(format!("{}?{}", url, qs))
    }
}

/// Map a non-2xx response body to an error, keeping the backend message if any
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.text().map(str::to_string));
    ApiError::Http { status, message }
}

/// Decode and validate a JSON response
pub fn decode_response<T>(status: u16, ok: bool, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if !ok {
        return Err(error_from_body(status, body));
    }
    let value: T = serde_json::from_str(body).map_err(|e| ApiError::Schema(e.to_string()))?;
    value.validate().map_err(ApiError::Schema)?;
    Ok(value)
}

/// Decode an upload reply; a 2xx `{error}` body is a rejection
pub fn decode_upload_reply(status: u16, ok: bool, body: &str) -> Result<UploadResponse, ApiError> {
    if !ok {
        return Err(error_from_body(status, body));
    }
    match serde_json::from_str::<UploadReply>(body) {
        Ok(UploadReply::Accepted(response)) => Ok(response),
        Ok(UploadReply::Refused(err)) => match err.text() {
            Some(text) => Err(ApiError::Rejected(text.to_string())),
            None => Err(ApiError::Schema("upload reply has neither recordsInserted nor error".into())),
        },
        Err(e) => Err(ApiError::Schema(e.to_string())),
    }
}

async fn read_body(response: Response) -> Result<(u16, bool, String), ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    Ok((status, ok, text))
}

/// `GET {api_base}{path}?{query}` and decode the JSON body
pub async fn get_json<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
    Q: Serialize,
{
    let url = with_query(api_url(path), query)?;
    fetch_json(path, &url).await
}

/// `GET {api_base}{path}` for endpoints that take no parameters
pub async fn get_json_plain<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    fetch_json(path, &api_url(path)).await
}

async fn fetch_json<T>(path: &str, url: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let (status, ok, body) = read_body(response).await?;
    let result = decode_response(status, ok, &body);
    if let Err(err) = &result {
        log::warn!("GET {} failed: {}", path, err);
    }
    result
}

/// `POST {api_base}{path}` with a multipart body
pub async fn post_multipart(
    path: &str,
    form: web_sys::FormData,
) -> Result<UploadResponse, ApiError> {
    let url = api_url(path);
    log::debug!("POST {} (multipart)", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let (status, ok, body) = read_body(response).await?;
    decode_upload_reply(status, ok, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d410_sales_analytics::{SalesQuery, TrendGranularity, TrendPoint};

    #[test]
    fn test_with_query_omits_unset_filters() {
        let query = SalesQuery {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 10),
            category: None,
            region: None,
            granularity: Some(TrendGranularity::Daily),
        };
        let url = with_query("http://x/api/sales/trends".into(), &query).unwrap();
        assert_eq!(
            url,
            "http://x/api/sales/trends?startDate=2024-01-01&endDate=2024-01-10&type=daily"
        );
    }

    #[test]
    fn test_with_empty_query_has_no_question_mark() {
        let url = with_query("http://x/api/sales/regions".into(), &SalesQuery::default()).unwrap();
        assert_eq!(url, "http://x/api/sales/regions");
    }

    #[test]
    fn test_decode_ok() {
        let points: Vec<TrendPoint> =
            decode_response(200, true, r#"[{"date":"2024-01-01","revenue":12.5}]"#).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_decode_http_error_uses_error_then_message() {
        let err = decode_response::<Vec<TrendPoint>>(400, false, r#"{"error":"bad range"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: Some("bad range".into())
            }
        );

        let err = decode_response::<Vec<TrendPoint>>(404, false, r#"{"message":"not found"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Request failed"), "not found");
    }

    #[test]
    fn test_decode_http_error_with_html_body() {
        let err = decode_response::<Vec<TrendPoint>>(502, false, "<html>Bad gateway</html>")
            .unwrap_err();
        assert_eq!(err.user_message("Request failed"), "Request failed");
    }

    #[test]
    fn test_malformed_payload_is_schema_error() {
        let err = decode_response::<Vec<TrendPoint>>(200, true, r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
    }

    #[test]
    fn test_invalid_values_are_schema_error() {
        let err =
            decode_response::<Vec<TrendPoint>>(200, true, r#"[{"date":"2024-01-01","revenue":-1}]"#)
                .unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
    }

    #[test]
    fn test_upload_reply_variants() {
        let ok = decode_upload_reply(200, true, r#"{"recordsInserted":120,"replaced":false}"#)
            .unwrap();
        assert_eq!(ok.records_inserted, 120);

        let rejected = decode_upload_reply(200, true, r#"{"error":"Empty file"}"#).unwrap_err();
        assert_eq!(rejected, ApiError::Rejected("Empty file".into()));

        let failed = decode_upload_reply(413, false, "").unwrap_err();
        assert_eq!(failed.user_message("Upload failed"), "Upload failed");
    }
}
