use crate::shared::api_utils::api_url;
use contracts::dashboards::sales_overview::{
    ApiErrorBody, FilterQuery, SalesMetrics, UploadSalesResponse,
};
use gloo_net::http::Request;

/// Fallback when the backend's error body carries no message.
pub const GENERIC_FILTER_ERROR: &str = "Failed to apply the filter.";

/// POST the uploaded CSV and get the metrics for the given filter.
///
/// The filter is encoded in the URL; the body is a multipart form with
/// the single `file` field.
pub async fn upload_sales(
    file: &web_sys::File,
    query: &FilterQuery,
) -> Result<SalesMetrics, String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to attach the file".to_string())?;

    let url = api_url(&format!("/api/upload-sales/{}", query.query_string()));

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let message = match response.text().await {
            Ok(text) => match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => body.error.unwrap_or_else(|| GENERIC_FILTER_ERROR.to_string()),
                Err(_) => GENERIC_FILTER_ERROR.to_string(),
            },
            Err(_) => GENERIC_FILTER_ERROR.to_string(),
        };
        return Err(message);
    }

    let text = response
        .text()
        .await
        .map_err(|_| GENERIC_FILTER_ERROR.to_string())?;
    let data: UploadSalesResponse =
        serde_json::from_str(&text).map_err(|_| GENERIC_FILTER_ERROR.to_string())?;

    Ok(data.metrics)
}
