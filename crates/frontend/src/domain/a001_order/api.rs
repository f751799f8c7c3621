use contracts::domain::a001_order::{parse_order_list, Order};
use contracts::shared::ActionResponse;
use web_sys::{File, FormData};

use crate::shared::api_utils::{credentialed_get, credentialed_post, ensure_session};
use crate::shared::config::Endpoints;
use crate::shared::error::ApiError;

/// Fetch all orders (admin session required)
pub async fn fetch_orders(endpoints: &Endpoints) -> Result<Vec<Order>, ApiError> {
    let response = credentialed_get(&endpoints.orders)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    ensure_session(&response)?;

    let body = response.text().await?;
    parse_order_list(&body).map_err(|e| ApiError::Parse(format!("{:#}", e)))
}

/// Mark the order at `position` as completed
pub async fn complete_order(endpoints: &Endpoints, position: usize) -> Result<ActionResponse, ApiError> {
    post_action(&endpoints.complete_url(position)).await
}

/// Delete the order at `position` together with its files
pub async fn delete_order(endpoints: &Endpoints, position: usize) -> Result<ActionResponse, ApiError> {
    post_action(&endpoints.delete_url(position)).await
}

async fn post_action(path: &str) -> Result<ActionResponse, ApiError> {
    let response = credentialed_post(path)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    ensure_session(&response)?;

    Ok(response.json::<ActionResponse>().await?)
}

/// Submit a new order as `multipart/form-data`
///
/// The upload endpoint is public, so a non-JSON answer is a parse failure
/// rather than a lost session.
pub async fn upload_order(
    endpoints: &Endpoints,
    name: &str,
    phone: &str,
    files: &[File],
) -> Result<ActionResponse, ApiError> {
    let form = FormData::new()?;
    form.append_with_str("name", name)?;
    form.append_with_str("phone", phone)?;
    for file in files {
        form.append_with_blob_and_filename("files[]", file, &file.name())?;
    }

    let response = credentialed_post(&endpoints.upload).body(form)?.send().await?;

    log::debug!("Upload answered {}", response.status());
    Ok(response.json::<ActionResponse>().await?)
}
