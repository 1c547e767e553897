//! HTTP client wrapper for the admin REST API.
//!
//! Every request picks up the session token as a bearer header when one is
//! stored. A 401 evicts the token before the error propagates; all other
//! failures are normalized into [`ApiError`] with the server's structured
//! payload preferred over generic text. No retries; every failure surfaces
//! to the caller.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    ApiError, AuthUser, BillSlot, ListQuery, MeResponse, SignInResponse, UploadResponse,
    UserListResponse,
};

use crate::session;

mod endpoints {
    pub const USERS: &str = "/api/v1/admin/users";
    pub const ME: &str = "/api/v1/admin/me";
    pub const SIGN_IN: &str = "/api/v1/admin/sign-in";
}

/// Backend base URL: compile-time override, else the window origin.
fn base_url() -> String {
    if let Some(url) = option_env!("API_BASE_URL") {
        return url.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Attach the bearer token when a session token exists.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Normalize the transport/send result into an `ApiError` on failure.
///
/// A 401 clears the stored token as a side effect before rejecting.
async fn check(result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
    let response = result.map_err(|err| ApiError::network(err.to_string()))?;

    if response.status() == 401 {
        session::clear_token();
        tracing::warn!("401 from API; cleared stored access token");
    }

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::network(err.to_string()))
}

/// Fetch one page of applicant records.
///
/// The backend is one-based: `ListQuery::request_params` maps the UI's
/// zero-based page accordingly.
pub async fn list_users(query: &ListQuery) -> Result<UserListResponse, ApiError> {
    let (page, limit, search) = query.request_params();
    let url = format!(
        "{}{}?page={}&limit={}&search={}",
        base_url(),
        endpoints::USERS,
        page,
        limit,
        urlencoding::encode(&search),
    );

    let response = check(authorize(Request::get(&url)).send().await).await?;
    decode(response).await
}

/// Upload a bill PDF for one applicant and slot.
///
/// Sent as multipart form data: the file under the `pdf` field, the slot
/// wire name under `slot`. The browser supplies the multipart boundary.
pub async fn upload_user_bill(
    user_id: &str,
    slot: BillSlot,
    file_name: &str,
    bytes: &[u8],
) -> Result<UploadResponse, ApiError> {
    let form = pdf_form_data(slot, file_name, bytes)?;
    let url = format!("{}{}/{}/bills", base_url(), endpoints::USERS, user_id);

    let request = authorize(Request::post(&url))
        .body(form)
        .map_err(|err| ApiError::network(err.to_string()))?;
    let response = check(request.send().await).await?;
    decode(response).await
}

/// Fetch the authenticated operator.
pub async fn fetch_me() -> Result<AuthUser, ApiError> {
    let url = format!("{}{}", base_url(), endpoints::ME);
    let response = check(authorize(Request::get(&url)).send().await).await?;
    let me: MeResponse = decode(response).await?;
    Ok(me.user)
}

/// Exchange credentials for an access token. The caller stores the token.
pub async fn sign_in(email: String, password: String) -> Result<SignInResponse, ApiError> {
    let url = format!("{}{}", base_url(), endpoints::SIGN_IN);
    let body = serde_json::json!({ "email": email, "password": password });

    let request = Request::post(&url)
        .json(&body)
        .map_err(|err| ApiError::network(err.to_string()))?;
    let response = check(request.send().await).await?;
    decode(response).await
}

fn pdf_form_data(
    slot: BillSlot,
    file_name: &str,
    bytes: &[u8],
) -> Result<web_sys::FormData, ApiError> {
    let payload_err = || ApiError::network("failed to build upload payload");

    let array = js_sys::Uint8Array::from(bytes);
    let parts: wasm_bindgen::JsValue = js_sys::Array::of1(&array).into();

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(shared_types::PDF_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| payload_err())?;

    let form = web_sys::FormData::new().map_err(|_| payload_err())?;
    form.append_with_blob_and_filename("pdf", &blob, file_name)
        .map_err(|_| payload_err())?;
    form.append_with_str("slot", slot.as_str())
        .map_err(|_| payload_err())?;

    Ok(form)
}
