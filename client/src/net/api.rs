//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Error strings are
//! ready to show: the server's `{ "error": ... }` message when there is one,
//! otherwise a generic French fallback. Transport details go to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use inventory::{CreateTentRequest, Group, Movement, Tent};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Message shown when a request fails without a usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue s'est produite.";

const TENTS_ENDPOINT: &str = "/api/tents";

/// Extract the human-readable message of a failed response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<inventory::ApiError>(body)
        .ok()
        .map(|e| e.error.trim().to_owned())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(name: &str, email: &str, movement: Movement) -> serde_json::Value {
    serde_json::json!({ "name": name, "email": email, "movement": movement })
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error) -> String {
    log::warn!("request failed: {err}");
    GENERIC_ERROR_MESSAGE.to_owned()
}

/// Decode a JSON body, or turn a non-OK response into its error message.
#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        log::debug!("{} {} -> {}", resp.url(), resp.status(), body);
        return Err(error_message_from_body(&body));
    }
    resp.json::<T>().await.map_err(|e| transport_error(&e))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, payload: &impl serde::Serialize) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| transport_error(&e))?
        .send()
        .await
        .map_err(|e| transport_error(&e))?;
    read_json(resp).await
}

/// Fetch the signed-in group from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_group() -> Option<Group> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Group>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch every tent of the signed-in group (`GET /api/tents`).
///
/// # Errors
///
/// Returns a displayable message if the request fails.
pub async fn fetch_tents() -> Result<Vec<Tent>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TENTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = TENTS_ENDPOINT;
        Err("not available on server".to_owned())
    }
}

/// Create a tent (`POST /api/tents`).
///
/// # Errors
///
/// Returns the server's message (duplicate identifier, validation) or the
/// generic fallback.
pub async fn create_tent(request: &CreateTentRequest) -> Result<Tent, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(TENTS_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct CodeSentResponse {
    code: Option<String>,
}

/// Register a group via `POST /api/auth/register`; the server then emails
/// its first access code.
///
/// Returns the code itself when the server is configured to echo codes.
///
/// # Errors
///
/// Returns a displayable message if registration fails.
pub async fn register_group(name: &str, email: &str, movement: Movement) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body: CodeSentResponse = post_json("/api/auth/register", &register_payload(name, email, movement)).await?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, movement);
        Err("not available on server".to_owned())
    }
}

/// Request a 6-character access code via `POST /api/auth/email/request-code`.
///
/// Returns the code itself when the server is configured to echo codes.
///
/// # Errors
///
/// Returns a displayable message if the request fails.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let body: CodeSentResponse = post_json("/api/auth/email/request-code", &payload).await?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Verify an access code via `POST /api/auth/email/verify-code`. On success
/// the server sets the session cookie.
///
/// # Errors
///
/// Returns a displayable message if the code is rejected or the request fails.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let _: serde_json::Value = post_json("/api/auth/email/verify-code", &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}
