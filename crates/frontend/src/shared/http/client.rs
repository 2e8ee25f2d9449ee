//! The one way this app talks to the server.
//!
//! Every call builds a `gloo_net` request, runs it through the CSRF augmenter
//! and sends it. Nothing global is patched.

use super::csrf::{self, CsrfSettings, Transport};
use crate::shared::cart::checkout::CheckoutError;
use contracts::shared::api_error::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A request that did not produce a 2xx answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    /// `None` when the request never got a response
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ApiFailure {
    fn network(e: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: Some(format!("Error de red: {}", e)),
        }
    }

    async fn from_response(response: Response) -> Self {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| ErrorResponse::reason_from_body(&body));
        Self {
            status: Some(status),
            message,
        }
    }
}

impl From<ApiFailure> for CheckoutError {
    fn from(f: ApiFailure) -> Self {
        CheckoutError::SubmissionFailed {
            status: f.status,
            message: f.message,
        }
    }
}

/// GET `url` and decode the JSON answer. `transport` is the mechanism the
/// caller stands for, which decides the CSRF scope.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    transport: Transport,
    csrf: &CsrfSettings,
) -> Result<T, ApiFailure> {
    let builder = csrf::augment(Request::get(url), csrf, transport, url);
    let response = builder.send().await.map_err(ApiFailure::network)?;

    if !response.ok() {
        return Err(ApiFailure::from_response(response).await);
    }

    response.json::<T>().await.map_err(|e| ApiFailure {
        status: Some(response.status()),
        message: Some(format!("Error de formato: {}", e)),
    })
}

/// POST `body` as JSON; any 2xx answer is a success and its body is ignored
pub async fn post_json<B: Serialize>(
    url: &str,
    body: &B,
    transport: Transport,
    csrf: &CsrfSettings,
) -> Result<(), ApiFailure> {
    let request = csrf::augment(Request::post(url), csrf, transport, url)
        .json(body)
        .map_err(|e| ApiFailure {
            status: None,
            message: Some(format!("Error al serializar: {}", e)),
        })?;

    let response = request.send().await.map_err(ApiFailure::network)?;
    if !response.ok() {
        return Err(ApiFailure::from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_maps_to_checkout_error() {
        let err: CheckoutError = ApiFailure {
            status: Some(409),
            message: Some("ERROR DE STOCK".into()),
        }
        .into();
        assert_eq!(
            err,
            CheckoutError::SubmissionFailed {
                status: Some(409),
                message: Some("ERROR DE STOCK".into())
            }
        );
    }
}
