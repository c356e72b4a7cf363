use super::{http_status, Request, Response};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use std::error::Error as StdError;
use std::fmt;
use tracing::warn;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error carried by generated handlers and unmarshal functions.
///
/// Each layer adds a context string with [`GatewayError::wrap`]; the HTTP
/// status is decided where the error originates (a malformed path value is a
/// `400`, everything else defaults to `500`) and survives wrapping.
#[derive(Debug)]
pub struct GatewayError {
    status: StatusCode,
    context: String,
    source: Option<BoxError>,
}

impl GatewayError {
    /// A client error (`400 Bad Request`).
    pub fn bad_request(message: impl Into<String>) -> Self {
        GatewayError {
            status: StatusCode::BAD_REQUEST,
            context: message.into(),
            source: None,
        }
    }

    /// Wrap any error with a context message.
    ///
    /// Wrapping a `GatewayError` keeps its status and a `tonic::Status` maps
    /// its code; other errors become `500`.
    pub fn wrap<E>(err: E, context: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        let source: BoxError = err.into();
        let status = if let Some(inner) = source.downcast_ref::<GatewayError>() {
            inner.status
        } else if let Some(rpc) = source.downcast_ref::<tonic::Status>() {
            http_status(rpc.code())
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        GatewayError {
            status,
            context: context.into(),
            source: Some(source),
        }
    }

    /// Override the HTTP status reported for this error.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.context, source),
            None => write!(f, "{}", self.context),
        }
    }
}

impl StdError for GatewayError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Error responder used by generated handlers.
///
/// Builds a JSON error response `{"error": "..."}` with the error's status.
pub fn set_error(req: &Request, err: GatewayError) -> Response {
    let status = err.status();
    warn!(
        method = %req.method(),
        path = %req.uri().path(),
        status = status.as_u16(),
        error = %err,
        "gateway request failed"
    );
    let body = serde_json::json!({ "error": err.to_string() });
    let mut resp = Response::new(body.to_string().into_bytes());
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    resp
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_wrap_keeps_bad_request_status() {
        let inner = GatewayError::bad_request("invalid int64 value \"x\"");
        let outer = GatewayError::wrap(inner, "couldn't parse request");
        assert_eq!(outer.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            outer.to_string(),
            "couldn't parse request: invalid int64 value \"x\""
        );
        assert!(outer.source().is_some());
    }

    #[test]
    fn test_wrap_foreign_error_is_internal() {
        let io = std::io::Error::other("disk full");
        let err = GatewayError::wrap(io, "couldn't write response");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "couldn't write response: disk full");
    }

    #[test]
    fn test_wrap_rpc_status_maps_code() {
        let err = GatewayError::wrap(tonic::Status::not_found("no such greeter"), "returned from handler");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().starts_with("returned from handler: "));
    }

    #[test]
    fn test_set_error_builds_json_response() {
        let req = Request::new(Vec::new());
        let resp = set_error(&req, GatewayError::bad_request("nope"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["error"], "nope");
    }
}
