//! # Runtime contract
//!
//! Everything a generated gateway file refers to through its `runtime::`
//! import. A router integration implements [`Router`] and attaches
//! [`RouteParams`] to each matched request; the rest (codec negotiation,
//! RPC metadata, error responses, path value coercion) is used by the
//! generated handlers and unmarshal functions directly.
//!
//! ```
//! use gatewaygen::runtime::{self, Handler, Method, Router};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Table(Vec<(Method, &'static str, Handler)>);
//!
//! impl Router for Table {
//!     fn method_func(&mut self, method: Method, pattern: &'static str, handler: Handler) {
//!         self.0.push((method, pattern, handler));
//!     }
//! }
//!
//! let mut table = Table::default();
//! let handler: Handler = Arc::new(|_req: runtime::Request| {
//!     Box::pin(async { runtime::Response::new(Vec::new()) }) as runtime::HandlerFuture
//! });
//! table.method_func(Method::GET, "/v1/ping", handler);
//! assert_eq!(table.0.len(), 1);
//! ```

pub mod coerce;
mod codec;
mod error;
mod params;
mod rpc;

pub use codec::{codec_for_request, Codec};
pub use error::{set_error, GatewayError};
pub use http::header::CONTENT_TYPE;
pub use http::{HeaderValue, Method};
pub use params::{ParamVec, RouteParams, MAX_INLINE_PARAMS};
pub use rpc::{http_status, rpc_request};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Compatibility marker referenced by every generated file.
///
/// Generated code that needs a newer runtime refers to a marker this version
/// does not define and fails to compile instead of misbehaving.
pub const IS_VERSION_1: () = ();

/// Buffered HTTP request as seen by generated handlers.
pub type Request = http::Request<Vec<u8>>;

/// Buffered HTTP response produced by generated handlers.
pub type Response = http::Response<Vec<u8>>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A registered route handler.
pub type Handler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// Route table the generated `register_http` writes into.
///
/// Patterns use `{name}` placeholders. A placeholder may also carry a segment
/// pattern, `{parent=shelves/*}` or `{path=**}`, whose match can span several
/// path segments; its value is attached under the bare name (`parent`). The
/// implementation is expected to attach a [`RouteParams`] to every request it
/// dispatches.
pub trait Router {
    fn method_func(&mut self, method: Method, pattern: &'static str, handler: Handler);
}
