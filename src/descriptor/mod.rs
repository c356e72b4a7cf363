//! # Descriptor Module
//!
//! The normalized service model the generator consumes: a [`FileUnit`] owning
//! services, their methods, and the HTTP bindings attached to each method.
//!
//! The model is tree-shaped and immutable once built. The generator trusts
//! names to be unique where the source language requires it; [`crate::validate`]
//! checks identifier syntax before a model reaches the renderer.
//!
//! ## Example descriptor
//!
//! ```yaml
//! name: greeter/v1/greeter.proto
//! package: greeter.v1
//! services:
//!   - name: Greeter
//!     methods:
//!       - name: Hello
//!         request_type: HelloRequest
//!         response_type: HelloReply
//!         bindings:
//!           - verb: GET
//!             path_template: /v1/hello/{name}
//!           - verb: POST
//!             path_template: /v1/hello
//!             body: "*"
//! ```

mod load;
mod types;

pub use load::{load_file_unit, normalize, parse_file_unit};
pub use types::*;
