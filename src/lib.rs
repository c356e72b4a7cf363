//! # gatewaygen
//!
//! **gatewaygen** turns a service descriptor (services, their RPC methods, and
//! the HTTP bindings attached to each method) into Rust source for a
//! self-registering gRPC + JSON/HTTP gateway: route registration, request
//! decoding, response encoding, and an embedded API documentation blob.
//!
//! ## Architecture
//!
//! - **[`descriptor`]** - the input model and its YAML/JSON loader
//! - **[`naming`]** - stable symbol names for generated items
//! - **[`imports`]** - standard vs external import grouping
//! - **[`binding`]** - path template and body selector compilation
//! - **[`render`]** - the four-pass render pipeline and [`render::render`]
//! - **[`validate`]** - descriptor linting before generation
//! - **[`runtime`]** - what generated code compiles against
//! - **[`config`]**, **[`logging`]**, **[`cli`]** - the `gatewaygen` binary
//!
//! ### Code Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(gatewaygen)
//!     participant Load as descriptor::load_file_unit
//!     participant Lint as validate::lint_file_unit
//!     participant Render as render::render
//!     participant FS as File System
//!
//!     User->>CLI: gatewaygen generate --descriptor greeter.yaml
//!     CLI->>Load: load + normalize
//!     Load-->>CLI: FileUnit
//!     CLI->>Lint: check identifiers and bindings
//!     Lint-->>CLI: Vec<LintIssue>
//!     CLI->>Render: header, registration, footer, patterns
//!     Render-->>CLI: String
//!     CLI->>FS: write + rustfmt
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use gatewaygen::descriptor::parse_file_unit;
//!
//! let unit = parse_file_unit(r#"
//! name: greeter/v1/greeter.proto
//! package: greeter.v1
//! services:
//!   - name: Greeter
//!     methods:
//!       - name: Hello
//!         request_type: HelloRequest
//!         response_type: HelloReply
//!         bindings:
//!           - { verb: GET, path_template: "/v1/hello/{name}" }
//!           - { verb: POST, path_template: "/v1/hello", body: "*" }
//! "#).unwrap();
//!
//! let source = gatewaygen::render(&unit).unwrap();
//! assert!(source.contains("pub struct GreeterDesc<S>"));
//! assert!(source.contains("pub const pattern_gateway_Greeter_Hello_1: &str = \"/v1/hello\";"));
//! ```
//!
//! ## Using the generated file
//!
//! The output expects the tonic-generated `greeter_server` module and the
//! message types in scope (add them through descriptor `imports`), then:
//!
//! ```rust,ignore
//! let desc = GreeterDesc::new(MyGreeter::default());
//! desc.register_http(&mut my_router);       // any runtime::Router
//! desc.register_grpc(&mut routes_builder);  // tonic::service::RoutesBuilder
//! ```

pub mod binding;
pub mod cli;
pub mod config;
pub mod descriptor;
mod error;
pub mod imports;
pub mod logging;
pub mod naming;
pub mod render;
pub mod runtime;
pub mod validate;

pub use error::{GenerateError, Pass, PassError};
pub use render::render;
