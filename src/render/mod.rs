//! # Render Pipeline
//!
//! Turns one [`FileUnit`] into the text of a generated gateway file. Four
//! passes run in a fixed order and their output is concatenated:
//!
//! 1. [`header`]: banner, source and package identity, imports, forced references
//! 2. [`registration`]: one `<Service>Desc` type per service with its HTTP and gRPC registration
//! 3. [`footer`]: the embedded API documentation blob
//! 4. [`patterns`]: per-binding route pattern constants and unmarshal functions
//!
//! Each pass walks the descriptor on its own; registration and patterns agree
//! on symbol names because both derive them from [`crate::naming`].
//!
//! Rendering holds no state between calls. Identical input yields identical
//! output, and the first failing pass aborts the run without partial text.

mod footer;
mod header;
mod patterns;
mod registration;

pub use footer::{escape_blob, escape_byte_blob};

use crate::binding::{self, CompiledBinding};
use crate::descriptor::{FileUnit, MethodDescriptor, ServiceDescriptor};
use crate::error::{GenerateError, Pass, PassError};
use tracing::debug;

/// Render the generated gateway source for a file unit.
///
/// # Errors
///
/// [`GenerateError::NoTargetService`] when the unit has no services (no pass
/// runs), or [`GenerateError::Pass`] naming the first pass that failed.
pub fn render(unit: &FileUnit) -> Result<String, GenerateError> {
    if unit.services.is_empty() {
        return Err(GenerateError::NoTargetService);
    }

    let mut out = String::new();
    for pass in Pass::ALL {
        let text = run_pass(pass, unit).map_err(|source| GenerateError::Pass { pass, source })?;
        debug!(
            pass = %pass,
            file = %unit.name,
            bytes = text.len(),
            "Rendered pass"
        );
        out.push_str(&text);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

fn run_pass(pass: Pass, unit: &FileUnit) -> Result<String, PassError> {
    match pass {
        Pass::Header => header::render(unit),
        Pass::Registration => registration::render(unit),
        Pass::Footer => footer::render(unit),
        Pass::Patterns => patterns::render(unit),
    }
}

/// Compile every binding of a method, tagging failures with their location.
fn compile_bindings(
    service: &ServiceDescriptor,
    method: &MethodDescriptor,
) -> Result<Vec<CompiledBinding>, PassError> {
    method
        .bindings
        .iter()
        .map(|b| {
            binding::compile(b).map_err(|source| PassError::Binding {
                service: service.name.clone(),
                method: method.name.clone(),
                index: b.index,
                source,
            })
        })
        .collect()
}
