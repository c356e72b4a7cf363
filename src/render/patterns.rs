use super::compile_bindings;
use crate::binding::CompiledBinding;
use crate::descriptor::{BodySelector, FieldPath, FileUnit, PathParam, WireType};
use crate::error::PassError;
use crate::naming;
use askama::Template;

/// Pattern constant plus unmarshal function of one binding.
struct PatternView {
    pattern_symbol: String,
    /// Pattern as a Rust string literal
    pattern_literal: String,
    unmarshal_symbol: String,
    request_type: String,
    noop: bool,
    has_body: bool,
    /// `&mut T` expression the payload decodes into
    body_target: String,
    has_path: bool,
    /// One `match` arm per path parameter, in template order
    path_arms: Vec<String>,
}

#[derive(Template)]
#[template(path = "patterns.rs.txt", escape = "none")]
struct PatternsTemplate {
    patterns: Vec<PatternView>,
}

pub(super) fn render(unit: &FileUnit) -> Result<String, PassError> {
    let mut patterns = Vec::new();
    for svc in &unit.services {
        for method in &svc.methods {
            for compiled in compile_bindings(svc, method)? {
                patterns.push(view(&svc.name, &method.name, &method.request_type, &compiled));
            }
        }
    }
    Ok(PatternsTemplate { patterns }.render()?)
}

fn view(service: &str, method: &str, request_type: &str, compiled: &CompiledBinding) -> PatternView {
    let body_target = match compiled.body() {
        Some(BodySelector::Whole) | None => "msg".to_string(),
        Some(BodySelector::Field(path)) => format!("&mut msg.{}", field_access(path)),
    };
    let path_arms: Vec<String> = compiled.path_params().iter().map(path_arm).collect();
    PatternView {
        pattern_symbol: naming::pattern_symbol(service, method, compiled.index),
        pattern_literal: format!("{:?}", compiled.pattern),
        unmarshal_symbol: naming::unmarshal_symbol(service, method, compiled.index),
        request_type: request_type.to_string(),
        noop: compiled.is_noop(),
        has_body: compiled.body().is_some(),
        body_target,
        has_path: !path_arms.is_empty(),
        path_arms,
    }
}

/// Place expression for a (possibly nested) request field.
///
/// Intermediate message fields are optional and get default-initialized on
/// the way down: `a.b.c` → `a.get_or_insert_with(Default::default).b.get_or_insert_with(Default::default).c`.
fn field_access(path: &FieldPath) -> String {
    let segments: Vec<String> = path
        .segments()
        .iter()
        .map(|s| naming::rust_ident(&naming::to_snake_case(s)))
        .collect();
    match segments.split_last() {
        Some((last, parents)) => {
            let mut out = String::new();
            for parent in parents {
                out.push_str(parent);
                out.push_str(".get_or_insert_with(Default::default).");
            }
            out.push_str(last);
            out
        }
        None => String::new(),
    }
}

fn path_arm(param: &PathParam) -> String {
    let target = format!("msg.{}", field_access(&param.field));
    let key = format!("{:?}", param.name);
    let context = format!("{:?}", format!("path parameter {}", param.name));
    let coerce = |func: &str| {
        format!("runtime::coerce::{func}(value).map_err(|err| runtime::GatewayError::wrap(err, {context}))?")
    };
    let assign = match &param.wire_type {
        WireType::String => format!("{target} = {};", coerce("string")),
        WireType::Int32 | WireType::Sint32 | WireType::Sfixed32 => {
            format!("{target} = {};", coerce("int32"))
        }
        WireType::Int64 | WireType::Sint64 | WireType::Sfixed64 => {
            format!("{target} = {};", coerce("int64"))
        }
        WireType::Uint32 | WireType::Fixed32 => format!("{target} = {};", coerce("uint32")),
        WireType::Uint64 | WireType::Fixed64 => format!("{target} = {};", coerce("uint64")),
        WireType::Float => format!("{target} = {};", coerce("float")),
        WireType::Double => format!("{target} = {};", coerce("double")),
        WireType::Bool => format!("{target} = {};", coerce("boolean")),
        WireType::Bytes => format!("{target} = {};", coerce("bytes")),
        WireType::Enum(type_name) => format!(
            "{target} = runtime::coerce::enumeration(value, {type_name}::from_str_name).map_err(|err| runtime::GatewayError::wrap(err, {context}))?;"
        ),
        WireType::Duration => format!(
            "let (seconds, nanos) = {}; {target} = Some(::prost_types::Duration {{ seconds, nanos }});",
            coerce("duration")
        ),
        WireType::Timestamp => format!(
            "let (seconds, nanos) = {}; {target} = Some(::prost_types::Timestamp {{ seconds, nanos }});",
            coerce("timestamp")
        ),
    };
    format!("{key} => {{ {assign} }}")
}
