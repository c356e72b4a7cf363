//! # Path/Body Binding Compiler
//!
//! Turns one [`BindingDescriptor`] into what the render passes emit: the route
//! pattern string, the HTTP verb, and the ordered list of decode steps the
//! binding's unmarshal function runs.
//!
//! ## Step ordering
//!
//! When a binding has both a body selector and path parameters, the body is
//! decoded first and path parameters are applied second. A field written by
//! both ends up with the path value. Overlaps are not rejected.
//!
//! ## Pattern syntax
//!
//! Templates use the router's own placeholder syntax (`/v1/users/{id}`), so the
//! pattern is the template itself. A placeholder may carry a segment pattern
//! (`{parent=shelves/*}`); it is kept in the pattern verbatim and the matched
//! value is looked up under the bare name (`parent`).

use crate::descriptor::{BindingDescriptor, BodySelector, FieldPath, PathParam};
use http::Method;
use std::fmt;

/// One unmarshal step, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStep {
    /// Negotiate a decoder from the request and decode the payload into the selector
    Body(BodySelector),
    /// Copy matched route parameters into request fields, in template order
    Path(Vec<PathParam>),
}

/// A binding ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBinding {
    pub index: usize,
    pub verb: Method,
    /// Router pattern, e.g. `/v1/hello/{name}`
    pub pattern: String,
    /// Decode steps; body (if any) always precedes path (if any)
    pub steps: Vec<DecodeStep>,
}

impl CompiledBinding {
    /// True when the unmarshal function has nothing to do.
    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn body(&self) -> Option<&BodySelector> {
        self.steps.iter().find_map(|s| match s {
            DecodeStep::Body(sel) => Some(sel),
            DecodeStep::Path(_) => None,
        })
    }

    pub fn path_params(&self) -> &[PathParam] {
        self.steps
            .iter()
            .find_map(|s| match s {
                DecodeStep::Path(params) => Some(params.as_slice()),
                DecodeStep::Body(_) => None,
            })
            .unwrap_or(&[])
    }
}

/// Why a binding could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Verb is not one of the standard HTTP methods
    UnsupportedVerb(String),
    /// Template could not be parsed
    MalformedTemplate { template: String, reason: String },
    /// Template placeholder with no path parameter declaration
    UnboundParameter(String),
    /// Path parameter declared but not present in the template
    UndeclaredParameter(String),
    /// Field path is empty or has an empty segment
    EmptyFieldPath(String),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::UnsupportedVerb(verb) => {
                write!(f, "unsupported HTTP verb '{verb}'")
            }
            BindingError::MalformedTemplate { template, reason } => {
                write!(f, "malformed path template '{template}': {reason}")
            }
            BindingError::UnboundParameter(name) => {
                write!(f, "template placeholder '{{{name}}}' has no path parameter declaration")
            }
            BindingError::UndeclaredParameter(name) => {
                write!(f, "path parameter '{name}' does not appear in the template")
            }
            BindingError::EmptyFieldPath(owner) => {
                write!(f, "empty field path for {owner}")
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Parse a descriptor verb into one of the standard HTTP methods.
pub fn parse_verb(verb: &str) -> Result<Method, BindingError> {
    match verb.trim().to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "HEAD" => Ok(Method::HEAD),
        "OPTIONS" => Ok(Method::OPTIONS),
        "TRACE" => Ok(Method::TRACE),
        "CONNECT" => Ok(Method::CONNECT),
        _ => Err(BindingError::UnsupportedVerb(verb.to_string())),
    }
}

/// Check a template and return the router pattern plus its placeholder names.
///
/// The pattern is the template unchanged.
pub fn compile_template(template: &str) -> Result<(String, Vec<String>), BindingError> {
    let malformed = |reason: &str| BindingError::MalformedTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    };
    if !template.starts_with('/') {
        return Err(malformed("must start with '/'"));
    }

    let mut params: Vec<String> = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find(&['{', '}'][..]) {
        if rest[open..].starts_with('}') {
            return Err(malformed("unmatched '}'"));
        }
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| malformed("unclosed '{'"))?;
        let inner = &after[..close];
        if inner.contains('{') {
            return Err(malformed("nested '{'"));
        }
        let name = inner.split('=').next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(malformed("empty placeholder"));
        }
        if params.iter().any(|p| p == name) {
            return Err(malformed(&format!("duplicate placeholder '{name}'")));
        }
        params.push(name.to_string());
        rest = &after[close + 1..];
    }
    Ok((template.to_string(), params))
}

/// Placeholder names of a template, in declaration order.
pub fn template_params(template: &str) -> Result<Vec<String>, BindingError> {
    compile_template(template).map(|(_, params)| params)
}

fn check_field(path: &FieldPath, owner: &str) -> Result<(), BindingError> {
    if path.is_empty() || path.segments().iter().any(|s| s.trim().is_empty()) {
        return Err(BindingError::EmptyFieldPath(owner.to_string()));
    }
    Ok(())
}

/// Compile one binding.
pub fn compile(binding: &BindingDescriptor) -> Result<CompiledBinding, BindingError> {
    let verb = parse_verb(&binding.verb)?;
    let (pattern, names) = compile_template(&binding.path_template)?;

    for param in &binding.path_params {
        if !names.contains(&param.name) {
            return Err(BindingError::UndeclaredParameter(param.name.clone()));
        }
        check_field(&param.field, &format!("path parameter '{}'", param.name))?;
    }

    // Template order wins over declaration order.
    let mut ordered = Vec::with_capacity(names.len());
    for name in &names {
        let param = binding
            .path_params
            .iter()
            .find(|p| &p.name == name)
            .ok_or_else(|| BindingError::UnboundParameter(name.clone()))?;
        ordered.push(param.clone());
    }

    let mut steps = Vec::with_capacity(2);
    if let Some(body) = &binding.body {
        if let BodySelector::Field(path) = body {
            check_field(path, "body selector")?;
        }
        steps.push(DecodeStep::Body(body.clone()));
    }
    if !ordered.is_empty() {
        steps.push(DecodeStep::Path(ordered));
    }

    Ok(CompiledBinding {
        index: binding.index,
        verb,
        pattern,
        steps,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::descriptor::WireType;

    fn binding(verb: &str, template: &str, body: Option<&str>, params: &[(&str, &str)]) -> BindingDescriptor {
        BindingDescriptor {
            index: 0,
            verb: verb.to_string(),
            path_template: template.to_string(),
            body: body.map(BodySelector::parse),
            path_params: params
                .iter()
                .map(|(name, field)| PathParam {
                    name: name.to_string(),
                    field: FieldPath::parse(field),
                    wire_type: WireType::String,
                })
                .collect(),
        }
    }

    #[test]
    fn test_compile_template_simple() {
        let (pattern, params) = compile_template("/v1/hello/{name}").unwrap();
        assert_eq!(pattern, "/v1/hello/{name}");
        assert_eq!(params, vec!["name"]);
    }

    #[test]
    fn test_compile_template_keeps_segment_patterns() {
        let (pattern, params) =
            compile_template("/v1/{parent=shelves/*}/books/{book.id}").unwrap();
        assert_eq!(pattern, "/v1/{parent=shelves/*}/books/{book.id}");
        assert_eq!(params, vec!["parent", "book.id"]);

        let (pattern, params) = compile_template("/v1/{name=**}").unwrap();
        assert_eq!(pattern, "/v1/{name=**}");
        assert_eq!(params, vec!["name"]);
    }

    #[test]
    fn test_compile_template_errors() {
        assert!(matches!(
            compile_template("v1/hello"),
            Err(BindingError::MalformedTemplate { .. })
        ));
        assert!(compile_template("/v1/{name").is_err());
        assert!(compile_template("/v1/name}").is_err());
        assert!(compile_template("/v1/{}").is_err());
        assert!(compile_template("/v1/{a{b}}").is_err());
        assert!(compile_template("/v1/{id}/x/{id}").is_err());
    }

    #[test]
    fn test_body_then_path_order() {
        let compiled = compile(&binding("post", "/v1/hello/{name}", Some("*"), &[("name", "name")])).unwrap();
        assert_eq!(compiled.verb, Method::POST);
        assert_eq!(compiled.steps.len(), 2);
        assert!(matches!(compiled.steps[0], DecodeStep::Body(BodySelector::Whole)));
        assert!(matches!(compiled.steps[1], DecodeStep::Path(_)));
    }

    #[test]
    fn test_path_only_and_body_only() {
        let path_only = compile(&binding("GET", "/v1/hello/{name}", None, &[("name", "name")])).unwrap();
        assert!(path_only.body().is_none());
        assert_eq!(path_only.path_params().len(), 1);

        let body_only = compile(&binding("POST", "/v1/hello", Some("greeting"), &[])).unwrap();
        assert_eq!(
            body_only.body(),
            Some(&BodySelector::Field(FieldPath::parse("greeting")))
        );
        assert!(body_only.path_params().is_empty());
    }

    #[test]
    fn test_noop_binding() {
        let compiled = compile(&binding("GET", "/v1/ping", None, &[])).unwrap();
        assert!(compiled.is_noop());
    }

    #[test]
    fn test_params_follow_template_order() {
        let compiled = compile(&binding(
            "GET",
            "/v1/{org}/{user}",
            None,
            &[("user", "user_id"), ("org", "org_id")],
        ))
        .unwrap();
        let names: Vec<_> = compiled.path_params().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["org", "user"]);
    }

    #[test]
    fn test_param_mismatch_errors() {
        assert_eq!(
            compile(&binding("GET", "/v1/{name}", None, &[])),
            Err(BindingError::UnboundParameter("name".into()))
        );
        assert_eq!(
            compile(&binding("GET", "/v1/x", None, &[("name", "name")])),
            Err(BindingError::UndeclaredParameter("name".into()))
        );
        assert!(matches!(
            compile(&binding("GET", "/v1/{name}", None, &[("name", "")])),
            Err(BindingError::EmptyFieldPath(_))
        ));
        assert!(matches!(
            compile(&binding("POST", "/v1/x", Some("a..b"), &[])),
            Err(BindingError::EmptyFieldPath(_))
        ));
    }

    #[test]
    fn test_unsupported_verb() {
        assert_eq!(
            parse_verb("PURGE"),
            Err(BindingError::UnsupportedVerb("PURGE".into()))
        );
        assert_eq!(parse_verb("delete"), Ok(Method::DELETE));
    }
}
