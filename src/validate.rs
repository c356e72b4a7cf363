//! # Descriptor Linter
//!
//! Checks a [`FileUnit`] before it reaches the renderer. The renderer itself
//! trusts its input: names are pasted into the generated file as they are, so
//! anything that would not be a Rust identifier has to be caught here.
//!
//! ## Checks Performed
//!
//! Errors (generation is refused):
//! 1. **Identifiers** - service, method and record type names, field path segments,
//!    and the documentation blob symbol
//! 2. **Imports** - import path is a `::` path, alias is an identifier
//! 3. **Bindings** - verb is a standard HTTP method and the binding compiles
//!
//! Warnings:
//! 1. **Duplicates** - service names, method names within a service
//! 2. **Symbol collisions** - two bindings deriving the same generated symbol
//!    (possible when names contain `_`)
//! 3. **Route collisions** - the same verb and pattern registered twice
//!
//! Info:
//! 1. **Body/path overlap** - a path parameter writes a field the body also
//!    writes; the path value wins
//!
//! ## Usage
//!
//! ```
//! use gatewaygen::descriptor::parse_file_unit;
//! use gatewaygen::validate::{has_errors, lint_file_unit};
//!
//! let unit = parse_file_unit("name: a.proto\nservices:\n  - name: A\n").unwrap();
//! let issues = lint_file_unit(&unit);
//! assert!(!has_errors(&issues));
//! ```

use crate::binding::{self, BindingError};
use crate::descriptor::{BodySelector, FileUnit, WireType};
use crate::naming;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;


static IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex should be valid")
});

/// `a::b::C`, optionally rooted (`::a`) or ending in a glob (`a::*`).
static PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*(::\*)?$")
        .expect("path regex should be valid")
});

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Error - Will cause code generation to fail
    Error,
    /// Warning - May cause issues but won't block generation
    Warning,
    /// Info - Worth knowing, nothing to fix
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Where the issue occurred (e.g. "service:Greeter", "binding:Greeter.Hello[1]")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g. "invalid_identifier", "symbol_collision")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// True when `s` can be pasted into Rust source as an identifier.
pub fn is_identifier(s: &str) -> bool {
    IDENT.is_match(s)
}

/// True when `s` is a (possibly qualified) Rust path.
pub fn is_path(s: &str) -> bool {
    PATH.is_match(s)
}

pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Lint a descriptor.
///
/// Issues come back in the order they were found: file-level checks, then
/// each service in declaration order.
pub fn lint_file_unit(unit: &FileUnit) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let blob = naming::blob_name(&unit.name);
    if !is_identifier(&blob) {
        issues.push(
            LintIssue::new(
                format!("file:{}", unit.name),
                LintSeverity::Error,
                "invalid_blob_symbol",
                format!("documentation symbol '{blob}' is not a valid identifier"),
            )
            .with_suggestion("Use only letters, digits, '_', '/', '\\' and '.' in the file name"),
        );
    }

    for import in &unit.imports {
        let location = format!("import:{}", import.path);
        if !is_path(&import.path) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "invalid_import",
                format!("'{}' is not a Rust path", import.path),
            ));
        }
        if let Some(alias) = &import.alias {
            if !is_identifier(alias) {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "invalid_import",
                    format!("alias '{alias}' is not a valid identifier"),
                ));
            }
        }
    }

    let mut service_names = HashSet::new();
    // generated base symbol -> first binding location that produced it
    let mut symbols: HashMap<String, String> = HashMap::new();
    let mut routes: HashMap<(String, String), String> = HashMap::new();

    for svc in &unit.services {
        let svc_loc = format!("service:{}", svc.name);
        check_identifier(&mut issues, &svc_loc, "service name", &svc.name);
        if !service_names.insert(svc.name.as_str()) {
            issues.push(LintIssue::new(
                &svc_loc,
                LintSeverity::Warning,
                "duplicate_service",
                format!("service '{}' is declared more than once", svc.name),
            ));
        }

        let mut method_names = HashSet::new();
        for method in &svc.methods {
            let method_loc = format!("method:{}.{}", svc.name, method.name);
            check_identifier(&mut issues, &method_loc, "method name", &method.name);
            check_type(&mut issues, &method_loc, "request type", &method.request_type);
            check_type(&mut issues, &method_loc, "response type", &method.response_type);
            if !method_names.insert(method.name.as_str()) {
                issues.push(LintIssue::new(
                    &method_loc,
                    LintSeverity::Warning,
                    "duplicate_method",
                    format!("method '{}' is declared more than once in '{}'", method.name, svc.name),
                ));
            }

            for b in &method.bindings {
                let loc = format!("binding:{}.{}[{}]", svc.name, method.name, b.index);

                let symbol = naming::name(&svc.name, &method.name, b.index);
                if let Some(first) = symbols.get(&symbol) {
                    issues.push(
                        LintIssue::new(
                            &loc,
                            LintSeverity::Warning,
                            "symbol_collision",
                            format!("generated symbol '{symbol}' is also produced by {first}"),
                        )
                        .with_suggestion("Avoid '_' in service and method names"),
                    );
                } else {
                    symbols.insert(symbol, loc.clone());
                }

                if let Some(BodySelector::Field(path)) = &b.body {
                    for segment in path.segments() {
                        check_identifier(&mut issues, &loc, "body field segment", segment);
                    }
                }
                for param in &b.path_params {
                    for segment in param.field.segments() {
                        check_identifier(&mut issues, &loc, "path field segment", segment);
                    }
                    if let WireType::Enum(type_name) = &param.wire_type {
                        check_type(&mut issues, &loc, "enum type", type_name);
                    }
                }

                let compiled = match binding::compile(b) {
                    Ok(compiled) => compiled,
                    Err(BindingError::UnsupportedVerb(verb)) => {
                        issues.push(
                            LintIssue::new(
                                &loc,
                                LintSeverity::Error,
                                "unsupported_verb",
                                format!("'{verb}' is not a standard HTTP method"),
                            )
                            .with_suggestion("Use GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS, TRACE or CONNECT"),
                        );
                        continue;
                    }
                    Err(err) => {
                        issues.push(LintIssue::new(
                            &loc,
                            LintSeverity::Error,
                            "invalid_binding",
                            err.to_string(),
                        ));
                        continue;
                    }
                };

                let route = (compiled.verb.to_string(), compiled.pattern.clone());
                if let Some(first) = routes.get(&route) {
                    issues.push(LintIssue::new(
                        &loc,
                        LintSeverity::Warning,
                        "duplicate_route",
                        format!("{} {} is already registered by {first}", route.0, route.1),
                    ));
                } else {
                    routes.insert(route, loc.clone());
                }

                if let Some(body) = compiled.body() {
                    for param in compiled.path_params() {
                        let overlaps = match body {
                            BodySelector::Whole => true,
                            BodySelector::Field(path) => path.overlaps(&param.field),
                        };
                        if overlaps {
                            issues.push(LintIssue::new(
                                &loc,
                                LintSeverity::Info,
                                "body_path_overlap",
                                format!(
                                    "path parameter '{}' writes '{}', which the body ('{body}') also writes; the path value wins",
                                    param.name, param.field
                                ),
                            ));
                        }
                    }
                }
            }
        }
    }

    issues
}

fn check_identifier(issues: &mut Vec<LintIssue>, location: &str, what: &str, value: &str) {
    if !is_identifier(value) {
        issues.push(LintIssue::new(
            location,
            LintSeverity::Error,
            "invalid_identifier",
            format!("{what} '{value}' is not a valid identifier"),
        ));
    }
}

fn check_type(issues: &mut Vec<LintIssue>, location: &str, what: &str, value: &str) {
    if !is_path(value) || value.ends_with("::*") {
        issues.push(LintIssue::new(
            location,
            LintSeverity::Error,
            "invalid_type",
            format!("{what} '{value}' is not a Rust type path"),
        ));
    }
}

/// Print lint issues grouped by severity, to stderr.
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        eprintln!("No lint issues found");
        return;
    }

    let count = |s: LintSeverity| issues.iter().filter(|i| i.severity == s).count();
    eprintln!(
        "Lint results: {} error(s), {} warning(s), {} info(s)",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for severity in [LintSeverity::Error, LintSeverity::Warning, LintSeverity::Info] {
        for issue in issues.iter().filter(|i| i.severity == severity) {
            eprintln!("  {severity} [{}] {}", issue.kind, issue.location);
            eprintln!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("      suggestion: {suggestion}");
            }
        }
    }
}
