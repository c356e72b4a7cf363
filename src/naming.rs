//! # Symbol Namer
//!
//! Derives the identifiers the generated file declares and references.
//!
//! Every binding gets a base name of the form
//! `gateway_<Service>_<Method>_<index>`; its route pattern constant and its
//! unmarshal function prefix that base with `pattern_` and `unmarshal_`.
//! Within one service, (method, index) identifies a binding, so two bindings
//! can never share a base name.
//!
//! Inputs are trusted to already be identifier fragments; nothing is
//! sanitized here (see [`crate::validate`]).

/// Generator-specific prefix of every per-binding symbol.
pub const SYMBOL_PREFIX: &str = "gateway";

/// Prefix of the embedded documentation blob symbol.
pub const BLOB_PREFIX: &str = "api_doc";

const SEPARATOR: char = '_';

/// Base symbol for one binding.
///
/// ```
/// use gatewaygen::naming::name;
/// assert_eq!(name("Greeter", "Hello", 1), "gateway_Greeter_Hello_1");
/// ```
pub fn name(service: &str, method: &str, index: usize) -> String {
    format!("{SYMBOL_PREFIX}{SEPARATOR}{service}{SEPARATOR}{method}{SEPARATOR}{index}")
}

/// Name of the route pattern constant for one binding.
pub fn pattern_symbol(service: &str, method: &str, index: usize) -> String {
    format!("pattern_{}", name(service, method, index))
}

/// Name of the unmarshal function for one binding.
pub fn unmarshal_symbol(service: &str, method: &str, index: usize) -> String {
    format!("unmarshal_{}", name(service, method, index))
}

/// Symbol of the documentation blob for a source file.
///
/// Path separators and extension dots become `_`:
///
/// ```
/// use gatewaygen::naming::blob_name;
/// assert_eq!(blob_name("greeter/v1/greeter.proto"), "api_doc_greeter_v1_greeter_proto");
/// ```
pub fn blob_name(file: &str) -> String {
    let normalized: String = file
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' => SEPARATOR,
            other => other,
        })
        .collect();
    format!("{BLOB_PREFIX}{SEPARATOR}{normalized}")
}

/// Convert CamelCase (or mixed) to snake_case: `SayHello` → `say_hello`.
///
/// Used for the Rust method names of service traits and for field access.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let chars: Vec<char> = s.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = if i > 0 { chars.get(i - 1) } else { None };
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape Rust keywords as raw identifiers (`type` → `r#type`).
pub fn rust_ident(name: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
        "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
        "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
    ];
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
