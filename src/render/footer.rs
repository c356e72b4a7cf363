use crate::descriptor::FileUnit;
use crate::error::PassError;
use crate::naming;
use askama::Template;

#[derive(Template)]
#[template(path = "footer.rs.txt", escape = "none")]
struct FooterTemplate<'a> {
    source: &'a str,
    blob: String,
    /// `&[u8]` expression holding the document
    literal: String,
}

/// Make text embeddable in a raw string literal inside `concat!`.
///
/// Raw literals cannot hold `"` or a bare carriage return, so each of those
/// closes the literal, appears as its own escaped fragment, and reopens a new
/// raw literal. Every other byte passes through untouched.
///
/// ```
/// use gatewaygen::render::escape_blob;
/// assert_eq!(escape_blob(r#"say "hi""#), r#"say ", "\"", r"hi", "\"", r""#);
/// ```
pub fn escape_blob(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    for c in doc.chars() {
        match c {
            '"' => out.push_str(r#"", "\"", r""#),
            '\r' => out.push_str(r#"", "\r", r""#),
            other => out.push(other),
        }
    }
    out
}

/// Escape arbitrary bytes for a `b"..."` literal.
///
/// Printable ASCII passes through except `"` and `\`; everything else uses
/// an escape sequence.
///
/// ```
/// use gatewaygen::render::escape_byte_blob;
/// assert_eq!(escape_byte_blob(b"a\"\xff\r\n"), r#"a\"\xff\r\n"#);
/// ```
pub fn escape_byte_blob(doc: &[u8]) -> String {
    let mut out = String::with_capacity(doc.len());
    for &byte in doc {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(char::from(byte)),
            other => out.push_str(&format!("\\x{other:02x}")),
        }
    }
    out
}

pub(super) fn render(unit: &FileUnit) -> Result<String, PassError> {
    // Text stays readable in the generated file; anything else is embedded byte by byte.
    let literal = match std::str::from_utf8(&unit.api_doc) {
        Ok(doc) => format!("concat!(r\"{}\").as_bytes()", escape_blob(doc)),
        Err(_) => format!("b\"{}\"", escape_byte_blob(&unit.api_doc)),
    };
    let template = FooterTemplate {
        source: &unit.name,
        blob: naming::blob_name(&unit.name),
        literal,
    };
    Ok(template.render()?)
}
