use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One input compilation unit: the services declared in a single source file.
///
/// Built once per generation run and never mutated by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileUnit {
    /// Source file identity (e.g. `greeter/v1/greeter.proto`)
    pub name: String,
    /// Package identity emitted in the generated banner
    #[serde(default)]
    pub package: String,
    /// Services in declaration order
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
    /// Imports required by the generated file, in declaration order
    #[serde(default)]
    pub imports: Vec<ImportSpec>,
    /// Raw API documentation bytes embedded in the generated file
    #[serde(default, deserialize_with = "doc_from_str", skip_serializing)]
    pub api_doc: Vec<u8>,
}

fn doc_from_str<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let doc = Option::<String>::deserialize(deserializer)?;
    Ok(doc.map(String::into_bytes).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Name of the request record type, in scope of the generated file
    pub request_type: String,
    /// Name of the response record type, in scope of the generated file
    pub response_type: String,
    #[serde(default)]
    pub bindings: Vec<BindingDescriptor>,
}

/// One HTTP entry point for a method.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BindingDescriptor {
    /// Declaration order within the method, starting at 0
    #[serde(default)]
    pub index: usize,
    /// HTTP verb (`GET`, `POST`, ...)
    pub verb: String,
    /// Route template with `{param}` placeholders (e.g. `/v1/hello/{name}`)
    pub path_template: String,
    /// Part of the request record populated from the payload, if any
    #[serde(default)]
    pub body: Option<BodySelector>,
    /// Placeholders of the template mapped to request fields, in template order
    #[serde(default)]
    pub path_params: Vec<PathParam>,
}

/// Which part of the request record the payload decodes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySelector {
    /// `*`: the whole request record
    Whole,
    /// A single (possibly nested) field of the request record
    Field(FieldPath),
}

impl BodySelector {
    pub fn parse(selector: &str) -> Self {
        match selector.trim() {
            "*" => BodySelector::Whole,
            other => BodySelector::Field(FieldPath::parse(other)),
        }
    }
}

impl fmt::Display for BodySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySelector::Whole => write!(f, "*"),
            BodySelector::Field(path) => write!(f, "{path}"),
        }
    }
}

impl<'de> Deserialize<'de> for BodySelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BodySelector::parse(&raw))
    }
}

impl Serialize for BodySelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Dotted path to a field of the request record (`user.id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(pub Vec<String>);

impl FieldPath {
    /// Split a dotted path. Empty segments are kept so validation can report them.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return FieldPath(Vec::new());
        }
        FieldPath(path.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when one path is a prefix of the other (they write the same data).
    pub fn overlaps(&self, other: &FieldPath) -> bool {
        let n = self.0.len().min(other.0.len());
        n > 0 && self.0[..n] == other.0[..n]
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldPath::parse(&raw))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A template placeholder and the request field it populates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathParam {
    /// Placeholder name as it appears in the template
    pub name: String,
    /// Request field written with the matched value
    pub field: FieldPath,
    /// Declared wire type of that field, drives value coercion
    #[serde(default)]
    pub wire_type: WireType,
}

/// Declared wire type of a path-populated field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireType {
    #[default]
    String,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Float,
    Double,
    Bool,
    Bytes,
    /// Enumerated type, looked up by symbol name (or number)
    Enum(String),
    /// Well-known duration (`1.5s`)
    Duration,
    /// Well-known timestamp (RFC 3339)
    Timestamp,
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WireType::String => "string",
            WireType::Int32 => "int32",
            WireType::Int64 => "int64",
            WireType::Uint32 => "uint32",
            WireType::Uint64 => "uint64",
            WireType::Sint32 => "sint32",
            WireType::Sint64 => "sint64",
            WireType::Fixed32 => "fixed32",
            WireType::Fixed64 => "fixed64",
            WireType::Sfixed32 => "sfixed32",
            WireType::Sfixed64 => "sfixed64",
            WireType::Float => "float",
            WireType::Double => "double",
            WireType::Bool => "bool",
            WireType::Bytes => "bytes",
            WireType::Enum(name) => return write!(f, "enum {name}"),
            WireType::Duration => "duration",
            WireType::Timestamp => "timestamp",
        };
        write!(f, "{s}")
    }
}

/// One `use` line of the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImportSpec {
    /// Import path (`std::sync::Arc`)
    pub path: String,
    /// Optional `as` alias
    #[serde(default)]
    pub alias: Option<String>,
    /// Standard-library import (classification is trusted)
    #[serde(default)]
    pub standard: bool,
}

impl ImportSpec {
    pub fn std(path: &str) -> Self {
        ImportSpec {
            path: path.to_string(),
            alias: None,
            standard: true,
        }
    }

    pub fn external(path: &str) -> Self {
        ImportSpec {
            path: path.to_string(),
            alias: None,
            standard: false,
        }
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "use {} as {};", self.path, alias),
            None => write!(f, "use {};", self.path),
        }
    }
}

/// Imports every generated file needs when the descriptor declares none.
pub fn default_imports() -> Vec<ImportSpec> {
    vec![
        ImportSpec::std("std::sync::Arc"),
        ImportSpec::external("gatewaygen::runtime"),
    ]
}
