use super::types::{default_imports, FileUnit, PathParam, WireType};
use crate::binding::template_params;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// On-disk shape of a descriptor: a [`FileUnit`] plus an optional path to the
/// documentation file to embed.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(flatten)]
    unit: FileUnit,
    #[serde(default)]
    api_doc_path: Option<String>,
}

/// Load a descriptor from a YAML (`.yaml`/`.yml`) or JSON file and normalize it.
///
/// `api_doc_path`, when present, is resolved relative to the descriptor file.
pub fn load_file_unit(path: &Path) -> anyhow::Result<FileUnit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
    let is_yaml = path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);
    let raw: RawDescriptor = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML descriptor: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON descriptor: {}", path.display()))?
    };

    let mut unit = raw.unit;
    if let Some(doc) = raw.api_doc_path {
        let doc_path = path.parent().unwrap_or_else(|| Path::new(".")).join(doc);
        unit.api_doc = std::fs::read(&doc_path)
            .with_context(|| format!("Failed to read API doc: {}", doc_path.display()))?;
    }
    normalize(&mut unit);
    debug!(
        file = %unit.name,
        services = unit.services.len(),
        "loaded descriptor"
    );
    Ok(unit)
}

/// Parse a descriptor from a YAML string (JSON is valid YAML) and normalize it.
pub fn parse_file_unit(content: &str) -> anyhow::Result<FileUnit> {
    let mut unit: FileUnit =
        serde_yaml::from_str(content).context("Failed to parse descriptor")?;
    normalize(&mut unit);
    Ok(unit)
}

/// Fill in what the descriptor builder is allowed to leave out.
///
/// - binding indexes follow declaration order
/// - bindings without explicit path params get one `string` param per
///   template placeholder, named after (and writing to) the same field path
/// - an empty import list is replaced by [`default_imports`]
pub fn normalize(unit: &mut FileUnit) {
    if unit.imports.is_empty() {
        unit.imports = default_imports();
    }
    for svc in &mut unit.services {
        for method in &mut svc.methods {
            for (index, binding) in method.bindings.iter_mut().enumerate() {
                binding.index = index;
                if binding.path_params.is_empty() {
                    // Malformed templates are left alone; compilation reports them.
                    if let Ok(names) = template_params(&binding.path_template) {
                        binding.path_params = names
                            .into_iter()
                            .map(|name| PathParam {
                                field: super::FieldPath::parse(&name),
                                name,
                                wire_type: WireType::String,
                            })
                            .collect();
                    }
                }
            }
        }
    }
}
