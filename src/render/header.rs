use crate::descriptor::FileUnit;
use crate::error::PassError;
use crate::imports;
use askama::Template;

#[derive(Template)]
#[template(path = "header.rs.txt", escape = "none")]
struct HeaderTemplate<'a> {
    source: &'a str,
    package: &'a str,
    /// Rendered `use` lines of standard-library imports
    standard: Vec<String>,
    /// Rendered `use` lines of everything else
    external: Vec<String>,
}

pub(super) fn render(unit: &FileUnit) -> Result<String, PassError> {
    let (standard, external) = imports::partition(&unit.imports);
    let template = HeaderTemplate {
        source: &unit.name,
        package: &unit.package,
        standard: standard.iter().map(ToString::to_string).collect(),
        external: external.iter().map(ToString::to_string).collect(),
    };
    Ok(template.render()?)
}
