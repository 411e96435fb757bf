//! Name template rendering.
//!
//! Templates use handlebars syntax. Rendering runs in strict mode so a typo
//! such as `{{ Verison }}` fails instead of silently producing an empty
//! segment.
//!
//! # Variables
//!
//! | Name | Value |
//! |---|---|
//! | `ProjectName` | configured project name |
//! | `Version` | tag with one leading `v` removed |
//! | `Tag` | tag as given |
//! | `Os` | target OS |
//! | `Arch` | target architecture |
//! | `Arm` | ARM variant, empty when not applicable |
//! | `Binary` | logical binary name |
//! | `Ext` | platform extension such as `.exe`, empty otherwise |
//!
//! Rendered names are not sanitized; characters that are unsafe in file names
//! pass straight through.

use super::{
    artifact::Artifact,
    error::{Error, Result},
    settings::Settings,
};
use handlebars::Handlebars;
use serde::Serialize;

/// Default template for archive formats.
pub const DEFAULT_NAME_TEMPLATE: &str =
    "{{ ProjectName }}_{{ Version }}_{{ Os }}_{{ Arch }}{{#if Arm}}v{{ Arm }}{{/if}}";

/// Default template when the format is `binary`.
pub const DEFAULT_BINARY_NAME_TEMPLATE: &str =
    "{{ Binary }}_{{ Version }}_{{ Os }}_{{ Arch }}{{#if Arm}}v{{ Arm }}{{/if}}{{ Ext }}";

/// Values available to name templates.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameVars {
    pub project_name: String,
    pub version: String,
    pub tag: String,
    pub os: String,
    pub arch: String,
    pub arm: String,
    pub binary: String,
    pub ext: String,
}

impl NameVars {
    /// Builds the variables for one artifact.
    pub fn for_artifact(settings: &Settings, artifact: &Artifact) -> Self {
        Self {
            project_name: settings.project_name().to_string(),
            version: settings.version().to_string(),
            tag: settings.tag().to_string(),
            os: artifact.os.clone(),
            arch: artifact.arch.clone(),
            arm: artifact.arm.clone().unwrap_or_default(),
            binary: artifact.binary_name().to_string(),
            ext: artifact.extension().to_string(),
        }
    }
}

/// Renders `template` against `vars`.
///
/// # Errors
///
/// Returns [`Error::Template`] when the template does not parse or refers to
/// an unknown variable.
pub fn render(template: &str, vars: &NameVars) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);

    registry
        .render_template(template, vars)
        .map_err(|e| Error::Template {
            template: template.to_string(),
            reason: e.to_string(),
        })
}
