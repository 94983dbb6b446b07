//! Detection of dependencies the base generator already installed

use crate::error::ScaffoldError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Dependencies found in the generated project's manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectedDependencies {
    pub has_tailwind: bool,
    pub has_eslint: bool,
}

/// Capability to inspect a generated project
pub trait DependencyProbe {
    fn detect(&self, project_dir: &Path) -> Result<DetectedDependencies, ScaffoldError>;
}

impl<F> DependencyProbe for F
where
    F: Fn(&Path) -> Result<DetectedDependencies, ScaffoldError>,
{
    fn detect(&self, project_dir: &Path) -> Result<DetectedDependencies, ScaffoldError> {
        self(project_dir)
    }
}

/// The parts of `package.json` that matter for detection
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, Value>,
}

impl PackageManifest {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// A dependency counts when listed with a truthy version in either group
    pub fn has_dependency(&self, name: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .iter()
            .any(|group| group.get(name).is_some_and(is_truthy))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads `package.json` from the project directory
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonProbe;

impl DependencyProbe for PackageJsonProbe {
    fn detect(&self, project_dir: &Path) -> Result<DetectedDependencies, ScaffoldError> {
        let path = project_dir.join("package.json");
        let content = std::fs::read_to_string(&path).map_err(|source| ScaffoldError::ManifestRead {
            path: path.clone(),
            source,
        })?;
        let manifest = PackageManifest::parse(&content)
            .map_err(|source| ScaffoldError::ManifestParse { path, source })?;

        Ok(DetectedDependencies {
            has_tailwind: manifest.has_dependency("tailwindcss"),
            has_eslint: manifest.has_dependency("eslint"),
        })
    }
}
