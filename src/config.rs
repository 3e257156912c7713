//! TOML configuration for the bundled CLI.
//!
//! The engine itself only ever receives final raw spec strings; this module
//! is the thin layer that gets them there. Each section enables one check.
//!
//! ```toml
//! [fields]
//! spec = "private int count, private Map<String/comma/ Integer> table"
//!
//! [methods]
//! spec = "public int size(), public void put(String key, int value)"
//!
//! constant_names = true
//! star_imports = true
//! ```

use crate::checks::{
    Check, ConstantNameCheck, FieldSpecCheck, MethodSpecCheck, StarImportCheck, SurfaceCheck,
    field_spec::DEFAULT_PUBLIC_FIELD_CLASSES,
};
use crate::core::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Field specification section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpecConfig {
    /// Comma-joined field specs (`/comma/` escapes generic commas)
    pub spec: String,

    /// Classes whose unspecified fields must be public instead of private
    #[serde(default = "default_public_field_classes")]
    pub public_field_classes: Vec<String>,
}

fn default_public_field_classes() -> Vec<String> {
    DEFAULT_PUBLIC_FIELD_CLASSES
        .iter()
        .map(|class| class.to_string())
        .collect()
}

/// Method specification section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSpecConfig {
    /// Comma-joined method specs (`/comma/` escapes generic commas)
    pub spec: String,
}

/// All-or-nothing surface section: parallel lists, one entry per member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub field_names: Vec<String>,
    pub field_types: Vec<String>,
    pub method_names: Vec<String>,
    pub method_return_types: Vec<String>,
    /// Whitespace-delimited parameter types, one entry per method
    pub method_param_types: Vec<String>,
    /// Whitespace-delimited parameter names, one entry per method
    pub method_param_names: Vec<String>,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub fields: Option<FieldSpecConfig>,
    pub methods: Option<MethodSpecConfig>,
    pub surface: Option<SurfaceConfig>,
    pub constant_names: bool,
    pub star_imports: bool,
}

impl CheckConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Build the configured check set. Spec parse failures surface here,
    /// before any class is traversed.
    pub fn build_checks(&self) -> Result<Vec<Box<dyn Check>>> {
        let mut checks: Vec<Box<dyn Check>> = Vec::new();
        if let Some(fields) = &self.fields {
            checks.push(Box::new(FieldSpecCheck::with_allow_list(
                &fields.spec,
                fields.public_field_classes.clone(),
            )?));
        }
        if let Some(methods) = &self.methods {
            checks.push(Box::new(MethodSpecCheck::new(&methods.spec)?));
        }
        if let Some(surface) = &self.surface {
            checks.push(Box::new(SurfaceCheck::new(
                &surface.field_names,
                &surface.field_types,
                &surface.method_names,
                &surface.method_return_types,
                &surface.method_param_types,
                &surface.method_param_names,
            )?));
        }
        if self.constant_names {
            checks.push(Box::new(ConstantNameCheck));
        }
        if self.star_imports {
            checks.push(Box::new(StarImportCheck));
        }
        Ok(checks)
    }
}
