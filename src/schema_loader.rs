//! JSON Schema loading for the book catalog.
//!
//! The catalog schema ships in `schema/books.schema.json` and is compiled
//! into the crate; callers may point at another schema file instead.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

pub(crate) const BUNDLED_CATALOG_SCHEMA: &str = include_str!("../schema/books.schema.json");

/// Compiled schema plus the title it declared, for error messages.
pub(crate) struct CompiledSchema {
    pub title: String,
    compiled: JSONSchema,
}

impl CompiledSchema {
    /// Validate `instance`, collecting every violation into one error.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| {
                    let pointer = err.instance_path.to_string();
                    if pointer.is_empty() {
                        err.to_string()
                    } else {
                        format!("{pointer}: {err}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{} failed schema validation:\n{}", self.title, details);
        }
        Ok(())
    }
}

pub(crate) fn bundled_catalog_schema() -> Result<CompiledSchema> {
    let schema: Value =
        serde_json::from_str(BUNDLED_CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
    compile(&schema, "bundled catalog schema")
}

pub(crate) fn load_json_schema(path: &Path) -> Result<CompiledSchema> {
    let schema: Value = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    )
    .with_context(|| format!("parsing schema {}", path.display()))?;
    compile(&schema, &path.display().to_string())
}

fn compile(schema: &Value, origin: &str) -> Result<CompiledSchema> {
    let title = schema
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("document")
        .to_string();
    let compiled = JSONSchema::compile(schema)
        .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
    Ok(CompiledSchema { title, compiled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_schema_accepts_bundled_catalog() {
        let schema = bundled_catalog_schema().unwrap();
        let catalog: Value = serde_json::from_str(crate::catalog::BUNDLED_CATALOG).unwrap();
        schema.validate(&catalog).unwrap();
    }

    #[test]
    fn reports_instance_pointer() {
        let schema = bundled_catalog_schema().unwrap();
        let mut entries: Vec<Value> = (0..66)
            .map(|i| json!({"name": format!("Book {i}"), "chapters": 1}))
            .collect();
        entries[4] = json!({"name": "Broken", "chapters": 0});
        let err = schema.validate(&Value::Array(entries)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Book catalog failed schema validation"));
        assert!(message.contains("/4/chapters"), "{message}");
    }

    #[test]
    fn chapter_counts_are_capped_below_one_thousand() {
        let schema = bundled_catalog_schema().unwrap();
        let mut entries: Vec<Value> = (0..66)
            .map(|i| json!({"name": format!("Book {i}"), "chapters": 999}))
            .collect();
        schema.validate(&Value::Array(entries.clone())).unwrap();

        entries[0] = json!({"name": "Wide", "chapters": 1000});
        let err = schema.validate(&Value::Array(entries)).unwrap_err();
        assert!(err.to_string().contains("/0/chapters"), "{err}");
    }
}
