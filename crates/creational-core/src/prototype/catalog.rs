//! Bundled baseline templates

use super::registry::PrototypeRegistry;
use super::template::EmailTemplate;
use crate::error::{CreationError, Result};
use serde::Deserialize;

const BUNDLED_CATALOG: &str = include_str!("catalog.yaml");

#[derive(Debug, Deserialize)]
struct Catalog {
    templates: Vec<EmailTemplate>,
}

/// Parse a YAML template catalog
pub fn parse_catalog(yaml: &str) -> Result<Vec<EmailTemplate>> {
    let catalog: Catalog = serde_yaml::from_str(yaml).map_err(|source| CreationError::Catalog {
        what: "email template",
        source,
    })?;
    Ok(catalog.templates)
}

/// Templates shipped with the crate
pub fn default_templates() -> Result<Vec<EmailTemplate>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// A registry holding every bundled template, keyed by template name
pub fn default_registry() -> Result<PrototypeRegistry> {
    let registry = PrototypeRegistry::new();
    for template in default_templates()? {
        let key = template.name.clone();
        registry.register(&key, template)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let templates = default_templates().unwrap();
        let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["WelcomeEmail", "PasswordReset", "InvoiceReady"]);
        assert_eq!(templates[0].tags, vec!["transactional", "welcome"]);
        assert!(templates[0].body.starts_with("Hi {{Name}},"));
        assert_eq!(templates[0].branding.company_name, "Schedula Inc");
    }

    #[test]
    fn test_default_registry() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("welcomeemail"));
        assert_eq!(registry.keys(), vec!["InvoiceReady", "PasswordReset", "WelcomeEmail"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let templates = parse_catalog(
            "templates:\n  - name: Bare\n    subject: S\n    body: B\n",
        )
        .unwrap();
        assert!(templates[0].tags.is_empty());
        assert_eq!(templates[0].branding.footer, "");
    }

    #[test]
    fn test_malformed_catalog() {
        let err = parse_catalog("templates: 5").unwrap_err();
        assert!(matches!(err, CreationError::Catalog { .. }));
    }
}
