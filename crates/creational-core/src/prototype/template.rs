//! Email template prototype

use serde::{Deserialize, Serialize};
use std::fmt;

/// Company branding attached to a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailBranding {
    pub company_name: String,
    pub footer: String,
}

/// An email template.
///
/// Every field is owned, so `clone()` is a full deep copy: a clone shares
/// no branding or tag storage with its source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Label such as "WelcomeEmail"
    pub name: String,
    pub subject: String,
    /// May contain `{{Token}}` placeholders
    pub body: String,
    #[serde(default)]
    pub branding: EmailBranding,
    /// Insertion order is kept and duplicates are allowed
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EmailTemplate {
    /// Replace every `{{token}}` in the subject and body with `value`
    pub fn fill_placeholder(&mut self, token: &str, value: &str) -> &mut Self {
        let placeholder = format!("{{{{{}}}}}", token);
        self.subject = self.subject.replace(&placeholder, value);
        self.body = self.body.replace(&placeholder, value);
        self
    }

    /// Placeholder tokens still present in the body, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = self.body.as_str();
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let token = &after[..end];
                    if !found.contains(&token) {
                        found.push(token);
                    }
                    rest = &after[end + 2..];
                }
                None => break,
            }
        }
        found
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(", ")
        };
        writeln!(f, "Template: {}", self.name)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f, "Brand: {}", self.branding.company_name)?;
        writeln!(f, "Footer: {}", self.branding.footer)?;
        writeln!(f, "Tags: {}", tags)?;
        write!(f, "Body:\n{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmailTemplate {
        EmailTemplate {
            name: "WelcomeEmail".into(),
            subject: "Welcome, {{Name}}".into(),
            body: "Hi {{Name}}, your code is {{Code}}. Bye {{Name}}.".into(),
            branding: EmailBranding {
                company_name: "Schedula Inc".into(),
                footer: "footer".into(),
            },
            tags: vec!["welcome".into(), "welcome".into()],
        }
    }

    #[test]
    fn test_fill_placeholder_replaces_all() {
        let mut t = sample();
        t.fill_placeholder("Name", "Angelo");
        assert_eq!(t.subject, "Welcome, Angelo");
        assert_eq!(t.body, "Hi Angelo, your code is {{Code}}. Bye Angelo.");
    }

    #[test]
    fn test_placeholders_listed_once() {
        assert_eq!(sample().placeholders(), vec!["Name", "Code"]);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        copy.branding.footer.push_str(" changed");
        copy.tags.push("vip".into());
        assert_eq!(original.branding.footer, "footer");
        assert_eq!(original.tags.len(), 2);
    }

    #[test]
    fn test_display_without_tags() {
        let mut t = sample();
        t.tags.clear();
        let text = t.to_string();
        assert!(text.contains("Tags: -"));
        assert!(text.starts_with("Template: WelcomeEmail\n"));
        assert!(text.ends_with("Bye {{Name}}."));
    }
}
