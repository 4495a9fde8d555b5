//! Registry of named prototypes that hands out clones on demand

use super::template::EmailTemplate;
use crate::error::{CreationError, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

struct Entry<T> {
    /// Key as last registered, kept for display
    key: String,
    prototype: T,
}

/// Baseline prototypes keyed case-insensitively.
///
/// Keys are stored lower-cased. The map sits behind a mutex so a shared
/// registry can be used from several threads; clones are independent once
/// returned.
pub struct PrototypeRegistry<T = EmailTemplate> {
    prototypes: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            prototypes: Mutex::new(HashMap::new()),
        }
    }

    fn normalize(key: &str) -> String {
        key.to_lowercase()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<T>>> {
        // Every operation leaves the map consistent, so a poisoned lock is still usable
        self.prototypes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `prototype` under `key`, replacing any previous baseline
    pub fn register(&self, key: &str, prototype: T) -> Result<()> {
        if key.trim().is_empty() {
            return Err(CreationError::InvalidKey);
        }

        let replaced = self
            .lock()
            .insert(
                Self::normalize(key),
                Entry {
                    key: key.to_string(),
                    prototype,
                },
            )
            .is_some();
        debug!(key, replaced, "registered prototype");
        Ok(())
    }

    /// Deep copy of the baseline registered under `key`
    pub fn create_clone(&self, key: &str) -> Result<T> {
        match self.lock().get(&Self::normalize(key)) {
            Some(entry) => {
                debug!(key, "cloned prototype");
                Ok(entry.prototype.clone())
            }
            None => {
                warn!(key, "prototype not found");
                Err(CreationError::NotFound {
                    key: key.to_string(),
                })
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(&Self::normalize(key))
    }

    /// Registered keys, as last registered, sorted case-insensitively
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().values().map(|e| e.key.clone()).collect();
        keys.sort_by_key(|k| k.to_lowercase());
        keys
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::EmailBranding;
    use std::sync::Arc;
    use std::thread;

    fn welcome() -> EmailTemplate {
        EmailTemplate {
            name: "WelcomeEmail".into(),
            subject: "Welcome to Schedula".into(),
            body: "Hi {{Name}}".into(),
            branding: EmailBranding {
                company_name: "Schedula Inc".into(),
                footer: "© 2026 Schedula. All rights reserved.".into(),
            },
            tags: vec!["transactional".into(), "welcome".into()],
        }
    }

    #[test]
    fn test_clones_are_independent() {
        let registry = PrototypeRegistry::new();
        registry.register("Welcome", welcome()).unwrap();

        let mut a = registry.create_clone("Welcome").unwrap();
        let b = registry.create_clone("Welcome").unwrap();
        assert_eq!(a, b);

        a.tags.push("vip".into());
        a.branding.footer = "Angelo footer test".into();

        assert_eq!(b.tags, vec!["transactional", "welcome"]);
        assert_eq!(b.branding.footer, welcome().branding.footer);

        let c = registry.create_clone("Welcome").unwrap();
        assert_eq!(c, welcome());
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let registry: PrototypeRegistry = PrototypeRegistry::new();
        match registry.create_clone("unknown") {
            Err(CreationError::NotFound { key }) => assert_eq!(key, "unknown"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_key_rejected_without_mutation() {
        let registry = PrototypeRegistry::new();
        assert!(matches!(registry.register("", welcome()), Err(CreationError::InvalidKey)));
        assert!(matches!(registry.register("   ", welcome()), Err(CreationError::InvalidKey)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_ignores_case() {
        let registry = PrototypeRegistry::new();
        registry.register("Welcome", welcome()).unwrap();
        assert!(registry.contains("welcome"));
        assert!(registry.contains("WELCOME"));
        assert!(registry.create_clone("wElCoMe").is_ok());
        assert!(!registry.contains("goodbye"));
    }

    #[test]
    fn test_last_write_wins() {
        let registry = PrototypeRegistry::new();
        registry.register("Welcome", welcome()).unwrap();
        let earlier = registry.create_clone("Welcome").unwrap();

        let mut updated = welcome();
        updated.subject = "Updated".into();
        registry.register("WELCOME", updated).unwrap();

        assert_eq!(earlier, welcome());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.create_clone("welcome").unwrap().subject, "Updated");
        assert_eq!(registry.keys(), vec!["WELCOME"]);
    }

    #[test]
    fn test_keys_sorted() {
        let registry = PrototypeRegistry::new();
        registry.register("b", 2).unwrap();
        registry.register("A", 1).unwrap();
        registry.register("c", 3).unwrap();
        assert_eq!(registry.keys(), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(PrototypeRegistry::new());
        registry.register("Welcome", welcome()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.register(&format!("key-{i}"), welcome()).unwrap();
                    let mut clone = registry.create_clone("Welcome").unwrap();
                    clone.tags.push(format!("thread-{i}"));
                    clone
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().tags.len(), 3);
        }
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.create_clone("welcome").unwrap(), welcome());
    }
}
