//! Email template cloning (Prototype)
//!
//! Baseline [`EmailTemplate`]s are registered in a [`PrototypeRegistry`]
//! and handed out as independent deep copies.

pub mod catalog;
pub mod registry;
pub mod template;

pub use catalog::{default_registry, default_templates, parse_catalog};
pub use registry::PrototypeRegistry;
pub use template::{EmailBranding, EmailTemplate};
