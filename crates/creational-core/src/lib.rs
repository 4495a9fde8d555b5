//! Creational Core - object creation layer for the creational patterns walkthrough
//!
//! This library maps selector values to fully formed objects and object
//! families. It is consumed by the `creational` console binary, which adds
//! menus and explanations on top.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Creation Core** - `payments` (Factory Method), `notifications`
//!   (Abstract Factory), `builder` (Builder) and `prototype` (Prototype)
//! - **Layer 2: Ambient** - `config` singleton, bundled `explanation`s, colored `render`ing
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based menus (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive menus
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use creational_core::payments::{select_creator, PaymentProvider};
//! use creational_core::prototype::default_registry;
//!
//! let creator = select_creator("stripe".parse::<PaymentProvider>()?);
//! println!("{}", creator.process_payment(rust_decimal::Decimal::from(100)));
//!
//! let registry = default_registry()?;
//! let mut email = registry.create_clone("welcomeemail")?;
//! email.fill_placeholder("Name", "Angelo");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod explanation;
pub mod notifications;
pub mod payments;
pub mod prototype;
pub mod receipt;
pub mod render;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use builder::{Computer, ComputerBuilder, ComputerDirector, Profile};
pub use config::AppConfig;
pub use error::{CreationError, Result};
pub use explanation::{Pattern, PatternExplanation};
pub use notifications::{select_factory, Environment, NotificationFactory, NotificationFamily};
pub use payments::{select_creator, PaymentCreator, PaymentProvider};
pub use prototype::{EmailTemplate, PrototypeRegistry};

#[cfg(feature = "tui")]
pub use tui::run;
