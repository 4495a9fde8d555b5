//! Multi-channel notification dispatch (Abstract Factory)
//!
//! [`select_factory`] maps an [`Environment`] to a [`NotificationFactory`]
//! that builds email, SMS and push services for that environment only.
//! A [`NotificationFamily`] bundles the three services built by one factory.

pub mod environment;
pub mod factory;
pub mod family;
pub mod services;

pub use environment::Environment;
pub use factory::{
    select_factory, NotificationFactory, ProdNotificationFactory, SandboxNotificationFactory,
};
pub use family::{NotificationFamily, NotificationReceipt, NotificationType, Recipients};
pub use services::{EmailService, PushService, SmsService};
