//! Notification factories: one per environment, each building a matched family

use super::environment::Environment;
use super::services::{
    EmailService, ProdEmailService, ProdPushService, ProdSmsService, PushService,
    SandboxEmailService, SandboxPushService, SandboxSmsService, SmsService,
};
use tracing::debug;

/// Abstract factory for the three notification services.
///
/// Every service an implementation returns must report the factory's own
/// [`Environment`].
pub trait NotificationFactory: Send + Sync {
    fn environment(&self) -> Environment;

    /// Human-readable factory label, shown on breakdown screens
    fn label(&self) -> &'static str;

    fn create_email_service(&self) -> Box<dyn EmailService>;
    fn create_sms_service(&self) -> Box<dyn SmsService>;
    fn create_push_service(&self) -> Box<dyn PushService>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProdNotificationFactory;

impl NotificationFactory for ProdNotificationFactory {
    fn environment(&self) -> Environment {
        Environment::Production
    }

    fn label(&self) -> &'static str {
        "ProdNotificationFactory"
    }

    fn create_email_service(&self) -> Box<dyn EmailService> {
        Box::new(ProdEmailService)
    }

    fn create_sms_service(&self) -> Box<dyn SmsService> {
        Box::new(ProdSmsService)
    }

    fn create_push_service(&self) -> Box<dyn PushService> {
        Box::new(ProdPushService)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxNotificationFactory;

impl NotificationFactory for SandboxNotificationFactory {
    fn environment(&self) -> Environment {
        Environment::Sandbox
    }

    fn label(&self) -> &'static str {
        "SandboxNotificationFactory"
    }

    fn create_email_service(&self) -> Box<dyn EmailService> {
        Box::new(SandboxEmailService)
    }

    fn create_sms_service(&self) -> Box<dyn SmsService> {
        Box::new(SandboxSmsService)
    }

    fn create_push_service(&self) -> Box<dyn PushService> {
        Box::new(SandboxPushService)
    }
}

/// Resolve the notification factory for an environment
pub fn select_factory(environment: Environment) -> Box<dyn NotificationFactory> {
    debug!(%environment, "selected notification factory");
    match environment {
        Environment::Production => Box::new(ProdNotificationFactory),
        Environment::Sandbox => Box::new(SandboxNotificationFactory),
    }
}
