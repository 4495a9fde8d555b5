//! Notification service contracts and their per-environment implementations
//!
//! Sends are simulated: each returns a confirmation line tagged with the
//! environment and never fails.

use super::environment::Environment;

pub trait EmailService: Send + Sync {
    fn environment(&self) -> Environment;
    fn label(&self) -> &'static str;
    fn send_email(&self, to: &str, message: &str) -> String;
}

pub trait SmsService: Send + Sync {
    fn environment(&self) -> Environment;
    fn label(&self) -> &'static str;
    fn send_sms(&self, phone: &str, message: &str) -> String;
}

pub trait PushService: Send + Sync {
    fn environment(&self) -> Environment;
    fn label(&self) -> &'static str;
    fn send_push(&self, device_id: &str, message: &str) -> String;
}

// Production: SendGrid, Twilio, Firebase

#[derive(Debug, Clone, Copy, Default)]
pub struct ProdEmailService;

impl EmailService for ProdEmailService {
    fn environment(&self) -> Environment {
        Environment::Production
    }

    fn label(&self) -> &'static str {
        "ProdEmailService"
    }

    fn send_email(&self, to: &str, message: &str) -> String {
        format!("{} Email sent to {} via SendGrid: {}", Environment::Production.tag(), to, message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProdSmsService;

impl SmsService for ProdSmsService {
    fn environment(&self) -> Environment {
        Environment::Production
    }

    fn label(&self) -> &'static str {
        "ProdSmsService"
    }

    fn send_sms(&self, phone: &str, message: &str) -> String {
        format!("{} SMS sent to {} using Twilio: {}", Environment::Production.tag(), phone, message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProdPushService;

impl PushService for ProdPushService {
    fn environment(&self) -> Environment {
        Environment::Production
    }

    fn label(&self) -> &'static str {
        "ProdPushService"
    }

    fn send_push(&self, device_id: &str, message: &str) -> String {
        format!(
            "{} Push sent to device {} using Firebase: {}",
            Environment::Production.tag(),
            device_id,
            message
        )
    }
}

// Sandbox: simulated providers

#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxEmailService;

impl EmailService for SandboxEmailService {
    fn environment(&self) -> Environment {
        Environment::Sandbox
    }

    fn label(&self) -> &'static str {
        "SandboxEmailService"
    }

    fn send_email(&self, to: &str, message: &str) -> String {
        format!("{} Simulated email to {}: {}", Environment::Sandbox.tag(), to, message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxSmsService;

impl SmsService for SandboxSmsService {
    fn environment(&self) -> Environment {
        Environment::Sandbox
    }

    fn label(&self) -> &'static str {
        "SandboxSmsService"
    }

    fn send_sms(&self, phone: &str, message: &str) -> String {
        format!("{} Simulated SMS to {}: {}", Environment::Sandbox.tag(), phone, message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxPushService;

impl PushService for SandboxPushService {
    fn environment(&self) -> Environment {
        Environment::Sandbox
    }

    fn label(&self) -> &'static str {
        "SandboxPushService"
    }

    fn send_push(&self, device_id: &str, message: &str) -> String {
        format!(
            "{} Simulated push to device {}: {}",
            Environment::Sandbox.tag(),
            device_id,
            message
        )
    }
}
