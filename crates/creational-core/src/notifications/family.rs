//! A resolved notification family and the dispatch helpers built on it

use super::environment::Environment;
use super::factory::NotificationFactory;
use super::services::{EmailService, PushService, SmsService};
use crate::error::CreationError;
use crate::receipt::{format_timestamp, new_reference, now};
use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

/// Which channel(s) to notify through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Email,
    Sms,
    PushNotification,
    All,
}

impl NotificationType {
    pub const ALL: [NotificationType; 4] = [
        NotificationType::Email,
        NotificationType::Sms,
        NotificationType::PushNotification,
        NotificationType::All,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationType::Email => "Email",
            NotificationType::Sms => "SMS",
            NotificationType::PushNotification => "Push Notification",
            NotificationType::All => "All",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            NotificationType::Email => 1,
            NotificationType::Sms => 2,
            NotificationType::PushNotification => 3,
            NotificationType::All => 4,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for NotificationType {
    type Error = CreationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| CreationError::invalid_selector("notification type", code))
    }
}

impl FromStr for NotificationType {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(NotificationType::Email),
            "sms" => Ok(NotificationType::Sms),
            "push" | "pushnotification" => Ok(NotificationType::PushNotification),
            "all" => Ok(NotificationType::All),
            _ => Err(CreationError::invalid_selector("notification type", s)),
        }
    }
}

/// Destinations and message bodies for a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients {
    pub email: String,
    pub email_message: String,
    pub phone: String,
    pub sms_message: String,
    pub device_id: String,
    pub push_message: String,
}

impl Default for Recipients {
    fn default() -> Self {
        Self {
            email: "test@example.com".to_string(),
            email_message: "Hello from Abstract Factory!".to_string(),
            phone: "+2348012345678".to_string(),
            sms_message: "Your OTP is 1234".to_string(),
            device_id: "device-010101".to_string(),
            push_message: "New message received".to_string(),
        }
    }
}

/// The three services built by a single factory
pub struct NotificationFamily {
    environment: Environment,
    factory_label: &'static str,
    email: Box<dyn EmailService>,
    sms: Box<dyn SmsService>,
    push: Box<dyn PushService>,
}

impl NotificationFamily {
    /// Build all three services from one factory
    pub fn from_factory(factory: &dyn NotificationFactory) -> Self {
        Self {
            environment: factory.environment(),
            factory_label: factory.label(),
            email: factory.create_email_service(),
            sms: factory.create_sms_service(),
            push: factory.create_push_service(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn factory_label(&self) -> &'static str {
        self.factory_label
    }

    pub fn email(&self) -> &dyn EmailService {
        self.email.as_ref()
    }

    pub fn sms(&self) -> &dyn SmsService {
        self.sms.as_ref()
    }

    pub fn push(&self) -> &dyn PushService {
        self.push.as_ref()
    }

    /// Send through the selected channel(s); confirmations come back in
    /// email, SMS, push order
    pub fn dispatch(&self, kind: NotificationType, to: &Recipients) -> Vec<String> {
        let email = || self.email.send_email(&to.email, &to.email_message);
        let sms = || self.sms.send_sms(&to.phone, &to.sms_message);
        let push = || self.push.send_push(&to.device_id, &to.push_message);

        match kind {
            NotificationType::Email => vec![email()],
            NotificationType::Sms => vec![sms()],
            NotificationType::PushNotification => vec![push()],
            NotificationType::All => vec![email(), sms(), push()],
        }
    }
}

/// Record of one dispatch
#[derive(Debug, Clone)]
pub struct NotificationReceipt {
    pub reference: String,
    pub environment: Environment,
    pub kind: NotificationType,
    pub confirmations: Vec<String>,
    pub factory_label: &'static str,
    pub service_labels: [&'static str; 3],
    pub sent_at: DateTime<Local>,
}

impl NotificationReceipt {
    /// Dispatch through `family` and record the outcome
    pub fn issue(family: &NotificationFamily, kind: NotificationType, to: &Recipients) -> Self {
        Self {
            reference: new_reference(),
            environment: family.environment(),
            kind,
            confirmations: family.dispatch(kind, to),
            factory_label: family.factory_label(),
            service_labels: [
                family.email().label(),
                family.sms().label(),
                family.push().label(),
            ],
            sent_at: now(),
        }
    }

    /// The last confirmation sent
    pub fn last_message(&self) -> &str {
        self.confirmations.last().map(String::as_str).unwrap_or("-")
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Environment: {}", self.environment),
            format!("Notification Type: {}", self.kind),
            format!("Message: {}", self.last_message()),
            format!("Timestamp: {}", format_timestamp(&self.sent_at)),
            format!("Reference ID: {}", self.reference),
        ]
    }

    pub fn breakdown(&self) -> Vec<String> {
        vec![
            format!("Factory Used: {}", self.factory_label),
            format!("Email Service: {}", self.service_labels[0]),
            format!("SMS Service: {}", self.service_labels[1]),
            format!("Push Service: {}", self.service_labels[2]),
            format!("Last Notification Sent: {}", self.kind),
            format!("Sent At: {}", format_timestamp(&self.sent_at)),
        ]
    }
}
