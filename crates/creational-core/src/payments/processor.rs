//! Concrete payment processors
//!
//! Each processor simulates a gateway call by formatting a confirmation line.
//! No amount validation happens here; callers reject non-positive amounts.

use super::provider::PaymentProvider;
use super::receipt::format_currency;
use rust_decimal::Decimal;

/// Product interface for payment gateways
pub trait PaymentProcessor: Send + Sync {
    /// Provider this processor talks to
    fn provider(&self) -> PaymentProvider;

    /// Human-readable type label, shown on breakdown screens
    fn label(&self) -> &'static str;

    /// Process a payment and return the confirmation text
    fn process(&self, amount: Decimal) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayStackProcessor;

impl PaymentProcessor for PayStackProcessor {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::PayStack
    }

    fn label(&self) -> &'static str {
        "PayStackProcessor"
    }

    fn process(&self, amount: Decimal) -> String {
        format!("Processing ₦{} using PayStack gateway...", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlutterWaveProcessor;

impl PaymentProcessor for FlutterWaveProcessor {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::FlutterWave
    }

    fn label(&self) -> &'static str {
        "FlutterWaveProcessor"
    }

    fn process(&self, amount: Decimal) -> String {
        format!("Processing ₦{} using FlutterWave gateway...", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StripeProcessor;

impl PaymentProcessor for StripeProcessor {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Stripe
    }

    fn label(&self) -> &'static str {
        "StripeProcessor"
    }

    fn process(&self, amount: Decimal) -> String {
        format!("Processing ${} using Stripe gateway...", amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn provider(&self) -> PaymentProvider {
        PaymentProvider::BankTransfer
    }

    fn label(&self) -> &'static str {
        "BankTransferProcessor"
    }

    fn process(&self, amount: Decimal) -> String {
        format!(
            "Processing {} via Direct Bank Transfer...",
            format_currency(amount)
        )
    }
}
