//! Payment receipts and currency formatting

use super::creator::PaymentCreator;
use super::provider::PaymentProvider;
use crate::receipt::{format_timestamp, new_reference, now};
use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};

const NAIRA: char = '₦';

/// Format an amount as naira with thousands separators and two decimals
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, NAIRA, grouped, frac)
}

/// Record of one processed payment
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub reference: String,
    pub provider: PaymentProvider,
    pub amount: Decimal,
    pub confirmation: String,
    pub creator_label: &'static str,
    pub processor_label: &'static str,
    pub issued_at: DateTime<Local>,
}

impl PaymentReceipt {
    /// Process a payment through `creator` and record the outcome
    pub fn issue(creator: &PaymentCreator, amount: Decimal) -> Self {
        let confirmation = creator.process_payment(amount);
        Self {
            reference: new_reference(),
            provider: creator.provider(),
            amount,
            confirmation,
            creator_label: creator.label(),
            processor_label: creator.processor_label(),
            issued_at: now(),
        }
    }

    /// Receipt lines, in display order
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Transaction ID: {}", self.reference),
            format!("Provider: {}", self.provider),
            format!("Amount: {}", format_currency(self.amount)),
            format!("Timestamp: {}", format_timestamp(&self.issued_at)),
            "Status: Successful".to_string(),
        ]
    }

    /// Breakdown lines showing which creator and processor were used
    pub fn breakdown(&self) -> Vec<String> {
        vec![
            format!("Factory Used: {}", self.creator_label),
            format!("Processor Returned: {}", self.processor_label),
            format!("Amount Sent: {}", format_currency(self.amount)),
            format!("Executed At: {}", format_timestamp(&self.issued_at)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::select_creator;
    use std::str::FromStr;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(Decimal::from(0)), "₦0.00");
        assert_eq!(format_currency(Decimal::from(999)), "₦999.00");
        assert_eq!(format_currency(Decimal::from(1000)), "₦1,000.00");
        assert_eq!(
            format_currency(Decimal::from_str("1234567.891").unwrap()),
            "₦1,234,567.89"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Decimal::from(-1500)), "-₦1,500.00");
        assert_eq!(format_currency(Decimal::from_str("-0.001").unwrap()), "₦0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::from_str("0.125").unwrap()), "₦0.13");
        assert_eq!(format_currency(Decimal::from_str("1500.125").unwrap()), "₦1,500.13");
        assert_eq!(format_currency(Decimal::from_str("-0.125").unwrap()), "-₦0.13");
    }

    #[test]
    fn test_bank_transfer_confirmation_rounds_half_away_from_zero() {
        let creator = select_creator(PaymentProvider::BankTransfer);
        assert_eq!(
            creator.process_payment(Decimal::from_str("1500.125").unwrap()),
            "Processing ₦1,500.13 via Direct Bank Transfer..."
        );
    }

    #[test]
    fn test_receipt_records_labels() {
        let creator = select_creator(PaymentProvider::Stripe);
        let receipt = PaymentReceipt::issue(&creator, Decimal::from(42));
        assert_eq!(receipt.creator_label, "StripeFactory");
        assert_eq!(receipt.processor_label, "StripeProcessor");
        assert!(receipt.confirmation.contains("Stripe"));
        assert!(receipt.lines()[1].ends_with("Stripe"));
        assert!(receipt.breakdown()[0].ends_with("StripeFactory"));
    }
}
