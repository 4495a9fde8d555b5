//! Payment provider selector values

use crate::error::CreationError;
use std::fmt;
use std::str::FromStr;

/// Supported payment gateways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentProvider {
    PayStack,
    FlutterWave,
    Stripe,
    BankTransfer,
}

impl PaymentProvider {
    /// All providers in menu order
    pub const ALL: [PaymentProvider; 4] = [
        PaymentProvider::PayStack,
        PaymentProvider::FlutterWave,
        PaymentProvider::Stripe,
        PaymentProvider::BankTransfer,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentProvider::PayStack => "PayStack",
            PaymentProvider::FlutterWave => "FlutterWave",
            PaymentProvider::Stripe => "Stripe",
            PaymentProvider::BankTransfer => "Bank Transfer",
        }
    }

    /// Menu code (1-based) for this provider
    pub fn code(&self) -> u8 {
        match self {
            PaymentProvider::PayStack => 1,
            PaymentProvider::FlutterWave => 2,
            PaymentProvider::Stripe => 3,
            PaymentProvider::BankTransfer => 4,
        }
    }
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl TryFrom<u8> for PaymentProvider {
    type Error = CreationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| CreationError::invalid_selector("payment provider", code))
    }
}

impl FromStr for PaymentProvider {
    type Err = CreationError;

    /// Parse a provider name, ignoring case, spaces, dashes and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "paystack" => Ok(PaymentProvider::PayStack),
            "flutterwave" => Ok(PaymentProvider::FlutterWave),
            "stripe" => Ok(PaymentProvider::Stripe),
            "banktransfer" | "bank" => Ok(PaymentProvider::BankTransfer),
            _ => Err(CreationError::invalid_selector("payment provider", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_menu_numbers() {
        for provider in PaymentProvider::ALL {
            assert_eq!(PaymentProvider::try_from(provider.code()).unwrap(), provider);
        }
    }

    #[test]
    fn test_unknown_code_is_invalid_selector() {
        for code in [0u8, 5, 255] {
            let err = PaymentProvider::try_from(code).unwrap_err();
            assert!(matches!(err, CreationError::InvalidSelector { .. }));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("PayStack".parse::<PaymentProvider>().unwrap(), PaymentProvider::PayStack);
        assert_eq!(
            "flutter-wave".parse::<PaymentProvider>().unwrap(),
            PaymentProvider::FlutterWave
        );
        assert_eq!("STRIPE".parse::<PaymentProvider>().unwrap(), PaymentProvider::Stripe);
        assert_eq!(
            "bank_transfer".parse::<PaymentProvider>().unwrap(),
            PaymentProvider::BankTransfer
        );
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "paypal".parse::<PaymentProvider>().unwrap_err();
        match err {
            CreationError::InvalidSelector { value, .. } => assert_eq!(value, "paypal"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
