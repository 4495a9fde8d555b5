//! Payment creators: the Factory Method layer

use super::processor::{
    BankTransferProcessor, FlutterWaveProcessor, PayStackProcessor, PaymentProcessor,
    StripeProcessor,
};
use super::provider::PaymentProvider;
use rust_decimal::Decimal;
use tracing::debug;

/// Creator bound to one payment provider.
///
/// Only obtainable through [`select_creator`]. The processor it builds is
/// always derived from its own provider tag, so a creator can never hand
/// out another provider's processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentCreator {
    provider: PaymentProvider,
}

impl PaymentCreator {
    pub fn provider(&self) -> PaymentProvider {
        self.provider
    }

    /// Human-readable creator label, shown on breakdown screens
    pub fn label(&self) -> &'static str {
        match self.provider {
            PaymentProvider::PayStack => "PayStackFactory",
            PaymentProvider::FlutterWave => "FlutterWaveFactory",
            PaymentProvider::Stripe => "StripeFactory",
            PaymentProvider::BankTransfer => "BankTransferFactory",
        }
    }

    /// Label of the processor this creator builds
    pub fn processor_label(&self) -> &'static str {
        match self.provider {
            PaymentProvider::PayStack => "PayStackProcessor",
            PaymentProvider::FlutterWave => "FlutterWaveProcessor",
            PaymentProvider::Stripe => "StripeProcessor",
            PaymentProvider::BankTransfer => "BankTransferProcessor",
        }
    }

    /// Factory method: build a fresh processor for this creator's provider
    pub fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        match self.provider {
            PaymentProvider::PayStack => Box::new(PayStackProcessor),
            PaymentProvider::FlutterWave => Box::new(FlutterWaveProcessor),
            PaymentProvider::Stripe => Box::new(StripeProcessor),
            PaymentProvider::BankTransfer => Box::new(BankTransferProcessor),
        }
    }

    /// Process a payment through a newly created processor.
    ///
    /// A new processor is resolved on every call. The amount is passed
    /// through as-is.
    pub fn process_payment(&self, amount: Decimal) -> String {
        let processor = self.create_processor();
        debug!(
            creator = self.label(),
            processor = processor.label(),
            %amount,
            "processing payment"
        );
        processor.process(amount)
    }
}

/// Resolve the creator for a payment provider
pub fn select_creator(provider: PaymentProvider) -> PaymentCreator {
    debug!(%provider, "selected payment creator");
    PaymentCreator { provider }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_produces_matching_processor() {
        for provider in PaymentProvider::ALL {
            let creator = select_creator(provider);
            assert_eq!(creator.provider(), provider);
            assert_eq!(creator.create_processor().provider(), provider);
        }
    }

    #[test]
    fn test_confirmation_names_only_its_provider() {
        let names = ["PayStack", "FlutterWave", "Stripe", "Bank Transfer"];
        for provider in PaymentProvider::ALL {
            let text = select_creator(provider).process_payment(Decimal::from(100));
            for name in names {
                if name == provider.display_name() {
                    assert!(text.contains(name), "{text} should name {name}");
                } else {
                    assert!(!text.contains(name), "{text} should not name {name}");
                }
            }
        }
    }

    #[test]
    fn test_labels_pair_up() {
        for provider in PaymentProvider::ALL {
            let creator = select_creator(provider);
            let creator_stem = creator.label().trim_end_matches("Factory");
            let processor_stem = creator
                .create_processor()
                .label()
                .trim_end_matches("Processor")
                .to_string();
            assert_eq!(creator_stem, processor_stem);
        }
    }

    #[test]
    fn test_processor_label_matches_created_processor() {
        for provider in PaymentProvider::ALL {
            let creator = select_creator(provider);
            assert_eq!(creator.processor_label(), creator.create_processor().label());
        }
    }
}
