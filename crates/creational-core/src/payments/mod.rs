//! Payment gateway selection (Factory Method)
//!
//! A [`PaymentProvider`] is handed to [`select_creator`], which returns the
//! [`PaymentCreator`] for that provider. The creator owns the decision of
//! which [`PaymentProcessor`] to build and never produces another
//! provider's processor.

pub mod creator;
pub mod processor;
pub mod provider;
pub mod receipt;

pub use creator::{select_creator, PaymentCreator};
pub use processor::{
    BankTransferProcessor, FlutterWaveProcessor, PayStackProcessor, PaymentProcessor,
    StripeProcessor,
};
pub use provider::PaymentProvider;
pub use receipt::{format_currency, PaymentReceipt};
