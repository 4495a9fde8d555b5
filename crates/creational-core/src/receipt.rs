//! Reference ids and timestamps shared by the payment and notification receipts

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Length of the short reference id printed on receipts
const REFERENCE_LEN: usize = 10;

/// Generate a short hex reference id for a receipt
pub fn new_reference() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(REFERENCE_LEN);
    id
}

/// Current local time, as stamped on receipts
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Format a receipt timestamp for display
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_short_hex() {
        let id = new_reference();
        assert_eq!(id.len(), REFERENCE_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_references_differ() {
        assert_ne!(new_reference(), new_reference());
    }
}
