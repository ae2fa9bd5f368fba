//! Rule-based metadata field extraction.

pub mod gstin;
pub mod patterns;

pub use gstin::validate_gstin;

use lazy_static::lazy_static;
use regex::Regex;

use patterns::{GSTIN, INVOICE_DATE, INVOICE_NUMBER, ORDER_ID, SELLER};

/// A metadata extraction rule: the output field name and the
/// case-insensitive pattern whose first capture group yields the value.
pub struct FieldRule {
    /// Output column name for the field.
    pub name: &'static str,
    /// Pattern applied against the full document text.
    pub pattern: &'static Regex,
}

impl FieldRule {
    /// First capture of the first match, trimmed of whitespace.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }
}

lazy_static! {
    /// Fixed field table applied to every document, in output column order.
    pub static ref FIELD_RULES: [FieldRule; 5] = [
        FieldRule { name: "Order ID", pattern: &ORDER_ID },
        FieldRule { name: "Invoice Date", pattern: &INVOICE_DATE },
        FieldRule { name: "Invoice Number", pattern: &INVOICE_NUMBER },
        FieldRule { name: "Seller", pattern: &SELLER },
        FieldRule { name: "GSTIN", pattern: &GSTIN },
    ];
}
