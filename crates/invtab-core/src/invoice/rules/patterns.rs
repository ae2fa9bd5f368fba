//! Regex patterns for invoice metadata extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Marketplace order reference, e.g. "Order ID: 408-1234567-1234567"
    pub static ref ORDER_ID: Regex = Regex::new(
        r"(?i)Order\s*ID[:\s]*([A-Z0-9-]{6,})"
    ).unwrap();

    // Invoice date in DD-MM-YYYY form
    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"(?i)Invoice\s*Date[:\s]*([0-9]{2}-[0-9]{2}-[0-9]{4})"
    ).unwrap();

    // Invoice number, e.g. "Invoice Number: IN-1234/25-26"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)Invoice\s*Number[:\s]*([A-Z0-9\-/]+)"
    ).unwrap();

    // Seller name after the "Sold by" label
    pub static ref SELLER: Regex = Regex::new(
        r"(?i)Sold\s+by[:\s]*([\w\s&.-]+)"
    ).unwrap();

    // GSTIN: 15-character Indian tax identifier
    pub static ref GSTIN: Regex = Regex::new(
        r"(?i)GSTIN[:\s]*([0-9A-Z]{15})"
    ).unwrap();
}
