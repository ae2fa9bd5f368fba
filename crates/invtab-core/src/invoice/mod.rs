//! Invoice metadata extraction.

pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::warn;

use rules::{FIELD_RULES, validate_gstin};

/// Sentinel recorded when a field's pattern finds no match.
pub const NOT_FOUND: &str = "Not Found";

/// Metadata fields extracted from one invoice document. Each value is either
/// the matched text or the [`NOT_FOUND`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    pub order_id: String,
    pub invoice_date: String,
    pub invoice_number: String,
    pub seller: String,
    pub gstin: String,
}

impl InvoiceMetadata {
    /// Field name/value pairs in canonical output column order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Order ID", &self.order_id),
            ("Invoice Date", &self.invoice_date),
            ("Invoice Number", &self.invoice_number),
            ("Seller", &self.seller),
            ("GSTIN", &self.gstin),
        ]
    }
}

/// Extracts metadata fields from full-document text via the fixed rule
/// table.
pub struct MetadataExtractor {
    validate_gstin: bool,
    not_found: String,
}

impl MetadataExtractor {
    /// Create a new extractor; captures are taken as matched, without
    /// checksum validation, and missing fields record [`NOT_FOUND`].
    pub fn new() -> Self {
        Self {
            validate_gstin: false,
            not_found: NOT_FOUND.to_string(),
        }
    }

    /// Set whether GSTIN captures must pass the mod-36 checksum.
    pub fn with_gstin_validation(mut self, validate: bool) -> Self {
        self.validate_gstin = validate;
        self
    }

    /// Override the value recorded for unmatched fields.
    pub fn with_not_found(mut self, sentinel: impl Into<String>) -> Self {
        self.not_found = sentinel.into();
        self
    }

    /// Extract all five fields from the concatenated document text.
    pub fn extract(&self, text: &str) -> InvoiceMetadata {
        let field = |name: &str| {
            FIELD_RULES
                .iter()
                .find(|r| r.name == name)
                .and_then(|r| r.apply(text))
                .unwrap_or_else(|| self.not_found.clone())
        };

        let mut gstin = field("GSTIN");
        if self.validate_gstin && gstin != self.not_found && !validate_gstin(&gstin) {
            warn!("GSTIN {} failed checksum validation", gstin);
            gstin = self.not_found.clone();
        }

        InvoiceMetadata {
            order_id: field("Order ID"),
            invoice_date: field("Invoice Date"),
            invoice_number: field("Invoice Number"),
            seller: field("Seller"),
            gstin,
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_fields() {
        let text = "Tax Invoice\n\
                    Order ID: AB123456\n\
                    Invoice Date: 01-02-2023\n\
                    Invoice Number: IN-1234/25-26\n\
                    GSTIN: 27AAPFU0939F1ZV\n\
                    Sold by: Acme Retail";

        let metadata = MetadataExtractor::new().extract(text);

        assert_eq!(metadata.order_id, "AB123456");
        assert_eq!(metadata.invoice_date, "01-02-2023");
        assert_eq!(metadata.invoice_number, "IN-1234/25-26");
        assert_eq!(metadata.gstin, "27AAPFU0939F1ZV");
        assert_eq!(metadata.seller, "Acme Retail");
    }

    #[test]
    fn missing_fields_use_sentinel() {
        let metadata = MetadataExtractor::new().extract("no labels here");

        for (_, value) in metadata.fields() {
            assert_eq!(value, NOT_FOUND);
        }
    }

    #[test]
    fn fields_are_in_canonical_order() {
        let metadata = MetadataExtractor::new().extract("");
        let names: Vec<&str> = metadata.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["Order ID", "Invoice Date", "Invoice Number", "Seller", "GSTIN"]
        );
    }

    #[test]
    fn sentinel_is_configurable() {
        let metadata = MetadataExtractor::new()
            .with_not_found("N/A")
            .extract("no labels here");

        assert_eq!(metadata.seller, "N/A");
        assert_eq!(metadata.gstin, "N/A");
    }

    #[test]
    fn gstin_validation_rejects_bad_checksum() {
        let text = "GSTIN: 27AAPFU0939F1ZA";

        let lenient = MetadataExtractor::new().extract(text);
        assert_eq!(lenient.gstin, "27AAPFU0939F1ZA");

        let strict = MetadataExtractor::new()
            .with_gstin_validation(true)
            .extract(text);
        assert_eq!(strict.gstin, NOT_FOUND);
    }

    #[test]
    fn metadata_serializes_to_json() {
        let metadata = MetadataExtractor::new().extract("Order ID: AB123456");
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"order_id\":\"AB123456\""));
    }
}
