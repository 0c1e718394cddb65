//! Source column to target field mapping.

use serde::{Deserialize, Serialize};

/// Spreadsheet header → record field for the sales dataset, in sheet order.
pub const SALES_COLUMNS: &[(&str, &str)] = &[
    ("Transaction ID", "transactionId"),
    ("Date", "date"),
    ("Customer ID", "customerId"),
    ("Customer Name", "customerName"),
    ("Phone Number", "phoneNumber"),
    ("Gender", "gender"),
    ("Age", "age"),
    ("Customer Region", "customerRegion"),
    ("Customer Type", "customerType"),
    ("Product ID", "productId"),
    ("Product Name", "productName"),
    ("Brand", "brand"),
    ("Product Category", "productCategory"),
    ("Tags", "tags"),
    ("Quantity", "quantity"),
    ("Price per Unit", "pricePerUnit"),
    ("Discount Percentage", "discountPercentage"),
    ("Total Amount", "totalAmount"),
    ("Final Amount", "finalAmount"),
    ("Payment Method", "paymentMethod"),
    ("Order Status", "orderStatus"),
    ("Delivery Type", "deliveryType"),
    ("Store ID", "storeId"),
    ("Store Location", "storeLocation"),
    ("Salesperson ID", "salespersonId"),
    ("Employee Name", "employeeName"),
];

/// One mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Header text in the source sheet (exact, case-sensitive).
    pub source: String,
    /// Field name in the output record.
    pub target: String,
}

/// Ordered source → target column mapping.
///
/// Lookups are exact: `"tags"` does not match a `"Tags"` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    rules: Vec<ColumnRule>,
}

impl ColumnMapping {
    pub fn new<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            rules: entries
                .into_iter()
                .map(|(source, target)| ColumnRule {
                    source: source.into(),
                    target: target.into(),
                })
                .collect(),
        }
    }

    /// The built-in sales schema ([`SALES_COLUMNS`]).
    pub fn sales() -> Self {
        Self::new(SALES_COLUMNS.iter().copied())
    }

    /// Target field for a source column, if mapped.
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.source == source)
            .map(|rule| rule.target.as_str())
    }

    pub fn rules(&self) -> &[ColumnRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
