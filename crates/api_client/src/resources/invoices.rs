//! Invoices managed from the back office.

use super::{orders::default_currency, Collection};
use crate::{
    forms::{FieldErrors, Validate},
    ApiClient,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Issued,
    Paid,
    Overdue,
    Void,
}

impl InvoiceStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Issued,
        Self::Paid,
        Self::Overdue,
        Self::Void,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Void => "void",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub order_id: Option<String>,
    pub customer_email: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub issued_at: String,
    #[serde(default)]
    pub due_at: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub customer_email: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            order_id: None,
            customer_email: String::new(),
            amount: 0.0,
            currency: default_currency(),
            status: InvoiceStatus::Draft,
            due_at: None,
        }
    }
}

impl From<&Invoice> for InvoiceDraft {
    fn from(invoice: &Invoice) -> Self {
        Self {
            order_id: invoice.order_id.clone(),
            customer_email: invoice.customer_email.clone(),
            amount: invoice.amount,
            currency: invoice.currency.clone(),
            status: invoice.status,
            due_at: invoice.due_at.clone(),
        }
    }
}

impl Validate for InvoiceDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.email("customer_email", &self.customer_email);
        errors.check(
            "amount",
            self.amount.is_finite() && self.amount > 0.0,
            "Amount must be greater than zero.",
        );
        errors.check(
            "currency",
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase()),
            "Use a three-letter currency code such as USD.",
        );
        errors.into_result()
    }
}

impl ApiClient {
    #[must_use]
    pub fn invoices(&self) -> Collection<'_, Invoice, InvoiceDraft> {
        Collection::new(self, "/invoices")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_draft_validation() {
        let draft = InvoiceDraft {
            customer_email: "billing@acme.io".to_string(),
            amount: 0.0,
            currency: "usd".to_string(),
            ..InvoiceDraft::default()
        };
        let Err(errors) = draft.validate() else {
            panic!("expected errors");
        };
        assert!(errors.get("amount").is_some());
        assert!(errors.get("currency").is_some());
        assert!(errors.get("customer_email").is_none());
    }

    #[test]
    fn status_round_trips_wire_names() {
        for status in InvoiceStatus::ALL {
            assert_eq!(InvoiceStatus::parse(status.as_str()), Some(status));
        }
    }
}
