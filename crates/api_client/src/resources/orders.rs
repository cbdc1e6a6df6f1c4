//! Customer orders. Customers can list, inspect and place orders; status
//! changes happen in the back office of the backend.

use super::path_segment;
use crate::{
    forms::{FieldErrors, Validate},
    pagination::{PageRequest, Paginated},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validate for OrderDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(
            "service_id",
            !self.service_id.trim().is_empty(),
            "Choose a service.",
        );
        if let Some(notes) = &self.notes {
            errors.max_len("notes", notes, 2000);
        }
        errors.into_result()
    }
}

impl ApiClient {
    /// Orders of the signed-in customer.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn orders(&self, page: &PageRequest) -> Result<Paginated<Order>, Error> {
        self.get_with_query("/orders", &page.to_query()).await
    }

    /// # Errors
    /// Returns `Error::Config` for a blank id, otherwise transport, HTTP or decoding errors.
    pub async fn order(&self, id: &str) -> Result<Order, Error> {
        self.get(&format!("/orders/{}", path_segment(id)?)).await
    }

    /// # Errors
    /// Returns `Error::Validation` for an invalid draft, otherwise the backend's error.
    pub async fn place_order(&self, draft: &OrderDraft) -> Result<Order, Error> {
        draft.validate()?;
        self.post("/orders", draft).await
    }
}
