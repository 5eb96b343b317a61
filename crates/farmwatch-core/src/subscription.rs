//! Subscription value objects.
//!
//! Requests are validated for shape only: every field must be present and be a
//! string. Region existence and phone format are not checked.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscriptionRequest {
    pub region_id: String,
    pub phone: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionAck {
    pub status: &'static str,
    pub message: &'static str,
}

impl SubscriptionAck {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: "Subscribed successfully",
        }
    }
}
