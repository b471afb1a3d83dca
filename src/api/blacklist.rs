//! Blacklist operations.
//!
//! Addresses are passed as one comma-separated string and base64-encoded
//! before transmission.

use crate::api::SendpulseApi;
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::encode_base64;

impl SendpulseApi {
    /// Lists blacklisted addresses.
    pub async fn get_black_list(&self) -> ResponseEnvelope {
        self.get("blacklist").await
    }

    /// Adds addresses to the blacklist.
    pub async fn add_to_black_list(&self, emails: &str, comment: &str) -> ResponseEnvelope {
        if emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty emails");
        }

        let spec = RequestSpec::builder(HttpMethod::Post, "blacklist")
            .param("emails", encode_base64(emails))
            .param("comment", comment)
            .build();
        self.request(spec).await
    }

    /// Removes addresses from the blacklist.
    pub async fn remove_from_black_list(&self, emails: &str) -> ResponseEnvelope {
        if emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty emails");
        }

        let spec = RequestSpec::builder(HttpMethod::Delete, "blacklist")
            .param("emails", encode_base64(emails))
            .build();
        self.request(spec).await
    }
}
