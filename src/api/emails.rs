//! Operations on an email address across all address books.

use crate::api::SendpulseApi;
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::encode_path_segment;

impl SendpulseApi {
    /// Returns what SendPulse knows about an address.
    pub async fn get_email_global_info(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }
        self.get(format!("emails/{}", encode_path_segment(email))).await
    }

    /// Removes an address from every address book.
    pub async fn remove_email_from_all_books(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }
        let path = format!("emails/{}", encode_path_segment(email));
        self.request(RequestSpec::builder(HttpMethod::Delete, path).build())
            .await
    }

    /// Returns per-campaign statistics for an address.
    pub async fn email_stat_by_campaigns(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }
        self.get(format!("emails/{}/campaigns", encode_path_segment(email))).await
    }
}
