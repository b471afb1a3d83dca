//! Sender operations.

use crate::api::SendpulseApi;
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::encode_path_segment;

impl SendpulseApi {
    /// Lists senders.
    pub async fn list_senders(&self) -> ResponseEnvelope {
        self.get("senders").await
    }

    /// Adds a sender. SendPulse mails an activation code to the address.
    pub async fn add_sender(&self, sender_name: &str, sender_email: &str) -> ResponseEnvelope {
        if sender_name.is_empty() || sender_email.is_empty() {
            return ResponseEnvelope::validation_error("Empty sender name or sender email");
        }

        let spec = RequestSpec::builder(HttpMethod::Post, "senders")
            .param("email", sender_email)
            .param("name", sender_name)
            .build();
        self.request(spec).await
    }

    /// Removes a sender.
    pub async fn remove_sender(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }

        let spec = RequestSpec::builder(HttpMethod::Delete, "senders")
            .param("email", email)
            .build();
        self.request(spec).await
    }

    /// Activates a sender with the code it received.
    pub async fn activate_sender(&self, email: &str, code: &str) -> ResponseEnvelope {
        if email.is_empty() || code.is_empty() {
            return ResponseEnvelope::validation_error("Empty email or activation code");
        }

        let path = format!("senders/{}/code", encode_path_segment(email));
        let spec = RequestSpec::builder(HttpMethod::Post, path)
            .param("code", code)
            .build();
        self.request(spec).await
    }

    /// Requests another activation mail for a sender.
    pub async fn get_sender_activation_mail(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }
        self.get(format!("senders/{}/code", encode_path_segment(email))).await
    }
}
