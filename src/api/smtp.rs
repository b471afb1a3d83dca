//! SMTP relay operations.

use crate::api::{json_param, SendpulseApi, SmtpEmail, SmtpEmailQuery, UnsubscribeEmail};
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::{encode_base64, encode_path_segment};

impl SendpulseApi {
    /// Lists emails sent through the SMTP relay.
    pub async fn smtp_list_emails(&self, query: &SmtpEmailQuery) -> ResponseEnvelope {
        let spec = RequestSpec::builder(HttpMethod::Get, "smtp/emails")
            .param("limit", query.limit.to_string())
            .param("offset", query.offset.to_string())
            .param("from_date", query.from_date.as_str())
            .param("to_date", query.to_date.as_str())
            .param("sender", query.sender.as_str())
            .param("recipient", query.recipient.as_str())
            .build();
        self.request(spec).await
    }

    /// Returns information about one relayed email.
    pub async fn smtp_get_email_info_by_id(&self, id: &str) -> ResponseEnvelope {
        if id.is_empty() {
            return ResponseEnvelope::validation_error("Empty id");
        }
        self.get(format!("smtp/emails/{}", encode_path_segment(id))).await
    }

    /// Adds addresses to the SMTP unsubscribe list.
    pub async fn smtp_unsubscribe_emails(&self, emails: &[UnsubscribeEmail]) -> ResponseEnvelope {
        if emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty emails");
        }

        let emails = match json_param(emails) {
            Ok(emails) => emails,
            Err(envelope) => return envelope,
        };
        let spec = RequestSpec::builder(HttpMethod::Post, "smtp/unsubscribe")
            .param("emails", emails)
            .build();
        self.request(spec).await
    }

    /// Removes addresses from the SMTP unsubscribe list.
    pub async fn smtp_remove_from_unsubscribe(&self, emails: &[String]) -> ResponseEnvelope {
        if emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty emails");
        }

        let emails = match json_param(emails) {
            Ok(emails) => emails,
            Err(envelope) => return envelope,
        };
        let spec = RequestSpec::builder(HttpMethod::Delete, "smtp/unsubscribe")
            .param("emails", emails)
            .build();
        self.request(spec).await
    }

    /// Lists the relay's sending IPs.
    pub async fn smtp_list_ip(&self) -> ResponseEnvelope {
        self.get("smtp/ips").await
    }

    /// Lists the domains allowed as senders.
    pub async fn smtp_list_allowed_domains(&self) -> ResponseEnvelope {
        self.get("smtp/domains").await
    }

    /// Adds a sender domain. A verification mail goes to `email`.
    pub async fn smtp_add_domain(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }

        let spec = RequestSpec::builder(HttpMethod::Post, "smtp/domains")
            .param("email", email)
            .build();
        self.request(spec).await
    }

    /// Requests verification of a sender domain.
    pub async fn smtp_verify_domain(&self, email: &str) -> ResponseEnvelope {
        if email.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }
        self.get(format!("smtp/domains/{}", encode_path_segment(email))).await
    }

    /// Sends a transactional email.
    ///
    /// The HTML body is base64-encoded and the whole message is sent as a
    /// JSON document in the `email` parameter.
    pub async fn smtp_send_mail(&self, email: &SmtpEmail) -> ResponseEnvelope {
        if email.from.email.is_empty() || email.to.is_empty() {
            return ResponseEnvelope::validation_error("Empty email");
        }

        let encoded = SmtpEmail {
            html: encode_base64(&email.html),
            ..email.clone()
        };
        let payload = match json_param(&encoded) {
            Ok(payload) => payload,
            Err(envelope) => return envelope,
        };

        let spec = RequestSpec::builder(HttpMethod::Post, "smtp/emails")
            .param("email", payload)
            .build();
        self.request(spec).await
    }
}
