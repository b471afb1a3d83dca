//! Address book operations.

use crate::api::{is_positive, json_param, BookEmail, SendpulseApi};
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::encode_path_segment;

impl SendpulseApi {
    /// Creates an address book.
    pub async fn create_address_book(&self, book_name: &str) -> ResponseEnvelope {
        if book_name.is_empty() {
            return ResponseEnvelope::validation_error("Empty book name");
        }

        let spec = RequestSpec::builder(HttpMethod::Post, "addressbooks")
            .param("bookName", book_name)
            .build();
        self.request(spec).await
    }

    /// Renames an address book.
    pub async fn edit_address_book(&self, id: i64, new_name: &str) -> ResponseEnvelope {
        if !is_positive(id) || new_name.is_empty() {
            return ResponseEnvelope::validation_error("Empty new name or book id");
        }

        let spec = RequestSpec::builder(HttpMethod::Put, format!("addressbooks/{id}"))
            .param("name", new_name)
            .build();
        self.request(spec).await
    }

    /// Deletes an address book.
    pub async fn remove_address_book(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty book id");
        }

        self.request(RequestSpec::builder(HttpMethod::Delete, format!("addressbooks/{id}")).build())
            .await
    }

    /// Lists address books.
    pub async fn list_address_books(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> ResponseEnvelope {
        let spec = RequestSpec::builder(HttpMethod::Get, "addressbooks")
            .param_opt("limit", limit)
            .param_opt("offset", offset)
            .build();
        self.request(spec).await
    }

    /// Returns information about an address book.
    pub async fn get_book_info(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty book id");
        }
        self.get(format!("addressbooks/{id}")).await
    }

    /// Lists the emails in an address book.
    pub async fn get_emails_from_book(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty book id");
        }
        self.get(format!("addressbooks/{id}/emails")).await
    }

    /// Adds emails to an address book.
    pub async fn add_emails(&self, book_id: i64, emails: &[BookEmail]) -> ResponseEnvelope {
        if !is_positive(book_id) || emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty book id or emails");
        }

        let emails = match json_param(emails) {
            Ok(emails) => emails,
            Err(envelope) => return envelope,
        };
        let spec = RequestSpec::builder(HttpMethod::Post, format!("addressbooks/{book_id}/emails"))
            .param("emails", emails)
            .build();
        self.request(spec).await
    }

    /// Removes emails from an address book.
    pub async fn remove_emails(&self, book_id: i64, emails: &[String]) -> ResponseEnvelope {
        if !is_positive(book_id) || emails.is_empty() {
            return ResponseEnvelope::validation_error("Empty book id or emails");
        }

        let emails = match json_param(emails) {
            Ok(emails) => emails,
            Err(envelope) => return envelope,
        };
        let spec =
            RequestSpec::builder(HttpMethod::Delete, format!("addressbooks/{book_id}/emails"))
                .param("emails", emails)
                .build();
        self.request(spec).await
    }

    /// Returns information about one email in an address book.
    pub async fn get_email_info(&self, book_id: i64, email: &str) -> ResponseEnvelope {
        if !is_positive(book_id) || email.is_empty() {
            return ResponseEnvelope::validation_error("Empty book id or email");
        }
        self.get(format!("addressbooks/{book_id}/emails/{}", encode_path_segment(email)))
            .await
    }

    /// Returns the cost of a campaign sent to an address book.
    pub async fn campaign_cost(&self, book_id: i64) -> ResponseEnvelope {
        if !is_positive(book_id) {
            return ResponseEnvelope::validation_error("Empty book id");
        }
        self.get(format!("addressbooks/{book_id}/cost")).await
    }
}
