//! Campaign operations.

use crate::api::{is_positive, json_param, NewCampaign, SendpulseApi};
use crate::clients::{HttpMethod, RequestSpec, ResponseEnvelope};
use crate::serialization::encode_base64;

impl SendpulseApi {
    /// Lists campaigns.
    pub async fn list_campaigns(&self, limit: Option<u32>, offset: Option<u32>) -> ResponseEnvelope {
        let spec = RequestSpec::builder(HttpMethod::Get, "campaigns")
            .param_opt("limit", limit)
            .param_opt("offset", offset)
            .build();
        self.request(spec).await
    }

    /// Returns information about a campaign.
    pub async fn get_campaign_info(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty campaign id");
        }
        self.get(format!("campaigns/{id}")).await
    }

    /// Returns campaign statistics grouped by country.
    pub async fn campaign_stat_by_countries(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty campaign id");
        }
        self.get(format!("campaigns/{id}/countries")).await
    }

    /// Returns campaign statistics grouped by referral link.
    pub async fn campaign_stat_by_referrals(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty campaign id");
        }
        self.get(format!("campaigns/{id}/referrals")).await
    }

    /// Creates and schedules a campaign.
    ///
    /// The body is base64-encoded. Attachments, when present, are sent as a
    /// JSON object; otherwise the `attachments` parameter is empty.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> ResponseEnvelope {
        if campaign.sender_name.is_empty()
            || campaign.sender_email.is_empty()
            || campaign.subject.is_empty()
            || campaign.body.is_empty()
            || !is_positive(campaign.book_id)
        {
            return ResponseEnvelope::validation_error("Not all data.");
        }

        let attachments = if campaign.attachments.is_empty() {
            String::new()
        } else {
            match json_param(&campaign.attachments) {
                Ok(attachments) => attachments,
                Err(envelope) => return envelope,
            }
        };

        let spec = RequestSpec::builder(HttpMethod::Post, "campaigns")
            .param("sender_name", campaign.sender_name.as_str())
            .param("sender_email", campaign.sender_email.as_str())
            .param("subject", campaign.subject.as_str())
            .param("body", encode_base64(&campaign.body))
            .param("list_id", campaign.book_id.to_string())
            .param("name", campaign.name.as_str())
            .param("attachments", attachments)
            .build();
        self.request(spec).await
    }

    /// Cancels a scheduled campaign.
    pub async fn cancel_campaign(&self, id: i64) -> ResponseEnvelope {
        if !is_positive(id) {
            return ResponseEnvelope::validation_error("Empty campaign id");
        }
        self.request(RequestSpec::builder(HttpMethod::Delete, format!("campaigns/{id}")).build())
            .await
    }
}
