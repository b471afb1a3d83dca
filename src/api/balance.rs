//! Account balance.

use crate::api::SendpulseApi;
use crate::clients::ResponseEnvelope;

impl SendpulseApi {
    /// Returns the account balance, optionally in one currency only.
    ///
    /// The currency code is upper-cased, so `Some("usd")` requests `balance/USD`.
    pub async fn get_balance(&self, currency: Option<&str>) -> ResponseEnvelope {
        match currency {
            Some(currency) if !currency.is_empty() => {
                self.get(format!("balance/{}", currency.to_uppercase()))
                    .await
            }
            _ => self.get("balance").await,
        }
    }
}
