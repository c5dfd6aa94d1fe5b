//! Request helpers: send once, then classify the response

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::CloudflareClient;

impl CloudflareClient {
    pub(crate) async fn get(&self, url: &str, accepted: &[u16]) -> Result<Value> {
        let (status, text) =
            HttpUtils::execute_request(self.client.get(url), "GET", url).await?;
        HttpUtils::classify(status, &text, accepted)
    }

    /// The body is logged at debug level.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        accepted: &[u16],
    ) -> Result<Value> {
        if log::log_enabled!(log::Level::Debug)
            && let Ok(body_json) = serde_json::to_string(body)
        {
            log::debug!("Request Body: {body_json}");
        }

        let (status, text) =
            HttpUtils::execute_request(self.client.post(url).json(body), "POST", url).await?;
        HttpUtils::classify(status, &text, accepted)
    }

    pub(crate) async fn delete(&self, url: &str, accepted: &[u16]) -> Result<Value> {
        let (status, text) =
            HttpUtils::execute_request(self.client.delete(url), "DELETE", url).await?;
        HttpUtils::classify(status, &text, accepted)
    }
}
