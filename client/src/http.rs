use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::ResetApi;
use crate::error::{ClientError, Result};

#[derive(Serialize)]
struct SendOtpBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOtpBody<'a> {
    email: &'a str,
    otp: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_password: Option<&'a str>,
}

#[derive(Deserialize)]
struct Envelope {
    message: Option<String>,
    error: Option<String>,
}

/// [`ResetApi`] over HTTP against a running backend.
pub struct HttpResetApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResetApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        let envelope: Option<Envelope> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            // A body the server did not shape as an envelope is reported raw.
            let message = envelope.and_then(|e| e.error).unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(envelope.and_then(|e| e.message).unwrap_or_default())
    }
}

#[async_trait]
impl ResetApi for HttpResetApi {
    async fn send_otp(&self, email: &str) -> Result<String> {
        self.post("/api/send-otp", &SendOtpBody { email }).await
    }

    async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
        new_password: Option<&str>,
    ) -> Result<String> {
        self.post(
            "/api/verify-otp",
            &VerifyOtpBody {
                email,
                otp,
                new_password,
            },
        )
        .await
    }
}
