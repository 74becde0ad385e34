use async_trait::async_trait;
use lettre::{
    AsyncTransport, Message,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
};

use crate::config::Config;
use crate::core::OTP_TTL_MINUTES;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MailerError(pub String);

/// Outbound mail seam for the OTP flow. The production implementation talks
/// SMTP through the configured transport; tests swap in a recording fake.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_otp_email(&self, to: &str, code: &str) -> Result<(), MailerError>;
}

pub struct SmtpMailer {
    config: Config,
}

impl SmtpMailer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_otp_email(&self, to: &str, code: &str) -> Result<(), MailerError> {
        send_otp_email(&self.config, to, code)
            .await
            .map_err(|e| MailerError(e.to_string()))
    }
}

pub async fn send_email(
    config: &Config,
    to: &str,
    subject: &str,
    html_body: &str,
    text_body: &str,
) -> Result<(), anyhow::Error> {
    let email = Message::builder()
        .from(Mailbox::new(
            Some("Vitrine Team".to_string()),
            config.emailer.parse()?,
        ))
        .to(Mailbox::new(None, to.parse()?))
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_body.to_string()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
        )?;

    config
        .transponder
        .send(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to send email: {}", e))?;
    Ok(())
}

pub async fn send_otp_email(config: &Config, to: &str, otp: &str) -> Result<(), anyhow::Error> {
    let subject = "Your OTP Code";

    let html_body = format!(
        r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>Your OTP Code</title>
            <style>
                body {{
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    line-height: 1.6;
                    color: #333;
                    max-width: 600px;
                    margin: 0 auto;
                    padding: 20px;
                }}
                .email-container {{
                    background: white;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 40px;
                }}
                .otp-code {{
                    font-size: 36px;
                    font-weight: bold;
                    color: #2d3748;
                    letter-spacing: 4px;
                    font-family: 'Courier New', monospace;
                    text-align: center;
                    margin: 20px 0;
                }}
                .expiry {{
                    color: #e53e3e;
                    font-size: 14px;
                    text-align: center;
                }}
            </style>
        </head>
        <body>
            <div class="email-container">
                <p>Your OTP is</p>
                <div class="otp-code">{}</div>
                <p class="expiry">This code expires in {} minutes.</p>
                <p>If you didn't request a password reset, you can ignore this email.</p>
            </div>
        </body>
        </html>
        "#,
        otp, OTP_TTL_MINUTES
    );

    let text_body = format!("Your OTP is {}", otp);

    send_email(config, to, subject, &html_body, &text_body).await
}
