use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time;

use crate::domain::client_email::ClientEmail;
use crate::ports::notifier::{NotificationError, Notifier};

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ClientEmail,
    api_key: Secret<String>,
}

#[derive(serde::Serialize)]
struct SendEmailBody<'a> {
    personalizations: Vec<SendGridPersonalization<'a>>,
    from: SendGridEmail<'a>,
    subject: &'a str,
    content: Vec<SendGridContent<'a>>,
}

#[derive(serde::Serialize)]
struct SendGridEmail<'a> {
    email: &'a str,
}

#[derive(serde::Serialize)]
struct SendGridPersonalization<'a> {
    to: Vec<SendGridEmail<'a>>,
}

#[derive(serde::Serialize)]
struct SendGridContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ClientEmail,
        api_key: Secret<String>,
        timeout: Option<time::Duration>,
    ) -> Result<EmailClient, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()?;

        Ok(EmailClient {
            http_client,
            base_url,
            sender,
            api_key,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &ClientEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/mail/send", self.base_url);
        let body = SendEmailBody {
            from: SendGridEmail {
                email: self.sender.as_ref(),
            },
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridEmail {
                    email: recipient.as_ref(),
                }],
            }],
            subject,
            content: vec![SendGridContent {
                content_type: "text/html",
                value: html_content,
            }],
        };

        self.http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?; // return an error when server response status code is 4xx or 5xx

        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailClient {
    #[tracing::instrument(
        name = "Sending an email notification",
        skip(self, recipient, subject, body),
        fields(recipient = %recipient, subject = %subject)
    )]
    async fn send(
        &self,
        recipient: &ClientEmail,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        self.send_email(recipient, subject, body)
            .await
            .map_err(|err| NotificationError(Box::new(err)))
    }
}
