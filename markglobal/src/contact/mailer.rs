// This file is part of the product Mark Global Site.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::error::Error;
use std::fmt;

use crate::config::EmailConfig;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_ADMIN_ADDRESS: &str = "info@themarkglobal.co.in";

pub const ENV_EMAIL_HOST: &str = "EMAIL_HOST";
pub const ENV_EMAIL_PORT: &str = "EMAIL_PORT";
pub const ENV_EMAIL_SECURE: &str = "EMAIL_SECURE";
pub const ENV_EMAIL_USER: &str = "EMAIL_USER";
pub const ENV_EMAIL_PASS: &str = "EMAIL_PASS";
pub const ENV_ADMIN_EMAIL: &str = "ADMIN_EMAIL";

#[derive(Debug, Clone)]
pub struct MailError {
    message: String,
}

impl MailError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for MailError {}

/// SMTP settings in effect for a single submission.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    /// Implicit TLS when set, opportunistic STARTTLS otherwise.
    pub secure: bool,
    pub username: String,
    pub password: String,
    pub admin_address: String,
}

impl fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password_len", &self.password.len())
            .field("admin_address", &self.admin_address)
            .finish()
    }
}

impl EmailSettings {
    /// Resolves settings from the process environment, then `config`, then defaults.
    pub fn resolve(config: &EmailConfig) -> Self {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Like [`EmailSettings::resolve`] with a custom variable lookup. Empty
    /// values count as unset.
    pub fn resolve_with<F>(config: &EmailConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match var(ENV_EMAIL_PORT) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => Some(port),
                _ => {
                    log::warn!("Ignoring invalid {} value '{}'", ENV_EMAIL_PORT, raw);
                    None
                }
            },
            None => None,
        };

        Self {
            host: var(ENV_EMAIL_HOST)
                .or_else(|| config.host.clone())
                .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port: port.or(config.port).unwrap_or(DEFAULT_SMTP_PORT),
            secure: var(ENV_EMAIL_SECURE)
                .map(|value| value == "true")
                .or(config.secure)
                .unwrap_or(false),
            username: var(ENV_EMAIL_USER)
                .or_else(|| config.username.clone())
                .unwrap_or_default(),
            password: var(ENV_EMAIL_PASS)
                .or_else(|| config.password.clone())
                .unwrap_or_default(),
            admin_address: var(ENV_ADMIN_EMAIL)
                .or_else(|| config.admin_address.clone())
                .unwrap_or_else(|| DEFAULT_ADMIN_ADDRESS.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Display name paired with the SMTP username as the sender.
    pub from_name: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, settings: &EmailSettings, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Sends through SMTP, building the transport from the settings of each call.
#[derive(Debug, Clone, Default)]
pub struct SmtpMailer;

impl SmtpMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, settings: &EmailSettings, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(settings, email)?;
        let transport = build_transport(settings)?;
        transport
            .send(message)
            .await
            .map_err(|err| MailError::new(format!("SMTP delivery to {} failed: {}", email.to, err)))?;
        Ok(())
    }
}

fn parse_address(value: &str, role: &str) -> Result<Address, MailError> {
    value
        .parse::<Address>()
        .map_err(|err| MailError::new(format!("Invalid {} address '{}': {}", role, value, err)))
}

pub(crate) fn build_message(
    settings: &EmailSettings,
    email: &OutgoingEmail,
) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(email.from_name.clone()),
        parse_address(&settings.username, "sender")?,
    );
    let to = Mailbox::new(None, parse_address(&email.to, "recipient")?);

    let mut builder = Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_HTML);
    if let Some(reply_to) = email.reply_to.as_deref() {
        builder = builder.reply_to(Mailbox::new(None, parse_address(reply_to, "reply-to")?));
    }

    builder
        .body(email.html.clone())
        .map_err(|err| MailError::new(format!("Failed to build email: {}", err)))
}

fn build_transport(settings: &EmailSettings) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
    let parameters = TlsParameters::new(settings.host.clone())
        .map_err(|err| MailError::new(format!("Invalid TLS settings: {}", err)))?;
    let tls = if settings.secure {
        Tls::Wrapper(parameters)
    } else {
        Tls::Opportunistic(parameters)
    };

    let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.host.as_str())
        .port(settings.port)
        .tls(tls);
    if !settings.username.is_empty() {
        builder = builder.credentials(Credentials::new(
            settings.username.clone(),
            settings.password.clone(),
        ));
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn settings() -> EmailSettings {
        EmailSettings::resolve_with(
            &EmailConfig::default(),
            lookup(&[(ENV_EMAIL_USER, "robot@example.com")]),
        )
    }

    #[test]
    fn resolve_falls_back_to_defaults() {
        let settings = EmailSettings::resolve_with(&EmailConfig::default(), lookup(&[]));
        assert_eq!(settings.host, DEFAULT_SMTP_HOST);
        assert_eq!(settings.port, DEFAULT_SMTP_PORT);
        assert!(!settings.secure);
        assert_eq!(settings.username, "");
        assert_eq!(settings.password, "");
        assert_eq!(settings.admin_address, DEFAULT_ADMIN_ADDRESS);
    }

    #[test]
    fn resolve_prefers_environment_over_config() {
        let config = EmailConfig {
            host: Some("smtp.config.test".to_string()),
            port: Some(2525),
            secure: Some(false),
            username: Some("config@example.com".to_string()),
            password: None,
            admin_address: Some("config-admin@example.com".to_string()),
        };
        let settings = EmailSettings::resolve_with(
            &config,
            lookup(&[
                (ENV_EMAIL_HOST, "smtp.env.test"),
                (ENV_EMAIL_SECURE, "true"),
                (ENV_EMAIL_PASS, "hunter2"),
                (ENV_ADMIN_EMAIL, ""),
            ]),
        );
        assert_eq!(settings.host, "smtp.env.test");
        assert_eq!(settings.port, 2525);
        assert!(settings.secure);
        assert_eq!(settings.username, "config@example.com");
        assert_eq!(settings.password, "hunter2");
        assert_eq!(settings.admin_address, "config-admin@example.com");
    }

    #[test]
    fn resolve_ignores_invalid_port() {
        let settings = EmailSettings::resolve_with(
            &EmailConfig::default(),
            lookup(&[(ENV_EMAIL_PORT, "not-a-port")]),
        );
        assert_eq!(settings.port, DEFAULT_SMTP_PORT);
    }

    #[test]
    fn secure_flag_only_accepts_literal_true() {
        let settings = EmailSettings::resolve_with(
            &EmailConfig::default(),
            lookup(&[(ENV_EMAIL_SECURE, "yes")]),
        );
        assert!(!settings.secure);
    }

    #[test]
    fn debug_output_hides_password() {
        let mut settings = settings();
        settings.password = "hunter2".to_string();
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("password_len: 7"));
    }

    #[test]
    fn build_message_sets_reply_to() {
        let email = OutgoingEmail {
            from_name: "Mark Global Website".to_string(),
            to: "ops@example.com".to_string(),
            reply_to: Some("asha@example.com".to_string()),
            subject: "New Contact Form Submission from Asha".to_string(),
            html: "<p>hi</p>".to_string(),
        };
        let message = build_message(&settings(), &email).expect("message");
        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("Reply-To: "));
        assert!(formatted.contains("asha@example.com"));
        assert!(formatted.contains("robot@example.com"));
        assert!(formatted.contains("text/html"));
    }

    #[test]
    fn build_message_rejects_missing_sender() {
        let email = OutgoingEmail {
            from_name: "Mark Global".to_string(),
            to: "asha@example.com".to_string(),
            reply_to: None,
            subject: "Hello".to_string(),
            html: "<p>hi</p>".to_string(),
        };
        let unconfigured = EmailSettings::resolve_with(&EmailConfig::default(), lookup(&[]));
        let err = build_message(&unconfigured, &email).expect_err("no sender");
        assert!(err.to_string().contains("sender"));
    }
}
