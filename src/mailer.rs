//! SMTP delivery of the rendered digest.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{Message, SmtpTransport, Transport};

use crate::config::Config;
use crate::error::DaymailResult;

/// Build the digest mail from the rendered HTML body.
pub fn build_message(config: &Config, html: String) -> DaymailResult<Message> {
    let message = Message::builder()
        .from(config.email_from.parse()?)
        .to(config.email_to.parse()?)
        .subject(config.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(html)?;

    Ok(message)
}

/// Send `message` over a STARTTLS session with PLAIN authentication.
pub fn send(config: &Config, message: &Message) -> DaymailResult<()> {
    let creds = Credentials::new(config.username.clone(), config.password.clone());

    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)?
        .port(config.smtp_port)
        .credentials(creds)
        .authentication(vec![Mechanism::Plain])
        .build();

    mailer.send(message)?;

    Ok(())
}
