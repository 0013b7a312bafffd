//! edgemore-mail
//!
//! Delivers rendered estimates over SMTP. Thin wrapper around `lettre`.
//!
//! # Environment Variables
//!
//! [`config::SmtpConfig::from_env`] reads:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SMTP_HOST` | empty | SMTP relay hostname |
//! | `SMTP_PORT` | `587` | Port; the session is upgraded with STARTTLS |
//! | `SMTP_USER` | empty | Username for authentication |
//! | `SMTP_PASS` | empty | Password for authentication |
//! | `SEND_TO_EMAIL` | empty | Recipient of every estimate |
//! | `FROM_EMAIL` | `SMTP_USER`, then `no-reply@example.com` | Sender address |

pub mod config;
pub mod error;
pub mod mailer;
pub mod message;
