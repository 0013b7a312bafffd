use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;

use edgemore_core::models::estimate::EstimateRequest;

use crate::config::SmtpConfig;
use crate::error::MailError;

pub fn subject(request: &EstimateRequest) -> String {
    format!("New Edgemore Estimate Request from {}", request.display_name())
}

/// Plain-text summary. The full details travel in the attached PDF.
pub fn body(request: &EstimateRequest) -> String {
    format!(
        "A new estimate request has been submitted.\n\n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Type of Space: {}\n\
         Approx. Sq Ft: {}\n\n\
         The full details are in the attached PDF.",
        request.name, request.phone, request.email, request.space_type, request.sqft,
    )
}

/// Build the estimate email with `pdf` attached as `filename`.
pub fn build_estimate_message(
    config: &SmtpConfig,
    request: &EstimateRequest,
    pdf: Vec<u8>,
    filename: &str,
) -> Result<Message, MailError> {
    let from = parse_mailbox(&config.sender)?;
    let to = parse_mailbox(&config.recipient)?;
    let pdf_type =
        ContentType::parse("application/pdf").map_err(|e| MailError::Build(e.to_string()))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(subject(request))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body(request)))
                .singlepart(Attachment::new(filename.to_string()).body(pdf, pdf_type)),
        )
        .map_err(|e| MailError::Build(e.to_string()))
}

fn parse_mailbox(addr: &str) -> Result<Mailbox, MailError> {
    addr.parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress(format!("{addr:?}: {e}")))
}
