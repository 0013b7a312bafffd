//! Estimate request → ordered, styled document blocks.
//!
//! Composition is pure: the same request and timestamp always produce the
//! same blocks. The renderer in [`crate::pdf`] consumes the result.

use edgemore_core::models::estimate::EstimateRequest;
use jiff::civil::DateTime;

use crate::styles::{DocumentStyles, PageBackground, PageGeometry, TableStyle, TextStyle};

pub const COMPANY_NAME: &str = "EDGEMORE EPOXY AND PAINTING";
pub const TAGLINE: &str = "Luxury Epoxy & Fine Finishes \u{2022} Tampa Bay";
pub const DOCUMENT_TITLE: &str = "Edgemore Estimate Request";

pub const CLIENT_SECTION: &str = "CLIENT INFORMATION";
pub const PROJECT_SECTION: &str = "PROJECT DETAILS";
pub const VISION_SECTION: &str = "PROJECT DESCRIPTION / VISION";

pub const EMPTY_VALUE: &str = "-";
pub const NO_DESCRIPTION: &str = "No description provided.";

const FOOTER_LINES: [&str; 2] = [
    "Edgemore Epoxy and Painting \u{2022} Leggari-Certified Installer",
    "Premium Metallic Epoxy \u{2022} Garage Floors \u{2022} Driveways \u{2022} Countertops \u{2022} Commercial Floors",
];
const FOOTER_CONTACT: &str = "Phone: 727-421-4564 \u{2022} Generated on";

const SECTION_GAP: f32 = 10.0;
const FOOTER_GAP: f32 = 18.0;

/// A block of text with hard line breaks. Each line still wraps to the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style: TextStyle,
    pub lines: Vec<String>,
}

impl Paragraph {
    fn single(text: &str, style: TextStyle) -> Self {
        Self {
            style,
            lines: vec![text.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
}

/// A two-column label/value table.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTable {
    pub style: TableStyle,
    pub rows: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(FieldTable),
    /// Fixed vertical gap in points.
    Spacer(f32),
}

/// Everything the renderer needs to lay out the estimate document.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    pub title: String,
    pub generated_at: DateTime,
    pub page: PageGeometry,
    pub background: PageBackground,
    pub blocks: Vec<Block>,
}

impl ComposedDocument {
    pub fn tables(&self) -> impl Iterator<Item = &FieldTable> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}

/// Compose the estimate document with the default theme.
pub fn compose(request: &EstimateRequest, generated_at: DateTime) -> ComposedDocument {
    compose_with_styles(request, generated_at, &DocumentStyles::default())
}

pub fn compose_with_styles(
    request: &EstimateRequest,
    generated_at: DateTime,
    styles: &DocumentStyles,
) -> ComposedDocument {
    let mut blocks = Vec::with_capacity(12);

    blocks.push(Block::Paragraph(Paragraph::single(COMPANY_NAME, styles.title)));
    blocks.push(Block::Paragraph(Paragraph::single(TAGLINE, styles.subtitle)));

    blocks.push(Block::Paragraph(Paragraph::single(CLIENT_SECTION, styles.section)));
    blocks.push(Block::Table(field_table(
        styles.table,
        [
            ("Full Name", &request.name),
            ("Phone Number", &request.phone),
            ("Email Address", &request.email),
            ("Preferred Contact", &request.contact_method),
            ("Service Address", &request.address),
            ("City", &request.city),
            ("ZIP Code", &request.zip_code),
        ],
    )));
    blocks.push(Block::Spacer(SECTION_GAP));

    blocks.push(Block::Paragraph(Paragraph::single(PROJECT_SECTION, styles.section)));
    blocks.push(Block::Table(field_table(
        styles.table,
        [
            ("Type of Space", &request.space_type),
            ("Approx. Square Footage", &request.sqft),
            ("Desired Finish", &request.finish),
            ("Surface Condition", &request.condition),
            ("Timeline", &request.timeline),
            ("Budget", &request.budget),
            ("Referral Source", &request.referral),
        ],
    )));
    blocks.push(Block::Spacer(SECTION_GAP));

    blocks.push(Block::Paragraph(Paragraph::single(VISION_SECTION, styles.section)));
    blocks.push(Block::Paragraph(Paragraph {
        style: styles.body,
        lines: vision_lines(&request.vision),
    }));

    blocks.push(Block::Spacer(FOOTER_GAP));
    blocks.push(Block::Paragraph(Paragraph {
        style: styles.footer,
        lines: footer_lines(generated_at),
    }));

    ComposedDocument {
        title: DOCUMENT_TITLE.to_string(),
        generated_at,
        page: styles.page,
        background: styles.background,
        blocks,
    }
}

fn field_table<const N: usize>(style: TableStyle, rows: [(&str, &String); N]) -> FieldTable {
    FieldTable {
        style,
        rows: rows
            .into_iter()
            .map(|(label, value)| FieldRow {
                label: label.to_string(),
                value: if value.is_empty() {
                    EMPTY_VALUE.to_string()
                } else {
                    value.clone()
                },
            })
            .collect(),
    }
}

/// Split the free-text vision into hard lines, one per input line.
pub fn vision_lines(vision: &str) -> Vec<String> {
    let trimmed = vision.trim();
    if trimmed.is_empty() {
        return vec![NO_DESCRIPTION.to_string()];
    }

    trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn footer_lines(generated_at: DateTime) -> Vec<String> {
    let mut lines: Vec<String> = FOOTER_LINES.iter().map(|l| l.to_string()).collect();
    lines.push(format!(
        "{FOOTER_CONTACT} {}",
        generated_at.strftime("%Y-%m-%d %H:%M")
    ));
    lines
}
