use lopdf::content::Content;
use lopdf::{dictionary, Document, Object, Stream};

use crate::compose::ComposedDocument;
use crate::error::ExportError;
use crate::layout::layout_pages;
use crate::styles::Font;

const PRODUCER: &str = concat!("edgemore-export ", env!("CARGO_PKG_VERSION"));

/// Render a composed document to PDF bytes.
///
/// The flow is:
/// 1. `EstimateRequest` → [`ComposedDocument`] (via [`crate::compose::compose`])
/// 2. blocks → per-page operations (via [`layout_pages`])
/// 3. operations → a PDF file (this function)
///
/// Output carries no random identifiers, so identical documents (including
/// their generation timestamp) render to identical bytes.
pub fn generate_pdf(doc: &ComposedDocument) -> Result<Vec<u8>, ExportError> {
    let pages = layout_pages(doc);

    let mut pdf = Document::with_version("1.4");
    let pages_id = pdf.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for font in Font::ALL {
        let font_id = pdf.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = pdf.add_object(dictionary! {
        "Font" => fonts,
    });

    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        doc.page.width.into(),
        doc.page.height.into(),
    ];

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page.operations,
        };
        let content_id = pdf.add_object(Stream::new(lopdf::Dictionary::new(), content.encode()?));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => media_box.clone(),
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = pdf.add_object(dictionary! {
        "Title" => Object::string_literal(doc.title.as_str()),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(pdf_date(doc)),
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.trailer.set("Info", info_id);

    pdf.compress();

    let mut buf = Vec::new();
    pdf.save_to(&mut buf)?;

    tracing::debug!(pages = page_count, bytes = buf.len(), "rendered estimate PDF");
    Ok(buf)
}

/// PDF date string (`D:YYYYMMDDHHmmSS`) for the generation timestamp.
fn pdf_date(doc: &ComposedDocument) -> String {
    format!("D:{}", doc.generated_at.strftime("%Y%m%d%H%M%S"))
}
