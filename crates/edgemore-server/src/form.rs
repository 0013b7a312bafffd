use axum::body::{to_bytes, Body};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, HeaderMap};
use axum::Form;

use crate::error::FormError;

/// Read the submitted fields as `(key, value)` pairs in body order.
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
/// An empty body is an empty form whatever its content type. File parts of a
/// multipart body are skipped.
pub async fn read_form_pairs(request: Request) -> Result<Vec<(String, String)>, FormError> {
    if is_multipart(request.headers()) {
        return read_multipart(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.map_err(FormError::Body)?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &()).await?;
    Ok(pairs)
}

async fn read_multipart(request: Request) -> Result<Vec<(String, String)>, FormError> {
    let mut multipart = Multipart::from_request(request, &()).await?;
    let mut pairs = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        pairs.push((name, field.text().await?));
    }

    Ok(pairs)
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}
