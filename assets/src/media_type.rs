//! Maps MIME content types to file extensions

use mime::Mime;

/// Extension used when a content type is not of the form `type/subtype`
pub const DEFAULT_EXTENSION: &str = "bin";

/// Returns the extension for `content_type`, without the leading dot.
///
/// A content type that does not split into exactly two `/`-separated parts maps to
/// [`DEFAULT_EXTENSION`] so that a missing or malformed header never fails an upload.
/// Otherwise the subtype is returned verbatim.
#[must_use]
pub fn extension(content_type: &str) -> &str {
    let mut parts = content_type.split('/');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(subtype), None) => subtype,
        _ => DEFAULT_EXTENSION,
    }
}

/// Returns the filename suffix for `content_type`, e.g. `.png`
#[must_use]
pub fn resolve(content_type: &str) -> String {
    format!(".{}", extension(content_type))
}

/// Content type to send with an upload.
///
/// Values that do not parse as a MIME type are sent as `application/octet-stream`.
#[must_use]
pub fn upload_content_type(content_type: &str) -> Mime {
    content_type
        .trim()
        .parse::<Mime>()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}
