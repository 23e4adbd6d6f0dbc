//! Resume document text extraction for uploads.
//!
//! PDFs go through `pdf-extract`; anything else is treated as UTF-8 text.
//! Output is lowercased, the form the profile extractor expects.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),
}

/// Document kinds accepted by the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Resolves the kind from the multipart content type, falling back to the
    /// file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, DocumentError> {
        let content_type = content_type.map(|c| c.to_ascii_lowercase());
        let extension = file_name
            .and_then(|n| n.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match (content_type.as_deref(), extension.as_deref()) {
            (Some("application/pdf"), _) | (_, Some("pdf")) => Ok(DocumentKind::Pdf),
            (Some(ct), _) if ct.starts_with("text/") => Ok(DocumentKind::PlainText),
            (_, Some("txt" | "md" | "text")) => Ok(DocumentKind::PlainText),
            (None | Some("application/octet-stream"), None) => Ok(DocumentKind::PlainText),
            (Some(ct), _) => Err(DocumentError::Unsupported(ct.to_string())),
            (None, Some(ext)) => Err(DocumentError::Unsupported(format!(".{ext}"))),
        }
    }
}

pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?,
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };
    Ok(normalize(&text))
}

/// Lowercases and collapses runs of whitespace.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_content_type() {
        let kind = DocumentKind::detect(Some("application/pdf"), Some("resume")).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_pdf_by_extension() {
        let kind =
            DocumentKind::detect(Some("application/octet-stream"), Some("CV.PDF")).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_plain_text() {
        assert_eq!(
            DocumentKind::detect(Some("text/plain"), Some("resume.txt")).unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::detect(None, Some("resume.md")).unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(DocumentKind::detect(None, None).unwrap(), DocumentKind::PlainText);
    }

    #[test]
    fn test_rejects_word_documents() {
        let err = DocumentKind::detect(
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            Some("resume.docx"),
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::Unsupported(_)));

        let err = DocumentKind::detect(None, Some("resume.docx")).unwrap_err();
        assert!(err.to_string().contains(".docx"));
    }

    #[test]
    fn test_plain_text_is_normalized() {
        let text = extract_text(DocumentKind::PlainText, b"  Python\n\n  React\tSQL ").unwrap();
        assert_eq!(text, "python react sql");
    }

    #[test]
    fn test_invalid_utf8_is_lossy_not_an_error() {
        let text = extract_text(DocumentKind::PlainText, &[b'G', b'o', 0xff, b' ', b'x']).unwrap();
        assert!(text.starts_with("go"));
    }

    #[test]
    fn test_empty_upload_yields_empty_text() {
        assert_eq!(extract_text(DocumentKind::PlainText, b"").unwrap(), "");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let err = extract_text(DocumentKind::Pdf, b"not really a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Pdf(_)));
    }
}
