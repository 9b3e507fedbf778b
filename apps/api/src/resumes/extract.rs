//! Plain-text extraction from uploaded resume files.
//!
//! PDFs go through `pdf-extract` via a scratch file; anything else must
//! already be readable text. A file we cannot read is a 422, not a 500.

use std::io::Write;

use anyhow::Context;

use crate::errors::AppError;

/// Extracts plain text from an uploaded file, trimmed.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let text = if is_pdf(file_name, bytes) {
        extract_pdf_text(bytes)?
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                return Err(AppError::UnprocessableEntity(
                    "File is neither a PDF nor readable text".to_string(),
                ))
            }
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the file".to_string(),
        ));
    }
    Ok(text)
}

fn is_pdf(file_name: &str, bytes: &[u8]) -> bool {
    file_name.to_lowercase().ends_with(".pdf") || bytes.starts_with(b"%PDF")
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    // pdf-extract wants a path, not a buffer
    let mut scratch =
        tempfile::NamedTempFile::new().context("Failed to create scratch file for PDF")?;
    scratch
        .write_all(bytes)
        .context("Failed to write uploaded PDF to scratch file")?;

    pdf_extract::extract_text(scratch.path())
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))
}
