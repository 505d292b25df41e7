//! PDF text extraction for uploaded resumes.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";
/// Producers may put junk before the header; readers accept it within the first KiB.
const HEADER_WINDOW: usize = 1024;

/// Extracts the text of every page of a PDF.
///
/// The extractor is CPU-bound and can panic on malformed input, so it runs on the
/// blocking pool; a panic there surfaces as an extraction error.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    if !has_pdf_header(&bytes) {
        return Err(AppError::Extraction(
            "Uploaded file is not a PDF document".to_string(),
        ));
    }

    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Extraction(format!("PDF extractor aborted: {e}")))?
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    debug!(bytes = size, chars = text.len(), "Extracted PDF text");
    Ok(text)
}

fn has_pdf_header(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A one-page PDF showing `text` in Helvetica, with a correct xref table.
    pub fn single_page_pdf(text: &str) -> Vec<u8> {
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }
}
