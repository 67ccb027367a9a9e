use crate::error::ExportError;

/// Generate a PDF from rendered report output.
///
/// This is a placeholder — PDF generation requires a rendering library
/// (e.g. `typst`, `printpdf`, or shelling out to `weasyprint`).
/// For now, this returns an error indicating the feature is not yet
/// implemented; the supported paginated export path is
/// [`crate::docx::generate_docx`].
pub fn generate_pdf(_rendered: &str) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Pdf(
        "PDF generation not yet implemented — library selection pending".to_string(),
    ))
}
