use pretty_assertions::assert_eq;
use shared_types::{validate_pdf, MAX_PDF_BYTES, PDF_MIME};

#[test]
fn plain_text_file_is_rejected_before_any_upload() {
    let err = validate_pdf("text/plain", 42).unwrap_err();
    assert_eq!(err, "Only PDF files are allowed");
}

#[test]
fn mime_check_wins_over_size_check() {
    // Wrong type AND oversized: the type error is the one reported.
    let err = validate_pdf("text/plain", MAX_PDF_BYTES + 1).unwrap_err();
    assert_eq!(err, "Only PDF files are allowed");
}

#[test]
fn mime_match_must_be_exact() {
    assert!(validate_pdf("application/pdf;charset=utf-8", 10).is_err());
    assert!(validate_pdf("application/PDF", 10).is_err());
    assert!(validate_pdf("", 10).is_err());
}

#[test]
fn exactly_ten_mib_is_accepted() {
    assert_eq!(MAX_PDF_BYTES, 10_485_760);
    assert!(validate_pdf(PDF_MIME, 10_485_760).is_ok());
}

#[test]
fn one_byte_over_ten_mib_is_rejected() {
    let err = validate_pdf(PDF_MIME, 10_485_761).unwrap_err();
    assert_eq!(err, "File size must be less than 10MB");
}

#[test]
fn empty_pdf_passes_validation() {
    assert!(validate_pdf(PDF_MIME, 0).is_ok());
}
