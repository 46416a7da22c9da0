//! DOCX reader backed by docx-rs.

use super::DocumentReader;
use crate::detect::DocumentFormat;
use crate::error::{Error, Result};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

/// Reader for paragraph-structured Office Open XML documents.
///
/// The docx-rs tree is walked Document → Paragraph → Run → Text. Runs
/// within a paragraph are concatenated without a separator (they are parts
/// of the same sentence); paragraph texts are joined with single spaces in
/// document order. Tables, images, and other non-paragraph children are
/// ignored.
pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for DocxReader {
    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn read(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| Error::Parse(format!("docx: {:?}", e)))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join(" "))
    }
}

/// Collect the text runs of a single paragraph.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }
    parts.join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_read_single_paragraph() {
        let reader = DocxReader::new();
        let bytes = build_docx(&["Hello from a paragraph"]);
        let text = reader.read(&bytes).unwrap();
        assert_eq!(text, "Hello from a paragraph");
    }

    #[test]
    fn test_paragraphs_joined_with_single_spaces() {
        let reader = DocxReader::new();
        let bytes = build_docx(&["first paragraph", "second paragraph"]);
        let text = reader.read(&bytes).unwrap();
        assert_eq!(text, "first paragraph second paragraph");
    }

    #[test]
    fn test_runs_concatenated_without_separator() {
        let mut cursor = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Hel"))
                    .add_run(Run::new().add_text("lo")),
            )
            .build()
            .pack(&mut cursor)
            .unwrap();

        let reader = DocxReader::new();
        let text = reader.read(&cursor.into_inner()).unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_malformed_docx_is_parse_error() {
        let reader = DocxReader::new();
        let err = reader.read(b"PK\x03\x04not-a-real-archive").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
