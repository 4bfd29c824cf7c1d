//! Text extraction from resume files

use crate::error::{Result, StrategistError};
use crate::input::file_detector::ResumeFormat;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Whether a reader for `format` is compiled into this build.
pub fn reader_available(format: ResumeFormat) -> bool {
    match format {
        ResumeFormat::Txt => true,
        ResumeFormat::Pdf => cfg!(feature = "pdf"),
        ResumeFormat::Docx => cfg!(feature = "docx"),
        ResumeFormat::Doc => false,
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            StrategistError::DocumentRead(format!(
                "'{}' is not valid UTF-8 text: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(feature = "pdf")]
pub struct PdfExtractor;

#[cfg(feature = "pdf")]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            StrategistError::DocumentRead(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(feature = "docx")]
pub struct DocxExtractor;

#[cfg(feature = "docx")]
impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        docx_paragraphs(&bytes).map_err(|e| {
            StrategistError::DocumentRead(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Paragraph text of `word/document.xml`, one paragraph per line.
///
/// Empty paragraphs are kept as empty lines so section breaks survive. Run
/// text is taken verbatim from `w:t` elements.
#[cfg(feature = "docx")]
fn docx_paragraphs(data: &[u8]) -> anyhow::Result<String> {
    use quick_xml::escape::resolve_predefined_entity;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut document_file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut paragraphs = Vec::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    paragraphs.push(std::mem::take(&mut current));
                    in_paragraph = false;
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                current.push_str(&e.xml_content()?);
            }
            Ok(Event::GeneralRef(e)) if in_text => {
                if let Some(ch) = e.resolve_char_ref()? {
                    current.push(ch);
                } else if let Some(resolved) = resolve_predefined_entity(&e.decode()?) {
                    current.push_str(resolved);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reader_availability() {
        assert!(reader_available(ResumeFormat::Txt));
        assert!(!reader_available(ResumeFormat::Doc));
        assert_eq!(reader_available(ResumeFormat::Pdf), cfg!(feature = "pdf"));
        assert_eq!(reader_available(ResumeFormat::Docx), cfg!(feature = "docx"));
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Skills: Rust, Go").unwrap();

        let text = PlainTextExtractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Skills: Rust, Go");
    }

    #[tokio::test]
    async fn test_plain_text_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = PlainTextExtractor.extract(file.path()).await;
        assert!(matches!(result, Err(StrategistError::DocumentRead(_))));
    }

    #[cfg(feature = "docx")]
    fn build_docx(document_xml: &str) -> Vec<u8> {
        use zip::write::SimpleFileOptions;

        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_paragraphs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Skills: Rust, Go</w:t></w:r></w:p>
    <w:p></w:p>
    <w:p><w:r><w:t>Certifications: AWS, CKA</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let text = docx_paragraphs(&build_docx(xml)).unwrap();
        assert_eq!(text, "Skills: Rust, Go\n\nCertifications: AWS, CKA");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_self_closing_paragraph_ends_section() {
        use crate::input::file_detector::ResumeFormat;
        use crate::processing::resume_structurer::{ResumeDocument, ResumeStructurer};

        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Skills:</w:t></w:r></w:p>
    <w:p><w:r><w:t>Python, Docker</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Experience</w:t></w:r></w:p>
    <w:p><w:r><w:t>Led platform work at Acme</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let text = docx_paragraphs(&build_docx(xml)).unwrap();
        assert_eq!(
            text,
            "Skills:\nPython, Docker\n\nExperience\nLed platform work at Acme"
        );

        let data = ResumeStructurer::new().structure(&ResumeDocument::new(text, ResumeFormat::Docx));
        assert_eq!(data.skills, vec!["Python", "Docker"]);
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_keeps_spaces_between_runs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:r><w:t xml:space="preserve">Senior </w:t></w:r>
      <w:r><w:t>Platform Engineer</w:t></w:r>
    </w:p>
    <w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>Acme</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let text = docx_paragraphs(&build_docx(xml)).unwrap();
        assert_eq!(text, "Senior Platform Engineer\nR&D\tAcme");
    }

    #[cfg(feature = "docx")]
    #[tokio::test]
    async fn test_corrupt_docx_is_read_error() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();

        let result = DocxExtractor.extract(file.path()).await;
        assert!(matches!(result, Err(StrategistError::DocumentRead(_))));
    }
}
