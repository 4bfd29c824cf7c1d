//! Input manager: resume files, OCR text dumps and manual profile JSON

use crate::config::InputConfig;
use crate::error::{Result, StrategistError};
use crate::input::file_detector::ResumeFormat;
#[cfg(feature = "docx")]
use crate::input::text_extractor::DocxExtractor;
#[cfg(feature = "pdf")]
use crate::input::text_extractor::PdfExtractor;
use crate::input::text_extractor::{reader_available, PlainTextExtractor, TextExtractor};
use crate::processing::models::{LinkedInSource, ManualLinkedInInput};
use crate::processing::resume_structurer::ResumeDocument;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, ResumeDocument>,
    enable_cache: bool,
    max_upload_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

impl InputManager {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a resume file into a document ready for structuring.
    pub async fn read_resume(&mut self, path: &Path) -> Result<ResumeDocument> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached resume text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(StrategistError::InputUnavailable(format!(
                "Resume file not found: {}",
                path.display()
            )));
        }

        let format = self.detect_format(path)?;

        let size = fs::metadata(path).await?.len();
        if size > self.max_upload_bytes {
            return Err(StrategistError::InvalidInput(format!(
                "Resume file is {} bytes, over the {} byte limit: {}",
                size,
                self.max_upload_bytes,
                path.display()
            )));
        }

        info!("Parsing {} resume: {}", format, path.display());
        let text = match format {
            ResumeFormat::Txt => PlainTextExtractor.extract(path).await?,
            #[cfg(feature = "pdf")]
            ResumeFormat::Pdf => PdfExtractor.extract(path).await?,
            #[cfg(feature = "docx")]
            ResumeFormat::Docx => DocxExtractor.extract(path).await?,
            // detect_format already rejects these
            other => {
                return Err(StrategistError::UnsupportedFormat(format!(
                    "No reader available for {} files",
                    other
                )))
            }
        };
        debug!("Extracted {} chars from {}", text.chars().count(), path.display());

        let document = ResumeDocument::new(text, format);
        if self.enable_cache {
            self.cache.insert(path_str, document.clone());
        }

        Ok(document)
    }

    /// Read OCR text dumps, one per screenshot, in the given order.
    pub async fn read_linkedin_text<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LinkedInSource> {
        let mut blocks = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                warn!("Skipping missing LinkedIn text file: {}", path.display());
                continue;
            }
            let text = PlainTextExtractor.extract(path).await?;
            debug!("Read {} chars of OCR text from {}", text.chars().count(), path.display());
            blocks.push(text);
        }

        if blocks.is_empty() {
            return Err(StrategistError::InputUnavailable(
                "No readable LinkedIn text files were provided".to_string(),
            ));
        }

        info!("Loaded {} LinkedIn text block(s)", blocks.len());
        Ok(LinkedInSource::OcrText(blocks))
    }

    pub async fn read_manual_profile(&self, path: &Path) -> Result<ManualLinkedInInput> {
        if !path.exists() {
            return Err(StrategistError::InputUnavailable(format!(
                "LinkedIn profile file not found: {}",
                path.display()
            )));
        }
        let json = fs::read_to_string(path).await?;
        parse_manual_profile(&json)
    }

    fn detect_format(&self, path: &Path) -> Result<ResumeFormat> {
        let format = ResumeFormat::from_path(path).ok_or_else(|| {
            StrategistError::UnsupportedFormat(format!(
                "Unsupported resume format for '{}'. Supported formats: {}",
                path.display(),
                ResumeFormat::supported_list()
            ))
        })?;

        if format == ResumeFormat::Doc {
            return Err(StrategistError::UnsupportedFormat(
                "Legacy .doc files cannot be read. Convert the resume to .docx or .txt and try again"
                    .to_string(),
            ));
        }
        if !reader_available(format) {
            return Err(StrategistError::UnsupportedFormat(format!(
                "{} support is not compiled in. Rebuild with the '{}' feature or convert the resume to .txt",
                format,
                format.extension()
            )));
        }

        Ok(format)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Parse manual profile JSON; absent fields default to empty.
pub fn parse_manual_profile(json: &str) -> Result<ManualLinkedInInput> {
    Ok(serde_json::from_str(json)?)
}
