//! Resume format detection

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeFormat {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl ResumeFormat {
    pub const ALL: [ResumeFormat; 4] = [
        ResumeFormat::Pdf,
        ResumeFormat::Doc,
        ResumeFormat::Docx,
        ResumeFormat::Txt,
    ];

    /// Case-insensitive; accepts the extension with or without a leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "doc" => Some(ResumeFormat::Doc),
            "docx" => Some(ResumeFormat::Docx),
            "txt" => Some(ResumeFormat::Txt),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Doc => "doc",
            ResumeFormat::Docx => "docx",
            ResumeFormat::Txt => "txt",
        }
    }

    /// Comma-separated list of accepted extensions, for error messages
    pub fn supported_list() -> String {
        ResumeFormat::ALL
            .iter()
            .map(|f| format!(".{}", f.extension()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResumeFormat::Pdf => "PDF",
            ResumeFormat::Doc => "DOC",
            ResumeFormat::Docx => "DOCX",
            ResumeFormat::Txt => "TXT",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ResumeFormat::from_extension("PDF"), Some(ResumeFormat::Pdf));
        assert_eq!(ResumeFormat::from_extension(".docx"), Some(ResumeFormat::Docx));
        assert_eq!(ResumeFormat::from_extension("doc"), Some(ResumeFormat::Doc));
        assert_eq!(ResumeFormat::from_extension("md"), None);
        assert_eq!(ResumeFormat::from_extension(""), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ResumeFormat::from_path(Path::new("/tmp/resume.Txt")),
            Some(ResumeFormat::Txt)
        );
        assert_eq!(ResumeFormat::from_path(Path::new("resume")), None);
        assert_eq!(ResumeFormat::from_path(Path::new("resume.xyz")), None);
    }

    #[test]
    fn test_supported_list() {
        assert_eq!(ResumeFormat::supported_list(), ".pdf, .doc, .docx, .txt");
    }
}
