// Load text from files for the CLI and batch mode.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SummifyError};

/// Extensions accepted by `read_file` and picked up by batch mode.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["txt", "md", "csv", "json", "pdf"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn read_file(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "txt" | "md" | "csv" | "json" => {
            let mut file = File::open(path)?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        "pdf" => pdf_extract::extract_text(path).map_err(|e| SummifyError::Extraction(e.to_string())),
        _ => Err(SummifyError::UnsupportedFormat(ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("notes.txt");
        let mut file = File::create(&file_path)?;
        writeln!(file, "Hello, World!")?;

        assert_eq!(read_file(&file_path)?, "Hello, World!\n");
        Ok(())
    }

    #[test]
    fn test_read_markdown_uppercase_extension() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("README.MD");
        std::fs::write(&file_path, "# Title")?;

        assert_eq!(read_file(&file_path)?, "# Title");
        Ok(())
    }

    #[test]
    fn test_unsupported_extension() {
        let err = read_file(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, SummifyError::UnsupportedFormat(ext) if ext == "png"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_file(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, SummifyError::Io(_)));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a/b/report.pdf")));
        assert!(is_supported(Path::new("data.CSV")));
        assert!(!is_supported(Path::new("binary.exe")));
        assert!(!is_supported(Path::new("Makefile")));
    }
}
