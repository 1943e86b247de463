//! Artifact file names
//!
//! Results are named after the input with its last extension replaced:
//! `report.pdf` encrypts to `report_encode.txt` and `report_encode.txt`
//! decrypts to `report_encode_decode.txt`. Text results use fixed names.

use std::path::{Path, PathBuf};

/// Default artifact name for an encrypted text payload
pub const TEXT_ENCODED_NAME: &str = "text_encode.txt";

/// Default artifact name for a decrypted text payload
pub const TEXT_DECODED_NAME: &str = "text_decode.txt";

/// Which direction an artifact was produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Direction::Encode => "_encode.txt",
            Direction::Decode => "_decode.txt",
        }
    }
}

/// File name with its final extension removed
///
/// Only the last `.ext` goes; a dotfile like `.env` loses its whole name.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() => &file_name[..idx],
        _ => file_name,
    }
}

/// Artifact path for a file input
///
/// Placed in `output_dir` when given, otherwise next to the input.
pub fn artifact_path(input: &Path, direction: Direction, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{}{}", strip_extension(&file_name), direction.suffix());

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Artifact path for a text input
pub fn text_artifact_path(direction: Direction, output_dir: Option<&Path>) -> PathBuf {
    let name = match direction {
        Direction::Encode => TEXT_ENCODED_NAME,
        Direction::Decode => TEXT_DECODED_NAME,
    };

    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("report.pdf"), "report");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension(".env"), "");
    }

    #[test]
    fn test_artifact_path_next_to_input() {
        let path = artifact_path(Path::new("/data/report.pdf"), Direction::Encode, None);
        assert_eq!(path, PathBuf::from("/data/report_encode.txt"));

        let path = artifact_path(Path::new("/data/report_encode.txt"), Direction::Decode, None);
        assert_eq!(path, PathBuf::from("/data/report_encode_decode.txt"));
    }

    #[test]
    fn test_artifact_path_in_output_dir() {
        let path = artifact_path(
            Path::new("/data/photo.jpg"),
            Direction::Encode,
            Some(Path::new("/out")),
        );
        assert_eq!(path, PathBuf::from("/out/photo_encode.txt"));
    }

    #[test]
    fn test_text_artifact_path() {
        assert_eq!(
            text_artifact_path(Direction::Encode, None),
            PathBuf::from("text_encode.txt")
        );
        assert_eq!(
            text_artifact_path(Direction::Decode, Some(Path::new("/out"))),
            PathBuf::from("/out/text_decode.txt")
        );
    }
}
