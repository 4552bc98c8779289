//! Upload acceptance rules shared by the file dialog, drag-and-drop and paste.

use crate::types::CandidateFile;
use percent_encoding::percent_decode_str;
use std::path::PathBuf;

pub const CSV_MIME: &str = "text/csv";
pub const XLS_MIME: &str = "application/vnd.ms-excel";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const ACCEPTED_MIME_TYPES: [&str; 3] = [CSV_MIME, XLS_MIME, XLSX_MIME];
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];

/// Value of the `accept` attribute on the hidden file input. Only a hint to
/// the picker; selections still go through [`is_valid_file`].
pub const FILE_INPUT_ACCEPT: &str = ".csv,.xls,.xlsx,application/vnd.ms-excel,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet,text/csv";

pub fn is_valid_file(file: &CandidateFile) -> bool {
    if ACCEPTED_MIME_TYPES.contains(&file.content_type.as_str()) {
        return true;
    }

    let extension = file_extension(&file.name);
    ACCEPTED_EXTENSIONS.contains(&extension.as_str())
}

/// Lowercased text after the last `.` of `name`. A name without a dot is
/// its own extension.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// File paths carried by pasted clipboard text as `file://` URIs, one per
/// line. Plain text, including bare paths, carries no files.
pub fn clipboard_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| {
            let uri_path = line.strip_prefix("file://")?;
            let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;
            Some(PathBuf::from(decoded.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, content_type: &str) -> CandidateFile {
        CandidateFile::new(name, content_type, Vec::new())
    }

    #[test]
    fn accepts_by_mime_type() {
        assert!(is_valid_file(&named("upload", CSV_MIME)));
        assert!(is_valid_file(&named("upload.bin", XLS_MIME)));
        assert!(is_valid_file(&named("upload.bin", XLSX_MIME)));
    }

    #[test]
    fn accepts_by_extension_case_insensitively() {
        assert!(is_valid_file(&named("DATA.CSV", "")));
        assert!(is_valid_file(&named("report.Xlsx", "application/octet-stream")));
        assert!(is_valid_file(&named("legacy.xls", "")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_valid_file(&named("notes.pdf", "application/pdf")));
        assert!(!is_valid_file(&named("photo.png", "image/png")));
        assert!(!is_valid_file(&named("archive.csv.zip", "application/zip")));
        assert!(!is_valid_file(&named("plain", "text/plain")));
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_paths_from_file_uris() {
        let paths = clipboard_paths("file:///tmp/My%20Data.csv\nnot a path\nfile:///tmp/other.xlsx\n");
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/tmp/My Data.csv"),
                PathBuf::from("/tmp/other.xlsx")
            ]
        );
    }

    #[test]
    fn pasted_plain_path_is_not_a_file() {
        assert!(clipboard_paths("/etc/hosts").is_empty());
        assert!(clipboard_paths("see /tmp/data.csv").is_empty());
    }

    #[test]
    fn extension_of_dotless_name_is_the_name() {
        assert_eq!(file_extension("CSV"), "csv");
        assert_eq!(file_extension("a.b.XLSX"), "xlsx");
        assert_eq!(file_extension("trailing."), "");
    }
}
