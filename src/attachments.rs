//! Pending upload list and the attachment encoding helpers around it.
//!
//! Batches are all-or-nothing: a batch with one rejected file leaves the
//! pending set exactly as it was.

use crate::files::is_valid_file;
use crate::notice::NoticeQueue;
use crate::types::{Attachment, CandidateFile};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

pub const TEXT_PREVIEW_CHARS: usize = 100;
const CHIP_NAME_MAX_CHARS: usize = 12;
const CHIP_NAME_KEEP_CHARS: usize = 10;
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    Dialog,
    Drop,
    Paste,
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryPoint::Dialog => "dialog",
            EntryPoint::Drop => "drop",
            EntryPoint::Paste => "paste",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttachmentError {
    #[error("Only CSV and Excel files are allowed")]
    InvalidFileType { rejected: Vec<String> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingFileSet {
    files: Vec<CandidateFile>,
}

impl PendingFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in `candidates` when every one of them passes validation.
    ///
    /// Returns the size of the pending set afterwards. An empty batch is a
    /// no-op.
    pub fn offer(
        &mut self,
        candidates: Vec<CandidateFile>,
        entry: EntryPoint,
    ) -> Result<usize, AttachmentError> {
        if candidates.is_empty() {
            return Ok(self.files.len());
        }

        let (valid, invalid) = partition(candidates);
        if !invalid.is_empty() {
            let rejected: Vec<String> = invalid.into_iter().map(|file| file.name).collect();
            tracing::debug!(%entry, ?rejected, "rejecting upload batch");
            return Err(AttachmentError::InvalidFileType { rejected });
        }

        tracing::debug!(%entry, count = valid.len(), "replacing pending files");
        self.files = valid;
        Ok(self.files.len())
    }

    /// Empties the set, handing the files to the submit path.
    pub fn take(&mut self) -> Vec<CandidateFile> {
        std::mem::take(&mut self.files)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateFile> {
        self.files.iter()
    }
}

/// Notice text for a rejected batch. Drops keep their own wording.
pub fn rejection_notice(entry: EntryPoint) -> &'static str {
    match entry {
        EntryPoint::Drop => "Only CSV and Excel files are allowed!",
        EntryPoint::Dialog | EntryPoint::Paste => "Only CSV and Excel files are allowed",
    }
}

/// Offers a batch and queues exactly one error notice when it is rejected.
/// Returns the id of that notice.
pub fn offer_with_notice(
    pending: &mut PendingFileSet,
    notices: &mut NoticeQueue,
    candidates: Vec<CandidateFile>,
    entry: EntryPoint,
) -> Option<u64> {
    match pending.offer(candidates, entry) {
        Ok(_) => None,
        Err(AttachmentError::InvalidFileType { .. }) => {
            Some(notices.error(rejection_notice(entry)))
        }
    }
}

pub fn partition(candidates: Vec<CandidateFile>) -> (Vec<CandidateFile>, Vec<CandidateFile>) {
    candidates.into_iter().partition(is_valid_file)
}

pub fn to_attachment(file: &CandidateFile) -> Attachment {
    let content_type = if file.content_type.is_empty() {
        FALLBACK_CONTENT_TYPE
    } else {
        file.content_type.as_str()
    };
    Attachment {
        name: file.name.clone(),
        content_type: content_type.to_string(),
        url: format!("data:{};base64,{}", content_type, STANDARD.encode(&file.bytes)),
    }
}

/// Payload bytes of a `data:` URL. Non-base64 payloads are returned as is.
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let (header, payload) = url.strip_prefix("data:")?.split_once(',')?;
    if header.ends_with(";base64") {
        STANDARD.decode(payload.trim()).ok()
    } else {
        Some(payload.as_bytes().to_vec())
    }
}

pub fn decode_text_data_url(url: &str) -> Option<String> {
    decode_data_url(url).and_then(|bytes| String::from_utf8(bytes).ok())
}

pub fn text_preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(TEXT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn chip_label(name: &str) -> String {
    if name.chars().count() > CHIP_NAME_MAX_CHARS {
        let head: String = name.chars().take(CHIP_NAME_KEEP_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Render key for the `index`-th file of a list; names may repeat.
pub fn item_key(index: usize, name: &str) -> String {
    format!("{index}-{name}")
}

pub fn chip_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(name: &str) -> CandidateFile {
        CandidateFile::new(name, "text/csv", b"a,b\n1,2\n".to_vec())
    }

    #[test]
    fn empty_batch_keeps_current_files() {
        let mut pending = PendingFileSet::new();
        pending.offer(vec![csv("one.csv")], EntryPoint::Drop).unwrap();

        assert_eq!(pending.offer(Vec::new(), EntryPoint::Paste), Ok(1));
        assert_eq!(pending.iter().next().unwrap().name, "one.csv");
    }

    #[test]
    fn later_batch_replaces_earlier_one() {
        let mut pending = PendingFileSet::new();
        pending
            .offer(vec![csv("a.csv"), csv("b.csv")], EntryPoint::Drop)
            .unwrap();
        pending.offer(vec![csv("c.csv")], EntryPoint::Drop).unwrap();

        let names: Vec<_> = pending.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["c.csv"]);
    }

    #[test]
    fn take_empties_the_set() {
        let mut pending = PendingFileSet::new();
        pending.offer(vec![csv("a.csv")], EntryPoint::Dialog).unwrap();

        let taken = pending.take();
        assert_eq!(taken.len(), 1);
        assert!(pending.is_empty());
    }

    #[test]
    fn data_url_round_trip() {
        let attachment = to_attachment(&csv("a.csv"));
        assert!(attachment.url.starts_with("data:text/csv;base64,"));
        assert_eq!(
            decode_text_data_url(&attachment.url).as_deref(),
            Some("a,b\n1,2\n")
        );
    }

    #[test]
    fn unknown_content_type_falls_back_to_octet_stream() {
        let attachment = to_attachment(&CandidateFile::new("x", "", vec![1, 2]));
        assert_eq!(attachment.content_type, "application/octet-stream");
    }

    #[test]
    fn bad_data_url_has_no_text() {
        assert_eq!(decode_text_data_url("data:text/plain;base64,@@@"), None);
        assert_eq!(decode_text_data_url("https://example.com/a.txt"), None);
        assert_eq!(
            decode_text_data_url("data:text/plain,hello").as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn preview_truncates_after_limit() {
        let exact = "x".repeat(100);
        assert_eq!(text_preview(&exact), exact);

        let long = "y".repeat(101);
        assert_eq!(text_preview(&long), format!("{}...", "y".repeat(100)));
    }

    #[test]
    fn chip_labels() {
        assert_eq!(chip_label("short.csv"), "short.csv");
        assert_eq!(chip_label("quarterly_sales.xlsx"), "quarterly_...");
        assert_eq!(chip_extension("quarterly_sales.xlsx"), "XLSX");
    }
}
