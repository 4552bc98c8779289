use crate::attachments::{EntryPoint, PendingFileSet, offer_with_notice};
use crate::highlight::{RenderedJson, render_json};
use crate::notice::NoticeQueue;
use crate::types::CandidateFile;
use crate::views::toast::schedule_dismiss;
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Pretty-printed, highlighted JSON, or the raw candidate in the error style
/// when it does not parse.
#[component]
pub fn JsonBlock(rendered: RenderedJson) -> Element {
    let class = if rendered.is_invalid() {
        "json-block json-invalid"
    } else {
        "json-block"
    };
    rsx! {
        pre { class: class, dangerous_inner_html: "{rendered.html()}" }
    }
}

#[component]
pub fn JsonSource(json: String) -> Element {
    rsx! {
        JsonBlock { rendered: render_json(&json) }
    }
}

pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Reads every file the engine offers. Unreadable files come back empty so
/// validation still sees the whole batch.
pub async fn read_candidates(engine: Arc<dyn FileEngine>) -> Vec<CandidateFile> {
    let reads = engine.files().into_iter().map(|path| {
        let engine = engine.clone();
        async move {
            let bytes = engine.read_file(&path).await.unwrap_or_default();
            CandidateFile::from_name(display_file_name(&path), bytes)
        }
    });
    futures::future::join_all(reads).await
}

/// Offers a batch to the pending set, raising one notice when it is
/// rejected.
pub fn offer_files(
    mut pending: Signal<PendingFileSet>,
    mut notices: Signal<NoticeQueue>,
    candidates: Vec<CandidateFile>,
    entry: EntryPoint,
) {
    let notice = {
        let mut set = pending.write();
        let mut queue = notices.write();
        offer_with_notice(&mut set, &mut queue, candidates, entry)
    };
    if let Some(id) = notice {
        schedule_dismiss(notices, id);
    }
}

/// Files named by pasted clipboard text, read from disk.
#[cfg(all(
    any(feature = "desktop", feature = "mobile"),
    not(target_arch = "wasm32")
))]
pub fn clipboard_candidates() -> Vec<CandidateFile> {
    let Ok(mut clipboard) = arboard::Clipboard::new() else {
        return Vec::new();
    };
    let Ok(text) = clipboard.get_text() else {
        return Vec::new();
    };

    crate::files::clipboard_paths(&text)
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| match std::fs::read(&path) {
            Ok(bytes) => Some(CandidateFile::from_name(
                display_file_name(&path.to_string_lossy()),
                bytes,
            )),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "pasted file not readable");
                None
            }
        })
        .collect()
}

#[cfg(not(all(
    any(feature = "desktop", feature = "mobile"),
    not(target_arch = "wasm32")
)))]
pub fn clipboard_candidates() -> Vec<CandidateFile> {
    Vec::new()
}
