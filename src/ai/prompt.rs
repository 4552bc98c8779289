//! Turns a message and its attachments into prompt text.
//!
//! CSV attachments are inlined as-is; spreadsheets are flattened to CSV from
//! their first sheet.

use crate::attachments::decode_data_url;
use crate::files::{CSV_MIME, XLS_MIME, XLSX_MIME, file_extension};
use crate::types::{Attachment, ChatMessage};
use anyhow::{Result, anyhow};
use calamine::Reader;
use std::io::Cursor;

pub const SPREADSHEET_ROW_LIMIT: usize = 200;

pub const SYSTEM_PROMPT: &str = r#"You are JSON Generator, an assistant that designs and produces JSON data.

When responding:
- Start with one short sentence describing what you produced
- Then output exactly one JSON object, without code fences
- Use realistic sample values and consistent field naming
- When the user attaches CSV or spreadsheet data, derive field names, types and nesting from it
- If the request is ambiguous, make a reasonable choice and mention it after the JSON"#;

/// Text sent to the model for `message`, with readable attachments appended.
pub fn message_prompt(message: &ChatMessage) -> String {
    let mut prompt = message.content.clone();
    for attachment in &message.attachments {
        prompt.push_str("\n\n");
        match attachment_text(attachment) {
            Ok(text) => {
                prompt.push_str(&format!(
                    "Attached file `{}`:\n```csv\n{}\n```",
                    attachment.name,
                    text.trim_end()
                ));
            }
            Err(err) => {
                tracing::warn!(name = %attachment.name, %err, "attachment not readable");
                prompt.push_str(&format!(
                    "Attached file `{}` could not be read.",
                    attachment.name
                ));
            }
        }
    }
    prompt
}

fn attachment_text(attachment: &Attachment) -> Result<String> {
    let bytes = decode_data_url(&attachment.url)
        .ok_or_else(|| anyhow!("attachment is not an inline data URL"))?;

    let extension = file_extension(&attachment.name);
    let is_spreadsheet = matches!(attachment.content_type.as_str(), XLS_MIME | XLSX_MIME)
        || matches!(extension.as_str(), "xls" | "xlsx");

    if is_spreadsheet {
        spreadsheet_to_csv(bytes)
    } else if attachment.content_type == CSV_MIME
        || attachment.content_type.starts_with("text")
        || extension == "csv"
    {
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    } else {
        Err(anyhow!(
            "unsupported content type '{}'",
            attachment.content_type
        ))
    }
}

/// First sheet of an xls/xlsx workbook as CSV, capped at
/// [`SPREADSHEET_ROW_LIMIT`] rows.
pub fn spreadsheet_to_csv(bytes: Vec<u8>) -> Result<String> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| anyhow!("failed to read workbook: {}", e))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets"))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| anyhow!("failed to read sheet '{}': {}", sheet, e))?;

    let lines: Vec<String> = range
        .rows()
        .take(SPREADSHEET_ROW_LIMIT)
        .map(|row| {
            row.iter()
                .map(|cell| csv_field(&cell.to_string()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    Ok(lines.join("\n"))
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
