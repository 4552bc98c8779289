//! JSON pretty-printing and token colouring for assistant output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?"#,
    )
    .expect("token pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Boolean,
    Null,
    Number,
}

impl TokenKind {
    /// Classifies one match of the token pattern. Quoted tokens ending in a
    /// colon are object keys.
    pub fn classify(token: &str) -> Self {
        if token.starts_with('"') {
            if token.ends_with(':') {
                TokenKind::Key
            } else {
                TokenKind::String
            }
        } else if token == "true" || token == "false" {
            TokenKind::Boolean
        } else if token == "null" {
            TokenKind::Null
        } else {
            TokenKind::Number
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Key => "json-key",
            TokenKind::String => "json-string",
            TokenKind::Boolean => "json-boolean",
            TokenKind::Null => "json-null",
            TokenKind::Number => "json-number",
        }
    }
}

/// Markup for a JSON candidate. Both variants hold HTML-safe text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedJson {
    Highlighted(String),
    Invalid(String),
}

impl RenderedJson {
    pub fn html(&self) -> &str {
        match self {
            RenderedJson::Highlighted(html) | RenderedJson::Invalid(html) => html,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, RenderedJson::Invalid(_))
    }
}

pub fn render_json(text: &str) -> RenderedJson {
    match pretty_json(text) {
        Ok(pretty) => RenderedJson::Highlighted(highlight_tokens(&escape_html(&pretty))),
        Err(err) => {
            tracing::debug!(%err, "rendering unparsable JSON as plain text");
            RenderedJson::Invalid(escape_html(text))
        }
    }
}

pub fn pretty_json(text: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Wraps every token of already-escaped JSON text in a classed span.
pub fn highlight_tokens(escaped: &str) -> String {
    TOKEN_PATTERN
        .replace_all(escaped, |caps: &Captures<'_>| {
            let token = &caps[0];
            let kind = TokenKind::classify(token);
            format!(r#"<span class="{}">{}</span>"#, kind.css_class(), token)
        })
        .into_owned()
}

/// A message split around the JSON candidate it appears to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmbeddedJson<'a> {
    pub before: &'a str,
    pub json: &'a str,
    pub after: &'a str,
}

/// Splits `content` at its first `{` and last `}`.
///
/// This is a positional heuristic, not a bracket matcher: braces in the
/// prose or several separate objects produce a candidate that fails to
/// parse and is shown as invalid JSON.
pub fn split_embedded_json(content: &str) -> Option<EmbeddedJson<'_>> {
    let open = content.find('{')?;
    let close = content.rfind('}')?;

    // A `}` that precedes every `{` selects the text between the two.
    let end = close + 1;
    let (start, stop) = if open <= end { (open, end) } else { (end, open) };

    Some(EmbeddedJson {
        before: &content[..open],
        json: &content[start..stop],
        after: &content[end..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tokens() {
        assert_eq!(TokenKind::classify(r#""name":"#), TokenKind::Key);
        assert_eq!(TokenKind::classify(r#""name" :"#), TokenKind::Key);
        assert_eq!(TokenKind::classify(r#""Alice""#), TokenKind::String);
        assert_eq!(TokenKind::classify("false"), TokenKind::Boolean);
        assert_eq!(TokenKind::classify("null"), TokenKind::Null);
        assert_eq!(TokenKind::classify("-1.5e3"), TokenKind::Number);
    }

    #[test]
    fn key_and_string_tie_break() {
        let html = render_json(r#"{"a":"b"}"#);
        assert_eq!(
            html.html(),
            "{\n  <span class=\"json-key\">\"a\":</span> <span class=\"json-string\">\"b\"</span>\n}"
        );
    }

    #[test]
    fn escapes_markup_inside_strings() {
        let html = render_json(r#"{"tag":"<b>&</b>"}"#);
        assert!(html.html().contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.html().contains("<b>"));
    }

    #[test]
    fn invalid_json_is_escaped_verbatim() {
        let rendered = render_json("{not json <here>}");
        assert_eq!(
            rendered,
            RenderedJson::Invalid("{not json &lt;here&gt;}".to_string())
        );
    }

    #[test]
    fn keeps_key_order() {
        let pretty = pretty_json(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        assert_eq!(pretty, "{\n  \"z\": 1,\n  \"a\": 2,\n  \"m\": 3\n}");
    }

    #[test]
    fn split_around_single_object() {
        let parts = split_embedded_json(r#"Here: {"id":1}. Done."#).unwrap();
        assert_eq!(parts.before, "Here: ");
        assert_eq!(parts.json, r#"{"id":1}"#);
        assert_eq!(parts.after, ". Done.");
    }

    #[test]
    fn split_spans_multiple_objects() {
        let parts = split_embedded_json(r#"{"a":1} and {"b":2}"#).unwrap();
        assert_eq!(parts.json, r#"{"a":1} and {"b":2}"#);
        assert!(render_json(parts.json).is_invalid());
    }

    #[test]
    fn split_with_reversed_braces() {
        let parts = split_embedded_json("} foo {").unwrap();
        assert_eq!(parts.before, "} foo ");
        assert_eq!(parts.json, " foo ");
        assert_eq!(parts.after, " foo {");
    }

    #[test]
    fn split_needs_both_braces() {
        assert!(split_embedded_json("no braces").is_none());
        assert!(split_embedded_json("only { open").is_none());
    }
}
