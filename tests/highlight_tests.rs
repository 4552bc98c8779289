//! Integration tests for JSON rendering
//!
//! Covers highlighting, invalid-text escaping and embedded JSON in replies

use jsonsmith::conversation::{MessageBody, plan_message_body};
use jsonsmith::highlight::{RenderedJson, render_json, split_embedded_json};
use jsonsmith::types::ChatMessage;
use regex::Regex;
use serde_json::Value;

fn strip_markup(html: &str) -> String {
    let spans = Regex::new(r#"</?span[^>]*>"#).unwrap();
    spans
        .replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

mod render_tests {
    use super::*;

    #[test]
    fn test_highlighted_output_round_trips() {
        let samples = [
            r#"{"name":"Ada","age":36,"admin":true,"manager":null}"#,
            r#"{"tags":["a","b"],"nested":{"score":-1.5e3}}"#,
            r#"{"markup":"<b>bold</b> & more","empty":""}"#,
            r#"[1, 2, {"x": false}]"#,
        ];

        for sample in samples {
            let rendered = render_json(sample);
            assert!(!rendered.is_invalid(), "{sample} should parse");

            let original: Value = serde_json::from_str(sample).unwrap();
            let recovered: Value = serde_json::from_str(&strip_markup(rendered.html())).unwrap();
            assert_eq!(original, recovered);
        }
    }

    #[test]
    fn test_every_token_kind_gets_a_class() {
        let html = render_json(r#"{"s":"v","n":1,"b":false,"z":null}"#);
        let html = html.html();

        for class in ["json-key", "json-string", "json-number", "json-boolean", "json-null"] {
            assert!(html.contains(class), "missing {class} in {html}");
        }
    }

    #[test]
    fn test_invalid_text_is_escaped_not_highlighted() {
        let rendered = render_json("{ <script>alert(1)</script> & }");

        assert_eq!(
            rendered,
            RenderedJson::Invalid("{ &lt;script&gt;alert(1)&lt;/script&gt; &amp; }".to_string())
        );
        assert!(!rendered.html().contains("<span"));
    }

    #[test]
    fn test_key_wins_over_string() {
        let rendered = render_json(r#"{"a":"b"}"#);

        assert_eq!(
            rendered.html(),
            "{\n  <span class=\"json-key\">\"a\":</span> <span class=\"json-string\">\"b\"</span>\n}"
        );
    }
}

mod embedded_tests {
    use super::*;

    #[test]
    fn test_reply_with_object_is_split() {
        let message = ChatMessage::assistant(r#"Here is your data: {"id": 1} Enjoy!"#);

        match plan_message_body(&message) {
            MessageBody::Embedded { before, json, after } => {
                assert_eq!(before, "Here is your data: ");
                assert!(!json.is_invalid());
                assert!(json.html().contains("json-key"));
                assert_eq!(after.as_deref(), Some(" Enjoy!"));
            }
            other => panic!("expected embedded JSON, got {other:?}"),
        }
    }

    #[test]
    fn test_prose_around_object_is_kept() {
        let message = ChatMessage::assistant(r#"Here is your data: {"id":1,"name":"Alice"}. Done."#);

        match plan_message_body(&message) {
            MessageBody::Embedded { before, json, after } => {
                assert_eq!(before, "Here is your data: ");
                assert_eq!(after.as_deref(), Some(". Done."));
                let recovered: Value = serde_json::from_str(&strip_markup(json.html())).unwrap();
                assert_eq!(recovered, serde_json::json!({"id": 1, "name": "Alice"}));
            }
            other => panic!("expected embedded JSON, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_object_has_no_after_text() {
        let message = ChatMessage::assistant(r#"Result {"ok": true}"#);

        match plan_message_body(&message) {
            MessageBody::Embedded { after, .. } => assert_eq!(after, None),
            other => panic!("expected embedded JSON, got {other:?}"),
        }
    }

    #[test]
    fn test_two_objects_render_as_invalid() {
        let message = ChatMessage::assistant(r#"First {"a": 1} then {"b": 2}"#);

        match plan_message_body(&message) {
            MessageBody::Embedded { json, .. } => {
                assert!(json.is_invalid());
                assert!(json.html().contains(r#"{"a": 1} then {"b": 2}"#));
            }
            other => panic!("expected embedded JSON, got {other:?}"),
        }
    }

    #[test]
    fn test_user_messages_stay_markdown() {
        let message = ChatMessage::user(r#"Make {"a": 1} bigger"#, Vec::new());

        assert!(matches!(
            plan_message_body(&message),
            MessageBody::Markdown(_)
        ));
    }

    #[test]
    fn test_reply_without_braces_is_markdown() {
        assert!(split_embedded_json("no objects here").is_none());

        let message = ChatMessage::assistant("**Sure**, what fields do you need?");
        match plan_message_body(&message) {
            MessageBody::Markdown(html) => assert!(html.contains("<strong>Sure</strong>")),
            other => panic!("expected markdown, got {other:?}"),
        }
    }
}
