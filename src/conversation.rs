//! Conversation state and the per-message render plan consumed by the chat
//! view.

use crate::attachments::{decode_text_data_url, text_preview};
use crate::highlight::{RenderedJson, render_json, split_embedded_json};
use crate::markdown::markdown_to_html;
use crate::types::{Attachment, ChatMessage, Role};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    loading: bool,
    streaming: Option<usize>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Appends the user's message and marks a reply as outstanding. Returns
    /// the history the transport should see, ending with this message.
    pub fn push_user(&mut self, text: &str, attachments: Vec<Attachment>) -> Vec<ChatMessage> {
        self.messages.push(ChatMessage::user(text.trim(), attachments));
        self.loading = true;
        self.streaming = None;
        self.messages.clone()
    }

    /// Applies the accumulated reply text. The assistant message is created
    /// on the first non-empty snapshot and updated in place afterwards.
    pub fn apply_stream_snapshot(&mut self, content: &str) {
        match self.streaming {
            Some(index) => {
                if let Some(message) = self.messages.get_mut(index) {
                    message.content.clear();
                    message.content.push_str(content);
                }
            }
            None if !content.is_empty() => {
                self.streaming = Some(self.messages.len());
                self.messages.push(ChatMessage::assistant(content));
            }
            None => {}
        }
    }

    pub fn finish(&mut self) {
        self.loading = false;
        self.streaming = None;
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.finish();
    }

    /// True while a reply is outstanding and nothing of it has arrived yet.
    pub fn shows_pending_indicator(&self) -> bool {
        self.loading
            && self
                .messages
                .last()
                .is_some_and(|message| !message.is_assistant())
    }
}

pub fn author_label(role: Role) -> &'static str {
    match role {
        Role::Assistant => "JSON Generator",
        Role::User => "You",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    Markdown(String),
    Embedded {
        before: String,
        json: RenderedJson,
        after: Option<String>,
    },
}

pub fn plan_message_body(message: &ChatMessage) -> MessageBody {
    if message.is_assistant()
        && let Some(parts) = split_embedded_json(&message.content)
    {
        return MessageBody::Embedded {
            before: parts.before.to_string(),
            json: render_json(parts.json),
            after: (!parts.after.is_empty()).then(|| parts.after.to_string()),
        };
    }

    MessageBody::Markdown(markdown_to_html(&message.content))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachmentView {
    Image { src: String, alt: String },
    Text(String),
    Hidden,
}

pub fn plan_attachment(attachment: &Attachment) -> AttachmentView {
    if attachment.content_type.starts_with("image") {
        AttachmentView::Image {
            src: attachment.url.clone(),
            alt: attachment.name.clone(),
        }
    } else if attachment.content_type.starts_with("text") {
        let preview = decode_text_data_url(&attachment.url)
            .map(|text| text_preview(&text))
            .unwrap_or_default();
        AttachmentView::Text(preview)
    } else {
        AttachmentView::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_indicator_until_first_chunk() {
        let mut conversation = Conversation::new();
        conversation.push_user("make a user object", Vec::new());
        assert!(conversation.shows_pending_indicator());

        conversation.apply_stream_snapshot("");
        assert!(conversation.shows_pending_indicator());

        conversation.apply_stream_snapshot("Sure");
        assert!(!conversation.shows_pending_indicator());
        assert!(conversation.is_loading());

        conversation.apply_stream_snapshot("Sure, here it is");
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].content, "Sure, here it is");

        conversation.finish();
        assert!(!conversation.is_loading());
    }

    #[test]
    fn failed_request_keeps_history() {
        let mut conversation = Conversation::new();
        conversation.push_user("first", Vec::new());
        conversation.finish();

        assert_eq!(conversation.messages().len(), 1);
        assert!(!conversation.shows_pending_indicator());
        assert!(conversation.can_submit("retry"));
    }

    #[test]
    fn cannot_submit_blank_or_while_loading() {
        let mut conversation = Conversation::new();
        assert!(!conversation.can_submit("   "));
        conversation.push_user("hi", Vec::new());
        assert!(!conversation.can_submit("again"));
    }

    #[test]
    fn user_braces_stay_markdown() {
        let message = ChatMessage::user(r#"{"a":1}"#, Vec::new());
        assert!(matches!(plan_message_body(&message), MessageBody::Markdown(_)));
    }

    #[test]
    fn attachment_kinds() {
        let image = Attachment {
            name: "a.png".into(),
            content_type: "image/png".into(),
            url: "data:image/png;base64,AAAA".into(),
        };
        assert!(matches!(plan_attachment(&image), AttachmentView::Image { .. }));

        let sheet = Attachment {
            name: "a.xlsx".into(),
            content_type: crate::files::XLSX_MIME.into(),
            url: "data:application/x;base64,AAAA".into(),
        };
        assert_eq!(plan_attachment(&sheet), AttachmentView::Hidden);

        let broken = Attachment {
            name: "a.csv".into(),
            content_type: "text/csv".into(),
            url: "data:text/csv;base64,%%%".into(),
        };
        assert_eq!(plan_attachment(&broken), AttachmentView::Text(String::new()));
    }
}
