use crate::ai::{chat_reply_stream_poll, chat_reply_stream_start};
use crate::attachments::{
    EntryPoint, PendingFileSet, chip_extension, chip_label, item_key, to_attachment,
};
use crate::conversation::{
    AttachmentView, Conversation, MessageBody, author_label, plan_attachment, plan_message_body,
};
use crate::files::FILE_INPUT_ACCEPT;
use crate::gallery::quick_starts;
use crate::notice::{NoticeQueue, RATE_LIMIT_MESSAGE};
use crate::runtime::sleep;
use crate::types::{Attachment, ChatMessage, Role};
use crate::views::gallery::apply_example;
use crate::views::icons::{ATTACHMENT, BOT, FILE, Icon, JSON_LOGO, SEND, USER};
use crate::views::shared::{JsonBlock, clipboard_candidates, offer_files, read_candidates};
use crate::views::toast::push_error;
use dioxus::html::HasFileData;
use dioxus::prelude::*;
use std::time::Duration;

const STREAM_POLL_INTERVAL: Duration = Duration::from_millis(80);
const FILE_INPUT_ID: &str = "file-upload";

#[component]
pub fn ChatView(
    input: Signal<String>,
    pending: Signal<PendingFileSet>,
    notices: Signal<NoticeQueue>,
) -> Element {
    let mut conversation = use_signal(Conversation::new);
    let mut input = input;
    let mut pending = pending;

    use_effect(move || {
        let count = conversation.read().messages().len();
        if count > 0 {
            let _ = document::eval(
                "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });",
            );
        }
    });

    let mut send_message = move || {
        let text = input();
        if !conversation.read().can_submit(&text) {
            return;
        }

        let attachments: Vec<Attachment> = pending
            .with_mut(|set| set.take())
            .iter()
            .map(to_attachment)
            .collect();
        let history = conversation.with_mut(|conv| conv.push_user(&text, attachments));
        input.set(String::new());

        spawn(async move {
            match chat_reply_stream_start(history).await {
                Ok(stream_id) => loop {
                    match chat_reply_stream_poll(stream_id).await {
                        Ok((content, done)) => {
                            conversation.with_mut(|conv| conv.apply_stream_snapshot(&content));
                            if done {
                                break;
                            }
                        }
                        Err(err) => {
                            tracing::warn!(%err, "chat stream failed");
                            push_error(notices, RATE_LIMIT_MESSAGE);
                            break;
                        }
                    }
                    sleep(STREAM_POLL_INTERVAL).await;
                },
                Err(err) => {
                    tracing::warn!(%err, "chat request not started");
                    push_error(notices, RATE_LIMIT_MESSAGE);
                }
            }
            conversation.with_mut(|conv| conv.finish());
        });
    };

    let snapshot = conversation.read().clone();
    let has_messages = !snapshot.messages().is_empty();
    let can_submit = snapshot.can_submit(&input.read());
    let pending_files: Vec<(String, String)> = pending
        .read()
        .iter()
        .map(|file| (file.name.clone(), chip_extension(&file.name)))
        .collect();

    rsx! {
        div { class: "chat-pane",
            if has_messages {
                div { id: "chat-list", class: "chat-list card",
                    for (index, message) in snapshot.messages().iter().enumerate() {
                        MessageRow {
                            key: "{message.id.0}",
                            message: message.clone(),
                            is_last: index + 1 == snapshot.messages().len(),
                        }
                    }
                    if snapshot.shows_pending_indicator() {
                        PendingIndicator {}
                    }
                    div { id: "chat-end" }
                }
            } else {
                EmptyState { input }
            }

            form {
                class: "composer",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send_message();
                },
                if !pending_files.is_empty() {
                    div { class: "pending-files",
                        for (index, (name, extension)) in pending_files.into_iter().enumerate() {
                            div { key: "{item_key(index, &name)}", class: "file-chip",
                                Icon { svg: FILE, class: "file-chip-icon" }
                                span { class: "file-chip-name", "{chip_label(&name)}" }
                                span { class: "file-chip-ext", "{extension}" }
                            }
                        }
                    }
                }

                input {
                    id: FILE_INPUT_ID,
                    class: "hidden",
                    r#type: "file",
                    multiple: true,
                    accept: FILE_INPUT_ACCEPT,
                    onchange: move |evt: FormEvent| async move {
                        if let Some(engine) = evt.files() {
                            let candidates = read_candidates(engine).await;
                            offer_files(pending, notices, candidates, EntryPoint::Dialog);
                        }
                    },
                }

                div { class: "composer-bar",
                    label {
                        class: "attach-btn",
                        r#for: FILE_INPUT_ID,
                        aria_label: "Upload Files",
                        Icon { svg: ATTACHMENT }
                    }
                    input {
                        class: "composer-input",
                        placeholder: "Describe the JSON structure you need...",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                        onpaste: move |_| {
                            let candidates = clipboard_candidates();
                            if !candidates.is_empty() {
                                offer_files(pending, notices, candidates, EntryPoint::Paste);
                            }
                        },
                    }
                    button {
                        class: if can_submit { "send-btn" } else { "send-btn disabled" },
                        r#type: "submit",
                        disabled: !can_submit,
                        aria_label: "Send",
                        Icon { svg: SEND }
                    }
                }
            }

            if has_messages && !snapshot.is_loading() {
                button {
                    class: "btn btn-ghost clear-btn",
                    r#type: "button",
                    onclick: move |_| conversation.with_mut(|conv| conv.reset()),
                    "New conversation"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage, is_last: bool) -> Element {
    let role_class = match message.role {
        Role::Assistant => "assistant",
        Role::User => "user",
    };
    let divider = if is_last { "" } else { "with-divider" };
    let avatar = match message.role {
        Role::Assistant => BOT,
        Role::User => USER,
    };
    let body = plan_message_body(&message);

    rsx! {
        div { class: "message-row {role_class} {divider}",
            div { class: "avatar {role_class}", Icon { svg: avatar } }
            div { class: "message-stack",
                div { class: "message-author {role_class}", "{author_label(message.role)}" }
                div { class: "message-body",
                    {
                        match body {
                            MessageBody::Embedded { before, json, after } => rsx! {
                                div {
                                    p { class: "prose-before", "{before}" }
                                    JsonBlock { rendered: json }
                                    if let Some(after) = after {
                                        p { class: "prose-after", "{after}" }
                                    }
                                }
                            },
                            MessageBody::Markdown(html) => rsx! {
                                div { class: "md", dangerous_inner_html: "{html}" }
                            },
                        }
                    }
                }
                if !message.attachments.is_empty() {
                    div { class: "message-attachments",
                        for (index, attachment) in message.attachments.iter().enumerate() {
                            AttachmentPreview { key: "{item_key(index, &attachment.name)}", attachment: attachment.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttachmentPreview(attachment: Attachment) -> Element {
    match plan_attachment(&attachment) {
        AttachmentView::Image { src, alt } => rsx! {
            img { class: "attachment-image", src: "{src}", alt: "{alt}" }
        },
        AttachmentView::Text(preview) => rsx! {
            div { class: "attachment-text", "{preview}" }
        },
        AttachmentView::Hidden => rsx! {},
    }
}

#[component]
fn PendingIndicator() -> Element {
    rsx! {
        div { class: "message-row pending",
            div { class: "avatar assistant", Icon { svg: BOT } }
            div { class: "typing-dots", aria_label: "Generating",
                span { class: "dot dot-1" }
                span { class: "dot dot-2" }
                span { class: "dot dot-3" }
            }
        }
    }
}

#[component]
fn EmptyState(input: Signal<String>) -> Element {
    rsx! {
        div { class: "empty-state card",
            div { class: "empty-logo", dangerous_inner_html: JSON_LOGO }
            h2 { class: "brand-title", "JSON Generator AI" }
            p { class: "text-muted empty-lead",
                "Create perfectly structured JSON data with simple natural language. Describe what you need or use our examples to get started."
            }
            div { class: "quick-starts",
                for example in quick_starts().iter() {
                    button {
                        key: "{example.title}",
                        class: "quick-start",
                        r#type: "button",
                        onclick: move |_| apply_example(input, example),
                        span { class: "quick-start-title", "{example.title}" }
                        span { class: "text-muted text-xs", "{example.description}" }
                    }
                }
            }
        }
    }
}
