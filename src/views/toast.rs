use crate::notice::{NOTICE_LIFETIME, NoticeLevel, NoticeQueue};
use crate::runtime::sleep;
use dioxus::prelude::*;

/// Queues an error notice and schedules its dismissal.
pub fn push_error(mut notices: Signal<NoticeQueue>, text: impl Into<String>) {
    let id = notices.with_mut(|queue| queue.error(text));
    schedule_dismiss(notices, id);
}

pub fn schedule_dismiss(mut notices: Signal<NoticeQueue>, id: u64) {
    spawn(async move {
        sleep(NOTICE_LIFETIME).await;
        notices.with_mut(|queue| queue.dismiss(id));
    });
}

#[component]
pub fn ToastHost(notices: Signal<NoticeQueue>) -> Element {
    let mut notices = notices;
    let visible = notices.read().iter().cloned().collect::<Vec<_>>();

    rsx! {
        div { class: "toast-host", role: "status", aria_live: "polite",
            for notice in visible {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Error => "toast toast-error",
                        NoticeLevel::Info => "toast",
                    },
                    span { class: "toast-text", "{notice.text}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: move |_| notices.with_mut(|queue| queue.dismiss(notice.id)),
                        "×"
                    }
                }
            }
        }
    }
}
