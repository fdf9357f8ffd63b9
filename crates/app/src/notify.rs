use client::{Notice, NoticeLevel};
use dioxus::prelude::*;

fn notice_title(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "Done",
        NoticeLevel::Error => "Something went wrong",
    }
}

/// Blocking notification. The backdrop covers the page so nothing else can
/// be clicked until it is dismissed.
#[component]
pub fn NoticeDialog(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = match notice.level {
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Error => "notice notice-error",
    };

    rsx! {
        div { class: "modal-backdrop notice-backdrop",
            div { class: "{class}", role: "alertdialog",
                h3 { class: "notice-title", {notice_title(notice.level)} }
                p { class: "notice-message", "{notice.message}" }
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
