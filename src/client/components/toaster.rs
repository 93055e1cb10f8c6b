use dioxus::prelude::*;

use portal::model::notification::NotificationKind;

use crate::client::store::use_toaster;

/// Notifications raised by pages, dismissed by clicking them.
#[component]
pub fn ToastList() -> Element {
    let mut toaster = use_toaster();

    rsx!(
        div { class: "toast toast-end z-50",
            for toast in toaster.toasts() {
                div {
                    key: "{toast.id}",
                    class: alert_class(toast.notification.kind),
                    role: "alert",
                    onclick: move |_| toaster.dismiss(toast.id),
                    div {
                        p { class: "font-semibold", "{toast.notification.title}" }
                        p { "{toast.notification.description}" }
                    }
                }
            }
        }
    )
}

fn alert_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "alert alert-info cursor-pointer",
        NotificationKind::Success => "alert alert-success cursor-pointer",
        NotificationKind::Destructive => "alert alert-error cursor-pointer",
    }
}
