use dioxus::prelude::*;

use portal::model::notification::Notification;

/// Notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Handle to the notifications rendered by the layout.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    /// Must be called from a component scope.
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, notification });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
