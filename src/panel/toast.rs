//! Transient notifications.
//!
//! A toast is queued, becomes visible after a short delay and is removed
//! after its display time. Queuing a new toast replaces the current one;
//! timer events for a replaced toast are ignored by id.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct ToastCenter {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast, dropping any existing one
    pub fn push(&mut self, message: String, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.current = Some(Toast {
            id,
            message,
            kind,
            visible: false,
        });
        id
    }

    /// Make toast `id` visible; false when it was already replaced
    pub fn reveal(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id => {
                toast.visible = true;
                true
            }
            _ => false,
        }
    }

    /// Remove toast `id`; false when it was already replaced
    pub fn expire(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The toast on screen, if any
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref().filter(|t| t.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_lifecycle() {
        let mut center = ToastCenter::new();
        let id = center.push("Boiler started".to_string(), ToastKind::Success);
        assert!(center.visible().is_none());
        assert!(center.reveal(id));
        assert_eq!(center.visible().map(|t| t.message.as_str()), Some("Boiler started"));
        assert!(center.expire(id));
        assert!(center.visible().is_none());
    }

    #[test]
    fn replaced_toast_ignores_old_timers() {
        let mut center = ToastCenter::new();
        let first = center.push("first".to_string(), ToastKind::Success);
        let second = center.push("second".to_string(), ToastKind::Error);
        assert!(!center.reveal(first));
        assert!(center.reveal(second));
        assert!(!center.expire(first));
        assert_eq!(center.visible().map(|t| t.kind), Some(ToastKind::Error));
    }
}
