//! Toasts and confirmation dialogs
//!
//! Toasts stack in a corner and auto-dismiss; at most one confirmation
//! dialog is pending at a time. The confirm flow carries a typed
//! [`ConfirmAction`] instead of a callback, so the dialog stays a plain
//! view and the workshop decides what "confirm" means.

use dioxus::prelude::*;

use lorecrafter_domain::{CharacterId, LocationId};

/// How long a toast stays up before auto-dismissing
pub const TOAST_AUTO_DISMISS_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// A destructive action waiting for the user's confirmation
#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmAction {
    DeleteCharacter(CharacterId),
    DeleteLocation(LocationId),
}

/// Contents of the confirmation dialog
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmRequest {
    /// Confirmation for deleting a character
    pub fn delete_character(id: CharacterId) -> Self {
        Self {
            title: "Delete character?".to_string(),
            message: "Are you sure you want to permanently delete this character? \
                      This action cannot be undone."
                .to_string(),
            action: ConfirmAction::DeleteCharacter(id),
        }
    }

    /// Confirmation for deleting a location
    pub fn delete_location(id: LocationId) -> Self {
        Self {
            title: "Delete location?".to_string(),
            message: "Are you sure you want to permanently delete this location? \
                      This action cannot be undone."
                .to_string(),
            action: ConfirmAction::DeleteLocation(id),
        }
    }
}

/// Toast stack and pending confirmation
#[derive(Clone)]
pub struct NoticeState {
    pub toasts: Signal<Vec<Toast>>,
    pub confirm: Signal<Option<ConfirmRequest>>,
    next_toast_id: Signal<u64>,
}

impl NoticeState {
    /// Create a new NoticeState with nothing showing
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            confirm: Signal::new(None),
            next_toast_id: Signal::new(0),
        }
    }

    fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = *self.next_toast_id.read();
        self.next_toast_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    /// Remove a toast; ids never repeat, so a late dismiss is a no-op
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    /// Show the confirmation dialog, replacing any pending one
    pub fn request_confirm(&mut self, request: ConfirmRequest) {
        self.confirm.set(Some(request));
    }

    /// Hide the confirmation dialog
    pub fn clear_confirm(&mut self) {
        self.confirm.set(None);
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_character_request_names_the_action() {
        let id = CharacterId::new("c1").unwrap();
        let request = ConfirmRequest::delete_character(id.clone());
        assert_eq!(request.title, "Delete character?");
        assert!(request.message.contains("cannot be undone"));
        assert_eq!(request.action, ConfirmAction::DeleteCharacter(id));
    }

    #[test]
    fn delete_location_request_names_the_action() {
        let id = LocationId::new("l1").unwrap();
        let request = ConfirmRequest::delete_location(id.clone());
        assert_eq!(request.title, "Delete location?");
        assert_eq!(request.action, ConfirmAction::DeleteLocation(id));
    }
}
