//! Shared chrome components (toasts, dialogs, placeholders)

pub mod confirm_dialog;
pub mod loading;
pub mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use loading::LoadingCard;
pub use toast::ToastHost;
