//! The toast presenter port.
//!
//! Containers that talk to the shopper (today: the wishlist) emit toasts
//! through this port instead of rendering anything themselves. The UI shell
//! injects its own presenter; [`TracingNotifier`] is the headless default.

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Routine confirmation.
    #[default]
    Default,
    /// Warning or destructive outcome.
    Destructive,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short headline, e.g. "Added to Wishlist!".
    pub title: String,
    /// One-sentence detail line.
    pub description: String,
    /// Visual weight.
    pub variant: ToastVariant,
}

impl Toast {
    /// A routine toast.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// A destructive-variant toast.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Presents toasts to the shopper.
pub trait Notifier: Send + Sync {
    /// Show a toast.
    fn notify(&self, toast: Toast);
}

/// Logs toasts through `tracing` instead of rendering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => {
                tracing::info!(title = %toast.title, "{}", toast.description);
            }
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, "{}", toast.description);
            }
        }
    }
}
