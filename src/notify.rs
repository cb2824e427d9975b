use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ValidationFailure,
    SubmissionSuccess,
    DeliveryFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Texts shown for each notification kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notices {
    pub incomplete_step: Notice,
    pub submission_success: Notice,
    pub delivery_failure: Notice,
}

impl Notices {
    pub fn get(&self, kind: NotificationKind) -> &Notice {
        match kind {
            NotificationKind::ValidationFailure => &self.incomplete_step,
            NotificationKind::SubmissionSuccess => &self.submission_success,
            NotificationKind::DeliveryFailure => &self.delivery_failure,
        }
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            incomplete_step: Notice::new(
                "Unvollständige Angaben",
                "Bitte füllen Sie alle Pflichtfelder aus, bevor Sie fortfahren.",
            ),
            submission_success: Notice::new(
                "Formular erfolgreich eingereicht!",
                "Vielen Dank für Ihre Angaben. Wir melden uns in Kürze bei Ihnen.",
            ),
            delivery_failure: Notice::new(
                "Übermittlung fehlgeschlagen",
                "Ihre Angaben konnten nicht gesendet werden. Bitte versuchen Sie es erneut.",
            ),
        }
    }
}

/// Sink for user-visible messages. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, kind: NotificationKind, notice: &Notice) {
        (**self).notify(kind, notice);
    }
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, kind: NotificationKind, notice: &Notice) {
        match kind {
            NotificationKind::SubmissionSuccess => {
                info!(?kind, title = %notice.title, "{}", notice.description)
            }
            _ => warn!(?kind, title = %notice.title, "{}", notice.description),
        }
    }
}

/// Keeps notifications until the caller drains them.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    entries: Vec<(NotificationKind, Notice)>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(NotificationKind, Notice)] {
        self.entries.as_slice()
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.entries.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn drain(&mut self) -> Vec<(NotificationKind, Notice)> {
        std::mem::take(&mut self.entries)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, kind: NotificationKind, notice: &Notice) {
        self.entries.push((kind, notice.clone()));
    }
}
