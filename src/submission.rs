use crate::core::FieldKey;
use crate::core::value::Value;
use crate::error::WizardError;
use crate::notify::{NotificationKind, Notices, Notifier};
use crate::state::store::FormState;
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

/// Frozen copy of every answer at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    submitted_at: DateTime<Utc>,
    answers: IndexMap<FieldKey, Value>,
}

impl SubmissionRecord {
    pub fn capture(form: &FormState) -> Self {
        Self::captured_at(form, Utc::now())
    }

    pub fn captured_at(form: &FormState, submitted_at: DateTime<Utc>) -> Self {
        Self {
            submitted_at,
            answers: form.values().clone(),
        }
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn answers(&self) -> &IndexMap<FieldKey, Value> {
        &self.answers
    }

    pub fn answer(&self, key: &str) -> Option<&Value> {
        self.answers.get(key)
    }
}

/// Snapshots `form`, hands the record to `transport` and reports the outcome.
///
/// The form is left as is, so submitting again without edits yields the
/// same answers.
pub fn submit(
    form: &FormState,
    transport: &mut dyn Transport,
    notifier: &mut dyn Notifier,
    notices: &Notices,
) -> Result<SubmissionRecord, WizardError> {
    let record = SubmissionRecord::capture(form);

    match transport.send(&record) {
        Ok(()) => {
            info!(
                submitted_at = %record.submitted_at,
                answers = record.answers.len(),
                "submission handed to transport"
            );
            let kind = NotificationKind::SubmissionSuccess;
            notifier.notify(kind, notices.get(kind));
            Ok(record)
        }
        Err(err) => {
            warn!(error = %err, "submission delivery failed");
            let kind = NotificationKind::DeliveryFailure;
            notifier.notify(kind, notices.get(kind));
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmissionRecord, submit};
    use crate::core::intake::INTAKE;
    use crate::core::value::Value;
    use crate::error::WizardError;
    use crate::notify::{MemoryNotifier, NotificationKind, Notices};
    use crate::state::store::FormState;
    use crate::transport::MemoryTransport;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn record_copies_every_answer() {
        let form = FormState::new(&INTAKE)
            .with("name", "A")
            .with("mainReasons", Value::list(["X"]));
        let record = SubmissionRecord::capture(&form);
        assert_eq!(record.answers(), form.values());
    }

    #[test]
    fn record_serializes_in_declaration_order() {
        let form = FormState::new(&INTAKE).with("name", "A");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = SubmissionRecord::captured_at(&form, at);

        let text = serde_json::to_string(&record).expect("serialize");
        assert!(text.starts_with(r#"{"submittedAt":"2024-05-01T12:00:00Z","answers":{"name":"A","email":"","#));

        let json: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(
            json["answers"].as_object().map(|answers| answers.len()),
            Some(INTAKE.fields.len())
        );
    }

    #[test]
    fn success_notifies_and_forwards() {
        let form = FormState::new(&INTAKE);
        let mut transport = MemoryTransport::new();
        let mut notifier = MemoryNotifier::new();

        let record =
            submit(&form, &mut transport, &mut notifier, &Notices::default()).expect("submit");

        assert_eq!(transport.sent(), &[record]);
        assert_eq!(notifier.kinds(), [NotificationKind::SubmissionSuccess]);
    }

    #[test]
    fn delivery_failure_is_reported() {
        let form = FormState::new(&INTAKE);
        let mut transport = MemoryTransport::failing();
        let mut notifier = MemoryNotifier::new();

        let err = submit(&form, &mut transport, &mut notifier, &Notices::default())
            .expect_err("delivery should fail");

        assert!(matches!(err, WizardError::Delivery(_)));
        assert_eq!(notifier.kinds(), [NotificationKind::DeliveryFailure]);
    }
}
