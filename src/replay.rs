use crate::core::schema::SemanticType;
use crate::core::value::Value;
use crate::error::WizardError;
use crate::notify::Notifier;
use crate::state::session::WizardSession;
use crate::submission::SubmissionRecord;
use crate::transport::Transport;
use indexmap::IndexMap;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("unknown field `{0}` in answers")]
    UnknownField(String),

    #[error("answer for `{key}` does not fit a {expected:?} field")]
    Value { key: String, expected: SemanticType },

    #[error("answers are not a JSON object of field values")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Answers keyed by field, in document order.
pub type Answers = IndexMap<String, Value>;

pub fn read_answers(reader: impl Read) -> Result<Answers, ReplayError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Applies `answers` to the session, walks forward through every step and
/// submits on the last one.
///
/// Every answer is checked against the blueprint before anything is
/// written, so an unknown key or a value of the wrong shape leaves the
/// session untouched. `null` stores the field's empty value. Stops with
/// [`WizardError::IncompleteStep`] on the first step that does not
/// validate; the session stays on that step.
pub fn fill(
    session: &mut WizardSession,
    answers: Answers,
    transport: &mut dyn Transport,
    notifier: &mut dyn Notifier,
) -> Result<SubmissionRecord, ReplayError> {
    let blueprint = session.blueprint();
    let mut checked = Vec::with_capacity(answers.len());
    for (key, value) in answers {
        let Some(field) = blueprint.field(&key) else {
            return Err(ReplayError::UnknownField(key));
        };
        if !field.semantic.accepts(&value) {
            return Err(ReplayError::Value {
                key,
                expected: field.semantic,
            });
        }
        let value = match value {
            Value::None => field.semantic.empty_value(),
            value => value,
        };
        checked.push((field.key, value));
    }

    for (key, value) in checked {
        session.update(key.as_str(), value);
    }

    while session.advance(notifier)? {
        debug!(step = session.current_step(), "replay advanced");
    }

    Ok(session.submit(transport, notifier)?)
}
