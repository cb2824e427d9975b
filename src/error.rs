use crate::core::FieldKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    /// Advance attempted while the current step's required fields are not
    /// all answered. The session is left untouched.
    #[error("step {step} is incomplete (missing: {})", join_keys(.missing))]
    IncompleteStep { step: usize, missing: Vec<FieldKey> },

    #[error("submission could not be delivered")]
    Delivery(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to write submission")]
    Io(#[from] std::io::Error),

    #[error("failed to encode submission")]
    Encode(#[from] serde_json::Error),
}

fn join_keys(keys: &[FieldKey]) -> String {
    keys.iter()
        .map(FieldKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
