use crate::core::FieldKey;
use crate::core::schema::FieldSpec;
use crate::core::value::Value;

/// What the forward control of a step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Move to the next step; `enabled` mirrors the step validator.
    Advance { enabled: bool },
    /// Last step: hand the answers to the transport.
    Submit,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub spec: &'static FieldSpec,
    pub value: &'a Value,
}

impl FieldView<'_> {
    pub fn key(&self) -> FieldKey {
        self.spec.key
    }
}

/// Everything a front-end needs to draw the active step.
#[derive(Debug, Clone)]
pub struct StepView<'a> {
    pub step: usize,
    pub total: usize,
    pub percent: usize,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub fields: Vec<FieldView<'a>>,
    pub primary: PrimaryAction,
    pub can_retreat: bool,
}

impl StepView<'_> {
    pub fn counter_label(&self) -> String {
        format!("Schritt {} von {}", self.step, self.total)
    }
}

/// Change requested by a front-end for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Set {
        key: FieldKey,
        value: Value,
    },
    Toggle {
        key: FieldKey,
        option: String,
        included: bool,
    },
}

/// Draws one visible field. Edits travel back through
/// [`crate::state::session::WizardSession::apply`].
pub trait FieldRenderer {
    type Output;

    fn render_field(&mut self, field: &FieldView<'_>) -> Self::Output;
}
