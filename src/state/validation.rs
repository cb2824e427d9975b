use crate::core::FieldKey;
use crate::core::schema::Requirement;
use crate::state::store::FormState;
use crate::state::visibility::is_visible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: FieldKey,
    pub requirement: Requirement,
}

/// Required fields of `step` whose current value does not satisfy them.
///
/// Only the step's own fields are checked; earlier steps are not
/// re-validated. A required field hidden by a reveal rule is not enforced.
pub fn step_issues(step: usize, form: &FormState) -> Vec<ValidationIssue> {
    form.blueprint()
        .fields_for_step(step)
        .filter(|field| field.required && is_visible(step, field.key, form))
        .filter_map(|field| {
            let requirement = field.semantic.requirement();
            let value = form.get(field.key.as_str())?;
            (!requirement.is_met(value)).then_some(ValidationIssue {
                field: field.key,
                requirement,
            })
        })
        .collect()
}

/// Whether the user may leave `step` forward. Steps outside the blueprint
/// never validate.
pub fn validate(step: usize, form: &FormState) -> bool {
    form.blueprint().step(step).is_some() && step_issues(step, form).is_empty()
}
