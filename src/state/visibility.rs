use crate::core::FieldKey;
use crate::core::schema::FieldSpec;
use crate::state::store::FormState;

/// Fields of `step` that are currently shown, in declaration order.
///
/// A field with a reveal rule on its step is shown only while the rule's
/// source field holds the expected value. Hidden fields keep whatever value
/// they had; this only decides presentation.
pub fn visible_fields(step: usize, form: &FormState) -> Vec<&'static FieldSpec> {
    let blueprint = form.blueprint();
    blueprint
        .fields_for_step(step)
        .filter(|field| is_visible(step, field.key, form))
        .collect()
}

pub fn is_visible(step: usize, key: FieldKey, form: &FormState) -> bool {
    let Some(spec) = form.blueprint().step(step) else {
        return false;
    };
    spec.reveals
        .iter()
        .filter(|rule| rule.field == key)
        .all(|rule| form.text(rule.when.as_str()) == Some(rule.equals))
}
