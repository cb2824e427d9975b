use crate::core::FieldKey;
use crate::core::schema::{Blueprint, SemanticType};
use crate::core::value::Value;
use indexmap::IndexMap;
use tracing::debug;

/// Current answer for every declared field, in declaration order.
///
/// A key is never missing: construction seeds every field with the empty
/// value of its type and no operation removes entries.
#[derive(Debug, Clone)]
pub struct FormState {
    blueprint: &'static Blueprint,
    values: IndexMap<FieldKey, Value>,
}

impl FormState {
    pub fn new(blueprint: &'static Blueprint) -> Self {
        let values = blueprint
            .fields
            .iter()
            .map(|field| (field.key, field.semantic.empty_value()))
            .collect();
        Self { blueprint, values }
    }

    pub fn blueprint(&self) -> &'static Blueprint {
        self.blueprint
    }

    /// Replaces the value stored for `key`.
    ///
    /// # Panics
    /// When `key` is not declared by the blueprint.
    pub fn update(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let Some(slot) = self.values.get_mut(key) else {
            panic!("field `{key}` is not declared in `{}`", self.blueprint.title);
        };
        debug!(field = key, ?value, "field updated");
        *slot = value;
    }

    /// Builder form of [`FormState::update`].
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.update(key, value);
        self
    }

    /// Adds `option` to a multi-select field when `included` (once), or
    /// removes every occurrence of it otherwise. Other entries keep their
    /// order.
    ///
    /// # Panics
    /// When `key` is unknown, not a multi-select field, or currently holds
    /// something other than a list.
    pub fn toggle_multi_select(&mut self, key: &str, option: &str, included: bool) {
        let is_multi = self
            .blueprint
            .field(key)
            .is_some_and(|field| field.semantic == SemanticType::MultiSelect);
        assert!(is_multi, "field `{key}` is not a multi-select field");

        let Some(current) = self.list(key) else {
            panic!("multi-select field `{key}` holds {:?}", self.values[key]);
        };
        let next = toggled(current, option, included);
        self.update(key, Value::List(next));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Value::as_list)
    }

    pub fn values(&self) -> &IndexMap<FieldKey, Value> {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &Value)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

impl PartialEq for FormState {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.blueprint, other.blueprint) && self.values == other.values
    }
}

impl Eq for FormState {}

fn toggled(current: &[String], option: &str, included: bool) -> Vec<String> {
    if included {
        let mut next = current.to_vec();
        if !current.iter().any(|entry| entry == option) {
            next.push(option.to_string());
        }
        next
    } else {
        current
            .iter()
            .filter(|entry| entry.as_str() != option)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FormState, toggled};
    use crate::core::intake::INTAKE;
    use crate::core::value::Value;

    #[test]
    fn every_declared_key_starts_empty() {
        let form = FormState::new(&INTAKE);
        assert_eq!(form.values().len(), INTAKE.fields.len());
        assert!(form.iter().all(|(_, value)| value.is_empty()));
        assert_eq!(form.list("mainReasons"), Some(&[][..]));
        assert_eq!(form.text("name"), Some(""));
    }

    #[test]
    fn update_touches_only_its_key() {
        let before = FormState::new(&INTAKE);
        let after = before.clone().with("name", "Ada");

        for (key, value) in after.iter() {
            if key.as_str() == "name" {
                assert_eq!(value, &Value::text("Ada"));
            } else {
                assert_eq!(Some(value), before.get(key.as_str()));
            }
        }
    }

    #[test]
    #[should_panic(expected = "multi-select field `mainReasons` holds")]
    fn toggling_a_non_list_answer_fails_loudly() {
        FormState::new(&INTAKE)
            .with("mainReasons", "A")
            .toggle_multi_select("mainReasons", "B", true);
    }

    #[test]
    #[should_panic(expected = "not declared")]
    fn unknown_key_fails_loudly() {
        FormState::new(&INTAKE).update("nickname", "x");
    }

    #[test]
    #[should_panic(expected = "not a multi-select")]
    fn toggle_on_text_field_fails_loudly() {
        FormState::new(&INTAKE).toggle_multi_select("name", "x", true);
    }

    #[test]
    fn toggling_on_twice_keeps_one_entry() {
        let mut form = FormState::new(&INTAKE);
        form.toggle_multi_select("mainReasons", "A", true);
        form.toggle_multi_select("mainReasons", "A", true);
        assert_eq!(form.list("mainReasons"), Some(&["A".to_string()][..]));
    }

    #[test]
    fn toggling_off_removes_all_occurrences_and_keeps_order() {
        let current = ["a", "b", "a", "c"].map(String::from);
        assert_eq!(toggled(&current, "a", false), ["b", "c"]);
        assert_eq!(toggled(&current, "d", true), ["a", "b", "a", "c", "d"]);
    }
}
