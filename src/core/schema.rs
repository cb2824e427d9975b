use crate::core::FieldKey;
use crate::core::value::Value;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticType {
    Text,
    Email,
    Phone,
    Enum,
    MultiSelect,
    FreeText,
    Boolean,
}

/// What "answered" means for a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Non-empty after trimming whitespace.
    NonBlank,
    /// A selection was made.
    Selected,
    /// At least one entry in the sequence.
    AtLeastOne,
}

impl Requirement {
    pub fn is_met(self, value: &Value) -> bool {
        match self {
            Self::NonBlank => !value.is_blank(),
            Self::Selected => !value.is_empty(),
            Self::AtLeastOne => value.as_list().is_some_and(|items| !items.is_empty()),
        }
    }
}

impl SemanticType {
    pub fn requirement(self) -> Requirement {
        match self {
            Self::Text | Self::Email | Self::Phone | Self::FreeText => Requirement::NonBlank,
            Self::Enum | Self::Boolean => Requirement::Selected,
            Self::MultiSelect => Requirement::AtLeastOne,
        }
    }

    /// Value a field of this type holds before the user touches it.
    pub fn empty_value(self) -> Value {
        match self {
            Self::MultiSelect => Value::List(Vec::new()),
            Self::Boolean => Value::None,
            _ => Value::Text(String::new()),
        }
    }

    /// Whether `value` has the shape a field of this type stores.
    /// `Value::None` means "no answer" and fits every type.
    pub fn accepts(self, value: &Value) -> bool {
        match value {
            Value::None => true,
            Value::Text(_) => !matches!(self, Self::MultiSelect | Self::Boolean),
            Value::Bool(_) => self == Self::Boolean,
            Value::List(_) => self == Self::MultiSelect,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: FieldKey,
    pub semantic: SemanticType,
    pub step: usize,
    pub required: bool,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "<[Choice]>::is_empty")]
    pub options: &'static [Choice],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

impl FieldSpec {
    pub const fn new(
        key: &'static str,
        semantic: SemanticType,
        step: usize,
        label: &'static str,
    ) -> Self {
        Self {
            key: FieldKey::new(key),
            semantic,
            step,
            required: false,
            label,
            placeholder: None,
            options: &[],
            max_len: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn options(mut self, options: &'static [Choice]) -> Self {
        self.options = options;
        self
    }

    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// Shows `field` only while `when` currently equals `equals`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RevealRule {
    pub field: FieldKey,
    pub when: FieldKey,
    pub equals: &'static str,
}

impl RevealRule {
    pub const fn new(field: &'static str, when: &'static str, equals: &'static str) -> Self {
        Self {
            field: FieldKey::new(field),
            when: FieldKey::new(when),
            equals,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepSpec {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "<[RevealRule]>::is_empty")]
    pub reveals: &'static [RevealRule],
}

impl StepSpec {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            description: None,
            reveals: &[],
        }
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn reveals(mut self, reveals: &'static [RevealRule]) -> Self {
        self.reveals = reveals;
        self
    }
}

/// Static table of steps and fields driving one kind of wizard.
///
/// Steps are numbered from 1 in declaration order. Adding or removing a
/// step is an edit to this table only.
#[derive(Debug, Serialize)]
pub struct Blueprint {
    pub title: &'static str,
    pub steps: &'static [StepSpec],
    pub fields: &'static [FieldSpec],
}

impl Blueprint {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, step: usize) -> Option<&StepSpec> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key.as_str() == key)
    }

    pub fn fields_for_step(&self, step: usize) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |field| field.step == step)
    }

    /// Panics when the table breaks one of its structural rules: at least
    /// one step, unique keys, every field on an existing step, reveal rules
    /// only pointing at fields of the same or an earlier step.
    pub fn assert_consistent(&self) {
        assert!(!self.steps.is_empty(), "blueprint `{}` has no steps", self.title);

        for (index, field) in self.fields.iter().enumerate() {
            assert!(
                (1..=self.step_count()).contains(&field.step),
                "field `{}` declared on missing step {}",
                field.key,
                field.step
            );
            assert!(
                self.fields[..index].iter().all(|other| other.key != field.key),
                "field `{}` declared twice",
                field.key
            );
        }

        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            for rule in step.reveals {
                let target = self.field(rule.field.as_str());
                assert!(
                    target.is_some_and(|field| field.step == number),
                    "reveal rule on step {number} targets foreign field `{}`",
                    rule.field
                );
                let source = self.field(rule.when.as_str());
                assert!(
                    source.is_some_and(|field| field.step <= number),
                    "reveal rule for `{}` depends on later or unknown field `{}`",
                    rule.field,
                    rule.when
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_kinds_follow_semantic_type() {
        assert_eq!(SemanticType::Email.requirement(), Requirement::NonBlank);
        assert_eq!(SemanticType::Enum.requirement(), Requirement::Selected);
        assert_eq!(SemanticType::MultiSelect.requirement(), Requirement::AtLeastOne);
    }

    #[test]
    fn selected_does_not_trim() {
        assert!(Requirement::Selected.is_met(&Value::text(" ")));
        assert!(!Requirement::NonBlank.is_met(&Value::text(" ")));
        assert!(!Requirement::AtLeastOne.is_met(&Value::text("x")));
    }

    #[test]
    fn accepted_shapes() {
        use SemanticType::*;

        for semantic in [Text, Email, Phone, Enum, FreeText] {
            assert!(semantic.accepts(&Value::text("x")));
            assert!(!semantic.accepts(&Value::Bool(true)));
            assert!(!semantic.accepts(&Value::list(["x"])));
        }
        assert!(MultiSelect.accepts(&Value::list(["x"])));
        assert!(!MultiSelect.accepts(&Value::text("x")));
        assert!(Boolean.accepts(&Value::Bool(false)));
        assert!(!Boolean.accepts(&Value::text("ja")));
        assert!([Text, MultiSelect, Boolean].iter().all(|s| s.accepts(&Value::None)));
    }

    const FORWARD_REVEALS: &[RevealRule] = &[RevealRule::new("a", "b", "yes")];

    static FORWARD: Blueprint = Blueprint {
        title: "forward",
        steps: &[StepSpec::new("one").reveals(FORWARD_REVEALS), StepSpec::new("two")],
        fields: &[
            FieldSpec::new("a", SemanticType::Text, 1, "A"),
            FieldSpec::new("b", SemanticType::Enum, 2, "B"),
        ],
    };

    #[test]
    #[should_panic(expected = "depends on later or unknown field")]
    fn reveal_rules_cannot_look_forward() {
        FORWARD.assert_consistent();
    }

    #[test]
    fn step_lookup_is_one_based() {
        assert_eq!(FORWARD.step(1).map(|s| s.title), Some("one"));
        assert!(FORWARD.step(0).is_none());
        assert!(FORWARD.step(3).is_none());
    }
}
