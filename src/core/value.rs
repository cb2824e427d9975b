use serde::{Deserialize, Serialize};

/// Current answer held for one field.
///
/// Serialized untagged so a submission reads like the answers themselves:
/// `null`, `"text"`, `true` or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Bool(_) => false,
        }
    }

    /// Like [`Value::is_empty`] but whitespace-only text counts as empty.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(v) => v.trim().is_empty(),
            other => other.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn blank_text_is_only_empty_after_trim() {
        let value = Value::text("   ");
        assert!(!value.is_empty());
        assert!(value.is_blank());
    }

    #[test]
    fn bool_is_never_empty() {
        assert!(!Value::Bool(false).is_empty());
        assert!(Value::None.is_empty());
    }

    #[test]
    fn untagged_json_shape() {
        let json = serde_json::to_string(&vec![
            Value::None,
            Value::text("a"),
            Value::Bool(true),
            Value::list(["x", "y"]),
        ])
        .expect("serialize");
        assert_eq!(json, r#"[null,"a",true,["x","y"]]"#);

        let back: Vec<Value> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back[3], Value::list(["x", "y"]));
        assert_eq!(back[0], Value::None);
    }
}
