pub mod intake;
pub mod schema;
pub mod value;

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Key of a declared answer field.
///
/// Keys only come from a static [`schema::Blueprint`], so the newtype wraps a
/// `&'static str` and stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}
