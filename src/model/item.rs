/// A single list row: an opaque application value plus the text shown for it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub value: String,
    pub text: String,
}

impl Item {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

impl From<&str> for Item {
    /// Item whose value and text are the same string
    fn from(text: &str) -> Self {
        Self::new(text, text)
    }
}
