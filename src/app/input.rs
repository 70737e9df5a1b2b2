/// What the user typed into one of the hours/minutes/seconds boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Blank,
    Value(u32),
    Invalid,
}

impl FieldValue {
    /// Blank and invalid fields both count as zero.
    pub fn as_u32(self) -> u32 {
        match self {
            FieldValue::Value(v) => v,
            FieldValue::Blank | FieldValue::Invalid => 0,
        }
    }
}

pub fn parse_field(text: &str) -> FieldValue {
    let text = text.trim();
    if text.is_empty() {
        return FieldValue::Blank;
    }

    // u32 parsing accepts a leading '+' and rejects '-' outright
    match text.parse::<u32>() {
        Ok(v) => FieldValue::Value(v),
        Err(_) => FieldValue::Invalid,
    }
}
