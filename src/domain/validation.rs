//! Declarative input rules for the project form.

/// Value under validation. Length rules apply to text, range rules to numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    fn as_trimmed_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.trim().to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// A value together with the constraints it must satisfy.
///
/// Unset constraints are skipped, so `Validatable::text("")` with no other
/// rules is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(FieldValue::Text(value.into()))
    }

    pub fn number(value: i64) -> Self {
        Self::with_value(FieldValue::Number(value))
    }

    fn with_value(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }
}

/// Checks every configured rule. Length is counted in characters after trimming.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid &= !input.value.as_trimmed_text().is_empty();
    }

    if let FieldValue::Text(text) = &input.value {
        let len = text.trim().chars().count();
        if let Some(min) = input.min_length {
            is_valid &= len >= min;
        }
        if let Some(max) = input.max_length {
            is_valid &= len <= max;
        }
    }

    if let FieldValue::Number(n) = input.value {
        if let Some(min) = input.min_value {
            is_valid &= n >= min;
        }
        if let Some(max) = input.max_value {
            is_valid &= n <= max;
        }
    }

    is_valid
}
