use std::borrow::Cow;

/// Scalar cell value as the list stages see it. Records on the wire hold
/// strings, numbers, or null; everything the transformer needs reduces to
/// these three.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Num(f64),
    Null,
}

impl FieldValue {
    pub fn str(value: impl Into<String>) -> Self {
        FieldValue::Str(value.into())
    }

    pub fn opt_str(value: Option<&str>) -> Self {
        match value {
            Some(v) => FieldValue::Str(v.to_string()),
            None => FieldValue::Null,
        }
    }

    pub fn num(value: impl Into<f64>) -> Self {
        FieldValue::Num(value.into())
    }

    /// Text used for substring matching. Missing values match as empty.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Str(v) => Cow::Borrowed(v),
            FieldValue::Num(v) => Cow::Owned(format_number(*v)),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// A flat record a table screen can display: one numeric identifier plus
/// named scalar columns. Unknown columns resolve to `Null`.
pub trait TableRow {
    fn id(&self) -> i64;

    fn field(&self, column: &str) -> FieldValue;

    /// Columns the live search matches against.
    fn searchable() -> &'static [&'static str]
    where
        Self: Sized;
}
