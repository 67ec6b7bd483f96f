use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;
use validator::validate_email;

const FORBIDDEN_CHARS: [char; 9] = ['/', '{', '}', '"', '>', '<', '\\', '(', ')'];

/// A single constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    NoForbiddenChars,
}

impl Rule {
    fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.trim().is_empty(),
            // Lengths are counted in graphemes, not bytes, ignoring surrounding whitespace
            Rule::MinLength(min) => value.trim().graphemes(true).count() >= *min,
            Rule::MaxLength(max) => value.trim().graphemes(true).count() <= *max,
            Rule::Email => validate_email(value),
            Rule::NoForbiddenChars => !value.chars().any(|char| FORBIDDEN_CHARS.contains(&char)),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "is required"),
            Rule::MinLength(min) => write!(f, "must have at least {} characters", min),
            Rule::MaxLength(max) => write!(f, "must have at most {} characters", max),
            Rule::Email => write!(f, "is not a valid email"),
            Rule::NoForbiddenChars => write!(f, "contains forbidden characters"),
        }
    }
}

/// Field-level input failure: names the offending field and the rule it broke.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {rule}")]
pub struct ValidationError {
    field: String,
    rule: Rule,
}

impl ValidationError {
    pub fn new(field: &str, rule: Rule) -> ValidationError {
        ValidationError {
            field: String::from(field),
            rule,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }
}

/// Checks `value` against `rules` in order and stops at the first violation.
pub fn validate(value: &str, field: &str, rules: &[Rule]) -> Result<(), ValidationError> {
    match rules.iter().find(|rule| !rule.is_satisfied_by(value)) {
        Some(rule) => Err(ValidationError::new(field, *rule)),
        None => Ok(()),
    }
}

/// The nil UUID stands for "unset".
pub fn require_id(id: &Uuid, field: &str) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new(field, Rule::Required));
    }

    Ok(())
}
