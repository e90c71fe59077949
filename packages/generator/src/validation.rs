use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Structural constraint attached to an object member.
///
/// Ordering follows variant order, which is also the order rules are
/// emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum ValidationRule {
    Required,
    MinLength {
        value: u32,
    },
    MaxLength {
        value: u32,
    },
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<OrderedFloat<f64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<OrderedFloat<f64>>,
    },
    Pattern {
        value: String,
    },
    Email,
}

impl ValidationRule {
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        ValidationRule::Range {
            min: min.map(OrderedFloat),
            max: max.map(OrderedFloat),
        }
    }

    pub fn pattern(value: impl Into<String>) -> Self {
        ValidationRule::Pattern {
            value: value.into(),
        }
    }

    /// Rule identifier as it appears in generated code
    pub fn name(&self) -> &'static str {
        match self {
            ValidationRule::Required => "required",
            ValidationRule::MinLength { .. } => "minLength",
            ValidationRule::MaxLength { .. } => "maxLength",
            ValidationRule::Range { .. } => "range",
            ValidationRule::Pattern { .. } => "pattern",
            ValidationRule::Email => "email",
        }
    }

    /// Render as a TypeScript object literal, e.g. `{ rule: "maxLength", value: 50 }`
    pub fn to_typescript(&self) -> String {
        let mut fields = vec![format!("rule: {}", string_literal(self.name()))];

        match self {
            ValidationRule::Required | ValidationRule::Email => {}
            ValidationRule::MinLength { value } | ValidationRule::MaxLength { value } => {
                fields.push(format!("value: {}", value));
            }
            ValidationRule::Range { min, max } => {
                if let Some(min) = min {
                    fields.push(format!("min: {}", number_literal(min.0)));
                }
                if let Some(max) = max {
                    fields.push(format!("max: {}", number_literal(max.0)));
                }
            }
            ValidationRule::Pattern { value } => {
                fields.push(format!("value: {}", string_literal(value)));
            }
        }

        format!("{{ {} }}", fields.join(", "))
    }
}

/// Double-quoted, escaped string literal
pub(crate) fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn number_literal(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_sign_positive() {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_render_rules() {
        assert_eq!(
            ValidationRule::Required.to_typescript(),
            "{ rule: \"required\" }"
        );
        assert_eq!(
            ValidationRule::MaxLength { value: 50 }.to_typescript(),
            "{ rule: \"maxLength\", value: 50 }"
        );
        assert_eq!(
            ValidationRule::range(Some(1.0), Some(9.5)).to_typescript(),
            "{ rule: \"range\", min: 1, max: 9.5 }"
        );
        assert_eq!(
            ValidationRule::range(None, Some(100.0)).to_typescript(),
            "{ rule: \"range\", max: 100 }"
        );
    }

    #[test]
    fn test_pattern_is_escaped() {
        let rule = ValidationRule::pattern(r#"^"\d+"$"#);
        assert_eq!(
            rule.to_typescript(),
            r#"{ rule: "pattern", value: "^\"\\d+\"$" }"#
        );
    }

    #[test]
    fn test_rule_set_order_is_stable() {
        let rules: BTreeSet<ValidationRule> = [
            ValidationRule::Email,
            ValidationRule::MaxLength { value: 10 },
            ValidationRule::Required,
            ValidationRule::Required,
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["required", "maxLength", "email"]);
    }

    #[test]
    fn test_deserialize_rules() {
        let json = r#"[
            { "rule": "required" },
            { "rule": "range", "min": 0 },
            { "rule": "pattern", "value": "^[a-z]+$" }
        ]"#;

        let rules: Vec<ValidationRule> = serde_json::from_str(json).unwrap();
        assert_eq!(rules[0], ValidationRule::Required);
        assert_eq!(rules[1], ValidationRule::range(Some(0.0), None));
        assert_eq!(rules[2], ValidationRule::pattern("^[a-z]+$"));
    }
}
