//! Rule-based request body validation.
//!
//! `RuleValidator` is the default [`Validator`] implementation. It checks
//! each declared field in order and stops at the first failing rule for
//! that field, so a missing field reports `required` and never `string`.

use serde_json::{Map, Value};

use crate::ports::{Rule, Rules, Validation, ValidationMessage, Validator};

/// Stateless validator for the built-in rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub const fn new() -> Self {
        Self
    }
}

/// Check a single rule against a field value.
fn passes(rule: Rule, value: Option<&Value>) -> bool {
    match rule {
        Rule::Required => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        },
        Rule::String => matches!(value, None | Some(Value::Null | Value::String(_))),
    }
}

impl Validator for RuleValidator {
    fn validate(&self, data: &Map<String, Value>, rules: &Rules) -> Validation {
        let messages = rules
            .iter()
            .filter_map(|(field, field_rules)| {
                let value = data.get(field);
                field_rules
                    .iter()
                    .find(|rule| !passes(**rule, value))
                    .map(|rule| ValidationMessage {
                        field: field.to_string(),
                        validation: *rule,
                        message: format!("{rule} validation failed on {field}"),
                    })
            })
            .collect();

        Validation::new(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hotel_rules;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_body_passes() {
        let validation = RuleValidator::new().validate(
            &body(json!({ "name": "Grand", "address": "1 Main St" })),
            &hotel_rules(),
        );

        assert!(!validation.fails());
        assert!(validation.messages().is_empty());
        assert_eq!(validation.first_message(), None);
    }

    #[test]
    fn test_missing_name_reports_required() {
        let validation = RuleValidator::new()
            .validate(&body(json!({ "address": "1 Main St" })), &hotel_rules());

        assert!(validation.fails());
        assert_eq!(
            validation.first_message(),
            Some("required validation failed on name")
        );
        assert_eq!(validation.messages()[0].validation, Rule::Required);
    }

    #[test]
    fn test_empty_and_null_fail_required() {
        let validator = RuleValidator::new();

        let validation =
            validator.validate(&body(json!({ "name": "", "address": "x" })), &hotel_rules());
        assert_eq!(
            validation.first_message(),
            Some("required validation failed on name")
        );

        let validation = validator.validate(
            &body(json!({ "name": "Grand", "address": null })),
            &hotel_rules(),
        );
        assert_eq!(
            validation.first_message(),
            Some("required validation failed on address")
        );
    }

    #[test]
    fn test_all_failures_reported_in_declaration_order() {
        let validation = RuleValidator::new().validate(&Map::new(), &hotel_rules());

        let fields: Vec<&str> = validation
            .messages()
            .iter()
            .map(|m| m.field.as_str())
            .collect();
        assert_eq!(fields, ["name", "address"]);
    }

    #[test]
    fn test_non_string_value_fails_string_rule() {
        let validation = RuleValidator::new().validate(
            &body(json!({ "name": 42, "address": "1 Main St" })),
            &hotel_rules(),
        );

        assert_eq!(validation.messages().len(), 1);
        assert_eq!(validation.messages()[0].validation, Rule::String);
        assert_eq!(
            validation.first_message(),
            Some("string validation failed on name")
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let validation = RuleValidator::new().validate(
            &body(json!({ "name": " ", "address": "1 Main St" })),
            &hotel_rules(),
        );
        assert!(!validation.fails());
    }
}
