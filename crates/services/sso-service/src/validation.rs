//! Request validation.
//!
//! Structural checks on inbound fields, run before the authentication
//! service is invoked. Pure functions of their inputs; the store is never
//! touched. A violation names the offending field and the rule, so callers
//! can render an actionable message.

use validator::{Validate, ValidationError, ValidationErrors};

use domain::AuthError;

/// Fields checked before a register call.
#[derive(Debug, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Fields checked before a login call.
#[derive(Debug, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(range(min = 1))]
    pub app_id: i32,
}

/// Fields checked before an admin lookup.
#[derive(Debug, Validate)]
pub struct IsAdminInput {
    #[validate(range(min = 1))]
    pub user_id: i64,
}

/// Fixed reporting order, so multi-field violations are deterministic.
const FIELD_ORDER: &[&str] = &["email", "password", "app_id", "user_id"];

/// Validate an input, rendering the first violation as an [`AuthError`].
pub fn check(input: &impl Validate) -> Result<(), AuthError> {
    input
        .validate()
        .map_err(|e| AuthError::validation(first_violation(&e)))
}

fn first_violation(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    for &field in FIELD_ORDER {
        if let Some(violations) = field_errors.get(field) {
            if let Some(error) = pick(violations.as_slice()) {
                return describe(field, error);
            }
        }
    }

    "Validation failed".to_string()
}

/// Prefer emptiness and bound violations over format checks.
fn pick<'a>(violations: &'a [ValidationError]) -> Option<&'a ValidationError> {
    violations
        .iter()
        .find(|e| e.code == "length" || e.code == "range")
        .or_else(|| violations.first())
}

fn describe(field: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "length" => {
            let min = error
                .params
                .get("min")
                .and_then(|v| v.as_u64())
                .unwrap_or(1);
            let is_empty = error
                .params
                .get("value")
                .and_then(|v| v.as_str())
                .is_some_and(str::is_empty);
            if is_empty || min <= 1 {
                format!("Field '{}' is required", field)
            } else {
                format!("Field '{}' requires at least {} characters", field, min)
            }
        }
        "range" => {
            let value = error.params.get("value").and_then(|v| v.as_i64());
            if value == Some(0) {
                format!("Field '{}' is required", field)
            } else {
                format!("Field '{}' is invalid", field)
            }
        }
        _ => format!("Field '{}' is invalid", field),
    }
}
