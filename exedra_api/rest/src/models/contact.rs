use email_address::EmailAddress;
use exedra_core_contact_contracts::ContactSubmissionCreate;
use exedra_models::contact::{
    ContactSubmissionAuthor, ContactSubmissionId, ContactSubmissionMessage,
    ContactSubmissionMessageError, ContactSubmissionName, ContactSubmissionNameError,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ApiContactSubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: ContactSubmissionId,
}

#[derive(Debug, Serialize)]
pub struct ApiContactErrorResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiFieldError>>,
}

/// A single violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub enum ApiContactRejection {
    /// The request body was valid JSON but not an object.
    Malformed,
    /// One or more fields violated the schema.
    Invalid(Vec<ApiFieldError>),
}

/// Validates the parsed request body against the contact submission schema.
///
/// All field rules are checked independently so that the caller receives the
/// complete list of violations in a single round trip. Unknown fields are
/// ignored and not retained.
pub fn parse_submission(body: &Value) -> Result<ContactSubmissionCreate, ApiContactRejection> {
    let Value::Object(fields) = body else {
        return Err(ApiContactRejection::Malformed);
    };

    let mut errors = Vec::new();

    let name = match fields.get("name").and_then(Value::as_str) {
        Some(name) => ContactSubmissionName::try_new(name)
            .map_err(|err| {
                errors.push(ApiFieldError {
                    field: "name",
                    message: match err {
                        ContactSubmissionNameError::LenCharMinViolated => {
                            "Name must contain at least 2 characters"
                        }
                        ContactSubmissionNameError::LenCharMaxViolated => {
                            "Name must not exceed 128 characters"
                        }
                    },
                })
            })
            .ok(),
        None => {
            errors.push(ApiFieldError {
                field: "name",
                message: "Name is required and must be a string",
            });
            None
        }
    };

    let email = match fields.get("email").and_then(Value::as_str) {
        Some(email) => match email.parse::<EmailAddress>() {
            // require a dotted domain, bare hostnames are always typos here
            Ok(email) if email.domain().contains('.') => Some(email),
            _ => {
                errors.push(ApiFieldError {
                    field: "email",
                    message: "Email must be a valid email address",
                });
                None
            }
        },
        None => {
            errors.push(ApiFieldError {
                field: "email",
                message: "Email is required and must be a string",
            });
            None
        }
    };

    let message = match fields.get("message").and_then(Value::as_str) {
        Some(message) => ContactSubmissionMessage::try_new(message)
            .map_err(|err| {
                errors.push(ApiFieldError {
                    field: "message",
                    message: match err {
                        ContactSubmissionMessageError::LenCharMinViolated => {
                            "Message must contain at least 10 characters"
                        }
                        ContactSubmissionMessageError::LenCharMaxViolated => {
                            "Message must not exceed 4096 characters"
                        }
                    },
                })
            })
            .ok(),
        None => {
            errors.push(ApiFieldError {
                field: "message",
                message: "Message is required and must be a string",
            });
            None
        }
    };

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => {
            Ok(ContactSubmissionCreate {
                author: ContactSubmissionAuthor { name, email },
                message,
            })
        }
        _ => Err(ApiContactRejection::Invalid(errors)),
    }
}

#[cfg(test)]
mod tests {
    use exedra_utils::assert_matches;
    use serde_json::json;

    use super::*;

    fn violated_fields(result: Result<ContactSubmissionCreate, ApiContactRejection>) -> Vec<&'static str> {
        match result {
            Err(ApiContactRejection::Invalid(errors)) => {
                errors.into_iter().map(|err| err.field).collect()
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn ok() {
        // Arrange
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "I would like to learn more about your services.",
        });

        // Act
        let result = parse_submission(&body);

        // Assert
        let create = result.unwrap();
        assert_eq!(&**create.author.name, "Jane Doe");
        assert_eq!(create.author.email.as_str(), "jane@example.com");
        assert_eq!(
            &**create.message,
            "I would like to learn more about your services."
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        // Arrange
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "I would like to learn more about your services.",
            "phone": "555-0199",
        });

        // Act
        let result = parse_submission(&body);

        // Assert
        result.unwrap();
    }

    #[test]
    fn not_an_object() {
        assert_matches!(
            parse_submission(&json!([1, 2, 3])),
            Err(ApiContactRejection::Malformed)
        );
        assert_matches!(
            parse_submission(&json!("hello")),
            Err(ApiContactRejection::Malformed)
        );
        assert_matches!(
            parse_submission(&Value::Null),
            Err(ApiContactRejection::Malformed)
        );
    }

    #[test]
    fn all_violations_are_reported() {
        // Arrange
        let body = json!({ "name": "J" });

        // Act
        let result = parse_submission(&body);

        // Assert
        assert_eq!(violated_fields(result), ["name", "email", "message"]);
    }

    #[test]
    fn missing_fields_are_reported_individually() {
        let result = parse_submission(&json!({}));
        assert_eq!(violated_fields(result), ["name", "email", "message"]);

        let result = parse_submission(&json!({ "email": "jane@example.com" }));
        assert_eq!(violated_fields(result), ["name", "message"]);
    }

    #[test]
    fn non_string_fields_are_rejected() {
        let body = json!({
            "name": 42,
            "email": true,
            "message": ["hello"],
        });
        let result = parse_submission(&body);
        assert_eq!(violated_fields(result), ["name", "email", "message"]);
    }

    #[test]
    fn name_boundaries() {
        let ok = |name: &str| {
            json!({
                "name": name,
                "email": "jane@example.com",
                "message": "I would like to learn more about your services.",
            })
        };
        assert_eq!(violated_fields(parse_submission(&ok("J"))), ["name"]);
        parse_submission(&ok("Jo")).unwrap();
    }

    #[test]
    fn message_boundaries() {
        let body = |message: String| {
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": message,
            })
        };
        assert_eq!(
            violated_fields(parse_submission(&body("x".repeat(9)))),
            ["message"]
        );
        parse_submission(&body("x".repeat(10))).unwrap();
    }

    #[test]
    fn email_syntax() {
        let body = |email: &str| {
            json!({
                "name": "Jane Doe",
                "email": email,
                "message": "I would like to learn more about your services.",
            })
        };
        assert_eq!(
            violated_fields(parse_submission(&body("janeexample.com"))),
            ["email"]
        );
        assert_eq!(violated_fields(parse_submission(&body("a@b"))), ["email"]);
        parse_submission(&body("a@b.co")).unwrap();
    }
}
