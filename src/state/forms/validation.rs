//! Validation schema for the contact form

use validator::ValidateEmail;

/// Rule applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Optional,
    Required(&'static str),
    Email(&'static str),
    Number(&'static str),
}

fn rule_for(name: &str) -> Rule {
    match name {
        "firstName" => Rule::Required("Please enter your first name"),
        "workEmail" => Rule::Email("Please enter a valid email address"),
        "companyName" => Rule::Required("Please enter your company name"),
        "role" => Rule::Required("Please select your role"),
        "monthlyActiveUsers" | "monthlyEvents" => Rule::Number("Please select a value"),
        "product" => Rule::Required("Please select the product you're interested in"),
        "personalizedDemo" => Rule::Required("Please select an option"),
        _ => Rule::Optional,
    }
}

/// Whether the field must be filled in before submitting
pub fn is_required(name: &str) -> bool {
    rule_for(name) != Rule::Optional
}

/// Check one value against its field's rule, returning the error message if it fails
pub fn validate_value(name: &str, value: Option<&String>) -> Option<String> {
    let filled = value.filter(|v| !v.trim().is_empty());

    let failure = match (rule_for(name), filled) {
        (Rule::Optional, _) => None,
        (Rule::Required(msg) | Rule::Email(msg) | Rule::Number(msg), None) => Some(msg),
        (Rule::Required(_), Some(_)) => None,
        (Rule::Email(msg), Some(v)) => (!v.validate_email()).then_some(msg),
        (Rule::Number(msg), Some(v)) => v.trim().parse::<f64>().is_err().then_some(msg),
    };

    failure.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn test_required_fields() {
        for name in [
            "firstName",
            "workEmail",
            "companyName",
            "role",
            "monthlyActiveUsers",
            "monthlyEvents",
            "product",
            "personalizedDemo",
        ] {
            assert!(is_required(name), "{name}");
            assert!(validate_value(name, None).is_some(), "{name}");
        }
    }

    #[test]
    fn test_optional_fields() {
        assert!(!is_required("lastName"));
        assert!(!is_required("details"));
        assert_eq!(validate_value("lastName", None), None);
        assert_eq!(validate_value("details", Some(&s(""))), None);
    }

    #[test]
    fn test_blank_string_is_missing() {
        assert_eq!(
            validate_value("firstName", Some(&s("   "))),
            Some(s("Please enter your first name"))
        );
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(validate_value("workEmail", Some(&s("ada@example.com"))), None);
        assert_eq!(
            validate_value("workEmail", Some(&s("not-an-email"))),
            Some(s("Please enter a valid email address"))
        );
        assert_eq!(
            validate_value("workEmail", None),
            Some(s("Please enter a valid email address"))
        );
    }

    #[test]
    fn test_number_rule() {
        assert_eq!(validate_value("monthlyActiveUsers", Some(&s("10000"))), None);
        assert_eq!(validate_value("monthlyEvents", Some(&s("0"))), None);
        assert_eq!(
            validate_value("monthlyEvents", Some(&s("lots"))),
            Some(s("Please select a value"))
        );
    }

    #[test]
    fn test_unknown_field_is_optional() {
        assert_eq!(validate_value("phone", None), None);
    }
}
