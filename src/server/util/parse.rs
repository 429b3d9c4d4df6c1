use crate::server::error::{internal::InternalError, AppError};

/// Parses an enumeration value read back from the database.
///
/// # Arguments
/// - `column` - Name of the column the value came from, used in the error
/// - `value` - The stored string
/// - `parse` - Parser for the target enumeration
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored string is not a known
///   variant
pub fn parse_stored<T>(
    column: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    parse(value).ok_or_else(|| {
        InternalError::InvalidStoredValue {
            column,
            value: value.to_string(),
        }
        .into()
    })
}

/// Parses an enumeration value supplied by a client.
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - Unknown value for `field`
pub fn parse_input<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T, AppError> {
    parse(value).ok_or_else(|| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feedback::ReviewType;

    #[test]
    fn parses_known_value() {
        let parsed = parse_stored("feedback.review_type", "peer", ReviewType::parse).unwrap();

        assert_eq!(parsed, ReviewType::Peer);
    }

    #[test]
    fn unknown_stored_value_is_internal_error() {
        let result = parse_stored("feedback.review_type", "360", ReviewType::parse);

        assert!(matches!(result, Err(AppError::InternalErr(_))));
    }

    #[test]
    fn unknown_input_is_bad_request() {
        let result = parse_input("reviewType", "360", ReviewType::parse);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
