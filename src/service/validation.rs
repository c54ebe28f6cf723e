//! Request validation: turn a raw JSON body into a `CupcakeInput`.

use crate::error::AppError;
use crate::model::CupcakeInput;
use serde_json::{Map, Value};

pub struct CupcakeValidator;

impl CupcakeValidator {
    /// Validate a create/update body. `flavor`, `rating` and `size` are required;
    /// `image` is optional. A missing required field is a bad request, a present
    /// but unusable one is a validation error.
    pub fn validate(body: Value) -> Result<CupcakeInput, AppError> {
        let map = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        let flavor = required_text(&map, "flavor")?;
        let rating = required_rating(&map)?;
        let size = required_text(&map, "size")?;
        let image = optional_text(&map, "image")?;
        Ok(CupcakeInput::new(flavor, rating, size, image))
    }
}

fn required<'a>(map: &'a Map<String, Value>, field: &str) -> Result<&'a Value, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(v) => Ok(v),
    }
}

fn required_text(map: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    let s = required(map, field)?
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", field)))?;
    if s.is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(s.to_string())
}

// Numeric strings such as "4.5" are accepted and coerced, as a float column would.
fn required_rating(map: &Map<String, Value>) -> Result<f64, AppError> {
    let invalid = || AppError::Validation("rating must be a number".into());
    let rating = match required(map, "rating")? {
        Value::Number(n) => n.as_f64().ok_or_else(invalid)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    if !rating.is_finite() {
        return Err(invalid());
    }
    Ok(rating)
}

fn optional_text(map: &Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_IMAGE;
    use serde_json::json;

    #[test]
    fn accepts_full_payload() {
        let input = CupcakeValidator::validate(json!({
            "flavor": "chocolate",
            "rating": 5,
            "size": "large",
            "image": "http://x/y.png"
        }))
        .unwrap();
        assert_eq!(input, CupcakeInput::new("chocolate", 5.0, "large", Some("http://x/y.png".into())));
    }

    #[test]
    fn defaults_missing_or_null_image() {
        let input = CupcakeValidator::validate(json!({"flavor": "a", "rating": 1.5, "size": "b"})).unwrap();
        assert_eq!(input.image, DEFAULT_IMAGE);
        let input =
            CupcakeValidator::validate(json!({"flavor": "a", "rating": 1.5, "size": "b", "image": null})).unwrap();
        assert_eq!(input.image, DEFAULT_IMAGE);
    }

    #[test]
    fn missing_required_field_is_bad_request() {
        for field in ["flavor", "rating", "size"] {
            let mut body = json!({"flavor": "a", "rating": 1, "size": "b"});
            body.as_object_mut().unwrap().remove(field);
            let err = CupcakeValidator::validate(body).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m.contains(field)), "{}", field);
        }
    }

    #[test]
    fn non_object_body_is_bad_request() {
        assert!(matches!(
            CupcakeValidator::validate(json!(["flavor"])),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rating_accepts_numeric_strings() {
        let input = CupcakeValidator::validate(json!({"flavor": "a", "rating": " 3.25 ", "size": "b"})).unwrap();
        assert_eq!(input.rating, 3.25);
    }

    #[test]
    fn whitespace_text_is_kept() {
        let input = CupcakeValidator::validate(json!({"flavor": " ", "rating": 1, "size": "\t"})).unwrap();
        assert_eq!((input.flavor.as_str(), input.size.as_str()), (" ", "\t"));
    }

    #[test]
    fn rating_has_no_range() {
        let input = CupcakeValidator::validate(json!({"flavor": "a", "rating": -12.0, "size": "b"})).unwrap();
        assert_eq!(input.rating, -12.0);
    }

    #[test]
    fn rejects_unusable_values() {
        let cases = [
            json!({"flavor": "", "rating": 1, "size": "b"}),
            json!({"flavor": 7, "rating": 1, "size": "b"}),
            json!({"flavor": "a", "rating": "abc", "size": "b"}),
            json!({"flavor": "a", "rating": "NaN", "size": "b"}),
            json!({"flavor": "a", "rating": true, "size": "b"}),
            json!({"flavor": "a", "rating": 1, "size": "b", "image": 3}),
        ];
        for body in cases {
            let err = CupcakeValidator::validate(body.clone()).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{}", body);
        }
    }
}
