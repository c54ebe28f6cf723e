//! Cupcake record and the validated input used to create or overwrite one.

use serde::Serialize;

/// Image stored when a payload omits one or sends an empty string.
pub const DEFAULT_IMAGE: &str = "https://tinyurl.com/demo-cupcake";

/// One row of the `cupcakes` table. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Cupcake {
    pub id: i32,
    pub flavor: String,
    pub rating: f64,
    pub size: String,
    pub image: String,
}

/// Validated create/update payload. `image` is already defaulted.
#[derive(Clone, Debug, PartialEq)]
pub struct CupcakeInput {
    pub flavor: String,
    pub rating: f64,
    pub size: String,
    pub image: String,
}

impl CupcakeInput {
    pub fn new(flavor: impl Into<String>, rating: f64, size: impl Into<String>, image: Option<String>) -> Self {
        let image = image
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE.to_string());
        Self {
            flavor: flavor.into(),
            rating,
            size: size.into(),
            image,
        }
    }

    pub fn into_cupcake(self, id: i32) -> Cupcake {
        Cupcake {
            id,
            flavor: self.flavor,
            rating: self.rating,
            size: self.size,
            image: self.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_wire_order() {
        let c = CupcakeInput::new("vanilla", 4.5, "medium", None).into_cupcake(1);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"flavor":"vanilla","rating":4.5,"size":"medium","image":"https://tinyurl.com/demo-cupcake"}"#
        );
    }

    #[test]
    fn empty_image_falls_back_to_default() {
        assert_eq!(CupcakeInput::new("a", 1.0, "b", Some(String::new())).image, DEFAULT_IMAGE);
        assert_eq!(CupcakeInput::new("a", 1.0, "b", None).image, DEFAULT_IMAGE);
    }

    #[test]
    fn whitespace_image_is_kept_verbatim() {
        assert_eq!(CupcakeInput::new("a", 1.0, "b", Some("  ".into())).image, "  ");
    }

    #[test]
    fn supplied_image_is_kept_verbatim() {
        let input = CupcakeInput::new("a", 1.0, "b", Some("not even a url".into()));
        assert_eq!(input.image, "not even a url");
    }
}
