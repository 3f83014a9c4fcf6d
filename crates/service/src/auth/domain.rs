use serde::{Deserialize, Serialize};

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Lenient field decoders for request bodies.
///
/// A credential that is absent, `null`, empty, or of the wrong JSON type is
/// decoded as `None` rather than failing the whole body, so the caller gets
/// the specific "missing" error instead of a parse error.
pub mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Integer id given as a JSON number or a decimal string.
    pub fn parse_id(v: &Value) -> Option<i32> {
        match v {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        }
    }

    pub fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        let v = Option::<Value>::deserialize(d)?;
        Ok(v.as_ref().and_then(parse_id))
    }

    /// Non-empty JSON string, kept verbatim.
    pub fn non_empty_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
            _ => Ok(None),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[test]
        fn ids_from_numbers_and_strings() {
            assert_eq!(parse_id(&json!(7)), Some(7));
            assert_eq!(parse_id(&json!("42")), Some(42));
            assert_eq!(parse_id(&json!(" 42 ")), Some(42));
            assert_eq!(parse_id(&json!("abc")), None);
            assert_eq!(parse_id(&json!(1.5)), None);
            assert_eq!(parse_id(&json!(true)), None);
            assert_eq!(parse_id(&json!(null)), None);
            assert_eq!(parse_id(&json!(i64::MAX)), None);
        }
    }
}
