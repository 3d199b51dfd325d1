use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Decodes `a=1&b=two+words`. `+` becomes a space, percent escapes are
    /// decoded and the last occurrence of a duplicate key wins. The declared
    /// content type is not checked, and malformed escapes are kept as-is.
    pub fn decode(body: &[u8]) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).unwrap_or_default();
        Self {
            fields: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_percent() {
        let form = FormData::decode(b"name=Ada+Lovelace&roomId=1&note=50%25+off%21");
        assert_eq!(form.get("name"), Some("Ada Lovelace"));
        assert_eq!(form.get("roomId"), Some("1"));
        assert_eq!(form.get("note"), Some("50% off!"));
    }

    #[test]
    fn last_duplicate_wins() {
        let form = FormData::decode(b"roomId=1&roomId=2");
        assert_eq!(form.get("roomId"), Some("2"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn empty_body() {
        assert!(FormData::decode(b"").is_empty());
    }

    #[test]
    fn key_without_value() {
        let form = FormData::decode(b"flag&name=x");
        assert_eq!(form.get("flag"), Some(""));
        assert_eq!(form.get("name"), Some("x"));
    }

    #[test]
    fn encoded_plus_stays_a_plus() {
        let form = FormData::decode(b"name=a%2Bb");
        assert_eq!(form.get("name"), Some("a+b"));
    }
}
