//! Form-encoded request bodies as plain data.
//!
//! # Design
//! Every gateway call is a flat `application/x-www-form-urlencoded` POST, so
//! the request body is modelled as an ordered list of `(key, value)` pairs.
//! Keys are the fixed field names the remote API mandates, hence `&'static
//! str`. `set` replaces an existing pair rather than appending a duplicate —
//! `dispatch` relies on this to override caller-supplied credentials.
//! Encoding is delegated to `url::form_urlencoded` for the standard
//! `+`-for-space, percent-encoded-otherwise wire format.

use url::form_urlencoded;

/// An ordered set of form fields destined for one gateway request.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<(&'static str, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any existing pair with the same key.
    pub fn set(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// The fields in insertion order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.fields {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Join list-valued parameters into the comma-delimited text the wire format
/// expects. Typed callers pass slices; the delimiter never leaks into the API.
pub(crate) fn comma_join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_appends_in_insertion_order() {
        let mut form = Form::new();
        form.set("account_number", 15189).set("currency", "KES");
        assert_eq!(
            form.fields(),
            &[
                ("account_number", "15189".to_string()),
                ("currency", "KES".to_string()),
            ]
        );
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut form = Form::new();
        form.set("api_key", "caller-supplied");
        form.set("api_key", "K");
        assert_eq!(form.fields(), &[("api_key", "K".to_string())]);
    }

    #[test]
    fn encode_uses_plus_for_spaces() {
        let mut form = Form::new();
        form.set("method", "Paybill (M-Pesa)");
        assert_eq!(form.encode(), "method=Paybill+%28M-Pesa%29");
    }

    #[test]
    fn encode_percent_encodes_reserved_characters() {
        let mut form = Form::new();
        form.set("message", "pay=now&thanks");
        assert_eq!(form.encode(), "message=pay%3Dnow%26thanks");
    }

    #[test]
    fn encode_empty_form_is_empty_string() {
        assert_eq!(Form::new().encode(), "");
    }

    #[test]
    fn encode_keeps_empty_values() {
        let mut form = Form::new();
        form.set("transaction_email", "");
        assert_eq!(form.encode(), "transaction_email=");
    }

    #[test]
    fn comma_join_produces_delimited_text() {
        assert_eq!(comma_join(&["AB123", "CD456", "EF789"]), "AB123,CD456,EF789");
        assert_eq!(comma_join::<&str>(&[]), "");
        assert_eq!(comma_join(&["AB123"]), "AB123");
    }
}
