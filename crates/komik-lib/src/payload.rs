//! Response envelopes. Endpoints answer with either the bare value or the
//! value wrapped in a `data` field; both normalise to the same type here.
//!
//! A non-empty `data` field always wins. Once it is there the value is decoded
//! from it alone, so a broken record inside the envelope is an error and
//! never silently replaced by the envelope itself.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::models::{Comment, MangaDetail, RawMangaDetail};

#[derive(Debug)]
pub enum Payload<T> {
    Wrapped { data: T },
    Raw(T),
}

/// `null`, `false`, `0` and `""` count as no `data` at all
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl<T: DeserializeOwned> Payload<T> {
    pub fn parse(body: &str) -> Result<Self, Error> {
        let mut value: Value = serde_json::from_str(body)?;

        let data = value.get_mut("data").map(Value::take);
        match data {
            Some(data) if is_present(&data) => Ok(Payload::Wrapped {
                data: serde_json::from_value(data)?,
            }),
            _ => Ok(Payload::Raw(serde_json::from_value(value)?)),
        }
    }
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Raw(value) => value,
        }
    }
}

/// Decodes a detail response body into a validated record
pub fn decode_detail(body: &str) -> Result<MangaDetail, Error> {
    let payload = Payload::<RawMangaDetail>::parse(body)?;
    MangaDetail::try_from(payload.into_inner())
}

pub fn decode_comments(body: &str) -> Result<Vec<Comment>, Error> {
    let payload = Payload::<Vec<Comment>>::parse(body)?;
    Ok(payload.into_inner())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_bare_record() {
        let manga = decode_detail(r#"{"title": "Jujutsu Kaisen", "genre": ["Action"]}"#).unwrap();

        assert_eq!(manga.title, "Jujutsu Kaisen");
        assert_eq!(manga.genre, vec!["Action".to_string()]);
    }

    #[test]
    fn test_decode_wrapped_record() {
        let manga = decode_detail(r#"{"status": true, "data": {"title": "Jujutsu Kaisen"}}"#).unwrap();

        assert_eq!(manga.title, "Jujutsu Kaisen");
    }

    #[test]
    fn test_null_data_falls_back_to_body() {
        assert_eq!(decode_detail(r#"{"data": null}"#), Err(Error::MissingTitle));
        assert_eq!(
            decode_detail(r#"{"data": null, "title": "Jujutsu Kaisen"}"#).map(|m| m.title),
            Ok("Jujutsu Kaisen".to_string())
        );
    }

    #[test]
    fn test_broken_data_never_falls_back_to_envelope() {
        let err = decode_detail(r#"{"data": "oops", "title": "Envelope"}"#).unwrap_err();
        assert!(err.is_payload(), "{:?}", err);

        let err = decode_detail(r#"{"data": {"title": "Real", "chapters": 5}, "title": "Envelope"}"#)
            .unwrap_err();
        assert!(err.is_payload(), "{:?}", err);
    }

    #[test]
    fn test_falsy_data_means_bare_record() {
        for data in ["false", "0", r#""""#] {
            let body = format!(r#"{{"data": {}, "title": "Jujutsu Kaisen"}}"#, data);
            assert_eq!(
                decode_detail(&body).map(|m| m.title),
                Ok("Jujutsu Kaisen".to_string()),
                "data = {}",
                data
            );
        }
    }

    #[test]
    fn test_wrapped_without_title_is_rejected() {
        assert_eq!(decode_detail(r#"{"data": {}}"#), Err(Error::MissingTitle));
        assert_eq!(decode_detail(r#"{"data": {"title": ""}}"#), Err(Error::MissingTitle));
    }

    #[test]
    fn test_unusable_bodies_are_payload_errors() {
        for body in ["", "null", "not json", "[]", "42"] {
            let err = decode_detail(body).unwrap_err();
            assert!(err.is_payload(), "{:?} gave {:?}", body, err);
        }
    }

    #[test]
    fn test_decode_comments_both_shapes() {
        let bare = decode_comments(r#"[{"author": "sari", "content": "mantap"}]"#).unwrap();
        let wrapped = decode_comments(r#"{"data": [{"author": "sari", "content": "mantap"}]}"#).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].content(), "mantap");
    }
}
