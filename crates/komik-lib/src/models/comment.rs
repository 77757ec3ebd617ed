use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::error::Error;

pub const MAX_COMMENT_LEN: usize = 1000;
pub const MAX_AUTHOR_LEN: usize = 50;
pub static ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// A comment that passed validation and is ready to be posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

impl NewComment {
    pub fn new(author: &str, content: &str) -> Result<Self, Error> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyComment);
        }
        if content.chars().count() > MAX_COMMENT_LEN {
            return Err(Error::CommentTooLong(MAX_COMMENT_LEN));
        }

        let author = match author.trim() {
            "" => ANONYMOUS,
            author => author,
        };
        if author.chars().count() > MAX_AUTHOR_LEN {
            return Err(Error::AuthorTooLong(MAX_AUTHOR_LEN));
        }

        Ok(Self {
            author: author.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_comment_trims_and_defaults_author() {
        let comment = NewComment::new("  ", "  seru banget  ").unwrap();

        assert_eq!(comment.author, "Anonymous");
        assert_eq!(comment.content, "seru banget");
    }

    #[test]
    fn test_new_comment_rejects_blank_content() {
        assert_eq!(NewComment::new("budi", " \n "), Err(Error::EmptyComment));
    }

    #[test]
    fn test_new_comment_length_limits() {
        let long = "a".repeat(MAX_COMMENT_LEN + 1);
        assert_eq!(
            NewComment::new("budi", &long),
            Err(Error::CommentTooLong(MAX_COMMENT_LEN))
        );

        let exact = "a".repeat(MAX_COMMENT_LEN);
        assert!(NewComment::new("budi", &exact).is_ok());

        let name = "b".repeat(MAX_AUTHOR_LEN + 1);
        assert_eq!(
            NewComment::new(&name, "mantap"),
            Err(Error::AuthorTooLong(MAX_AUTHOR_LEN))
        );
    }

    #[test]
    fn test_comment_tolerates_bad_timestamp() {
        let comment: Comment = serde_json::from_str(
            r#"{"id": 7, "author": "sari", "content": "nice", "created_at": "kemarin"}"#,
        )
        .unwrap();

        assert_eq!(comment.id.as_deref(), Some("7"));
        assert_eq!(comment.author(), "sari");
        assert_eq!(comment.created_at, None);
    }
}
