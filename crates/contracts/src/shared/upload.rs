use serde::{Deserialize, Serialize};

/// Successful reply of `POST /sales/upload` and `POST /ratings/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub records_inserted: u64,
    #[serde(default)]
    pub replaced: bool,
}

/// Error body the backend sends, `{ "error": ... }` or `{ "message": ... }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; blank strings count as absent
    pub fn text(&self) -> Option<&str> {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Upload endpoints may answer 2xx with an error body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UploadReply {
    Accepted(UploadResponse),
    Refused(ErrorBody),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_reply_accepted() {
        let reply: UploadReply =
            serde_json::from_str(r#"{"recordsInserted": 42, "replaced": true}"#).unwrap();
        assert_eq!(
            reply,
            UploadReply::Accepted(UploadResponse {
                records_inserted: 42,
                replaced: true
            })
        );
    }

    #[test]
    fn test_upload_reply_replaced_defaults_to_false() {
        let reply: UploadReply = serde_json::from_str(r#"{"recordsInserted": 3}"#).unwrap();
        assert!(matches!(
            reply,
            UploadReply::Accepted(UploadResponse { replaced: false, .. })
        ));
    }

    #[test]
    fn test_upload_reply_refused() {
        let reply: UploadReply =
            serde_json::from_str(r#"{"error": "Unsupported columns"}"#).unwrap();
        match reply {
            UploadReply::Refused(body) => assert_eq!(body.text(), Some("Unsupported columns")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_error_body_prefers_error_over_message() {
        let body = ErrorBody {
            error: Some("  ".into()),
            message: Some("Bad input".into()),
        };
        assert_eq!(body.text(), Some("Bad input"));
        assert_eq!(ErrorBody::default().text(), None);
    }
}
