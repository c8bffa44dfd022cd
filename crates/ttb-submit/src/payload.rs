//! Request and response bodies of the generation service.

use serde::{Deserialize, Serialize};
use ttb_model::Faculty;

use crate::error::{Result, SubmitError};

/// Header strings printed on every generated timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub university: String,
    pub department: String,
    pub academic: String,
}

/// `POST` body: the header plus the whole faculty list.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    #[serde(flatten)]
    pub header: &'a Header,
    pub faculties: &'a [Faculty],
}

impl<'a> GenerateRequest<'a> {
    pub fn new(header: &'a Header, faculties: &'a [Faculty]) -> Self {
        Self { header, faculties }
    }
}

/// Response body, read the same way for every HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub ok: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub traceback: Vec<String>,
}

impl GenerateResponse {
    /// The redirect target on success, the service's error otherwise.
    pub fn into_result(self) -> Result<String> {
        match (self.ok, self.redirect, self.error) {
            (true, Some(redirect), _) => Ok(redirect),
            (true, None, _) => Err(SubmitError::InvalidResponse(
                "success response without a redirect".to_string(),
            )),
            (false, _, Some(message)) => Err(SubmitError::Rejected {
                message,
                traceback: self.traceback,
            }),
            (false, _, None) => Err(SubmitError::InvalidResponse(
                "failure response without an error message".to_string(),
            )),
        }
    }
}

/// Parses a response body into the redirect target.
pub fn parse_response(body: &str) -> Result<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;
    response.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_redirect() {
        assert_eq!(
            parse_response(r#"{"ok": true, "message": "Generated", "redirect": "/success"}"#),
            Ok("/success".to_string())
        );
    }

    #[test]
    fn failure_keeps_traceback() {
        let err = parse_response(
            r#"{"ok": false, "error": "list index out of range", "traceback": ["a", "b"]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                message: "list index out of range".to_string(),
                traceback: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn unexpected_shapes_are_invalid() {
        for body in [
            "<html>Internal Server Error</html>",
            r#"{"ok": true}"#,
            r#"{"ok": false}"#,
            r#"{"redirect": "/x"}"#,
        ] {
            assert!(
                matches!(parse_response(body), Err(SubmitError::InvalidResponse(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn header_fields_default_to_empty() {
        let header: Header = serde_json::from_str(r#"{"university": "VTU"}"#).unwrap();
        assert_eq!(header.university, "VTU");
        assert!(header.department.is_empty());
    }
}
