use juniper::{graphql_value, IntoFieldError, FieldError, ScalarValue};
use reqwest::StatusCode;
use serde_json::json;

#[allow(dead_code)]
#[derive(Debug)]
enum InnerError {
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::error::Error),
}

#[derive(Debug)]
pub struct Error {
    r#type: String,
    message: String,
    inner: Option<InnerError>,
}

impl Error {
    fn new(r#type: String, message: String) -> Self {
        Error {
            r#type,
            message,
            inner: None,
        }
    }

    fn internal(inner: InnerError) -> Self {
        Error {
            r#type: "InternalServerError".to_string(),
            message: "Internal server error.".to_string(),
            inner: Some(inner),
        }
    }

    pub fn upstream_status(status: StatusCode, url: &str) -> Self {
        Self::new(
            "UpstreamStatus".to_string(),
            format!(r#"Upstream responded with status {} for "{}"."#, status.as_u16(), url),
        )
    }

    fn upstream_unavailable(inner: reqwest::Error) -> Self {
        let message = match inner.url() {
            Some(url) => format!(r#"Failed to reach upstream at "{}"."#, url),
            None => "Failed to reach upstream.".to_string(),
        };
        Error {
            r#type: "UpstreamUnavailable".to_string(),
            message,
            inner: Some(InnerError::Reqwest(inner)),
        }
    }

    pub fn kind(&self) -> &str {
        &self.r#type
    }

    pub fn is_inner(&self) -> bool {
        self.inner.is_some()
    }
}

impl<S: ScalarValue> IntoFieldError<S> for Error {
    fn into_field_error(self) -> FieldError<S> {
        if self.is_inner() {
            info!("Encountered a server internal error: {:?}", self);
        } else {
            info!("Encountered an error: {:?}", self);
        }

        let error_type = self.kind().to_string();
        FieldError::new(
            self.message,
            graphql_value!({
                "type": error_type
            }),
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = json!({
            "type": &self.r#type,
            "message": &self.message,
        });
        write!(f, "{}", error)
    }
}

impl From<serde_json::error::Error> for InnerError {
    fn from(err: serde_json::error::Error) -> Self {
        InnerError::SerdeJson(err)
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(err: serde_json::error::Error) -> Self {
        Error::internal(err.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let url = err.url().map(|url| url.as_str()).unwrap_or("");
            return Error::upstream_status(status, url);
        }

        if err.is_decode() {
            Error::internal(InnerError::Reqwest(err))
        } else {
            Error::upstream_unavailable(err)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_upstream_status_field_error() {
        let err = Error::upstream_status(StatusCode::NOT_FOUND, "http://localhost:3000/users/7");
        assert_eq!(err.kind(), "UpstreamStatus");
        assert!(!err.is_inner());

        let field_error: FieldError = err.into_field_error();
        assert_eq!(
            field_error.message(),
            r#"Upstream responded with status 404 for "http://localhost:3000/users/7"."#,
        );
        assert_eq!(
            field_error.extensions(),
            &graphql_value!({ "type": "UpstreamStatus" }),
        );
    }

    #[test]
    fn test_serde_error_is_internal() {
        let err: Error = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert_eq!(err.kind(), "InternalServerError");
        assert!(err.is_inner());
        let display: serde_json::Value = serde_json::from_str(&err.to_string()).unwrap();
        assert_eq!(
            display,
            json!({ "type": "InternalServerError", "message": "Internal server error." }),
        );
    }
}
