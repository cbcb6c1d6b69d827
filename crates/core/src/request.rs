use serde::Deserialize;

/// A single `GET /callback` hit, as read from its query string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CallbackRequest {
    pub code: Option<String>,
}

impl CallbackRequest {
    pub fn new(code: Option<&str>) -> Self {
        Self {
            code: code.map(str::to_string),
        }
    }

    /// Builds a request from raw query pairs.
    ///
    /// A repeated `code` keeps the first non-empty value instead of failing.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut code = None;
        for (key, value) in pairs {
            if key.as_ref() != "code" {
                continue;
            }
            let value = value.into();
            if !value.is_empty() {
                return Self { code: Some(value) };
            }
            if code.is_none() {
                code = Some(value);
            }
        }
        Self { code }
    }

    /// The authorization code, if one was sent and it is not empty.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    pub fn has_code(&self) -> bool {
        self.code().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Ok,
    InternalServerError,
}

impl ReplyStatus {
    pub fn as_u16(self) -> u16 {
        match self {
            ReplyStatus::Ok => 200,
            ReplyStatus::InternalServerError => 500,
        }
    }
}

/// Plain-text answer shown in the user's browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackReply {
    pub status: ReplyStatus,
    pub body: String,
}

impl CallbackReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::Ok,
            body: body.into(),
        }
    }

    pub fn internal_error(body: impl Into<String>) -> Self {
        Self {
            status: ReplyStatus::InternalServerError,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Ok
    }
}
