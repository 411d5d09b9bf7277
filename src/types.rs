//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Payload sent to the shorten endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(rename = "customAlias", skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

/// Success payload returned by the shorten endpoint.
/// Treated as opaque; never mutated on this side.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShortUrlData {
    pub url: String,
    pub alias: String,
}

/// Optional error body shape: `{ "message": "..." }`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// State of the single outbound shorten request.
/// At most one of Success/Error is populated at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Requesting { seq: u64 },
    Success(ShortUrlData),
    Error(String),
}

/// Reducer actions. Success/Error carry the sequence number of the
/// submission that produced them so stale responses can be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Request { seq: u64 },
    Success { seq: u64, data: ShortUrlData },
    Error { seq: u64, message: String },
}

impl RequestState {
    /// Apply one action, producing the next state. A new `Request` always
    /// clears prior data/error. Outcomes whose sequence number does not
    /// match the in-flight request are ignored; this keeps a slow stale
    /// response from overwriting the result of a newer submission.
    pub fn apply(self, action: Action) -> RequestState {
        match action {
            Action::Request { seq } => RequestState::Requesting { seq },
            Action::Success { seq, data } => match self {
                RequestState::Requesting { seq: cur } if cur == seq => {
                    RequestState::Success(data)
                }
                other => other,
            },
            Action::Error { seq, message } => match self {
                RequestState::Requesting { seq: cur } if cur == seq => {
                    RequestState::Error(message)
                }
                other => other,
            },
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self, RequestState::Requesting { .. })
    }

    pub fn data(&self) -> Option<&ShortUrlData> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ShortUrlData {
        ShortUrlData {
            url: "https://example.com/some/long/path".into(),
            alias: "ab12cd".into(),
        }
    }

    #[test]
    fn request_clears_prior_success() {
        let state = RequestState::Success(data());
        let next = state.apply(Action::Request { seq: 2 });
        assert_eq!(next, RequestState::Requesting { seq: 2 });
        assert!(next.data().is_none());
        assert!(next.error().is_none());
    }

    #[test]
    fn request_clears_prior_error() {
        let state = RequestState::Error("alias taken".into());
        let next = state.apply(Action::Request { seq: 3 });
        assert_eq!(next, RequestState::Requesting { seq: 3 });
    }

    #[test]
    fn success_stores_payload() {
        let state = RequestState::Requesting { seq: 1 };
        let next = state.apply(Action::Success { seq: 1, data: data() });
        assert_eq!(next.data(), Some(&data()));
    }

    #[test]
    fn error_stores_message() {
        let state = RequestState::Requesting { seq: 1 };
        let next = state.apply(Action::Error {
            seq: 1,
            message: "alias taken".into(),
        });
        assert_eq!(next.error(), Some("alias taken"));
    }

    #[test]
    fn stale_success_is_discarded() {
        // Submission 1 is superseded by submission 2; the late outcome of
        // submission 1 must not overwrite the newer requesting state.
        let state = RequestState::Requesting { seq: 1 }.apply(Action::Request { seq: 2 });
        let next = state.apply(Action::Success { seq: 1, data: data() });
        assert_eq!(next, RequestState::Requesting { seq: 2 });
    }

    #[test]
    fn stale_error_is_discarded() {
        let state = RequestState::Requesting { seq: 2 };
        let next = state.apply(Action::Error {
            seq: 1,
            message: "timed out".into(),
        });
        assert_eq!(next, RequestState::Requesting { seq: 2 });
    }

    #[test]
    fn outcome_after_settled_state_is_ignored() {
        let settled = RequestState::Success(data());
        let next = settled.clone().apply(Action::Error {
            seq: 5,
            message: "late failure".into(),
        });
        assert_eq!(next, settled);
    }

    #[test]
    fn at_most_one_of_success_error_populated() {
        for state in [
            RequestState::Idle,
            RequestState::Requesting { seq: 1 },
            RequestState::Success(data()),
            RequestState::Error("boom".into()),
        ] {
            assert!(!(state.data().is_some() && state.error().is_some()));
        }
    }

    #[test]
    fn request_serializes_camel_case_alias() {
        let req = ShortenRequest {
            url: "https://example.com".into(),
            custom_alias: Some("mylink".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["customAlias"], "mylink");

        let req = ShortenRequest {
            url: "https://example.com".into(),
            custom_alias: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("customAlias").is_none());
    }
}
