//! Form state and client-side validation

use crate::constants::MAX_ALIAS_LEN;
use crate::types::ShortenRequest;

/// Contents of the shorten form plus per-field touched flags. Field errors
/// only render once a field has been touched, so an untouched empty form
/// shows no red text (the submit button is still disabled).
#[derive(Debug, Default)]
pub struct FormState {
    pub url: String,
    pub custom_alias: String,
    pub url_touched: bool,
    pub alias_touched: bool,
}

impl FormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn url_error(&self) -> Option<&'static str> {
        validate_url(&self.url).err()
    }

    pub fn alias_error(&self) -> Option<&'static str> {
        validate_alias(&self.custom_alias).err()
    }

    pub fn is_valid(&self) -> bool {
        self.url_error().is_none() && self.alias_error().is_none()
    }

    /// Build the wire payload. The alias is omitted entirely when blank.
    pub fn to_request(&self) -> ShortenRequest {
        let alias = self.custom_alias.trim();
        ShortenRequest {
            url: self.url.trim().to_string(),
            custom_alias: if alias.is_empty() {
                None
            } else {
                Some(alias.to_string())
            },
        }
    }
}

/// Required, URL-shaped: absolute http(s) URL
fn validate_url(input: &str) -> Result<(), &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("URL is required");
    }
    match url::Url::parse(input) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err("Must be an http or https URL"),
        Err(_) => Err("Must be a valid URL"),
    }
}

/// Optional; when present, short and slug-shaped
fn validate_alias(input: &str) -> Result<(), &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }
    if input.len() > MAX_ALIAS_LEN {
        return Err("Alias is too long (max 50 characters)");
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("Alias may only contain letters, digits, - and _");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_required() {
        let form = FormState::default();
        assert_eq!(form.url_error(), Some("URL is required"));
        assert!(!form.is_valid());
    }

    #[test]
    fn relative_url_is_rejected() {
        let form = FormState {
            url: "example.com/page".into(),
            ..Default::default()
        };
        assert_eq!(form.url_error(), Some("Must be a valid URL"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let form = FormState {
            url: "ftp://example.com/file".into(),
            ..Default::default()
        };
        assert_eq!(form.url_error(), Some("Must be an http or https URL"));
    }

    #[test]
    fn valid_url_without_alias_passes() {
        let form = FormState {
            url: "https://example.com/some/long/path?q=1".into(),
            ..Default::default()
        };
        assert!(form.is_valid());
        let req = form.to_request();
        assert_eq!(req.custom_alias, None);
    }

    #[test]
    fn alias_charset_is_enforced() {
        let form = FormState {
            url: "https://example.com".into(),
            custom_alias: "my link!".into(),
            ..Default::default()
        };
        assert_eq!(
            form.alias_error(),
            Some("Alias may only contain letters, digits, - and _")
        );
        assert!(!form.is_valid());
    }

    #[test]
    fn alias_length_is_capped() {
        let form = FormState {
            url: "https://example.com".into(),
            custom_alias: "a".repeat(MAX_ALIAS_LEN + 1),
            ..Default::default()
        };
        assert_eq!(form.alias_error(), Some("Alias is too long (max 50 characters)"));
    }

    #[test]
    fn request_trims_whitespace() {
        let form = FormState {
            url: "  https://example.com  ".into(),
            custom_alias: " mylink ".into(),
            ..Default::default()
        };
        let req = form.to_request();
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.custom_alias.as_deref(), Some("mylink"));
    }

    #[test]
    fn reset_clears_fields_and_touched_flags() {
        let mut form = FormState {
            url: "https://example.com".into(),
            custom_alias: "x".into(),
            url_touched: true,
            alias_touched: true,
        };
        form.reset();
        assert!(form.url.is_empty());
        assert!(form.custom_alias.is_empty());
        assert!(!form.url_touched && !form.alias_touched);
    }
}
