use tracing::debug;

/// Fields of one combined-format access-log line that the aggregation consumes.
///
/// Each field is `None` when its named group did not participate in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogFields<'a> {
    pub request: Option<&'a str>,
    pub size: Option<&'a str>,
    pub referrer: Option<&'a str>,
}

impl<'a> LogFields<'a> {
    /// URL key for the request.
    ///
    /// `GET /a/b HTTP/1.1` yields `/a/b`. A request without `HTTP/` is used as-is.
    /// A protocol-style request that does not split into exactly three tokens
    /// yields `None`.
    pub fn url(&self) -> Option<&'a str> {
        let request = self.request?;
        if !request.contains("HTTP/") {
            return Some(request);
        }

        let tokens: Vec<&str> = request.split_whitespace().collect();
        match tokens.as_slice() {
            [_method, path, _protocol] => Some(*path),
            _ => {
                debug!(request, "invalid request format");
                None
            }
        }
    }

    /// Transferred bytes. Text that does not parse as `u64` counts as zero.
    pub fn bytes(&self) -> Option<u64> {
        self.size.map(|s| s.trim().parse::<u64>().unwrap_or(0))
    }

    /// Referrer, if present and non-empty.
    pub fn referrer(&self) -> Option<&'a str> {
        self.referrer.filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_request(request: &str) -> LogFields<'_> {
        LogFields {
            request: Some(request),
            ..LogFields::default()
        }
    }

    #[test]
    fn url_takes_path_from_protocol_request() {
        assert_eq!(with_request("GET /index.html HTTP/1.1").url(), Some("/index.html"));
    }

    #[test]
    fn url_uses_whole_request_without_protocol() {
        assert_eq!(with_request("/robots.txt").url(), Some("/robots.txt"));
        assert_eq!(with_request("-").url(), Some("-"));
    }

    #[test]
    fn url_fails_on_wrong_token_count() {
        assert_eq!(with_request("GET HTTP/1.1").url(), None);
        assert_eq!(with_request("GET /a b HTTP/1.1").url(), None);
    }

    #[test]
    fn bytes_treats_malformed_as_zero() {
        let fields = LogFields {
            size: Some("99999999999999999999999"),
            ..LogFields::default()
        };
        assert_eq!(fields.bytes(), Some(0));

        let fields = LogFields {
            size: Some("512"),
            ..LogFields::default()
        };
        assert_eq!(fields.bytes(), Some(512));
        assert_eq!(LogFields::default().bytes(), None);
    }

    #[test]
    fn empty_referrer_is_absent() {
        let fields = LogFields {
            referrer: Some(""),
            ..LogFields::default()
        };
        assert_eq!(fields.referrer(), None);
    }
}
