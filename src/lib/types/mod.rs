//! Checked views over configuration string fields.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use url::Url;

/// Contact address with a basic `local@domain.tld` shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.chars().any(char::is_whitespace) {
            return None;
        }
        let (local, domain) = raw.split_once('@')?;
        if local.is_empty() || domain.contains('@') {
            return None;
        }
        // At least two labels, none of them empty.
        let mut labels = 0;
        for label in domain.split('.') {
            if label.is_empty() {
                return None;
            }
            labels += 1;
        }
        if labels < 2 {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An absolute `http`/`https` URL with a host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbsoluteUrl(Url);

impl AbsoluteUrl {
    pub fn parse(raw: &str) -> Option<Self> {
        // `Url::parse` would strip or percent-encode whitespace.
        if raw.chars().any(char::is_whitespace) {
            return None;
        }
        let url = Url::parse(raw).ok()?;
        if !matches!(url.scheme(), "http" | "https") {
            return None;
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Some(Self(url)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
