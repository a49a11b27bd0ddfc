use std::fmt;

/// Renders an email for log output without exposing the local part,
/// e.g. `alice@example.com` becomes `a***@example.com`.
#[derive(Clone, Copy)]
pub struct MaskedEmail<'a>(pub &'a str);

impl fmt::Display for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{}***@{}", first, domain),
                None => write!(f, "***@{}", domain),
            },
            None => write!(f, "********"),
        }
    }
}

impl fmt::Debug for MaskedEmail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
