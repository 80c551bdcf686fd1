/// Loopback address used for IPv4 redirects.
pub const REDIRECT_V4: &str = "127.0.0.1";

/// Loopback address used for IPv6 redirects.
pub const REDIRECT_V6: &str = "::1";

/// Address families the daemon writes redirect entries for.
pub const MANAGED_ADDRESSES: [&str; 2] = [REDIRECT_V4, REDIRECT_V6];

pub const BROADCAST_ADDRESS: &str = "255.255.255.255";

const COMMENT_MARKER: char = '#';

/// Classification of a single hosts-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostsEntryKind {
    /// `127.0.0.1 reddit.com`, `::1 www.reddit.com`, ...
    BlockedRedirect,
    /// Managed address mapped to a localhost name (`127.0.0.1 localhost`).
    LocalhostSystem,
    Broadcast,
    Comment,
    /// Blank lines and entries for unmanaged addresses.
    Other,
}

impl HostsEntryKind {
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.starts_with(COMMENT_MARKER) {
            return Self::Comment;
        }

        let address = trimmed.split_whitespace().next().unwrap_or("");

        if address == BROADCAST_ADDRESS {
            return Self::Broadcast;
        }

        if MANAGED_ADDRESSES.contains(&address) {
            if trimmed.contains("localhost") {
                return Self::LocalhostSystem;
            }
            return Self::BlockedRedirect;
        }

        Self::Other
    }

    /// Lines that survive every enforcement rewrite.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::BlockedRedirect)
    }
}

/// Builds the redirect line for `site` under `address`.
pub fn redirect_entry(address: &str, site: &str) -> String {
    format!("{address} {site}")
}
