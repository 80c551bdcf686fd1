//! Hosts-file model: line classification and the pure rewrites behind
//! block, unblock and clear-all.
//!
//! Nothing here touches the filesystem. The enforcer reads the file, hands
//! the content to one of these functions and writes the result back.

pub mod entry;
pub mod rewrite;

pub use entry::{HostsEntryKind, BROADCAST_ADDRESS, MANAGED_ADDRESSES, REDIRECT_V4, REDIRECT_V6};
pub use rewrite::{block_sites, clear_all_redirects, expand_sites, unblock_sites, HostsRewrite};
