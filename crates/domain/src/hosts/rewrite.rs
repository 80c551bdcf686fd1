use super::entry::{redirect_entry, HostsEntryKind, MANAGED_ADDRESSES};
use std::collections::HashSet;

const WWW_PREFIX: &str = "www.";

/// Result of a rewrite: the new file content plus how many lines moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsRewrite {
    pub content: String,
    pub added: usize,
    pub removed: usize,
}

impl HostsRewrite {
    fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            added: 0,
            removed: 0,
        }
    }

    pub fn changed(&self) -> bool {
        self.added > 0 || self.removed > 0
    }
}

/// Expands every site to itself plus its `www.` form.
///
/// Sites already carrying the prefix are kept as-is. Blank entries are
/// dropped and the result keeps first-seen order without duplicates.
pub fn expand_sites<S: AsRef<str>>(sites: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut expanded = Vec::with_capacity(sites.len() * 2);

    for site in sites {
        let site = site.as_ref().trim();
        if site.is_empty() {
            continue;
        }

        let www = if site.starts_with(WWW_PREFIX) {
            None
        } else {
            Some(format!("{WWW_PREFIX}{site}"))
        };

        for candidate in std::iter::once(site.to_string()).chain(www) {
            if seen.insert(candidate.clone()) {
                expanded.push(candidate);
            }
        }
    }

    expanded
}

/// Prepends a redirect for every expanded site under each managed address.
///
/// Entries already present as a line of the file are skipped, so calling
/// this twice yields the same content as calling it once. The previous
/// content follows the new entries byte for byte.
pub fn block_sites<S: AsRef<str>>(content: &str, sites: &[S]) -> HostsRewrite {
    let existing: HashSet<&str> = content.lines().map(str::trim).collect();

    let mut new_entries = Vec::new();
    for site in expand_sites(sites) {
        for address in MANAGED_ADDRESSES {
            let entry = redirect_entry(address, &site);
            if !existing.contains(entry.as_str()) && !new_entries.contains(&entry) {
                new_entries.push(entry);
            }
        }
    }

    if new_entries.is_empty() {
        return HostsRewrite::unchanged(content);
    }

    let mut rewritten = String::with_capacity(content.len() + new_entries.len() * 32);
    for entry in &new_entries {
        rewritten.push_str(entry);
        rewritten.push('\n');
    }
    rewritten.push_str(content);

    HostsRewrite {
        content: rewritten,
        added: new_entries.len(),
        removed: 0,
    }
}

/// Drops every line starting with `<address> <site>` or
/// `<address> www.<site>` for a managed address and a targeted site.
///
/// Matching is by prefix, so a redirect for `reddit.com` also removes a
/// `127.0.0.1 reddit.com.au` line. Protected lines are never dropped.
pub fn unblock_sites<S: AsRef<str>>(content: &str, sites: &[S]) -> HostsRewrite {
    let prefixes: Vec<String> = expand_sites(sites)
        .iter()
        .flat_map(|site| {
            MANAGED_ADDRESSES.iter().flat_map(move |address| {
                [
                    redirect_entry(address, site),
                    redirect_entry(address, &format!("{WWW_PREFIX}{site}")),
                ]
            })
        })
        .collect();

    if prefixes.is_empty() {
        return HostsRewrite::unchanged(content);
    }

    retain_lines(content, |line| {
        let trimmed = line.trim();
        HostsEntryKind::classify(trimmed).is_protected()
            || !prefixes.iter().any(|prefix| trimmed.starts_with(prefix.as_str()))
    })
}

/// Drops every redirect under a managed address that is not a localhost
/// entry. Comments, the broadcast entry and unrelated lines survive.
pub fn clear_all_redirects(content: &str) -> HostsRewrite {
    retain_lines(content, |line| HostsEntryKind::classify(line).is_protected())
}

fn retain_lines(content: &str, mut keep: impl FnMut(&str) -> bool) -> HostsRewrite {
    let mut rewritten = String::with_capacity(content.len());
    let mut removed = 0;

    for line in content.split_inclusive('\n') {
        if keep(line) {
            rewritten.push_str(line);
        } else {
            removed += 1;
        }
    }

    HostsRewrite {
        content: rewritten,
        added: 0,
        removed,
    }
}
