//! Host and guest normalization for episode seeding.
//!
//! The seeding collaborator persists one `(episode, person, is_host)` row
//! per appearance. People carry an optional `host` flag; this module turns
//! that three-state flag into a plain boolean.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A person listed as appearing on an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Person identifier
    pub id: String,
    /// Explicit host flag, if the roster sets one
    #[serde(default)]
    pub host: Option<bool>,
}

/// Role of a person on a given episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRole {
    /// Show host
    Host,
    /// Guest
    Guest,
}

impl HostRole {
    /// Normalize a declared host flag.
    ///
    /// - ids listed in `core_hosts` are always hosts
    /// - `Some(true)` is a host
    /// - `Some(false)` and `None` are guests (an unset flag defaults to guest)
    pub fn from_flags(person_id: &str, declared: Option<bool>, core_hosts: &[&str]) -> Self {
        if core_hosts.contains(&person_id) {
            return HostRole::Host;
        }
        match declared {
            Some(true) => HostRole::Host,
            Some(false) | None => HostRole::Guest,
        }
    }

    /// True for [`HostRole::Host`].
    pub fn is_host(self) -> bool {
        matches!(self, HostRole::Host)
    }
}

/// A host/guest row ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostGuestRow {
    /// Episode slug
    pub episode_slug: String,
    /// Person identifier
    pub person_id: String,
    /// Normalized host flag
    pub is_host: bool,
}

/// Build host/guest rows for `episode_slugs` in order.
///
/// Episodes with no roster entry produce no rows.
pub fn host_guest_rows<'a, I>(
    episode_slugs: I,
    roster: &HashMap<String, Vec<RosterEntry>>,
    core_hosts: &[&str],
) -> Vec<HostGuestRow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows = Vec::new();
    for slug in episode_slugs {
        let Some(people) = roster.get(slug) else {
            continue;
        };
        for person in people {
            let role = HostRole::from_flags(&person.id, person.host, core_hosts);
            rows.push(HostGuestRow {
                episode_slug: slug.to_string(),
                person_id: person.id.clone(),
                is_host: role.is_host(),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: &[&str] = &["chuckcarpenter", "robbiethewagner"];

    fn person(id: &str, host: Option<bool>) -> RosterEntry {
        RosterEntry {
            id: id.to_string(),
            host,
        }
    }

    #[test]
    fn test_core_hosts_override_flag() {
        assert_eq!(
            HostRole::from_flags("chuckcarpenter", Some(false), CORE),
            HostRole::Host
        );
    }

    #[test]
    fn test_unset_flag_defaults_to_guest() {
        assert_eq!(HostRole::from_flags("guest", None, CORE), HostRole::Guest);
        assert_eq!(HostRole::from_flags("guest", Some(false), CORE), HostRole::Guest);
        assert_eq!(HostRole::from_flags("cohost", Some(true), CORE), HostRole::Host);
    }

    #[test]
    fn test_host_guest_rows() {
        let mut roster = HashMap::new();
        roster.insert(
            "ep-1".to_string(),
            vec![person("robbiethewagner", None), person("jane", None)],
        );

        let rows = host_guest_rows(["ep-1", "ep-2"], &roster, CORE);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_host);
        assert!(!rows[1].is_host);
        assert_eq!(rows[1].episode_slug, "ep-1");
    }
}
