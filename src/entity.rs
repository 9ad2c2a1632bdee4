//! Classification of Organizations entity IDs.
#![allow(clippy::module_name_repetitions)]

use lazy_static::lazy_static;
use regex::Regex;
use serde_plain::forward_display_to_serde;

/// The kind of entity an Organizations ID denotes.
///
/// Entity IDs are distinguishable by prefix convention: `o-` for the
/// organization itself, `r-` for the tree's root, `ou-` for organizational
/// units, and 12-digit numeric IDs for accounts. Path resolution treats IDs
/// opaquely, so this classification is purely informational (diagnostics,
/// logging, caller-side validation).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Organization,
    Root,
    OrganizationalUnit,
    Account,
}

forward_display_to_serde!(EntityKind);

impl EntityKind {
    /// Classify `id` by its prefix convention, if it matches one.
    #[must_use]
    pub fn of(id: &str) -> Option<Self> {
        lazy_static! {
            static ref ACCOUNT_ID: Regex = Regex::new("^[0-9]{12}$").unwrap();
        }

        if id.starts_with("o-") {
            Some(Self::Organization)
        } else if id.starts_with("r-") {
            Some(Self::Root)
        } else if id.starts_with("ou-") {
            Some(Self::OrganizationalUnit)
        } else if ACCOUNT_ID.is_match(id) {
            Some(Self::Account)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_of() {
        assert_eq!(EntityKind::of("o-org456"), Some(EntityKind::Organization));
        assert_eq!(EntityKind::of("r-root123"), Some(EntityKind::Root));
        assert_eq!(
            EntityKind::of("ou-aaa111"),
            Some(EntityKind::OrganizationalUnit)
        );
        assert_eq!(EntityKind::of("123456789012"), Some(EntityKind::Account));

        // accounts are exactly 12 digits.
        assert_eq!(EntityKind::of("12345678901"), None);
        assert_eq!(EntityKind::of("1234567890123"), None);
        assert_eq!(EntityKind::of("12345678901a"), None);
        assert_eq!(EntityKind::of(""), None);
        assert_eq!(EntityKind::of("stack-name"), None);
    }

    #[test]
    fn entity_kind_display() {
        assert_eq!(
            format!("{}", EntityKind::OrganizationalUnit).as_str(),
            "ORGANIZATIONAL_UNIT"
        );
        assert_eq!(format!("{}", EntityKind::Account).as_str(), "ACCOUNT");
    }
}
