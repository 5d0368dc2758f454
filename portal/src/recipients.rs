//! Quick-send recipients.

use mizu_common::RecipientId;
use serde::{Deserialize, Serialize};

/// A saved recipient offered for one-tap sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRecipient {
    pub id: RecipientId,
    pub name: String,
    /// Email address or phone number the transfer is addressed to.
    pub handle: String,
}

impl QuickRecipient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: RecipientId::new(id),
            name: name.into(),
            handle: handle.into(),
        }
    }

    /// Avatar initials for this recipient.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Recipients whose name or handle contains `query`, ignoring case.
/// An empty query matches everyone.
pub fn filter<'a>(recipients: &'a [QuickRecipient], query: &str) -> Vec<&'a QuickRecipient> {
    if query.is_empty() {
        return recipients.iter().collect();
    }

    let needle = query.to_lowercase();
    recipients
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle) || r.handle.to_lowercase().contains(&needle)
        })
        .collect()
}

/// First letter of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipients() -> Vec<QuickRecipient> {
        vec![
            QuickRecipient::new("1", "Tariro M.", "tariro@example.com"),
            QuickRecipient::new("2", "Kuda P.", "+263 77 123 4567"),
            QuickRecipient::new("3", "Nyasha C.", "nyasha@example.com"),
        ]
    }

    #[test]
    fn test_filter_empty_query() {
        let all = recipients();
        assert_eq!(filter(&all, "").len(), 3);
    }

    #[test]
    fn test_filter_by_name_and_handle() {
        let all = recipients();

        let by_name = filter(&all, "KUDA");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id.as_str(), "2");

        let by_handle = filter(&all, "example.com");
        assert_eq!(by_handle.len(), 2);

        assert!(filter(&all, "nobody").is_empty());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Tariro M."), "TM");
        assert_eq!(initials("nyasha"), "N");
        assert_eq!(initials("Anna Maria Lopez"), "AM");
        assert_eq!(initials("  "), "");
        assert_eq!(recipients()[1].initials(), "KP");
    }
}
