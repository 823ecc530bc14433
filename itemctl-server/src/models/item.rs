//! Item input validation
//!
//! Names must be non-empty and fit the `VARCHAR(100)` column. Ids are
//! the integers assigned by the `items.id` sequence.

use std::fmt;
use std::num::IntErrorKind;

use super::ValidationError;

/// Maximum length for item names, in characters
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Validated item name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Rules
    /// - Must contain at least one non-whitespace character
    /// - Max 100 characters (Unicode scalar values, as Postgres counts them)
    ///
    /// The name is stored exactly as given; surrounding whitespace is kept.
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::ItemName;
    ///
    /// assert!(ItemName::new("Widget").is_ok());
    /// assert!(ItemName::new("   ").is_err());
    /// assert!(ItemName::new(&"x".repeat(101)).is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Item identifier taken from a request path
///
/// Wider than the `SERIAL` column so any 64-bit integer is accepted; ids
/// the column cannot hold simply match no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Parse a path segment as an item id.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.parse::<i64>().map(Self).map_err(|e| {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "out of range",
                _ => "must be an integer",
            };
            ValidationError::InvalidFormat { field: "id", reason }
        })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated payload for inserting an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: ItemName,
    pub description: String,
}

impl NewItem {
    /// Build an insert payload from optional request fields.
    ///
    /// A missing description becomes the empty string.
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing { field: "name" })?;

        Ok(Self {
            name: ItemName::new(&name)?,
            description: description.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ItemName::new("Widget").is_ok());
        assert!(ItemName::new("a").is_ok());
        assert!(ItemName::new("blue widget, size 3").is_ok());
        assert_eq!(ItemName::new(" padded ").unwrap().as_str(), " padded ");
    }

    #[test]
    fn rejects_empty() {
        let err = ItemName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let err = ItemName::new(" \t\n").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn max_length() {
        let name_100 = "a".repeat(100);
        assert!(ItemName::new(&name_100).is_ok());

        let name_101 = "a".repeat(101);
        let err = ItemName::new(&name_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 two-byte characters is 200 bytes but still fits VARCHAR(100)
        let name = "é".repeat(100);
        assert!(ItemName::new(&name).is_ok());
    }

    #[test]
    fn parses_ids() {
        assert_eq!(ItemId::parse("1").unwrap(), ItemId(1));
        assert_eq!(ItemId::parse("999").unwrap().get(), 999);
    }

    #[test]
    fn accepts_ids_beyond_the_serial_range() {
        assert_eq!(ItemId::parse("99999999999").unwrap(), ItemId(99_999_999_999));
        assert_eq!(ItemId::parse("-5").unwrap(), ItemId(-5));
    }

    #[test]
    fn rejects_non_integer_ids() {
        for raw in ["abc", "1.5", ""] {
            let err = ItemId::parse(raw).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidFormat {
                    field: "id",
                    reason: "must be an integer"
                }
            );
        }
    }

    #[test]
    fn reports_overflow_as_out_of_range() {
        let err = ItemId::parse("99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "id",
                reason: "out of range"
            }
        );
    }

    #[test]
    fn new_item_requires_name() {
        let err = NewItem::new(None, Some("no name".into())).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "name" });
    }

    #[test]
    fn new_item_defaults_description() {
        let item = NewItem::new(Some("Widget".into()), None).unwrap();
        assert_eq!(item.name.as_str(), "Widget");
        assert_eq!(item.description, "");
    }
}
