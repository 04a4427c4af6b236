//! Named locations users can pick instead of typing coordinates.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::{DatasetError, fs::read_json};

/// A labelled coordinate from the geocoding dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Human-readable label.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Addresses in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    entries: Vec<Address>,
}

impl AddressBook {
    /// Wrap a list of addresses.
    #[must_use]
    pub const fn new(entries: Vec<Address>) -> Self {
        Self { entries }
    }

    /// Load the geocoding dataset at `path`.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when the file cannot be opened, read, or
    /// parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, DatasetError> {
        read_json(path).map(Self::new)
    }

    /// Find the first address whose label matches `label`, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use habitat_data::{Address, AddressBook};
    ///
    /// let book = AddressBook::new(vec![Address {
    ///     address: "350 5th Ave, New York".to_owned(),
    ///     latitude: 40.7484,
    ///     longitude: -73.9857,
    /// }]);
    /// assert!(book.lookup("350 5TH AVE, NEW YORK ").is_some());
    /// assert!(book.lookup("221B Baker Street").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&Address> {
        let wanted = label.trim();
        self.entries
            .iter()
            .find(|entry| entry.address.trim().eq_ignore_ascii_case(wanted))
    }

    /// Up to `limit` addresses from the start of the book.
    pub fn first(&self, limit: usize) -> impl Iterator<Item = &Address> {
        self.entries.iter().take(limit)
    }

    /// Number of addresses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no addresses.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
