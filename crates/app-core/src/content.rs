//! Content collaborators
//!
//! Screens read quotes, messages and stored settings through these
//! interfaces. The navigation layer only hands them down; how content is
//! fetched or persisted is up to the host.
//!
//! [`InMemoryLibrary`] implements all three for tests and demos.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap, HashSet};

/// String key-value store for small persisted settings
pub trait DatabaseHelper: Send + Sync {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one
    fn set(&self, key: &str, value: String);
}

/// Source of text messages grouped by category
pub trait MessagesManager: Send + Sync {
    /// Messages in a category, in display order
    fn messages(&self, category: &str) -> Vec<String>;

    /// Messages the user marked as favorite
    fn favorites(&self) -> Vec<String>;

    /// Flip the favorite mark of a message, returning the new state
    fn toggle_favorite(&self, message: &str) -> bool;
}

/// Source of quote images grouped by category
pub trait QuotesManager: Send + Sync {
    /// Known category names
    fn categories(&self) -> Vec<String>;

    /// Image references (base64 payloads or asset names) in a category
    fn images(&self, category: &str) -> Vec<String>;
}

/// In-memory content for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    messages: BTreeMap<String, Vec<String>>,
    images: BTreeMap<String, Vec<String>>,
    favorites: RwLock<Vec<String>>,
    settings: RwLock<HashMap<String, String>>,
}

impl InMemoryLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add messages to a category
    pub fn with_messages<I, S>(mut self, category: &str, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages
            .entry(category.to_string())
            .or_default()
            .extend(messages.into_iter().map(Into::into));
        self
    }

    /// Add image references to a category
    pub fn with_images<I, S>(mut self, category: &str, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images
            .entry(category.to_string())
            .or_default()
            .extend(images.into_iter().map(Into::into));
        self
    }
}

impl DatabaseHelper for InMemoryLibrary {
    fn get(&self, key: &str) -> Option<String> {
        self.settings.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.settings.write().insert(key.to_string(), value);
    }
}

impl MessagesManager for InMemoryLibrary {
    fn messages(&self, category: &str) -> Vec<String> {
        self.messages.get(category).cloned().unwrap_or_default()
    }

    fn favorites(&self) -> Vec<String> {
        self.favorites.read().clone()
    }

    fn toggle_favorite(&self, message: &str) -> bool {
        let mut favorites = self.favorites.write();
        if let Some(index) = favorites.iter().position(|m| m == message) {
            favorites.remove(index);
            false
        } else {
            favorites.push(message.to_string());
            true
        }
    }
}

impl QuotesManager for InMemoryLibrary {
    fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&String> = HashSet::new();
        self.images
            .keys()
            .chain(self.messages.keys())
            .filter(|name| seen.insert(*name))
            .cloned()
            .collect()
    }

    fn images(&self, category: &str) -> Vec<String> {
        self.images.get(category).cloned().unwrap_or_default()
    }
}
