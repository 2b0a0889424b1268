//! Shared selection context
//!
//! Every screen that lets the user pick a category or an image writes here,
//! and every screen that needs to know what is selected reads from here.

use serde::{Deserialize, Serialize};

/// Category sentinel meaning "nothing chosen yet"
pub const DEFAULT_CATEGORY: &str = "NONE";

/// Image reference shown before the user picks anything
///
/// This looks like a remote URL but is only ever resolved as a base64
/// payload or asset name, so it renders as the placeholder.
pub const DEFAULT_IMAGE_REFERENCE: &str = "https://lh3.googleusercontent.com/zYbiiAgbKD6VrABXXjQfwXA4FhUkHxtKxz5oIK8xrJiGjHe3c4jNhZuDMAeKSL1GFR-ku2oEzFSMguNATEEru8eDEN0VtUfO83kC9LpVGITKArJOtywfD1l5VRcuK8mKe3knxWFVKf53Vz_rF4bfig4GE14weZRc7oaVZxEyc8f1Mb4CiS0U_h9wnFjRAwDggu2QSk0eOOsV3dk3oJdle8hlZZFrigqxq7ame9REpnSRSl4b9c88bYIXAGoQE1002xZnQANfIrK93mmIQLAHFpvfFhTogJunt9Cw1Rup08C5B1l0CiuU-nVHel_-i3Dnv8UE7brcA22Z2lpMpbpOGfnu8PJj5qSSA3GHLI1u78lG7iHsYjWl47KV0y8YY0PuoO76Em1xSMEQbPXvKKRAajAuoCpuZwiX95EpHtWR6tGnZ8yolypM_66QCetBb5gssFJzE2JFE5R5VwynIGHQmyQHHlw_xjEyzxVrcCzBcgo9TidPu66pbPV5qLF7YJr06-NsVR-Ts-Utmzujscy_GJ4llfCNn4teXgDeoH6aawa8yfqzdtyfpRnGtZx2h-4vLb9Hb_xoWJzVRQf08dffGDHbOQ4BhMfVXK-wN-AxhiFHDOJh2UYXf7n4zKkliDORqjhvYPYZhJkTquGpF1mKysVA3lMStHq-a-E26JIg0j8sOn2pUnda0UjfKvv6VieJA4MW8fWhXMMWfSaJkxm0D7xWRHhauqKv8iXCwpyQmmPRL82iz1_zn60E7-wQsHK1S1SYr2NLLXctDMGcL3qidLMVpSHhamvPiMjuLcyQm7sfBjaRMpMxirDQYSbvJp6b2ZjKYBVd1LpyMWJpWlszrgZx_2B3w5co4BXnKZfAkWRG3GCrQaDtHNjzKfWh6K79ZenlM4I5HT-G4K9OCjKGrdOHTJbDNBv2cgQu6dlpFrw7_eBO=w658-h658-s-no?authuser=0";

/// Category and image the user currently has selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionContext {
    /// Selected category name, [`DEFAULT_CATEGORY`] when none
    pub category_name: String,

    /// Selected image: inline base64 payload or bundled asset name
    pub selected_image_reference: String,

    /// Index of the option highlighted on the home screen
    #[serde(default)]
    pub selected_option: usize,
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self {
            category_name: DEFAULT_CATEGORY.to_string(),
            selected_image_reference: DEFAULT_IMAGE_REFERENCE.to_string(),
            selected_option: 0,
        }
    }
}

impl SelectionContext {
    /// Create a selection with custom defaults
    pub fn new(category_name: impl Into<String>, image_reference: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            selected_image_reference: image_reference.into(),
            selected_option: 0,
        }
    }

    /// Check if a category has been chosen
    pub fn has_category(&self) -> bool {
        self.category_name != DEFAULT_CATEGORY
    }

    /// Select a category
    pub fn select_category(&mut self, name: impl Into<String>) {
        self.category_name = name.into();
    }

    /// Select an image by reference
    pub fn select_image(&mut self, reference: impl Into<String>) {
        self.selected_image_reference = reference.into();
    }

    /// Select a home screen option
    pub fn select_option(&mut self, index: usize) {
        self.selected_option = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = SelectionContext::default();
        assert_eq!(selection.category_name, "NONE");
        assert!(!selection.has_category());
        assert!(selection.selected_image_reference.starts_with("https://"));
        assert_eq!(selection.selected_option, 0);
    }

    #[test]
    fn test_select() {
        let mut selection = SelectionContext::default();
        selection.select_category("Romance");
        selection.select_image("heart_01");
        selection.select_option(2);

        assert!(selection.has_category());
        assert_eq!(selection.category_name, "Romance");
        assert_eq!(selection.selected_image_reference, "heart_01");
        assert_eq!(selection.selected_option, 2);
    }

    #[test]
    fn test_selection_serialization() {
        let selection = SelectionContext::new("Romance", "heart_02");
        let json = serde_json::to_string(&selection).unwrap();
        assert!(json.contains("\"categoryName\":\"Romance\""));

        let parsed: SelectionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, selection);
    }
}
