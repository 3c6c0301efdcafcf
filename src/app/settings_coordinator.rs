//! Generic settings persistence coordination.
//!
//! Type-safe loading and saving of serializable settings through eframe's
//! persistent storage. Settings are stored as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LayoutState, LINE_TABLE_COLUMNS};
    use eframe::Storage;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn resized_column_widths_round_trip_through_storage() {
        let mut layout = LayoutState::new();
        // A header drag writes through column_widths_mut; the saved value
        // must reflect that, not the defaults.
        layout.column_widths_mut()[0] = 320.0;

        let mut storage = MemoryStorage::default();
        SettingsCoordinator::save_setting(&mut storage, "column_widths", layout.column_widths());

        let loaded: [f32; LINE_TABLE_COLUMNS] = SettingsCoordinator::load_setting_or(
            Some(&storage as &dyn eframe::Storage),
            "column_widths",
            LayoutState::default_column_widths(),
        );
        assert_eq!(loaded[0], 320.0);
        assert_ne!(loaded, LayoutState::default_column_widths());
    }

    #[test]
    fn missing_or_corrupt_setting_falls_back_to_default() {
        let mut storage = MemoryStorage::default();
        storage.set_string("column_widths", "not json".to_string());

        let loaded: [f32; LINE_TABLE_COLUMNS] = SettingsCoordinator::load_setting_or(
            Some(&storage as &dyn eframe::Storage),
            "column_widths",
            LayoutState::default_column_widths(),
        );
        assert_eq!(loaded, LayoutState::default_column_widths());
    }
}
