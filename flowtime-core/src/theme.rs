//! Display theme persistence.

use crate::domain::Theme;
use crate::store::{Slot, StateStore, StoreError};

/// Reads and writes the persisted theme preference. Independent of
/// every other dashboard concern.
pub struct ThemeService<S> {
    store: S,
}

impl<S: StateStore> ThemeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved preference, light when unset.
    pub fn current(&self) -> Result<Theme, StoreError> {
        Ok(self.store.read::<Theme>(Slot::Theme)?.unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.write(Slot::Theme, &theme)
    }

    /// Flip the preference, persist it and return the new value.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let themes = ThemeService::new(MemoryStore::new());
        assert_eq!(themes.current().unwrap(), Theme::Light);
    }

    #[test]
    fn toggle_persists_the_new_theme() {
        let store = MemoryStore::new();
        let themes = ThemeService::new(store.clone());

        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.raw(Slot::Theme).as_deref(), Some("\"dark\""));

        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(themes.current().unwrap(), Theme::Light);
    }

    #[test]
    fn preference_survives_a_reload() {
        let store = MemoryStore::new();
        ThemeService::new(store.clone()).set(Theme::Dark).unwrap();

        assert_eq!(ThemeService::new(store).current().unwrap(), Theme::Dark);
    }
}
