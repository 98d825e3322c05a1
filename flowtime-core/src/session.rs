//! Signed-in flag and last-active-page persistence.

use crate::domain::Page;
use crate::store::{Slot, StateStore, StoreError};

const AUTH_FLAG: &str = "true";

/// Stored session state: whether the admin is signed in and which page
/// was open last. Both live in their own slots and survive restarts
/// independently.
pub struct SessionStore<S> {
    store: S,
}

impl<S: StateStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_authenticated(&self) -> Result<bool, StoreError> {
        Ok(self.store.read::<String>(Slot::Auth)?.as_deref() == Some(AUTH_FLAG))
    }

    pub fn login(&self) -> Result<(), StoreError> {
        self.store.write(Slot::Auth, AUTH_FLAG)
    }

    /// Sign out and land back on the employees page.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.erase_slot(Slot::Auth)?;
        self.set_current_page(Page::default())
    }

    /// Last active page, defaulting to employees when unset.
    pub fn current_page(&self) -> Result<Page, StoreError> {
        Ok(self.store.read::<Page>(Slot::CurrentPage)?.unwrap_or_default())
    }

    /// Like `current_page`, but writes the default back when the slot
    /// has never been set, so later loads agree.
    pub fn current_page_or_init(&self) -> Result<Page, StoreError> {
        match self.store.read::<Page>(Slot::CurrentPage)? {
            Some(page) => Ok(page),
            None => {
                let page = Page::default();
                self.set_current_page(page)?;
                Ok(page)
            }
        }
    }

    pub fn set_current_page(&self, page: Page) -> Result<(), StoreError> {
        self.store.write(Slot::CurrentPage, &page)
    }
}
