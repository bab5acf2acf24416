//! Submit and reset handlers for the coordinate form.

use anyhow::Result;
use tracing::info;

use crate::{
    coordinate::{DEFAULT_LATITUDE_STR, DEFAULT_LONGITUDE_STR},
    session::{LAT_KEY, LON_KEY, SessionStore},
};

/// Raw form fields, as typed. Empty means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(SubmitForm),
    Reset,
}

/// Whether the current page has to be loaded again after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    Yes,
    No,
}

/// Store each non-empty field. Values are kept verbatim; the resolver
/// sanitizes them on the next page load.
pub fn on_submit(store: &mut dyn SessionStore, form: &SubmitForm) -> Result<Reload> {
    if !form.latitude.is_empty() {
        store.set(LAT_KEY, &form.latitude)?;
        info!(lat = %form.latitude, "Stored latitude");
    }

    if !form.longitude.is_empty() {
        store.set(LON_KEY, &form.longitude)?;
        info!(lon = %form.longitude, "Stored longitude");
    }

    Ok(Reload::No)
}

/// Restore the default location.
pub fn on_reset(store: &mut dyn SessionStore) -> Result<Reload> {
    store.set(LAT_KEY, DEFAULT_LATITUDE_STR)?;
    store.set(LON_KEY, DEFAULT_LONGITUDE_STR)?;
    info!("Restored default coordinates");

    Ok(Reload::Yes)
}

/// Routes form actions to their handlers over one store.
#[derive(Debug)]
pub struct InputController<'a> {
    store: &'a mut dyn SessionStore,
}

impl<'a> InputController<'a> {
    pub fn new(store: &'a mut dyn SessionStore) -> Self {
        Self { store }
    }

    pub fn dispatch(&mut self, action: &Action) -> Result<Reload> {
        match action {
            Action::Submit(form) => on_submit(&mut *self.store, form),
            Action::Reset => on_reset(&mut *self.store),
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        &*self.store
    }
}
