//! Application Context
//!
//! Shared handle to the sync layer, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use todo_sync::{GraphQlEndpoint, TodoSync};

use crate::browser::BrowserConfirm;

/// The sync layer as wired up in the browser
pub type ClientSync = TodoSync<GraphQlEndpoint, BrowserConfirm>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Not `Send`, so it lives in local arena storage
    sync: StoredValue<Rc<ClientSync>, LocalStorage>,
}

impl AppContext {
    pub fn new(sync: Rc<ClientSync>) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
        }
    }

    pub fn sync(&self) -> Rc<ClientSync> {
        self.sync.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
