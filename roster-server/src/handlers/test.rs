use crate::users::Users;
use roster_core::{Record, UserStore};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A record like the register endpoint stores
pub fn record(name: &str) -> Record {
    let mut record = Record::new();
    record.insert("name".to_string(), json!(name));

    record
}

/// A fresh store pre-loaded with one user per name
pub fn users_with(names: &[&str]) -> Users {
    let mut store = UserStore::new();

    for name in names {
        store.insert(record(name));
    }

    Users(Arc::new(RwLock::new(store)))
}
