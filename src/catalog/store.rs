//! In-memory catalog storage
//!
//! Records live in insertion-ordered arenas. A record's id is its arena
//! position plus one, so ids are sequential from 1, never reused, and
//! lookups are a bounds check. Records are never mutated or removed.

use tracing::{debug, warn};

use super::model::{AsphaltMethod, MethodId, NewAsphaltMethod, NewUser, User, UserId};
use super::seed::seed_entries;
use crate::{Fa2msError, Result};

/// Storage operations consumed by the HTTP layer and the CLI
///
/// Readers receive owned copies; stored state is only reachable through
/// the store itself.
pub trait Storage: Send + Sync {
    fn get_user(&self, id: UserId) -> Result<Option<User>>;

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn create_user(&mut self, user: NewUser) -> Result<User>;

    /// Every method in insertion order
    fn get_all_methods(&self) -> Result<Vec<AsphaltMethod>>;

    /// Exact id lookup; `Ok(None)` when no record has that id
    fn get_method_by_id(&self, id: MethodId) -> Result<Option<AsphaltMethod>>;

    fn create_method(&mut self, method: NewAsphaltMethod) -> Result<AsphaltMethod>;
}

/// The process-lifetime catalog
#[derive(Debug, Default)]
pub struct MemStorage {
    users: Vec<User>,
    methods: Vec<AsphaltMethod>,
}

impl MemStorage {
    /// Create a store populated with the seed catalog
    pub fn new() -> Self {
        let mut storage = Self::empty();
        storage.seed();
        storage
    }

    /// Create a store with no records
    pub fn empty() -> Self {
        Self::default()
    }

    fn seed(&mut self) {
        for entry in seed_entries() {
            if let Err(e) = self.insert_method(entry.into()) {
                warn!(error = %e, "Stopped seeding early");
                break;
            }
        }
        debug!(count = self.methods.len(), "Seeded asphalt method catalog");
    }

    /// Borrow every stored method in insertion order
    pub fn methods(&self) -> &[AsphaltMethod] {
        &self.methods
    }

    /// Borrow one stored method
    pub fn method(&self, id: MethodId) -> Option<&AsphaltMethod> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.methods.get(index)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    fn insert_method(&mut self, method: NewAsphaltMethod) -> Result<AsphaltMethod> {
        let id = next_id(self.methods.len())
            .ok_or_else(|| Fa2msError::Storage("method id space exhausted".to_string()))?;
        let stored = method.into_method(id);
        self.methods.push(stored.clone());
        Ok(stored)
    }
}

/// Next sequential id for an arena currently holding `len` records, or
/// `None` once every `u32` id has been handed out
fn next_id(len: usize) -> Option<u32> {
    u32::try_from(len).ok()?.checked_add(1)
}

impl Storage for MemStorage {
    fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let user = usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| self.users.get(index));
        Ok(user.cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    fn create_user(&mut self, user: NewUser) -> Result<User> {
        if self.users.iter().any(|u| u.username == user.username) {
            return Err(Fa2msError::Conflict(format!(
                "username '{}' is already taken",
                user.username
            )));
        }

        let id = next_id(self.users.len())
            .ok_or_else(|| Fa2msError::Storage("user id space exhausted".to_string()))?;
        let stored = User {
            id,
            username: user.username,
            password: user.password,
        };
        self.users.push(stored.clone());
        Ok(stored)
    }

    fn get_all_methods(&self) -> Result<Vec<AsphaltMethod>> {
        Ok(self.methods.clone())
    }

    fn get_method_by_id(&self, id: MethodId) -> Result<Option<AsphaltMethod>> {
        Ok(self.method(id).cloned())
    }

    fn create_method(&mut self, method: NewAsphaltMethod) -> Result<AsphaltMethod> {
        self.insert_method(method)
    }
}
