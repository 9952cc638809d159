use crate::core::error::StoreError;
use crate::models::user::User;
use crate::utils::id::IdGenerator;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Generator calls allowed per create before giving up
const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Default)]
struct Inner {
    /// Records in insertion order
    users: Vec<User>,
    /// Every id handed out so far, including deleted ones
    issued: HashSet<String>,
}

/// In-memory store for user records
///
/// Every operation runs inside a single lock acquisition, so requests
/// observe the collection one at a time.
pub struct UserStore {
    inner: Mutex<Inner>,
    ids: Arc<dyn IdGenerator>,
}

impl UserStore {
    /// Create an empty store backed by the given id generator
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            ids,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }

    /// All records in insertion order
    pub fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.lock()?.users.clone())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|user| user.id == id).cloned())
    }

    /// Store a new record under a freshly generated id
    ///
    /// Name and bio are stored as given; callers validate them first.
    pub fn create(&self, name: &str, bio: &str) -> Result<User, StoreError> {
        let mut inner = self.lock()?;

        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.ids.generate())
            .find(|candidate| !inner.issued.contains(candidate))
            .ok_or(StoreError::IdsExhausted {
                attempts: MAX_ID_ATTEMPTS,
            })?;
        inner.issued.insert(id.clone());

        let user = User::new(id, name, bio);
        inner.users.push(user.clone());

        Ok(user)
    }

    /// Replace name and bio of an existing record, keeping its id
    pub fn update(&self, id: &str, name: &str, bio: &str) -> Result<Option<User>, StoreError> {
        let mut inner = self.lock()?;

        Ok(inner.users.iter_mut().find(|user| user.id == id).map(|user| {
            user.name = name.to_string();
            user.bio = bio.to_string();
            user.clone()
        }))
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut inner = self.lock()?;

        let position = inner.users.iter().position(|user| user.id == id);
        Ok(position.map(|index| inner.users.remove(index)))
    }

    /// Insert fixture records, returning how many were added
    pub fn seed<'a, I>(&self, users: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut count = 0;
        for (name, bio) in users {
            self.create(name, bio)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.users.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.users.is_empty())
    }
}
