//! Mock outbound adapters for tests, with call counters so tests can assert
//! short-circuit ordering.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    models::{UploadedImage, UserId},
    ports::outbound::{AvatarGenerator, AvatarStorage, ProfileRepository},
    AvatarError,
};

pub struct MockProfileRepository {
    known_users: Vec<String>,
    fail_update: bool,
    lookups: AtomicUsize,
    updates: Mutex<Vec<(String, String)>>,
}

impl MockProfileRepository {
    /// A repository with no rows at all.
    pub fn empty() -> Self {
        Self {
            known_users: Vec::new(),
            fail_update: false,
            lookups: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(user_id: &str) -> Self {
        Self {
            known_users: vec![user_id.to_string()],
            ..Self::empty()
        }
    }

    /// Make every avatar-URL update fail, as if the record store dropped out
    /// after the existence check.
    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Recorded `(user_id, avatar_url)` updates, in order.
    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn user_exists(&self, user_id: &UserId) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.known_users.iter().any(|known| known == user_id.as_str())
    }

    async fn set_avatar_url(
        &self,
        user_id: &UserId,
        avatar_url: &str,
    ) -> Result<(), AvatarError> {
        if self.fail_update {
            return Err(AvatarError::Profile("connection refused".into()));
        }
        self.updates
            .lock()
            .unwrap()
            .push((user_id.as_str().to_string(), avatar_url.to_string()));
        Ok(())
    }
}

pub struct MockAvatarStorage {
    base_url: String,
    fail: bool,
    stores: AtomicUsize,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockAvatarStorage {
    pub fn new() -> Self {
        Self {
            base_url: "https://storage.test/object/public".to_string(),
            fail: false,
            stores: AtomicUsize::new(0),
            objects: Mutex::new(HashMap::new()),
        }
    }

    /// Make every upload fail, as if the object store were unreachable.
    pub fn unreachable() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl AvatarStorage for MockAvatarStorage {
    async fn store_avatar(&self, user_id: &UserId, image: Vec<u8>) -> Result<String, AvatarError> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AvatarError::Storage("object store unreachable".into()));
        }

        let key = format!("{user_id}.png");
        self.objects.lock().unwrap().insert(key.clone(), image);
        Ok(format!("{}/avatars/{key}", self.base_url))
    }
}

pub struct MockAvatarGenerator {
    outputs: Vec<Vec<u8>>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockAvatarGenerator {
    /// A generator that always returns the same bytes.
    pub fn returning(output: Vec<u8>) -> Self {
        Self {
            outputs: vec![output],
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A generator that returns outputs in sequence, wrapping around.
    pub fn with_sequence(outputs: Vec<Vec<u8>>) -> Self {
        Self {
            outputs,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A generator whose backend rejects every call.
    pub fn failing() -> Self {
        Self {
            outputs: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvatarGenerator for MockAvatarGenerator {
    async fn generate(&self, _upload: &UploadedImage) -> Result<Vec<u8>, AvatarError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AvatarError::Generation("backend rejected request".into()));
        }
        Ok(self.outputs[call % self.outputs.len()].clone())
    }
}
