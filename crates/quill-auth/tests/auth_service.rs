//! End-to-end tests for the auth service over an in-memory user store
//! and the in-memory session cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use quill_auth::{AuthOutcome, AuthService, Credentials, PasswordHasher, SessionManager};
use quill_cache::CacheManager;
use quill_cache::memory::MemoryCacheProvider;
use quill_core::config::SessionConfig;
use quill_core::config::cache::MemoryCacheConfig;
use quill_core::result::AppResult;
use quill_entity::user::{NewUser, PersistError, User, UserStore};

/// In-memory user store mirroring the PostgreSQL contract, including the
/// uniqueness conflict on username.
#[derive(Debug, Default)]
struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn delete_by_username(&self, username: &str) {
        self.users
            .lock()
            .unwrap()
            .retain(|_, user| user.username != username);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn persist(&self, new_user: NewUser) -> Result<User, PersistError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|user| user.username == new_user.username) {
            return Err(PersistError::Conflict { field: "username" });
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Store whose persist always fails, for the suppressed-detail path.
#[derive(Debug, Default)]
struct BrokenUserStore;

#[async_trait]
impl UserStore for BrokenUserStore {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &str) -> AppResult<Option<User>> {
        Ok(None)
    }

    async fn persist(&self, _new_user: NewUser) -> Result<User, PersistError> {
        Err(PersistError::Storage {
            detail: "relation \"users\" does not exist".to_string(),
        })
    }
}

fn session_manager() -> SessionManager {
    let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 1000 });
    let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
    SessionManager::new(cache, SessionConfig::default())
}

fn service_with_store(store: Arc<dyn UserStore>) -> AuthService {
    AuthService::new(store, session_manager(), PasswordHasher::new())
}

fn test_service() -> (AuthService, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::default());
    (service_with_store(store.clone()), store)
}

fn first_error(outcome: &AuthOutcome) -> (&str, &str) {
    let errors = outcome.result.errors.as_ref().expect("expected errors");
    let error = errors.first().expect("expected at least one error");
    (error.field.as_str(), error.message.as_str())
}

#[tokio::test]
async fn test_register_rejects_short_username() {
    let (service, store) = test_service();

    let outcome = service.register(Credentials::new("ab", "longpassword")).await;

    assert_eq!(
        first_error(&outcome),
        ("username", "length must be greater than 2")
    );
    assert!(outcome.cookie.is_none());
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (service, store) = test_service();

    let outcome = service.register(Credentials::new("alice", "short")).await;

    assert_eq!(
        first_error(&outcome),
        ("password", "length must be greater than 8")
    );
    assert!(outcome.cookie.is_none());
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn test_register_success_issues_session() {
    let (service, store) = test_service();

    let outcome = service
        .register(Credentials::new("alice", "longpassword"))
        .await;

    let user = outcome.result.user.as_ref().expect("expected a user");
    assert_eq!(user.username, "alice");
    assert_eq!(store.count(), 1);

    let cookie = outcome.cookie.expect("expected a session cookie");
    assert_eq!(cookie.name, "qid");
    assert!(cookie.http_only);

    let me = service.me(&cookie.value).await.unwrap().expect("logged in");
    assert_eq!(me.username, "alice");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (service, store) = test_service();

    service
        .register(Credentials::new("alice", "longpassword"))
        .await;
    let outcome = service
        .register(Credentials::new("alice", "otherpassword"))
        .await;

    assert_eq!(
        first_error(&outcome),
        ("username", "username is already taken")
    );
    assert!(outcome.cookie.is_none());
    assert_eq!(store.count(), 1);
}

#[tokio::test]
async fn test_register_storage_failure_is_generic() {
    let service = service_with_store(Arc::new(BrokenUserStore));

    let outcome = service
        .register(Credentials::new("alice", "longpassword"))
        .await;

    let (field, message) = first_error(&outcome);
    assert_eq!(field, "default");
    assert_eq!(message, "please contact support");
    assert!(outcome.cookie.is_none());
}

#[tokio::test]
async fn test_login_unknown_username() {
    let (service, _store) = test_service();

    let outcome = service
        .login(Credentials::new("nobody", "longpassword"))
        .await;

    assert_eq!(first_error(&outcome), ("username", "username does not exist"));
    assert!(outcome.cookie.is_none());
}

#[tokio::test]
async fn test_login_empty_password() {
    let (service, _store) = test_service();
    service
        .register(Credentials::new("alice", "longpassword"))
        .await;

    let outcome = service.login(Credentials::new("alice", "")).await;

    assert_eq!(
        first_error(&outcome),
        ("password", "password can not be empty")
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, _store) = test_service();
    service
        .register(Credentials::new("alice", "longpassword"))
        .await;

    let outcome = service.login(Credentials::new("alice", "wrongpass")).await;

    assert_eq!(first_error(&outcome), ("password", "password do not match"));
    assert!(outcome.cookie.is_none());
}

#[tokio::test]
async fn test_login_success_roundtrip() {
    let (service, _store) = test_service();
    service
        .register(Credentials::new("alice", "longpassword"))
        .await;

    let outcome = service.login(Credentials::new("alice", "longpassword")).await;

    let user = outcome.result.user.as_ref().expect("expected a user");
    assert_eq!(user.username, "alice");

    let cookie = outcome.cookie.expect("expected a session cookie");
    let me = service.me(&cookie.value).await.unwrap().expect("logged in");
    assert_eq!(me.username, "alice");
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_me_with_unknown_token() {
    let (service, _store) = test_service();
    assert!(service.me("no-such-token").await.unwrap().is_none());
    assert!(service.me("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_me_after_user_deleted() {
    let (service, store) = test_service();
    let outcome = service
        .register(Credentials::new("alice", "longpassword"))
        .await;
    let cookie = outcome.cookie.expect("expected a session cookie");

    store.delete_by_username("alice");

    assert!(service.me(&cookie.value).await.unwrap().is_none());
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let (service, _store) = test_service();
    let outcome = service
        .register(Credentials::new("alice", "longpassword"))
        .await;
    let cookie = outcome.cookie.expect("expected a session cookie");

    let cleared = service.logout(&cookie.value).await.unwrap();
    assert!(cleared.is_removal());
    assert_eq!(cleared.name, "qid");

    assert!(service.me(&cookie.value).await.unwrap().is_none());
}

#[tokio::test]
async fn test_result_never_carries_both_sides() {
    let (service, _store) = test_service();

    let success = service
        .register(Credentials::new("alice", "longpassword"))
        .await;
    assert!(success.result.user.is_some());
    assert!(success.result.errors.is_none());

    let failure = service.login(Credentials::new("bob", "longpassword")).await;
    assert!(failure.result.user.is_none());
    assert!(failure.result.errors.is_some());
}
