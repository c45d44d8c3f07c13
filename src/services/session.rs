use moka::sync::Cache;
use std::time::Duration;
use uuid::Uuid;

const MAX_SESSIONS: u64 = 10_000;

/// Issued login tokens. Entries expire on their own after the configured TTL.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, ()>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(MAX_SESSIONS)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), ());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.sessions.get(token).is_some()
    }

    pub fn revoke(&self, token: &str) {
        self.sessions.invalidate(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_tokens_are_valid_until_revoked() {
        let store = SessionStore::new(Duration::from_secs(60));
        let token = store.create();

        assert!(store.is_valid(&token));
        assert!(!store.is_valid("forged"));

        store.revoke(&token);
        assert!(!store.is_valid(&token));
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert_ne!(store.create(), store.create());
    }

    #[test]
    fn tokens_expire() {
        let store = SessionStore::new(Duration::from_millis(20));
        let token = store.create();
        std::thread::sleep(Duration::from_millis(60));

        assert!(!store.is_valid(&token));
    }
}
