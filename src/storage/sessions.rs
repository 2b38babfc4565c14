use crate::participants::models::{Participant, Winner};
use crate::sessions::errors::{DrawError, StateError};
use crate::sessions::models::{Page, Session};
use crate::storage::consts::{SESSION_ID_LENGTH, SESSION_SWEEP_INTERVAL_SECS};
use crate::storage::interface::{ISessionStorage, SessionFlowHandler, SessionRepo};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, Session>>>,
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn create(&self) -> String {
        let mut storage_guard = self.storage.write().await;
        let mut session_id = generate_session_id();
        while storage_guard.contains_key(&session_id) {
            session_id = generate_session_id();
        }
        storage_guard.insert(session_id.clone(), Session::default());
        session_id
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn snapshot(&self, session_id: &str) -> Option<Session> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                session.clone()
            })
    }

    async fn remove_idle(&self, max_idle: Duration) -> usize {
        let mut storage_guard = self.storage.write().await;
        let sessions_before = storage_guard.len();
        storage_guard.retain(|_, session| session.last_active.elapsed() <= max_idle);
        sessions_before - storage_guard.len()
    }
}

impl SessionFlowHandler for HashMapSessionsStorage {
    async fn load_participants(
        &self,
        session_id: &str,
        participants: Vec<Participant>,
    ) -> Option<()> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                session.load_participants(participants)
            })
    }

    async fn draw_winner(&self, session_id: &str) -> Option<Result<Winner, DrawError>> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                session.draw_winner()
            })
    }

    async fn navigate(&self, session_id: &str, page: Page) -> Option<Result<Page, StateError>> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                session.navigate(page)
            })
    }

    async fn require(&self, session_id: &str, page: Page) -> Option<Result<Session, StateError>> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .map(|session| {
                session.touch();
                if session.can_show(page) {
                    Ok(session.clone())
                } else {
                    Err(session.redirect(page))
                }
            })
    }
}

/// Periodically evicts sessions nobody has touched for `max_idle`.
pub fn spawn_idle_sweep<SS: ISessionStorage>(sessions: SS, max_idle: Duration) {
    tokio::spawn(async move {
        let mut sweep_interval =
            tokio::time::interval(Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));
        loop {
            sweep_interval.tick().await;
            let removed = sessions.remove_idle(max_idle).await;
            if removed > 0 {
                let sessions_count = sessions.count().await;
                tracing::info!(
                    task = "sessions_count",
                    sessions_count,
                    removed,
                    "Evicted idle sessions."
                );
            }
        }
    });
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str, distance_km: f64) -> Participant {
        Participant {
            name: name.to_string(),
            raw_coordinates: String::from("0,0"),
            latitude: 0.0,
            longitude: 0.0,
            distance_km,
        }
    }

    #[tokio::test]
    async fn created_sessions_are_distinct() {
        let storage = HashMapSessionsStorage::default();

        let first = storage.create().await;
        let second = storage.create().await;

        assert_ne!(first, second);
        assert_eq!(first.len(), SESSION_ID_LENGTH);
        assert!(storage.exists(&first).await);
        assert_eq!(storage.count().await, 2);
    }

    #[tokio::test]
    async fn unknown_session_yields_none() {
        let storage = HashMapSessionsStorage::default();

        assert!(!storage.exists("nope").await);
        assert!(storage.snapshot("nope").await.is_none());
        assert!(storage.load_participants("nope", Vec::new()).await.is_none());
        assert!(storage.draw_winner("nope").await.is_none());
        assert!(storage.navigate("nope", Page::Map).await.is_none());
        assert!(storage.require("nope", Page::Map).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let storage = HashMapSessionsStorage::default();
        let loaded = storage.create().await;
        let untouched = storage.create().await;

        storage
            .load_participants(&loaded, vec![participant("A", 1.0)])
            .await;

        let untouched = storage.snapshot(&untouched).await.expect("session exists");
        assert!(untouched.participants.is_none());
        assert_eq!(untouched.page, Page::Upload);
    }

    #[tokio::test]
    async fn require_redirects_when_data_is_missing() {
        let storage = HashMapSessionsStorage::default();
        let session_id = storage.create().await;
        storage
            .load_participants(&session_id, vec![participant("A", 1.0)])
            .await;

        let result = storage.require(&session_id, Page::Winner).await;

        assert_eq!(
            result.map(|result| result.map(|session| session.page)),
            Some(Err(StateError {
                requested: Page::Winner,
                redirected_to: Page::Upload,
            }))
        );
        let session = storage.snapshot(&session_id).await.expect("session exists");
        assert_eq!(session.page, Page::Upload);
        assert!(session.participants.is_some());
    }

    async fn backdate(storage: &HashMapSessionsStorage, session_id: &str, idle: Duration) {
        let mut storage_guard = storage.storage.write().await;
        let session = storage_guard.get_mut(session_id).expect("session exists");
        session.last_active = session
            .last_active
            .checked_sub(idle)
            .expect("clock is past the backdated instant");
    }

    #[tokio::test]
    async fn idle_sessions_are_removed() {
        let storage = HashMapSessionsStorage::default();
        let idle = storage.create().await;
        let active = storage.create().await;
        backdate(&storage, &idle, Duration::from_secs(120)).await;

        let removed = storage.remove_idle(Duration::from_secs(60)).await;

        assert_eq!(removed, 1);
        assert!(!storage.exists(&idle).await);
        assert!(storage.exists(&active).await);
        assert_eq!(storage.count().await, 1);
    }

    #[tokio::test]
    async fn access_keeps_session_alive() {
        let storage = HashMapSessionsStorage::default();
        let session_id = storage.create().await;
        backdate(&storage, &session_id, Duration::from_secs(120)).await;

        storage.navigate(&session_id, Page::Upload).await;

        assert_eq!(storage.remove_idle(Duration::from_secs(60)).await, 0);
        assert!(storage.exists(&session_id).await);
    }
}
