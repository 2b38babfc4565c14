use crate::participants::models::{Participant, Winner};
use crate::sessions::errors::{DrawError, StateError};
use crate::sessions::models::{Page, Session};
use std::future::Future;
use std::time::Duration;

/// Every method taking a `session_id` returns `None` when no such session exists.
pub trait ISessionStorage:
    SessionRepo + SessionFlowHandler + Clone + Send + Sync + 'static
{
}

pub trait SessionRepo {
    fn exists(&self, session_id: &str) -> impl Future<Output = bool> + Send;

    fn create(&self) -> impl Future<Output = String> + Send;

    fn count(&self) -> impl Future<Output = usize> + Send;

    fn snapshot(&self, session_id: &str) -> impl Future<Output = Option<Session>> + Send;

    /// Drops sessions untouched for longer than `max_idle`, returning how many were dropped.
    fn remove_idle(&self, max_idle: Duration) -> impl Future<Output = usize> + Send;
}

pub trait SessionFlowHandler {
    fn load_participants(
        &self,
        session_id: &str,
        participants: Vec<Participant>,
    ) -> impl Future<Output = Option<()>> + Send;

    fn draw_winner(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Option<Result<Winner, DrawError>>> + Send;

    fn navigate(
        &self,
        session_id: &str,
        page: Page,
    ) -> impl Future<Output = Option<Result<Page, StateError>>> + Send;

    /// Snapshot of a session that is able to show `page`, or a redirect to the page it can show.
    fn require(
        &self,
        session_id: &str,
        page: Page,
    ) -> impl Future<Output = Option<Result<Session, StateError>>> + Send;
}
