//! Greeting Session (Use Case)
//!
//! One visitor's flow: feeds events to the reveal state machine, performs
//! the directory lookups and cache writes it asks for, and owns the hidden
//! reset affordance.

use std::sync::Arc;

use crate::application::SessionCache;
use crate::domain::{
    resolve, DomainError, ResetTapCounter, ResolvedGuest, RevealAction, RevealEvent,
    RevealMachine, RevealTimings, TapOutcome,
};
use crate::ports::{Clock, GuestDirectory, KeyValueStore};

/// Application service for the lookup-and-reveal flow
pub struct GreetingSession<D: GuestDirectory, S: KeyValueStore, C: Clock + Clone> {
    directory: Arc<D>,
    cache: SessionCache<S>,
    clock: C,
    timings: RevealTimings,
    machine: RevealMachine<C>,
    taps: ResetTapCounter,
}

impl<D: GuestDirectory, S: KeyValueStore, C: Clock + Clone> GreetingSession<D, S, C> {
    /// Start a session, picking up any cached guest
    pub fn start(directory: Arc<D>, store: Arc<S>, clock: C, timings: RevealTimings) -> Self {
        let cache = SessionCache::new(store);
        let cached = cache.load();

        if let Some(guest) = &cached {
            tracing::info!("Welcome back, {}", guest.name);
        }

        let machine = RevealMachine::new(clock.clone(), cached, timings.clone());

        Self {
            directory,
            cache,
            clock,
            timings,
            machine,
            taps: ResetTapCounter::default(),
        }
    }

    pub fn machine(&self) -> &RevealMachine<C> {
        &self.machine
    }

    /// Process an event, carrying out lookups and cache writes on the way.
    ///
    /// Returns every action produced, including the ones already performed
    /// here, so the presentation sees the whole sequence.
    pub async fn handle(&mut self, event: RevealEvent) -> Result<Vec<RevealAction>, DomainError> {
        let mut actions = self.machine.handle(event)?;

        let mut i = 0;
        while i < actions.len() {
            match actions[i].clone() {
                RevealAction::FetchDirectory { name } => {
                    let outcome = self.lookup(&name).await;
                    let follow_up = self.machine.handle(RevealEvent::LookupFinished(outcome))?;
                    actions.extend(follow_up);
                }
                RevealAction::SaveGuest(guest) => {
                    // A failed write only costs the next visit a lookup
                    if let Err(e) = self.cache.save(&guest) {
                        tracing::warn!("Failed to cache guest {}: {}", guest.name, e);
                    }
                }
                _ => {}
            }
            i += 1;
        }

        Ok(actions)
    }

    /// Register a tap on the hint text.
    ///
    /// Returns true when the tap completed the reset gesture, in which case
    /// the cache is cleared and the session starts over from a blank state.
    pub fn tap_hint(&mut self) -> Result<bool, DomainError> {
        match self.taps.tap(self.clock.now()) {
            TapOutcome::Counted(n) => {
                tracing::debug!("Hint tapped ({} in a row)", n);
                Ok(false)
            }
            TapOutcome::Reset => {
                self.cache.clear()?;
                self.machine = RevealMachine::new(self.clock.clone(), None, self.timings.clone());
                tracing::info!("Session cache cleared, starting over");
                Ok(true)
            }
        }
    }

    async fn lookup(&self, name: &str) -> Result<ResolvedGuest, DomainError> {
        let directory = self.directory.fetch_all().await.map_err(|e| {
            tracing::warn!("Guest directory unavailable: {}", e);
            match e {
                DomainError::DirectoryUnavailable(_) => e,
                other => DomainError::DirectoryUnavailable(other.to_string()),
            }
        })?;

        tracing::debug!("Resolving among {} guests", directory.len());
        resolve(name, &directory).map(ResolvedGuest::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GuestRecord, LookupFailure, RevealState};
    use crate::ports::{ManualClock, MemoryStore, StaticDirectory};
    use std::time::Duration;

    fn records() -> Vec<GuestRecord> {
        vec![
            GuestRecord::new("g-001", "鈴木太郎", "スズキタロウ", "太郎さん、ありがとう"),
            GuestRecord::new("g-002", "佐藤花子", "サトウハナコ", "花子さん、ありがとう"),
        ]
    }

    struct Fixture {
        session: GreetingSession<StaticDirectory, MemoryStore, ManualClock>,
        directory: Arc<StaticDirectory>,
        store: Arc<MemoryStore>,
        clock: ManualClock,
    }

    fn fixture(directory: StaticDirectory) -> Fixture {
        let directory = Arc::new(directory);
        let store = Arc::new(MemoryStore::new());
        let clock = ManualClock::new();
        let session = GreetingSession::start(
            directory.clone(),
            store.clone(),
            clock.clone(),
            RevealTimings::default(),
        );
        Fixture {
            session,
            directory,
            store,
            clock,
        }
    }

    async fn submit(f: &mut Fixture, name: &str) -> Vec<RevealAction> {
        f.session
            .handle(RevealEvent::EditName(name.to_string()))
            .await
            .unwrap();
        f.session.handle(RevealEvent::Submit).await.unwrap()
    }

    async fn tick(f: &mut Fixture, millis: u64) -> Vec<RevealAction> {
        f.clock.advance(Duration::from_millis(millis));
        f.session.handle(RevealEvent::Tick).await.unwrap()
    }

    #[tokio::test]
    async fn test_first_visit_resolves_and_caches() {
        let mut f = fixture(StaticDirectory::new(records()));
        let actions = submit(&mut f, " すずき たろう").await;

        let expected = ResolvedGuest {
            name: "鈴木太郎".to_string(),
            message: "太郎さん、ありがとう".to_string(),
        };
        assert!(actions.contains(&RevealAction::SaveGuest(expected.clone())));
        assert_eq!(f.session.machine().state(), RevealState::Opening);
        assert_eq!(f.directory.fetch_count(), 1);
        assert_eq!(SessionCache::new(f.store.clone()).load(), Some(expected.clone()));

        let actions = tick(&mut f, 1000).await;
        assert!(actions.contains(&RevealAction::ShowLetter(expected)));
        assert_eq!(f.session.machine().state(), RevealState::Reading);
    }

    #[tokio::test]
    async fn test_unknown_name_returns_to_idle() {
        let mut f = fixture(StaticDirectory::new(records()));
        let actions = submit(&mut f, "山田花子").await;

        assert_eq!(
            actions,
            vec![
                RevealAction::EnterState(RevealState::Searching),
                RevealAction::FetchDirectory {
                    name: "山田花子".to_string()
                },
                RevealAction::EnterState(RevealState::Idle),
                RevealAction::ShowError(LookupFailure::NotFound),
            ]
        );
        assert!(SessionCache::new(f.store.clone()).load().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_directory_returns_to_idle() {
        let mut f = fixture(StaticDirectory::unavailable("connection refused"));
        submit(&mut f, "鈴木太郎").await;

        assert_eq!(f.session.machine().state(), RevealState::Idle);
        assert_eq!(
            f.session.machine().error(),
            Some(LookupFailure::DirectoryUnavailable)
        );
    }

    #[tokio::test]
    async fn test_cached_guest_never_fetches() {
        let mut f = fixture(StaticDirectory::new(records()));
        submit(&mut f, "さとうはなこ").await;
        tick(&mut f, 1000).await;
        f.session.handle(RevealEvent::Close).await.unwrap();
        tick(&mut f, 900).await;
        assert_eq!(f.session.machine().state(), RevealState::Idle);

        for _ in 0..3 {
            let actions = f.session.handle(RevealEvent::Submit).await.unwrap();
            assert_eq!(actions, vec![RevealAction::EnterState(RevealState::Opening)]);
            tick(&mut f, 1000).await;
            f.session.handle(RevealEvent::Close).await.unwrap();
            tick(&mut f, 900).await;
        }

        assert_eq!(f.directory.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_restart_picks_up_cache() {
        let mut f = fixture(StaticDirectory::new(records()));
        submit(&mut f, "鈴木太郎").await;

        let session = GreetingSession::start(
            f.directory.clone(),
            f.store.clone(),
            f.clock.clone(),
            RevealTimings::default(),
        );
        assert_eq!(session.machine().name(), "鈴木太郎");
        assert!(session.machine().input_disabled());
    }

    #[tokio::test]
    async fn test_malformed_cache_starts_cold() {
        let directory = Arc::new(StaticDirectory::new(records()));
        let store = Arc::new(MemoryStore::new());
        store.set(crate::CACHE_KEY, r#"{"name":"鈴木太郎"}"#).unwrap();

        let session = GreetingSession::start(
            directory,
            store,
            ManualClock::new(),
            RevealTimings::default(),
        );
        assert!(session.machine().cached_guest().is_none());
        assert!(!session.machine().input_disabled());
    }

    #[tokio::test]
    async fn test_five_quick_taps_clear_cache() {
        let mut f = fixture(StaticDirectory::new(records()));
        submit(&mut f, "鈴木太郎").await;
        tick(&mut f, 1000).await;
        f.session.handle(RevealEvent::Close).await.unwrap();
        tick(&mut f, 900).await;

        for _ in 0..4 {
            f.clock.advance(Duration::from_millis(400));
            assert!(!f.session.tap_hint().unwrap());
        }
        f.clock.advance(Duration::from_millis(400));
        assert!(f.session.tap_hint().unwrap());

        assert!(SessionCache::new(f.store.clone()).load().is_none());
        assert!(f.session.machine().cached_guest().is_none());
        assert_eq!(f.session.machine().name(), "");
        assert!(!f.session.machine().input_disabled());

        // Next submit goes back to the directory
        submit(&mut f, "鈴木太郎").await;
        assert_eq!(f.directory.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_tap_after_long_gap_does_not_reset() {
        let mut f = fixture(StaticDirectory::new(records()));
        submit(&mut f, "鈴木太郎").await;

        for _ in 0..4 {
            f.clock.advance(Duration::from_millis(100));
            f.session.tap_hint().unwrap();
        }
        f.clock.advance(Duration::from_secs(4));
        assert!(!f.session.tap_hint().unwrap());
        assert!(SessionCache::new(f.store.clone()).load().is_some());
    }
}
