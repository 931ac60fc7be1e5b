//! Reveal State Machine
//!
//! Drives the envelope through idle → searching → opening → reading and back.
//! Pure state machine: events go in, actions come out, the caller performs
//! the directory fetch and renders. Timed sub-steps sit on a [`Timeline`] and
//! are applied when the caller sends [`RevealEvent::Tick`].

use std::time::Duration;

use crate::domain::entities::ResolvedGuest;
use crate::domain::errors::DomainError;
use crate::domain::services::Timeline;
use crate::domain::value_objects::{LookupFailure, RevealState};
use crate::ports::Clock;

/// Delays of the envelope animation, measured from the triggering event
#[derive(Debug, Clone)]
pub struct RevealTimings {
    /// Flap opens this long after the reveal starts
    pub envelope_open: Duration,
    /// Letter shows this long after the reveal starts
    pub reading: Duration,
    /// Flap closes this long after the letter is closed
    pub envelope_close: Duration,
    /// Back to idle this long after the letter is closed
    pub idle: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            envelope_open: Duration::from_millis(300),
            reading: Duration::from_millis(1000),
            envelope_close: Duration::from_millis(300),
            idle: Duration::from_millis(900),
        }
    }
}

/// Inputs to the machine
#[derive(Debug)]
pub enum RevealEvent {
    /// Visitor typed into the name field
    EditName(String),
    /// Visitor pressed the submit button
    Submit,
    /// Directory lookup requested by [`RevealAction::FetchDirectory`] finished
    LookupFinished(Result<ResolvedGuest, DomainError>),
    /// Visitor closed the letter
    Close,
    /// Visitor dismissed the error toast
    DismissError,
    /// Apply every scheduled step that is due
    Tick,
}

/// Outputs for the caller to perform or render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    EnterState(RevealState),
    EnvelopeOpened,
    EnvelopeClosed,
    /// Look the name up in the guest directory and report back
    FetchDirectory { name: String },
    /// Persist the guest in the session cache
    SaveGuest(ResolvedGuest),
    ShowLetter(ResolvedGuest),
    ClearLetter,
    ShowError(LookupFailure),
    ClearError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    OpenEnvelope,
    BeginReading,
    CloseEnvelope,
    ReturnToIdle,
}

/// Envelope reveal state machine
pub struct RevealMachine<C: Clock> {
    clock: C,
    timings: RevealTimings,
    state: RevealState,
    name: String,
    envelope_open: bool,
    error: Option<LookupFailure>,
    cached: Option<ResolvedGuest>,
    letter: Option<ResolvedGuest>,
    timeline: Timeline<Step>,
}

impl<C: Clock> RevealMachine<C> {
    /// Create an idle machine; a cached guest pre-fills the name field
    pub fn new(clock: C, cached: Option<ResolvedGuest>, timings: RevealTimings) -> Self {
        let name = cached.as_ref().map(|g| g.name.clone()).unwrap_or_default();
        Self {
            clock,
            timings,
            state: RevealState::Idle,
            name,
            envelope_open: false,
            error: None,
            cached,
            letter: None,
            timeline: Timeline::new(),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn envelope_open(&self) -> bool {
        self.envelope_open
    }

    pub fn error(&self) -> Option<LookupFailure> {
        self.error
    }

    pub fn cached_guest(&self) -> Option<&ResolvedGuest> {
        self.cached.as_ref()
    }

    /// Guest whose letter is in the envelope right now
    pub fn letter(&self) -> Option<&ResolvedGuest> {
        self.letter.as_ref()
    }

    /// Name field is locked outside idle, and whenever a guest is cached
    pub fn input_disabled(&self) -> bool {
        !self.state.is_idle() || self.cached.is_some()
    }

    pub fn submit_disabled(&self) -> bool {
        !self.state.is_idle() || self.name.trim().is_empty()
    }

    /// When the next scheduled step falls due
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.timeline.next_deadline()
    }

    pub fn has_pending_steps(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Process an event and return resulting actions.
    ///
    /// Events the current state does not accept are rejected and leave the
    /// machine untouched.
    pub fn handle(&mut self, event: RevealEvent) -> Result<Vec<RevealAction>, DomainError> {
        match event {
            RevealEvent::EditName(text) => self.handle_edit_name(text),
            RevealEvent::Submit => self.handle_submit(),
            RevealEvent::LookupFinished(result) => self.handle_lookup_finished(result),
            RevealEvent::Close => self.handle_close(),
            RevealEvent::DismissError => Ok(self.take_error().into_iter().collect()),
            RevealEvent::Tick => Ok(self.handle_tick()),
        }
    }

    fn handle_edit_name(&mut self, text: String) -> Result<Vec<RevealAction>, DomainError> {
        if self.input_disabled() {
            return Err(DomainError::InputDisabled(self.state));
        }

        self.name = text;
        Ok(self.take_error().into_iter().collect())
    }

    fn handle_submit(&mut self) -> Result<Vec<RevealAction>, DomainError> {
        if !self.state.is_idle() {
            return Err(DomainError::invalid_transition(self.state, "submit"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let mut actions: Vec<RevealAction> = self.take_error().into_iter().collect();

        // Cached guest always wins over a fresh lookup
        if let Some(guest) = self.cached.clone() {
            tracing::debug!(guest = %guest.name, "Reopening cached letter");
            self.letter = Some(guest);
            actions.extend(self.begin_opening());
            return Ok(actions);
        }

        self.state = RevealState::Searching;
        actions.push(RevealAction::EnterState(RevealState::Searching));
        actions.push(RevealAction::FetchDirectory {
            name: self.name.trim().to_string(),
        });
        Ok(actions)
    }

    fn handle_lookup_finished(
        &mut self,
        result: Result<ResolvedGuest, DomainError>,
    ) -> Result<Vec<RevealAction>, DomainError> {
        if self.state != RevealState::Searching {
            return Err(DomainError::invalid_transition(self.state, "finish lookup"));
        }

        match result {
            Ok(guest) => {
                tracing::debug!(guest = %guest.name, "Guest resolved");
                self.cached = Some(guest.clone());
                self.letter = Some(guest.clone());

                let mut actions = vec![RevealAction::SaveGuest(guest)];
                actions.extend(self.begin_opening());
                Ok(actions)
            }
            Err(e) => {
                let failure = e
                    .lookup_failure()
                    .unwrap_or(LookupFailure::DirectoryUnavailable);
                tracing::debug!(error = %e, "Lookup failed");

                self.state = RevealState::Idle;
                self.error = Some(failure);
                Ok(vec![
                    RevealAction::EnterState(RevealState::Idle),
                    RevealAction::ShowError(failure),
                ])
            }
        }
    }

    fn handle_close(&mut self) -> Result<Vec<RevealAction>, DomainError> {
        if self.state != RevealState::Reading {
            return Err(DomainError::invalid_transition(self.state, "close"));
        }

        let now = self.clock.now();
        self.state = RevealState::Opening;
        self.timeline
            .schedule(now + self.timings.envelope_close, Step::CloseEnvelope);
        self.timeline.schedule(now + self.timings.idle, Step::ReturnToIdle);

        Ok(vec![RevealAction::EnterState(RevealState::Opening)])
    }

    fn handle_tick(&mut self) -> Vec<RevealAction> {
        let now = self.clock.now();
        self.timeline
            .drain_due(now)
            .into_iter()
            .flat_map(|step| self.apply(step))
            .collect()
    }

    fn begin_opening(&mut self) -> Vec<RevealAction> {
        let now = self.clock.now();
        self.state = RevealState::Opening;
        self.timeline
            .schedule(now + self.timings.envelope_open, Step::OpenEnvelope);
        self.timeline
            .schedule(now + self.timings.reading, Step::BeginReading);

        vec![RevealAction::EnterState(RevealState::Opening)]
    }

    fn apply(&mut self, step: Step) -> Vec<RevealAction> {
        match step {
            Step::OpenEnvelope => {
                self.envelope_open = true;
                vec![RevealAction::EnvelopeOpened]
            }
            Step::BeginReading => {
                self.state = RevealState::Reading;
                let mut actions = vec![RevealAction::EnterState(RevealState::Reading)];
                if let Some(letter) = &self.letter {
                    actions.push(RevealAction::ShowLetter(letter.clone()));
                }
                actions
            }
            Step::CloseEnvelope => {
                self.envelope_open = false;
                vec![RevealAction::EnvelopeClosed]
            }
            Step::ReturnToIdle => {
                self.state = RevealState::Idle;
                self.letter = None;
                // Name field falls back to the cached guest so it can be reopened
                self.name = self
                    .cached
                    .as_ref()
                    .map(|g| g.name.clone())
                    .unwrap_or_default();
                vec![
                    RevealAction::ClearLetter,
                    RevealAction::EnterState(RevealState::Idle),
                ]
            }
        }
    }

    fn take_error(&mut self) -> Option<RevealAction> {
        self.error.take().map(|_| RevealAction::ClearError)
    }
}
