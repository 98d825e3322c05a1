//! Work-session state machine and its live elapsed ticker.

mod ticker;

pub use ticker::ElapsedTicker;

use strum::Display;
use time::{Duration, OffsetDateTime};
use tokio::sync::watch;

use crate::domain::{Department, StoredTimerState, TimeEntry};
use crate::error::Error;
use crate::store::{Slot, StateStore};
use crate::timesheet::TimesheetLedger;

/// Lifecycle phase of the time clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Armed,
    Working,
}

/// The time clock.
///
/// Drives the Idle -> Armed -> Working -> Idle session lifecycle. A
/// projection of the running session is persisted on start and erased
/// on stop, so a session survives a restart with its original start
/// instant. Rejected transitions leave both state and storage
/// untouched.
pub struct TimeClock<S> {
    store: S,
    phase: Phase,
    department: Option<Department>,
    started_at: Option<OffsetDateTime>,
    ticker: Option<ElapsedTicker>,
}

impl<S: StateStore> TimeClock<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            phase: Phase::Idle,
            department: None,
            started_at: None,
            ticker: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn department(&self) -> Option<Department> {
        self.department
    }

    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    /// Elapsed time of the running session.
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at
            .map(|started_at| OffsetDateTime::now_utc() - started_at)
    }

    /// Pick the department the next session is for. Valid while Idle
    /// or Armed.
    pub fn select_department(&mut self, department: Department) -> Result<(), Error> {
        if self.phase == Phase::Working {
            return Err(Error::invalid_transition("select a department", self.phase));
        }
        self.department = Some(department);
        Ok(())
    }

    /// Confirm readiness to start. Requires a selected department and
    /// is idempotent while already Armed.
    pub fn arm(&mut self) -> Result<(), Error> {
        if self.phase == Phase::Working {
            return Err(Error::invalid_transition("arm", self.phase));
        }
        if self.department.is_none() {
            return Err(Error::invalid_transition("arm without a department", self.phase));
        }
        self.phase = Phase::Armed;
        Ok(())
    }

    /// Start the session clock. Valid only while Armed; the projection
    /// is persisted before the phase changes.
    pub fn start(&mut self) -> Result<(), Error> {
        self.start_at(OffsetDateTime::now_utc())
    }

    /// `start` with an explicit clock reading.
    pub fn start_at(&mut self, now: OffsetDateTime) -> Result<(), Error> {
        if self.phase != Phase::Armed {
            return Err(Error::invalid_transition("start", self.phase));
        }
        let Some(department) = self.department else {
            return Err(Error::invalid_transition("start without a department", self.phase));
        };

        self.store
            .write(Slot::TimerState, &StoredTimerState::running(department, now))?;
        self.phase = Phase::Working;
        self.started_at = Some(now);

        tracing::debug!("Work session started for {}", department);
        Ok(())
    }

    /// Close the running session: append its entry to the ledger,
    /// erase the projection and return to Idle.
    pub fn stop(&mut self, ledger: &mut TimesheetLedger<S>) -> Result<TimeEntry, Error> {
        self.stop_at(OffsetDateTime::now_utc(), ledger)
    }

    /// `stop` with an explicit clock reading.
    pub fn stop_at(
        &mut self,
        now: OffsetDateTime,
        ledger: &mut TimesheetLedger<S>,
    ) -> Result<TimeEntry, Error> {
        let (Phase::Working, Some(department), Some(started_at)) =
            (self.phase, self.department, self.started_at)
        else {
            return Err(Error::invalid_transition("stop", self.phase));
        };

        let entry = TimeEntry::from_session(department, started_at, now);
        ledger.append(entry.clone())?;
        self.store.erase_slot(Slot::TimerState)?;

        self.cancel_ticker();
        self.phase = Phase::Idle;
        self.department = None;
        self.started_at = None;

        tracing::debug!("Work session closed, total {}", entry.total);
        Ok(entry)
    }

    /// Rebuild a running session from the persisted projection.
    /// Returns the projection when one marked a session as working;
    /// the original start instant is kept so elapsed time spans the
    /// restart.
    pub fn restore(&mut self) -> Result<Option<StoredTimerState>, Error> {
        let Some(saved) = self.store.read::<StoredTimerState>(Slot::TimerState)? else {
            return Ok(None);
        };
        if !saved.is_working {
            return Ok(None);
        }
        let Some(started_at) = saved.started_at() else {
            tracing::warn!("Ignoring saved work session with an unusable start time");
            return Ok(None);
        };

        self.phase = Phase::Working;
        self.department = Some(saved.selected_department);
        self.started_at = Some(started_at);

        tracing::debug!("Restored work session running since {}", started_at);
        Ok(Some(saved))
    }

    /// Abandon the current state without recording an entry: cancels
    /// the ticker, erases any saved projection and returns to Idle.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.store.erase_slot(Slot::TimerState)?;
        self.cancel_ticker();
        self.phase = Phase::Idle;
        self.department = None;
        self.started_at = None;
        Ok(())
    }

    /// Spawn the once-a-second elapsed publisher for the running
    /// session, replacing any previous one. Must be called within a
    /// tokio runtime.
    pub fn resume_ticker(&mut self) -> Result<watch::Receiver<String>, Error> {
        let Some(started_at) = self.started_at else {
            return Err(Error::invalid_transition("watch elapsed time", self.phase));
        };

        self.cancel_ticker();
        let ticker = ElapsedTicker::spawn(started_at);
        let receiver = ticker.subscribe();
        self.ticker = Some(ticker);
        Ok(receiver)
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
