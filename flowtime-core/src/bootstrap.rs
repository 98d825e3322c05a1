//! Startup restoration: decide what state the dashboard opens in.

use crate::domain::Page;
use crate::error::Error;
use crate::session::SessionStore;
use crate::store::StateStore;
use crate::timeclock::TimeClock;

/// State the dashboard presents after a restart.
pub struct Startup<S> {
    pub authenticated: bool,
    pub page: Page,
    pub time_clock: TimeClock<S>,
}

/// Rebuild presentation state in a fixed order: the signed-in flag
/// first, then the last active page, then any running work session.
///
/// An unauthenticated start lands on the employees page and skips
/// session restoration entirely; a stale projection is left in place
/// for the next signed-in start.
pub fn restore<S: StateStore + Clone>(store: &S) -> Result<Startup<S>, Error> {
    let session = SessionStore::new(store.clone());
    let mut time_clock = TimeClock::new(store.clone());

    if !session.is_authenticated()? {
        tracing::debug!("No signed-in session, presenting the sign-in gate");
        return Ok(Startup {
            authenticated: false,
            page: Page::default(),
            time_clock,
        });
    }

    let page = session.current_page_or_init()?;
    if time_clock.restore()?.is_some() {
        tracing::info!("Resumed a running work session");
    }

    Ok(Startup {
        authenticated: true,
        page,
        time_clock,
    })
}
