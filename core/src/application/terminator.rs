//! Layered app termination.
//!
//! Per app, in order: exact-match SIGTERM, broad name-based kill (including
//! a capitalized retry) when nothing matched exactly, a fixed grace period,
//! a liveness check, and SIGKILL for survivors. Every attempt is isolated:
//! one failing call never aborts the remaining attempts for that app or any
//! other app.
//!
//! The liveness check and the force kill race against the process exiting
//! or restarting on its own; that gap is accepted, not retried.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::capitalize;
use crate::ports::SignalPort;

/// Grace period between the termination request and the liveness check.
const GRACE_PERIOD: Duration = Duration::from_millis(500);

/// Best-effort outcome of one app's termination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminationOutcome {
    /// Gone after the graceful signal.
    Exited,
    /// Still alive after the grace period; a kill signal was dispatched.
    ForceKilled,
    /// Every dispatch attempt failed; the app may still be running.
    Survived,
    /// No process matched the identifier under any matching form.
    NotFound,
}

impl std::fmt::Display for TerminationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TerminationOutcome::Exited => "exited",
            TerminationOutcome::ForceKilled => "force-killed",
            TerminationOutcome::Survived => "survived",
            TerminationOutcome::NotFound => "not found",
        };
        write!(f, "{}", s)
    }
}

/// Terminates apps by identifier through an escalating attempt sequence.
pub struct Terminator<S> {
    signals: S,
    grace: Duration,
}

impl<S: SignalPort> Terminator<S> {
    /// Create a terminator with the default grace period.
    pub fn new(signals: S) -> Self {
        Self::with_grace(signals, GRACE_PERIOD)
    }

    /// Create a terminator with a custom grace period (tests use zero).
    pub fn with_grace(signals: S, grace: Duration) -> Self {
        Self { signals, grace }
    }

    /// Terminate every app in the list, independently.
    ///
    /// The outcome map is informational; the host UI dismisses without
    /// consulting it.
    pub async fn terminate_all(&self, apps: &[String]) -> BTreeMap<String, TerminationOutcome> {
        let mut outcomes = BTreeMap::new();
        for app in apps {
            let outcome = self.terminate_one(app).await;
            debug!(app = %app, outcome = %outcome, "termination attempt finished");
            outcomes.insert(app.clone(), outcome);
        }
        outcomes
    }

    /// Run the full attempt sequence for one app.
    async fn terminate_one(&self, app: &str) -> TerminationOutcome {
        let mut signaled = match self.signals.term_exact(app).await {
            Ok(signaled) => signaled,
            Err(e) => {
                warn!(app, error = %e, "graceful signal failed");
                false
            }
        };

        if !signaled {
            signaled = self.kill_by_name_variants(app).await;
        }
        if !signaled {
            return TerminationOutcome::NotFound;
        }

        sleep(self.grace).await;

        if !self.signals.is_alive(app).await {
            return TerminationOutcome::Exited;
        }

        match self.signals.kill_exact(app).await {
            Ok(_) => TerminationOutcome::ForceKilled,
            Err(e) => {
                warn!(app, error = %e, "force kill failed");
                TerminationOutcome::Survived
            }
        }
    }

    /// Broad name-based kill, retrying with the capitalized form.
    async fn kill_by_name_variants(&self, app: &str) -> bool {
        let capitalized = capitalize(app);
        let mut names = vec![app.to_string()];
        if capitalized != app {
            names.push(capitalized);
        }

        for name in names {
            match self.signals.kill_by_name(&name).await {
                Ok(true) => return true,
                Ok(false) => {}
                Err(e) => warn!(app, name = %name, error = %e, "name-based kill failed"),
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use parking_lot::Mutex;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MockSignals {
        /// Command names with an exactly-matching live process.
        exact: HashSet<String>,
        /// Names the broad kill can reach.
        broad: HashSet<String>,
        /// Apps still alive after the grace period.
        alive: HashSet<String>,
        /// Apps whose graceful signal errors out.
        fail_term: HashSet<String>,
        /// Apps whose force kill errors out.
        fail_kill: HashSet<String>,
        term_calls: Mutex<Vec<String>>,
        kill_calls: Mutex<Vec<String>>,
        name_calls: Mutex<Vec<String>>,
        alive_calls: Mutex<Vec<String>>,
    }

    impl MockSignals {
        fn set(names: &[&str]) -> HashSet<String> {
            names.iter().map(|n| n.to_string()).collect()
        }
    }

    impl SignalPort for MockSignals {
        async fn term_exact(&self, app: &str) -> Result<bool> {
            self.term_calls.lock().push(app.to_string());
            if self.fail_term.contains(app) {
                return Err(Error::CommandFailed("term failed".to_string()));
            }
            Ok(self.exact.contains(app))
        }

        async fn kill_exact(&self, app: &str) -> Result<bool> {
            self.kill_calls.lock().push(app.to_string());
            if self.fail_kill.contains(app) {
                return Err(Error::CommandFailed("kill failed".to_string()));
            }
            Ok(true)
        }

        async fn kill_by_name(&self, name: &str) -> Result<bool> {
            self.name_calls.lock().push(name.to_string());
            Ok(self.broad.contains(name))
        }

        async fn is_alive(&self, app: &str) -> bool {
            self.alive_calls.lock().push(app.to_string());
            self.alive.contains(app)
        }
    }

    fn terminator(signals: MockSignals) -> Terminator<MockSignals> {
        Terminator::with_grace(signals, Duration::ZERO)
    }

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_graceful_exit_skips_force_kill() {
        let t = terminator(MockSignals {
            exact: MockSignals::set(&["slack"]),
            ..Default::default()
        });

        let outcomes = t.terminate_all(&targets(&["slack"])).await;
        assert_eq!(outcomes["slack"], TerminationOutcome::Exited);
        assert!(t.signals.kill_calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_survivor_is_force_killed() {
        let t = terminator(MockSignals {
            exact: MockSignals::set(&["firefox"]),
            alive: MockSignals::set(&["firefox"]),
            ..Default::default()
        });

        let outcomes = t.terminate_all(&targets(&["firefox"])).await;
        assert_eq!(outcomes["firefox"], TerminationOutcome::ForceKilled);
        assert_eq!(*t.signals.kill_calls.lock(), vec!["firefox"]);
    }

    #[tokio::test]
    async fn test_capitalized_retry_reaches_renamed_process() {
        // No exact match; the broad kill only knows the marketing name
        let t = terminator(MockSignals {
            broad: MockSignals::set(&["Slack"]),
            ..Default::default()
        });

        let outcomes = t.terminate_all(&targets(&["slack"])).await;
        assert_eq!(outcomes["slack"], TerminationOutcome::Exited);
        assert_eq!(*t.signals.name_calls.lock(), vec!["slack", "Slack"]);
    }

    #[tokio::test]
    async fn test_nothing_matches_anywhere() {
        let t = terminator(MockSignals::default());

        let outcomes = t.terminate_all(&targets(&["ghost"])).await;
        assert_eq!(outcomes["ghost"], TerminationOutcome::NotFound);
        // No liveness check without a delivered signal
        assert!(t.signals.alive_calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failed_force_kill_reports_survivor() {
        let t = terminator(MockSignals {
            exact: MockSignals::set(&["stubborn"]),
            alive: MockSignals::set(&["stubborn"]),
            fail_kill: MockSignals::set(&["stubborn"]),
            ..Default::default()
        });

        let outcomes = t.terminate_all(&targets(&["stubborn"])).await;
        assert_eq!(outcomes["stubborn"], TerminationOutcome::Survived);
    }

    #[tokio::test]
    async fn test_one_failing_app_does_not_affect_others() {
        // slack's graceful signal errors out but the broad kill reaches
        // its capitalized form; firefox proceeds normally through escalation
        let t = terminator(MockSignals {
            exact: MockSignals::set(&["firefox"]),
            broad: MockSignals::set(&["Slack"]),
            alive: MockSignals::set(&["firefox"]),
            fail_term: MockSignals::set(&["slack"]),
            ..Default::default()
        });

        let outcomes = t.terminate_all(&targets(&["slack", "firefox"])).await;
        assert_eq!(outcomes["slack"], TerminationOutcome::Exited);
        assert_eq!(outcomes["firefox"], TerminationOutcome::ForceKilled);

        // Both apps got a graceful attempt despite slack's failure
        let term_calls = t.signals.term_calls.lock();
        assert!(term_calls.contains(&"slack".to_string()));
        assert!(term_calls.contains(&"firefox".to_string()));
    }

    #[tokio::test]
    async fn test_capitalized_form_not_retried_when_identical() {
        let t = terminator(MockSignals::default());

        t.terminate_all(&targets(&["7zip"])).await;
        assert_eq!(*t.signals.name_calls.lock(), vec!["7zip"]);
    }
}
