//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date daycal treats as
//! "today" when it needs to know the current year.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.  When no evaluation date is
//! set, callers fall back to the system clock.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Prefer [`ScopedEvaluationDate`] in tests so
//! the previous value is restored on drop.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by daycal.
pub struct Settings {
    /// The current evaluation date as a day serial number (1 = 1900-01-01).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation date serial number, or `None` if the system
    /// clock should be used.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// Pins the evaluation date for the lifetime of the guard and restores the
/// previous value when dropped.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_restores_previous() {
        let settings = Settings::instance();
        let before = settings.evaluation_date_serial();
        {
            let _guard = ScopedEvaluationDate::new(43_831);
            assert_eq!(settings.evaluation_date_serial(), Some(43_831));
        }
        assert_eq!(settings.evaluation_date_serial(), before);
    }
}
