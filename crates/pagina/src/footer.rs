//! Footer copyright year

use chrono::{Datelike, Local, NaiveDate};

use crate::dom::Element;

/// Source of the current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Write the current year into the footer, if there is one.
/// Returns the year written.
pub fn update_footer_year(target: Option<&dyn Element>, clock: &dyn Clock) -> Option<i32> {
    let target = target?;
    let year = clock.today().year();
    target.set_text(&format!("{:04}", year));
    Some(year)
}
