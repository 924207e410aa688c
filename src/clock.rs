//! Time-of-day state and the carry/borrow arithmetic behind the tick and
//! adjustment buttons.
//!
//! All operations are total: out-of-range results are resolved by wrapping
//! (the cascading second/minute paths) or clamping (the manual hour
//! adjustments), never by an error return.

/// Normalized seconds/minutes/hours triple.
///
/// Every public operation leaves the value normalized: seconds and minutes
/// stay below 60, hours below 24.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeValue {
    seconds: u8,
    minutes: u8,
    hours: u8,
}

impl TimeValue {
    pub const ZERO: TimeValue = TimeValue::new(0, 0, 0);

    /// Build a time value. Callers are expected to pass normalized fields.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        debug_assert!(hours < 24 && minutes < 60 && seconds < 60);
        Self {
            seconds,
            minutes,
            hours,
        }
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.minutes == 0 && self.hours == 0
    }

    /// Advance by one second, carrying into minutes (and from there into
    /// hours, wrapping the whole value to 00:00:00 past 23:59:59).
    pub fn increment_seconds(&mut self) {
        if self.seconds < 59 {
            self.seconds += 1;
            return;
        }
        self.increment_minutes();
        self.seconds = 0;
    }

    /// Step back by one second, borrowing from minutes. 00:00:00 is the
    /// floor: decrementing it is a no-op.
    pub fn decrement_seconds(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
            return;
        }
        if self.minutes == 0 && self.hours == 0 {
            return;
        }
        self.decrement_minutes();
        self.seconds = 59;
    }

    /// Advance by one minute, carrying into hours. Past 23:59 the whole
    /// value wraps to 00:00:00, seconds included.
    pub fn increment_minutes(&mut self) {
        if self.minutes < 59 {
            self.minutes += 1;
            return;
        }
        if self.hours < 23 {
            self.hours += 1;
            self.minutes = 0;
        } else {
            self.hours = 0;
            self.minutes = 0;
            self.seconds = 0;
        }
    }

    /// Step back by one minute, borrowing from hours. At 00:xx the minutes
    /// stay put; the seconds floor in [`decrement_seconds`] keeps the value
    /// from ever going below zero.
    ///
    /// [`decrement_seconds`]: TimeValue::decrement_seconds
    pub fn decrement_minutes(&mut self) {
        if self.minutes > 0 {
            self.minutes -= 1;
            return;
        }
        if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
        }
    }

    /// Manual hour adjustment: clamps at 23 instead of wrapping.
    ///
    /// Deliberately asymmetric with [`increment_minutes`]: the hour buttons
    /// never trigger the 24-hour rollover.
    ///
    /// [`increment_minutes`]: TimeValue::increment_minutes
    pub fn increment_hours(&mut self) {
        if self.hours < 23 {
            self.hours += 1;
        }
    }

    /// Manual hour adjustment: clamps at 0 instead of borrowing.
    pub fn decrement_hours(&mut self) {
        if self.hours > 0 {
            self.hours -= 1;
        }
    }
}

impl ufmt::uDisplay for TimeValue {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        two_digits(f, self.hours)?;
        f.write_str(":")?;
        two_digits(f, self.minutes)?;
        f.write_str(":")?;
        two_digits(f, self.seconds)
    }
}

fn two_digits<W>(f: &mut ufmt::Formatter<'_, W>, value: u8) -> Result<(), W::Error>
where
    W: ufmt::uWrite + ?Sized,
{
    if value < 10 {
        f.write_str("0")?;
    }
    ufmt::uwrite!(f, "{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_then_decrement_restores_value() {
        // Holds everywhere except across the 24-hour rollover.
        let samples = [
            TimeValue::ZERO,
            TimeValue::new(0, 0, 59),
            TimeValue::new(0, 59, 59),
            TimeValue::new(12, 34, 56),
            TimeValue::new(22, 59, 59),
            TimeValue::new(23, 59, 58),
        ];
        for start in samples {
            let mut t = start;
            t.increment_seconds();
            t.decrement_seconds();
            assert_eq!(t, start);
        }
    }

    #[test]
    fn rollover_is_not_invertible() {
        let mut t = TimeValue::new(23, 59, 59);
        t.increment_seconds();
        assert_eq!(t, TimeValue::ZERO);
        // The inverse does not hold across the rollover: stepping back from
        // 00:00:00 is a floor no-op, not 23:59:59.
        t.decrement_seconds();
        assert_eq!(t, TimeValue::ZERO);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut t = TimeValue::ZERO;
        t.decrement_seconds();
        assert_eq!(t, TimeValue::ZERO);
        t.decrement_minutes();
        assert_eq!(t, TimeValue::ZERO);
    }

    #[test]
    fn decrement_borrows_through_minutes_and_hours() {
        let mut t = TimeValue::new(1, 0, 0);
        t.decrement_seconds();
        assert_eq!(t, TimeValue::new(0, 59, 59));
    }

    #[test]
    fn increment_minutes_carries_into_hours() {
        let mut t = TimeValue::new(3, 59, 17);
        t.increment_minutes();
        assert_eq!(t, TimeValue::new(4, 0, 17));
    }

    #[test]
    fn increment_minutes_at_end_of_day_wraps_everything() {
        let mut t = TimeValue::new(23, 59, 42);
        t.increment_minutes();
        assert_eq!(t, TimeValue::ZERO);
    }

    #[test]
    fn manual_hours_clamp_instead_of_wrapping() {
        let mut t = TimeValue::new(23, 10, 10);
        t.increment_hours();
        assert_eq!(t, TimeValue::new(23, 10, 10));

        let mut t = TimeValue::new(0, 10, 10);
        t.decrement_hours();
        assert_eq!(t, TimeValue::new(0, 10, 10));

        let mut t = TimeValue::new(7, 0, 0);
        t.increment_hours();
        assert_eq!(t.hours(), 8);
        t.decrement_hours();
        assert_eq!(t.hours(), 7);
    }

    #[test]
    fn formats_zero_padded() {
        struct Sink(String);
        impl ufmt::uWrite for Sink {
            type Error = core::convert::Infallible;
            fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
                self.0.push_str(s);
                Ok(())
            }
        }

        let mut out = Sink(String::new());
        ufmt::uwrite!(&mut out, "{}", TimeValue::new(9, 5, 0)).unwrap();
        assert_eq!(out.0, "09:05:00");
    }
}
