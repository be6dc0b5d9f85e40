//! Poll window cursor

/// Lower bound of the next homework status query
///
/// The window sent to the API is `[from_timestamp, now]`. The cursor only
/// ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollWindow {
    from_timestamp: i64,
}

impl PollWindow {
    /// Creates a window starting at the given epoch second
    pub fn starting_at(from_timestamp: i64) -> Self {
        Self { from_timestamp }
    }

    /// Creates a window starting at the current wall-clock time
    pub fn starting_now() -> Self {
        Self::starting_at(chrono::Utc::now().timestamp())
    }

    /// Current cursor value (epoch seconds)
    pub fn from_timestamp(&self) -> i64 {
        self.from_timestamp
    }

    /// Moves the cursor to the server-reported date
    ///
    /// Returns `true` if the cursor moved. Values behind the current cursor
    /// are ignored.
    pub fn advance(&mut self, current_date: i64) -> bool {
        if current_date > self.from_timestamp {
            self.from_timestamp = current_date;
            true
        } else {
            false
        }
    }
}
