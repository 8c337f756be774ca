use chrono::{DateTime, Local, TimeZone};

/// Status line: a message on the left and a wall clock on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    clock: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        let mut status = Self {
            message: "Ready".to_string(),
            clock: String::new(),
        };
        status.update_time(Local::now());
        status
    }
}

impl StatusBar {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    /// Clock text, e.g. `[14:03:59]`.
    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn update_time<Tz: TimeZone>(&mut self, now: DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.clock = format!("[{}]", now.format("%H:%M:%S"));
    }
}
