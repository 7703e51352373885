use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Tags log lines of one solve and reports its duration when dropped.
pub struct CallContext {
    label: String,
    start_time: Instant,
}

impl Default for CallContext {
    fn default() -> CallContext {
        CallContext {
            label: String::new(),
            start_time: Instant::now(),
        }
    }
}

impl CallContext {
    pub fn new(label: &str) -> Self {
        let context = CallContext {
            label: label.to_string(),
            start_time: Instant::now(),
        };
        log::debug!("-> {context}");
        context
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn log_message(&self, message: &str) {
        if self.label.is_empty() {
            log::info!("{message}");
        } else {
            log::info!("{self} {message}");
        }
    }
}

impl Drop for CallContext {
    fn drop(&mut self) {
        if self.label.is_empty() {
            return;
        }
        let call_duration = self.start_time.elapsed().as_millis();
        log::debug!("<- {self} (took {call_duration} ms)");
    }
}

impl Display for CallContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label)
    }
}
