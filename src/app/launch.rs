use tracing::info;

use crate::rail::LaunchSignal;

/// Consumer of launch signals; starting the app is its business
pub trait LaunchSink {
    fn launch(&mut self, signal: &LaunchSignal);
}

/// Records launches in the log and nothing else
#[derive(Debug, Default)]
pub struct LogSink;

impl LaunchSink for LogSink {
    fn launch(&mut self, signal: &LaunchSignal) {
        info!(app = %signal.item_id, "launch requested");
    }
}

/// Keeps every signal, for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub launched: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl LaunchSink for RecordingSink {
    fn launch(&mut self, signal: &LaunchSignal) {
        self.launched.borrow_mut().push(signal.item_id.clone());
    }
}
