use std::cell::RefCell;

use log::{error, info};

/// Outcome of a reported test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Success,
    Failure { message: String },
}

impl TestResult {
    pub fn failure<S: Into<String>>(message: S) -> Self {
        TestResult::Failure {
            message: message.into(),
        }
    }
}

/// Sink for human-readable test steps.
///
/// Reporting is fire-and-forget: nothing a reporter does can fail a test.
pub trait Reporter {
    fn test_start(&self, _name: &str) {}

    fn test_step(&self, description: &str);

    fn test_stop(&self, _result: &TestResult) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn test_start(&self, name: &str) {
        (**self).test_start(name)
    }

    fn test_step(&self, description: &str) {
        (**self).test_step(description)
    }

    fn test_stop(&self, result: &TestResult) {
        (**self).test_stop(result)
    }
}

/// Writes the report through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn test_start(&self, name: &str) {
        info!("test started: {}", name);
    }

    fn test_step(&self, description: &str) {
        info!("step: {}", description);
    }

    fn test_stop(&self, result: &TestResult) {
        match result {
            TestResult::Success => info!("test passed"),
            TestResult::Failure {
                message,
            } => error!("test failed: {}", message),
        }
    }
}

/// An event seen by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Start(String),
    Step(String),
    Stop(TestResult),
}

/// Keeps every event in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.borrow().clone()
    }

    /// Just the step descriptions.
    pub fn steps(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Step(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn test_start(&self, name: &str) {
        self.events.borrow_mut().push(ReportEvent::Start(name.to_string()));
    }

    fn test_step(&self, description: &str) {
        self.events.borrow_mut().push(ReportEvent::Step(description.to_string()));
    }

    fn test_stop(&self, result: &TestResult) {
        self.events.borrow_mut().push(ReportEvent::Stop(result.clone()));
    }
}
