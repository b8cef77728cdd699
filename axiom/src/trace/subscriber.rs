use serde_derive::{Deserialize, Serialize};
use std::{fmt, fs::File, io::Write, sync::Mutex};
use tracing::*;

/// Thread safe json logger that writes one record per `PROBLEM` or `VALIDATE` event into a
/// given log file.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }

    fn write<T: serde::Serialize>(&self, record: &T) {
        if let (Ok(mut file), Ok(json)) = (self.log_file.lock(), serde_json::to_string(record)) {
            let _ = writeln!(file, "{}", json);
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        match recorder.event.as_deref() {
            Some(super::PROBLEM) => {
                if let Some(record) = ProblemRecord::try_from(recorder) {
                    self.write(&record);
                }
            }
            Some(super::VALIDATE) => {
                if let Some(record) = ValidateRecord::try_from(recorder) {
                    self.write(&record);
                }
            }
            _ => (),
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing information about an assembled problem.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub(crate) struct ProblemRecord {
    event: String,
    problem: String,
    formulae: u64,
    query: Option<String>,
}

impl ProblemRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(Self {
            event: value.event?,
            problem: value.problem?,
            formulae: value.formulae?,
            query: value.query,
        })
    }
}

/// A record, containing the outcome of validating the theory of a problem.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub(crate) struct ValidateRecord {
    event: String,
    problem: String,
    valid: bool,
    error: Option<String>,
}

impl ValidateRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(Self {
            event: value.event?,
            problem: value.problem?,
            valid: value.valid?,
            error: value.error,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be converted to its corresponding log record.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    problem: Option<String>,
    formulae: Option<u64>,
    query: Option<String>,
    valid: Option<bool>,
    error: Option<String>,
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        if field.name() == super::FORMULAE_FIELD {
            self.formulae = Some(value);
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::VALID_FIELD {
            self.valid = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name() {
            super::EVENT_FIELD => self.event = Some(value.to_owned()),
            super::PROBLEM_FIELD => self.problem = Some(value.to_owned()),
            super::QUERY_FIELD => self.query = Some(value.to_owned()),
            super::ERROR_FIELD => self.error = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::QUERY_FIELD => self.query = Some(format!("{:?}", value)),
            super::ERROR_FIELD => self.error = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
