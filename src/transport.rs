use crate::config::{TransportConfig, TransportKind};
use crate::error::TransportError;
use crate::submission::SubmissionRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Receives finished submission records.
///
/// The engine does not retry; a returned error is reported to the user and
/// the form stays intact for another attempt.
pub trait Transport {
    fn send(&mut self, record: &SubmissionRecord) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, record: &SubmissionRecord) -> Result<(), TransportError> {
        (**self).send(record)
    }
}

/// Builds the configured transport. `output` replaces the configured
/// JSON-lines path.
pub fn from_config(
    config: &TransportConfig,
    output: Option<&Path>,
) -> io::Result<Box<dyn Transport>> {
    match (config.kind, output) {
        (TransportKind::Log, None) => Ok(Box::new(LogTransport)),
        (_, output) => {
            let path = output.unwrap_or(config.path.as_path());
            Ok(Box::new(JsonLinesTransport::append_to(path)?))
        }
    }
}

/// Appends one JSON document per line.
pub struct JsonLinesTransport<W: Write> {
    writer: W,
}

impl JsonLinesTransport<BufWriter<File>> {
    pub fn append_to(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for JsonLinesTransport<W> {
    fn send(&mut self, record: &SubmissionRecord) -> Result<(), TransportError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Emits the record as a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

impl Transport for LogTransport {
    fn send(&mut self, record: &SubmissionRecord) -> Result<(), TransportError> {
        let json = serde_json::to_string(record)?;
        info!(submission = %json, "form submitted");
        Ok(())
    }
}

/// Keeps sent records in memory; can be told to refuse sends.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Vec<SubmissionRecord>,
    failures_left: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses every send.
    pub fn failing() -> Self {
        Self::failing_times(usize::MAX)
    }

    /// Refuses the next `times` sends, then accepts.
    pub fn failing_times(times: usize) -> Self {
        Self {
            sent: Vec::new(),
            failures_left: times,
        }
    }

    pub fn sent(&self) -> &[SubmissionRecord] {
        self.sent.as_slice()
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, record: &SubmissionRecord) -> Result<(), TransportError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport unavailable").into());
        }
        self.sent.push(record.clone());
        Ok(())
    }
}
