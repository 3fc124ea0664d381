/*!
Instruction trace collaborator.

Overview
========
After each successfully executed instruction the machine builds a
`TraceEntry` and hands it to the installed `TraceSink`, if any. Sinks only
observe: they cannot change CPU state or timing, and a failing sink is
logged and skipped rather than aborting the run.

Line Format
===========
```text
    $8000 LDA #$05 X:00 Y:00 A:05 SP:FD P:00110100
```

Registers are the values after the instruction executed; `P` is the packed
status byte (bits 4 and 5 always set) in binary.

Provided Sinks
==============
```text
    TraceLog        shared in-memory list (clone the handle to read it back)
    WriterTracer    one line per instruction to any `io::Write`
    LogTracer       forwards each line to `log::trace!`
```
*/

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use log::trace;
use thiserror::Error;

use crate::cpu::{CpuState, Executed, Mnemonic};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace output failed: {0}")]
    Io(#[from] io::Error),
}

/// One executed instruction as seen by a trace sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    /// Rendered operand (`#$05`, `$10`, `$0200`, `A`, or empty).
    pub operand: String,
    pub x: u8,
    pub y: u8,
    pub a: u8,
    pub sp: u8,
    /// Packed status byte.
    pub status: u8,
}

impl TraceEntry {
    pub fn new(executed: &Executed, cpu: &CpuState) -> Self {
        Self {
            pc: executed.pc,
            opcode: executed.opcode,
            mnemonic: executed.info.mnemonic,
            operand: executed.operand_text(),
            x: cpu.x,
            y: cpu.y,
            a: cpu.a,
            sp: cpu.sp,
            status: cpu.status_byte(),
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:04X} {}", self.pc, self.mnemonic)?;
        if !self.operand.is_empty() {
            write!(f, " {}", self.operand)?;
        }
        write!(
            f,
            " X:{:02X} Y:{:02X} A:{:02X} SP:{:02X} P:{:08b}",
            self.x, self.y, self.a, self.sp, self.status
        )
    }
}

pub trait TraceSink {
    fn record(&mut self, entry: &TraceEntry) -> Result<(), TraceError>;
}

/// In-memory trace. Clones share the same entry list, so a caller can keep
/// one handle and give another to the machine.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    entries: Arc<Mutex<Vec<TraceEntry>>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, entry: &TraceEntry) -> Result<(), TraceError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}

/// Writes one formatted line per instruction.
#[derive(Debug)]
pub struct WriterTracer<W: Write> {
    writer: W,
}

impl<W: Write> WriterTracer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for WriterTracer<W> {
    fn record(&mut self, entry: &TraceEntry) -> Result<(), TraceError> {
        writeln!(self.writer, "{entry}")?;
        Ok(())
    }
}

/// Forwards trace lines to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl TraceSink for LogTracer {
    fn record(&mut self, entry: &TraceEntry) -> Result<(), TraceError> {
        trace!(target: "picones::trace", "{entry}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(operand: &str, mnemonic: Mnemonic) -> TraceEntry {
        TraceEntry {
            pc: 0x8000,
            opcode: 0xA9,
            mnemonic,
            operand: operand.to_string(),
            x: 0x01,
            y: 0x02,
            a: 0x05,
            sp: 0xFD,
            status: 0b0011_0100,
        }
    }

    #[test]
    fn display_line_format() {
        let e = sample("#$05", Mnemonic::Lda);
        assert_eq!(
            e.to_string(),
            "$8000 LDA #$05 X:01 Y:02 A:05 SP:FD P:00110100"
        );
    }

    #[test]
    fn implied_operand_has_no_extra_space() {
        let e = sample("", Mnemonic::Nop);
        assert_eq!(
            e.to_string(),
            "$8000 NOP X:01 Y:02 A:05 SP:FD P:00110100"
        );
    }

    #[test]
    fn trace_log_clones_share_entries() {
        let log = TraceLog::new();
        let mut sink = log.clone();
        sink.record(&sample("#$05", Mnemonic::Lda)).expect("record");
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].a, 0x05);
        log.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn writer_tracer_writes_lines() {
        let mut sink = WriterTracer::new(Vec::new());
        sink.record(&sample("#$05", Mnemonic::Lda)).expect("record");
        sink.record(&sample("", Mnemonic::Nop)).expect("record");
        let text = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("$8000 NOP X:"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_errors_surface_as_trace_error() {
        let mut sink = WriterTracer::new(FailingWriter);
        let err = sink.record(&sample("", Mnemonic::Nop)).unwrap_err();
        assert!(matches!(err, TraceError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("trace output failed"));
    }

    #[test]
    fn log_tracer_never_fails() {
        let mut sink = LogTracer;
        assert!(sink.record(&sample("A", Mnemonic::Asl)).is_ok());
    }
}
