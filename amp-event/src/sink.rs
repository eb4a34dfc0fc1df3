//! Event sinks

use crate::error::EventResult;
use amp_core::momentum::Momentum;
use amp_core::safeio::safe_write;
use amp_core::RValue;
use std::io::Write;

/// Destination for event records.
///
/// Registration and filling are separate phases: `branch_*` declares a
/// named column while the sink is open, `fill_*` sets the column's value
/// for the current record, and [`EventSink::write_event`] commits the
/// record. Every method reports success as a `bool`; a sink that is not
/// open refuses all operations.
pub trait EventSink {
    /// Opens the sink for branching and filling.
    fn open(&mut self) -> bool;

    /// Closes the sink; no further records are accepted.
    fn close(&mut self) -> bool;

    /// Declares a momentum-valued column.
    fn branch_momentum(&mut self, name: &str) -> bool;

    /// Declares a real-valued column.
    fn branch_value(&mut self, name: &str) -> bool;

    /// Declares an integer-valued column.
    fn branch_int(&mut self, name: &str) -> bool;

    /// Declares a boolean-valued column.
    fn branch_bool(&mut self, name: &str) -> bool;

    /// Sets a momentum column of the current record.
    fn fill_momentum(&mut self, name: &str, value: &Momentum) -> bool;

    /// Sets a real column of the current record.
    fn fill_value(&mut self, name: &str, value: RValue) -> bool;

    /// Sets an integer column of the current record.
    fn fill_int(&mut self, name: &str, value: i32) -> bool;

    /// Sets a boolean column of the current record.
    fn fill_bool(&mut self, name: &str, value: bool) -> bool;

    /// Commits the current record.
    fn write_event(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Momentum,
    Value,
    Int,
    Bool,
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    kind: ColumnKind,
    current: String,
}

/// In-memory sink rendering whitespace-separated table rows.
#[derive(Debug, Clone, Default)]
pub struct AsciiSink {
    open: bool,
    columns: Vec<Column>,
    rows: Vec<String>,
}

impl AsciiSink {
    /// Creates a closed sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed records.
    pub fn events(&self) -> usize {
        self.rows.len()
    }

    /// Writes the header line and all committed rows.
    pub fn dump<W: Write>(&self, w: &mut W) -> EventResult<()> {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        writeln!(w, "# {}", names.join(" "))?;
        for row in &self.rows {
            writeln!(w, "{row}")?;
        }
        Ok(())
    }

    fn branch(&mut self, name: &str, kind: ColumnKind) -> bool {
        if !self.open || self.columns.iter().any(|c| c.name == name) {
            return false;
        }
        self.columns.push(Column {
            name: name.to_string(),
            kind,
            current: String::new(),
        });
        true
    }

    fn fill(&mut self, name: &str, kind: ColumnKind, rendered: String) -> bool {
        if !self.open {
            return false;
        }
        match self
            .columns
            .iter_mut()
            .find(|c| c.name == name && c.kind == kind)
        {
            Some(c) => {
                c.current = rendered;
                true
            }
            None => false,
        }
    }
}

fn render_value(x: RValue) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec is infallible.
    let _ = safe_write(&mut buf, x);
    String::from_utf8_lossy(&buf).into_owned()
}

fn render_momentum(p: &Momentum) -> String {
    p.as_slice()
        .iter()
        .map(|&x| render_value(x))
        .collect::<Vec<_>>()
        .join(" ")
}

impl EventSink for AsciiSink {
    fn open(&mut self) -> bool {
        self.open = true;
        true
    }

    fn close(&mut self) -> bool {
        self.open = false;
        true
    }

    fn branch_momentum(&mut self, name: &str) -> bool {
        self.branch(name, ColumnKind::Momentum)
    }

    fn branch_value(&mut self, name: &str) -> bool {
        self.branch(name, ColumnKind::Value)
    }

    fn branch_int(&mut self, name: &str) -> bool {
        self.branch(name, ColumnKind::Int)
    }

    fn branch_bool(&mut self, name: &str) -> bool {
        self.branch(name, ColumnKind::Bool)
    }

    fn fill_momentum(&mut self, name: &str, value: &Momentum) -> bool {
        self.fill(name, ColumnKind::Momentum, render_momentum(value))
    }

    fn fill_value(&mut self, name: &str, value: RValue) -> bool {
        self.fill(name, ColumnKind::Value, render_value(value))
    }

    fn fill_int(&mut self, name: &str, value: i32) -> bool {
        self.fill(name, ColumnKind::Int, value.to_string())
    }

    fn fill_bool(&mut self, name: &str, value: bool) -> bool {
        self.fill(name, ColumnKind::Bool, if value { "1" } else { "0" }.to_string())
    }

    fn write_event(&mut self) -> bool {
        if !self.open {
            return false;
        }
        let row = self
            .columns
            .iter()
            .map(|c| c.current.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.rows.push(row);
        true
    }
}
