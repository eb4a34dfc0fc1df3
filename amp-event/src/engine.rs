//! Interface engine

use crate::sink::EventSink;
use amp_core::momentum::Momentum;
use amp_core::RValue;

/// Registers output variables with an attached sink and tracks the byte
/// size of one event record.
///
/// Every `add_*` call registers the named column on first use, fills its
/// current value and reports success; registration failures (no sink
/// attached, sink not open) simply yield `false`. The running byte-size
/// counter grows only when a column is first registered.
#[derive(Default)]
pub struct InterfaceEngine {
    sink: Option<Box<dyn EventSink>>,
    evt_size: usize,
}

impl InterfaceEngine {
    /// Engine without an attached sink; every add reports failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine writing to the given sink.
    pub fn with_sink(sink: Box<dyn EventSink>) -> Self {
        Self {
            sink: Some(sink),
            evt_size: 0,
        }
    }

    /// Attaches a sink, replacing any previous one.
    pub fn attach(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Releases the sink to the caller.
    pub fn detach(&mut self) -> Option<Box<dyn EventSink>> {
        self.sink.take()
    }

    /// Byte size of one event record.
    pub fn event_size(&self) -> usize {
        self.evt_size
    }

    /// Adds a momentum-valued output variable.
    pub fn add_momentum(&mut self, value: &Momentum, name: &str) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        if sink.branch_momentum(name) {
            self.evt_size += std::mem::size_of::<Momentum>();
        }
        sink.fill_momentum(name, value)
    }

    /// Adds a real-valued output variable.
    pub fn add_value(&mut self, value: RValue, name: &str) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        if sink.branch_value(name) {
            self.evt_size += std::mem::size_of::<RValue>();
        }
        sink.fill_value(name, value)
    }

    /// Adds an integer-valued output variable.
    pub fn add_int(&mut self, value: i32, name: &str) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        if sink.branch_int(name) {
            self.evt_size += std::mem::size_of::<i32>();
        }
        sink.fill_int(name, value)
    }

    /// Adds a boolean-valued output variable.
    pub fn add_bool(&mut self, value: bool, name: &str) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        if sink.branch_bool(name) {
            self.evt_size += std::mem::size_of::<bool>();
        }
        sink.fill_bool(name, value)
    }

    /// Commits the current record to the sink.
    pub fn write_event(&mut self) -> bool {
        match self.sink.as_mut() {
            Some(sink) => sink.write_event(),
            None => false,
        }
    }
}
