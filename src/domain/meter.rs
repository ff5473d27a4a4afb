//! Meter readings.
//!
//! A meter reading is a timestamp plus a list of sampled values. Five of the
//! sampled-value attributes carry a default; the wire representation elides
//! an attribute whose value equals its own default, and the codec restores
//! the default when the attribute is absent. The phase attribute has no
//! default and stays optional on both sides.

use chrono::{DateTime, Utc};

/// One meter reading: a timestamp and the values sampled at that instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meter {
    pub timestamp: DateTime<Utc>,
    pub values: Vec<MeterValue>,
}

/// A single sampled value within a meter reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterValue {
    /// The measured value, as reported by the charge point.
    pub value: String,
    pub context: ReadingContext,
    pub format: ValueFormat,
    pub measurand: Measurand,
    pub phase: Option<Phase>,
    pub location: Location,
    pub unit: UnitOfMeasure,
}

/// In what circumstance the value was sampled. Defaults to a periodic
/// sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingContext {
    InterruptionBegin,
    InterruptionEnd,
    Other,
    SampleClock,
    SamplePeriodic,
    TransactionBegin,
    TransactionEnd,
    Trigger,
}

impl Default for ReadingContext {
    fn default() -> Self {
        Self::SamplePeriodic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Raw,
    SignedData,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Raw
    }
}

/// What was measured. Defaults to the active-energy import register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurand {
    CurrentExport,
    CurrentImport,
    CurrentOffered,
    EnergyActiveExportRegister,
    EnergyActiveImportRegister,
    EnergyReactiveExportRegister,
    EnergyReactiveImportRegister,
    EnergyActiveExportInterval,
    EnergyActiveImportInterval,
    EnergyReactiveExportInterval,
    EnergyReactiveImportInterval,
    Frequency,
    PowerActiveExport,
    PowerActiveImport,
    PowerFactor,
    PowerOffered,
    PowerReactiveExport,
    PowerReactiveImport,
    Rpm,
    StateOfCharge,
    Temperature,
    Voltage,
}

impl Default for Measurand {
    fn default() -> Self {
        Self::EnergyActiveImportRegister
    }
}

/// Electrical phase a value belongs to. No default; a reading without a
/// phase stays phase-less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    L1,
    L2,
    L3,
    N,
    L1N,
    L2N,
    L3N,
    L1L2,
    L2L3,
    L3L1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Cable,
    Ev,
    Inlet,
    Outlet,
}

impl Default for Location {
    fn default() -> Self {
        Self::Outlet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOfMeasure {
    Wh,
    Kwh,
    Varh,
    Kvarh,
    W,
    Kw,
    Va,
    Kva,
    Var,
    Kvar,
    Amp,
    Volt,
    Kelvin,
    Celsius,
    Fahrenheit,
    Percent,
}

impl Default for UnitOfMeasure {
    fn default() -> Self {
        Self::Wh
    }
}

impl MeterValue {
    /// A sampled value with every defaulted attribute at its default.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            context: ReadingContext::default(),
            format: ValueFormat::default(),
            measurand: Measurand::default(),
            phase: None,
            location: Location::default(),
            unit: UnitOfMeasure::default(),
        }
    }
}
