//! Charging profiles, schedules and schedule periods.

use chrono::{DateTime, Duration, Utc};

/// A time-varying charging power/current limit installed on a charge point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingProfile {
    pub id: i32,
    /// Transaction this profile applies to, for transaction-scoped profiles.
    pub transaction_id: Option<i32>,
    /// Priority among installed profiles; higher levels win.
    pub stack_level: u32,
    pub purpose: ChargingProfilePurpose,
    pub kind: ChargingProfileKind,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub schedule: ChargingSchedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingProfilePurpose {
    ChargePointMaxProfile,
    TxDefaultProfile,
    TxProfile,
}

/// How schedule start points are anchored in time.
///
/// Recurring schedules carry their recurrency; on the 1.6 wire the two
/// recurring forms are separate kind literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingProfileKind {
    Absolute,
    Relative,
    Recurring(RecurrencyKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrencyKind {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingRateUnit {
    Watts,
    Amperes,
}

/// A list of limit periods, each starting at an offset from the schedule
/// start.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingSchedule {
    pub duration: Option<Duration>,
    pub start_schedule: Option<DateTime<Utc>>,
    pub charging_rate_unit: ChargingRateUnit,
    pub periods: Vec<ChargingSchedulePeriod>,
    pub min_charging_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargingSchedulePeriod {
    /// Offset from the start of the schedule at which this period begins.
    pub start_offset: Duration,
    /// Limit in the schedule's charging rate unit.
    pub limit: f64,
    pub number_phases: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingProfileStatus {
    Accepted,
    Rejected,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearChargingProfileStatus {
    Accepted,
    Unknown,
}

/// Outcome of a GetCompositeSchedule request.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositeScheduleStatus {
    Accepted {
        connector_scope: Option<super::Scope>,
        schedule_start: Option<DateTime<Utc>>,
        charging_schedule: Option<ChargingSchedule>,
    },
    Rejected,
}
