//! Charging profile, schedule and period conversion.
//!
//! Durations travel as integer seconds. The profile kind collapses onto a
//! single wire literal: recurring profiles encode their recurrency as
//! "Daily"/"Weekly" while the anchored forms stay "Absolute"/"Relative".

use chrono::Duration;

use crate::domain::{
    ChargingProfile, ChargingProfileKind, ChargingSchedule, ChargingSchedulePeriod, RecurrencyKind,
};
use crate::error::{CodecError, CodecResult};
use crate::v16::enums;
use crate::v16::message as wire;

use super::seconds_to_wire;

pub(super) fn profile_to_wire(profile: &ChargingProfile) -> wire::ChargingProfile {
    wire::ChargingProfile {
        charging_profile_id: profile.id,
        transaction_id: profile.transaction_id,
        stack_level: profile.stack_level,
        charging_profile_purpose: enums::CHARGING_PROFILE_PURPOSE
            .to_wire(profile.purpose)
            .to_string(),
        charging_profile_kind: kind_to_wire(profile.kind).to_string(),
        valid_from: profile.valid_from,
        valid_to: profile.valid_to,
        charging_schedule: schedule_to_wire(&profile.schedule),
    }
}

pub(super) fn profile_from_wire(profile: &wire::ChargingProfile) -> CodecResult<ChargingProfile> {
    Ok(ChargingProfile {
        id: profile.charging_profile_id,
        transaction_id: profile.transaction_id,
        stack_level: profile.stack_level,
        purpose: enums::CHARGING_PROFILE_PURPOSE.from_wire(&profile.charging_profile_purpose)?,
        kind: kind_from_wire(&profile.charging_profile_kind)?,
        valid_from: profile.valid_from,
        valid_to: profile.valid_to,
        schedule: schedule_from_wire(&profile.charging_schedule)?,
    })
}

pub(super) fn schedule_to_wire(schedule: &ChargingSchedule) -> wire::ChargingSchedule {
    wire::ChargingSchedule {
        duration: schedule.duration.map(seconds_to_wire),
        start_schedule: schedule.start_schedule,
        charging_rate_unit: enums::CHARGING_RATE_UNIT
            .to_wire(schedule.charging_rate_unit)
            .to_string(),
        charging_schedule_period: schedule.periods.iter().map(period_to_wire).collect(),
        min_charging_rate: schedule.min_charging_rate,
    }
}

pub(super) fn schedule_from_wire(schedule: &wire::ChargingSchedule) -> CodecResult<ChargingSchedule> {
    Ok(ChargingSchedule {
        duration: schedule.duration.map(|s| Duration::seconds(s as i64)),
        start_schedule: schedule.start_schedule,
        charging_rate_unit: enums::CHARGING_RATE_UNIT.from_wire(&schedule.charging_rate_unit)?,
        periods: schedule
            .charging_schedule_period
            .iter()
            .map(period_from_wire)
            .collect(),
        min_charging_rate: schedule.min_charging_rate,
    })
}

fn period_to_wire(period: &ChargingSchedulePeriod) -> wire::ChargingSchedulePeriod {
    wire::ChargingSchedulePeriod {
        start_period: seconds_to_wire(period.start_offset),
        limit: period.limit,
        number_phases: period.number_phases,
    }
}

fn period_from_wire(period: &wire::ChargingSchedulePeriod) -> ChargingSchedulePeriod {
    ChargingSchedulePeriod {
        start_offset: Duration::seconds(period.start_period as i64),
        limit: period.limit,
        number_phases: period.number_phases,
    }
}

fn kind_to_wire(kind: ChargingProfileKind) -> &'static str {
    match kind {
        ChargingProfileKind::Absolute => "Absolute",
        ChargingProfileKind::Relative => "Relative",
        ChargingProfileKind::Recurring(RecurrencyKind::Daily) => "Daily",
        ChargingProfileKind::Recurring(RecurrencyKind::Weekly) => "Weekly",
    }
}

fn kind_from_wire(kind: &str) -> CodecResult<ChargingProfileKind> {
    match kind {
        "Absolute" => Ok(ChargingProfileKind::Absolute),
        "Relative" => Ok(ChargingProfileKind::Relative),
        "Daily" => Ok(ChargingProfileKind::Recurring(RecurrencyKind::Daily)),
        "Weekly" => Ok(ChargingProfileKind::Recurring(RecurrencyKind::Weekly)),
        other => Err(CodecError::UnrecognizedProfileKind(other.to_string())),
    }
}
