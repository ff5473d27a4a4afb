//! Meter reading conversion.
//!
//! Each sampled-value attribute has its own default policy: the wire elides
//! an attribute equal to its default and the default is restored on parse.
//! These are independent per-attribute policies, not one shared default.

use crate::domain;
use crate::error::CodecResult;
use crate::v16::enums;
use crate::v16::message as wire;

use super::{elide, or_default};

pub(super) fn to_wire(meter: &domain::Meter) -> wire::Meter {
    wire::Meter {
        timestamp: meter.timestamp,
        sampled_value: meter.values.iter().map(value_to_wire).collect(),
    }
}

pub(super) fn from_wire(meter: &wire::Meter) -> CodecResult<domain::Meter> {
    Ok(domain::Meter {
        timestamp: meter.timestamp,
        values: meter
            .sampled_value
            .iter()
            .map(value_from_wire)
            .collect::<CodecResult<Vec<_>>>()?,
    })
}

fn value_to_wire(value: &domain::MeterValue) -> wire::MeterValue {
    wire::MeterValue {
        value: value.value.clone(),
        context: elide(&enums::READING_CONTEXT, value.context),
        format: elide(&enums::VALUE_FORMAT, value.format),
        measurand: elide(&enums::MEASURAND, value.measurand),
        phase: value.phase.map(|p| enums::PHASE.to_wire(p).to_string()),
        location: elide(&enums::LOCATION, value.location),
        unit: elide(&enums::UNIT_OF_MEASURE, value.unit),
    }
}

fn value_from_wire(value: &wire::MeterValue) -> CodecResult<domain::MeterValue> {
    Ok(domain::MeterValue {
        value: value.value.clone(),
        context: or_default(&enums::READING_CONTEXT, value.context.as_deref())?,
        format: or_default(&enums::VALUE_FORMAT, value.format.as_deref())?,
        measurand: or_default(&enums::MEASURAND, value.measurand.as_deref())?,
        phase: value
            .phase
            .as_deref()
            .map(|p| enums::PHASE.from_wire(p))
            .transpose()?,
        location: or_default(&enums::LOCATION, value.location.as_deref())?,
        unit: or_default(&enums::UNIT_OF_MEASURE, value.unit.as_deref())?,
    })
}
