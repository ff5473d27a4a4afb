//! Bidirectional enumeration tables for the 1.6 wire literals.
//!
//! Each enumeration is an explicit, hand-declared list of
//! (domain value, wire string) pairs. Nothing here is derived from variant
//! names: several wire literals diverge from the domain identifiers
//! (authorization status, units of measure, charging rate units), so the
//! tables are the single source of truth for both directions.

use std::fmt;

use crate::domain::{
    AuthorizationStatus, AvailabilityStatus, AvailabilityType, ChargePointErrorCode,
    ChargingProfilePurpose, ChargingProfileStatus, ChargingRateUnit, ClearChargingProfileStatus,
    ConfigurationStatus, DataTransferStatus, DiagnosticsStatus, FirmwareStatus, Location,
    Measurand, OccupancyKind, Phase, ReadingContext, RegistrationStatus, ReservationStatus,
    ResetType, StopReason, TriggerMessageStatus, UnitOfMeasure, UnlockStatus, UpdateType,
    ValueFormat,
};
use crate::error::CodecError;

/// One enumeration's mapping between domain values and wire strings.
///
/// `to_wire` is total over the declared pairs; `from_wire` fails with
/// [`CodecError::UnrecognizedEnumValue`] carrying the enumeration name and
/// the offending string. Tables are read-only process-wide statics.
pub(crate) struct EnumTable<T: 'static> {
    name: &'static str,
    pairs: &'static [(T, &'static str)],
}

impl<T: Copy + PartialEq + fmt::Debug + 'static> EnumTable<T> {
    pub(crate) const fn new(name: &'static str, pairs: &'static [(T, &'static str)]) -> Self {
        Self { name, pairs }
    }

    /// The wire string for a domain value.
    pub(crate) fn to_wire(&self, value: T) -> &'static str {
        match self.pairs.iter().find(|(v, _)| *v == value) {
            Some((_, s)) => *s,
            None => unreachable!("{:?} missing from {} table", value, self.name),
        }
    }

    /// The domain value for a wire string.
    pub(crate) fn from_wire(&self, value: &str) -> Result<T, CodecError> {
        self.pairs
            .iter()
            .find(|(_, s)| *s == value)
            .map(|(v, _)| *v)
            .ok_or_else(|| CodecError::UnrecognizedEnumValue {
                enumeration: self.name,
                value: value.to_string(),
            })
    }
}

pub(crate) static AUTHORIZATION_STATUS: EnumTable<AuthorizationStatus> = EnumTable::new(
    "AuthorizationStatus",
    &[
        (AuthorizationStatus::Accepted, "Accepted"),
        (AuthorizationStatus::IdTagBlocked, "Blocked"),
        (AuthorizationStatus::IdTagExpired, "Expired"),
        (AuthorizationStatus::IdTagInvalid, "Invalid"),
        (AuthorizationStatus::ConcurrentTx, "ConcurrentTx"),
    ],
);

pub(crate) static REGISTRATION_STATUS: EnumTable<RegistrationStatus> = EnumTable::new(
    "RegistrationStatus",
    &[
        (RegistrationStatus::Accepted, "Accepted"),
        (RegistrationStatus::Pending, "Pending"),
        (RegistrationStatus::Rejected, "Rejected"),
    ],
);

pub(crate) static RESET_TYPE: EnumTable<ResetType> = EnumTable::new(
    "ResetType",
    &[(ResetType::Hard, "Hard"), (ResetType::Soft, "Soft")],
);

pub(crate) static AVAILABILITY_TYPE: EnumTable<AvailabilityType> = EnumTable::new(
    "AvailabilityType",
    &[
        (AvailabilityType::Operative, "Operative"),
        (AvailabilityType::Inoperative, "Inoperative"),
    ],
);

pub(crate) static AVAILABILITY_STATUS: EnumTable<AvailabilityStatus> = EnumTable::new(
    "AvailabilityStatus",
    &[
        (AvailabilityStatus::Accepted, "Accepted"),
        (AvailabilityStatus::Rejected, "Rejected"),
        (AvailabilityStatus::Scheduled, "Scheduled"),
    ],
);

pub(crate) static CHARGE_POINT_ERROR_CODE: EnumTable<ChargePointErrorCode> = EnumTable::new(
    "ChargePointErrorCode",
    &[
        (ChargePointErrorCode::ConnectorLockFailure, "ConnectorLockFailure"),
        (ChargePointErrorCode::EvCommunicationError, "EVCommunicationError"),
        (ChargePointErrorCode::GroundFailure, "GroundFailure"),
        (ChargePointErrorCode::HighTemperature, "HighTemperature"),
        (ChargePointErrorCode::InternalError, "InternalError"),
        (ChargePointErrorCode::LocalListConflict, "LocalListConflict"),
        (ChargePointErrorCode::OtherError, "OtherError"),
        (ChargePointErrorCode::OverCurrentFailure, "OverCurrentFailure"),
        (ChargePointErrorCode::OverVoltage, "OverVoltage"),
        (ChargePointErrorCode::PowerMeterFailure, "PowerMeterFailure"),
        (ChargePointErrorCode::PowerSwitchFailure, "PowerSwitchFailure"),
        (ChargePointErrorCode::ReaderFailure, "ReaderFailure"),
        (ChargePointErrorCode::ResetFailure, "ResetFailure"),
        (ChargePointErrorCode::UnderVoltage, "UnderVoltage"),
        (ChargePointErrorCode::WeakSignal, "WeakSignal"),
    ],
);

pub(crate) static OCCUPANCY_KIND: EnumTable<OccupancyKind> = EnumTable::new(
    "OccupancyKind",
    &[
        (OccupancyKind::Preparing, "Preparing"),
        (OccupancyKind::Charging, "Charging"),
        (OccupancyKind::SuspendedEvse, "SuspendedEVSE"),
        (OccupancyKind::SuspendedEv, "SuspendedEV"),
        (OccupancyKind::Finishing, "Finishing"),
    ],
);

pub(crate) static CONFIGURATION_STATUS: EnumTable<ConfigurationStatus> = EnumTable::new(
    "ConfigurationStatus",
    &[
        (ConfigurationStatus::Accepted, "Accepted"),
        (ConfigurationStatus::Rejected, "Rejected"),
        (ConfigurationStatus::RebootRequired, "RebootRequired"),
        (ConfigurationStatus::NotSupported, "NotSupported"),
    ],
);

pub(crate) static CLEAR_CHARGING_PROFILE_STATUS: EnumTable<ClearChargingProfileStatus> =
    EnumTable::new(
        "ClearChargingProfileStatus",
        &[
            (ClearChargingProfileStatus::Accepted, "Accepted"),
            (ClearChargingProfileStatus::Unknown, "Unknown"),
        ],
    );

pub(crate) static CHARGING_PROFILE_STATUS: EnumTable<ChargingProfileStatus> = EnumTable::new(
    "ChargingProfileStatus",
    &[
        (ChargingProfileStatus::Accepted, "Accepted"),
        (ChargingProfileStatus::Rejected, "Rejected"),
        (ChargingProfileStatus::NotSupported, "NotSupported"),
    ],
);

pub(crate) static CHARGING_PROFILE_PURPOSE: EnumTable<ChargingProfilePurpose> = EnumTable::new(
    "ChargingProfilePurpose",
    &[
        (ChargingProfilePurpose::ChargePointMaxProfile, "ChargePointMaxProfile"),
        (ChargingProfilePurpose::TxDefaultProfile, "TxDefaultProfile"),
        (ChargingProfilePurpose::TxProfile, "TxProfile"),
    ],
);

pub(crate) static CHARGING_RATE_UNIT: EnumTable<ChargingRateUnit> = EnumTable::new(
    "ChargingRateUnit",
    &[
        (ChargingRateUnit::Watts, "W"),
        (ChargingRateUnit::Amperes, "A"),
    ],
);

pub(crate) static DATA_TRANSFER_STATUS: EnumTable<DataTransferStatus> = EnumTable::new(
    "DataTransferStatus",
    &[
        (DataTransferStatus::Accepted, "Accepted"),
        (DataTransferStatus::Rejected, "Rejected"),
        (DataTransferStatus::UnknownMessageId, "UnknownMessageId"),
        (DataTransferStatus::UnknownVendorId, "UnknownVendorId"),
    ],
);

pub(crate) static RESERVATION_STATUS: EnumTable<ReservationStatus> = EnumTable::new(
    "ReservationStatus",
    &[
        (ReservationStatus::Accepted, "Accepted"),
        (ReservationStatus::Faulted, "Faulted"),
        (ReservationStatus::Occupied, "Occupied"),
        (ReservationStatus::Rejected, "Rejected"),
        (ReservationStatus::Unavailable, "Unavailable"),
    ],
);

pub(crate) static TRIGGER_MESSAGE_STATUS: EnumTable<TriggerMessageStatus> = EnumTable::new(
    "TriggerMessageStatus",
    &[
        (TriggerMessageStatus::Accepted, "Accepted"),
        (TriggerMessageStatus::Rejected, "Rejected"),
        (TriggerMessageStatus::NotImplemented, "NotImplemented"),
    ],
);

pub(crate) static UNLOCK_STATUS: EnumTable<UnlockStatus> = EnumTable::new(
    "UnlockStatus",
    &[
        (UnlockStatus::Unlocked, "Unlocked"),
        (UnlockStatus::UnlockFailed, "UnlockFailed"),
        (UnlockStatus::NotSupported, "NotSupported"),
    ],
);

pub(crate) static UPDATE_TYPE: EnumTable<UpdateType> = EnumTable::new(
    "UpdateType",
    &[
        (UpdateType::Full, "Full"),
        (UpdateType::Differential, "Differential"),
    ],
);

pub(crate) static FIRMWARE_STATUS: EnumTable<FirmwareStatus> = EnumTable::new(
    "FirmwareStatus",
    &[
        (FirmwareStatus::Downloaded, "Downloaded"),
        (FirmwareStatus::DownloadFailed, "DownloadFailed"),
        (FirmwareStatus::Downloading, "Downloading"),
        (FirmwareStatus::Idle, "Idle"),
        (FirmwareStatus::InstallationFailed, "InstallationFailed"),
        (FirmwareStatus::Installing, "Installing"),
        (FirmwareStatus::Installed, "Installed"),
    ],
);

pub(crate) static DIAGNOSTICS_STATUS: EnumTable<DiagnosticsStatus> = EnumTable::new(
    "DiagnosticsStatus",
    &[
        (DiagnosticsStatus::Idle, "Idle"),
        (DiagnosticsStatus::Uploaded, "Uploaded"),
        (DiagnosticsStatus::UploadFailed, "UploadFailed"),
        (DiagnosticsStatus::Uploading, "Uploading"),
    ],
);

pub(crate) static STOP_REASON: EnumTable<StopReason> = EnumTable::new(
    "StopReason",
    &[
        (StopReason::EmergencyStop, "EmergencyStop"),
        (StopReason::EvDisconnected, "EVDisconnected"),
        (StopReason::HardReset, "HardReset"),
        (StopReason::Local, "Local"),
        (StopReason::Other, "Other"),
        (StopReason::PowerLoss, "PowerLoss"),
        (StopReason::Reboot, "Reboot"),
        (StopReason::Remote, "Remote"),
        (StopReason::SoftReset, "SoftReset"),
        (StopReason::UnlockCommand, "UnlockCommand"),
        (StopReason::DeAuthorized, "DeAuthorized"),
    ],
);

pub(crate) static MEASURAND: EnumTable<Measurand> = EnumTable::new(
    "Measurand",
    &[
        (Measurand::CurrentExport, "Current.Export"),
        (Measurand::CurrentImport, "Current.Import"),
        (Measurand::CurrentOffered, "Current.Offered"),
        (Measurand::EnergyActiveExportRegister, "Energy.Active.Export.Register"),
        (Measurand::EnergyActiveImportRegister, "Energy.Active.Import.Register"),
        (Measurand::EnergyReactiveExportRegister, "Energy.Reactive.Export.Register"),
        (Measurand::EnergyReactiveImportRegister, "Energy.Reactive.Import.Register"),
        (Measurand::EnergyActiveExportInterval, "Energy.Active.Export.Interval"),
        (Measurand::EnergyActiveImportInterval, "Energy.Active.Import.Interval"),
        (Measurand::EnergyReactiveExportInterval, "Energy.Reactive.Export.Interval"),
        (Measurand::EnergyReactiveImportInterval, "Energy.Reactive.Import.Interval"),
        (Measurand::Frequency, "Frequency"),
        (Measurand::PowerActiveExport, "Power.Active.Export"),
        (Measurand::PowerActiveImport, "Power.Active.Import"),
        (Measurand::PowerFactor, "Power.Factor"),
        (Measurand::PowerOffered, "Power.Offered"),
        (Measurand::PowerReactiveExport, "Power.Reactive.Export"),
        (Measurand::PowerReactiveImport, "Power.Reactive.Import"),
        (Measurand::Rpm, "RPM"),
        (Measurand::StateOfCharge, "SoC"),
        (Measurand::Temperature, "Temperature"),
        (Measurand::Voltage, "Voltage"),
    ],
);

pub(crate) static READING_CONTEXT: EnumTable<ReadingContext> = EnumTable::new(
    "ReadingContext",
    &[
        (ReadingContext::InterruptionBegin, "Interruption.Begin"),
        (ReadingContext::InterruptionEnd, "Interruption.End"),
        (ReadingContext::Other, "Other"),
        (ReadingContext::SampleClock, "Sample.Clock"),
        (ReadingContext::SamplePeriodic, "Sample.Periodic"),
        (ReadingContext::TransactionBegin, "Transaction.Begin"),
        (ReadingContext::TransactionEnd, "Transaction.End"),
        (ReadingContext::Trigger, "Trigger"),
    ],
);

pub(crate) static VALUE_FORMAT: EnumTable<ValueFormat> = EnumTable::new(
    "ValueFormat",
    &[
        (ValueFormat::Raw, "Raw"),
        (ValueFormat::SignedData, "SignedData"),
    ],
);

pub(crate) static LOCATION: EnumTable<Location> = EnumTable::new(
    "Location",
    &[
        (Location::Body, "Body"),
        (Location::Cable, "Cable"),
        (Location::Ev, "EV"),
        (Location::Inlet, "Inlet"),
        (Location::Outlet, "Outlet"),
    ],
);

pub(crate) static PHASE: EnumTable<Phase> = EnumTable::new(
    "Phase",
    &[
        (Phase::L1, "L1"),
        (Phase::L2, "L2"),
        (Phase::L3, "L3"),
        (Phase::N, "N"),
        (Phase::L1N, "L1-N"),
        (Phase::L2N, "L2-N"),
        (Phase::L3N, "L3-N"),
        (Phase::L1L2, "L1-L2"),
        (Phase::L2L3, "L2-L3"),
        (Phase::L3L1, "L3-L1"),
    ],
);

pub(crate) static UNIT_OF_MEASURE: EnumTable<UnitOfMeasure> = EnumTable::new(
    "UnitOfMeasure",
    &[
        (UnitOfMeasure::Wh, "Wh"),
        (UnitOfMeasure::Kwh, "kWh"),
        (UnitOfMeasure::Varh, "varh"),
        (UnitOfMeasure::Kvarh, "kvarh"),
        (UnitOfMeasure::W, "W"),
        (UnitOfMeasure::Kw, "kW"),
        (UnitOfMeasure::Va, "VA"),
        (UnitOfMeasure::Kva, "kVA"),
        (UnitOfMeasure::Var, "var"),
        (UnitOfMeasure::Kvar, "kvar"),
        (UnitOfMeasure::Amp, "A"),
        (UnitOfMeasure::Volt, "V"),
        (UnitOfMeasure::Kelvin, "K"),
        (UnitOfMeasure::Celsius, "Celsius"),
        (UnitOfMeasure::Fahrenheit, "Fahrenheit"),
        (UnitOfMeasure::Percent, "Percent"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    /// Every declared pair must round-trip, and no wire string or domain
    /// value may appear twice within a table.
    fn assert_bijective<T: Copy + PartialEq + fmt::Debug + 'static>(table: &EnumTable<T>) {
        for (value, wire) in table.pairs {
            assert_eq!(table.to_wire(*value), *wire, "{}", table.name);
            assert_eq!(table.from_wire(wire).unwrap(), *value, "{}", table.name);
        }
        for (i, (v1, s1)) in table.pairs.iter().enumerate() {
            for (v2, s2) in &table.pairs[i + 1..] {
                assert!(v1 != v2, "{}: duplicate domain value {:?}", table.name, v1);
                assert!(s1 != s2, "{}: duplicate wire string {:?}", table.name, s1);
            }
        }
    }

    #[test]
    fn test_all_tables_bijective() {
        assert_bijective(&AUTHORIZATION_STATUS);
        assert_bijective(&REGISTRATION_STATUS);
        assert_bijective(&RESET_TYPE);
        assert_bijective(&AVAILABILITY_TYPE);
        assert_bijective(&AVAILABILITY_STATUS);
        assert_bijective(&CHARGE_POINT_ERROR_CODE);
        assert_bijective(&OCCUPANCY_KIND);
        assert_bijective(&CONFIGURATION_STATUS);
        assert_bijective(&CLEAR_CHARGING_PROFILE_STATUS);
        assert_bijective(&CHARGING_PROFILE_STATUS);
        assert_bijective(&CHARGING_PROFILE_PURPOSE);
        assert_bijective(&CHARGING_RATE_UNIT);
        assert_bijective(&DATA_TRANSFER_STATUS);
        assert_bijective(&RESERVATION_STATUS);
        assert_bijective(&TRIGGER_MESSAGE_STATUS);
        assert_bijective(&UNLOCK_STATUS);
        assert_bijective(&UPDATE_TYPE);
        assert_bijective(&FIRMWARE_STATUS);
        assert_bijective(&DIAGNOSTICS_STATUS);
        assert_bijective(&STOP_REASON);
        assert_bijective(&MEASURAND);
        assert_bijective(&READING_CONTEXT);
        assert_bijective(&VALUE_FORMAT);
        assert_bijective(&LOCATION);
        assert_bijective(&PHASE);
        assert_bijective(&UNIT_OF_MEASURE);
    }

    /// Pair counts equal the domain variant counts, so together with the
    /// no-duplicate check every domain value has exactly one wire string.
    #[test]
    fn test_table_sizes_match_variant_counts() {
        assert_eq!(AUTHORIZATION_STATUS.pairs.len(), 5);
        assert_eq!(REGISTRATION_STATUS.pairs.len(), 3);
        assert_eq!(RESET_TYPE.pairs.len(), 2);
        assert_eq!(AVAILABILITY_TYPE.pairs.len(), 2);
        assert_eq!(AVAILABILITY_STATUS.pairs.len(), 3);
        assert_eq!(CHARGE_POINT_ERROR_CODE.pairs.len(), 15);
        assert_eq!(OCCUPANCY_KIND.pairs.len(), 5);
        assert_eq!(CONFIGURATION_STATUS.pairs.len(), 4);
        assert_eq!(CLEAR_CHARGING_PROFILE_STATUS.pairs.len(), 2);
        assert_eq!(CHARGING_PROFILE_STATUS.pairs.len(), 3);
        assert_eq!(CHARGING_PROFILE_PURPOSE.pairs.len(), 3);
        assert_eq!(CHARGING_RATE_UNIT.pairs.len(), 2);
        assert_eq!(DATA_TRANSFER_STATUS.pairs.len(), 4);
        assert_eq!(RESERVATION_STATUS.pairs.len(), 5);
        assert_eq!(TRIGGER_MESSAGE_STATUS.pairs.len(), 3);
        assert_eq!(UNLOCK_STATUS.pairs.len(), 3);
        assert_eq!(UPDATE_TYPE.pairs.len(), 2);
        assert_eq!(FIRMWARE_STATUS.pairs.len(), 7);
        assert_eq!(DIAGNOSTICS_STATUS.pairs.len(), 4);
        assert_eq!(STOP_REASON.pairs.len(), 11);
        assert_eq!(MEASURAND.pairs.len(), 22);
        assert_eq!(READING_CONTEXT.pairs.len(), 8);
        assert_eq!(VALUE_FORMAT.pairs.len(), 2);
        assert_eq!(LOCATION.pairs.len(), 5);
        assert_eq!(PHASE.pairs.len(), 10);
        assert_eq!(UNIT_OF_MEASURE.pairs.len(), 16);
    }

    #[test]
    fn test_authorization_status_wire_names_diverge_from_domain() {
        assert_eq!(
            AUTHORIZATION_STATUS.to_wire(AuthorizationStatus::IdTagBlocked),
            "Blocked"
        );
        assert_eq!(
            AUTHORIZATION_STATUS.to_wire(AuthorizationStatus::IdTagExpired),
            "Expired"
        );
        assert_eq!(
            AUTHORIZATION_STATUS.from_wire("Invalid").unwrap(),
            AuthorizationStatus::IdTagInvalid
        );
    }

    #[test]
    fn test_unknown_wire_string_carries_enumeration_and_value() {
        let err = REGISTRATION_STATUS.from_wire("Maybe").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedEnumValue {
                enumeration: "RegistrationStatus",
                value: "Maybe".to_string(),
            }
        );
    }

    #[test]
    fn test_error_code_table_has_no_sentinel() {
        assert!(CHARGE_POINT_ERROR_CODE.from_wire("NoError").is_err());
    }
}
