//! Protocol-version-neutral representation of charging-station operations.
//!
//! These types carry no wire-format detail: statuses are enums, durations
//! are [`chrono::Duration`], URIs are [`url::Url`], and composite records
//! keep their natural shape. Version-specific codecs (see [`crate::v16`])
//! translate between this model and the concrete JSON schema of one
//! protocol version.

pub mod auth;
pub mod charging;
pub mod message;
pub mod meter;
pub mod status;
pub mod types;

pub use auth::{
    AuthListVersion, AuthorisationData, AuthorizationStatus, IdTagInfo, UpdateStatus, UpdateType,
};
pub use charging::{
    ChargingProfile, ChargingProfileKind, ChargingProfilePurpose, ChargingProfileStatus,
    ChargingRateUnit, ChargingSchedule, ChargingSchedulePeriod, ClearChargingProfileStatus,
    CompositeScheduleStatus, RecurrencyKind,
};
pub use message::*;
pub use meter::{
    Location, Measurand, Meter, MeterValue, Phase, ReadingContext, UnitOfMeasure, ValueFormat,
};
pub use status::{ChargePointErrorCode, ChargePointStatus, OccupancyKind};
pub use types::{
    AvailabilityStatus, AvailabilityType, ConfigurationStatus, ConnectorScope, DataTransferStatus,
    DiagnosticsStatus, FirmwareStatus, KeyValue, MessageTrigger, RegistrationStatus,
    ReservationStatus, ResetType, Retries, Scope, StopReason, TriggerMessageStatus, UnlockStatus,
};
