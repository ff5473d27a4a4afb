//! The version-neutral operation set.
//!
//! One variant per request and per response. Operations with an empty
//! payload are unit variants. `CentralSystemDataTransferReq`/`Res` belong to
//! the charge-point-to-central-system direction and have no OCPP-J 1.6
//! encoding in this codec set; encoding them is rejected explicitly.

use chrono::{DateTime, Duration, Utc};
use url::Url;

use super::auth::{AuthListVersion, AuthorisationData, IdTagInfo, UpdateStatus, UpdateType};
use super::charging::{
    ChargingProfile, ChargingProfilePurpose, ChargingProfileStatus, ChargingRateUnit,
    ClearChargingProfileStatus, CompositeScheduleStatus,
};
use super::meter::Meter;
use super::status::ChargePointStatus;
use super::types::{
    AvailabilityStatus, AvailabilityType, ConfigurationStatus, ConnectorScope, DataTransferStatus,
    DiagnosticsStatus, FirmwareStatus, KeyValue, MessageTrigger, RegistrationStatus,
    ReservationStatus, ResetType, Retries, Scope, StopReason, TriggerMessageStatus, UnlockStatus,
};

// ── Charge point → central system ──────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeReq {
    pub id_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeRes {
    pub id_tag_info: IdTagInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootNotificationReq {
    pub charge_point_vendor: String,
    pub charge_point_model: String,
    pub charge_point_serial_number: Option<String>,
    pub charge_box_serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub iccid: Option<String>,
    pub imsi: Option<String>,
    pub meter_type: Option<String>,
    pub meter_serial_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootNotificationRes {
    pub status: RegistrationStatus,
    pub current_time: DateTime<Utc>,
    /// Requested heartbeat interval.
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsStatusNotificationReq {
    pub status: DiagnosticsStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareStatusNotificationReq {
    pub status: FirmwareStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatRes {
    pub current_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterValuesReq {
    pub scope: Scope,
    pub transaction_id: Option<i32>,
    pub meters: Vec<Meter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTransactionReq {
    pub connector: ConnectorScope,
    pub id_tag: String,
    pub timestamp: DateTime<Utc>,
    pub meter_start: i32,
    pub reservation_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTransactionRes {
    pub transaction_id: i32,
    pub id_tag_info: IdTagInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotificationReq {
    pub scope: Scope,
    pub status: ChargePointStatus,
    pub timestamp: Option<DateTime<Utc>>,
    pub vendor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTransactionReq {
    pub transaction_id: i32,
    pub id_tag: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub meter_stop: i32,
    pub reason: StopReason,
    pub meters: Vec<Meter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTransactionRes {
    pub id_tag_info: Option<IdTagInfo>,
}

/// DataTransfer sent by a charge point to the central system. Not encodable
/// with this codec set; see [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralSystemDataTransferReq {
    pub vendor_id: String,
    pub message_id: Option<String>,
    pub data: Option<String>,
}

/// Response counterpart of [`CentralSystemDataTransferReq`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralSystemDataTransferRes {
    pub status: DataTransferStatus,
    pub data: Option<String>,
}

// ── Central system → charge point ──────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReservationReq {
    pub reservation_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReservationRes {
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAvailabilityReq {
    pub scope: Scope,
    pub availability_type: AvailabilityType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAvailabilityRes {
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfigurationReq {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfigurationRes {
    pub status: ConfigurationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCacheRes {
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearChargingProfileReq {
    pub id: Option<i32>,
    pub scope: Option<Scope>,
    pub purpose: Option<ChargingProfilePurpose>,
    pub stack_level: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearChargingProfileRes {
    pub status: ClearChargingProfileStatus,
}

/// DataTransfer sent by the central system to a charge point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransferReq {
    pub vendor_id: String,
    pub message_id: Option<String>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTransferRes {
    pub status: DataTransferStatus,
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCompositeScheduleReq {
    pub scope: Scope,
    pub duration: Duration,
    pub charging_rate_unit: Option<ChargingRateUnit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetCompositeScheduleRes {
    pub status: CompositeScheduleStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfigurationReq {
    /// Keys to report; empty means all known keys.
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfigurationRes {
    pub values: Vec<KeyValue>,
    pub unknown_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDiagnosticsReq {
    /// Where the charge point should upload the diagnostics file.
    pub location: Url,
    pub start_time: Option<DateTime<Utc>>,
    pub stop_time: Option<DateTime<Utc>>,
    pub retries: Retries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDiagnosticsRes {
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetLocalListVersionRes {
    pub version: AuthListVersion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteStartTransactionReq {
    pub id_tag: String,
    pub connector: Option<ConnectorScope>,
    pub charging_profile: Option<ChargingProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStartTransactionRes {
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStopTransactionReq {
    pub transaction_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStopTransactionRes {
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveNowReq {
    pub scope: Scope,
    pub expiry_date: DateTime<Utc>,
    pub id_tag: String,
    pub parent_id_tag: Option<String>,
    pub reservation_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveNowRes {
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetReq {
    pub reset_type: ResetType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRes {
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendLocalListReq {
    pub update_type: UpdateType,
    pub list_version: AuthListVersion,
    pub local_authorisation_list: Vec<AuthorisationData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendLocalListRes {
    pub status: UpdateStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetChargingProfileReq {
    pub scope: Scope,
    pub profile: ChargingProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetChargingProfileRes {
    pub status: ChargingProfileStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMessageReq {
    pub requested: MessageTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMessageRes {
    pub status: TriggerMessageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockConnectorReq {
    pub connector: ConnectorScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockConnectorRes {
    pub status: UnlockStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFirmwareReq {
    pub retrieve_date: DateTime<Utc>,
    /// Where the charge point should download the firmware from.
    pub location: Url,
    pub retries: Retries,
}

// ── The closed message set ─────────────────────────────────────

/// Every operation request and response of the protocol, version-neutral.
///
/// Unit variants are operations whose payload is an empty record.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Charge point → central system
    AuthorizeReq(AuthorizeReq),
    AuthorizeRes(AuthorizeRes),
    BootNotificationReq(BootNotificationReq),
    BootNotificationRes(BootNotificationRes),
    DiagnosticsStatusNotificationReq(DiagnosticsStatusNotificationReq),
    DiagnosticsStatusNotificationRes,
    FirmwareStatusNotificationReq(FirmwareStatusNotificationReq),
    FirmwareStatusNotificationRes,
    HeartbeatReq,
    HeartbeatRes(HeartbeatRes),
    MeterValuesReq(MeterValuesReq),
    MeterValuesRes,
    StartTransactionReq(StartTransactionReq),
    StartTransactionRes(StartTransactionRes),
    StatusNotificationReq(StatusNotificationReq),
    StatusNotificationRes,
    StopTransactionReq(StopTransactionReq),
    StopTransactionRes(StopTransactionRes),
    CentralSystemDataTransferReq(CentralSystemDataTransferReq),
    CentralSystemDataTransferRes(CentralSystemDataTransferRes),

    // Central system → charge point
    CancelReservationReq(CancelReservationReq),
    CancelReservationRes(CancelReservationRes),
    ChangeAvailabilityReq(ChangeAvailabilityReq),
    ChangeAvailabilityRes(ChangeAvailabilityRes),
    ChangeConfigurationReq(ChangeConfigurationReq),
    ChangeConfigurationRes(ChangeConfigurationRes),
    ClearCacheReq,
    ClearCacheRes(ClearCacheRes),
    ClearChargingProfileReq(ClearChargingProfileReq),
    ClearChargingProfileRes(ClearChargingProfileRes),
    DataTransferReq(DataTransferReq),
    DataTransferRes(DataTransferRes),
    GetCompositeScheduleReq(GetCompositeScheduleReq),
    GetCompositeScheduleRes(GetCompositeScheduleRes),
    GetConfigurationReq(GetConfigurationReq),
    GetConfigurationRes(GetConfigurationRes),
    GetDiagnosticsReq(GetDiagnosticsReq),
    GetDiagnosticsRes(GetDiagnosticsRes),
    GetLocalListVersionReq,
    GetLocalListVersionRes(GetLocalListVersionRes),
    RemoteStartTransactionReq(RemoteStartTransactionReq),
    RemoteStartTransactionRes(RemoteStartTransactionRes),
    RemoteStopTransactionReq(RemoteStopTransactionReq),
    RemoteStopTransactionRes(RemoteStopTransactionRes),
    ReserveNowReq(ReserveNowReq),
    ReserveNowRes(ReserveNowRes),
    ResetReq(ResetReq),
    ResetRes(ResetRes),
    SendLocalListReq(SendLocalListReq),
    SendLocalListRes(SendLocalListRes),
    SetChargingProfileReq(SetChargingProfileReq),
    SetChargingProfileRes(SetChargingProfileRes),
    TriggerMessageReq(TriggerMessageReq),
    TriggerMessageRes(TriggerMessageRes),
    UnlockConnectorReq(UnlockConnectorReq),
    UnlockConnectorRes(UnlockConnectorRes),
    UpdateFirmwareReq(UpdateFirmwareReq),
    UpdateFirmwareRes,
}
