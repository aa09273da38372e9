//! Vendor extension registry.
//!
//! LLRP reserves one TLV type (and one message type) as an escape hatch for
//! vendor-private payloads: a 32-bit vendor identifier followed by a
//! vendor-local subtype and schema. Vendors plug in through
//! [`VendorRegistry`] without touching the core dispatch loop; lookup misses
//! are an explicitly handled case (the payload is recorded as opaque bytes),
//! never an unchecked call.
//!
//! One vendor ships in-tree: Impinj, whose subtype catalog mirrors the
//! published Octane LLRP extension.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cursor::ByteCursor;
use crate::layout::{FieldKind, FieldSpec, ParamLayout};
use crate::param::decode_field_sequence;
use crate::report::{ByteSpan, DecodedField, DecodedMessage, Diagnostic, FieldValue, Parameter};

/// Result of a vendor parameter sub-decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorParamOutcome {
    /// Vendor fields decoded up to `next`; the caller resumes nested
    /// parameter decoding from there.
    Decoded { next: usize },
    /// The vendor-local subtype was not recognized; only the subtype code
    /// was consumed. The caller records the remainder as opaque.
    UnknownSubtype { next: usize },
}

/// A vendor-specific sub-decoder for custom parameters and messages.
pub trait VendorDecoder: Send + Sync {
    /// The IANA private enterprise number this decoder handles.
    fn vendor_id(&self) -> u32;

    fn name(&self) -> &'static str;

    /// Decode the vendor payload of a custom parameter. `offset` points
    /// just past the 32-bit vendor ID; `end` is the parameter boundary.
    fn decode_parameter(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        param: &mut Parameter,
    ) -> VendorParamOutcome;

    /// Decode the vendor payload of a CUSTOM_MESSAGE. Returns the offset of
    /// the first byte it did not consume; the caller decodes the remainder
    /// as a parameter sequence.
    fn decode_message(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        msg: &mut DecodedMessage,
    ) -> usize;
}

/// Mapping from vendor ID to sub-decoder, built once at decoder
/// construction and read-only afterwards.
#[derive(Clone)]
pub struct VendorRegistry {
    handlers: HashMap<u32, Arc<dyn VendorDecoder>>,
}

impl VendorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The registry with every in-tree vendor registered.
    pub fn with_default_vendors() -> Self {
        let mut reg = Self::new();
        reg.register(Arc::new(ImpinjDecoder));
        reg
    }

    pub fn register(&mut self, decoder: Arc<dyn VendorDecoder>) {
        self.handlers.insert(decoder.vendor_id(), decoder);
    }

    pub fn get(&self, vendor_id: u32) -> Option<&dyn VendorDecoder> {
        self.handlers.get(&vendor_id).map(|d| d.as_ref())
    }

    pub fn vendor_name(&self, vendor_id: u32) -> Option<&'static str> {
        self.get(vendor_id).map(|d| d.name())
    }
}

impl Default for VendorRegistry {
    fn default() -> Self {
        Self::with_default_vendors()
    }
}

impl std::fmt::Debug for VendorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorRegistry")
            .field("vendors", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/* ---------------------------------------------------------------- *
 * Impinj (vendor 25882)
 * ---------------------------------------------------------------- */

pub const VENDOR_IMPINJ: u32 = 25882;

/// Impinj custom message subtypes.
pub const IMPINJ_MSG_ENABLE_EXTENSIONS: u8 = 21;
pub const IMPINJ_MSG_ENABLE_EXTENSIONS_RESPONSE: u8 = 22;
pub const IMPINJ_MSG_SAVE_SETTINGS: u8 = 23;
pub const IMPINJ_MSG_SAVE_SETTINGS_RESPONSE: u8 = 24;

/// Impinj custom parameter subtypes.
pub const IMPINJ_PARAM_REQUESTED_DATA: u32 = 21;
pub const IMPINJ_PARAM_SUBREGULATORY_REGION: u32 = 22;
pub const IMPINJ_PARAM_INVENTORY_SEARCH_MODE: u32 = 23;
pub const IMPINJ_PARAM_TAG_DIRECTION_REPORTING: u32 = 24;
pub const IMPINJ_PARAM_TAG_DIRECTION: u32 = 25;
pub const IMPINJ_PARAM_FIXED_FREQUENCY_LIST: u32 = 26;
pub const IMPINJ_PARAM_REDUCED_POWER_FREQUENCY_LIST: u32 = 27;
pub const IMPINJ_PARAM_LOW_DUTY_CYCLE: u32 = 28;
pub const IMPINJ_PARAM_DETAILED_VERSION: u32 = 29;
pub const IMPINJ_PARAM_FREQUENCY_CAPABILITIES: u32 = 30;
pub const IMPINJ_PARAM_TAG_INFORMATION: u32 = 31;
pub const IMPINJ_PARAM_FORKLIFT_CONFIGURATION: u32 = 32;
pub const IMPINJ_PARAM_FORKLIFT_HEIGHT_THRESHOLD: u32 = 33;
pub const IMPINJ_PARAM_FORKLIFT_ZEROMOTION_TIME_THRESHOLD: u32 = 34;
pub const IMPINJ_PARAM_FORKLIFT_COMPANION_BOARD_INFO: u32 = 35;
pub const IMPINJ_PARAM_GPI_DEBOUNCE_CONFIGURATION: u32 = 36;
pub const IMPINJ_PARAM_READER_TEMPERATURE: u32 = 37;
pub const IMPINJ_PARAM_LINK_MONITOR_CONFIGURATION: u32 = 38;
pub const IMPINJ_PARAM_REPORT_BUFFER_CONFIGURATION: u32 = 39;
pub const IMPINJ_PARAM_ACCESS_SPEC_CONFIGURATION: u32 = 40;
pub const IMPINJ_PARAM_BLOCK_WRITE_WORD_COUNT: u32 = 41;
pub const IMPINJ_PARAM_BLOCK_PERMALOCK: u32 = 42;
pub const IMPINJ_PARAM_BLOCK_PERMALOCK_OPSPEC_RESULT: u32 = 43;
pub const IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS: u32 = 44;
pub const IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS_OPSPEC_RESULT: u32 = 45;
pub const IMPINJ_PARAM_SET_QT_CONFIG: u32 = 46;
pub const IMPINJ_PARAM_SET_QT_CONFIG_OPSPEC_RESULT: u32 = 47;
pub const IMPINJ_PARAM_GET_QT_CONFIG: u32 = 48;
pub const IMPINJ_PARAM_GET_QT_CONFIG_OPSPEC_RESULT: u32 = 49;
pub const IMPINJ_PARAM_TAG_REPORT_CONTENT_SELECTOR: u32 = 50;
pub const IMPINJ_PARAM_ENABLE_SERIALIZED_TID: u32 = 51;
pub const IMPINJ_PARAM_ENABLE_RF_PHASE_ANGLE: u32 = 52;
pub const IMPINJ_PARAM_ENABLE_PEAK_RSSI: u32 = 53;
pub const IMPINJ_PARAM_ENABLE_GPS_COORDINATES: u32 = 54;
pub const IMPINJ_PARAM_SERIALIZED_TID: u32 = 55;
pub const IMPINJ_PARAM_RF_PHASE_ANGLE: u32 = 56;
pub const IMPINJ_PARAM_PEAK_RSSI: u32 = 57;
pub const IMPINJ_PARAM_GPS_COORDINATES: u32 = 58;
pub const IMPINJ_PARAM_LOOP_SPEC: u32 = 59;
pub const IMPINJ_PARAM_GPS_NMEA_SENTENCES: u32 = 60;
pub const IMPINJ_PARAM_GGA_SENTENCE: u32 = 61;
pub const IMPINJ_PARAM_RMC_SENTENCE: u32 = 62;
pub const IMPINJ_PARAM_OPSPEC_RETRY_COUNT: u32 = 63;
pub const IMPINJ_PARAM_ADVANCE_GPO_CONFIG: u32 = 64;
pub const IMPINJ_PARAM_ENABLE_OPTIM_READ: u32 = 65;
pub const IMPINJ_PARAM_ACCESS_SPEC_ORDERING: u32 = 66;
pub const IMPINJ_PARAM_ENABLE_RF_DOPPLER_FREQ: u32 = 67;

/// Decoder for Impinj custom parameters and messages.
pub struct ImpinjDecoder;

impl VendorDecoder for ImpinjDecoder {
    fn vendor_id(&self) -> u32 {
        VENDOR_IMPINJ
    }

    fn name(&self) -> &'static str {
        "Impinj"
    }

    fn decode_parameter(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        param: &mut Parameter,
    ) -> VendorParamOutcome {
        if offset + 4 > end {
            param.diagnostics.push(Diagnostic::error(
                "custom parameter too short for a vendor subtype",
                ByteSpan::new(offset, end - offset),
            ));
            return VendorParamOutcome::UnknownSubtype { next: offset };
        }

        let subtype = cur.u32(offset).unwrap_or(0);
        let mut subtype_field = DecodedField::new(
            "Impinj parameter subtype",
            ByteSpan::new(offset, 4),
            FieldValue::U32(subtype),
        );
        subtype_field.label = impinj_param_name(subtype);
        param.fields.push(subtype_field);

        match impinj_param_layout(subtype) {
            Some(layout) => {
                if let Some(name) = impinj_param_name(subtype) {
                    param.type_name = Some(name);
                }
                let next = decode_field_sequence(
                    cur,
                    offset + 4,
                    end,
                    layout.fields,
                    &mut param.fields,
                    &mut param.diagnostics,
                );
                VendorParamOutcome::Decoded { next }
            }
            None => {
                debug!("unrecognized Impinj parameter subtype {}", subtype);
                VendorParamOutcome::UnknownSubtype { next: offset + 4 }
            }
        }
    }

    fn decode_message(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        msg: &mut DecodedMessage,
    ) -> usize {
        if offset >= end {
            msg.diagnostics.push(Diagnostic::error(
                "custom message too short for a vendor subtype",
                ByteSpan::new(offset, 0),
            ));
            return offset;
        }

        let subtype = cur.u8(offset).unwrap_or(0);
        let mut subtype_field = DecodedField::new(
            "Impinj message subtype",
            ByteSpan::new(offset, 1),
            FieldValue::U8(subtype),
        );
        subtype_field.label = impinj_message_name(subtype);
        msg.fields.push(subtype_field);

        let specs: &[FieldSpec] = match subtype {
            IMPINJ_MSG_ENABLE_EXTENSIONS => IMPINJ_MSG_ENABLE_EXTENSIONS_FIELDS,
            IMPINJ_MSG_SAVE_SETTINGS => IMPINJ_MSG_SAVE_SETTINGS_FIELDS,
            IMPINJ_MSG_ENABLE_EXTENSIONS_RESPONSE | IMPINJ_MSG_SAVE_SETTINGS_RESPONSE => &[],
            other => {
                debug!("unrecognized Impinj message subtype {}", other);
                &[]
            }
        };

        decode_field_sequence(
            cur,
            offset + 1,
            end,
            specs,
            &mut msg.fields,
            &mut msg.diagnostics,
        )
    }
}

/* ---------------------------------------------------------------- *
 * Impinj schema tables
 * ---------------------------------------------------------------- */

use FieldKind::*;

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        stay: false,
    }
}

static IMPINJ_MSG_ENABLE_EXTENSIONS_FIELDS: &[FieldSpec] =
    &[field("Reserved for future use", Bytes(4))];

static IMPINJ_MSG_SAVE_SETTINGS_FIELDS: &[FieldSpec] =
    &[field("Save configuration", Bool8(0x80))];

static IMP_EMPTY: ParamLayout = ParamLayout {
    fields: &[],
    trailing_params: true,
};

static IMP_REQUESTED_DATA: ParamLayout = imp(&[field("Requested data", U32)]);
static IMP_SUBREGULATORY_REGION: ParamLayout = imp(&[field("Regulatory region", U16)]);
static IMP_INVENTORY_SEARCH_MODE: ParamLayout = imp(&[field("Inventory search mode", U16)]);
static IMP_TAG_DIRECTION_REPORTING: ParamLayout = imp(&[
    field("Enable tag direction", Bool16(0x8000)),
    field("Antenna configuration", U16),
    field("Reserved for future use", Bytes(4)),
]);
static IMP_TAG_DIRECTION: ParamLayout = imp(&[
    field("Decision timestamp", U64),
    field("Tag direction", U16),
    field("Confidence", U16),
]);
static IMP_FIXED_FREQUENCY_LIST: ParamLayout = imp(&[
    field("Fixed frequency mode", U16),
    field("Reserved for future use", Bytes(2)),
    field(
        "Channel",
        ItemArray {
            count_name: "Number of channels",
            item_size: 2,
        },
    ),
]);
static IMP_REDUCED_POWER_FREQUENCY_LIST: ParamLayout = imp(&[
    field("Reduced power mode", U16),
    field("Reserved for future use", Bytes(2)),
    field(
        "Channel",
        ItemArray {
            count_name: "Number of channels",
            item_size: 2,
        },
    ),
]);
static IMP_LOW_DUTY_CYCLE: ParamLayout = imp(&[
    field("Low duty cycle mode", U16),
    field("Empty field timeout", U16),
    field("Field ping interval", U16),
]);
static IMP_DETAILED_VERSION: ParamLayout = imp(&[
    field("Model name", Utf8String),
    field("Serial number", Utf8String),
    field("Software version", Utf8String),
    field("Firmware version", Utf8String),
    field("FPGA version", Utf8String),
    field("PCBA version", Utf8String),
]);
static IMP_FREQUENCY_CAPABILITIES: ParamLayout = imp(&[field(
    "Frequency",
    ItemArray {
        count_name: "Number of frequencies",
        item_size: 4,
    },
)]);
static IMP_FORKLIFT_HEIGHT_THRESHOLD: ParamLayout = imp(&[field("Height threshold", U16)]);
static IMP_FORKLIFT_ZEROMOTION_TIME_THRESHOLD: ParamLayout =
    imp(&[field("Zero motion threshold", U16)]);
static IMP_FORKLIFT_COMPANION_BOARD_INFO: ParamLayout = imp(&[
    field("Board manufacturer", Utf8String),
    field("Firmware version", LenPrefixedBytes),
    field("Hardware version", LenPrefixedBytes),
]);
static IMP_GPI_DEBOUNCE_CONFIGURATION: ParamLayout = imp(&[
    field("GPI port number", U16),
    field("GPI debounce timer (ms)", U32),
]);
static IMP_READER_TEMPERATURE: ParamLayout = imp(&[field("Temperature", I16)]);
static IMP_LINK_MONITOR_CONFIGURATION: ParamLayout = imp(&[
    field("Link monitor mode", U16),
    field("Link down threshold", U16),
]);
static IMP_REPORT_BUFFER_CONFIGURATION: ParamLayout = imp(&[field("Report buffer mode", U16)]);
static IMP_BLOCK_WRITE_WORD_COUNT: ParamLayout = imp(&[field("Word count", U16)]);
static IMP_BLOCK_PERMALOCK: ParamLayout = imp(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Block pointer", U16),
    field("Block mask", Bytes(2)),
]);
static IMP_OPSPEC_RESULT: ParamLayout = imp(&[
    field("Result", U8),
    field("OpSpec ID", U16),
]);
static IMP_GET_BLOCK_PERMALOCK_STATUS: ParamLayout = imp(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Block pointer", U16),
    field("Block range", U16),
]);
static IMP_SET_QT_CONFIG: ParamLayout = imp(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("Data profile", U8),
    field("Access range", U8),
    field("Persistence", U8),
    field("Reserved for future use", Bytes(4)),
]);
static IMP_GET_QT_CONFIG: ParamLayout = imp(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
]);
static IMP_GET_QT_CONFIG_OPSPEC_RESULT: ParamLayout = imp(&[
    field("Result", U8),
    field("OpSpec ID", U16),
    field("Data profile", U8),
    field("Access range", U8),
    field("Reserved for future use", Bytes(4)),
]);
static IMP_ENABLE_MODE_U16: ParamLayout = imp(&[field("Mode", U16)]);
static IMP_SERIALIZED_TID: ParamLayout = imp(&[field("TID", LenPrefixedBytes)]);
static IMP_RF_PHASE_ANGLE: ParamLayout = imp(&[field("Phase angle", U16)]);
static IMP_PEAK_RSSI: ParamLayout = imp(&[field("RSSI", I16)]);
static IMP_GPS_COORDINATES: ParamLayout = imp(&[
    field("Latitude", I32),
    field("Longitude", I32),
]);
static IMP_LOOP_SPEC: ParamLayout = imp(&[field("Loop count", U32)]);
static IMP_GGA_SENTENCE: ParamLayout = imp(&[field("GGA sentence", Utf8String)]);
static IMP_RMC_SENTENCE: ParamLayout = imp(&[field("RMC sentence", Utf8String)]);
static IMP_OPSPEC_RETRY_COUNT: ParamLayout = imp(&[field("Retry count", U16)]);
static IMP_ADVANCE_GPO_CONFIG: ParamLayout = imp(&[
    field("GPO port number", U16),
    field("GPO mode", U16),
    field("GPO pulse duration", U32),
]);
static IMP_ACCESS_SPEC_ORDERING: ParamLayout = imp(&[field("AccessSpec ordering", U16)]);

const fn imp(fields: &'static [FieldSpec]) -> ParamLayout {
    // Every known Impinj parameter may carry trailing nested parameters.
    ParamLayout {
        fields,
        trailing_params: true,
    }
}

/// Schema for an Impinj parameter subtype, `None` when unrecognized.
fn impinj_param_layout(subtype: u32) -> Option<&'static ParamLayout> {
    let layout = match subtype {
        IMPINJ_PARAM_TAG_INFORMATION
        | IMPINJ_PARAM_FORKLIFT_CONFIGURATION
        | IMPINJ_PARAM_ACCESS_SPEC_CONFIGURATION
        | IMPINJ_PARAM_TAG_REPORT_CONTENT_SELECTOR
        | IMPINJ_PARAM_GPS_NMEA_SENTENCES => &IMP_EMPTY,
        IMPINJ_PARAM_REQUESTED_DATA => &IMP_REQUESTED_DATA,
        IMPINJ_PARAM_SUBREGULATORY_REGION => &IMP_SUBREGULATORY_REGION,
        IMPINJ_PARAM_INVENTORY_SEARCH_MODE => &IMP_INVENTORY_SEARCH_MODE,
        IMPINJ_PARAM_TAG_DIRECTION_REPORTING => &IMP_TAG_DIRECTION_REPORTING,
        IMPINJ_PARAM_TAG_DIRECTION => &IMP_TAG_DIRECTION,
        IMPINJ_PARAM_FIXED_FREQUENCY_LIST => &IMP_FIXED_FREQUENCY_LIST,
        IMPINJ_PARAM_REDUCED_POWER_FREQUENCY_LIST => &IMP_REDUCED_POWER_FREQUENCY_LIST,
        IMPINJ_PARAM_LOW_DUTY_CYCLE => &IMP_LOW_DUTY_CYCLE,
        IMPINJ_PARAM_DETAILED_VERSION => &IMP_DETAILED_VERSION,
        IMPINJ_PARAM_FREQUENCY_CAPABILITIES => &IMP_FREQUENCY_CAPABILITIES,
        IMPINJ_PARAM_FORKLIFT_HEIGHT_THRESHOLD => &IMP_FORKLIFT_HEIGHT_THRESHOLD,
        IMPINJ_PARAM_FORKLIFT_ZEROMOTION_TIME_THRESHOLD => {
            &IMP_FORKLIFT_ZEROMOTION_TIME_THRESHOLD
        }
        IMPINJ_PARAM_FORKLIFT_COMPANION_BOARD_INFO => &IMP_FORKLIFT_COMPANION_BOARD_INFO,
        IMPINJ_PARAM_GPI_DEBOUNCE_CONFIGURATION => &IMP_GPI_DEBOUNCE_CONFIGURATION,
        IMPINJ_PARAM_READER_TEMPERATURE => &IMP_READER_TEMPERATURE,
        IMPINJ_PARAM_LINK_MONITOR_CONFIGURATION => &IMP_LINK_MONITOR_CONFIGURATION,
        IMPINJ_PARAM_REPORT_BUFFER_CONFIGURATION => &IMP_REPORT_BUFFER_CONFIGURATION,
        IMPINJ_PARAM_BLOCK_WRITE_WORD_COUNT => &IMP_BLOCK_WRITE_WORD_COUNT,
        IMPINJ_PARAM_BLOCK_PERMALOCK => &IMP_BLOCK_PERMALOCK,
        IMPINJ_PARAM_BLOCK_PERMALOCK_OPSPEC_RESULT
        | IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS_OPSPEC_RESULT
        | IMPINJ_PARAM_SET_QT_CONFIG_OPSPEC_RESULT => &IMP_OPSPEC_RESULT,
        IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS => &IMP_GET_BLOCK_PERMALOCK_STATUS,
        IMPINJ_PARAM_SET_QT_CONFIG => &IMP_SET_QT_CONFIG,
        IMPINJ_PARAM_GET_QT_CONFIG => &IMP_GET_QT_CONFIG,
        IMPINJ_PARAM_GET_QT_CONFIG_OPSPEC_RESULT => &IMP_GET_QT_CONFIG_OPSPEC_RESULT,
        IMPINJ_PARAM_ENABLE_SERIALIZED_TID
        | IMPINJ_PARAM_ENABLE_RF_PHASE_ANGLE
        | IMPINJ_PARAM_ENABLE_PEAK_RSSI
        | IMPINJ_PARAM_ENABLE_GPS_COORDINATES
        | IMPINJ_PARAM_ENABLE_OPTIM_READ
        | IMPINJ_PARAM_ENABLE_RF_DOPPLER_FREQ => &IMP_ENABLE_MODE_U16,
        IMPINJ_PARAM_SERIALIZED_TID => &IMP_SERIALIZED_TID,
        IMPINJ_PARAM_RF_PHASE_ANGLE => &IMP_RF_PHASE_ANGLE,
        IMPINJ_PARAM_PEAK_RSSI => &IMP_PEAK_RSSI,
        IMPINJ_PARAM_GPS_COORDINATES => &IMP_GPS_COORDINATES,
        IMPINJ_PARAM_LOOP_SPEC => &IMP_LOOP_SPEC,
        IMPINJ_PARAM_GGA_SENTENCE => &IMP_GGA_SENTENCE,
        IMPINJ_PARAM_RMC_SENTENCE => &IMP_RMC_SENTENCE,
        IMPINJ_PARAM_OPSPEC_RETRY_COUNT => &IMP_OPSPEC_RETRY_COUNT,
        IMPINJ_PARAM_ADVANCE_GPO_CONFIG => &IMP_ADVANCE_GPO_CONFIG,
        IMPINJ_PARAM_ACCESS_SPEC_ORDERING => &IMP_ACCESS_SPEC_ORDERING,
        _ => return None,
    };
    Some(layout)
}

/// Human-readable name of an Impinj parameter subtype.
pub fn impinj_param_name(subtype: u32) -> Option<&'static str> {
    Some(match subtype {
        IMPINJ_PARAM_REQUESTED_DATA => "Impinj Requested Data",
        IMPINJ_PARAM_SUBREGULATORY_REGION => "Impinj Sub Regulatory Region",
        IMPINJ_PARAM_INVENTORY_SEARCH_MODE => "Impinj Inventory Search Mode",
        IMPINJ_PARAM_TAG_DIRECTION_REPORTING => "Impinj Tag Direction Reporting",
        IMPINJ_PARAM_TAG_DIRECTION => "Impinj Tag Direction",
        IMPINJ_PARAM_FIXED_FREQUENCY_LIST => "Impinj Fixed Frequency List",
        IMPINJ_PARAM_REDUCED_POWER_FREQUENCY_LIST => "Impinj Reduced Power Frequency List",
        IMPINJ_PARAM_LOW_DUTY_CYCLE => "Impinj Low Duty Cycle",
        IMPINJ_PARAM_DETAILED_VERSION => "Impinj Detailed Version",
        IMPINJ_PARAM_FREQUENCY_CAPABILITIES => "Impinj Frequency Capabilities",
        IMPINJ_PARAM_TAG_INFORMATION => "Impinj Tag Information",
        IMPINJ_PARAM_FORKLIFT_CONFIGURATION => "Impinj Forklift Configuration",
        IMPINJ_PARAM_FORKLIFT_HEIGHT_THRESHOLD => "Impinj Forklift Height Threshold",
        IMPINJ_PARAM_FORKLIFT_ZEROMOTION_TIME_THRESHOLD => {
            "Impinj Forklift Zero Motion Time Threshold"
        }
        IMPINJ_PARAM_FORKLIFT_COMPANION_BOARD_INFO => "Impinj Forklift Companion Board Info",
        IMPINJ_PARAM_GPI_DEBOUNCE_CONFIGURATION => "Impinj GPI Debounce Configuration",
        IMPINJ_PARAM_READER_TEMPERATURE => "Impinj Reader Temperature",
        IMPINJ_PARAM_LINK_MONITOR_CONFIGURATION => "Impinj Link Monitor Configuration",
        IMPINJ_PARAM_REPORT_BUFFER_CONFIGURATION => "Impinj Report Buffer Configuration",
        IMPINJ_PARAM_ACCESS_SPEC_CONFIGURATION => "Impinj Access Spec Configuration",
        IMPINJ_PARAM_BLOCK_WRITE_WORD_COUNT => "Impinj Block Write Word Count",
        IMPINJ_PARAM_BLOCK_PERMALOCK => "Impinj Block Permalock",
        IMPINJ_PARAM_BLOCK_PERMALOCK_OPSPEC_RESULT => "Impinj Block Permalock Op Spec Result",
        IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS => "Impinj Get Block Permalock Status",
        IMPINJ_PARAM_GET_BLOCK_PERMALOCK_STATUS_OPSPEC_RESULT => {
            "Impinj Get Block Permalock Status Op Spec Result"
        }
        IMPINJ_PARAM_SET_QT_CONFIG => "Impinj Set QT Config",
        IMPINJ_PARAM_SET_QT_CONFIG_OPSPEC_RESULT => "Impinj Set QT Config Op Spec Result",
        IMPINJ_PARAM_GET_QT_CONFIG => "Impinj Get QT Config",
        IMPINJ_PARAM_GET_QT_CONFIG_OPSPEC_RESULT => "Impinj Get QT Config Op Spec Result",
        IMPINJ_PARAM_TAG_REPORT_CONTENT_SELECTOR => "Impinj Tag Report Content Selector",
        IMPINJ_PARAM_ENABLE_SERIALIZED_TID => "Impinj Enable Serialized TID",
        IMPINJ_PARAM_ENABLE_RF_PHASE_ANGLE => "Impinj Enable RF Phase Angle",
        IMPINJ_PARAM_ENABLE_PEAK_RSSI => "Impinj Enable Peak RSSI",
        IMPINJ_PARAM_ENABLE_GPS_COORDINATES => "Impinj Enable GPS Coordinates",
        IMPINJ_PARAM_SERIALIZED_TID => "Impinj Serialized TID",
        IMPINJ_PARAM_RF_PHASE_ANGLE => "Impinj RF Phase Angle",
        IMPINJ_PARAM_PEAK_RSSI => "Impinj Peak RSSI",
        IMPINJ_PARAM_GPS_COORDINATES => "Impinj GPS Coordinates",
        IMPINJ_PARAM_LOOP_SPEC => "Impinj Loop Spec",
        IMPINJ_PARAM_GPS_NMEA_SENTENCES => "Impinj GPS NMEA Sentences",
        IMPINJ_PARAM_GGA_SENTENCE => "Impinj GGA Sentence",
        IMPINJ_PARAM_RMC_SENTENCE => "Impinj RMC Sentence",
        IMPINJ_PARAM_OPSPEC_RETRY_COUNT => "Impinj Op Spec Retry Count",
        IMPINJ_PARAM_ADVANCE_GPO_CONFIG => "Impinj Advanced GPO Configuration",
        IMPINJ_PARAM_ENABLE_OPTIM_READ => "Impinj Enable Optimized Read",
        IMPINJ_PARAM_ACCESS_SPEC_ORDERING => "Impinj Access Spec Ordering",
        IMPINJ_PARAM_ENABLE_RF_DOPPLER_FREQ => "Impinj Enable RF Doppler Frequency",
        _ => return None,
    })
}

/// Human-readable name of an Impinj message subtype.
pub fn impinj_message_name(subtype: u8) -> Option<&'static str> {
    Some(match subtype {
        IMPINJ_MSG_ENABLE_EXTENSIONS => "Impinj Enable Extensions",
        IMPINJ_MSG_ENABLE_EXTENSIONS_RESPONSE => "Impinj Enable Extensions Response",
        IMPINJ_MSG_SAVE_SETTINGS => "Impinj Save Settings",
        IMPINJ_MSG_SAVE_SETTINGS_RESPONSE => "Impinj Save Settings Response",
        _ => return None,
    })
}
