//! Static field-layout registry for LLRP parameters.
//!
//! This is the decoding schema: for every known parameter type code, the
//! ordered sequence of payload fields and whether the payload ends in a
//! nested parameter list. It is plain read-only data, built into the binary,
//! safe to consult from any number of concurrent decode calls.
//!
//! TLV parameters carry an explicit 16-bit length; TV parameters do not, so
//! [`tv_layout`] doubles as the per-type length table the wire format
//! implies.

/* ---------------------------------------------------------------- *
 * Schema types
 * ---------------------------------------------------------------- */

/// How one payload field is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    I16,
    I32,
    /// Single flag bit inside one byte.
    Bool8(u8),
    /// Single flag bit inside a 16-bit word.
    Bool16(u16),
    /// Fixed-size opaque blob.
    Bytes(usize),
    /// 16-bit capability count where raw zero means "no configured limit".
    NoLimitU16,
    /// 32-bit capability count where raw zero means "no configured limit".
    NoLimitU32,
    /// 16-bit byte count followed by that many UTF-8 bytes.
    Utf8String,
    /// 16-bit bit count followed by ceil(bits / 8) bytes.
    BitField,
    /// 16-bit word count followed by count * 2 bytes.
    WordArray,
    /// 16-bit byte count followed by that many opaque bytes.
    LenPrefixedBytes,
    /// 16-bit item count followed by count fixed-size items.
    ItemArray {
        count_name: &'static str,
        item_size: usize,
    },
}

/// One named field of a parameter payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// When set, the cursor does not advance past this field: the next spec
    /// reads the same bytes. Used for flag bits sharing a byte or word with
    /// another field.
    pub stay: bool,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        stay: false,
    }
}

const fn field_stay(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        stay: true,
    }
}

/// Payload schema of one TLV parameter type.
#[derive(Debug, Clone, Copy)]
pub struct ParamLayout {
    pub fields: &'static [FieldSpec],
    /// The payload ends with a nested parameter sequence.
    pub trailing_params: bool,
}

const fn layout(fields: &'static [FieldSpec]) -> ParamLayout {
    ParamLayout {
        fields,
        trailing_params: false,
    }
}

const fn layout_nested(fields: &'static [FieldSpec]) -> ParamLayout {
    ParamLayout {
        fields,
        trailing_params: true,
    }
}

/// Schema of one TV parameter type: fixed payload length plus fields.
#[derive(Debug, Clone, Copy)]
pub struct TvLayout {
    /// Payload length in bytes, excluding the tag byte.
    pub len: usize,
    pub fields: &'static [FieldSpec],
}

const fn tv(len: usize, fields: &'static [FieldSpec]) -> TvLayout {
    TvLayout { len, fields }
}

/* ---------------------------------------------------------------- *
 * TLV parameter type codes
 * ---------------------------------------------------------------- */

pub const TLV_UTC_TIMESTAMP: u16 = 128;
pub const TLV_UPTIME: u16 = 129;
pub const TLV_GENERAL_DEVICE_CAP: u16 = 137;
pub const TLV_RECEIVE_SENSE_ENTRY: u16 = 139;
pub const TLV_ANTENNA_AIR_PROTO: u16 = 140;
pub const TLV_GPIO_CAPABILITIES: u16 = 141;
pub const TLV_LLRP_CAPABILITIES: u16 = 142;
pub const TLV_REGU_CAPABILITIES: u16 = 143;
pub const TLV_UHF_CAPABILITIES: u16 = 144;
pub const TLV_XMIT_POWER_LEVEL_ENTRY: u16 = 145;
pub const TLV_FREQ_INFORMATION: u16 = 146;
pub const TLV_FREQ_HOP_TABLE: u16 = 147;
pub const TLV_FIXED_FREQ_TABLE: u16 = 148;
pub const TLV_ANTENNA_RCV_SENSE_RANGE: u16 = 149;
pub const TLV_RO_SPEC: u16 = 177;
pub const TLV_RO_BOUND_SPEC: u16 = 178;
pub const TLV_RO_SPEC_START_TRIGGER: u16 = 179;
pub const TLV_PER_TRIGGER_VAL: u16 = 180;
pub const TLV_GPI_TRIGGER_VAL: u16 = 181;
pub const TLV_RO_SPEC_STOP_TRIGGER: u16 = 182;
pub const TLV_AI_SPEC: u16 = 183;
pub const TLV_AI_SPEC_STOP: u16 = 184;
pub const TLV_TAG_OBSERV_TRIGGER: u16 = 185;
pub const TLV_INVENTORY_PARAM_SPEC: u16 = 186;
pub const TLV_RF_SURVEY_SPEC: u16 = 187;
pub const TLV_RF_SURVEY_SPEC_STOP_TR: u16 = 188;
pub const TLV_ACCESS_SPEC: u16 = 207;
pub const TLV_ACCESS_SPEC_STOP_TRIG: u16 = 208;
pub const TLV_ACCESS_COMMAND: u16 = 209;
pub const TLV_CLIENT_REQ_OP_SPEC: u16 = 210;
pub const TLV_CLIENT_REQ_RESPONSE: u16 = 211;
pub const TLV_LLRP_CONF_STATE_VAL: u16 = 217;
pub const TLV_IDENT: u16 = 218;
pub const TLV_GPO_WRITE_DATA: u16 = 219;
pub const TLV_KEEPALIVE_SPEC: u16 = 220;
pub const TLV_ANTENNA_PROPS: u16 = 221;
pub const TLV_ANTENNA_CONF: u16 = 222;
pub const TLV_RF_RECEIVER: u16 = 223;
pub const TLV_RF_TRANSMITTER: u16 = 224;
pub const TLV_GPI_PORT_CURRENT_STATE: u16 = 225;
pub const TLV_EVENTS_AND_REPORTS: u16 = 226;
pub const TLV_RO_REPORT_SPEC: u16 = 237;
pub const TLV_TAG_REPORT_CONTENT_SEL: u16 = 238;
pub const TLV_ACCESS_REPORT_SPEC: u16 = 239;
pub const TLV_TAG_REPORT_DATA: u16 = 240;
pub const TLV_EPC_DATA: u16 = 241;
pub const TLV_RF_SURVEY_REPORT_DATA: u16 = 242;
pub const TLV_FREQ_RSSI_LEVEL_ENTRY: u16 = 243;
pub const TLV_READER_EVENT_NOTI_SPEC: u16 = 244;
pub const TLV_EVENT_NOTIF_STATE: u16 = 245;
pub const TLV_READER_EVENT_NOTI_DATA: u16 = 246;
pub const TLV_HOPPING_EVENT: u16 = 247;
pub const TLV_GPI_EVENT: u16 = 248;
pub const TLV_RO_SPEC_EVENT: u16 = 249;
pub const TLV_REPORT_BUF_LEVEL_WARN: u16 = 250;
pub const TLV_REPORT_BUF_OVERFLOW_ERR: u16 = 251;
pub const TLV_READER_EXCEPTION_EVENT: u16 = 252;
pub const TLV_RF_SURVEY_EVENT: u16 = 253;
pub const TLV_AI_SPEC_EVENT: u16 = 254;
pub const TLV_ANTENNA_EVENT: u16 = 255;
pub const TLV_CONN_ATTEMPT_EVENT: u16 = 256;
pub const TLV_CONN_CLOSE_EVENT: u16 = 257;
pub const TLV_LLRP_STATUS: u16 = 287;
pub const TLV_FIELD_ERROR: u16 = 288;
pub const TLV_PARAM_ERROR: u16 = 289;
pub const TLV_C1G2_LLRP_CAP: u16 = 327;
pub const TLV_C1G2_UHF_RF_MD_TBL: u16 = 328;
pub const TLV_C1G2_UHF_RF_MD_TBL_ENT: u16 = 329;
pub const TLV_C1G2_INVENTORY_COMMAND: u16 = 330;
pub const TLV_C1G2_FILTER: u16 = 331;
pub const TLV_C1G2_TAG_INV_MASK: u16 = 332;
pub const TLV_C1G2_TAG_INV_AWARE_FLTR: u16 = 333;
pub const TLV_C1G2_TAG_INV_UNAWR_FLTR: u16 = 334;
pub const TLV_C1G2_RF_CONTROL: u16 = 335;
pub const TLV_C1G2_SINGULATION_CTRL: u16 = 336;
pub const TLV_C1G2_TAG_INV_AWARE_SING: u16 = 337;
pub const TLV_C1G2_TAG_SPEC: u16 = 338;
pub const TLV_C1G2_TARGET_TAG: u16 = 339;
pub const TLV_C1G2_READ: u16 = 341;
pub const TLV_C1G2_WRITE: u16 = 342;
pub const TLV_C1G2_KILL: u16 = 343;
pub const TLV_C1G2_LOCK: u16 = 344;
pub const TLV_C1G2_LOCK_PAYLOAD: u16 = 345;
pub const TLV_C1G2_BLK_ERASE: u16 = 346;
pub const TLV_C1G2_BLK_WRITE: u16 = 347;
pub const TLV_C1G2_EPC_MEMORY_SLCTOR: u16 = 348;
pub const TLV_C1G2_READ_OP_SPEC_RES: u16 = 349;
pub const TLV_C1G2_WRT_OP_SPEC_RES: u16 = 350;
pub const TLV_C1G2_KILL_OP_SPEC_RES: u16 = 351;
pub const TLV_C1G2_LOCK_OP_SPEC_RES: u16 = 352;
pub const TLV_C1G2_BLK_ERS_OP_SPC_RES: u16 = 353;
pub const TLV_C1G2_BLK_WRT_OP_SPC_RES: u16 = 354;
pub const TLV_LOOP_SPEC: u16 = 355;
pub const TLV_SPEC_LOOP_EVENT: u16 = 356;
pub const TLV_C1G2_RECOMMISSION: u16 = 357;
pub const TLV_C1G2_BLK_PERMALOCK: u16 = 358;
pub const TLV_C1G2_GET_BLK_PERMALOCK: u16 = 359;
pub const TLV_C1G2_RECOM_OP_SPEC_RES: u16 = 360;
pub const TLV_C1G2_BLK_PRL_OP_SPC_RES: u16 = 361;
pub const TLV_C1G2_BLK_PRL_STAT_RES: u16 = 362;
pub const TLV_MAX_RECEIVE_SENSE: u16 = 363;
pub const TLV_RF_SURVEY_FREQ_CAP: u16 = 365;
pub const TLV_CUSTOM_PARAMETER: u16 = 1023;

/* ---------------------------------------------------------------- *
 * TV parameter type codes
 * ---------------------------------------------------------------- */

pub const TV_ANTENNA_ID: u8 = 1;
pub const TV_FIRST_SEEN_TIME_UTC: u8 = 2;
pub const TV_FIRST_SEEN_TIME_UPTIME: u8 = 3;
pub const TV_LAST_SEEN_TIME_UTC: u8 = 4;
pub const TV_LAST_SEEN_TIME_UPTIME: u8 = 5;
pub const TV_PEAK_RSSI: u8 = 6;
pub const TV_CHANNEL_INDEX: u8 = 7;
pub const TV_TAG_SEEN_COUNT: u8 = 8;
pub const TV_RO_SPEC_ID: u8 = 9;
pub const TV_INVENTORY_PARAM_SPEC_ID: u8 = 10;
pub const TV_C1G2_CRC: u8 = 11;
pub const TV_C1G2_PC: u8 = 12;
pub const TV_EPC96: u8 = 13;
pub const TV_SPEC_INDEX: u8 = 14;
pub const TV_CLIENT_REQ_OP_SPEC_RES: u8 = 15;
pub const TV_ACCESS_SPEC_ID: u8 = 16;
pub const TV_OP_SPEC_ID: u8 = 17;
pub const TV_C1G2_SINGULATION_DET: u8 = 18;
pub const TV_C1G2_XPC_W1: u8 = 19;
pub const TV_C1G2_XPC_W2: u8 = 20;

/* ---------------------------------------------------------------- *
 * TLV payload layouts
 * ---------------------------------------------------------------- */

use FieldKind::*;

/// Container parameters: the whole payload is a nested parameter list.
static NESTED_ONLY: ParamLayout = layout_nested(&[]);

static TIMESTAMP: ParamLayout = layout(&[field("Microseconds", U64)]);

static GENERAL_DEVICE_CAP: ParamLayout = layout_nested(&[
    field_stay("Max number of antenna supported", U16),
    field("Can set antenna properties", Bool16(0x8000)),
    field("Has UTC clock capabilities", Bool16(0x4000)),
    field("Device manufacturer name", U32),
    field("Model name", U32),
    field("Reader firmware version", Utf8String),
]);

static MAX_RECEIVE_SENSE: ParamLayout = layout(&[field("Maximum sensitivity value", U16)]);

static RECEIVE_SENSE_ENTRY: ParamLayout = layout(&[
    field("Index", U16),
    field("Receive sensitivity value", U16),
]);

static ANTENNA_RCV_SENSE_RANGE: ParamLayout = layout(&[
    field("Antenna ID", U16),
    field("Receive sensitivity index min", U16),
    field("Receive sensitivity index max", U16),
]);

static ANTENNA_AIR_PROTO: ParamLayout = layout(&[
    field("Antenna ID", U16),
    field(
        "Protocol ID",
        ItemArray {
            count_name: "Number of protocols",
            item_size: 1,
        },
    ),
]);

static GPIO_CAPABILITIES: ParamLayout = layout(&[
    field("Number of GPI ports", U16),
    field("Number of GPO ports", U16),
]);

static LLRP_CAPABILITIES: ParamLayout = layout(&[
    field_stay("Can do RF survey", Bool8(0x80)),
    field_stay("Can report buffer fill warning", Bool8(0x40)),
    field_stay("Support client request OpSpec", Bool8(0x20)),
    field_stay("Can do tag inventory state aware singulation", Bool8(0x10)),
    field("Support event and report holding", Bool8(0x08)),
    field("Max priority level supported", U8),
    field("Client request OpSpec timeout", U16),
    field("Maximum number of ROSpecs", NoLimitU32),
    field("Maximum number of spec per ROSpec", NoLimitU32),
    field("Maximum number of Inventory Spec per AISpec", NoLimitU32),
    field("Maximum number of AccessSpec", NoLimitU32),
    field("Maximum number of OpSpec per AccessSpec", NoLimitU32),
]);

static REGU_CAPABILITIES: ParamLayout = layout_nested(&[
    field("Country code", U16),
    field("Communication standard", U16),
]);

static XMIT_POWER_LEVEL_ENTRY: ParamLayout = layout(&[
    field("Index", U16),
    field("Transmit power value", U16),
]);

static FREQ_INFORMATION: ParamLayout = layout_nested(&[field("Hopping", Bool8(0x80))]);

static FREQ_HOP_TABLE: ParamLayout = layout(&[
    field("Hop table ID", U8),
    field("Reserved for future use", Bytes(1)),
    field(
        "Frequency",
        ItemArray {
            count_name: "Number of hops",
            item_size: 4,
        },
    ),
]);

static FIXED_FREQ_TABLE: ParamLayout = layout(&[field(
    "Frequency",
    ItemArray {
        count_name: "Number of frequencies",
        item_size: 4,
    },
)]);

static RF_SURVEY_FREQ_CAP: ParamLayout = layout(&[
    field("Minimum frequency", U32),
    field("Maximum frequency", U32),
]);

static RO_SPEC: ParamLayout = layout_nested(&[
    field("ROSpec ID", U32),
    field("Priority", U8),
    field("Current state", U8),
]);

static RO_SPEC_START_TRIGGER: ParamLayout =
    layout_nested(&[field("ROSpec start trigger type", U8)]);

static PER_TRIGGER_VAL: ParamLayout = layout_nested(&[
    field("Offset", U32),
    field("Period", U32),
]);

static GPI_TRIGGER_VAL: ParamLayout = layout(&[
    field("GPI port number", U16),
    field("GPI event", Bool8(0x80)),
    field("Timeout", U32),
]);

static RO_SPEC_STOP_TRIGGER: ParamLayout = layout_nested(&[
    field("ROSpec stop trigger type", U8),
    field("Duration trigger value", U32),
]);

static AI_SPEC: ParamLayout = layout_nested(&[field(
    "Antenna ID",
    ItemArray {
        count_name: "Antenna count",
        item_size: 2,
    },
)]);

static AI_SPEC_STOP: ParamLayout = layout_nested(&[
    field("AISpec stop trigger type", U8),
    field("Duration trigger value", U32),
]);

static TAG_OBSERV_TRIGGER: ParamLayout = layout(&[
    field("Trigger type", U8),
    field("Reserved for future use", Bytes(1)),
    field("Number of tags", U16),
    field("Number of attempts", U16),
    field("T", U16),
    field("Timeout", U32),
]);

static INVENTORY_PARAM_SPEC: ParamLayout = layout_nested(&[
    field("Inventory parameter spec id", U16),
    field("Protocol ID", U8),
]);

static RF_SURVEY_SPEC: ParamLayout = layout_nested(&[
    field("Antenna ID", U16),
    field("Start frequency", U32),
    field("Stop frequency", U32),
]);

static RF_SURVEY_SPEC_STOP_TR: ParamLayout = layout(&[
    field("Stop trigger type", U8),
    field("Duration", U32),
    field("N", U32),
]);

static LOOP_SPEC: ParamLayout = layout(&[field("Loop count", U32)]);

static ACCESS_SPEC: ParamLayout = layout_nested(&[
    field("AccessSpec ID", U32),
    field("Antenna ID", U16),
    field("Protocol ID", U16),
    field("Current state", Bool8(0x80)),
    field("ROSpec ID", U32),
]);

static ACCESS_SPEC_STOP_TRIG: ParamLayout = layout(&[
    field("AccessSpec stop trigger", U8),
    field("Operation count value", U16),
]);

static CLIENT_REQ_OP_SPEC: ParamLayout = layout(&[field("OpSpec ID", U16)]);

static CLIENT_REQ_RESPONSE: ParamLayout = layout_nested(&[field("AccessSpec ID", U16)]);

static LLRP_CONF_STATE_VAL: ParamLayout = layout(&[field("Configuration value", U32)]);

static IDENT: ParamLayout = layout(&[
    field("ID type", U8),
    field("Reader ID", LenPrefixedBytes),
]);

static GPO_WRITE_DATA: ParamLayout = layout(&[
    field("GPO port number", U16),
    field("GPO data", Bool8(0x80)),
]);

static KEEPALIVE_SPEC: ParamLayout = layout(&[
    field("KeepAlive trigger type", U8),
    field("Time interval", U32),
]);

static ANTENNA_PROPS: ParamLayout = layout(&[
    field("Antenna connected", Bool8(0x80)),
    field("Antenna ID", U16),
    field("Antenna gain", U16),
]);

static ANTENNA_CONF: ParamLayout = layout_nested(&[field("Antenna ID", U16)]);

static RF_RECEIVER: ParamLayout = layout(&[field("Receiver sensitivity", U16)]);

static RF_TRANSMITTER: ParamLayout = layout(&[
    field("Hop table ID", U16),
    field("Channel index", U16),
    field("Transmit power value", U16),
]);

static GPI_PORT_CURRENT_STATE: ParamLayout = layout(&[
    field("GPI port number", U16),
    field("GPI config", Bool8(0x80)),
    field("GPI state", U8),
]);

static EVENTS_AND_REPORTS: ParamLayout =
    layout(&[field("Hold events and reports upon reconnect", Bool8(0x80))]);

static RO_REPORT_SPEC: ParamLayout = layout_nested(&[
    field("RO report trigger", U8),
    field("N", U16),
]);

static TAG_REPORT_CONTENT_SEL: ParamLayout = layout_nested(&[
    field_stay("Enable ROSpec ID", Bool16(0x8000)),
    field_stay("Enable spec index", Bool16(0x4000)),
    field_stay("Enable inventory spec ID", Bool16(0x2000)),
    field_stay("Enable antenna ID", Bool16(0x1000)),
    field_stay("Enable channel index", Bool16(0x0800)),
    field_stay("Enable peak RSSI", Bool16(0x0400)),
    field_stay("Enable first seen timestamp", Bool16(0x0200)),
    field_stay("Enable last seen timestamp", Bool16(0x0100)),
    field_stay("Enable tag seen count", Bool16(0x0080)),
    field("Enable AccessSpec ID", Bool16(0x0040)),
]);

static ACCESS_REPORT_SPEC: ParamLayout = layout(&[field("Access report trigger", U8)]);

static EPC_DATA: ParamLayout = layout(&[field("EPC", BitField)]);

static FREQ_RSSI_LEVEL_ENTRY: ParamLayout = layout_nested(&[
    field("Frequency", U32),
    field("Bandwidth", U32),
    field("Average RSSI", U8),
    field("Peak RSSI", U8),
]);

static EVENT_NOTIF_STATE: ParamLayout = layout(&[
    field("Event type", U16),
    field("Notification state", Bool8(0x80)),
]);

static HOPPING_EVENT: ParamLayout = layout(&[
    field("Hop table ID", U16),
    field("Next channel index", U16),
]);

static GPI_EVENT: ParamLayout = layout(&[
    field("GPI port number", U16),
    field("GPI event", Bool8(0x80)),
]);

static RO_SPEC_EVENT: ParamLayout = layout(&[
    field("Event type", U8),
    field("ROSpec ID", U32),
    field("Preempting ROSpec ID", U32),
]);

static REPORT_BUF_LEVEL_WARN: ParamLayout =
    layout(&[field("Report buffer percentage full", U8)]);

static EMPTY: ParamLayout = layout(&[]);

static READER_EXCEPTION_EVENT: ParamLayout = layout_nested(&[field("Message", Utf8String)]);

static RF_SURVEY_EVENT: ParamLayout = layout(&[
    field("Event type", U8),
    field("ROSpec ID", U32),
    field("Spec index", U16),
]);

static AI_SPEC_EVENT: ParamLayout = layout_nested(&[
    field("Event type", U8),
    field("ROSpec ID", U32),
    field("Spec index", U16),
]);

static ANTENNA_EVENT: ParamLayout = layout(&[
    field("Event type", U8),
    field("Antenna ID", U16),
]);

static CONN_ATTEMPT_EVENT: ParamLayout = layout(&[field("Status", U16)]);

static SPEC_LOOP_EVENT: ParamLayout = layout(&[
    field("ROSpec ID", U32),
    field("Loop count", U32),
]);

static LLRP_STATUS: ParamLayout = layout_nested(&[
    field("Status code", U16),
    field("Error description", Utf8String),
]);

static FIELD_ERROR: ParamLayout = layout(&[
    field("Field number", U16),
    field("Error code", U16),
]);

static PARAM_ERROR: ParamLayout = layout_nested(&[
    field("Parameter type", U16),
    field("Error code", U16),
]);

static C1G2_LLRP_CAP: ParamLayout = layout(&[
    field_stay("Can support block erase", Bool8(0x80)),
    field_stay("Can support block write", Bool8(0x40)),
    field_stay("Can support block permalock", Bool8(0x20)),
    field_stay("Can support tag recommissioning", Bool8(0x10)),
    field_stay("Can support UMI method 2", Bool8(0x08)),
    field("Can support XPC", Bool8(0x04)),
    field("Maximum number of select filters per query", NoLimitU16),
]);

static C1G2_UHF_RF_MD_TBL_ENT: ParamLayout = layout(&[
    field("Mode identifier", U32),
    field_stay("DR", Bool8(0x80)),
    field("EPC HAG T&C conformance", Bool8(0x40)),
    field("M", U8),
    field("Forward link modulation", U8),
    field("Spectral mask indicator", U8),
    field("BDR", U32),
    field("PIE", U32),
    field("Minimum tari", U32),
    field("Maximum tari", U32),
    field("Tari step", U32),
]);

static C1G2_INVENTORY_COMMAND: ParamLayout =
    layout_nested(&[field("Tag inventory state aware", Bool8(0x80))]);

static C1G2_FILTER: ParamLayout = layout_nested(&[field("T", U8)]);

static C1G2_TAG_INV_MASK: ParamLayout = layout(&[
    field("MB", U8),
    field("Pointer", U16),
    field("Tag mask", BitField),
]);

static C1G2_TAG_INV_AWARE_FLTR: ParamLayout = layout(&[
    field("Target", U8),
    field("Action", U8),
]);

static C1G2_TAG_INV_UNAWR_FLTR: ParamLayout = layout(&[field("Action", U8)]);

static C1G2_RF_CONTROL: ParamLayout = layout(&[
    field("Mode index", U16),
    field("Tari", U16),
]);

static C1G2_SINGULATION_CTRL: ParamLayout = layout_nested(&[
    field("Session", U8),
    field("Tag population", U16),
    field("Tag transit time", U32),
]);

static C1G2_TAG_INV_AWARE_SING: ParamLayout = layout(&[
    field_stay("I", Bool8(0x80)),
    field_stay("S", Bool8(0x40)),
    field("S_All", Bool8(0x20)),
]);

static C1G2_TARGET_TAG: ParamLayout = layout(&[
    field_stay("MB", U8),
    field("Match", Bool8(0x20)),
    field("Pointer", U16),
    field("Tag mask", BitField),
    field("Tag data", BitField),
]);

static C1G2_READ: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Word pointer", U16),
    field("Word count", U16),
]);

static C1G2_WRITE: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Word pointer", U16),
    field("Write data", WordArray),
]);

static C1G2_KILL: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Kill password", U32),
]);

static C1G2_RECOMMISSION: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Kill password", U32),
    field_stay("3", Bool8(0x04)),
    field_stay("2", Bool8(0x02)),
    field("L", Bool8(0x01)),
]);

static C1G2_LOCK: ParamLayout = layout_nested(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
]);

static C1G2_LOCK_PAYLOAD: ParamLayout = layout(&[
    field("Privilege", U8),
    field("Data field", U8),
]);

static C1G2_BLK_PERMALOCK: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Block pointer", U16),
    field("Block mask", WordArray),
]);

static C1G2_GET_BLK_PERMALOCK: ParamLayout = layout(&[
    field("OpSpec ID", U16),
    field("Access password", U32),
    field("MB", U8),
    field("Block pointer", U16),
    field("Block range", U16),
]);

static C1G2_EPC_MEMORY_SLCTOR: ParamLayout = layout(&[
    field_stay("Enable CRC", Bool8(0x80)),
    field_stay("Enable PC bits", Bool8(0x40)),
    field("Enable XPC bits", Bool8(0x20)),
]);

static C1G2_READ_OP_SPEC_RES: ParamLayout = layout(&[
    field("Result", U8),
    field("OpSpec ID", U16),
    field("Read data", WordArray),
]);

static C1G2_WRITE_OP_SPEC_RES: ParamLayout = layout(&[
    field("Result", U8),
    field("OpSpec ID", U16),
    field("Number of words written", U16),
]);

static OP_SPEC_RESULT: ParamLayout = layout(&[
    field("Result", U8),
    field("OpSpec ID", U16),
]);

static C1G2_BLK_PRL_STAT_RES: ParamLayout = layout(&[
    field("Result", U8),
    field("OpSpec ID", U16),
    field("Permalock status", WordArray),
]);

/// Payload schema for a TLV parameter type, or `None` for types this
/// decoder does not recognize (decoded as an opaque blob).
pub fn tlv_layout(type_code: u16) -> Option<&'static ParamLayout> {
    let layout = match type_code {
        TLV_RO_BOUND_SPEC
        | TLV_UHF_CAPABILITIES
        | TLV_ACCESS_COMMAND
        | TLV_TAG_REPORT_DATA
        | TLV_RF_SURVEY_REPORT_DATA
        | TLV_READER_EVENT_NOTI_SPEC
        | TLV_READER_EVENT_NOTI_DATA
        | TLV_C1G2_UHF_RF_MD_TBL
        | TLV_C1G2_TAG_SPEC => &NESTED_ONLY,
        TLV_UTC_TIMESTAMP | TLV_UPTIME => &TIMESTAMP,
        TLV_GENERAL_DEVICE_CAP => &GENERAL_DEVICE_CAP,
        TLV_MAX_RECEIVE_SENSE => &MAX_RECEIVE_SENSE,
        TLV_RECEIVE_SENSE_ENTRY => &RECEIVE_SENSE_ENTRY,
        TLV_ANTENNA_RCV_SENSE_RANGE => &ANTENNA_RCV_SENSE_RANGE,
        TLV_ANTENNA_AIR_PROTO => &ANTENNA_AIR_PROTO,
        TLV_GPIO_CAPABILITIES => &GPIO_CAPABILITIES,
        TLV_LLRP_CAPABILITIES => &LLRP_CAPABILITIES,
        TLV_REGU_CAPABILITIES => &REGU_CAPABILITIES,
        TLV_XMIT_POWER_LEVEL_ENTRY => &XMIT_POWER_LEVEL_ENTRY,
        TLV_FREQ_INFORMATION => &FREQ_INFORMATION,
        TLV_FREQ_HOP_TABLE => &FREQ_HOP_TABLE,
        TLV_FIXED_FREQ_TABLE => &FIXED_FREQ_TABLE,
        TLV_RF_SURVEY_FREQ_CAP => &RF_SURVEY_FREQ_CAP,
        TLV_RO_SPEC => &RO_SPEC,
        TLV_RO_SPEC_START_TRIGGER => &RO_SPEC_START_TRIGGER,
        TLV_PER_TRIGGER_VAL => &PER_TRIGGER_VAL,
        TLV_GPI_TRIGGER_VAL => &GPI_TRIGGER_VAL,
        TLV_RO_SPEC_STOP_TRIGGER => &RO_SPEC_STOP_TRIGGER,
        TLV_AI_SPEC => &AI_SPEC,
        TLV_AI_SPEC_STOP => &AI_SPEC_STOP,
        TLV_TAG_OBSERV_TRIGGER => &TAG_OBSERV_TRIGGER,
        TLV_INVENTORY_PARAM_SPEC => &INVENTORY_PARAM_SPEC,
        TLV_RF_SURVEY_SPEC => &RF_SURVEY_SPEC,
        TLV_RF_SURVEY_SPEC_STOP_TR => &RF_SURVEY_SPEC_STOP_TR,
        TLV_LOOP_SPEC => &LOOP_SPEC,
        TLV_ACCESS_SPEC => &ACCESS_SPEC,
        TLV_ACCESS_SPEC_STOP_TRIG => &ACCESS_SPEC_STOP_TRIG,
        TLV_CLIENT_REQ_OP_SPEC => &CLIENT_REQ_OP_SPEC,
        TLV_CLIENT_REQ_RESPONSE => &CLIENT_REQ_RESPONSE,
        TLV_LLRP_CONF_STATE_VAL => &LLRP_CONF_STATE_VAL,
        TLV_IDENT => &IDENT,
        TLV_GPO_WRITE_DATA => &GPO_WRITE_DATA,
        TLV_KEEPALIVE_SPEC => &KEEPALIVE_SPEC,
        TLV_ANTENNA_PROPS => &ANTENNA_PROPS,
        TLV_ANTENNA_CONF => &ANTENNA_CONF,
        TLV_RF_RECEIVER => &RF_RECEIVER,
        TLV_RF_TRANSMITTER => &RF_TRANSMITTER,
        TLV_GPI_PORT_CURRENT_STATE => &GPI_PORT_CURRENT_STATE,
        TLV_EVENTS_AND_REPORTS => &EVENTS_AND_REPORTS,
        TLV_RO_REPORT_SPEC => &RO_REPORT_SPEC,
        TLV_TAG_REPORT_CONTENT_SEL => &TAG_REPORT_CONTENT_SEL,
        TLV_ACCESS_REPORT_SPEC => &ACCESS_REPORT_SPEC,
        TLV_EPC_DATA => &EPC_DATA,
        TLV_FREQ_RSSI_LEVEL_ENTRY => &FREQ_RSSI_LEVEL_ENTRY,
        TLV_EVENT_NOTIF_STATE => &EVENT_NOTIF_STATE,
        TLV_HOPPING_EVENT => &HOPPING_EVENT,
        TLV_GPI_EVENT => &GPI_EVENT,
        TLV_RO_SPEC_EVENT => &RO_SPEC_EVENT,
        TLV_REPORT_BUF_LEVEL_WARN => &REPORT_BUF_LEVEL_WARN,
        TLV_REPORT_BUF_OVERFLOW_ERR | TLV_CONN_CLOSE_EVENT => &EMPTY,
        TLV_READER_EXCEPTION_EVENT => &READER_EXCEPTION_EVENT,
        TLV_RF_SURVEY_EVENT => &RF_SURVEY_EVENT,
        TLV_AI_SPEC_EVENT => &AI_SPEC_EVENT,
        TLV_ANTENNA_EVENT => &ANTENNA_EVENT,
        TLV_CONN_ATTEMPT_EVENT => &CONN_ATTEMPT_EVENT,
        TLV_SPEC_LOOP_EVENT => &SPEC_LOOP_EVENT,
        TLV_LLRP_STATUS => &LLRP_STATUS,
        TLV_FIELD_ERROR => &FIELD_ERROR,
        TLV_PARAM_ERROR => &PARAM_ERROR,
        TLV_C1G2_LLRP_CAP => &C1G2_LLRP_CAP,
        TLV_C1G2_UHF_RF_MD_TBL_ENT => &C1G2_UHF_RF_MD_TBL_ENT,
        TLV_C1G2_INVENTORY_COMMAND => &C1G2_INVENTORY_COMMAND,
        TLV_C1G2_FILTER => &C1G2_FILTER,
        TLV_C1G2_TAG_INV_MASK => &C1G2_TAG_INV_MASK,
        TLV_C1G2_TAG_INV_AWARE_FLTR => &C1G2_TAG_INV_AWARE_FLTR,
        TLV_C1G2_TAG_INV_UNAWR_FLTR => &C1G2_TAG_INV_UNAWR_FLTR,
        TLV_C1G2_RF_CONTROL => &C1G2_RF_CONTROL,
        TLV_C1G2_SINGULATION_CTRL => &C1G2_SINGULATION_CTRL,
        TLV_C1G2_TAG_INV_AWARE_SING => &C1G2_TAG_INV_AWARE_SING,
        TLV_C1G2_TARGET_TAG => &C1G2_TARGET_TAG,
        TLV_C1G2_READ | TLV_C1G2_BLK_ERASE => &C1G2_READ,
        TLV_C1G2_WRITE | TLV_C1G2_BLK_WRITE => &C1G2_WRITE,
        TLV_C1G2_KILL => &C1G2_KILL,
        TLV_C1G2_RECOMMISSION => &C1G2_RECOMMISSION,
        TLV_C1G2_LOCK => &C1G2_LOCK,
        TLV_C1G2_LOCK_PAYLOAD => &C1G2_LOCK_PAYLOAD,
        TLV_C1G2_BLK_PERMALOCK => &C1G2_BLK_PERMALOCK,
        TLV_C1G2_GET_BLK_PERMALOCK => &C1G2_GET_BLK_PERMALOCK,
        TLV_C1G2_EPC_MEMORY_SLCTOR => &C1G2_EPC_MEMORY_SLCTOR,
        TLV_C1G2_READ_OP_SPEC_RES => &C1G2_READ_OP_SPEC_RES,
        TLV_C1G2_WRT_OP_SPEC_RES | TLV_C1G2_BLK_WRT_OP_SPC_RES => &C1G2_WRITE_OP_SPEC_RES,
        TLV_C1G2_KILL_OP_SPEC_RES
        | TLV_C1G2_RECOM_OP_SPEC_RES
        | TLV_C1G2_LOCK_OP_SPEC_RES
        | TLV_C1G2_BLK_ERS_OP_SPC_RES
        | TLV_C1G2_BLK_PRL_OP_SPC_RES => &OP_SPEC_RESULT,
        TLV_C1G2_BLK_PRL_STAT_RES => &C1G2_BLK_PRL_STAT_RES,
        _ => return None,
    };
    Some(layout)
}

/* ---------------------------------------------------------------- *
 * TV payload layouts
 * ---------------------------------------------------------------- */

static TV_U16_ANTENNA: TvLayout = tv(2, &[field("Antenna ID", U16)]);
static TV_TIMESTAMP: TvLayout = tv(8, &[field("Microseconds", U64)]);
static TV_U8_PEAK_RSSI: TvLayout = tv(1, &[field("Peak RSSI", U8)]);
static TV_U16_CHANNEL: TvLayout = tv(2, &[field("Channel index", U16)]);
static TV_U16_TAG_COUNT: TvLayout = tv(2, &[field("Tag count", U16)]);
static TV_U32_RO_SPEC: TvLayout = tv(4, &[field("ROSpec ID", U32)]);
static TV_U16_INV_SPEC: TvLayout = tv(2, &[field("Inventory parameter spec id", U16)]);
static TV_U16_CRC: TvLayout = tv(2, &[field("CRC", U16)]);
static TV_U16_PC: TvLayout = tv(2, &[field("PC bits", U16)]);
static TV_EPC96_LAYOUT: TvLayout = tv(12, &[field("EPC", Bytes(12))]);
static TV_U16_SPEC_INDEX: TvLayout = tv(2, &[field("Spec index", U16)]);
static TV_U16_OP_SPEC: TvLayout = tv(2, &[field("OpSpec ID", U16)]);
static TV_U32_ACCESS_SPEC: TvLayout = tv(4, &[field("AccessSpec ID", U32)]);
static TV_SINGULATION: TvLayout = tv(
    4,
    &[
        field("Number of collisions", U16),
        field("Number of empty slots", U16),
    ],
);
static TV_U16_XPC_W1: TvLayout = tv(2, &[field("XPC-W1", U16)]);
static TV_U16_XPC_W2: TvLayout = tv(2, &[field("XPC-W2", U16)]);

/// Fixed payload schema for a TV parameter type.
///
/// TV parameters carry no length on the wire; this table is the protocol
/// constant that stands in for it. Unknown types return `None` and the
/// decoder consumes only the tag byte.
pub fn tv_layout(type_code: u8) -> Option<&'static TvLayout> {
    let layout = match type_code {
        TV_ANTENNA_ID => &TV_U16_ANTENNA,
        TV_FIRST_SEEN_TIME_UTC
        | TV_FIRST_SEEN_TIME_UPTIME
        | TV_LAST_SEEN_TIME_UTC
        | TV_LAST_SEEN_TIME_UPTIME => &TV_TIMESTAMP,
        TV_PEAK_RSSI => &TV_U8_PEAK_RSSI,
        TV_CHANNEL_INDEX => &TV_U16_CHANNEL,
        TV_TAG_SEEN_COUNT => &TV_U16_TAG_COUNT,
        TV_RO_SPEC_ID => &TV_U32_RO_SPEC,
        TV_INVENTORY_PARAM_SPEC_ID => &TV_U16_INV_SPEC,
        TV_C1G2_CRC => &TV_U16_CRC,
        TV_C1G2_PC => &TV_U16_PC,
        TV_EPC96 => &TV_EPC96_LAYOUT,
        TV_SPEC_INDEX => &TV_U16_SPEC_INDEX,
        TV_CLIENT_REQ_OP_SPEC_RES | TV_OP_SPEC_ID => &TV_U16_OP_SPEC,
        TV_ACCESS_SPEC_ID => &TV_U32_ACCESS_SPEC,
        TV_C1G2_SINGULATION_DET => &TV_SINGULATION,
        TV_C1G2_XPC_W1 => &TV_U16_XPC_W1,
        TV_C1G2_XPC_W2 => &TV_U16_XPC_W2,
        _ => return None,
    };
    Some(layout)
}

/* ---------------------------------------------------------------- *
 * Display name tables
 * ---------------------------------------------------------------- */

/// Human-readable name of a TLV parameter type.
pub fn tlv_type_name(type_code: u16) -> Option<&'static str> {
    Some(match type_code {
        TLV_UTC_TIMESTAMP => "UTC Timestamp",
        TLV_UPTIME => "Uptime",
        TLV_GENERAL_DEVICE_CAP => "General Device Capabilities",
        TLV_RECEIVE_SENSE_ENTRY => "Receive Sensitivity Entry",
        TLV_ANTENNA_AIR_PROTO => "Antenna Air Protocol",
        TLV_GPIO_CAPABILITIES => "GPIO Capabilities",
        TLV_LLRP_CAPABILITIES => "LLRP Capabilities",
        TLV_REGU_CAPABILITIES => "Regulatory Capabilities",
        TLV_UHF_CAPABILITIES => "UHF Capabilities",
        TLV_XMIT_POWER_LEVEL_ENTRY => "Transmit Power Level Entry",
        TLV_FREQ_INFORMATION => "Frequency Information",
        TLV_FREQ_HOP_TABLE => "Frequency Hop Table",
        TLV_FIXED_FREQ_TABLE => "Fixed Frequency Table",
        TLV_ANTENNA_RCV_SENSE_RANGE => "Antenna Receive Sensitivity Range",
        TLV_RO_SPEC => "RO Spec",
        TLV_RO_BOUND_SPEC => "RO Bound Spec",
        TLV_RO_SPEC_START_TRIGGER => "RO Spec Start Trigger",
        TLV_PER_TRIGGER_VAL => "Periodic Trigger Value",
        TLV_GPI_TRIGGER_VAL => "GPI Trigger Value",
        TLV_RO_SPEC_STOP_TRIGGER => "RO Spec Stop Trigger",
        TLV_AI_SPEC => "AI Spec",
        TLV_AI_SPEC_STOP => "AI Spec Stop",
        TLV_TAG_OBSERV_TRIGGER => "Tag Observation Trigger",
        TLV_INVENTORY_PARAM_SPEC => "Inventory Parameter Spec",
        TLV_RF_SURVEY_SPEC => "RF Survey Spec",
        TLV_RF_SURVEY_SPEC_STOP_TR => "RF Survey Spec Stop Trigger",
        TLV_ACCESS_SPEC => "Access Spec",
        TLV_ACCESS_SPEC_STOP_TRIG => "Access Spec Stop Trigger",
        TLV_ACCESS_COMMAND => "Access Command",
        TLV_CLIENT_REQ_OP_SPEC => "Client Request Op Spec",
        TLV_CLIENT_REQ_RESPONSE => "Client Request Response",
        TLV_LLRP_CONF_STATE_VAL => "LLRP Configuration State Value",
        TLV_IDENT => "Identification",
        TLV_GPO_WRITE_DATA => "GPO Write Data",
        TLV_KEEPALIVE_SPEC => "Keepalive Spec",
        TLV_ANTENNA_PROPS => "Antenna Properties",
        TLV_ANTENNA_CONF => "Antenna Configuration",
        TLV_RF_RECEIVER => "RF Receiver",
        TLV_RF_TRANSMITTER => "RF Transmitter",
        TLV_GPI_PORT_CURRENT_STATE => "GPI Port Current State",
        TLV_EVENTS_AND_REPORTS => "Events And Reports",
        TLV_RO_REPORT_SPEC => "RO Report Spec",
        TLV_TAG_REPORT_CONTENT_SEL => "Tag Report Content Selector",
        TLV_ACCESS_REPORT_SPEC => "Access Report Spec",
        TLV_TAG_REPORT_DATA => "Tag Report Data",
        TLV_EPC_DATA => "EPC Data",
        TLV_RF_SURVEY_REPORT_DATA => "RF Survey Report Data",
        TLV_FREQ_RSSI_LEVEL_ENTRY => "Frequency RSSI Level Entry",
        TLV_READER_EVENT_NOTI_SPEC => "Reader Event Notification Spec",
        TLV_EVENT_NOTIF_STATE => "Event Notification State",
        TLV_READER_EVENT_NOTI_DATA => "Reader Event Notification Data",
        TLV_HOPPING_EVENT => "Hopping Event",
        TLV_GPI_EVENT => "GPI Event",
        TLV_RO_SPEC_EVENT => "RO Spec Event",
        TLV_REPORT_BUF_LEVEL_WARN => "Report Buffer Level Warning Event",
        TLV_REPORT_BUF_OVERFLOW_ERR => "Report Buffer Overflow Error Event",
        TLV_READER_EXCEPTION_EVENT => "Reader Exception Event",
        TLV_RF_SURVEY_EVENT => "RF Survey Event",
        TLV_AI_SPEC_EVENT => "AI Spec Event",
        TLV_ANTENNA_EVENT => "Antenna Event",
        TLV_CONN_ATTEMPT_EVENT => "Connection Attempt Event",
        TLV_CONN_CLOSE_EVENT => "Connection Close Event",
        TLV_LLRP_STATUS => "LLRP Status",
        TLV_FIELD_ERROR => "Field Error",
        TLV_PARAM_ERROR => "Parameter Error",
        TLV_C1G2_LLRP_CAP => "C1G2 LLRP Capabilities",
        TLV_C1G2_UHF_RF_MD_TBL => "C1G2 UHF RF Mode Table",
        TLV_C1G2_UHF_RF_MD_TBL_ENT => "C1G2 UHF RF Mode Table Entry",
        TLV_C1G2_INVENTORY_COMMAND => "C1G2 Inventory Command",
        TLV_C1G2_FILTER => "C1G2 Filter",
        TLV_C1G2_TAG_INV_MASK => "C1G2 Tag Inventory Mask",
        TLV_C1G2_TAG_INV_AWARE_FLTR => "C1G2 Tag Inventory State-Aware Filter Action",
        TLV_C1G2_TAG_INV_UNAWR_FLTR => "C1G2 Tag Inventory State-Unaware Filter Action",
        TLV_C1G2_RF_CONTROL => "C1G2 RF Control",
        TLV_C1G2_SINGULATION_CTRL => "C1G2 Singulation Control",
        TLV_C1G2_TAG_INV_AWARE_SING => "C1G2 Tag Inventory State-Aware Singulation",
        TLV_C1G2_TAG_SPEC => "C1G2 Tag Spec",
        TLV_C1G2_TARGET_TAG => "C1G2 Target Tag",
        TLV_C1G2_READ => "C1G2 Read",
        TLV_C1G2_WRITE => "C1G2 Write",
        TLV_C1G2_KILL => "C1G2 Kill",
        TLV_C1G2_LOCK => "C1G2 Lock",
        TLV_C1G2_LOCK_PAYLOAD => "C1G2 Lock Payload",
        TLV_C1G2_BLK_ERASE => "C1G2 Block Erase",
        TLV_C1G2_BLK_WRITE => "C1G2 Block Write",
        TLV_C1G2_EPC_MEMORY_SLCTOR => "C1G2 EPC Memory Selector",
        TLV_C1G2_READ_OP_SPEC_RES => "C1G2 Read Op Spec Result",
        TLV_C1G2_WRT_OP_SPEC_RES => "C1G2 Write Op Spec Result",
        TLV_C1G2_KILL_OP_SPEC_RES => "C1G2 Kill Op Spec Result",
        TLV_C1G2_LOCK_OP_SPEC_RES => "C1G2 Lock Op Spec Result",
        TLV_C1G2_BLK_ERS_OP_SPC_RES => "C1G2 Block Erase Op Spec Result",
        TLV_C1G2_BLK_WRT_OP_SPC_RES => "C1G2 Block Write Op Spec Result",
        TLV_LOOP_SPEC => "Loop Spec",
        TLV_SPEC_LOOP_EVENT => "Spec Loop Event",
        TLV_C1G2_RECOMMISSION => "C1G2 Recommission",
        TLV_C1G2_BLK_PERMALOCK => "C1G2 Block Permalock",
        TLV_C1G2_GET_BLK_PERMALOCK => "C1G2 Get Block Permalock Status",
        TLV_C1G2_RECOM_OP_SPEC_RES => "C1G2 Recommission Op Spec Result",
        TLV_C1G2_BLK_PRL_OP_SPC_RES => "C1G2 Block Permalock Op Spec Result",
        TLV_C1G2_BLK_PRL_STAT_RES => "C1G2 Block Permalock Status Op Spec Result",
        TLV_MAX_RECEIVE_SENSE => "Maximum Receive Sensitivity",
        TLV_RF_SURVEY_FREQ_CAP => "RF Survey Frequency Capabilities",
        TLV_CUSTOM_PARAMETER => "Custom Parameter",
        _ => return None,
    })
}

/// Human-readable name of a TV parameter type.
pub fn tv_type_name(type_code: u8) -> Option<&'static str> {
    Some(match type_code {
        TV_ANTENNA_ID => "Antenna ID",
        TV_FIRST_SEEN_TIME_UTC => "First Seen Timestamp UTC",
        TV_FIRST_SEEN_TIME_UPTIME => "First Seen Timestamp Uptime",
        TV_LAST_SEEN_TIME_UTC => "Last Seen Timestamp UTC",
        TV_LAST_SEEN_TIME_UPTIME => "Last Seen Timestamp Uptime",
        TV_PEAK_RSSI => "Peak RSSI",
        TV_CHANNEL_INDEX => "Channel Index",
        TV_TAG_SEEN_COUNT => "Tag Seen Count",
        TV_RO_SPEC_ID => "RO Spec ID",
        TV_INVENTORY_PARAM_SPEC_ID => "Inventory Parameter Spec ID",
        TV_C1G2_CRC => "C1G2 CRC",
        TV_C1G2_PC => "C1G2 PC",
        TV_EPC96 => "EPC-96",
        TV_SPEC_INDEX => "Spec Index",
        TV_CLIENT_REQ_OP_SPEC_RES => "Client Request Op Spec Result",
        TV_ACCESS_SPEC_ID => "Access Spec ID",
        TV_OP_SPEC_ID => "Op Spec ID",
        TV_C1G2_SINGULATION_DET => "C1G2 Singulation Details",
        TV_C1G2_XPC_W1 => "C1G2 XPC W1",
        TV_C1G2_XPC_W2 => "C1G2 XPC W2",
        _ => return None,
    })
}

/// Protocol version names.
pub fn version_name(version: u8) -> Option<&'static str> {
    match version {
        0x01 => Some("1.0.1"),
        0x02 => Some("1.1"),
        _ => None,
    }
}

/// GET_READER_CAPABILITIES requested-data selector names.
pub fn capability_request_name(value: u8) -> Option<&'static str> {
    Some(match value {
        0 => "All",
        1 => "General Device Capabilities",
        2 => "LLRP Capabilities",
        3 => "Regulatory Capabilities",
        4 => "Air Protocol LLRP Capabilities",
        _ => return None,
    })
}

/// GET_READER_CONFIG requested-data selector names.
pub fn config_request_name(value: u8) -> Option<&'static str> {
    Some(match value {
        0 => "All",
        1 => "Identification",
        2 => "Antenna Properties",
        3 => "Antenna Configuration",
        4 => "RO Report Spec",
        5 => "Reader Event Notification Spec",
        6 => "Access Report Spec",
        7 => "LLRP Configuration State",
        8 => "Keepalive Spec",
        9 => "GPI Port Current State",
        10 => "GPO Write Data",
        11 => "Events and Reports",
        _ => return None,
    })
}

/// LLRP status code names (M_/P_/A_/R_ namespaces).
pub fn status_code_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "M_Success",
        100 => "M_ParameterError",
        101 => "M_FieldError",
        102 => "M_UnexpectedParameter",
        103 => "M_MissingParameter",
        104 => "M_DuplicateParameter",
        105 => "M_OverflowParameter",
        106 => "M_OverflowField",
        107 => "M_UnknownParameter",
        108 => "M_UnknownField",
        109 => "M_UnsupportedMessage",
        110 => "M_UnsupportedVersion",
        111 => "M_UnsupportedParameter",
        200 => "P_ParameterError",
        201 => "P_FieldError",
        202 => "P_UnexpectedParameter",
        203 => "P_MissingParameter",
        204 => "P_DuplicateParameter",
        205 => "P_OverflowParameter",
        206 => "P_OverflowField",
        207 => "P_UnknownParameter",
        208 => "P_UnknownField",
        209 => "P_UnsupportedParameter",
        300 => "A_Invalid",
        301 => "A_OutOfRange",
        401 => "R_DeviceError",
        _ => return None,
    })
}

/// Connection attempt event status names.
pub fn connection_status_name(code: u16) -> Option<&'static str> {
    Some(match code {
        0 => "Success",
        1 => "Failed, a reader initiated connection already exists",
        2 => "Failed, a client initiated connection already exists",
        3 => "Failed, reason other than a connection already exists",
        4 => "Another connection attempted",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_types_have_nested_payloads() {
        for code in [
            TLV_RO_BOUND_SPEC,
            TLV_UHF_CAPABILITIES,
            TLV_ACCESS_COMMAND,
            TLV_TAG_REPORT_DATA,
            TLV_C1G2_TAG_SPEC,
        ] {
            let layout = tlv_layout(code).unwrap();
            assert!(layout.trailing_params, "type {} should nest", code);
            assert!(layout.fields.is_empty());
        }
    }

    #[test]
    fn every_known_tv_type_has_a_name_and_layout() {
        for code in 1..=20u8 {
            assert!(tv_layout(code).is_some(), "missing TV layout for {}", code);
            assert!(tv_type_name(code).is_some(), "missing TV name for {}", code);
        }
        assert!(tv_layout(21).is_none());
        assert!(tv_layout(0x7F).is_none());
    }

    #[test]
    fn tv_lengths_match_the_wire_constants() {
        let expect = [
            (TV_ANTENNA_ID, 2),
            (TV_FIRST_SEEN_TIME_UTC, 8),
            (TV_FIRST_SEEN_TIME_UPTIME, 8),
            (TV_LAST_SEEN_TIME_UTC, 8),
            (TV_LAST_SEEN_TIME_UPTIME, 8),
            (TV_PEAK_RSSI, 1),
            (TV_CHANNEL_INDEX, 2),
            (TV_TAG_SEEN_COUNT, 2),
            (TV_RO_SPEC_ID, 4),
            (TV_INVENTORY_PARAM_SPEC_ID, 2),
            (TV_C1G2_CRC, 2),
            (TV_C1G2_PC, 2),
            (TV_EPC96, 12),
            (TV_SPEC_INDEX, 2),
            (TV_CLIENT_REQ_OP_SPEC_RES, 2),
            (TV_ACCESS_SPEC_ID, 4),
            (TV_OP_SPEC_ID, 2),
            (TV_C1G2_SINGULATION_DET, 4),
            (TV_C1G2_XPC_W1, 2),
            (TV_C1G2_XPC_W2, 2),
        ];
        for (code, len) in expect {
            assert_eq!(tv_layout(code).unwrap().len, len, "TV type {}", code);
        }
    }

    #[test]
    fn unknown_tlv_types_are_unregistered() {
        assert!(tlv_layout(0).is_none());
        assert!(tlv_layout(500).is_none());
        // The custom-parameter escape hatch is dispatched by the decoder,
        // not the table.
        assert!(tlv_layout(TLV_CUSTOM_PARAMETER).is_none());
    }
}
