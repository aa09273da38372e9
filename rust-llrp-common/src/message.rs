//! LLRP message header and message-level dispatch.
//!
//! A message is a 10-byte fixed header (3-bit version and 10-bit type packed
//! into the first two bytes, 32-bit total length, 32-bit id) followed by a
//! type-specific body. Each message type has one of a handful of body
//! shapes; most end in a parameter sequence handed to
//! [`Decoder::decode_parameters`].

use log::{debug, trace, warn};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::cursor::ByteCursor;
use crate::error::Error;
use crate::layout;
use crate::metrics::LlrpMetrics;
use crate::param::push_opaque;
use crate::report::{ByteSpan, DecodedField, DecodedMessage, Diagnostic, FieldNote, FieldValue};
use crate::vendor::VendorRegistry;
use crate::Result;

/// TCP port assigned to LLRP.
pub const LLRP_PORT: u16 = 5084;

/// Fixed message header length in bytes.
pub const HEADER_LEN: usize = 10;

/// Sentinel meaning "all ROSpecs" / "all antennas" / "all ports" in
/// message-level scope fields.
pub const SCOPE_ALL: u32 = 0;

/* ---------------------------------------------------------------- *
 * Header
 * ---------------------------------------------------------------- */

/// The fixed 10-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    /// 3-bit protocol version.
    pub version: u8,
    /// 10-bit message type code.
    pub type_code: u16,
    /// Total message length in bytes, this header included.
    pub length: u32,
    /// Correlation identifier echoed in responses.
    pub id: u32,
}

impl MessageHeader {
    /// Parse the header at the start of `buf`.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            return Err(Error::Message(format!(
                "message header requires {} bytes, have {}",
                HEADER_LEN,
                buf.len()
            )));
        }
        let cur = ByteCursor::new(buf);
        let word = cur.u16(0).unwrap_or(0);
        Ok(Self {
            version: ((word >> 10) & 0x07) as u8,
            type_code: word & 0x03FF,
            length: cur.u32(2).unwrap_or(0),
            id: cur.u32(6).unwrap_or(0),
        })
    }
}

/* ---------------------------------------------------------------- *
 * Message types
 * ---------------------------------------------------------------- */

/// Every message type of the base protocol.
///
/// The enum is closed: a wire code is validated through [`from_code`]
/// before any body decoding happens, so the dispatch below cannot see a
/// type it has no shape for.
///
/// [`from_code`]: MessageType::from_code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageType {
    GetReaderCapabilities,
    GetReaderConfig,
    SetReaderConfig,
    CloseConnectionResponse,
    GetReaderCapabilitiesResponse,
    GetReaderConfigResponse,
    SetReaderConfigResponse,
    CloseConnection,
    AddRoSpec,
    DeleteRoSpec,
    StartRoSpec,
    StopRoSpec,
    EnableRoSpec,
    DisableRoSpec,
    GetRoSpecs,
    AddRoSpecResponse,
    DeleteRoSpecResponse,
    StartRoSpecResponse,
    StopRoSpecResponse,
    EnableRoSpecResponse,
    DisableRoSpecResponse,
    GetRoSpecsResponse,
    AddAccessSpec,
    DeleteAccessSpec,
    EnableAccessSpec,
    DisableAccessSpec,
    GetAccessSpecs,
    ClientRequestOp,
    GetSupportedVersion,
    SetProtocolVersion,
    AddAccessSpecResponse,
    DeleteAccessSpecResponse,
    EnableAccessSpecResponse,
    DisableAccessSpecResponse,
    GetAccessSpecsResponse,
    ClientRequestOpResponse,
    GetSupportedVersionResponse,
    SetProtocolVersionResponse,
    GetReport,
    RoAccessReport,
    Keepalive,
    ReaderEventNotification,
    EnableEventsAndReports,
    KeepaliveAck,
    ErrorMessage,
    CustomMessage,
}

impl MessageType {
    /// Validate a 10-bit wire code into a message type.
    pub fn from_code(code: u16) -> Option<Self> {
        use MessageType::*;
        Some(match code {
            1 => GetReaderCapabilities,
            2 => GetReaderConfig,
            3 => SetReaderConfig,
            4 => CloseConnectionResponse,
            11 => GetReaderCapabilitiesResponse,
            12 => GetReaderConfigResponse,
            13 => SetReaderConfigResponse,
            14 => CloseConnection,
            20 => AddRoSpec,
            21 => DeleteRoSpec,
            22 => StartRoSpec,
            23 => StopRoSpec,
            24 => EnableRoSpec,
            25 => DisableRoSpec,
            26 => GetRoSpecs,
            30 => AddRoSpecResponse,
            31 => DeleteRoSpecResponse,
            32 => StartRoSpecResponse,
            33 => StopRoSpecResponse,
            34 => EnableRoSpecResponse,
            35 => DisableRoSpecResponse,
            36 => GetRoSpecsResponse,
            40 => AddAccessSpec,
            41 => DeleteAccessSpec,
            42 => EnableAccessSpec,
            43 => DisableAccessSpec,
            44 => GetAccessSpecs,
            45 => ClientRequestOp,
            46 => GetSupportedVersion,
            47 => SetProtocolVersion,
            50 => AddAccessSpecResponse,
            51 => DeleteAccessSpecResponse,
            52 => EnableAccessSpecResponse,
            53 => DisableAccessSpecResponse,
            54 => GetAccessSpecsResponse,
            55 => ClientRequestOpResponse,
            56 => GetSupportedVersionResponse,
            57 => SetProtocolVersionResponse,
            60 => GetReport,
            61 => RoAccessReport,
            62 => Keepalive,
            63 => ReaderEventNotification,
            64 => EnableEventsAndReports,
            72 => KeepaliveAck,
            100 => ErrorMessage,
            1023 => CustomMessage,
            _ => return None,
        })
    }

    pub fn code(self) -> u16 {
        use MessageType::*;
        match self {
            GetReaderCapabilities => 1,
            GetReaderConfig => 2,
            SetReaderConfig => 3,
            CloseConnectionResponse => 4,
            GetReaderCapabilitiesResponse => 11,
            GetReaderConfigResponse => 12,
            SetReaderConfigResponse => 13,
            CloseConnection => 14,
            AddRoSpec => 20,
            DeleteRoSpec => 21,
            StartRoSpec => 22,
            StopRoSpec => 23,
            EnableRoSpec => 24,
            DisableRoSpec => 25,
            GetRoSpecs => 26,
            AddRoSpecResponse => 30,
            DeleteRoSpecResponse => 31,
            StartRoSpecResponse => 32,
            StopRoSpecResponse => 33,
            EnableRoSpecResponse => 34,
            DisableRoSpecResponse => 35,
            GetRoSpecsResponse => 36,
            AddAccessSpec => 40,
            DeleteAccessSpec => 41,
            EnableAccessSpec => 42,
            DisableAccessSpec => 43,
            GetAccessSpecs => 44,
            ClientRequestOp => 45,
            GetSupportedVersion => 46,
            SetProtocolVersion => 47,
            AddAccessSpecResponse => 50,
            DeleteAccessSpecResponse => 51,
            EnableAccessSpecResponse => 52,
            DisableAccessSpecResponse => 53,
            GetAccessSpecsResponse => 54,
            ClientRequestOpResponse => 55,
            GetSupportedVersionResponse => 56,
            SetProtocolVersionResponse => 57,
            GetReport => 60,
            RoAccessReport => 61,
            Keepalive => 62,
            ReaderEventNotification => 63,
            EnableEventsAndReports => 64,
            KeepaliveAck => 72,
            ErrorMessage => 100,
            CustomMessage => 1023,
        }
    }

    pub fn name(self) -> &'static str {
        use MessageType::*;
        match self {
            GetReaderCapabilities => "Get Reader Capabilities",
            GetReaderConfig => "Get Reader Config",
            SetReaderConfig => "Set Reader Config",
            CloseConnectionResponse => "Close Connection Response",
            GetReaderCapabilitiesResponse => "Get Reader Capabilities Response",
            GetReaderConfigResponse => "Get Reader Config Response",
            SetReaderConfigResponse => "Set Reader Config Response",
            CloseConnection => "Close Connection",
            AddRoSpec => "Add ROSpec",
            DeleteRoSpec => "Delete ROSpec",
            StartRoSpec => "Start ROSpec",
            StopRoSpec => "Stop ROSpec",
            EnableRoSpec => "Enable ROSpec",
            DisableRoSpec => "Disable ROSpec",
            GetRoSpecs => "Get ROSpecs",
            AddRoSpecResponse => "Add ROSpec Response",
            DeleteRoSpecResponse => "Delete ROSpec Response",
            StartRoSpecResponse => "Start ROSpec Response",
            StopRoSpecResponse => "Stop ROSpec Response",
            EnableRoSpecResponse => "Enable ROSpec Response",
            DisableRoSpecResponse => "Disable ROSpec Response",
            GetRoSpecsResponse => "Get ROSpecs Response",
            AddAccessSpec => "Add AccessSpec",
            DeleteAccessSpec => "Delete AccessSpec",
            EnableAccessSpec => "Enable AccessSpec",
            DisableAccessSpec => "Disable AccessSpec",
            GetAccessSpecs => "Get AccessSpecs",
            ClientRequestOp => "Client Request OP",
            GetSupportedVersion => "Get Supported Version",
            SetProtocolVersion => "Set Protocol Version",
            AddAccessSpecResponse => "Add AccessSpec Response",
            DeleteAccessSpecResponse => "Delete AccessSpec Response",
            EnableAccessSpecResponse => "Enable AccessSpec Response",
            DisableAccessSpecResponse => "Disable AccessSpec Response",
            GetAccessSpecsResponse => "Get AccessSpecs Response",
            ClientRequestOpResponse => "Client Request OP Response",
            GetSupportedVersionResponse => "Get Supported Version Response",
            SetProtocolVersionResponse => "Set Protocol Version Response",
            GetReport => "Get Report",
            RoAccessReport => "RO Access Report",
            Keepalive => "Keepalive",
            ReaderEventNotification => "Reader Event Notification",
            EnableEventsAndReports => "Enable Events And Reports",
            KeepaliveAck => "Keepalive Ack",
            ErrorMessage => "Error Message",
            CustomMessage => "Custom Message",
        }
    }
}

/// Body shape of a message type, driving type-specific decoding.
enum MessageShape {
    /// The whole body is a parameter sequence.
    ParametersOnly,
    /// One 32-bit ROSpec ID, zero meaning all; no parameters.
    RoSpecId,
    /// One 32-bit AccessSpec ID, zero meaning all; no parameters.
    AccessSpecId,
    /// Requested-capabilities selector byte, then parameters.
    ReaderCapabilities,
    /// Antenna/GPI/GPO scopes gated by a requested-data selector, then
    /// parameters.
    ReaderConfig,
    /// Restore-factory-settings flag byte, then parameters.
    SetReaderConfig,
    /// One version byte, nothing else.
    SetProtocolVersion,
    /// Current and supported version bytes, then parameters.
    SupportedVersionResponse,
    /// 32-bit vendor ID, vendor sub-decoder, then parameters.
    Custom,
    /// Header only.
    HeaderOnly,
}

fn shape(mtype: MessageType) -> MessageShape {
    use MessageType::*;
    match mtype {
        CloseConnectionResponse
        | GetReaderCapabilitiesResponse
        | AddRoSpec
        | AddRoSpecResponse
        | DeleteRoSpecResponse
        | StartRoSpecResponse
        | StopRoSpecResponse
        | EnableRoSpecResponse
        | DisableRoSpecResponse
        | GetRoSpecsResponse
        | AddAccessSpec
        | AddAccessSpecResponse
        | DeleteAccessSpecResponse
        | EnableAccessSpecResponse
        | DisableAccessSpecResponse
        | GetAccessSpecs
        | ClientRequestOp
        | ClientRequestOpResponse
        | RoAccessReport
        | ReaderEventNotification
        | ErrorMessage
        | GetReaderConfigResponse
        | SetReaderConfigResponse
        | SetProtocolVersionResponse
        | GetAccessSpecsResponse
        | GetReport
        | EnableEventsAndReports => MessageShape::ParametersOnly,
        StartRoSpec | StopRoSpec | EnableRoSpec | DisableRoSpec | DeleteRoSpec => {
            MessageShape::RoSpecId
        }
        EnableAccessSpec | DeleteAccessSpec | DisableAccessSpec => MessageShape::AccessSpecId,
        GetReaderCapabilities => MessageShape::ReaderCapabilities,
        GetReaderConfig => MessageShape::ReaderConfig,
        SetReaderConfig => MessageShape::SetReaderConfig,
        SetProtocolVersion => MessageShape::SetProtocolVersion,
        GetSupportedVersionResponse => MessageShape::SupportedVersionResponse,
        CustomMessage => MessageShape::Custom,
        Keepalive | KeepaliveAck | CloseConnection | GetRoSpecs | GetSupportedVersion => {
            MessageShape::HeaderOnly
        }
    }
}

/* ---------------------------------------------------------------- *
 * Decoder
 * ---------------------------------------------------------------- */

/// The LLRP message decoder.
///
/// Holds the vendor registry and a metrics handle; both are read-only after
/// construction, so one decoder can serve any number of messages, from any
/// number of threads, without locking.
#[derive(Debug)]
pub struct Decoder {
    pub(crate) vendors: VendorRegistry,
    pub(crate) metrics: Arc<LlrpMetrics>,
}

impl Decoder {
    /// A decoder with the in-tree vendors registered.
    pub fn new() -> Self {
        Self::with_registry(VendorRegistry::with_default_vendors())
    }

    /// A decoder with a caller-assembled vendor registry.
    pub fn with_registry(vendors: VendorRegistry) -> Self {
        Self {
            vendors,
            metrics: Arc::new(LlrpMetrics::new()),
        }
    }

    pub fn metrics(&self) -> Arc<LlrpMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Decode one complete framed message.
    ///
    /// `buf` must hold exactly one message, header included, as delivered
    /// by the framing layer. The only error is a buffer too short for the
    /// fixed header; everything beyond that is reported as diagnostics on
    /// the returned message.
    pub fn decode_frame(&self, buf: &[u8]) -> Result<DecodedMessage> {
        let started = Instant::now();
        let header = MessageHeader::parse(buf)?;
        let mtype = MessageType::from_code(header.type_code);

        trace!(
            "decoding message type {} ({:?}), id {}, {} bytes",
            header.type_code,
            mtype,
            header.id,
            buf.len()
        );

        let mut msg = DecodedMessage {
            version: header.version,
            type_code: header.type_code,
            type_name: mtype.map(|t| t.name()),
            declared_len: header.length,
            id: header.id,
            fields: Vec::new(),
            params: Vec::new(),
            diagnostics: Vec::new(),
        };

        if header.length as usize != buf.len() {
            msg.diagnostics.push(Diagnostic::error(
                format!(
                    "incorrect length field: claimed {}, but have {}",
                    header.length,
                    buf.len()
                ),
                ByteSpan::new(2, 4),
            ));
        }

        match mtype {
            Some(t) => self.decode_message(t, buf, &mut msg),
            None => {
                warn!("unrecognized message type {}", header.type_code);
                msg.diagnostics.push(Diagnostic::warning(
                    format!(
                        "unrecognized message type {}, body not decoded",
                        header.type_code
                    ),
                    ByteSpan::new(0, 2),
                ));
            }
        }

        self.metrics.messages_decoded.increment();
        self.metrics
            .diagnostics_emitted
            .add(msg.all_diagnostics().len() as u64);
        self.metrics
            .decode_time_us
            .observe(started.elapsed().as_micros() as u64);

        Ok(msg)
    }

    /// Decode the type-specific body of a validated message.
    fn decode_message(&self, mtype: MessageType, buf: &[u8], msg: &mut DecodedMessage) {
        let cur = ByteCursor::new(buf);
        let end = buf.len();
        let mut offset = HEADER_LEN.min(end);
        let mut ends_with_parameters = false;

        match shape(mtype) {
            MessageShape::ParametersOnly => ends_with_parameters = true,

            MessageShape::RoSpecId => {
                offset = self.decode_scoped_u32(&cur, offset, end, "ROSpec ID", msg);
            }

            MessageShape::AccessSpecId => {
                offset = self.decode_scoped_u32(&cur, offset, end, "AccessSpec ID", msg);
            }

            MessageShape::ReaderCapabilities => {
                if let Some(v) = cur.u8(offset).filter(|_| offset < end) {
                    let mut field = DecodedField::new(
                        "Requested capabilities",
                        ByteSpan::new(offset, 1),
                        FieldValue::U8(v),
                    );
                    field.label = layout::capability_request_name(v);
                    msg.fields.push(field);
                    offset += 1;
                } else {
                    truncated_body(msg, "Requested capabilities", offset, end);
                    offset = end;
                }
                ends_with_parameters = true;
            }

            MessageShape::ReaderConfig => {
                offset = self.decode_get_reader_config(&cur, offset, end, msg);
                ends_with_parameters = true;
            }

            MessageShape::SetReaderConfig => {
                if let Some(v) = cur.u8(offset).filter(|_| offset < end) {
                    msg.fields.push(DecodedField::new(
                        "Restore factory settings",
                        ByteSpan::new(offset, 1),
                        FieldValue::Bool(v & 0x80 != 0),
                    ));
                    offset += 1;
                } else {
                    truncated_body(msg, "Restore factory settings", offset, end);
                    offset = end;
                }
                ends_with_parameters = true;
            }

            MessageShape::SetProtocolVersion => {
                if let Some(v) = cur.u8(offset).filter(|_| offset < end) {
                    let version = (v >> 2) & 0x07;
                    let mut field = DecodedField::new(
                        "Protocol version",
                        ByteSpan::new(offset, 1),
                        FieldValue::U8(version),
                    );
                    field.label = layout::version_name(version);
                    msg.fields.push(field);
                    offset += 1;
                } else {
                    truncated_body(msg, "Protocol version", offset, end);
                    offset = end;
                }
            }

            MessageShape::SupportedVersionResponse => {
                for name in ["Current version", "Supported version"] {
                    if let Some(v) = cur.u8(offset).filter(|_| offset < end) {
                        let mut field =
                            DecodedField::new(name, ByteSpan::new(offset, 1), FieldValue::U8(v));
                        field.label = layout::version_name(v);
                        msg.fields.push(field);
                        offset += 1;
                    } else {
                        truncated_body(msg, name, offset, end);
                        offset = end;
                        break;
                    }
                }
                ends_with_parameters = true;
            }

            MessageShape::Custom => {
                if offset + 4 <= end {
                    let vendor = cur.u32(offset).unwrap_or(0);
                    let mut field = DecodedField::new(
                        "Vendor ID",
                        ByteSpan::new(offset, 4),
                        FieldValue::U32(vendor),
                    );
                    field.label = self.vendors.vendor_name(vendor);
                    msg.fields.push(field);
                    offset += 4;

                    match self.vendors.get(vendor) {
                        Some(handler) => {
                            offset = handler.decode_message(&cur, offset, end, msg);
                            ends_with_parameters = true;
                        }
                        None => {
                            debug!("no vendor decoder registered for vendor {}", vendor);
                            push_opaque(&cur, offset, end, &mut msg.fields);
                            offset = end;
                        }
                    }
                } else {
                    truncated_body(msg, "Vendor ID", offset, end);
                    offset = end;
                }
            }

            MessageShape::HeaderOnly => {}
        }

        if ends_with_parameters {
            let (params, next) = self.decode_parameters_at(&cur, offset, end, 0);
            msg.params = params;
            offset = next;
        }

        if offset != end {
            msg.diagnostics.push(Diagnostic::error(
                format!(
                    "incorrect message length: {} bytes decoded, but {} bytes available",
                    offset, end
                ),
                ByteSpan::new(offset.min(end), end.saturating_sub(offset)),
            ));
        }
    }

    /// A 32-bit spec-id field where raw zero addresses every spec of the
    /// kind.
    fn decode_scoped_u32(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        name: &'static str,
        msg: &mut DecodedMessage,
    ) -> usize {
        if offset + 4 > end {
            truncated_body(msg, name, offset, end);
            return end;
        }
        let v = cur.u32(offset).unwrap_or(0);
        let span = ByteSpan::new(offset, 4);
        let field = if v == SCOPE_ALL {
            DecodedField::with_note(name, span, FieldValue::U32(v), FieldNote::AllOfKind)
        } else {
            DecodedField::new(name, span, FieldValue::U32(v))
        };
        msg.fields.push(field);
        offset + 4
    }

    /// GET_READER_CONFIG: antenna, requested-data selector, GPI and GPO
    /// scopes. All four are decoded unconditionally; the selector decides
    /// which scopes are annotated as ignored.
    fn decode_get_reader_config(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        msg: &mut DecodedMessage,
    ) -> usize {
        if offset + 7 > end {
            truncated_body(msg, "Requested configuration", offset, end);
            return end;
        }

        let antenna = cur.u16(offset).unwrap_or(0);
        let selector = cur.u8(offset + 2).unwrap_or(0);
        let gpi = cur.u16(offset + 3).unwrap_or(0);
        let gpo = cur.u16(offset + 5).unwrap_or(0);

        // Which scope fields the selector makes relevant. Requests scoped
        // to one subsystem ignore the others' fields.
        let (ignore_antenna, ignore_gpi, ignore_gpo, unknown) = match selector {
            0 => (false, false, false, false),
            2 | 3 => (false, true, true, false),
            1 | 4 | 5 | 6 | 7 | 8 | 11 => (true, true, true, false),
            9 => (true, false, true, false),
            10 => (true, true, false, false),
            _ => (true, true, true, true),
        };

        msg.fields.push(scope_field(
            "Antenna ID",
            ByteSpan::new(offset, 2),
            FieldValue::U16(antenna),
            antenna as u32,
            ignore_antenna,
        ));

        let mut selector_field = DecodedField::new(
            "Requested configuration",
            ByteSpan::new(offset + 2, 1),
            FieldValue::U8(selector),
        );
        selector_field.label = layout::config_request_name(selector);
        msg.fields.push(selector_field);
        if unknown {
            msg.diagnostics.push(Diagnostic::error(
                format!("unrecognized configuration request: {}", selector),
                ByteSpan::new(offset + 2, 1),
            ));
        }

        msg.fields.push(scope_field(
            "GPI port number",
            ByteSpan::new(offset + 3, 2),
            FieldValue::U16(gpi),
            gpi as u32,
            ignore_gpi,
        ));
        msg.fields.push(scope_field(
            "GPO port number",
            ByteSpan::new(offset + 5, 2),
            FieldValue::U16(gpo),
            gpo as u32,
            ignore_gpo,
        ));

        offset + 7
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn scope_field(
    name: &'static str,
    span: ByteSpan,
    value: FieldValue,
    raw: u32,
    ignored: bool,
) -> DecodedField {
    if ignored {
        DecodedField::with_note(name, span, value, FieldNote::Ignored)
    } else if raw == SCOPE_ALL {
        DecodedField::with_note(name, span, value, FieldNote::AllOfKind)
    } else {
        DecodedField::new(name, span, value)
    }
}

fn truncated_body(msg: &mut DecodedMessage, name: &str, offset: usize, end: usize) {
    msg.diagnostics.push(Diagnostic::error(
        format!("message body too short for field '{}'", name),
        ByteSpan::new(offset, end.saturating_sub(offset)),
    ));
}

#[cfg(test)]
mod tests;
