//! Recursive TLV/TV parameter decoding.
//!
//! The parameter sequence walker at the heart of the decoder. One bit — the
//! high bit of the first byte — selects between the two wire encodings:
//! TLV (explicit 16-bit declared length) and TV (length implied by the
//! static table in [`crate::layout`]). TLV payloads may themselves be
//! parameter sequences; recursion is bounded by [`MAX_PARAM_DEPTH`].
//!
//! Decoding is total. A declared length that is impossibly small or larger
//! than the remaining region is clamped to a safe value and flagged with a
//! diagnostic; the cursor then advances by the declared (clamped) size, not
//! the actually-consumed size, so sibling parameters resynchronize on the
//! declared frame boundary instead of drifting.

use bytes::Bytes;
use log::debug;

use crate::cursor::ByteCursor;
use crate::layout::{self, FieldKind, FieldSpec};
use crate::message::Decoder;
use crate::report::{
    ByteSpan, DecodedField, Diagnostic, FieldNote, FieldValue, ParamEncoding, Parameter,
};
use crate::vendor::VendorParamOutcome;

/// Bytes of the TLV type and length fields; also the minimum legal TLV size.
pub const TLV_HEADER_LEN: usize = 4;

/// Hard cap on parameter nesting. The wire format permits arbitrarily deep
/// nesting, so crafted input could otherwise exhaust the stack.
pub const MAX_PARAM_DEPTH: usize = 64;

impl Decoder {
    /// Decode the parameter sequence in `buf[start..end)`.
    ///
    /// Returns the decoded parameters and the final cursor offset. Never
    /// fails: anomalies surface as diagnostics on the parameter where they
    /// were observed.
    pub fn decode_parameters(&self, buf: &[u8], start: usize, end: usize) -> (Vec<Parameter>, usize) {
        let end = end.min(buf.len());
        let start = start.min(end);
        self.decode_parameters_at(&ByteCursor::new(buf), start, end, 0)
    }

    pub(crate) fn decode_parameters_at(
        &self,
        cur: &ByteCursor<'_>,
        start: usize,
        end: usize,
        depth: usize,
    ) -> (Vec<Parameter>, usize) {
        let mut params = Vec::new();
        let mut offset = start;

        while offset < end {
            let first = match cur.u8(offset) {
                Some(b) => b,
                None => break,
            };
            // The encoding discriminator: high bit clear is TLV, set is TV.
            let (param, next) = if first & 0x80 == 0 {
                self.decode_tlv(cur, offset, end, depth)
            } else {
                self.decode_tv(cur, offset, end)
            };
            params.push(param);
            offset = next;
        }

        (params, offset)
    }

    fn decode_tlv(
        &self,
        cur: &ByteCursor<'_>,
        offset: usize,
        end: usize,
        depth: usize,
    ) -> (Parameter, usize) {
        let remaining = end - offset;

        if remaining < TLV_HEADER_LEN {
            let mut param = Parameter {
                encoding: ParamEncoding::Tlv { declared_len: 0 },
                type_code: 0,
                type_name: None,
                span: ByteSpan::new(offset, remaining),
                fields: Vec::new(),
                params: Vec::new(),
                diagnostics: vec![Diagnostic::error(
                    format!(
                        "truncated TLV header: {} bytes remaining, need {}",
                        remaining, TLV_HEADER_LEN
                    ),
                    ByteSpan::new(offset, remaining),
                )],
            };
            push_opaque(cur, offset, end, &mut param.fields);
            return (param, end);
        }

        // Top 6 bits of the type word are reserved; the low 10 bits carry
        // the type code.
        let type_code = cur.u16(offset).unwrap_or(0) & 0x03FF;
        let declared = cur.u16(offset + 2).unwrap_or(0);

        let real_len = if (declared as usize) < TLV_HEADER_LEN {
            TLV_HEADER_LEN
        } else if declared as usize > remaining {
            remaining
        } else {
            declared as usize
        };
        let param_end = offset + real_len;

        let mut param = Parameter {
            encoding: ParamEncoding::Tlv {
                declared_len: declared,
            },
            type_code,
            type_name: layout::tlv_type_name(type_code),
            span: ByteSpan::new(offset, real_len),
            fields: vec![
                DecodedField::new("Type", ByteSpan::new(offset, 2), FieldValue::U16(type_code)),
                DecodedField::new(
                    "Length",
                    ByteSpan::new(offset + 2, 2),
                    FieldValue::U16(declared),
                ),
            ],
            params: Vec::new(),
            diagnostics: Vec::new(),
        };

        if real_len != declared as usize {
            param.diagnostics.push(Diagnostic::error(
                format!(
                    "invalid length field: claimed {}, should be {}",
                    declared, real_len
                ),
                ByteSpan::new(offset + 2, 2),
            ));
        }

        let payload_start = offset + TLV_HEADER_LEN;

        let consumed_to = if type_code == layout::TLV_CUSTOM_PARAMETER {
            self.decode_custom_parameter(cur, payload_start, param_end, depth, &mut param)
        } else {
            match layout::tlv_layout(type_code) {
                Some(l) => {
                    let mut sub = decode_field_sequence(
                        cur,
                        payload_start,
                        param_end,
                        l.fields,
                        &mut param.fields,
                        &mut param.diagnostics,
                    );
                    if l.trailing_params {
                        sub = self.decode_nested(cur, sub, param_end, depth, &mut param);
                    }
                    sub
                }
                None => {
                    // Forward compatibility: an unrecognized type is one
                    // opaque blob of exactly the declared (clamped) size so
                    // the parameters after it stay parseable.
                    debug!("unrecognized TLV parameter type {}", type_code);
                    self.metrics.unknown_parameters.increment();
                    push_opaque(cur, payload_start, param_end, &mut param.fields);
                    param_end
                }
            }
        };

        if consumed_to != param_end {
            param.diagnostics.push(Diagnostic::error(
                format!(
                    "incorrect parameter length: {} bytes decoded, but {} bytes claimed",
                    consumed_to.saturating_sub(offset),
                    real_len
                ),
                ByteSpan::new(offset, real_len),
            ));
        }

        apply_value_labels(type_code, &mut param.fields);
        self.metrics.parameters_decoded.increment();
        (param, param_end)
    }

    fn decode_tv(&self, cur: &ByteCursor<'_>, offset: usize, end: usize) -> (Parameter, usize) {
        let type_code = cur.u8(offset).unwrap_or(0) & 0x7F;

        let mut param = Parameter {
            encoding: ParamEncoding::Tv,
            type_code: type_code as u16,
            type_name: layout::tv_type_name(type_code),
            span: ByteSpan::new(offset, 1),
            fields: vec![DecodedField::new(
                "Type",
                ByteSpan::new(offset, 1),
                FieldValue::U8(type_code),
            )],
            params: Vec::new(),
            diagnostics: Vec::new(),
        };

        // No length on the wire; the table stands in for it. An unknown
        // type consumes only the tag byte rather than guessing.
        let (len, specs): (usize, &[FieldSpec]) = match layout::tv_layout(type_code) {
            Some(l) => (l.len, l.fields),
            None => {
                debug!("unrecognized TV parameter type {}", type_code);
                self.metrics.unknown_parameters.increment();
                (0, &[])
            }
        };

        let mut next = offset + 1 + len;
        if next > end {
            param.diagnostics.push(Diagnostic::error(
                format!(
                    "truncated TV parameter: {} payload bytes expected, {} available",
                    len,
                    end - offset - 1
                ),
                ByteSpan::new(offset, end - offset),
            ));
            next = end;
            param.span = ByteSpan::new(offset, end - offset);
        } else {
            param.span = ByteSpan::new(offset, 1 + len);
            decode_field_sequence(
                cur,
                offset + 1,
                next,
                specs,
                &mut param.fields,
                &mut param.diagnostics,
            );
        }

        self.metrics.parameters_decoded.increment();
        (param, next)
    }

    /// Recurse into a nested parameter sequence, honoring the depth cap.
    pub(crate) fn decode_nested(
        &self,
        cur: &ByteCursor<'_>,
        start: usize,
        end: usize,
        depth: usize,
        param: &mut Parameter,
    ) -> usize {
        if start >= end {
            return start;
        }
        if depth + 1 >= MAX_PARAM_DEPTH {
            param.diagnostics.push(Diagnostic::error(
                format!(
                    "parameter nesting exceeds {} levels, remainder not decoded",
                    MAX_PARAM_DEPTH
                ),
                ByteSpan::new(start, end - start),
            ));
            push_opaque(cur, start, end, &mut param.fields);
            return end;
        }
        let (children, next) = self.decode_parameters_at(cur, start, end, depth + 1);
        param.params.extend(children);
        next
    }

    fn decode_custom_parameter(
        &self,
        cur: &ByteCursor<'_>,
        payload_start: usize,
        param_end: usize,
        depth: usize,
        param: &mut Parameter,
    ) -> usize {
        if payload_start + 4 > param_end {
            param.diagnostics.push(Diagnostic::error(
                "custom parameter too short for a vendor ID",
                ByteSpan::new(payload_start, param_end - payload_start),
            ));
            push_opaque(cur, payload_start, param_end, &mut param.fields);
            return param_end;
        }

        let vendor_id = cur.u32(payload_start).unwrap_or(0);
        let mut vendor_field = DecodedField::new(
            "Vendor ID",
            ByteSpan::new(payload_start, 4),
            FieldValue::U32(vendor_id),
        );
        vendor_field.label = self.vendors.vendor_name(vendor_id);
        param.fields.push(vendor_field);

        let sub = payload_start + 4;
        match self.vendors.get(vendor_id) {
            Some(handler) => match handler.decode_parameter(cur, sub, param_end, param) {
                VendorParamOutcome::Decoded { next } => {
                    // Vendor parameters, like base parameters, may carry
                    // trailing nested sub-parameters.
                    self.decode_nested(cur, next, param_end, depth, param)
                }
                VendorParamOutcome::UnknownSubtype { next } => {
                    push_opaque(cur, next, param_end, &mut param.fields);
                    param_end
                }
            },
            None => {
                debug!("no vendor decoder registered for vendor {}", vendor_id);
                push_opaque(cur, sub, param_end, &mut param.fields);
                param_end
            }
        }
    }
}

/// Decode an ordered field list against `cur[start..end)`.
///
/// Returns the offset one past the last byte consumed. Fields that would
/// cross `end` produce a diagnostic and stop the walk at `end`; no byte
/// outside the region is ever read.
pub(crate) fn decode_field_sequence(
    cur: &ByteCursor<'_>,
    start: usize,
    end: usize,
    specs: &[FieldSpec],
    fields: &mut Vec<DecodedField>,
    diags: &mut Vec<Diagnostic>,
) -> usize {
    let mut offset = start;

    for spec in specs {
        match spec.kind {
            FieldKind::Utf8String => {
                let Some(len) = region_u16(cur, offset, end) else {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                };
                let len = len as usize;
                if offset + 2 + len > end {
                    diags.push(Diagnostic::error(
                        format!(
                            "invalid length of string: claimed {}, available {}",
                            len,
                            end - offset - 2
                        ),
                        ByteSpan::new(offset, 2),
                    ));
                    offset += 2;
                    continue;
                }
                let body = cur.slice(offset + 2, len).unwrap_or(&[]);
                fields.push(DecodedField::new(
                    spec.name,
                    ByteSpan::new(offset, 2 + len),
                    FieldValue::Str(String::from_utf8_lossy(body).into_owned()),
                ));
                offset += 2 + len;
            }

            FieldKind::BitField => {
                let Some(bits) = region_u16(cur, offset, end) else {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                };
                let nbytes = (bits as usize + 7) / 8;
                fields.push(DecodedField::new(
                    "Bit field length (bits)",
                    ByteSpan::new(offset, 2),
                    FieldValue::U16(bits),
                ));
                if offset + 2 + nbytes > end {
                    diags.push(Diagnostic::error(
                        format!(
                            "bit field overruns enclosing parameter: {} bits claimed, {} bytes available",
                            bits,
                            end - offset - 2
                        ),
                        ByteSpan::new(offset, 2),
                    ));
                    return end;
                }
                let body = cur.slice(offset + 2, nbytes).unwrap_or(&[]);
                fields.push(DecodedField::new(
                    spec.name,
                    ByteSpan::new(offset + 2, nbytes),
                    FieldValue::Bytes(Bytes::copy_from_slice(body)),
                ));
                offset += 2 + nbytes;
            }

            FieldKind::WordArray => {
                let Some(words) = region_u16(cur, offset, end) else {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                };
                let nbytes = words as usize * 2;
                fields.push(DecodedField::new(
                    "Field length (words)",
                    ByteSpan::new(offset, 2),
                    FieldValue::U16(words),
                ));
                if offset + 2 + nbytes > end {
                    diags.push(Diagnostic::error(
                        format!(
                            "word array overruns enclosing parameter: {} words claimed, {} bytes available",
                            words,
                            end - offset - 2
                        ),
                        ByteSpan::new(offset, 2),
                    ));
                    return end;
                }
                let body = cur.slice(offset + 2, nbytes).unwrap_or(&[]);
                fields.push(DecodedField::new(
                    spec.name,
                    ByteSpan::new(offset + 2, nbytes),
                    FieldValue::Bytes(Bytes::copy_from_slice(body)),
                ));
                offset += 2 + nbytes;
            }

            FieldKind::LenPrefixedBytes => {
                let Some(count) = region_u16(cur, offset, end) else {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                };
                let count = count as usize;
                if offset + 2 + count > end {
                    diags.push(Diagnostic::error(
                        format!(
                            "byte field overruns enclosing parameter: {} bytes claimed, {} available",
                            count,
                            end - offset - 2
                        ),
                        ByteSpan::new(offset, 2),
                    ));
                    return end;
                }
                let body = cur.slice(offset + 2, count).unwrap_or(&[]);
                fields.push(DecodedField::new(
                    spec.name,
                    ByteSpan::new(offset, 2 + count),
                    FieldValue::Bytes(Bytes::copy_from_slice(body)),
                ));
                offset += 2 + count;
            }

            FieldKind::ItemArray {
                count_name,
                item_size,
            } => {
                let Some(num) = region_u16(cur, offset, end) else {
                    truncated_field(count_name, offset, end, diags);
                    return end;
                };
                fields.push(DecodedField::new(
                    count_name,
                    ByteSpan::new(offset, 2),
                    FieldValue::U16(num),
                ));
                offset += 2;
                let total = num as usize * item_size;
                if offset + total > end {
                    diags.push(Diagnostic::error(
                        format!(
                            "item array overruns enclosing parameter: {} items of {} bytes, {} available",
                            num,
                            item_size,
                            end - offset
                        ),
                        ByteSpan::new(offset - 2, 2),
                    ));
                    return end;
                }
                let item_kind = match item_size {
                    1 => FieldKind::U8,
                    2 => FieldKind::U16,
                    4 => FieldKind::U32,
                    n => FieldKind::Bytes(n),
                };
                for _ in 0..num {
                    if let Some((value, _, width)) = fixed_read(cur, offset, item_kind) {
                        fields.push(DecodedField::new(
                            spec.name,
                            ByteSpan::new(offset, width),
                            value,
                        ));
                        offset += item_size;
                    } else {
                        truncated_field(spec.name, offset, end, diags);
                        return end;
                    }
                }
            }

            kind => {
                // Fixed-width scalars and flags.
                let Some((value, note, width)) = fixed_read(cur, offset, kind) else {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                };
                if offset + width > end {
                    truncated_field(spec.name, offset, end, diags);
                    return end;
                }
                let span = ByteSpan::new(offset, width);
                let field = match note {
                    Some(n) => DecodedField::with_note(spec.name, span, value, n),
                    None => DecodedField::new(spec.name, span, value),
                };
                fields.push(field);
                if !spec.stay {
                    offset += width;
                }
            }
        }
    }

    offset
}

/// Read one fixed-width value; `None` when the buffer is too short or the
/// kind is not fixed-width.
fn fixed_read(
    cur: &ByteCursor<'_>,
    offset: usize,
    kind: FieldKind,
) -> Option<(FieldValue, Option<FieldNote>, usize)> {
    match kind {
        FieldKind::U8 => cur.u8(offset).map(|v| (FieldValue::U8(v), None, 1)),
        FieldKind::Bool8(mask) => cur
            .u8(offset)
            .map(|v| (FieldValue::Bool(v & mask != 0), None, 1)),
        FieldKind::U16 => cur.u16(offset).map(|v| (FieldValue::U16(v), None, 2)),
        FieldKind::I16 => cur.i16(offset).map(|v| (FieldValue::I16(v), None, 2)),
        FieldKind::Bool16(mask) => cur
            .u16(offset)
            .map(|v| (FieldValue::Bool(v & mask != 0), None, 2)),
        FieldKind::NoLimitU16 => cur.u16(offset).map(|v| {
            let note = if v == 0 { Some(FieldNote::NoLimit) } else { None };
            (FieldValue::U16(v), note, 2)
        }),
        FieldKind::U32 => cur.u32(offset).map(|v| (FieldValue::U32(v), None, 4)),
        FieldKind::I32 => cur.i32(offset).map(|v| (FieldValue::I32(v), None, 4)),
        FieldKind::NoLimitU32 => cur.u32(offset).map(|v| {
            let note = if v == 0 { Some(FieldNote::NoLimit) } else { None };
            (FieldValue::U32(v), note, 4)
        }),
        FieldKind::U64 => cur.u64(offset).map(|v| (FieldValue::U64(v), None, 8)),
        FieldKind::Bytes(n) => cur
            .slice(offset, n)
            .map(|b| (FieldValue::Bytes(Bytes::copy_from_slice(b)), None, n)),
        _ => None,
    }
}

/// A 16-bit read that must fit inside the current region.
fn region_u16(cur: &ByteCursor<'_>, offset: usize, end: usize) -> Option<u16> {
    if offset + 2 > end {
        return None;
    }
    cur.u16(offset)
}

fn truncated_field(name: &str, offset: usize, end: usize, diags: &mut Vec<Diagnostic>) {
    diags.push(Diagnostic::error(
        format!("field '{}' extends past end of parameter", name),
        ByteSpan::new(offset, end.saturating_sub(offset)),
    ));
}

/// Record `cur[start..end)` as one opaque blob field.
pub(crate) fn push_opaque(
    cur: &ByteCursor<'_>,
    start: usize,
    end: usize,
    fields: &mut Vec<DecodedField>,
) {
    if end > start {
        let body = cur.slice(start, end - start).unwrap_or(&[]);
        fields.push(DecodedField::new(
            "Data",
            ByteSpan::new(start, end - start),
            FieldValue::Bytes(Bytes::copy_from_slice(body)),
        ));
    }
}

/// Attach protocol-defined value names to fields that have them.
fn apply_value_labels(type_code: u16, fields: &mut [DecodedField]) {
    for field in fields.iter_mut() {
        let label = match (type_code, field.name, &field.value) {
            (layout::TLV_LLRP_STATUS, "Status code", FieldValue::U16(v)) => {
                layout::status_code_name(*v)
            }
            (layout::TLV_FIELD_ERROR, "Error code", FieldValue::U16(v))
            | (layout::TLV_PARAM_ERROR, "Error code", FieldValue::U16(v)) => {
                layout::status_code_name(*v)
            }
            (layout::TLV_PARAM_ERROR, "Parameter type", FieldValue::U16(v)) => {
                layout::tlv_type_name(*v)
            }
            (layout::TLV_CONN_ATTEMPT_EVENT, "Status", FieldValue::U16(v)) => {
                layout::connection_status_name(*v)
            }
            _ => None,
        };
        if label.is_some() {
            field.label = label;
        }
    }
}

#[cfg(test)]
mod tests;
