//! Wire rows ⇄ generic records.
//!
//! The API stores one flat row per value; the generic model stores one record
//! per `(name, type)` with a per-type value shape. Both directions dispatch on
//! the record type with exhaustive matches, so adding a type to
//! [`DnsRecordType`] or [`RecordData`] fails to compile until it is handled here.
//!
//! Provider conventions handled here:
//! - the apex is `"@"` on the wire and `""` in the generic model
//! - a row `data` of `"@"` means the zone itself
//! - hostnames come back without the trailing dot
//! - TXT data is stored with bare `;`, generic values escape it as `\;`

use std::collections::HashMap;

use crate::error::{ProviderError, Result};
use crate::providers::common::{ensure_trailing_dot, parse_record_type};
use crate::types::{CaaValue, DnsRecordType, GenericRecord, MxValue, RecordData, SrvValue};

use super::PROVIDER_NAME;
use super::types::{RecordParams, WireRecord};

const WIRE_APEX: &str = "@";

/// Rewrites apex markers in rows read from the API.
///
/// `name == "@"` becomes `""`; `data == "@"` becomes the domain name.
pub(crate) fn normalize_wire_records(mut records: Vec<WireRecord>, domain: &str) -> Vec<WireRecord> {
    for record in &mut records {
        if record.name == WIRE_APEX {
            record.name.clear();
        }
        if record.data == WIRE_APEX {
            record.data = domain.to_string();
        }
    }
    records
}

/// Rows sharing one `(name, type)`.
#[derive(Debug)]
pub(crate) struct RecordGroup<'a> {
    pub name: &'a str,
    pub record_type: DnsRecordType,
    pub rows: Vec<&'a WireRecord>,
}

/// Groups rows by `(name, type)` in first-seen order.
///
/// Rows of unsupported types are skipped with a warning.
pub(crate) fn group_records(records: &[WireRecord]) -> Vec<RecordGroup<'_>> {
    let mut groups: Vec<RecordGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, DnsRecordType), usize> = HashMap::new();

    for record in records {
        let Ok(record_type) = parse_record_type(&record.record_type, PROVIDER_NAME) else {
            log::warn!(
                "[{PROVIDER_NAME}] populate: skipping unsupported {} record",
                record.record_type
            );
            continue;
        };

        let key = (record.name.as_str(), record_type);
        if let Some(&i) = index.get(&key) {
            groups[i].rows.push(record);
        } else {
            index.insert(key, groups.len());
            groups.push(RecordGroup {
                name: &record.name,
                record_type,
                rows: vec![record],
            });
        }
    }

    groups
}

fn required<T>(field: Option<T>, record: &WireRecord, name: &str) -> Result<T> {
    field.ok_or_else(|| ProviderError::ParseError {
        provider: PROVIDER_NAME.to_string(),
        detail: format!(
            "{} record {} ({}) is missing '{name}'",
            record.record_type, record.id, record.name
        ),
    })
}

fn escape_txt(data: &str) -> String {
    data.replace(';', "\\;")
}

fn unescape_txt(value: &str) -> String {
    value.replace("\\;", ";")
}

fn srv_target(data: &str) -> String {
    if data == "." {
        ".".to_string()
    } else {
        ensure_trailing_dot(data)
    }
}

/// Builds one generic record from a group of rows.
///
/// The TTL is taken from the first row.
pub(crate) fn to_generic(group: &RecordGroup<'_>) -> Result<GenericRecord> {
    let rows = &group.rows;
    let Some(first) = rows.first() else {
        return Err(ProviderError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("empty {} group for '{}'", group.record_type, group.name),
        });
    };

    let data = match group.record_type {
        DnsRecordType::A => RecordData::A {
            values: rows.iter().map(|r| r.data.clone()).collect(),
        },
        DnsRecordType::Aaaa => RecordData::AAAA {
            values: rows.iter().map(|r| r.data.clone()).collect(),
        },
        DnsRecordType::Caa => RecordData::CAA {
            values: rows
                .iter()
                .map(|r| {
                    Ok(CaaValue {
                        flags: required(r.flags, r, "flags")?,
                        tag: required(r.tag.clone(), r, "tag")?,
                        value: r.data.clone(),
                    })
                })
                .collect::<Result<_>>()?,
        },
        DnsRecordType::Cname => RecordData::CNAME {
            value: ensure_trailing_dot(&first.data),
        },
        DnsRecordType::Mx => RecordData::MX {
            values: rows
                .iter()
                .map(|r| {
                    Ok(MxValue {
                        preference: required(r.priority, r, "priority")?,
                        exchange: ensure_trailing_dot(&r.data),
                    })
                })
                .collect::<Result<_>>()?,
        },
        DnsRecordType::Ns => RecordData::NS {
            values: rows.iter().map(|r| ensure_trailing_dot(&r.data)).collect(),
        },
        DnsRecordType::Srv => RecordData::SRV {
            values: rows
                .iter()
                .map(|r| {
                    Ok(SrvValue {
                        priority: required(r.priority, r, "priority")?,
                        weight: required(r.weight, r, "weight")?,
                        port: required(r.port, r, "port")?,
                        target: srv_target(&r.data),
                    })
                })
                .collect::<Result<_>>()?,
        },
        DnsRecordType::Txt => RecordData::TXT {
            values: rows.iter().map(|r| escape_txt(&r.data)).collect(),
        },
    };

    Ok(GenericRecord::new(group.name, first.ttl, data))
}

/// Creation bodies for a generic record, one per value, in value order.
pub(crate) fn to_wire(record: &GenericRecord) -> Vec<RecordParams> {
    let name = if record.name.is_empty() {
        WIRE_APEX
    } else {
        record.name.as_str()
    };
    let record_type = record.record_type().as_str();
    let ttl = record.ttl;
    let simple = |data: String| RecordParams::simple(name, record_type, data, ttl);

    match &record.data {
        RecordData::A { values } | RecordData::AAAA { values } | RecordData::NS { values } => {
            values.iter().cloned().map(simple).collect()
        }
        RecordData::CAA { values } => values
            .iter()
            .map(|v| RecordParams {
                flags: Some(v.flags),
                tag: Some(v.tag.clone()),
                ..simple(v.value.clone())
            })
            .collect(),
        RecordData::CNAME { value } => vec![simple(value.clone())],
        RecordData::MX { values } => values
            .iter()
            .map(|v| RecordParams {
                priority: Some(v.preference),
                ..simple(v.exchange.clone())
            })
            .collect(),
        RecordData::SRV { values } => values
            .iter()
            .map(|v| RecordParams {
                priority: Some(v.priority),
                weight: Some(v.weight),
                port: Some(v.port),
                ..simple(v.target.clone())
            })
            .collect(),
        RecordData::TXT { values } => values.iter().map(|v| simple(unescape_txt(v))).collect(),
    }
}
