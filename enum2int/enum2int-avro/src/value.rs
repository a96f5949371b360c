//! Conversion between `apache_avro` values and generic [`Value`]s.
//!
//! Unions are unwrapped on the way in, enums become their symbol string and
//! logical types are reduced to their underlying representation. The writer
//! resolves all of them against the output schema on the way out.

use apache_avro::{Schema, from_avro_datum, to_avro_datum, types::Value as AvroValue};
use enum2int_core::{Record, Value};

/// Convert a decoded value. Fails only when a decimal cannot be re-encoded
/// to its byte form.
pub fn from_avro_value(value: AvroValue) -> Result<Value, apache_avro::Error> {
    let value = match value {
        AvroValue::Null => Value::Null,
        AvroValue::Boolean(b) => Value::Boolean(b),
        AvroValue::Int(i) => Value::Int(i),
        AvroValue::Long(l) => Value::Long(l),
        AvroValue::Float(f) => Value::Float(f),
        AvroValue::Double(d) => Value::Double(d),
        AvroValue::Bytes(b) => Value::Bytes(b),
        AvroValue::String(s) | AvroValue::Enum(_, s) => Value::String(s),
        AvroValue::Fixed(size, b) => Value::Fixed(size, b),
        AvroValue::Union(_, inner) => from_avro_value(*inner)?,
        AvroValue::Array(items) => Value::Array(
            items
                .into_iter()
                .map(from_avro_value)
                .collect::<Result<_, _>>()?,
        ),
        AvroValue::Map(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| Ok((k, from_avro_value(v)?)))
                .collect::<Result<_, apache_avro::Error>>()?,
        ),
        AvroValue::Record(fields) => Value::Record(from_avro_fields(fields)?),
        AvroValue::Date(d) | AvroValue::TimeMillis(d) => Value::Int(d),
        AvroValue::TimeMicros(t)
        | AvroValue::TimestampMillis(t)
        | AvroValue::TimestampMicros(t)
        | AvroValue::TimestampNanos(t)
        | AvroValue::LocalTimestampMillis(t)
        | AvroValue::LocalTimestampMicros(t)
        | AvroValue::LocalTimestampNanos(t) => Value::Long(t),
        AvroValue::Uuid(u) => Value::String(u.to_string()),
        AvroValue::Decimal(d) => Value::Bytes(Vec::<u8>::try_from(&d)?),
        AvroValue::BigDecimal(d) => Value::Bytes(big_decimal_bytes(AvroValue::BigDecimal(d))?),
        // months, days and millis as three little-endian u32s
        AvroValue::Duration(d) => Value::Fixed(12, <[u8; 12]>::from(d).to_vec()),
    };
    Ok(value)
}

/// Payload of a `big-decimal` as it sits inside its `bytes` encoding, which is
/// what value resolution expects back on the writer side.
fn big_decimal_bytes(value: AvroValue) -> Result<Vec<u8>, apache_avro::Error> {
    let datum = to_avro_datum(&Schema::BigDecimal, value)?;
    match from_avro_datum(&Schema::Bytes, &mut datum.as_slice(), None)? {
        AvroValue::Bytes(bytes) => Ok(bytes),
        other => Err(apache_avro::Error::GetBytes(other.into())),
    }
}

/// Convert the fields of a decoded Avro record, keeping their order.
pub(crate) fn from_avro_fields(
    fields: Vec<(String, AvroValue)>,
) -> Result<Record, apache_avro::Error> {
    let mut record = Record::with_capacity(fields.len());
    for (name, value) in fields {
        record.insert(name, from_avro_value(value)?);
    }
    Ok(record)
}

pub fn to_avro_value(value: Value) -> AvroValue {
    match value {
        Value::Null => AvroValue::Null,
        Value::Boolean(b) => AvroValue::Boolean(b),
        Value::Int(i) => AvroValue::Int(i),
        Value::Long(l) => AvroValue::Long(l),
        Value::Float(f) => AvroValue::Float(f),
        Value::Double(d) => AvroValue::Double(d),
        Value::Bytes(b) => AvroValue::Bytes(b),
        Value::String(s) => AvroValue::String(s),
        Value::Fixed(size, b) => AvroValue::Fixed(size, b),
        Value::Array(items) => AvroValue::Array(items.into_iter().map(to_avro_value).collect()),
        Value::Map(entries) => AvroValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k, to_avro_value(v)))
                .collect(),
        ),
        Value::Record(record) => AvroValue::Record(
            record
                .into_iter()
                .map(|(k, v)| (k, to_avro_value(v)))
                .collect(),
        ),
    }
}
