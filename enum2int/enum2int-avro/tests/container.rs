use std::sync::Arc;

use apache_avro::{
    BigDecimal, Days, Duration, Millis, Months, Reader, Schema, Writer, types::Value as AvroValue,
};
use enum2int_avro::{
    AvroError, AvroRecordReader, AvroRecordWriter, CodecName, EncodeConfig, EnumSchemaIndex,
    parse_schema,
};
use enum2int_core::{ConvertError, EnumColumnExt, EnumConverter, Record, StreamError, Value};

const INPUT_SCHEMA: &str = r#"{
    "type": "record",
    "name": "Order",
    "fields": [
        {"name": "id", "type": "long"},
        {"name": "status", "type": ["null", {"type": "enum", "name": "Status", "symbols": ["A", "B", "C"]}]},
        {"name": "note", "type": "string"},
        {"name": "kind", "type": {"type": "enum", "name": "Kind", "symbols": ["X", "Y"]}}
    ]
}"#;

const OUTPUT_SCHEMA: &str = r#"{
    "type": "record",
    "name": "Order",
    "fields": [
        {"name": "id", "type": "long"},
        {"name": "status", "type": ["null", "int"]},
        {"name": "note", "type": "string"},
        {"name": "kind", "type": {"type": "enum", "name": "Kind", "symbols": ["X", "Y"]}}
    ]
}"#;

fn order(id: i64, status: Option<&str>, note: &str) -> Record {
    [
        ("id", Value::Long(id)),
        ("status", status.map_or(Value::Null, Value::string)),
        ("note", Value::string(note)),
        ("kind", Value::string("Y")),
    ]
    .into_iter()
    .collect()
}

fn encode(schema: &Schema, records: Vec<Record>, config: &EncodeConfig) -> Vec<u8> {
    let mut writer = AvroRecordWriter::with_config(schema, Vec::new(), config);
    for record in records {
        writer.write(record).unwrap();
    }
    writer.finish().unwrap()
}

fn decode(bytes: &[u8]) -> Vec<Record> {
    AvroRecordReader::new(bytes)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn container_round_trip_preserves_fields_and_order() {
    let schema = parse_schema(INPUT_SCHEMA).unwrap();
    let records = vec![
        order(1, Some("A"), "first"),
        order(2, None, "second"),
        order(3, Some("C"), "third"),
    ];

    let bytes = encode(&schema, records.clone(), &EncodeConfig::default());
    assert_eq!(decode(&bytes), records);
}

#[test]
fn every_codec_produces_a_readable_container() {
    let schema = parse_schema(INPUT_SCHEMA).unwrap();
    let records: Vec<_> = (0..25).map(|i| order(i, Some("B"), "n")).collect();

    for codec in CodecName::ALL {
        let config = EncodeConfig {
            block_length: 7,
            codec,
        };
        let bytes = encode(&schema, records.clone(), &config);
        assert_eq!(decode(&bytes), records, "codec {codec}");
    }
}

#[test]
fn writer_rejects_unknown_enum_symbol() {
    let schema = parse_schema(INPUT_SCHEMA).unwrap();
    let mut writer = AvroRecordWriter::new(&schema, Vec::new());

    let err = writer.write(order(1, Some("Z"), "bad")).unwrap_err();
    assert!(matches!(err, AvroError::Encode { index: 0, .. }));
    assert_eq!(writer.written(), 0);
}

#[test]
fn reader_rejects_garbage_header() {
    let err = AvroRecordReader::new(&b"definitely not avro"[..]).err().unwrap();
    assert!(matches!(err, AvroError::ContainerOpen { .. }));
}

#[test]
fn reader_stops_after_corrupt_block() {
    let schema = parse_schema(INPUT_SCHEMA).unwrap();
    let records: Vec<_> = (0..4).map(|i| order(i, Some("A"), "n")).collect();
    let mut bytes = encode(
        &schema,
        records,
        &EncodeConfig {
            block_length: 2,
            codec: CodecName::Null,
        },
    );
    // Drop the tail of the second block, including its sync marker.
    bytes.truncate(bytes.len() - 20);

    let items: Vec<_> = AvroRecordReader::new(&bytes[..]).unwrap().collect();
    assert!(items.len() >= 3);
    assert!(items[..2].iter().all(Result::is_ok));
    assert_eq!(items.iter().filter(|i| i.is_err()).count(), 1);
    let failed_at = (items.len() - 1) as u64;
    match items.last().unwrap() {
        Err(AvroError::Decode { index, .. }) => assert_eq!(*index, failed_at),
        other => panic!("unexpected item: {other:?}"),
    }
}

#[test]
fn pipeline_maps_enum_column_to_ordinals() {
    let input_schema = parse_schema(INPUT_SCHEMA).unwrap();
    let output_schema = parse_schema(OUTPUT_SCHEMA).unwrap();
    let input = encode(
        &input_schema,
        vec![
            order(7, Some("B"), "x"),
            order(8, None, "y"),
            order(9, Some("C"), "z"),
        ],
        &EncodeConfig::default(),
    );

    let map = Arc::new(EnumSchemaIndex::parse(INPUT_SCHEMA).unwrap().index("status").unwrap());
    let stream = AvroRecordReader::new(&input[..])
        .unwrap()
        .map_enum_column("status", EnumConverter::from_map(map))
        .map(|item| {
            item.map_err(|e| match e {
                StreamError::Upstream(e) => e,
                StreamError::Convert { source, .. } => panic!("unexpected convert error: {source}"),
            })
        });

    let mut writer = AvroRecordWriter::new(&output_schema, Vec::new());
    assert_eq!(writer.write_stream(stream).unwrap(), 3);
    let output = writer.finish().unwrap();

    let records = decode(&output);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("id"), Some(&Value::Long(7)));
    assert_eq!(records[0].get("status"), Some(&Value::Int(1)));
    assert_eq!(records[0].get("note"), Some(&Value::string("x")));
    assert_eq!(records[0].get("kind"), Some(&Value::string("Y")));
    assert_eq!(records[1].get("status"), Some(&Value::Null));
    assert_eq!(records[2].get("status"), Some(&Value::Int(2)));
}

#[test]
fn pipeline_surfaces_unknown_symbols_per_record() {
    let input_schema = parse_schema(
        r#"{"type": "record", "name": "R", "fields": [{"name": "status", "type": "string"}]}"#,
    )
    .unwrap();
    let input = encode(
        &input_schema,
        vec![
            [("status", Value::string("A"))].into_iter().collect(),
            [("status", Value::string("Z"))].into_iter().collect(),
            [("status", Value::string("B"))].into_iter().collect(),
        ],
        &EncodeConfig::default(),
    );

    let map = Arc::new(enum2int_core::EnumIndexMap::from_symbols(["A", "B"]));
    let items: Vec<_> = AvroRecordReader::new(&input[..])
        .unwrap()
        .map_enum_column("status", EnumConverter::from_map(map))
        .collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_ref().unwrap().get("status"), Some(&Value::Int(0)));
    match &items[1] {
        Err(StreamError::Convert { source, .. }) => assert_eq!(
            source,
            &ConvertError::UnknownEnum {
                symbol: "Z".to_string()
            }
        ),
        other => panic!("unexpected item: {other:?}"),
    }
    assert_eq!(items[2].as_ref().unwrap().get("status"), Some(&Value::Int(1)));
}

fn logical_schema(status: &str) -> String {
    format!(
        r#"{{
    "type": "record",
    "name": "Booking",
    "fields": [
        {{"name": "status", "type": {status}}},
        {{"name": "span", "type": {{"type": "fixed", "name": "Span", "size": 12, "logicalType": "duration"}}}},
        {{"name": "amount", "type": {{"type": "bytes", "logicalType": "big-decimal"}}}}
    ]
}}"#
    )
}

#[test]
fn pipeline_passes_duration_and_big_decimal_fields_through() {
    let input_text =
        logical_schema(r#"{"type": "enum", "name": "Status", "symbols": ["A", "B", "C"]}"#);
    let input_schema = parse_schema(&input_text).unwrap();
    let output_schema = parse_schema(&logical_schema(r#""int""#)).unwrap();

    let span = Duration::new(Months::new(1), Days::new(2), Millis::new(3));
    let amount: BigDecimal = "12.345".parse().unwrap();
    let mut writer = Writer::new(&input_schema, Vec::new());
    writer
        .append(AvroValue::Record(vec![
            ("status".to_string(), AvroValue::Enum(1, "B".to_string())),
            ("span".to_string(), AvroValue::Duration(span)),
            ("amount".to_string(), AvroValue::BigDecimal(amount.clone())),
        ]))
        .unwrap();
    let input = writer.into_inner().unwrap();

    let map = Arc::new(EnumSchemaIndex::parse(&input_text).unwrap().index("status").unwrap());
    let records: Vec<_> = AvroRecordReader::new(&input[..])
        .unwrap()
        .map_enum_column("status", EnumConverter::from_map(map))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("status"), Some(&Value::Int(1)));
    assert_eq!(
        records[0].get("span"),
        Some(&Value::Fixed(12, vec![1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]))
    );

    let mut writer = AvroRecordWriter::new(&output_schema, Vec::new());
    for record in records {
        writer.write(record).unwrap();
    }
    let output = writer.finish().unwrap();

    let values: Vec<_> = Reader::new(&output[..])
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        values,
        vec![AvroValue::Record(vec![
            ("status".to_string(), AvroValue::Int(1)),
            ("span".to_string(), AvroValue::Duration(span)),
            ("amount".to_string(), AvroValue::BigDecimal(amount)),
        ])]
    );
}
