//! Convert an Avro [`Schema`] into the [`TypeDef`] used for enum indexing.

use std::collections::HashMap;

use apache_avro::{
    Schema,
    schema::{Name, ResolvedSchema, SchemaKind},
};
use enum2int_core::{EnumDef, EnumIndexMap, FieldDef, IndexError, RecordDef, TypeDef, enum_index};

use crate::error::AvroError;

/// A parsed schema that can index any of its top-level enum columns.
///
/// Parsing happens once; [`index`](Self::index) can then be called for as
/// many column names as needed.
#[derive(Debug, Clone)]
pub struct EnumSchemaIndex {
    schema: Schema,
    type_def: TypeDef,
}

impl EnumSchemaIndex {
    pub fn parse(text: &str) -> Result<Self, AvroError> {
        Self::from_schema(parse_schema(text)?)
    }

    pub fn from_schema(schema: Schema) -> Result<Self, AvroError> {
        let type_def = schema_to_type_def(&schema)?;
        Ok(Self { schema, type_def })
    }

    /// Symbol → ordinal map of the enum column `column`.
    pub fn index(&self, column: &str) -> Result<EnumIndexMap, IndexError> {
        enum_index(&self.type_def, column)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn type_def(&self) -> &TypeDef {
        &self.type_def
    }
}

pub fn parse_schema(text: &str) -> Result<Schema, AvroError> {
    Schema::parse_str(text).map_err(|source| AvroError::SchemaParse { source })
}

/// Parse `text` and index `column` in one step.
pub fn schema_to_enum_index(text: &str, column: &str) -> Result<EnumIndexMap, AvroError> {
    Ok(EnumSchemaIndex::parse(text)?.index(column)?)
}

/// Derive a [`TypeDef`] from `schema`.
///
/// Field types of the top-level record, and the branches of a union field
/// type, are resolved through named references so that an enum declared
/// earlier in the schema indexes the same way as an inline one. Deeper
/// references are kept as [`TypeDef::Ref`].
pub fn schema_to_type_def(schema: &Schema) -> Result<TypeDef, AvroError> {
    let resolved =
        ResolvedSchema::try_from(schema).map_err(|source| AvroError::SchemaResolve { source })?;
    let names = resolved.get_names();

    let Schema::Record(record) = schema else {
        return Ok(type_def(schema));
    };

    let fields = record
        .fields
        .iter()
        .map(|f| FieldDef::new(f.name.as_str(), field_type_def(names, &f.schema)))
        .collect();
    Ok(TypeDef::Record(RecordDef::new(record.name.fullname(None), fields)))
}

fn field_type_def<'s>(names: &HashMap<Name, &'s Schema>, schema: &'s Schema) -> TypeDef {
    match resolve(names, schema) {
        Schema::Union(union) => TypeDef::Union(
            union
                .variants()
                .iter()
                .map(|branch| type_def(resolve(names, branch)))
                .collect(),
        ),
        other => type_def(other),
    }
}

fn resolve<'s>(names: &HashMap<Name, &'s Schema>, schema: &'s Schema) -> &'s Schema {
    match schema {
        Schema::Ref { name } => names.get(name).copied().unwrap_or(schema),
        other => other,
    }
}

fn type_def(schema: &Schema) -> TypeDef {
    match schema {
        Schema::Null => TypeDef::Null,
        Schema::Boolean => TypeDef::Boolean,
        Schema::Int => TypeDef::Int,
        Schema::Long => TypeDef::Long,
        Schema::Float => TypeDef::Float,
        Schema::Double => TypeDef::Double,
        Schema::Bytes => TypeDef::Bytes,
        Schema::String => TypeDef::String,
        Schema::Fixed(fixed) => TypeDef::Fixed {
            name: fixed.name.fullname(None),
            size: fixed.size,
        },
        Schema::Enum(e) => TypeDef::Enum(EnumDef::new(e.name.fullname(None), &e.symbols)),
        Schema::Array(array) => TypeDef::Array(Box::new(type_def(&array.items))),
        Schema::Map(map) => TypeDef::Map(Box::new(type_def(&map.types))),
        Schema::Union(union) => TypeDef::Union(union.variants().iter().map(type_def).collect()),
        Schema::Record(record) => TypeDef::Record(RecordDef::new(
            record.name.fullname(None),
            record
                .fields
                .iter()
                .map(|f| FieldDef::new(f.name.as_str(), type_def(&f.schema)))
                .collect(),
        )),
        Schema::Ref { name } => TypeDef::Ref(name.fullname(None)),
        // Logical types and anything added to the format later.
        other => TypeDef::Other(format!("{:?}", SchemaKind::from(other)).to_lowercase()),
    }
}
