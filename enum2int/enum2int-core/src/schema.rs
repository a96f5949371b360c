//! Format-independent schema intermediate representation.
//!
//! Only as much structure as enum indexing needs is modelled; anything else
//! a format adapter encounters is carried as [`TypeDef::Other`].

/// Data type of a schema node.
///
/// Variant names mirror [`Value`](crate::Value) where a value counterpart exists.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed { name: String, size: usize },
    Enum(EnumDef),
    Array(Box<TypeDef>),
    Map(Box<TypeDef>),
    Record(RecordDef),
    Union(Vec<TypeDef>),
    /// Reference to a named type that was not expanded.
    Ref(String),
    /// Format-specific type with no counterpart here (e.g. a logical type).
    Other(String),
}

impl TypeDef {
    pub fn type_name(&self) -> &str {
        match self {
            TypeDef::Null => "null",
            TypeDef::Boolean => "boolean",
            TypeDef::Int => "int",
            TypeDef::Long => "long",
            TypeDef::Float => "float",
            TypeDef::Double => "double",
            TypeDef::Bytes => "bytes",
            TypeDef::String => "string",
            TypeDef::Fixed { .. } => "fixed",
            TypeDef::Enum(_) => "enum",
            TypeDef::Array(_) => "array",
            TypeDef::Map(_) => "map",
            TypeDef::Record(_) => "record",
            TypeDef::Union(_) => "union",
            TypeDef::Ref(_) => "ref",
            TypeDef::Other(name) => name,
        }
    }

    /// The enum this type carries values of.
    ///
    /// A nullable union (`null` plus exactly one other branch) counts when its
    /// non-null branch is an enum.
    pub fn as_enum(&self) -> Option<&EnumDef> {
        match self {
            TypeDef::Enum(def) => Some(def),
            TypeDef::Union(branches) => {
                let mut non_null = branches.iter().filter(|b| !matches!(b, TypeDef::Null));
                match (non_null.next(), non_null.next()) {
                    (Some(TypeDef::Enum(def)), None) => Some(def),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Enumeration type: an ordered list of symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub symbols: Vec<String>,
}

impl EnumDef {
    pub fn new<S>(name: impl Into<String>, symbols: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

/// Record type: an ordered list of uniquely named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub data_type: TypeDef,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, data_type: TypeDef) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
