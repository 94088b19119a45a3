//! Built-in XML Schema types.
//!
//! Every simple type ultimately restricts one of the primitive value spaces
//! below. Derived built-ins (`int`, `token`, `ID`, ...) are mapped onto their
//! primitive so callers only ever see the primitive base.

use std::fmt;

/// The ur-types and primitive value spaces of XML Schema 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    AnyType,
    AnySimpleType,
    String,
    Boolean,
    Decimal,
    Float,
    Double,
    Duration,
    DateTime,
    Time,
    Date,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
    HexBinary,
    Base64Binary,
    AnyUri,
    QName,
    Notation,
}

impl BuiltinType {
    /// Resolve a local name in the XML Schema namespace to its primitive.
    ///
    /// Returns `None` for names that are not built-in types.
    pub fn from_local_name(name: &str) -> Option<Self> {
        let ty = match name {
            "anyType" => Self::AnyType,
            "anySimpleType" | "anyAtomicType" => Self::AnySimpleType,
            "string" | "normalizedString" | "token" | "language" | "Name" | "NCName" | "ID"
            | "IDREF" | "ENTITY" | "NMTOKEN" => Self::String,
            "boolean" => Self::Boolean,
            "decimal" | "integer" | "nonPositiveInteger" | "negativeInteger" | "long" | "int"
            | "short" | "byte" | "nonNegativeInteger" | "unsignedLong" | "unsignedInt"
            | "unsignedShort" | "unsignedByte" | "positiveInteger" => Self::Decimal,
            "float" => Self::Float,
            "double" => Self::Double,
            "duration" | "dayTimeDuration" | "yearMonthDuration" => Self::Duration,
            "dateTime" | "dateTimeStamp" => Self::DateTime,
            "time" => Self::Time,
            "date" => Self::Date,
            "gYearMonth" => Self::GYearMonth,
            "gYear" => Self::GYear,
            "gMonthDay" => Self::GMonthDay,
            "gDay" => Self::GDay,
            "gMonth" => Self::GMonth,
            "hexBinary" => Self::HexBinary,
            "base64Binary" => Self::Base64Binary,
            "anyURI" => Self::AnyUri,
            "QName" => Self::QName,
            "NOTATION" => Self::Notation,
            _ => return None,
        };
        Some(ty)
    }

    /// Built-in list types and the primitive of their items.
    pub fn list_item_of(name: &str) -> Option<Self> {
        match name {
            "IDREFS" | "ENTITIES" | "NMTOKENS" => Some(Self::String),
            _ => None,
        }
    }

    pub fn is_simple(&self) -> bool {
        !matches!(self, Self::AnyType)
    }

    pub fn local_name(&self) -> &'static str {
        match self {
            Self::AnyType => "anyType",
            Self::AnySimpleType => "anySimpleType",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Double => "double",
            Self::Duration => "duration",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Date => "date",
            Self::GYearMonth => "gYearMonth",
            Self::GYear => "gYear",
            Self::GMonthDay => "gMonthDay",
            Self::GDay => "gDay",
            Self::GMonth => "gMonth",
            Self::HexBinary => "hexBinary",
            Self::Base64Binary => "base64Binary",
            Self::AnyUri => "anyURI",
            Self::QName => "QName",
            Self::Notation => "NOTATION",
        }
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xs:{}", self.local_name())
    }
}
