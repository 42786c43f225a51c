use std::{borrow::Cow, fmt};

use prost_types::field_descriptor_proto::{Label, Type};

use crate::descriptor::FieldDescriptorProto;

/// The Apex type a single (non-repeated) field value maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApexType<'a> {
    String,
    Integer,
    Boolean,
    Double,
    /// A message reference, with the current package stripped.
    Reference(Cow<'a, str>),
    /// Anything without an Apex mapping. Rendered verbatim as `unknown`, which
    /// won't compile, but doesn't stop generation either.
    Unknown,
}

impl fmt::Display for ApexType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApexType::String => f.write_str("String"),
            ApexType::Integer => f.write_str("Integer"),
            ApexType::Boolean => f.write_str("Boolean"),
            ApexType::Double => f.write_str("Double"),
            ApexType::Reference(name) => f.write_str(name),
            ApexType::Unknown => f.write_str("unknown"),
        }
    }
}

impl<'a> ApexType<'a> {
    pub fn of_field(field: &'a FieldDescriptorProto, package: &str) -> Self {
        let Some(kind) = field.r#type.and_then(|raw| Type::try_from(raw).ok()) else {
            return ApexType::Unknown;
        };

        match kind {
            Type::String => ApexType::String,
            Type::Int32 | Type::Int64 | Type::Uint32 | Type::Uint64 | Type::Sint32 | Type::Sint64 => {
                ApexType::Integer
            }
            Type::Bool => ApexType::Boolean,
            Type::Float | Type::Double => ApexType::Double,
            Type::Message => ApexType::Reference(unqualify(field.type_name(), package)),
            Type::Fixed32
            | Type::Fixed64
            | Type::Sfixed32
            | Type::Sfixed64
            | Type::Bytes
            | Type::Enum
            | Type::Group => ApexType::Unknown,
        }
    }
}

/// The declared Apex type of a property holding `field`, `List<T>` for repeated fields.
pub fn property_type(field: &FieldDescriptorProto, package: &str) -> String {
    let apex_type = ApexType::of_field(field, package);

    if apex_type == ApexType::Unknown {
        tracing::warn!(
            field = field.name(),
            kind = ?field.r#type(),
            "no Apex mapping for field type, emitting `unknown`"
        );
    }

    if field.label() == Label::Repeated {
        format!("List<{apex_type}>")
    } else {
        apex_type.to_string()
    }
}

/// Strips `.<package>.` out of a fully-qualified type reference.
/// References into other packages come back unchanged.
pub fn unqualify<'a>(type_ref: &'a str, package: &str) -> Cow<'a, str> {
    let prefix = format!(".{package}.");

    if type_ref.contains(&prefix) {
        Cow::Owned(type_ref.replace(&prefix, ""))
    } else {
        Cow::Borrowed(type_ref)
    }
}
