//! AST node definitions for WebIDL.
//!
//! Every node is a plain owned value, immutable once the parser returns it.
//! The tagged-enum shape mirrors the grammar one-to-one, and every node
//! derives `Serialize` so a tree can be dumped as JSON without a separate
//! printing pass. Tag values follow the webidl2 convention ("interface",
//! "interface mixin", "callback", ...).

use serde::Serialize;
use widl_core::text::TextRange;

// ============================================================================
// Definitions
// ============================================================================

/// A top-level definition. The parse result is a `Vec<Definition>` in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Definition {
    #[serde(rename = "interface")]
    Interface(Interface),
    #[serde(rename = "interface mixin")]
    InterfaceMixin(InterfaceMixin),
    #[serde(rename = "callback interface")]
    CallbackInterface(CallbackInterface),
    #[serde(rename = "namespace")]
    Namespace(Namespace),
    #[serde(rename = "dictionary")]
    Dictionary(Dictionary),
    #[serde(rename = "enum")]
    Enum(EnumDefinition),
    #[serde(rename = "typedef")]
    Typedef(Typedef),
    #[serde(rename = "callback")]
    CallbackFunction(CallbackFunction),
    #[serde(rename = "includes")]
    Includes(IncludesStatement),
}

impl Definition {
    /// The definition's name. Includes statements are named after their
    /// target.
    pub fn name(&self) -> &str {
        match self {
            Definition::Interface(d) => &d.name,
            Definition::InterfaceMixin(d) => &d.name,
            Definition::CallbackInterface(d) => &d.name,
            Definition::Namespace(d) => &d.name,
            Definition::Dictionary(d) => &d.name,
            Definition::Enum(d) => &d.name,
            Definition::Typedef(d) => &d.name,
            Definition::CallbackFunction(d) => &d.name,
            Definition::Includes(d) => &d.target,
        }
    }

    pub fn span(&self) -> TextRange {
        match self {
            Definition::Interface(d) => d.span,
            Definition::InterfaceMixin(d) => d.span,
            Definition::CallbackInterface(d) => d.span,
            Definition::Namespace(d) => d.span,
            Definition::Dictionary(d) => d.span,
            Definition::Enum(d) => d.span,
            Definition::Typedef(d) => d.span,
            Definition::CallbackFunction(d) => d.span,
            Definition::Includes(d) => d.span,
        }
    }

    pub fn is_partial(&self) -> bool {
        match self {
            Definition::Interface(d) => d.partial,
            Definition::InterfaceMixin(d) => d.partial,
            Definition::Namespace(d) => d.partial,
            Definition::Dictionary(d) => d.partial,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
    pub partial: bool,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// `interface mixin M { ... };` — no inheritance, no constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceMixin {
    pub name: String,
    pub members: Vec<Member>,
    pub partial: bool,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackInterface {
    pub name: String,
    pub members: Vec<Member>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Namespace {
    pub name: String,
    pub members: Vec<Member>,
    pub partial: bool,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dictionary {
    pub name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Field>,
    pub partial: bool,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDefinition {
    pub name: String,
    /// String values in declaration order.
    pub values: Vec<EnumValue>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub value: String,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typedef {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: Type,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// `callback F = ReturnType (args);`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackFunction {
    pub name: String,
    #[serde(rename = "returnType")]
    pub return_type: Type,
    pub arguments: Vec<Argument>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// `A includes B;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncludesStatement {
    pub target: String,
    pub includes: String,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

// ============================================================================
// Members
// ============================================================================

/// A member of an interface, mixin, callback interface, or namespace body.
/// The parser restricts which variants each container accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Member {
    #[serde(rename = "const")]
    Const(Const),
    #[serde(rename = "attribute")]
    Attribute(Attribute),
    #[serde(rename = "operation")]
    Operation(Operation),
    #[serde(rename = "constructor")]
    Constructor(Constructor),
    #[serde(rename = "iterable")]
    Iterable(Iterable),
    #[serde(rename = "maplike")]
    Maplike(Maplike),
    #[serde(rename = "setlike")]
    Setlike(Setlike),
}

impl Member {
    pub fn span(&self) -> TextRange {
        match self {
            Member::Const(m) => m.span,
            Member::Attribute(m) => m.span,
            Member::Operation(m) => m.span,
            Member::Constructor(m) => m.span,
            Member::Iterable(m) => m.span,
            Member::Maplike(m) => m.span,
            Member::Setlike(m) => m.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Const {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: Type,
    pub value: Value,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// `static` / `stringifier` qualifier on an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeSpecial {
    Static,
    Stringifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<AttributeSpecial>,
    pub readonly: bool,
    pub inherit: bool,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationSpecial {
    Getter,
    Setter,
    Deleter,
    Static,
    Stringifier,
}

/// A regular or special operation. The bare `stringifier;` form is an
/// operation with no name and no return type. Special operations may omit
/// the name; regular ones may not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<OperationSpecial>,
    #[serde(rename = "returnType")]
    pub return_type: Option<Type>,
    pub arguments: Vec<Argument>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constructor {
    pub arguments: Vec<Argument>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// `iterable<V>`, `iterable<K, V>`, or `async iterable<...>(args)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iterable {
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(rename = "keyType")]
    pub key_type: Option<Type>,
    #[serde(rename = "valueType")]
    pub value_type: Type,
    /// Only async iterables may declare arguments.
    pub arguments: Vec<Argument>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maplike {
    pub readonly: bool,
    #[serde(rename = "keyType")]
    pub key_type: Type,
    #[serde(rename = "valueType")]
    pub value_type: Type,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Setlike {
    pub readonly: bool,
    #[serde(rename = "valueType")]
    pub value_type: Type,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// A dictionary member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: Type,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

// ============================================================================
// Arguments and extended attributes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: Type,
    pub optional: bool,
    pub variadic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub span: TextRange,
}

/// A bracketed annotation: `[Clamp]`, `[Exposed=Window]`,
/// `[LegacyFactoryFunction=Image(DOMString src)]`, ...
///
/// Parsed generically as name + optional right-hand side + optional argument
/// list; which attributes are legal where is a validation concern, not a
/// syntax one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedAttribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<ExtAttrRhs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Argument>>,
    pub span: TextRange,
}

/// The right-hand side of `[Name=...]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ExtAttrRhs {
    Identifier(String),
    IdentifierList(Vec<String>),
    String(String),
    StringList(Vec<String>),
    Integer(String),
    Decimal(String),
    Wildcard,
}

// ============================================================================
// Types
// ============================================================================

/// A type reference. Pure value data; named types are references by name,
/// never live links to their definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Type {
    #[serde(rename = "primitive")]
    Primitive { name: PrimitiveType },
    /// A named (user-defined or buffer) type.
    #[serde(rename = "identifier")]
    Identifier { name: String },
    #[serde(rename = "sequence")]
    Sequence { element: Box<Type> },
    #[serde(rename = "FrozenArray")]
    FrozenArray { element: Box<Type> },
    #[serde(rename = "ObservableArray")]
    ObservableArray { element: Box<Type> },
    /// `record<K, V>` — K is restricted to a string type by the grammar.
    #[serde(rename = "record")]
    Record {
        key: PrimitiveType,
        value: Box<Type>,
    },
    #[serde(rename = "Promise")]
    Promise { element: Box<Type> },
    /// Ordered union member types.
    #[serde(rename = "union")]
    Union { members: Vec<Type> },
    /// `T?` — wraps the whole preceding type expression.
    #[serde(rename = "nullable")]
    Nullable { inner: Box<Type> },
}

impl Type {
    pub fn primitive(name: PrimitiveType) -> Type {
        Type::Primitive { name }
    }

    pub fn named(name: impl Into<String>) -> Type {
        Type::Identifier { name: name.into() }
    }

    pub fn nullable(inner: Type) -> Type {
        Type::Nullable {
            inner: Box::new(inner),
        }
    }
}

/// Built-in types with a fixed spelling. Multi-word spellings serialize the
/// way they are written in IDL source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimitiveType {
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "byte")]
    Byte,
    #[serde(rename = "octet")]
    Octet,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "unsigned short")]
    UnsignedShort,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "unsigned long")]
    UnsignedLong,
    #[serde(rename = "long long")]
    LongLong,
    #[serde(rename = "unsigned long long")]
    UnsignedLongLong,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "unrestricted float")]
    UnrestrictedFloat,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "unrestricted double")]
    UnrestrictedDouble,
    #[serde(rename = "bigint")]
    Bigint,
    #[serde(rename = "DOMString")]
    DOMString,
    #[serde(rename = "ByteString")]
    ByteString,
    #[serde(rename = "USVString")]
    USVString,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "symbol")]
    Symbol,
}

impl PrimitiveType {
    /// Whether this is one of the three string types (valid as a record key).
    pub fn is_string_type(self) -> bool {
        matches!(
            self,
            PrimitiveType::DOMString | PrimitiveType::ByteString | PrimitiveType::USVString
        )
    }
}

// ============================================================================
// Literal values (const values and defaults)
// ============================================================================

/// A constant or default value. Numeric literal text is preserved verbatim
/// so that `0x10`, `1e3`, and `-0` survive serialization unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Value {
    #[serde(rename = "boolean")]
    Boolean { value: bool },
    #[serde(rename = "integer")]
    Integer { value: String },
    #[serde(rename = "decimal")]
    Decimal { value: String },
    #[serde(rename = "string")]
    String { value: String },
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "Infinity")]
    Infinity { negative: bool },
    #[serde(rename = "NaN")]
    NaN,
    /// `[]`
    #[serde(rename = "sequence")]
    EmptySequence,
    /// `{}`
    #[serde(rename = "dictionary")]
    EmptyDictionary,
    #[serde(rename = "undefined")]
    Undefined,
}
