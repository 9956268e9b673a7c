//! Runtime Value Representation
//!
//! Defines the closed set of value kinds the evaluator understands.
//! Values reference each other only through [`HeapRef`] handles, which keeps
//! cyclic graphs expressible without shared ownership.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::handle::{ChanId, FuncId, HeapRef};

/// Runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),

    /// Signed integer of any width
    Int(i64),

    /// Unsigned integer of any width
    Uint(u64),

    /// Floating point (IEEE 754)
    Float(f64),

    Complex { re: f64, im: f64 },

    Str(String),

    /// Variable-length sequence
    Seq(Vec<Value>),

    /// Keyed mapping, entries in insertion order
    Map(Vec<(Value, Value)>),

    /// Fixed-size aggregate of identical elements
    Array(Vec<Value>),

    /// Aggregate with named members
    Struct(StructValue),

    /// Pointer into a heap slot; `None` is the null pointer
    Ref(Option<HeapRef>),

    /// Dynamic slot holding one concrete alternative; `None` is nil
    Dyn(Option<Box<Value>>),

    /// Executable reference
    Func(Option<FuncId>),

    /// Channel-like resource handle
    Chan(Option<ChanId>),

    /// Raw untyped memory reference
    RawPtr(Option<NonZeroUsize>),

    /// Value of a distinct named type
    Named(NamedValue),
}

/// Struct value with member names preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    pub type_name: String,
    /// Members in declaration order.
    pub fields: Vec<Field>,
}

/// Named struct member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// A value tagged with a distinct type name; behaves as its underlying kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub type_name: String,
    pub value: Box<Value>,
}

/// Value category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Complex,
    Str,
    Seq,
    Map,
    Array,
    Struct,
    Ref,
    Dyn,
    Func,
    Chan,
    RawPtr,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Str => "str",
            Kind::Seq => "seq",
            Kind::Map => "map",
            Kind::Array => "array",
            Kind::Struct => "struct",
            Kind::Ref => "ref",
            Kind::Dyn => "dyn",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::RawPtr => "raw_ptr",
        };
        f.write_str(name)
    }
}

/// Type descriptor used as half of a visit identity.
///
/// Two values of the same kind but different declared names are different
/// types, so a named wrapper and a struct sharing storage never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey<'a> {
    pub kind: Kind,
    pub name: Option<&'a str>,
}

impl fmt::Display for TypeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}({})", name, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Value {
    /// The nil dynamic value
    pub fn nil() -> Self {
        Value::Dyn(None)
    }

    /// Box `value` into a dynamic slot
    pub fn boxed(value: Value) -> Self {
        Value::Dyn(Some(Box::new(value)))
    }

    pub fn reference(target: HeapRef) -> Self {
        Value::Ref(Some(target))
    }

    pub fn null_ref() -> Self {
        Value::Ref(None)
    }

    pub fn seq<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Seq(items.into_iter().collect())
    }

    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(items.into_iter().collect())
    }

    pub fn map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    /// Build a struct value from `(member, value)` pairs in declaration order
    pub fn record<N, F, I>(type_name: N, fields: I) -> Self
    where
        N: Into<String>,
        F: Into<String>,
        I: IntoIterator<Item = (F, Value)>,
    {
        Value::Struct(StructValue {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| Field { name: name.into(), value })
                .collect(),
        })
    }

    /// Wrap `value` in a distinct named type
    pub fn named(type_name: impl Into<String>, value: Value) -> Self {
        Value::Named(NamedValue {
            type_name: type_name.into(),
            value: Box::new(value),
        })
    }

    /// Strip named-type wrappers
    pub fn underlying(&self) -> &Value {
        let mut current = self;
        while let Value::Named(named) = current {
            current = &named.value;
        }
        current
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Complex { .. } => Kind::Complex,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Array(_) => Kind::Array,
            Value::Struct(_) => Kind::Struct,
            Value::Ref(_) => Kind::Ref,
            Value::Dyn(_) => Kind::Dyn,
            Value::Func(_) => Kind::Func,
            Value::Chan(_) => Kind::Chan,
            Value::RawPtr(_) => Kind::RawPtr,
            Value::Named(named) => named.value.kind(),
        }
    }

    /// Kind plus the declared type name, if any
    pub fn type_key(&self) -> TypeKey<'_> {
        let name = match self {
            Value::Named(named) => Some(named.type_name.as_str()),
            Value::Struct(s) => Some(s.type_name.as_str()),
            _ => None,
        };
        TypeKey { kind: self.kind(), name }
    }

    /// Length of text, sequence, map or array values
    pub fn length(&self) -> Option<usize> {
        match self.underlying() {
            Value::Str(s) => Some(s.len()),
            Value::Seq(items) | Value::Array(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
