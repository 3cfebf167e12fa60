//! Rendering of value trees to indented block text.
//!
//! This module provides the [`Serializer`] that turns a [`Value`] into
//! YAML-shaped text, and the [`ValueSerializer`] bridge that turns any
//! `Serialize` type into a [`Value`] first.
//!
//! ## Layout
//!
//! Structural values render in one of two modes:
//!
//! - **Block**: one entry per line, nesting expressed by indentation
//! - **Inline**: `[a, b]` and `{k: v}` on a single line
//!
//! Block mode is the default. Mapping keys made only of ASCII digits switch
//! their value to inline mode, which keeps numbered groups such as capture
//! tables on one line each:
//!
//! ```rust
//! use string_grammar::{to_string, value};
//!
//! let captures = value!({
//!     "captures": {"1": {"name": "storage"}, "2": {"name": "punctuation"}}
//! });
//! assert_eq!(
//!     to_string(&captures).unwrap(),
//!     "captures:\n  1: {name: storage}\n  2: {name: punctuation}"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use string_grammar::{value, EmitOptions, Serializer};
//!
//! let mut serializer = Serializer::new(EmitOptions::new());
//! serializer.serialize_value(&value!({"a": 1, "b": [1, 2, 3]})).unwrap();
//! assert_eq!(serializer.into_inner(), "a: 1\nb:\n  - 1\n  - 2\n  - 3");
//! ```

use crate::scalar::render_str;
use crate::{EmitOptions, Error, Mapping, Number, Result, Value};
use serde::{ser, Serialize};

/// Continuation lines of a sequence entry sit under the text after `- `.
const DASH_CONTINUATION: &str = "\n  ";

/// Renders [`Value`] trees with the configured [`EmitOptions`].
pub struct Serializer {
    output: String,
    options: EmitOptions,
}

impl Serializer {
    pub fn new(options: EmitOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the block rendering of `value` to the output.
    pub fn serialize_value(&mut self, value: &Value) -> Result<()> {
        let rendered = self.block(value)?;
        self.output.push_str(&rendered);
        if self.options.trailing_newline {
            self.output.push('\n');
        }
        Ok(())
    }

    fn block(&self, value: &Value) -> Result<String> {
        match value {
            Value::Sequence(seq) => self.block_sequence(seq),
            Value::Mapping(map) => self.block_mapping(map),
            Value::String(s) => render_str(s, self.options.indent),
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
        }
    }

    fn block_sequence(&self, seq: &[Value]) -> Result<String> {
        if seq.is_empty() {
            return Ok("[]".to_string());
        }

        let lines = if seq.iter().all(Value::is_scalar) {
            seq.iter()
                .map(|v| Ok(format!("- {}", self.block(v)?)))
                .collect::<Result<Vec<_>>>()?
        } else {
            seq.iter()
                .map(|v| {
                    let item = self.block(v)?;
                    Ok(format!("- {}", item.replace('\n', DASH_CONTINUATION)))
                })
                .collect::<Result<Vec<_>>>()?
        };
        Ok(lines.join("\n"))
    }

    fn block_mapping(&self, map: &Mapping) -> Result<String> {
        if map.is_empty() {
            return Ok("{}".to_string());
        }

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            if is_index_key(key) {
                entries.push(format!("{}: {}", key, self.inline(value)?));
                continue;
            }

            let rendered = self.block(value)?;
            let nested = match value {
                Value::Sequence(_) => true,
                // `a: b: 1` is not valid YAML
                Value::Mapping(inner) => !inner.is_empty(),
                _ => false,
            };
            if nested || rendered.contains('\n') {
                entries.push(format!("{}:\n{}", key, indent(&rendered, self.options.indent)));
            } else {
                entries.push(format!("{}: {}", key, rendered));
            }
        }
        Ok(entries.join("\n"))
    }

    fn inline(&self, value: &Value) -> Result<String> {
        match value {
            Value::Sequence(seq) => {
                let items = seq
                    .iter()
                    .map(|v| self.inline(v))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("[{}]", items.join(", ")))
            }
            Value::Mapping(map) => {
                let items = map
                    .iter()
                    .map(|(k, v)| Ok(format!("{}: {}", k, self.inline(v)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", items.join(", ")))
            }
            // A block scalar cannot live inside a flow collection
            Value::String(s) if s.contains('\n') => {
                serde_json::to_string(s).map_err(Error::custom)
            }
            Value::String(s) => render_str(s, self.options.indent),
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
        }
    }
}

fn is_index_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Prefixes every non-blank line of `text` with `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts any `Serialize` type into a [`Value`].
///
/// This is where out-of-domain input is rejected: map keys must be strings,
/// integers, booleans or chars, and enum variants may not carry data.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Mapping,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<Value, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Sequence(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_value(&format!(
            "newtype variant `{}::{}`",
            name, variant
        )))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_value(&format!(
            "tuple variant `{}::{}`",
            name, variant
        )))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_value(&format!(
            "struct variant `{}::{}`",
            name, variant
        )))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: Mapping::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_to_string(key.serialize(ValueSerializer)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Mapping(self.map))
    }
}

fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(Number::Integer(i)) => Ok(i.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Error::unsupported_value("null map key")),
        Value::Number(Number::Float(_)) => Err(Error::unsupported_value("float map key")),
        Value::Sequence(_) => Err(Error::unsupported_value("sequence map key")),
        Value::Mapping(_) => Err(Error::unsupported_value("mapping map key")),
    }
}
