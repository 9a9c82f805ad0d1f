// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Generic message model and frame / payload codec

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use byteorder::{BigEndian, ByteOrder};
use prost::{
    bytes::Buf,
    encoding::{decode_key, decode_varint, encode_key, encode_varint, WireType},
};

use crate::{
    schema::{self, FieldKind, Schema},
    DecodeError,
};

/// Frame magic prefix
pub const FRAME_MAGIC: [u8; 2] = *b"##";

/// Frame header length (magic, type, payload length)
pub const FRAME_HEADER_LEN: usize = 8;

/// Decoded field value
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Bool(bool),
    UInt(u64),
    SInt(i64),
    Enum(u32),
    Bytes(Vec<u8>),
    Text(String),
    Message(Fields),
    Repeated(Vec<Value>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::SInt(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Fields> for Value {
    fn from(v: Fields) -> Self {
        Value::Message(v)
    }
}

/// Field set, keyed by field number (and thus emitted in ascending order)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Fields(BTreeMap<u32, Value>);

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a field value
    pub fn set(&mut self, number: u32, value: impl Into<Value>) -> &mut Self {
        self.0.insert(number, value.into());
        self
    }

    /// Set a field value if present
    pub fn set_opt<V: Into<Value>>(&mut self, number: u32, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.0.insert(number, v.into());
        }
        self
    }

    /// Set an enumeration field
    pub fn set_enum(&mut self, number: u32, value: impl Into<u32>) -> &mut Self {
        self.0.insert(number, Value::Enum(value.into()));
        self
    }

    /// Set a repeated field, omitted when empty
    pub fn set_repeated(&mut self, number: u32, values: Vec<Value>) -> &mut Self {
        if !values.is_empty() {
            self.0.insert(number, Value::Repeated(values));
        }
        self
    }

    /// Fetch a raw field value
    pub fn get(&self, number: u32) -> Option<&Value> {
        self.0.get(&number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bool(&self, number: u32) -> Result<Option<bool>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::Bool(v)) => Ok(Some(*v)),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn u32(&self, number: u32) -> Result<Option<u32>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::UInt(v)) => u32::try_from(*v)
                .map(Some)
                .map_err(|_| DecodeError::OutOfRange),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn u64(&self, number: u32) -> Result<Option<u64>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::UInt(v)) => Ok(Some(*v)),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn i64(&self, number: u32) -> Result<Option<i64>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::SInt(v)) => Ok(Some(*v)),
            _ => Err(DecodeError::InvalidType),
        }
    }

    /// Fetch an enumeration field, converting to `E`
    pub fn enumeration<E: TryFrom<u32>>(&self, number: u32) -> Result<Option<E>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::Enum(v)) => E::try_from(*v)
                .map(Some)
                .map_err(|_| DecodeError::OutOfRange),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn bytes(&self, number: u32) -> Result<Option<Vec<u8>>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::Bytes(v)) => Ok(Some(v.clone())),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn text(&self, number: u32) -> Result<Option<String>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::Text(v)) => Ok(Some(v.clone())),
            _ => Err(DecodeError::InvalidType),
        }
    }

    pub fn message(&self, number: u32) -> Result<Option<&Fields>, DecodeError> {
        match self.get(number) {
            None => Ok(None),
            Some(Value::Message(v)) => Ok(Some(v)),
            _ => Err(DecodeError::InvalidType),
        }
    }

    /// Fetch the elements of a repeated field (empty if absent)
    pub fn repeated(&self, number: u32) -> Result<&[Value], DecodeError> {
        match self.get(number) {
            None => Ok(&[]),
            Some(Value::Repeated(v)) => Ok(v),
            _ => Err(DecodeError::InvalidType),
        }
    }

    /// Encode fields into a protobuf payload
    pub fn encode(&self, buff: &mut Vec<u8>) {
        for (number, value) in self.0.iter() {
            encode_value(*number, value, buff);
        }
    }

    /// Decode a protobuf payload against the provided schema
    pub fn decode(schema: &Schema, mut buff: &[u8]) -> Result<Self, DecodeError> {
        let mut fields = Fields::new();

        while buff.has_remaining() {
            let (number, wire_type) =
                decode_key(&mut buff).map_err(|_| DecodeError::InvalidKey)?;

            // Skip fields not described by the schema
            let def = match schema.field(number) {
                Some(d) => d,
                None => {
                    skip_field(wire_type, &mut buff)?;
                    continue;
                }
            };

            if wire_type != def.kind.wire_type() {
                return Err(DecodeError::WireTypeMismatch);
            }

            let value = decode_value(&def.kind, &mut buff)?;

            if def.repeated {
                match fields.0.entry(number).or_insert(Value::Repeated(Vec::new())) {
                    Value::Repeated(v) => v.push(value),
                    _ => return Err(DecodeError::InvalidType),
                }
            } else {
                // Last value wins for singular fields
                fields.0.insert(number, value);
            }
        }

        Ok(fields)
    }
}

/// Generic wire message
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    pub type_id: u16,
    pub fields: Fields,
}

impl Message {
    pub fn new(type_id: u16, fields: Fields) -> Self {
        Self { type_id, fields }
    }

    /// Schema for this message type, if known
    pub fn schema(&self) -> Option<&'static Schema> {
        schema::lookup(self.type_id)
    }

    /// Encode message payload without framing
    pub fn encode_payload(&self) -> Vec<u8> {
        let mut buff = Vec::new();
        self.fields.encode(&mut buff);
        buff
    }

    /// Encode message into a wire frame
    pub fn encode(&self) -> Vec<u8> {
        let payload = self.encode_payload();

        let mut header = [0u8; FRAME_HEADER_LEN];
        header[..2].copy_from_slice(&FRAME_MAGIC);
        BigEndian::write_u16(&mut header[2..4], self.type_id);
        BigEndian::write_u32(&mut header[4..8], payload.len() as u32);

        let mut buff = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
        buff.extend_from_slice(&header);
        buff.extend_from_slice(&payload);
        buff
    }

    /// Read the message type from a frame header
    pub fn peek_type(buff: &[u8]) -> Result<u16, DecodeError> {
        if buff.len() < FRAME_HEADER_LEN {
            return Err(DecodeError::Truncated);
        }
        if buff[..2] != FRAME_MAGIC {
            return Err(DecodeError::InvalidMagic);
        }
        Ok(BigEndian::read_u16(&buff[2..4]))
    }

    /// Decode a message from a wire frame
    ///
    /// Bytes following the declared payload (transport padding) are ignored.
    pub fn decode(buff: &[u8]) -> Result<Self, DecodeError> {
        let type_id = Self::peek_type(buff)?;
        let len = BigEndian::read_u32(&buff[4..8]) as usize;

        let payload = &buff[FRAME_HEADER_LEN..];
        if payload.len() < len {
            return Err(DecodeError::Truncated);
        }

        Self::decode_payload(type_id, &payload[..len])
    }

    /// Decode an unframed payload for the provided message type
    pub fn decode_payload(type_id: u16, payload: &[u8]) -> Result<Self, DecodeError> {
        let schema = schema::lookup(type_id).ok_or(DecodeError::UnknownType)?;
        let fields = Fields::decode(schema, payload)?;

        #[cfg(feature = "log")]
        log::trace!("decoded {} ({} fields)", schema.name, fields.len());

        Ok(Self { type_id, fields })
    }
}

fn encode_value(number: u32, value: &Value, buff: &mut Vec<u8>) {
    match value {
        Value::Bool(v) => {
            encode_key(number, WireType::Varint, buff);
            encode_varint(*v as u64, buff);
        }
        Value::UInt(v) => {
            encode_key(number, WireType::Varint, buff);
            encode_varint(*v, buff);
        }
        Value::SInt(v) => {
            encode_key(number, WireType::Varint, buff);
            encode_varint(((*v << 1) ^ (*v >> 63)) as u64, buff);
        }
        Value::Enum(v) => {
            encode_key(number, WireType::Varint, buff);
            encode_varint(*v as u64, buff);
        }
        Value::Bytes(v) => encode_delimited(number, v, buff),
        Value::Text(v) => encode_delimited(number, v.as_bytes(), buff),
        Value::Message(v) => {
            let mut inner = Vec::new();
            v.encode(&mut inner);
            encode_delimited(number, &inner, buff);
        }
        Value::Repeated(values) => {
            for v in values {
                encode_value(number, v, buff);
            }
        }
    }
}

fn encode_delimited(number: u32, data: &[u8], buff: &mut Vec<u8>) {
    encode_key(number, WireType::LengthDelimited, buff);
    encode_varint(data.len() as u64, buff);
    buff.extend_from_slice(data);
}

fn varint(buff: &mut &[u8]) -> Result<u64, DecodeError> {
    decode_varint(buff).map_err(|_| DecodeError::Truncated)
}

fn length_delimited<'a>(buff: &mut &'a [u8]) -> Result<&'a [u8], DecodeError> {
    let len = usize::try_from(varint(buff)?).map_err(|_| DecodeError::Truncated)?;
    if buff.len() < len {
        return Err(DecodeError::Truncated);
    }

    let (head, tail) = buff.split_at(len);
    *buff = tail;
    Ok(head)
}

fn decode_value(kind: &FieldKind, buff: &mut &[u8]) -> Result<Value, DecodeError> {
    let v = match kind {
        FieldKind::Bool => match varint(buff)? {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            _ => return Err(DecodeError::OutOfRange),
        },
        FieldKind::UInt32 => {
            let v = varint(buff)?;
            if v > u32::MAX as u64 {
                return Err(DecodeError::OutOfRange);
            }
            Value::UInt(v)
        }
        FieldKind::UInt64 => Value::UInt(varint(buff)?),
        FieldKind::SInt64 => {
            let v = varint(buff)?;
            Value::SInt(((v >> 1) as i64) ^ -((v & 1) as i64))
        }
        FieldKind::Enum(values) => {
            let v = u32::try_from(varint(buff)?).map_err(|_| DecodeError::OutOfRange)?;
            if !values.contains(&v) {
                return Err(DecodeError::OutOfRange);
            }
            Value::Enum(v)
        }
        FieldKind::Bytes => Value::Bytes(length_delimited(buff)?.to_vec()),
        FieldKind::Text => {
            let d = length_delimited(buff)?;
            let s = core::str::from_utf8(d).map_err(|_| DecodeError::InvalidUtf8)?;
            Value::Text(s.into())
        }
        FieldKind::Message(schema) => Value::Message(Fields::decode(schema, length_delimited(buff)?)?),
    };

    Ok(v)
}

fn skip_field(wire_type: WireType, buff: &mut &[u8]) -> Result<(), DecodeError> {
    let n = match wire_type {
        WireType::Varint => {
            varint(buff)?;
            return Ok(());
        }
        WireType::LengthDelimited => {
            length_delimited(buff)?;
            return Ok(());
        }
        WireType::SixtyFourBit => 8,
        WireType::ThirtyTwoBit => 4,
        WireType::StartGroup | WireType::EndGroup => {
            return Err(DecodeError::UnsupportedWireType)
        }
    };

    if buff.len() < n {
        return Err(DecodeError::Truncated);
    }
    *buff = &buff[n..];
    Ok(())
}
