use super::*;

// Multi-byte elements are little-endian for both buffer variants.
impl Runtime {
    /// Builds a view over `source` without copying. Trailing bytes that do not
    /// fill a whole element are not covered by the view.
    pub fn create_view(&mut self, source: &Value, kind: TypedArrayKind) -> Result<Value> {
        let Value::Buffer(buffer) = source else {
            return Err(Error::TypeError(format!(
                "{} source must be a buffer, got {}",
                kind.name(),
                self.value_label(source)
            )));
        };
        let length = buffer.len() / kind.bytes_per_element();
        self.trace_view_line(format!(
            "[view] {} over {} elements={length}",
            kind.name(),
            self.value_label(source)
        ));
        Ok(Value::TypedArray(Rc::new(TypedArrayValue {
            kind,
            buffer: buffer.clone(),
            byte_offset: 0,
            length,
        })))
    }

    pub(crate) fn typed_array_get(&self, view: &TypedArrayValue, key: &str) -> Value {
        match key {
            "length" => Value::Number(view.len() as i64),
            "byteLength" => Value::Number(view.byte_length() as i64),
            "byteOffset" => Value::Number(view.byte_offset as i64),
            "BYTES_PER_ELEMENT" => Value::Number(view.kind.bytes_per_element() as i64),
            "buffer" => Value::Buffer(view.buffer.clone()),
            _ => match canonical_array_index(key) {
                Some(index) => Self::typed_array_get_index(view, index),
                None => Self::ordinary_get(&self.realm.object_prototype, key)
                    .unwrap_or(Value::Undefined),
            },
        }
    }

    pub(crate) fn typed_array_set(
        &mut self,
        view: &TypedArrayValue,
        key: &str,
        value: Value,
    ) -> Result<()> {
        match canonical_array_index(key) {
            Some(index) => self.typed_array_set_index(view, index, value),
            None => Ok(()),
        }
    }

    pub fn typed_array_get_index(view: &TypedArrayValue, index: usize) -> Value {
        if index >= view.len() {
            return Value::Undefined;
        }
        let bytes_per_element = view.kind.bytes_per_element();
        let start = view.byte_offset + index * bytes_per_element;
        let Some(bytes) = view.store().read_range(start, bytes_per_element) else {
            return Value::Undefined;
        };
        match view.kind {
            TypedArrayKind::Int8 => Value::Number(i64::from(i8::from_le_bytes([bytes[0]]))),
            TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => {
                Value::Number(i64::from(bytes[0]))
            }
            TypedArrayKind::Int16 => {
                Value::Number(i64::from(i16::from_le_bytes([bytes[0], bytes[1]])))
            }
            TypedArrayKind::Uint16 => {
                Value::Number(i64::from(u16::from_le_bytes([bytes[0], bytes[1]])))
            }
            TypedArrayKind::Int32 => Value::Number(i64::from(i32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            TypedArrayKind::Uint32 => Value::Number(i64::from(u32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            TypedArrayKind::Float32 => number_value(f64::from(f32::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            TypedArrayKind::Float64 => number_value(f64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
            TypedArrayKind::BigInt64 => Value::BigInt(JsBigInt::from(i64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]))),
            TypedArrayKind::BigUint64 => Value::BigInt(JsBigInt::from(u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]))),
        }
    }

    /// Out-of-range writes are ignored without coercing `value`.
    pub fn typed_array_set_index(
        &mut self,
        view: &TypedArrayValue,
        index: usize,
        value: Value,
    ) -> Result<()> {
        if index >= view.len() {
            return Ok(());
        }
        let bytes_per_element = view.kind.bytes_per_element();
        let start = view.byte_offset + index * bytes_per_element;
        let bytes = self.typed_array_bytes_for_value(view.kind, &value)?;
        if bytes.len() != bytes_per_element {
            return Err(Error::ScriptRuntime(
                "typed array element size mismatch".into(),
            ));
        }
        view.store().write_range(start, &bytes);
        Ok(())
    }

    /// The bytes covered by the view's elements.
    pub(crate) fn typed_array_raw_bytes(view: &TypedArrayValue) -> Vec<u8> {
        view.store()
            .read_range(view.byte_offset, view.byte_length())
            .unwrap_or_default()
    }

    fn typed_array_bytes_for_value(
        &mut self,
        kind: TypedArrayKind,
        value: &Value,
    ) -> Result<Vec<u8>> {
        match kind {
            TypedArrayKind::BigInt64 => {
                let unsigned = Self::bigint_element_bits(value)?;
                Ok((unsigned as i64).to_le_bytes().to_vec())
            }
            TypedArrayKind::BigUint64 => {
                Ok(Self::bigint_element_bits(value)?.to_le_bytes().to_vec())
            }
            TypedArrayKind::Uint8Clamped => {
                let number = self.to_number(value)?;
                let clamped = if number.is_nan() {
                    0.0
                } else {
                    number.clamp(0.0, 255.0)
                };
                Ok(vec![round_half_even(clamped) as u8])
            }
            TypedArrayKind::Uint8 => Ok(vec![to_uint8(self.to_number(value)?)]),
            TypedArrayKind::Float32 => Ok((self.to_number(value)? as f32).to_le_bytes().to_vec()),
            TypedArrayKind::Float64 => Ok(self.to_number(value)?.to_le_bytes().to_vec()),
            TypedArrayKind::Int8
            | TypedArrayKind::Int16
            | TypedArrayKind::Uint16
            | TypedArrayKind::Int32
            | TypedArrayKind::Uint32 => {
                let width = kind.bytes_per_element();
                let bits = Self::wrap_integer(self.to_number(value)?, width * 8);
                Ok(bits.to_le_bytes()[..width].to_vec())
            }
        }
    }

    /// Reduces `number` modulo `2^bits`; the low `bits` of the two's-complement
    /// result are the same for the signed and unsigned element kinds.
    fn wrap_integer(number: f64, bits: usize) -> u64 {
        number_to_i128(number).rem_euclid(1i128 << bits) as u64
    }

    /// The low 64 bits of a BigInt element value.
    fn bigint_element_bits(value: &Value) -> Result<u64> {
        let Value::BigInt(value) = value else {
            return Err(Error::TypeError(
                "Cannot convert number to BigInt typed array element".into(),
            ));
        };
        let modulus = JsBigInt::from(1u8) << 64usize;
        let mut unsigned = value % &modulus;
        if unsigned.sign() == Sign::Minus {
            unsigned += &modulus;
        }
        Ok(unsigned.to_u64().unwrap_or(0))
    }
}
