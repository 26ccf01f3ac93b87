use super::*;

impl Runtime {
    /// `===`. Buffers compare by identity only, never by content.
    pub fn strict_equals(&self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Float(l), Value::Float(r)) => l == r,
            (Value::Number(l), Value::Float(r)) => (*l as f64) == *r,
            (Value::Float(l), Value::Number(r)) => *l == (*r as f64),
            (Value::BigInt(l), Value::BigInt(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Buffer(l), Value::Buffer(r)) => l.same_instance(r),
            (Value::TypedArray(l), Value::TypedArray(r)) => Rc::ptr_eq(l, r),
            (Value::Object(l), Value::Object(r)) => Rc::ptr_eq(l, r),
            (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }

    /// `==`. Two objects (buffers included) are equal only when identical; an
    /// object against a primitive is first reduced with the default hint.
    pub fn loose_equals(&mut self, left: &Value, right: &Value) -> Result<bool> {
        if self.strict_equals(left, right) {
            return Ok(true);
        }

        match (left, right) {
            (Value::Null, Value::Undefined) | (Value::Undefined, Value::Null) => Ok(true),
            (Value::BigInt(l), Value::String(r)) | (Value::String(r), Value::BigInt(l)) => {
                Ok(Self::parse_bigint_literal(r).is_some_and(|parsed| parsed == *l))
            }
            (Value::BigInt(l), Value::Number(_) | Value::Float(_)) => {
                Ok(Self::number_bigint_equal(l, self.to_number(right)?))
            }
            (Value::Number(_) | Value::Float(_), Value::BigInt(r)) => {
                Ok(Self::number_bigint_equal(r, self.to_number(left)?))
            }
            (Value::Number(_) | Value::Float(_), Value::String(_))
            | (Value::String(_), Value::Number(_) | Value::Float(_)) => {
                Ok(self.to_number(left)? == self.to_number(right)?)
            }
            (Value::Bool(_), _) => {
                let coerced = number_value(self.to_number(left)?);
                self.loose_equals(&coerced, right)
            }
            (_, Value::Bool(_)) => {
                let coerced = number_value(self.to_number(right)?);
                self.loose_equals(left, &coerced)
            }
            _ if Self::is_comparable_primitive(left) && !right.is_primitive() => {
                let primitive = self.to_primitive(right, PrimitiveHint::Default)?;
                self.loose_equals(left, &primitive)
            }
            _ if !left.is_primitive() && Self::is_comparable_primitive(right) => {
                let primitive = self.to_primitive(left, PrimitiveHint::Default)?;
                self.loose_equals(&primitive, right)
            }
            _ => Ok(false),
        }
    }

    fn is_comparable_primitive(value: &Value) -> bool {
        matches!(
            value,
            Value::String(_) | Value::Number(_) | Value::Float(_) | Value::BigInt(_)
        )
    }

    fn parse_bigint_literal(src: &str) -> Option<JsBigInt> {
        let trimmed = src.trim();
        if trimmed.is_empty() {
            return Some(JsBigInt::zero());
        }
        JsBigInt::parse_bytes(trimmed.as_bytes(), 10)
    }

    fn number_bigint_equal(bigint: &JsBigInt, number: f64) -> bool {
        if !number.is_finite() || number.fract() != 0.0 {
            return false;
        }
        bigint_to_f64(bigint) == number
    }
}
