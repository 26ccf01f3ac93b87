use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveHint {
    Default,
    Number,
    String,
}

const COERCION_FAILED: &str = "coercion to primitive failed";

impl Runtime {
    /// Buffers and other objects come back as the same instance; string,
    /// number and boolean primitives are boxed.
    pub fn to_object(&mut self, value: &Value) -> Result<Value> {
        match value {
            Value::Undefined | Value::Null => Err(Error::TypeError(format!(
                "cannot convert {} to object",
                self.value_label(value)
            ))),
            Value::Buffer(_) | Value::TypedArray(_) | Value::Object(_) | Value::Function(_) => {
                Ok(value.clone())
            }
            Value::Bool(_)
            | Value::Number(_)
            | Value::Float(_)
            | Value::BigInt(_)
            | Value::String(_) => {
                let mut wrapper =
                    ObjectValue::with_prototype(Some(self.realm.object_prototype.clone()));
                wrapper.wrapped_primitive = Some(value.clone());
                Ok(Value::Object(Rc::new(RefCell::new(wrapper))))
            }
        }
    }

    pub fn to_string(&mut self, value: &Value) -> Result<String> {
        match value {
            Value::Undefined => Ok("undefined".into()),
            Value::Null => Ok("null".into()),
            Value::Bool(v) => Ok(if *v { "true".into() } else { "false".into() }),
            Value::Number(v) => Ok(v.to_string()),
            Value::Float(v) => Ok(format_float(*v)),
            Value::BigInt(v) => Ok(v.to_string()),
            Value::String(v) => Ok(v.clone()),
            Value::Buffer(_) | Value::TypedArray(_) | Value::Object(_) | Value::Function(_) => {
                let primitive = self.to_primitive(value, PrimitiveHint::String)?;
                self.to_string(&primitive)
            }
        }
    }

    /// Buffers have no numeric fast path: the string form is parsed instead.
    pub fn to_number(&mut self, value: &Value) -> Result<f64> {
        match value {
            Value::Undefined => Ok(f64::NAN),
            Value::Null => Ok(0.0),
            Value::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            Value::Number(v) => Ok(*v as f64),
            Value::Float(v) => Ok(*v),
            Value::String(v) => Ok(parse_js_number_from_string(v)),
            Value::BigInt(_) => Err(Error::TypeError(
                "Cannot convert a BigInt value to a number".into(),
            )),
            Value::Buffer(_) => {
                let rendered = self.to_string(value)?;
                Ok(parse_js_number_from_string(&rendered))
            }
            Value::TypedArray(_) | Value::Object(_) | Value::Function(_) => {
                let primitive = self.to_primitive(value, PrimitiveHint::Number)?;
                self.to_number(&primitive)
            }
        }
    }

    /// The `+` operator.
    pub fn add_values(&mut self, left: &Value, right: &Value) -> Result<Value> {
        let left = self.to_primitive(left, PrimitiveHint::Default)?;
        let right = self.to_primitive(right, PrimitiveHint::Default)?;

        if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) {
            let left = self.to_string(&left)?;
            let right = self.to_string(&right)?;
            return Ok(Value::String(format!("{left}{right}")));
        }

        if matches!(left, Value::BigInt(_)) || matches!(right, Value::BigInt(_)) {
            return match (&left, &right) {
                (Value::BigInt(l), Value::BigInt(r)) => Ok(Value::BigInt(l + r)),
                _ => Err(Error::TypeError(
                    "cannot mix BigInt and other types in addition".into(),
                )),
            };
        }

        match (&left, &right) {
            (Value::Number(l), Value::Number(r)) => {
                if let Some(sum) = l.checked_add(*r) {
                    Ok(Value::Number(sum))
                } else {
                    Ok(Value::Float((*l as f64) + (*r as f64)))
                }
            }
            _ => {
                let sum = self.to_number(&left)? + self.to_number(&right)?;
                Ok(number_value(sum))
            }
        }
    }

    pub(crate) fn to_primitive(&mut self, value: &Value, hint: PrimitiveHint) -> Result<Value> {
        if value.is_primitive() {
            return Ok(value.clone());
        }
        if let Value::Object(object) = value {
            if let Some(wrapped) = object.borrow().wrapped_primitive.clone() {
                return Ok(wrapped);
            }
        }

        // Buffers always try toString first, whatever the hint.
        let order = match (value, hint) {
            (Value::Buffer(_), _) | (_, PrimitiveHint::String) => ["toString", "valueOf"],
            (_, PrimitiveHint::Default | PrimitiveHint::Number) => ["valueOf", "toString"],
        };

        self.enter_coercion(value)?;
        let result = self.ordinary_to_primitive(value, order);
        self.coercion_state.depth -= 1;
        result
    }

    fn ordinary_to_primitive(&mut self, value: &Value, order: [&str; 2]) -> Result<Value> {
        let label = self.value_label(value);
        for method_name in order {
            let method = self.coercion_hook(value, method_name)?;
            if !method.is_callable() {
                self.trace_coercion_line(format!("[coerce] {label} {method_name} not callable"));
                continue;
            }
            let coerced = self.call_function(&method, value, &[])?;
            if coerced.is_primitive() {
                self.trace_coercion_line(format!(
                    "[coerce] {label} {method_name} -> {}",
                    self.value_label(&coerced)
                ));
                return Ok(coerced);
            }
            self.trace_coercion_line(format!(
                "[coerce] {label} {method_name} -> non-primitive {}",
                self.value_label(&coerced)
            ));
        }
        self.trace_coercion_line(format!("[coerce] {label} failed: {COERCION_FAILED}"));
        Err(Error::TypeError(COERCION_FAILED.into()))
    }

    /// Raw buffers carry no prototype link of their own, so their hooks are
    /// looked up on `ArrayBuffer.prototype` directly.
    fn coercion_hook(&self, value: &Value, method_name: &str) -> Result<Value> {
        match value {
            Value::Buffer(BufferValue::Raw(_)) => {
                Ok(Self::ordinary_get(&self.realm.array_buffer_prototype, method_name)
                    .unwrap_or(Value::Undefined))
            }
            _ => self.get_named_property(value, method_name),
        }
    }

    fn enter_coercion(&mut self, value: &Value) -> Result<()> {
        if self.coercion_state.depth >= self.coercion_state.depth_limit {
            let label = self.value_label(value);
            self.trace_coercion_line(format!(
                "[coerce] {label} aborted at depth {}",
                self.coercion_state.depth
            ));
            return Err(Error::RangeError(
                "coercion recursion limit exceeded".into(),
            ));
        }
        self.coercion_state.depth += 1;
        Ok(())
    }
}
