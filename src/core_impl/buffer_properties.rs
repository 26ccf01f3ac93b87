use super::*;

/// How a property key resolves against a buffer before any stored property
/// is consulted.
#[derive(Debug, Clone, PartialEq)]
enum BufferKey {
    Virtual(Value),
    Index(usize),
    OutOfRange,
    Buffer,
    Other,
}

fn classify_buffer_key(buffer: &BufferValue, key: &str) -> BufferKey {
    let byte_length = buffer.len();
    match key {
        "length" | "byteLength" => BufferKey::Virtual(Value::Number(byte_length as i64)),
        "byteOffset" => BufferKey::Virtual(Value::Number(0)),
        "BYTES_PER_ELEMENT" => BufferKey::Virtual(Value::Number(1)),
        "buffer" => BufferKey::Buffer,
        _ => match canonical_array_index(key) {
            Some(index) if index < byte_length => BufferKey::Index(index),
            Some(_) => BufferKey::OutOfRange,
            None => BufferKey::Other,
        },
    }
}

impl Runtime {
    pub fn get_property(&mut self, target: &Value, key: &Value) -> Result<Value> {
        let key = self.property_key_to_storage_key(key)?;
        self.get_named_property(target, &key)
    }

    pub fn set_property(&mut self, target: &Value, key: &Value, value: Value) -> Result<()> {
        let key = self.property_key_to_storage_key(key)?;
        self.set_named_property(target, &key, value)
    }

    /// The `in` operator.
    pub fn has_property(&mut self, target: &Value, key: &Value) -> Result<bool> {
        let key = self.property_key_to_storage_key(key)?;
        match target {
            Value::Buffer(buffer) => Ok(match classify_buffer_key(buffer, &key) {
                BufferKey::Virtual(_) | BufferKey::Index(_) => true,
                BufferKey::OutOfRange | BufferKey::Buffer => false,
                BufferKey::Other => match buffer {
                    BufferValue::Raw(_) => false,
                    BufferValue::Object(object) => {
                        let properties = object.properties.borrow();
                        properties.has_entry(&key)
                            || properties
                                .prototype
                                .as_ref()
                                .is_some_and(|prototype| Self::ordinary_has(prototype, &key))
                    }
                },
            }),
            Value::TypedArray(view) => Ok(match key.as_str() {
                "length" | "byteLength" | "byteOffset" | "BYTES_PER_ELEMENT" | "buffer" => true,
                _ => match canonical_array_index(&key) {
                    Some(index) => index < view.len(),
                    None => Self::ordinary_has(&self.realm.object_prototype, &key),
                },
            }),
            Value::Object(object) => Ok(Self::ordinary_has(object, &key)),
            Value::Function(_) => {
                Ok(key == "name" || Self::ordinary_has(&self.realm.object_prototype, &key))
            }
            _ => Err(Error::TypeError(format!(
                "cannot use 'in' operator to search for '{key}' in {}",
                self.type_of(target)
            ))),
        }
    }

    /// Returns false for non-configurable buffer slots, which stay in place.
    pub fn delete_property(&mut self, target: &Value, key: &Value) -> Result<bool> {
        let key = self.property_key_to_storage_key(key)?;
        match target {
            Value::Buffer(buffer) => Ok(match classify_buffer_key(buffer, &key) {
                BufferKey::Virtual(_) | BufferKey::Index(_) => false,
                BufferKey::OutOfRange | BufferKey::Buffer => true,
                BufferKey::Other => {
                    if let BufferValue::Object(object) = buffer {
                        object.properties.borrow_mut().remove_entry(&key);
                    }
                    true
                }
            }),
            Value::Object(object) => {
                object.borrow_mut().remove_entry(&key);
                Ok(true)
            }
            Value::Undefined | Value::Null => Err(Error::TypeError(format!(
                "cannot delete property '{key}' of {}",
                self.type_of(target)
            ))),
            _ => Ok(true),
        }
    }

    pub(crate) fn get_named_property(&self, target: &Value, key: &str) -> Result<Value> {
        match target {
            Value::Buffer(buffer) => Ok(self.buffer_get(buffer, key)),
            Value::TypedArray(view) => Ok(self.typed_array_get(view, key)),
            Value::Object(object) => Ok(Self::ordinary_get(object, key).unwrap_or(Value::Undefined)),
            Value::Function(function) => {
                if key == "name" {
                    return Ok(Value::String(function.name.clone()));
                }
                Ok(Self::ordinary_get(&self.realm.object_prototype, key)
                    .unwrap_or(Value::Undefined))
            }
            Value::String(text) => {
                if key == "length" {
                    Ok(Value::Number(text.encode_utf16().count() as i64))
                } else if let Some(index) = canonical_array_index(key) {
                    // Indices count UTF-16 units, like `length`; a lone
                    // surrogate half reads as U+FFFD.
                    Ok(text
                        .encode_utf16()
                        .nth(index)
                        .map(|unit| Value::String(String::from_utf16_lossy(&[unit])))
                        .unwrap_or(Value::Undefined))
                } else {
                    Ok(Self::ordinary_get(&self.realm.object_prototype, key)
                        .unwrap_or(Value::Undefined))
                }
            }
            Value::Undefined | Value::Null => Err(Error::TypeError(format!(
                "cannot read property '{key}' of {}",
                self.value_label(target)
            ))),
            Value::Bool(_) | Value::Number(_) | Value::Float(_) | Value::BigInt(_) => {
                Ok(Self::ordinary_get(&self.realm.object_prototype, key)
                    .unwrap_or(Value::Undefined))
            }
        }
    }

    pub(crate) fn set_named_property(&mut self, target: &Value, key: &str, value: Value) -> Result<()> {
        match target {
            Value::Buffer(buffer) => self.buffer_set(buffer, key, value),
            Value::TypedArray(view) => self.typed_array_set(view, key, value),
            Value::Object(object) => {
                object.borrow_mut().set_entry(key.to_string(), value);
                Ok(())
            }
            Value::Undefined | Value::Null => Err(Error::TypeError(format!(
                "cannot set property '{key}' of {}",
                self.value_label(target)
            ))),
            _ => Ok(()),
        }
    }

    pub(crate) fn buffer_get(&self, buffer: &BufferValue, key: &str) -> Value {
        match classify_buffer_key(buffer, key) {
            BufferKey::Virtual(value) => value,
            BufferKey::Index(index) => buffer
                .store()
                .get(index)
                .map(|byte| Value::Number(i64::from(byte)))
                .unwrap_or(Value::Undefined),
            BufferKey::OutOfRange | BufferKey::Buffer => Value::Undefined,
            BufferKey::Other => match buffer {
                BufferValue::Raw(_) => Value::Undefined,
                BufferValue::Object(object) => {
                    let properties = object.properties.borrow();
                    properties
                        .get_entry(key)
                        .or_else(|| {
                            properties
                                .prototype
                                .as_ref()
                                .and_then(|prototype| Self::ordinary_get(prototype, key))
                        })
                        .unwrap_or(Value::Undefined)
                }
            },
        }
    }

    pub(crate) fn buffer_set(&mut self, buffer: &BufferValue, key: &str, value: Value) -> Result<()> {
        match classify_buffer_key(buffer, key) {
            BufferKey::Virtual(_) | BufferKey::OutOfRange | BufferKey::Buffer => Ok(()),
            BufferKey::Index(index) => {
                let byte = to_uint8(self.to_number(&value)?);
                buffer.store().set(index, byte);
                Ok(())
            }
            BufferKey::Other => {
                if let BufferValue::Object(object) = buffer {
                    object
                        .properties
                        .borrow_mut()
                        .set_entry(key.to_string(), value);
                }
                Ok(())
            }
        }
    }

    pub(crate) fn ordinary_get(object: &Rc<RefCell<ObjectValue>>, key: &str) -> Option<Value> {
        let mut current = Some(object.clone());
        while let Some(object) = current {
            let next = {
                let object = object.borrow();
                if let Some(value) = object.get_entry(key) {
                    return Some(value);
                }
                object.prototype.clone()
            };
            current = next;
        }
        None
    }

    pub(crate) fn ordinary_has(object: &Rc<RefCell<ObjectValue>>, key: &str) -> bool {
        let mut current = Some(object.clone());
        while let Some(object) = current {
            let next = {
                let object = object.borrow();
                if object.has_entry(key) {
                    return true;
                }
                object.prototype.clone()
            };
            current = next;
        }
        false
    }

    pub(crate) fn property_key_to_storage_key(&mut self, key: &Value) -> Result<String> {
        match key {
            Value::String(key) => Ok(key.clone()),
            Value::Number(key) => Ok(key.to_string()),
            Value::Float(key) => Ok(format_float(*key)),
            _ => self.to_string(key),
        }
    }
}
