use super::*;

/// Human-readable type label for diagnostic and printing collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassDescription {
    /// A full object with a class tag such as `ArrayBuffer`.
    Object(&'static str),
    /// A value category that is not a full object, such as `buffer`.
    Primitive(&'static str),
}

impl ClassDescription {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Object(label) | Self::Primitive(label) => label,
        }
    }
}

impl Runtime {
    pub fn describe_class(&self, value: &Value) -> ClassDescription {
        match value {
            Value::Buffer(BufferValue::Raw(_)) => ClassDescription::Primitive("buffer"),
            Value::Buffer(BufferValue::Object(_)) => ClassDescription::Object("ArrayBuffer"),
            Value::TypedArray(view) => ClassDescription::Object(view.kind.name()),
            Value::Object(_) | Value::Function(_) => ClassDescription::Object(self.class_name(value)),
            Value::Undefined => ClassDescription::Primitive("undefined"),
            Value::Null => ClassDescription::Primitive("null"),
            Value::Bool(_) => ClassDescription::Primitive("boolean"),
            Value::Number(_) | Value::Float(_) => ClassDescription::Primitive("number"),
            Value::BigInt(_) => ClassDescription::Primitive("bigint"),
            Value::String(_) => ClassDescription::Primitive("string"),
        }
    }

    /// The tag `Object.prototype.toString` reports. Both buffer variants
    /// answer `ArrayBuffer`.
    pub fn class_name(&self, value: &Value) -> &'static str {
        match value {
            Value::Buffer(_) => "ArrayBuffer",
            Value::TypedArray(view) => view.kind.name(),
            Value::Object(object) => match &object.borrow().wrapped_primitive {
                Some(wrapped) => self.class_name(wrapped),
                None => "Object",
            },
            Value::Function(_) => "Function",
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) | Value::Float(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
        }
    }

    pub fn object_to_string_tag(&self, value: &Value) -> String {
        format!("[object {}]", self.class_name(value))
    }

    pub fn type_of(&self, value: &Value) -> &'static str {
        match value {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) | Value::Float(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Buffer(_) | Value::TypedArray(_) | Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// `value instanceof ArrayBuffer`.
    pub fn instance_of_array_buffer(&self, value: &Value) -> bool {
        let prototype = match value {
            Value::Buffer(BufferValue::Raw(_)) => return true,
            Value::Buffer(BufferValue::Object(object)) => object.properties.borrow().prototype(),
            Value::Object(object) => object.borrow().prototype(),
            _ => return false,
        };
        let mut current = prototype;
        while let Some(object) = current {
            if Rc::ptr_eq(&object, &self.realm.array_buffer_prototype) {
                return true;
            }
            current = object.borrow().prototype();
        }
        false
    }

    pub(crate) fn value_label(&self, value: &Value) -> String {
        match value {
            Value::Buffer(BufferValue::Raw(store)) => format!("buffer[{}]", store.len()),
            Value::Buffer(BufferValue::Object(object)) => {
                format!("ArrayBuffer[{}]", object.store.len())
            }
            Value::TypedArray(view) => format!("{}[{}]", view.kind.name(), view.len()),
            Value::String(text) => format!("{text:?}"),
            Value::Number(v) => v.to_string(),
            Value::Float(v) => format_float(*v),
            Value::BigInt(v) => format!("{v}n"),
            Value::Bool(v) => v.to_string(),
            Value::Object(_) | Value::Function(_) => self.object_to_string_tag(value),
            Value::Undefined => "undefined".into(),
            Value::Null => "null".into(),
        }
    }
}
