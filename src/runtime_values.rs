use super::*;

/// Fixed-length byte region backing buffer values and the views built on them.
///
/// The length is fixed at allocation; only byte contents change afterwards.
#[derive(Debug)]
pub struct ByteStore {
    length: usize,
    bytes: RefCell<Box<[u8]>>,
}

impl ByteStore {
    pub(crate) fn zeroed(length: usize) -> Self {
        Self {
            length,
            bytes: RefCell::new(vec![0; length].into_boxed_slice()),
        }
    }

    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            length: bytes.len(),
            bytes: RefCell::new(bytes.into_boxed_slice()),
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.borrow().get(index).copied()
    }

    /// Returns false when `index` is out of range; the store is left untouched.
    pub(crate) fn set(&self, index: usize, byte: u8) -> bool {
        match self.bytes.borrow_mut().get_mut(index) {
            Some(slot) => {
                *slot = byte;
                true
            }
            None => false,
        }
    }

    pub(crate) fn read_range(&self, start: usize, len: usize) -> Option<Vec<u8>> {
        let end = start.checked_add(len)?;
        self.bytes.borrow().get(start..end).map(<[u8]>::to_vec)
    }

    pub(crate) fn write_range(&self, start: usize, src: &[u8]) -> bool {
        let Some(end) = start.checked_add(src.len()) else {
            return false;
        };
        let mut bytes = self.bytes.borrow_mut();
        let Some(dst) = bytes.get_mut(start..end) else {
            return false;
        };
        dst.copy_from_slice(src);
        true
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.borrow().to_vec()
    }
}

/// The object-like buffer: a store plus ordinary own properties and a prototype.
#[derive(Debug)]
pub struct ObjectBufferValue {
    pub(crate) store: Rc<ByteStore>,
    pub(crate) properties: RefCell<ObjectValue>,
}

#[derive(Debug, Clone)]
pub enum BufferValue {
    Raw(Rc<ByteStore>),
    Object(Rc<ObjectBufferValue>),
}

impl BufferValue {
    pub fn store(&self) -> &Rc<ByteStore> {
        match self {
            Self::Raw(store) => store,
            Self::Object(buffer) => &buffer.store,
        }
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Identity comparison. Each buffer owns its store, so store identity is
    /// buffer identity.
    pub fn same_instance(&self, other: &BufferValue) -> bool {
        Rc::ptr_eq(self.store(), other.store())
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.store().to_vec()
    }
}

impl PartialEq for BufferValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub fn bytes_per_element(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 | Self::BigInt64 | Self::BigUint64 => 8,
        }
    }

    pub fn is_bigint(&self) -> bool {
        matches!(self, Self::BigInt64 | Self::BigUint64)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
            Self::BigInt64 => "BigInt64Array",
            Self::BigUint64 => "BigUint64Array",
        }
    }
}

/// A fixed-layout element overlay sharing the source buffer's store.
#[derive(Debug, Clone)]
pub struct TypedArrayValue {
    pub(crate) kind: TypedArrayKind,
    pub(crate) buffer: BufferValue,
    pub(crate) byte_offset: usize,
    pub(crate) length: usize,
}

impl TypedArrayValue {
    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_length(&self) -> usize {
        self.length * self.kind.bytes_per_element()
    }

    pub fn buffer(&self) -> &BufferValue {
        &self.buffer
    }

    pub(crate) fn store(&self) -> &Rc<ByteStore> {
        self.buffer.store()
    }
}

pub type NativeFunction = dyn Fn(&mut Runtime, &Value, &[Value]) -> Result<Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuiltinFunction {
    ObjectPrototypeToString,
    ObjectPrototypeValueOf,
}

#[derive(Clone)]
pub(crate) enum FunctionKind {
    Builtin(BuiltinFunction),
    Native(Rc<NativeFunction>),
}

#[derive(Clone)]
pub struct FunctionValue {
    pub(crate) name: String,
    pub(crate) kind: FunctionKind,
}

impl FunctionValue {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            FunctionKind::Builtin(builtin) => format!("{builtin:?}"),
            FunctionKind::Native(_) => "native".to_string(),
        };
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}


#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(i64),
    Float(f64),
    BigInt(JsBigInt),
    String(String),
    Buffer(BufferValue),
    TypedArray(Rc<TypedArrayValue>),
    Object(Rc<RefCell<ObjectValue>>),
    Function(Rc<FunctionValue>),
}

impl Value {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::String(_)
                | Self::Bool(_)
                | Self::Number(_)
                | Self::Float(_)
                | Self::BigInt(_)
                | Self::Null
                | Self::Undefined
        )
    }

    pub fn as_buffer(&self) -> Option<&BufferValue> {
        match self {
            Self::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

/// Objects, views and functions compare by identity, like buffers; the
/// contents behind a shared reference are never walked.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l == r,
            (Self::BigInt(l), Self::BigInt(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::Buffer(l), Self::Buffer(r)) => l == r,
            (Self::TypedArray(l), Self::TypedArray(r)) => Rc::ptr_eq(l, r),
            (Self::Object(l), Self::Object(r)) => Rc::ptr_eq(l, r),
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectValue {
    entries: Vec<(String, Value)>,
    index_by_key: HashMap<String, usize>,
    pub(crate) prototype: Option<Rc<RefCell<ObjectValue>>>,
    pub(crate) wrapped_primitive: Option<Value>,
}

impl ObjectValue {
    pub(crate) fn with_prototype(prototype: Option<Rc<RefCell<ObjectValue>>>) -> Self {
        Self {
            prototype,
            ..Self::default()
        }
    }

    pub fn set_entry(&mut self, key: String, value: Value) {
        if let Some(index) = self.index_by_key.get(&key).copied() {
            if let Some((_, existing)) = self.entries.get_mut(index) {
                *existing = value;
                return;
            }
        }
        let index = self.entries.len();
        self.entries.push((key.clone(), value));
        self.index_by_key.insert(key, index);
    }

    pub fn get_entry(&self, key: &str) -> Option<Value> {
        self.index_by_key
            .get(key)
            .and_then(|index| self.entries.get(*index))
            .map(|(_, value)| value.clone())
    }

    pub fn has_entry(&self, key: &str) -> bool {
        self.index_by_key.contains_key(key)
    }

    pub fn remove_entry(&mut self, key: &str) -> bool {
        let Some(index) = self.index_by_key.remove(key) else {
            return false;
        };
        self.entries.remove(index);
        for (position, (name, _)) in self.entries.iter().enumerate().skip(index) {
            self.index_by_key.insert(name.clone(), position);
        }
        true
    }

    pub fn prototype(&self) -> Option<Rc<RefCell<ObjectValue>>> {
        self.prototype.clone()
    }
}
