use super::*;

/// Owns the realm (prototype objects), coercion bookkeeping and the trace log.
///
/// All buffer operations go through a `Runtime` because property lookup and
/// primitive coercion may reach user-installed prototype hooks.
#[derive(Debug)]
pub struct Runtime {
    pub(crate) realm: RealmState,
    pub(crate) coercion_state: CoercionState,
    pub(crate) trace_state: TraceState,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            realm: RealmState::new(),
            coercion_state: CoercionState::default(),
            trace_state: TraceState::default(),
        }
    }

    /// Allocates a zero-filled raw buffer: no prototype, no own properties.
    pub fn new_raw_buffer(&self, byte_length: usize) -> Value {
        Value::Buffer(BufferValue::Raw(Rc::new(ByteStore::zeroed(byte_length))))
    }

    /// Allocates a zero-filled `ArrayBuffer` object inheriting from
    /// `ArrayBuffer.prototype`.
    pub fn new_array_buffer(&self, byte_length: usize) -> Value {
        self.object_buffer_from_store(Rc::new(ByteStore::zeroed(byte_length)))
    }

    pub(crate) fn raw_buffer_from_bytes(bytes: Vec<u8>) -> Value {
        Value::Buffer(BufferValue::Raw(Rc::new(ByteStore::from_bytes(bytes))))
    }

    fn object_buffer_from_store(&self, store: Rc<ByteStore>) -> Value {
        Value::Buffer(BufferValue::Object(Rc::new(ObjectBufferValue {
            store,
            properties: RefCell::new(ObjectValue::with_prototype(Some(
                self.realm.array_buffer_prototype.clone(),
            ))),
        })))
    }

    /// A plain object inheriting from `Object.prototype`.
    pub fn new_object(&self) -> Value {
        Value::Object(Rc::new(RefCell::new(ObjectValue::with_prototype(Some(
            self.realm.object_prototype.clone(),
        )))))
    }

    pub fn new_native_function<F>(&self, name: &str, function: F) -> Value
    where
        F: Fn(&mut Runtime, &Value, &[Value]) -> Result<Value> + 'static,
    {
        Value::Function(Rc::new(FunctionValue {
            name: name.to_string(),
            kind: FunctionKind::Native(Rc::new(function)),
        }))
    }

    pub fn array_buffer_prototype(&self) -> Value {
        Value::Object(self.realm.array_buffer_prototype.clone())
    }

    pub fn object_prototype(&self) -> Value {
        Value::Object(self.realm.object_prototype.clone())
    }

    pub fn call_function(&mut self, callee: &Value, this: &Value, args: &[Value]) -> Result<Value> {
        let Value::Function(function) = callee else {
            return Err(Error::TypeError(format!(
                "{} is not a function",
                self.type_of(callee)
            )));
        };
        match &function.kind {
            FunctionKind::Builtin(BuiltinFunction::ObjectPrototypeToString) => {
                Ok(Value::String(self.object_to_string_tag(this)))
            }
            FunctionKind::Builtin(BuiltinFunction::ObjectPrototypeValueOf) => self.to_object(this),
            FunctionKind::Native(native) => {
                let native = native.clone();
                stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, || native(self, this, args))
            }
        }
    }

    pub fn set_coercion_depth_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(Error::ScriptRuntime(
                "set_coercion_depth_limit requires at least 1 level".into(),
            ));
        }
        self.coercion_state.depth_limit = limit;
        Ok(())
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.to_stderr = enabled;
    }

    pub fn set_trace_coercion(&mut self, enabled: bool) {
        self.trace_state.coercion = enabled;
    }

    pub fn set_trace_views(&mut self, enabled: bool) {
        self.trace_state.views = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::ScriptRuntime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    pub(crate) fn trace_coercion_line(&mut self, line: String) {
        if self.trace_state.enabled && self.trace_state.coercion {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_view_line(&mut self, line: String) {
        if self.trace_state.enabled && self.trace_state.views {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_line(&mut self, line: String) {
        if self.trace_state.enabled {
            if self.trace_state.to_stderr {
                eprintln!("{line}");
            }
            if self.trace_state.logs.len() >= self.trace_state.log_limit {
                self.trace_state.logs.pop_front();
            }
            self.trace_state.logs.push_back(line);
        }
    }
}
