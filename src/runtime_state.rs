use super::*;

pub(crate) const DEFAULT_COERCION_DEPTH_LIMIT: usize = 128;

#[derive(Debug)]
pub(crate) struct RealmState {
    pub(crate) object_prototype: Rc<RefCell<ObjectValue>>,
    pub(crate) array_buffer_prototype: Rc<RefCell<ObjectValue>>,
}

impl RealmState {
    pub(crate) fn new() -> Self {
        let mut object_prototype = ObjectValue::with_prototype(None);
        object_prototype.set_entry(
            "toString".to_string(),
            Self::builtin_function("toString", BuiltinFunction::ObjectPrototypeToString),
        );
        object_prototype.set_entry(
            "valueOf".to_string(),
            Self::builtin_function("valueOf", BuiltinFunction::ObjectPrototypeValueOf),
        );
        let object_prototype = Rc::new(RefCell::new(object_prototype));
        let array_buffer_prototype = Rc::new(RefCell::new(ObjectValue::with_prototype(Some(
            object_prototype.clone(),
        ))));
        Self {
            object_prototype,
            array_buffer_prototype,
        }
    }

    fn builtin_function(name: &str, builtin: BuiltinFunction) -> Value {
        Value::Function(Rc::new(FunctionValue {
            name: name.to_string(),
            kind: FunctionKind::Builtin(builtin),
        }))
    }
}

#[derive(Debug)]
pub(crate) struct CoercionState {
    pub(crate) depth: usize,
    pub(crate) depth_limit: usize,
}

impl Default for CoercionState {
    fn default() -> Self {
        Self {
            depth: 0,
            depth_limit: DEFAULT_COERCION_DEPTH_LIMIT,
        }
    }
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) coercion: bool,
    pub(crate) views: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            coercion: true,
            views: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}
