use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

use num_bigint::{BigInt as JsBigInt, Sign};
use num_traits::{ToPrimitive, Zero};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    TypeError(String),
    RangeError(String),
    SyntaxError(String),
    ScriptRuntime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError(msg) => write!(f, "TypeError: {msg}"),
            Self::RangeError(msg) => write!(f, "RangeError: {msg}"),
            Self::SyntaxError(msg) => write!(f, "SyntaxError: {msg}"),
            Self::ScriptRuntime(msg) => write!(f, "script runtime error: {msg}"),
        }
    }
}

impl StdError for Error {}

mod core_impl;
mod number_format;
mod runtime_api;
mod runtime_state;
mod runtime_values;

use number_format::*;
use runtime_state::*;
use runtime_values::{BuiltinFunction, FunctionKind};

pub use core_impl::{ClassDescription, EncodingMode};
pub use runtime_api::Runtime;
pub use runtime_values::{
    BufferValue, ByteStore, FunctionValue, NativeFunction, ObjectBufferValue, ObjectValue,
    TypedArrayKind, TypedArrayValue, Value,
};
