use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A resolved parameter value.
#[derive(Debug, Clone)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Char(char),
    Str(String),
    /// Optional parameter with no input and no default.
    Absent,
    Custom(CustomValue),
}

impl Value {
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(CustomValue::new(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(c) => c.downcast_ref(),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Boolean(_) => "boolean",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Absent => "absent",
            Value::Custom(c) => c.type_name(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(x) => write!(f, "{x}"),
            Value::Short(x) => write!(f, "{x}"),
            Value::Int(x) => write!(f, "{x}"),
            Value::Long(x) => write!(f, "{x}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Double(x) => write!(f, "{x}"),
            Value::Boolean(x) => write!(f, "{x}"),
            Value::Char(x) => write!(f, "'{x}'"),
            Value::Str(x) => write!(f, "\"{x}\""),
            Value::Absent => write!(f, "-"),
            Value::Custom(c) => write!(f, "<{}>", c.type_name()),
        }
    }
}

/// Type-erased value produced by a user-registered resolver.
#[derive(Clone)]
pub struct CustomValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Conversion from a resolver's output into the tagged [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

macro_rules! into_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

into_value!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    char => Char,
    String => Str,
);

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Absent, IntoValue::into_value)
    }
}

/// Typed extraction back out of a [`Value`].
pub trait FromValue<'a>: Sized {
    fn try_extract(value: &'a Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> FromValue<'a> for $ty {
                fn try_extract(value: &'a Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value!(
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    char => Char,
);

impl<'a> FromValue<'a> for &'a str {
    fn try_extract(value: &'a Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for String {
    fn try_extract(value: &'a Value) -> Option<Self> {
        <&str>::try_extract(value).map(str::to_string)
    }
}

impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn try_extract(value: &'a Value) -> Option<Self> {
        match value {
            Value::Absent => Some(None),
            other => T::try_extract(other).map(Some),
        }
    }
}
