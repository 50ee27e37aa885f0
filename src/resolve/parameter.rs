use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Types every registry resolves out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BuiltinType {
    #[strum(serialize = "byte", serialize = "i8", to_string = "byte")]
    Byte,
    #[strum(serialize = "short", serialize = "i16", to_string = "short")]
    Short,
    #[strum(
        serialize = "int",
        serialize = "integer",
        serialize = "i32",
        to_string = "int"
    )]
    Int,
    #[strum(serialize = "long", serialize = "i64", to_string = "long")]
    Long,
    #[strum(serialize = "float", serialize = "f32", to_string = "float")]
    Float,
    #[strum(serialize = "double", serialize = "f64", to_string = "double")]
    Double,
    #[strum(serialize = "boolean", serialize = "bool", to_string = "boolean")]
    Boolean,
    #[strum(serialize = "char", serialize = "character", to_string = "char")]
    Char,
    #[strum(
        serialize = "string",
        serialize = "str",
        serialize = "text",
        to_string = "string"
    )]
    String,
}

/// Normalized name of a declared parameter type.
///
/// Built-in aliases collapse to one canonical key (`integer` == `int`); any
/// other name is trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey(String);

impl TypeKey {
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim();
        match BuiltinType::from_str(trimmed) {
            Ok(builtin) => TypeKey(builtin.to_string()),
            Err(_) => TypeKey(trimmed.to_ascii_lowercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn builtin(&self) -> Option<BuiltinType> {
        BuiltinType::from_str(&self.0).ok()
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        TypeKey::new(name)
    }
}

impl From<String> for TypeKey {
    fn from(name: String) -> Self {
        TypeKey::new(&name)
    }
}

impl From<BuiltinType> for TypeKey {
    fn from(builtin: BuiltinType) -> Self {
        TypeKey(builtin.to_string())
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TypeKey {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TypeKey {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TypeKey, <D as Deserializer<'de>>::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Err(serde::de::Error::custom("parameter type must not be empty"));
        }
        Ok(TypeKey::new(&raw))
    }
}

/// Metadata of one command parameter, as declared at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParameter {
    name: String,
    #[serde(rename = "type")]
    type_key: TypeKey,
    #[serde(default)]
    greedy: bool,
    #[serde(default)]
    single: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    default: Option<String>,
    #[serde(skip)]
    position: usize,
}

impl CommandParameter {
    pub fn new(name: impl Into<String>, type_key: impl Into<TypeKey>) -> Self {
        Self {
            name: name.into(),
            type_key: type_key.into(),
            greedy: false,
            single: false,
            optional: false,
            default: None,
            position: 0,
        }
    }

    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, raw: impl Into<String>) -> Self {
        self.default = Some(raw.into());
        self
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// `single` wins over `greedy` when both are declared.
    pub fn consumes_all_string(&self) -> bool {
        self.greedy && !self.single
    }

    /// Whether the binder may fill this parameter without input.
    pub fn has_fallback(&self) -> bool {
        self.optional || self.default.is_some()
    }
}
