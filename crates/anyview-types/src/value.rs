use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::rc::Rc;

/// Ordered name -> value mapping, the uniform property shape of the pipeline
pub type Props = IndexMap<String, Value>;

/// Capability interface for structured objects entering the pipeline.
///
/// Rust has no implicit reflection, so a concrete type opts in by implementing
/// this trait and enumerating its own fields in `props`. The optional methods
/// are the capability probes the node wrapper consults, in place of dynamic
/// attribute lookup:
///
/// - `data` exposes a nested payload that one-level unwrapping should reach;
/// - `identity` is a stable id used by id-substituting serialization;
/// - `name` is a human-facing short name, also used to seed root paths;
/// - `prop` resolves computed properties that are not plain fields.
pub trait Introspect {
    fn type_name(&self) -> &str;

    /// Ordered field enumeration
    fn props(&self) -> Props;

    fn data(&self) -> Option<Value> {
        None
    }

    fn identity(&self) -> Option<String> {
        None
    }

    fn name(&self) -> Option<String> {
        None
    }

    /// Computed property lookup; fields from `props` win over this
    fn prop(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// A runtime value whose shape is discovered at render time
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Props),
    Object(Rc<dyn Introspect>),
}

impl Value {
    pub fn object(obj: impl Introspect + 'static) -> Self {
        Value::Object(Rc::new(obj))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<dyn Introspect>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Number of contained elements (characters for strings)
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Null or zero-length
    pub fn is_empty(&self) -> bool {
        match self.len() {
            Some(len) => len == 0,
            None => self.is_null(),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Seq(_) => "sequence".to_string(),
            Value::Map(_) => "mapping".to_string(),
            Value::Object(obj) => obj.type_name().to_string(),
        }
    }

    /// Cheap non-recursive summary: element count for sequences,
    /// `<count>x2+` for ordered mappings, else the type name
    pub fn hint(&self) -> String {
        match self {
            Value::Seq(items) => items.len().to_string(),
            Value::Map(map) => format!("{}x2+", map.len()),
            other => other.type_name(),
        }
    }

    /// Identity of the value, when it carries one
    pub fn identity(&self) -> Option<String> {
        match self {
            Value::Object(obj) => obj.identity().or_else(|| obj.name()),
            _ => None,
        }
    }

    /// Source-like representation: strings quoted, objects by identity
    /// or `TypeName(field=value, ...)` with one level of fields only
    /// (nested structures shorten to their identity or hint, so cyclic
    /// objects still have a finite repr)
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("{:?}", s),
            Value::Object(obj) => match obj.identity().or_else(|| obj.name()) {
                Some(id) => id,
                None => {
                    let fields: Vec<String> = obj
                        .props()
                        .iter()
                        .map(|(k, v)| format!("{}={}", k, v.shallow()))
                        .collect();
                    format!("{}({})", obj.type_name(), fields.join(", "))
                }
            },
            other => other.to_string(),
        }
    }

    /// Non-recursive short form of a value
    fn shallow(&self) -> String {
        match self {
            Value::Str(s) => format!("{:?}", s),
            v if v.is_primitive() => v.to_string(),
            Value::Object(obj) => obj
                .identity()
                .or_else(|| obj.name())
                .unwrap_or_else(|| obj.type_name().to_string()),
            other => other.hint(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Seq(items) => {
                let reprs: Vec<String> = items.iter().map(|i| i.repr()).collect();
                write!(f, "[{}]", reprs.join(", "))
            }
            Value::Map(map) => {
                let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Value::Object(_) => write!(f, "{}", self.repr()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(obj) => write!(f, "Object({})", obj.type_name()),
            other => write!(f, "{}", other.repr()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Objects compare by identity, not by structure
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<Props> for Value {
    fn from(map: Props) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Object(obj) => {
                let props = obj.props();
                let mut out = serializer.serialize_map(Some(props.len()))?;
                for (k, v) in &props {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

/// Ordered map literal helper used across the workspace and its tests
#[macro_export]
macro_rules! props {
    () => { $crate::value::Props::new() };
    ($($key:expr => $val:expr),+ $(,)?) => {{
        let mut map = $crate::value::Props::new();
        $( map.insert($key.to_string(), $crate::value::Value::from($val)); )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_containers() {
        let seq = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(seq.hint(), "2");

        let map = Value::Map(crate::props!("a" => 1, "b" => 2, "c" => 3));
        assert_eq!(map.hint(), "3x2+");

        assert_eq!(Value::from(1.5).hint(), "float");
    }

    #[test]
    fn test_repr_quotes_strings() {
        assert_eq!(Value::from("hi").repr(), "\"hi\"");
        assert_eq!(Value::from(7).repr(), "7");
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let map = crate::props!("z" => 1, "a" => 2, "m" => 3);
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_equality_across_int_and_float() {
        assert_eq!(Value::from(2), Value::from(2.0));
        assert_ne!(Value::from(2), Value::from(2.5));
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let json: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": [true, null]}"#).unwrap();
        let value = Value::from(json);
        let map = value.as_map().unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map["a"], Value::Seq(vec![Value::Bool(true), Value::Null]));
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::Str(String::new()).is_empty());
        assert!(Value::Seq(Vec::new()).is_empty());
        assert!(!Value::from(0).is_empty());
    }
}
