use anyview_core::Node;
use anyview_types::{Error, Result, Value};
use std::str::FromStr;

/// Wire format of the serial view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerialFormat {
    Json,
    #[default]
    Yaml,
}

impl FromStr for SerialFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(SerialFormat::Json),
            "yaml" | "yml" => Ok(SerialFormat::Yaml),
            other => Err(Error::type_mismatch("json or yaml", other)),
        }
    }
}

/// Serializable projection of a node: JSON/YAML in, JSON/YAML out.
/// Depth, id substitution and empty-skipping follow the node's
/// serializable-conversion rules.
#[derive(Debug, Clone)]
pub struct SerialView {
    node: Node,
    depth: Option<u32>,
    use_ids: bool,
    skip_empty: bool,
}

impl SerialView {
    pub fn new(node: Node) -> Self {
        SerialView {
            node,
            depth: None,
            use_ids: false,
            skip_empty: false,
        }
    }

    pub fn of(value: impl Into<Value>) -> Self {
        SerialView::new(Node::wrap(value))
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_ids(mut self) -> Self {
        self.use_ids = true;
        self
    }

    pub fn skipping_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    fn serializable(&self) -> Value {
        self.node
            .serializable(self.depth, self.use_ids, self.skip_empty)
    }

    /// JSON document; literal Unicode is preserved
    pub fn json(&self) -> Result<String> {
        serde_json::to_string(&self.serializable())
            .map_err(|e| Error::Unsupported(format!("json encoding: {}", e)))
    }

    pub fn json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.serializable())
            .map_err(|e| Error::Unsupported(format!("json encoding: {}", e)))
    }

    /// YAML document in block style
    pub fn yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.serializable())
            .map_err(|e| Error::Unsupported(format!("yaml encoding: {}", e)))
    }

    /// Inverse of rendering: parse a document back into a wrapped value
    pub fn parse(text: &str, format: SerialFormat) -> Result<Node> {
        let json: serde_json::Value = match format {
            SerialFormat::Json => serde_json::from_str(text)
                .map_err(|e| Error::type_mismatch("json document", e))?,
            SerialFormat::Yaml => serde_yaml::from_str(text)
                .map_err(|e| Error::type_mismatch("yaml document", e))?,
        };
        Ok(Node::wrap(Value::from(json)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyview_types::props;

    #[test]
    fn test_json_preserves_unicode_and_order() {
        let view = SerialView::of(Value::Map(props!("b" => "привет", "a" => 1)));
        assert_eq!(view.json().unwrap(), r#"{"b":"привет","a":1}"#);
    }

    #[test]
    fn test_yaml_round_trip_is_identity() {
        let value = Value::Map(props!("name" => "ada", "age" => 36, "active" => true));
        let rendered = SerialView::of(value.clone()).yaml().unwrap();
        let parsed = SerialView::parse(&rendered, SerialFormat::Yaml).unwrap();
        assert_eq!(parsed.raw(), &value);
    }

    #[test]
    fn test_parse_json_document() {
        let node = SerialView::parse(r#"{"x": [1, 2]}"#, SerialFormat::Json).unwrap();
        let map = node.raw().as_map().unwrap();
        assert_eq!(map["x"], Value::Seq(vec![Value::from(1), Value::from(2)]));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("yaml".parse::<SerialFormat>().unwrap(), SerialFormat::Yaml);
        assert_eq!("JSON".parse::<SerialFormat>().unwrap(), SerialFormat::Json);
        assert!("xml".parse::<SerialFormat>().is_err());
    }
}
