use crate::text::{crop, DEFAULT_LINE_LEN};
use anyview_types::{Error, NodePath, Props, Result, Segment, Value};
use std::fmt;
use std::rc::Rc;

/// A value plus its address: the uniform accessor every viewer walks.
///
/// Nodes are created per render call or per property access and carry no
/// cache; the `root` back-reference (shared, never owned exclusively) lets
/// `is_path_valid` re-resolve the node's own path from the top.
#[derive(Clone)]
pub struct Node {
    value: Value,
    path: NodePath,
    root: Option<Rc<Value>>,
}

impl Node {
    /// Wrap a value as a root node. Objects exposing a short name seed
    /// their path with it.
    pub fn wrap(value: impl Into<Value>) -> Self {
        let value = value.into();
        let path = match &value {
            Value::Object(obj) => match obj.name() {
                Some(name) => NodePath::root().join(name),
                None => NodePath::root(),
            },
            _ => NodePath::root(),
        };
        Node {
            value,
            path,
            root: None,
        }
    }

    pub fn with_path(value: impl Into<Value>, path: NodePath) -> Self {
        Node {
            value: value.into(),
            path,
            root: None,
        }
    }

    fn descendant(value: Value, path: NodePath, root: Rc<Value>) -> Self {
        Node {
            value,
            path,
            root: Some(root),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// The root value this node was reached from (itself when unparented)
    pub fn root_value(&self) -> Value {
        match &self.root {
            Some(root) => (**root).clone(),
            None => self.value.clone(),
        }
    }

    fn root_rc(&self) -> Rc<Value> {
        match &self.root {
            Some(root) => Rc::clone(root),
            None => Rc::new(self.value.clone()),
        }
    }

    /// One-level unwrap: an object's own nested data, else the value itself
    pub fn data(&self) -> Value {
        if let Value::Object(obj) = &self.value {
            if let Some(data) = obj.data() {
                return data;
            }
        }
        self.value.clone()
    }

    /// Short non-recursive summary of the value
    pub fn hint(&self) -> String {
        self.value.hint()
    }

    /// Ordered properties of the value: an object's own enumeration, a
    /// mapping's entries, index -> element for sequences, or a single
    /// synthetic `data` entry.
    pub fn props(&self) -> Props {
        self.props_with(&[], false)
    }

    /// Properties with extra named entries resolved up front and optional
    /// dropping of null/zero-length values.
    pub fn props_with(&self, add: &[&str], skip_empty: bool) -> Props {
        let mut props = Props::new();
        for name in add {
            if let Ok(value) = self.property(name) {
                props.insert(name.to_string(), value);
            }
        }
        match &self.value {
            Value::Object(obj) => {
                props.extend(obj.props());
            }
            Value::Map(map) => {
                props.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            Value::Seq(items) => {
                for (n, item) in items.iter().enumerate() {
                    props.insert(n.to_string(), item.clone());
                }
            }
            other => {
                props.insert("data".to_string(), other.clone());
            }
        }
        if skip_empty {
            props.retain(|_, v| !v.is_empty());
        }
        props
    }

    /// Resolve one property by name.
    ///
    /// Lookup order: mapping key, numeric sequence index, identity scan of
    /// an object sequence, self-reference short-circuit (`[name]` equals the
    /// node's own path), the object's own fields, the object's computed
    /// properties, the node's synthetic accessors (`class`, `path`, `hint`,
    /// `data`), and finally a not-found error listing the available names.
    pub fn property(&self, name: &str) -> Result<Value> {
        if let Value::Map(map) = &self.value {
            if let Some(value) = map.get(name) {
                return Ok(value.clone());
            }
        }
        if let Value::Seq(items) = &self.value {
            if let Ok(index) = name.parse::<usize>() {
                if let Some(item) = items.get(index) {
                    return Ok(item.clone());
                }
            }
            for item in items {
                if let Value::Object(obj) = item {
                    let matches = obj.identity().as_deref() == Some(name)
                        || obj.name().as_deref() == Some(name);
                    if matches {
                        return Ok(item.clone());
                    }
                }
            }
        }
        if self.path.is_single_key(name) {
            return Ok(self.value.clone());
        }
        if let Value::Object(obj) = &self.value {
            if let Some(value) = obj.props().get(name) {
                return Ok(value.clone());
            }
            if let Some(value) = obj.prop(name) {
                return Ok(value);
            }
        }
        match name {
            "class" => return Ok(Value::Str(self.value.type_name())),
            "path" => return Ok(Value::Str(self.path.to_string())),
            "hint" => return Ok(Value::Str(self.hint())),
            "data" => return Ok(self.data()),
            _ => {}
        }
        let available: Vec<String> = self.props().keys().cloned().collect();
        Err(Error::not_found(name, available))
    }

    /// Resolve one property and wrap it with an extended path
    pub fn child(&self, name: &str) -> Result<Node> {
        let value = self.property(name)?;
        let segment = match name.parse::<usize>() {
            Ok(index) if matches!(self.value, Value::Seq(_)) => Segment::Index(index),
            _ => Segment::Key(name.to_string()),
        };
        Ok(Node::descendant(
            value,
            self.path.join(segment),
            self.root_rc(),
        ))
    }

    /// Walk a path (string or parsed) by repeated property resolution.
    /// The empty path resolves to the node itself.
    pub fn get_node(&self, path: impl Into<NodePath>) -> Result<Node> {
        let path = path.into();
        match path.split_first() {
            None => Ok(self.clone()),
            Some((first, rest)) => {
                let child = self.child(&first.to_string())?;
                child.get_node(rest)
            }
        }
    }

    /// True when re-resolving this node's path from the root reaches an
    /// equal value (the structure has not mutated since wrapping)
    pub fn is_path_valid(&self) -> bool {
        let root = Node::wrap(self.root_value());
        match root.get_node(self.path.clone()) {
            Ok(node) => node.value == self.value,
            Err(_) => false,
        }
    }

    /// Recursive conversion to a serializable structure.
    ///
    /// Primitives pass through; at depth 0 a cropped one-line summary stands
    /// in for the subtree; sequences and mappings recurse with depth - 1;
    /// objects convert through their properties plus a `class` entry. With
    /// `use_ids`, children exposing an identity are replaced by that id
    /// string (a cycle breaker, not lossless).
    pub fn serializable(&self, depth: Option<u32>, use_ids: bool, skip_empty: bool) -> Value {
        if self.value.is_primitive() {
            return self.value.clone();
        }
        if depth == Some(0) {
            return Value::Str(self.summary());
        }
        match &self.value {
            Value::Seq(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (n, item) in items.iter().enumerate() {
                    out.push(self.serializable_entry(
                        item,
                        Segment::Index(n),
                        depth,
                        use_ids,
                        skip_empty,
                    ));
                }
                Value::Seq(out)
            }
            Value::Map(map) => {
                let entries = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                self.serializable_map(entries, depth, use_ids, skip_empty)
            }
            Value::Object(_) => {
                let props = self.props_with(&["class"], false);
                self.serializable_map(props, depth, use_ids, skip_empty)
            }
            _ => unreachable!("primitives handled above"),
        }
    }

    fn serializable_map(
        &self,
        entries: Props,
        depth: Option<u32>,
        use_ids: bool,
        skip_empty: bool,
    ) -> Value {
        let mut out = Props::new();
        for (key, item) in &entries {
            if skip_empty && item.is_empty() {
                continue;
            }
            let entry = self.serializable_entry(
                item,
                Segment::Key(key.clone()),
                depth,
                use_ids,
                skip_empty,
            );
            out.insert(key.clone(), entry);
        }
        Value::Map(out)
    }

    fn serializable_entry(
        &self,
        item: &Value,
        segment: Segment,
        depth: Option<u32>,
        use_ids: bool,
        skip_empty: bool,
    ) -> Value {
        if use_ids {
            if let Some(id) = item.identity() {
                return Value::Str(id);
            }
        }
        let child = Node::descendant(item.clone(), self.path.join(segment), self.root_rc());
        child.serializable(depth.map(|d| d.saturating_sub(1)), use_ids, skip_empty)
    }

    /// Cropped one-line stand-in used when serialization depth runs out
    fn summary(&self) -> String {
        crop(&self.value.repr(), DEFAULT_LINE_LEN)
    }

    /// Single descriptive `k=v, ...` line, cropped to `max_len`
    pub fn props_str(&self, max_len: usize) -> String {
        let line = match &self.value {
            Value::Str(s) => s.clone(),
            Value::Seq(items) => {
                let parts: Vec<String> = items.iter().map(|i| i.repr()).collect();
                parts.join(", ")
            }
            Value::Map(_) | Value::Object(_) => {
                let parts: Vec<String> = self
                    .props()
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect();
                parts.join(", ")
            }
            other => other.repr(),
        };
        crop(&line, max_len)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.value)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?}, path={})", self.value, self.path)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
