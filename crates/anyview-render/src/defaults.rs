use crate::viewers::Viewer;
use crate::views::ViewItem;
use anyview_core::Node;
use anyview_types::{Error, Result};
use once_cell::sync::OnceCell;

static DEFAULT_VIEWER: OnceCell<Box<dyn Viewer + Send + Sync>> = OnceCell::new();

/// Register the process-wide default viewer. Write-once: returns false
/// when a default is already set.
pub fn set_viewer(viewer: impl Viewer + Send + Sync + 'static) -> bool {
    DEFAULT_VIEWER.set(Box::new(viewer)).is_ok()
}

pub fn viewer() -> Option<&'static (dyn Viewer + Send + Sync)> {
    DEFAULT_VIEWER.get().map(|boxed| boxed.as_ref())
}

/// Render helpers on nodes; the per-call viewer always wins over the
/// process default.
pub trait NodeViewExt {
    fn view(&self) -> Result<ViewItem>;
    fn view_with(&self, viewer: &dyn Viewer) -> Result<ViewItem>;
}

impl NodeViewExt for Node {
    fn view(&self) -> Result<ViewItem> {
        match viewer() {
            Some(default) => default.render(self),
            None => Err(Error::Unsupported("default viewer not set".to_string())),
        }
    }

    fn view_with(&self, viewer: &dyn Viewer) -> Result<ViewItem> {
        viewer.render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewers::OneLineViewer;
    use anyview_types::Value;

    #[test]
    fn test_explicit_viewer_needs_no_default() {
        let node = Node::wrap(Value::from(7));
        let view = node.view_with(&OneLineViewer).unwrap();
        assert_eq!(view, ViewItem::Text("7".to_string()));
    }
}
