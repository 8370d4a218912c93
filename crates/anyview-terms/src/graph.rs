use crate::link_type::LinkType;
use anyview_types::{Error, Introspect, Props, Result, Value};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Index of a term in its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermId(usize);

/// A named concept with synonyms, a definition and typed links
#[derive(Debug, Clone)]
pub struct Term {
    pub short_name: String,
    pub synonyms: Vec<String>,
    pub definition: String,
    links: IndexMap<LinkType, Vec<TermId>>,
}

impl Term {
    fn new(short_name: String, synonyms: Vec<String>, definition: String) -> Self {
        Term {
            short_name,
            synonyms,
            definition,
            links: IndexMap::new(),
        }
    }

    pub fn links(&self, link_type: LinkType) -> &[TermId] {
        self.links.get(&link_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All names this term answers to
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.short_name.as_str()];
        names.extend(self.synonyms.iter().map(String::as_str));
        names
    }
}

/// Terms stored in a flat arena and addressed by id, with symmetric links
/// maintained on both ends of every edge
#[derive(Debug, Clone, Default)]
pub struct TermGraph {
    terms: Vec<Term>,
}

impl TermGraph {
    pub fn new() -> Self {
        TermGraph::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn add_term(
        &mut self,
        short_name: impl Into<String>,
        synonyms: Vec<String>,
        definition: impl Into<String>,
    ) -> TermId {
        let id = TermId(self.terms.len());
        self.terms
            .push(Term::new(short_name.into(), synonyms, definition.into()));
        id
    }

    pub fn term(&self, id: TermId) -> &Term {
        &self.terms[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = TermId> + '_ {
        (0..self.terms.len()).map(TermId)
    }

    /// Add an edge and its symmetric inverse
    pub fn link(&mut self, from: TermId, link_type: LinkType, to: TermId) {
        self.push_edge(from, link_type, to);
        self.push_edge(to, link_type.inverse(), from);
    }

    /// Remove an edge and its symmetric inverse
    pub fn unlink(&mut self, from: TermId, link_type: LinkType, to: TermId) -> Result<()> {
        self.drop_edge(from, link_type, to)?;
        self.drop_edge(to, link_type.inverse(), from)?;
        Ok(())
    }

    /// Drop every edge of one type, both directions included
    pub fn clear_links(&mut self, from: TermId, link_type: LinkType) {
        let targets: Vec<TermId> = self.term(from).links(link_type).to_vec();
        for to in targets {
            let _ = self.unlink(from, link_type, to);
        }
    }

    /// Replace the edges of one type
    pub fn set_links(&mut self, from: TermId, link_type: LinkType, targets: &[TermId]) {
        self.clear_links(from, link_type);
        for to in targets {
            self.link(from, link_type, *to);
        }
    }

    fn push_edge(&mut self, from: TermId, link_type: LinkType, to: TermId) {
        self.terms[from.0]
            .links
            .entry(link_type)
            .or_default()
            .push(to);
    }

    fn drop_edge(&mut self, from: TermId, link_type: LinkType, to: TermId) -> Result<()> {
        let targets = self.terms[from.0].links.entry(link_type).or_default();
        match targets.iter().position(|id| *id == to) {
            Some(position) => {
                targets.remove(position);
                Ok(())
            }
            None => Err(Error::not_found(
                self.term(to).short_name.clone(),
                self.term(from)
                    .links(link_type)
                    .iter()
                    .map(|id| self.term(*id).short_name.clone())
                    .collect::<Vec<_>>(),
            )),
        }
    }

    pub fn find_by_id(&self, short_name: &str) -> Option<TermId> {
        self.ids().find(|id| self.term(*id).short_name == short_name)
    }

    /// Lookup by short name or any synonym
    pub fn find_by_name(&self, name: &str) -> Option<TermId> {
        self.ids().find(|id| self.term(*id).names().contains(&name))
    }

    /// Every term reachable over links from `from`, depth-first, each name
    /// visited once; `ignore_names` pre-seeds the visited set
    pub fn reachable(&self, from: TermId, ignore_names: &HashSet<String>) -> Vec<TermId> {
        let mut visited: HashSet<String> = ignore_names.clone();
        let mut found = Vec::new();
        self.walk(from, &mut visited, &mut found);
        found
    }

    fn walk(&self, from: TermId, visited: &mut HashSet<String>, found: &mut Vec<TermId>) {
        for link_type in LinkType::ALL {
            for to in self.term(from).links(link_type) {
                let name = &self.term(*to).short_name;
                if visited.insert(name.clone()) {
                    found.push(*to);
                    self.walk(*to, visited, found);
                }
            }
        }
    }

    /// Uniform property mapping of one term; linked terms appear by their
    /// short names, so the export stays acyclic
    pub fn term_props(&self, id: TermId) -> Props {
        let term = self.term(id);
        let mut props = Props::new();
        props.insert("short_name".to_string(), Value::from(term.short_name.clone()));
        props.insert(
            "synonyms".to_string(),
            Value::Seq(term.synonyms.iter().map(|s| Value::from(s.clone())).collect()),
        );
        props.insert(
            "definition".to_string(),
            Value::from(term.definition.clone()),
        );
        for link_type in LinkType::ALL {
            let names: Vec<Value> = term
                .links(link_type)
                .iter()
                .map(|to| Value::from(self.term(*to).short_name.clone()))
                .collect();
            if !names.is_empty() {
                props.insert(link_type.label().to_string(), Value::Seq(names));
            }
        }
        props
    }
}

/// One term exposed to the view pipeline as a structured object
#[derive(Debug, Clone)]
pub struct TermCard {
    graph: Rc<RefCell<TermGraph>>,
    id: TermId,
}

impl TermCard {
    pub fn new(graph: Rc<RefCell<TermGraph>>, id: TermId) -> Self {
        TermCard { graph, id }
    }

    pub fn id(&self) -> TermId {
        self.id
    }

    pub fn value(self) -> Value {
        Value::object(self)
    }
}

impl Introspect for TermCard {
    fn type_name(&self) -> &str {
        "Term"
    }

    fn props(&self) -> Props {
        self.graph.borrow().term_props(self.id)
    }

    fn identity(&self) -> Option<String> {
        Some(self.graph.borrow().term(self.id).short_name.clone())
    }

    fn name(&self) -> Option<String> {
        Some(self.graph.borrow().term(self.id).short_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_graph() -> (TermGraph, TermId, TermId, TermId) {
        let mut graph = TermGraph::new();
        let discipline = graph.add_term("discipline", vec!["science".to_string()], "");
        let method = graph.add_term(
            "method",
            vec![],
            "a way of reaching a result in some field",
        );
        let analysis = graph.add_term(
            "analysis",
            vec!["data analysis".to_string()],
            "drawing conclusions from measured facts",
        );
        graph.link(method, LinkType::Uses, discipline);
        graph.link(analysis, LinkType::Class, discipline);
        (graph, discipline, method, analysis)
    }

    #[test]
    fn test_link_maintains_symmetric_inverse() {
        let (graph, discipline, method, _) = analysis_graph();
        assert_eq!(graph.term(method).links(LinkType::Uses), &[discipline]);
        assert_eq!(graph.term(discipline).links(LinkType::Usage), &[method]);
    }

    #[test]
    fn test_unlink_removes_both_directions() {
        let (mut graph, discipline, method, _) = analysis_graph();
        graph.unlink(method, LinkType::Uses, discipline).unwrap();
        assert!(graph.term(method).links(LinkType::Uses).is_empty());
        assert!(graph.term(discipline).links(LinkType::Usage).is_empty());
    }

    #[test]
    fn test_unlink_missing_edge_fails() {
        let (mut graph, discipline, _, analysis) = analysis_graph();
        assert!(graph.unlink(analysis, LinkType::Uses, discipline).is_err());
    }

    #[test]
    fn test_clear_links_is_symmetric() {
        let (mut graph, discipline, method, analysis) = analysis_graph();
        graph.clear_links(discipline, LinkType::Usage);
        assert!(graph.term(method).links(LinkType::Uses).is_empty());
        // unrelated link types survive
        assert_eq!(graph.term(analysis).links(LinkType::Class), &[discipline]);
    }

    #[test]
    fn test_find_by_name_covers_synonyms() {
        let (graph, discipline, _, analysis) = analysis_graph();
        assert_eq!(graph.find_by_name("science"), Some(discipline));
        assert_eq!(graph.find_by_name("data analysis"), Some(analysis));
        assert_eq!(graph.find_by_id("analysis"), Some(analysis));
        assert_eq!(graph.find_by_name("nonsense"), None);
    }

    #[test]
    fn test_reachable_visits_each_term_once() {
        let (graph, discipline, method, analysis) = analysis_graph();
        let reached = graph.reachable(analysis, &HashSet::new());
        assert!(reached.contains(&discipline));
        assert!(reached.contains(&method));
        let unique: HashSet<&TermId> = reached.iter().collect();
        assert_eq!(unique.len(), reached.len());
    }

    #[test]
    fn test_reachable_honors_ignore_names() {
        let (graph, _, _, analysis) = analysis_graph();
        let mut ignore = HashSet::new();
        ignore.insert("discipline".to_string());
        let reached = graph.reachable(analysis, &ignore);
        assert!(reached.is_empty());
    }

    #[test]
    fn test_term_card_exports_links_by_name() {
        let (graph, _, _, analysis) = analysis_graph();
        let graph = Rc::new(RefCell::new(graph));
        let card = TermCard::new(graph, analysis);
        let props = card.props();
        assert_eq!(props["short_name"], Value::from("analysis"));
        assert_eq!(
            props["class"],
            Value::Seq(vec![Value::from("discipline")])
        );
        assert_eq!(card.identity().as_deref(), Some("analysis"));
    }

    #[test]
    fn test_term_card_wraps_with_named_path() {
        let (graph, _, _, analysis) = analysis_graph();
        let graph = Rc::new(RefCell::new(graph));
        let card = TermCard::new(graph, analysis);
        let node = anyview_core::Node::wrap(card.value());
        assert_eq!(node.path().to_string(), "analysis");
        assert_eq!(
            node.property("definition").unwrap(),
            Value::from("drawing conclusions from measured facts")
        );
    }
}
