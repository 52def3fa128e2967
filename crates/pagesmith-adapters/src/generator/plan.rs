//! Component planning: unique names and the recursion guard.
//!
//! Every backend emits one file per node. Before emitting anything the
//! forest is walked once, depth-first pre-order, to assign each node a
//! component name and to reject cyclic id reuse. Backends then work from
//! the flat plan and never recurse over the IR themselves.

use std::collections::HashSet;

pub use pagesmith_core::domain::MAX_DEPTH;
use pagesmith_core::domain::{ComponentNode, DomainError};

use super::naming::to_pascal_case;

/// Ids on the path from a top-level node to the node being visited.
#[derive(Debug, Default)]
pub struct RecursionPath<'a> {
    ids: Vec<&'a str>,
}

impl<'a> RecursionPath<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `id`, failing if it is already on the path or the path is full.
    pub fn enter(&mut self, id: &'a str) -> Result<(), DomainError> {
        if self.ids.contains(&id) {
            let mut path = self.ids.clone();
            path.push(id);
            return Err(DomainError::CyclicReference {
                id: id.to_string(),
                path: path.join(" > "),
            });
        }
        if self.ids.len() >= MAX_DEPTH {
            return Err(DomainError::MaxDepthExceeded {
                id: id.to_string(),
                depth: MAX_DEPTH,
            });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn leave(&mut self) {
        self.ids.pop();
    }

    pub fn depth(&self) -> usize {
        self.ids.len()
    }
}

/// One node with its assigned component name.
#[derive(Debug, Clone)]
pub struct PlannedComponent<'a> {
    pub node: &'a ComponentNode,
    /// Unique PascalCase component name.
    pub name: String,
    /// Names of the direct children, in order.
    pub children: Vec<String>,
    /// 1 for top-level nodes.
    pub depth: usize,
}

impl PlannedComponent<'_> {
    pub fn is_root(&self) -> bool {
        self.depth == 1
    }
}

/// The whole forest, flattened in depth-first pre-order.
#[derive(Debug, Clone)]
pub struct ComponentPlan<'a> {
    components: Vec<PlannedComponent<'a>>,
}

impl<'a> ComponentPlan<'a> {
    pub fn build(nodes: &'a [ComponentNode]) -> Result<Self, DomainError> {
        Self::build_reserving(nodes, &[])
    }

    /// Like [`build`](Self::build), but no component is given a name in
    /// `reserved`. Backends pass the names of their own shell files here.
    pub fn build_reserving(
        nodes: &'a [ComponentNode],
        reserved: &[&str],
    ) -> Result<Self, DomainError> {
        let mut planner = Planner {
            components: Vec::new(),
            used: reserved.iter().map(|name| name.to_string()).collect(),
        };
        for node in nodes {
            // Each top-level node owns its own path.
            let mut path = RecursionPath::new();
            planner.visit(node, &mut path)?;
        }
        Ok(Self {
            components: planner.components,
        })
    }

    pub fn components(&self) -> &[PlannedComponent<'a>] {
        &self.components
    }

    pub fn roots(&self) -> impl Iterator<Item = &PlannedComponent<'a>> {
        self.components.iter().filter(|c| c.is_root())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

struct Planner<'a> {
    components: Vec<PlannedComponent<'a>>,
    used: HashSet<String>,
}

impl<'a> Planner<'a> {
    fn visit(
        &mut self,
        node: &'a ComponentNode,
        path: &mut RecursionPath<'a>,
    ) -> Result<String, DomainError> {
        path.enter(&node.id)?;

        let name = self.assign_name(node);
        let index = self.components.len();
        self.components.push(PlannedComponent {
            node,
            name: name.clone(),
            children: Vec::with_capacity(node.children.len()),
            depth: path.depth(),
        });

        let mut children = Vec::with_capacity(node.children.len());
        for child in &node.children {
            children.push(self.visit(child, path)?);
        }
        self.components[index].children = children;

        path.leave();
        Ok(name)
    }

    /// PascalCase type; on collision append the PascalCase id, then a counter.
    fn assign_name(&mut self, node: &ComponentNode) -> String {
        let mut base = to_pascal_case(&node.kind);
        if !base.starts_with(|c: char| c.is_ascii_alphabetic()) {
            base = format!("Component{base}");
        }

        let mut candidates = vec![base.clone()];
        let id = to_pascal_case(&node.id);
        if !id.is_empty() {
            candidates.push(format!("{base}{id}"));
        }

        let name = candidates
            .into_iter()
            .find(|c| !self.used.contains(c))
            .unwrap_or_else(|| {
                (2..)
                    .map(|n| format!("{base}{n}"))
                    .find(|c| !self.used.contains(c))
                    .unwrap_or_default()
            });

        self.used.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(plan: &ComponentPlan) -> Vec<String> {
        plan.components().iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn plans_in_preorder_with_child_names() {
        let forest = vec![
            ComponentNode::new("hero", "hero")
                .with_child(ComponentNode::new("t", "heading"))
                .with_child(ComponentNode::new("cta", "button")),
            ComponentNode::new("foot", "footer"),
        ];
        let plan = ComponentPlan::build(&forest).unwrap();

        assert_eq!(names(&plan), vec!["Hero", "Heading", "Button", "Footer"]);
        assert_eq!(plan.components()[0].children, vec!["Heading", "Button"]);
        let roots: Vec<_> = plan.roots().map(|c| c.name.as_str()).collect();
        assert_eq!(roots, vec!["Hero", "Footer"]);
    }

    #[test]
    fn duplicate_types_are_disambiguated_by_id() {
        let forest = vec![
            ComponentNode::new("save", "button"),
            ComponentNode::new("cancel", "button"),
        ];
        let plan = ComponentPlan::build(&forest).unwrap();
        assert_eq!(names(&plan), vec!["Button", "ButtonCancel"]);
    }

    #[test]
    fn repeated_collisions_fall_back_to_counter() {
        let forest = vec![
            ComponentNode::new("x", "card"),
            ComponentNode::new("x", "card"),
            ComponentNode::new("x", "card"),
        ];
        let plan = ComponentPlan::build(&forest).unwrap();
        assert_eq!(names(&plan), vec!["Card", "CardX", "Card2"]);
    }

    #[test]
    fn numeric_type_gets_prefixed() {
        let forest = vec![ComponentNode::new("a", "404")];
        let plan = ComponentPlan::build(&forest).unwrap();
        assert!(plan.components()[0].name.starts_with("Component"));
    }

    #[test]
    fn descendant_reusing_ancestor_id_is_rejected() {
        let forest = vec![ComponentNode::new("a", "section")
            .with_child(ComponentNode::new("b", "card").with_child(ComponentNode::new("a", "text")))];

        let err = ComponentPlan::build(&forest).unwrap_err();
        assert_eq!(
            err,
            DomainError::CyclicReference {
                id: "a".into(),
                path: "a > b > a".into()
            }
        );
    }

    #[test]
    fn same_id_in_sibling_branches_is_allowed() {
        let forest = vec![
            ComponentNode::new("root", "section")
                .with_child(ComponentNode::new("item", "card"))
                .with_child(ComponentNode::new("item", "card")),
            ComponentNode::new("root", "section"),
        ];
        assert!(ComponentPlan::build(&forest).is_ok());
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut node = ComponentNode::new(format!("n{}", MAX_DEPTH), "div");
        for i in (0..MAX_DEPTH).rev() {
            node = ComponentNode::new(format!("n{i}"), "div").with_child(node);
        }
        let forest = vec![node];

        let err = ComponentPlan::build(&forest).unwrap_err();
        assert!(matches!(err, DomainError::MaxDepthExceeded { depth: MAX_DEPTH, .. }));
    }

    #[test]
    fn reserved_names_are_skipped() {
        let forest = vec![
            ComponentNode::new("home", "app"),
            ComponentNode::new("shell", "root"),
            ComponentNode::new("x", "app"),
        ];
        let plan = ComponentPlan::build_reserving(&forest, &["App", "Root"]).unwrap();
        assert_eq!(names(&plan), vec!["AppHome", "RootShell", "AppX"]);
    }

    #[test]
    fn reserved_name_matching_type_and_id_falls_back_to_counter() {
        let forest = vec![ComponentNode::new("main", "app")];
        let plan = ComponentPlan::build_reserving(&forest, &["App", "AppMain"]).unwrap();
        assert_eq!(plan.components()[0].name, "App2");
    }

    #[test]
    fn path_tracks_depth() {
        let mut path = RecursionPath::new();
        path.enter("a").unwrap();
        path.enter("b").unwrap();
        assert_eq!(path.depth(), 2);
        path.leave();
        assert_eq!(path.depth(), 1);
    }
}
