use crate::domain::{
    entities::{ComponentNode, ExportConfig, GeneratedFile, generated},
    error::DomainError,
};

/// Deepest nesting a forest may reach; top-level nodes sit at depth 1.
pub const MAX_DEPTH: usize = 64;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// Reject an empty forest, any node with a blank `id` or `type`, and
    /// nesting deeper than [`MAX_DEPTH`].
    ///
    /// Errors name the offending node by its position, e.g.
    /// `nodes[0].children[2]`, since its id may be the missing field.
    pub fn validate_forest(nodes: &[ComponentNode]) -> Result<(), DomainError> {
        if nodes.is_empty() {
            return Err(DomainError::EmptyForest);
        }
        for (index, node) in nodes.iter().enumerate() {
            Self::validate_node(node, &format!("nodes[{index}]"), 1)?;
        }
        Ok(())
    }

    fn validate_node(
        node: &ComponentNode,
        location: &str,
        depth: usize,
    ) -> Result<(), DomainError> {
        if depth > MAX_DEPTH {
            return Err(DomainError::MaxDepthExceeded {
                id: node.id.clone(),
                depth: MAX_DEPTH,
            });
        }
        if node.id.trim().is_empty() {
            return Err(DomainError::MissingNodeField {
                field: "id",
                location: location.to_string(),
            });
        }
        if node.kind.trim().is_empty() {
            return Err(DomainError::MissingNodeField {
                field: "type",
                location: format!("{location} ('{}')", node.id),
            });
        }
        for (index, child) in node.children.iter().enumerate() {
            Self::validate_node(child, &format!("{location}.children[{index}]"), depth + 1)?;
        }
        Ok(())
    }

    pub fn validate_config(config: &ExportConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_files(files: &[GeneratedFile]) -> Result<(), DomainError> {
        generated::ensure_unique_paths(files)
    }
}
