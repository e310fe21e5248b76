//! Group tree construction
//!
//! Records are folded level by level into insertion-ordered maps keyed
//! `dimension::key`, then siblings are stably sorted by their sort value.

use crate::dimension::{normalize_dimensions, Dimension};
use crate::resolve::ResolvedKey;
use comanda_model::Comanda;
use indexmap::IndexMap;
use serde::Serialize;

/// One group in the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode<'a> {
    /// Dimension this level groups by
    pub dimension: Dimension,
    /// `dimension::key`, unique among siblings
    pub key: String,
    /// Display label
    pub label: String,
    /// Raw identifier of the grouped value, when one exists
    pub raw_value: Option<String>,
    /// Lower-cased sort key
    pub sort_value: String,
    /// Records under this node
    pub count: usize,
    /// Sum of line quantities of records under this node
    pub cantidad_total: f64,
    /// Labels from the root down to this node, inclusive
    pub path: Vec<String>,
    /// Next-level groups; empty at the leaf level
    pub children: Vec<GroupNode<'a>>,
    /// Contributing records; only populated at the leaf level
    pub comandas: Vec<&'a Comanda>,
}

impl<'a> GroupNode<'a> {
    /// Whether this node is on the last grouping level
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Every record under this node, in tree order
    #[must_use]
    pub fn leaf_records(&self) -> Vec<&'a Comanda> {
        if self.is_leaf() {
            return self.comandas.clone();
        }
        self.children
            .iter()
            .flat_map(GroupNode::leaf_records)
            .collect()
    }

    /// Depth of the subtree, 1 for a leaf
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(GroupNode::depth)
            .max()
            .unwrap_or(0)
    }
}

struct NodeBuilder<'a> {
    dimension: Dimension,
    key: String,
    resolved: ResolvedKey,
    path: Vec<String>,
    count: usize,
    cantidad_total: f64,
    children: IndexMap<String, NodeBuilder<'a>>,
    comandas: Vec<&'a Comanda>,
}

impl<'a> NodeBuilder<'a> {
    fn new(dimension: Dimension, key: String, resolved: ResolvedKey, path: Vec<String>) -> Self {
        Self {
            dimension,
            key,
            resolved,
            path,
            count: 0,
            cantidad_total: 0.0,
            children: IndexMap::new(),
            comandas: Vec::new(),
        }
    }

    fn finish(self) -> GroupNode<'a> {
        GroupNode {
            dimension: self.dimension,
            key: self.key,
            label: self.resolved.label,
            raw_value: self.resolved.raw_value,
            sort_value: self.resolved.sort_value,
            count: self.count,
            cantidad_total: self.cantidad_total,
            path: self.path,
            children: finish_level(self.children),
            comandas: self.comandas,
        }
    }
}

fn finish_level(level: IndexMap<String, NodeBuilder<'_>>) -> Vec<GroupNode<'_>> {
    let mut nodes: Vec<GroupNode<'_>> = level.into_values().map(NodeBuilder::finish).collect();
    // stable: ties keep insertion order
    nodes.sort_by(|a, b| a.sort_value.cmp(&b.sort_value));
    nodes
}

/// Group `records` by the recognized names in `dimensions`
///
/// Unknown and repeated dimension names are dropped; with no dimension left
/// the result is empty. Never fails and never mutates its input.
#[must_use]
pub fn build_groups<'a, S: AsRef<str>>(
    records: &'a [Comanda],
    dimensions: &[S],
) -> Vec<GroupNode<'a>> {
    let dimensions = normalize_dimensions(dimensions);
    group_by(records, &dimensions)
}

/// Group `records` by an already-validated dimension list
///
/// Repeated dimensions are grouped on again; use [`build_groups`] for raw
/// user input.
#[must_use]
pub fn group_by<'a>(records: &'a [Comanda], dimensions: &[Dimension]) -> Vec<GroupNode<'a>> {
    if dimensions.is_empty() {
        return Vec::new();
    }

    let mut roots: IndexMap<String, NodeBuilder<'a>> = IndexMap::new();
    for comanda in records {
        let cantidad = comanda.cantidad_total();
        let mut level = &mut roots;
        let mut path: Vec<String> = Vec::with_capacity(dimensions.len());

        for (depth, dimension) in dimensions.iter().copied().enumerate() {
            let resolved = dimension.resolve(comanda);
            let key = format!("{dimension}::{}", resolved.key);
            path.push(resolved.label.clone());

            let node = level
                .entry(key.clone())
                .or_insert_with(|| NodeBuilder::new(dimension, key, resolved, path.clone()));
            node.count += 1;
            node.cantidad_total += cantidad;
            if depth + 1 == dimensions.len() {
                node.comandas.push(comanda);
            }
            level = &mut node.children;
        }
    }

    let groups = finish_level(roots);
    tracing::debug!(
        records = records.len(),
        dimensions = dimensions.len(),
        groups = groups.len(),
        "grouped comandas"
    );
    groups
}

/// A flattened tree row for table rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRow {
    /// Nesting level, 0 for top-level groups
    pub depth: usize,
    /// Dimension of the group
    pub dimension: Dimension,
    /// Group key
    pub key: String,
    /// Display label
    pub label: String,
    /// Records under the group
    pub count: usize,
    /// Summed quantity under the group
    pub cantidad_total: f64,
    /// Labels from the root down to the group
    pub path: Vec<String>,
}

/// Depth-first, pre-order rows of `nodes`
#[must_use]
pub fn flatten_groups(nodes: &[GroupNode<'_>]) -> Vec<GroupRow> {
    fn walk(nodes: &[GroupNode<'_>], depth: usize, rows: &mut Vec<GroupRow>) {
        for node in nodes {
            rows.push(GroupRow {
                depth,
                dimension: node.dimension,
                key: node.key.clone(),
                label: node.label.clone(),
                count: node.count,
                cantidad_total: node.cantidad_total,
                path: node.path.clone(),
            });
            walk(&node.children, depth + 1, rows);
        }
    }

    let mut rows = Vec::new();
    walk(nodes, 0, &mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_model::{Cliente, LineItem, Producto, Ruta};
    use pretty_assertions::assert_eq;

    fn comanda(id: &str, cliente: Cliente, cantidad: f64) -> Comanda {
        Comanda::new(id)
            .with_cliente(cliente)
            .with_item(LineItem::new(Producto::new("p1", "Yerba"), cantidad))
    }

    #[test]
    fn single_record_single_group() {
        let records = vec![Comanda::new("a")
            .with_numero(1)
            .with_cliente(Cliente::new("c1", "Acme"))];
        let groups = build_groups(&records, &["cliente"]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Acme");
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[0].key, "cliente::c1");
        assert_eq!(groups[0].comandas.len(), 1);
    }

    #[test]
    fn empty_dimensions_yield_nothing() {
        let records = vec![Comanda::new("a")];
        assert!(build_groups(&records, &Vec::<String>::new()).is_empty());
        assert!(build_groups(&records, &["unknown"]).is_empty());
    }

    #[test]
    fn empty_records_yield_nothing() {
        assert!(build_groups(&[], &["cliente"]).is_empty());
    }

    #[test]
    fn nested_levels_accumulate() {
        let norte = Ruta::new("r1", "Norte");
        let sur = Ruta::new("r2", "Sur");
        let beta = Cliente::new("c1", "Beta");
        let records = vec![
            comanda("a", beta.clone().with_ruta(norte.clone()), 2.0),
            comanda("b", Cliente::new("c2", "Alfa").with_ruta(norte), 3.0),
            comanda("c", beta.with_ruta(sur.clone()), 1.0),
            comanda("d", Cliente::new("c3", "Gamma").with_ruta(sur), 4.0),
        ];
        let groups = build_groups(&records, &["ruta", "cliente"]);

        assert_eq!(groups.len(), 2);
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Norte", "Sur"]);

        let norte = &groups[0];
        assert_eq!(norte.count, 2);
        assert_eq!(norte.cantidad_total, 5.0);
        assert!(norte.comandas.is_empty());
        let clients: Vec<_> = norte.children.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(clients, vec!["Alfa", "Beta"]);
        assert_eq!(
            norte.children[0].path,
            vec!["Norte".to_string(), "Alfa".to_string()]
        );
        assert_eq!(norte.children[0].comandas[0].id_str(), "b");
        assert!(norte.children[0].is_leaf());
        assert_eq!(norte.depth(), 2);
    }

    #[test]
    fn duplicate_dimensions_are_ignored() {
        let records = vec![comanda("a", Cliente::new("c1", "Acme"), 1.0)];
        let groups = build_groups(&records, &["cliente", "cliente"]);
        assert_eq!(groups[0].depth(), 1);
        assert_eq!(groups[0].comandas.len(), 1);
    }

    #[test]
    fn numbers_sort_numerically() {
        let records: Vec<_> = [100, 9, 25]
            .into_iter()
            .map(|n| Comanda::new(format!("id{n}")).with_numero(n))
            .collect();
        let groups = build_groups(&records, &["nrodecomanda"]);
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["9", "25", "100"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        // same label, different ids
        let records = vec![
            comanda("a", Cliente::new("c2", "Acme"), 1.0),
            comanda("b", Cliente::new("c1", "Acme"), 1.0),
        ];
        let groups = build_groups(&records, &["cliente"]);
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["cliente::c2", "cliente::c1"]);
    }

    #[test]
    fn missing_data_goes_to_placeholder() {
        let records = vec![
            Comanda::new("a"),
            comanda("b", Cliente::new("c1", "Acme"), 1.0),
            Comanda::new("c"),
        ];
        let groups = build_groups(&records, &["cliente"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Acme");
        assert_eq!(groups[1].label, "—");
        assert_eq!(groups[1].count, 2);
    }

    #[test]
    fn leaf_records_walks_subtree() {
        let records = vec![
            comanda("a", Cliente::new("c1", "Acme"), 1.0).with_numero(2),
            comanda("b", Cliente::new("c1", "Acme"), 1.0).with_numero(1),
        ];
        let groups = build_groups(&records, &["cliente", "nrodecomanda"]);
        let ids: Vec<_> = groups[0]
            .leaf_records()
            .iter()
            .map(|c| c.id_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn flatten_is_preorder() {
        let records = vec![
            comanda("a", Cliente::new("c1", "Acme"), 1.0).with_numero(2),
            comanda("b", Cliente::new("c2", "Beta"), 1.0).with_numero(1),
        ];
        let groups = build_groups(&records, &["cliente", "nrodecomanda"]);
        let rows = flatten_groups(&groups);
        let summary: Vec<_> = rows.iter().map(|r| (r.depth, r.label.as_str())).collect();
        assert_eq!(summary, vec![(0, "Acme"), (1, "2"), (0, "Beta"), (1, "1")]);
    }

    #[test]
    fn serializes_camel_case() {
        let records = vec![comanda("a", Cliente::new("c1", "Acme"), 2.0)];
        let groups = build_groups(&records, &["cliente"]);
        let value = serde_json::to_value(&groups[0]).unwrap();
        assert_eq!(value["cantidadTotal"], 2.0);
        assert_eq!(value["sortValue"], "acme");
        assert_eq!(value["dimension"], "cliente");
    }
}
