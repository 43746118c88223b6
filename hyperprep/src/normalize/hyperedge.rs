//! Split hyperedge rows into a fact node plus role edges.
//!
//! ```text
//! id  src  tgt  arr              node:   FactID  id
//! r1  s1   t1   a1|a2     →              h       r1
//!                                source: h  s1    target: h  t1
//!                                array:  h  a1
//!                                        h  a2
//! ```
//!
//! `h` is hashed over the row without the array field, so the source and
//! target values take part in the identity while the node attributes
//! leave them out.

use crate::error::NormalizeResult;
use crate::models::{NormalizedTables, RoleColumns, Table};
use crate::parser::ParsedTsv;

use super::hash::fact_id;

/// Separator between elements of the array field.
pub const ARRAY_SEPARATOR: char = '|';

/// Header of the identifier column in every output table.
pub const FACT_ID_HEADER: &str = "FactID";

/// Split an array field into its elements.
///
/// An empty field has no elements. Otherwise the split is verbatim, so
/// `a||b` keeps its empty middle element.
pub fn split_array(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(ARRAY_SEPARATOR).collect()
}

/// Normalize a parsed hyperedge file in memory.
///
/// Every row is checked before anything is returned; a single row that
/// lacks a role column fails the whole table.
pub fn normalize_table(input: &ParsedTsv, roles: RoleColumns) -> NormalizeResult<NormalizedTables> {
    roles.check_width(1, input.headers.len())?;

    let column = |index: usize| input.headers[index].clone();

    let mut node_headers = vec![FACT_ID_HEADER.to_string()];
    node_headers.extend(
        input
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !roles.is_role(*i))
            .map(|(_, h)| h.clone()),
    );

    let mut tables = NormalizedTables {
        nodes: Table::new(node_headers),
        sources: Table::new(vec![FACT_ID_HEADER.to_string(), column(roles.source)]),
        targets: Table::new(vec![FACT_ID_HEADER.to_string(), column(roles.target)]),
        arrays: Table::new(vec![FACT_ID_HEADER.to_string(), column(roles.array)]),
    };

    for row in &input.rows {
        roles.check_width(row.line, row.fields.len())?;
        let fields = &row.fields;

        let identity: Vec<&str> = fields
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != roles.array)
            .map(|(_, f)| f.as_str())
            .collect();
        let id = fact_id(&identity).to_string();

        let mut node = Vec::with_capacity(fields.len() - 2);
        node.push(id.clone());
        node.extend(
            fields
                .iter()
                .enumerate()
                .filter(|(i, _)| !roles.is_role(*i))
                .map(|(_, f)| f.clone()),
        );
        tables.nodes.rows.push(node);

        tables.sources.rows.push(vec![id.clone(), fields[roles.source].clone()]);
        tables.targets.rows.push(vec![id.clone(), fields[roles.target].clone()]);

        for element in split_array(&fields[roles.array]) {
            tables.arrays.rows.push(vec![id.clone(), element.to_string()]);
        }
    }

    Ok(tables)
}
