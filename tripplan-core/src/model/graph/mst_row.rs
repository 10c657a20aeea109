use serde::{Deserialize, Serialize};
use serde_json::Value;

/// edge id the backend assigns to the root of each spanning tree.
pub const ROOT_EDGE: i64 = -1;

/// how a row names the node it hangs from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentLink {
    /// no predecessor given, the parent is recovered from depth order.
    Infer,
    /// the backend named the predecessor node.
    Explicit(i64),
    /// a predecessor was given but is not a number; the node is orphaned.
    Unusable,
}

/// one record of a flattened spanning tree walk, in canonical form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MstRow {
    pub seq: i64,
    pub depth: i64,
    pub node: i64,
    pub edge: i64,
    pub parent: ParentLink,
}

mod keys {
    pub const SEQ: [&str; 2] = ["seq", "Seq"];
    pub const DEPTH: [&str; 2] = ["depth", "Depth"];
    pub const NODE: [&str; 2] = ["node", "Node"];
    pub const EDGE: [&str; 4] = ["edge_id", "edge", "EdgeID", "Edge"];
    pub const PRED: [&str; 2] = ["pred", "Pred"];
}

impl MstRow {
    pub fn new(seq: i64, depth: i64, node: i64, edge: i64, parent: ParentLink) -> MstRow {
        MstRow {
            seq,
            depth,
            node,
            edge,
            parent,
        }
    }

    pub fn is_root(&self) -> bool {
        self.edge == ROOT_EDGE
    }

    /// reads a backend row, accepting both the snake_case and CamelCase
    /// spellings of each field. missing seq/depth default to 0 and a missing
    /// edge defaults to the root marker. returns None when the node is absent
    /// or any of depth/node/edge is present but not numeric (null included),
    /// in which case the row should be skipped.
    pub fn from_value(row: &Value) -> Option<MstRow> {
        let node_value = get_key(row, &keys::NODE)?;
        let node = coerce_i64(node_value)?;
        let depth = match get_key(row, &keys::DEPTH) {
            Some(v) => coerce_i64(v)?,
            None => 0,
        };
        let edge = match get_key(row, &keys::EDGE) {
            Some(v) => coerce_i64(v)?,
            None => ROOT_EDGE,
        };
        let seq = get_key(row, &keys::SEQ)
            .and_then(coerce_i64)
            .unwrap_or_default();
        let parent = match get_key(row, &keys::PRED) {
            None | Some(Value::Null) => ParentLink::Infer,
            Some(v) => match coerce_i64(v) {
                Some(pred) => ParentLink::Explicit(pred),
                None => ParentLink::Unusable,
            },
        };
        Some(MstRow {
            seq,
            depth,
            node,
            edge,
            parent,
        })
    }

    /// parses a batch of backend rows, dropping the ones that cannot be read.
    pub fn from_values(rows: &[Value]) -> Vec<MstRow> {
        let parsed = rows
            .iter()
            .filter_map(MstRow::from_value)
            .collect::<Vec<_>>();
        let skipped = rows.len() - parsed.len();
        if skipped > 0 {
            log::warn!(
                "skipped {skipped} of {} MST rows with missing or non-numeric fields",
                rows.len()
            );
        }
        parsed
    }
}

/// first present value among the candidate field names. a null counts as
/// present.
fn get_key<'a>(row: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|n| row.get(n))
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}
