//! Category ordering and lookup for grouped plots.

use crate::data::{Column, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyRepr {
    Number(u64),
    Text(String),
}

fn key_repr(value: &Value) -> Option<KeyRepr> {
    match value {
        Value::Null => None,
        // -0.0 and 0.0 are the same category
        Value::Number(n) if *n == 0.0 => Some(KeyRepr::Number(0.0f64.to_bits())),
        Value::Number(n) => Some(KeyRepr::Number(n.to_bits())),
        Value::Text(s) => Some(KeyRepr::Text(s.clone())),
    }
}

/// Distinct non-null values of a column, in plotting order.
#[derive(Debug, Clone)]
pub(super) struct Categories {
    keys: Vec<Value>,
    lookup: HashMap<KeyRepr, usize>,
}

impl Categories {
    /// Categories of `column`: numeric columns sort ascending, others keep
    /// the order of first appearance.
    pub(super) fn of(column: &Column) -> Self {
        Self::build(column, column.is_numeric())
    }

    /// Categories of `column` in ascending order regardless of its kind.
    pub(super) fn sorted(column: &Column) -> Self {
        Self::build(column, true)
    }

    fn build(column: &Column, sort: bool) -> Self {
        let mut keys: Vec<Value> = Vec::new();
        let mut seen = HashMap::new();
        for value in &column.values {
            if let Some(repr) = key_repr(value) {
                if !seen.contains_key(&repr) {
                    seen.insert(repr, keys.len());
                    keys.push(value.clone());
                }
            }
        }

        if sort {
            keys.sort_by(|a, b| a.sort_cmp(b));
        }

        let lookup = keys
            .iter()
            .enumerate()
            .filter_map(|(i, k)| key_repr(k).map(|r| (r, i)))
            .collect();

        Self { keys, lookup }
    }

    /// Position of `value`, `None` for nulls.
    pub(super) fn position(&self, value: &Value) -> Option<usize> {
        key_repr(value).and_then(|r| self.lookup.get(&r).copied())
    }

    /// Number of categories.
    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Category values in order.
    pub(super) fn keys(&self) -> &[Value] {
        &self.keys
    }

    /// Category labels in order.
    pub(super) fn labels(&self) -> Vec<String> {
        self.keys.iter().map(Value::to_string).collect()
    }
}

/// Numeric `y` values grouped by the categories of `x`.
///
/// Rows where `x` is null or `y` is not a number are dropped.
pub(super) fn group_values(categories: &Categories, x: &Column, y: &Column) -> Vec<Vec<f64>> {
    let mut groups = vec![Vec::new(); categories.len()];
    for (xv, yv) in x.values.iter().zip(&y.values) {
        if let (Some(idx), Some(n)) = (categories.position(xv), yv.as_f64()) {
            groups[idx].push(n);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ColumnKind;

    fn text(values: &[&str]) -> Column {
        Column::new(
            "t",
            ColumnKind::Categorical,
            values
                .iter()
                .map(|v| {
                    if v.is_empty() {
                        Value::Null
                    } else {
                        Value::Text(v.to_string())
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn text_keeps_first_appearance_order() {
        let cats = Categories::of(&text(&["Sun", "Sat", "", "Sun", "Fri"]));
        assert_eq!(cats.labels(), vec!["Sun", "Sat", "Fri"]);
        assert_eq!(cats.position(&Value::Text("Fri".into())), Some(2));
        assert_eq!(cats.position(&Value::Null), None);
    }

    #[test]
    fn sorted_orders_text_alphabetically() {
        let cats = Categories::sorted(&text(&["Sun", "Sat", "Fri"]));
        assert_eq!(cats.labels(), vec!["Fri", "Sat", "Sun"]);
        assert_eq!(cats.position(&Value::Text("Sun".into())), Some(2));
    }

    #[test]
    fn numeric_columns_sort_ascending() {
        let col = Column::new(
            "n",
            ColumnKind::Numeric,
            vec![Value::Number(3.0), Value::Number(1.0), Value::Number(3.0)],
        );
        let cats = Categories::of(&col);
        assert_eq!(cats.labels(), vec!["1", "3"]);
    }

    #[test]
    fn groups_collect_numeric_values() {
        let x = text(&["a", "b", "a", ""]);
        let y = Column::new(
            "y",
            ColumnKind::Numeric,
            vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Null,
                Value::Number(4.0),
            ],
        );
        let cats = Categories::of(&x);
        assert_eq!(group_values(&cats, &x, &y), vec![vec![1.0], vec![2.0]]);
    }
}
