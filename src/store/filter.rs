//! Equality filters over JSON documents.
//!
//! The list endpoints only need field equality and conjunction: a filter set
//! matches when every expression matches, and an empty set matches every
//! document.

use serde_json::Value;

/// A single field-equality expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    pub field: String,
    pub value: Value,
}

impl FilterExpr {
    /// Build a `field == value` expression.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the document's field equals the expected value.
    pub fn matches(&self, document: &Value) -> bool {
        document.get(&self.field) == Some(&self.value)
    }
}

/// A conjunction of equality expressions.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expression to the conjunction.
    pub fn and(mut self, expr: FilterExpr) -> Self {
        self.filters.push(expr);
        self
    }

    /// Whether the document matches every expression.
    pub fn matches(&self, document: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_matches() {
        let expr = FilterExpr::eq("section_id", "s1");
        assert!(expr.matches(&json!({"section_id": "s1"})));
        assert!(!expr.matches(&json!({"section_id": "s2"})));
        assert!(!expr.matches(&json!({"name": "no section"})));
    }

    #[test]
    fn test_eq_on_bool() {
        let expr = FilterExpr::eq("checked", true);
        assert!(expr.matches(&json!({"checked": true})));
        assert!(!expr.matches(&json!({"checked": false})));
        assert!(!expr.matches(&json!({"checked": "true"})));
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = FilterSet::new();
        assert!(set.matches(&json!({"anything": 1})));
    }

    #[test]
    fn test_conjunction() {
        let set = FilterSet::new()
            .and(FilterExpr::eq("author_id", "a1"))
            .and(FilterExpr::eq("section_id", "s1"));

        assert!(set.matches(&json!({"author_id": "a1", "section_id": "s1"})));
        assert!(!set.matches(&json!({"author_id": "a1", "section_id": "s2"})));
        assert!(!set.matches(&json!({"author_id": "a2", "section_id": "s1"})));
    }
}
