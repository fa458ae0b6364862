use std::collections::HashMap;

use crate::interpreter::value::number::Number;

/// Variable storage: a chain of scopes mapping names to numbers.
///
/// The first scope is the root and is never removed. Lookups start in the
/// innermost scope and walk outward, so an inner binding shadows an outer
/// one of the same name. Writes always go to the innermost scope.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Number>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding one empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Looks up `name`, innermost scope first.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     interpreter::{evaluator::scope::SymbolTable, value::number::Number},
    ///     util::position::Span,
    /// };
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.set("x", Number::new(1, Span::default()));
    /// symbols.push_scope();
    /// symbols.set("x", Number::new(2, Span::default()));
    ///
    /// assert_eq!(symbols.get("x").map(|n| n.to_string()), Some("2".into()));
    /// symbols.pop_scope();
    /// assert_eq!(symbols.get("x").map(|n| n.to_string()), Some("1".into()));
    /// assert_eq!(symbols.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Number> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Binds `name` in the innermost scope, replacing any binding of the same
    /// name in that scope. Outer bindings are left untouched.
    pub fn set(&mut self, name: impl Into<String>, value: Number) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        } else {
            self.scopes.push(HashMap::from([(name.into(), value)]));
        }
    }

    /// Removes `name` from the innermost scope and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<Number> {
        self.scopes.last_mut()?.remove(name)
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost scope, dropping its bindings.
    ///
    /// The root scope is never removed; returns `false` if asked to.
    pub fn pop_scope(&mut self) -> bool {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            true
        } else {
            false
        }
    }

    /// Number of open scopes, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
