//! Variable table: interning, fresh auxiliaries, and the mutable assignment.
//!
//! A [`VarTable`] is the single place that owns variable identity for one
//! parse/encode/solve pipeline. It assigns a small positive [`VarIndex`] to
//! every distinct variable name the parser sees, can mint anonymous
//! "fresh" variables for the Tseitin encoder, and tracks each variable's
//! current three-valued [`TruthValue`] for the duration of a solve.

use std::collections::HashMap;
use std::num::NonZeroU32;

/// Identifies a single variable within a [`VarTable`].
///
/// Index `0` is reserved to mean "no variable" and is never returned by
/// [`VarTable::intern`] or [`VarTable::fresh`]; wrapping the index in
/// [`NonZeroU32`] makes that invariant a type-level guarantee instead of a
/// documented convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarIndex(NonZeroU32);

impl VarIndex {
    fn from_one_based(n: u32) -> Self {
        VarIndex(NonZeroU32::new(n).expect("variable indices start at 1"))
    }

    /// Returns the index as a plain integer, for use as a literal magnitude.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// A signed reference to a [`VarIndex`]: positive asserts the variable
/// true, negative asserts it false. `0` is never a valid literal value,
/// which [`NonZeroI32`](std::num::NonZeroI32) enforces at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal(std::num::NonZeroI32);

impl Literal {
    /// Builds the positive literal for `var`.
    pub fn positive(var: VarIndex) -> Self {
        Literal(std::num::NonZeroI32::new(var.get() as i32).unwrap())
    }

    /// Builds the negative literal for `var`.
    pub fn negative(var: VarIndex) -> Self {
        Literal(std::num::NonZeroI32::new(-(var.get() as i32)).unwrap())
    }

    /// The variable this literal refers to, independent of polarity.
    pub fn var(self) -> VarIndex {
        VarIndex::from_one_based(self.0.get().unsigned_abs())
    }

    /// `true` if this literal asserts its variable true.
    pub fn is_positive(self) -> bool {
        self.0.get() > 0
    }

    /// This literal negated.
    pub fn negated(self) -> Literal {
        Literal(-self.0)
    }

    /// The raw DIMACS-style signed integer (positive = asserted true).
    pub fn as_i32(self) -> i32 {
        self.0.get()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;
    fn neg(self) -> Literal {
        self.negated()
    }
}

/// The three-valued truth of a variable under a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruthValue {
    True,
    False,
    #[default]
    Undefined,
}

impl TruthValue {
    /// The value a literal evaluates to under a variable's truth value.
    fn under(self, positive: bool) -> TruthValue {
        match (self, positive) {
            (TruthValue::Undefined, _) => TruthValue::Undefined,
            (TruthValue::True, true) | (TruthValue::False, false) => TruthValue::True,
            (TruthValue::True, false) | (TruthValue::False, true) => TruthValue::False,
        }
    }
}

/// Owns variable names, allocates fresh auxiliaries, and holds the current
/// assignment. One table is shared by the parser, the Tseitin encoder, and
/// the solver for a single pipeline run.
#[derive(Debug, Default)]
pub struct VarTable {
    names: Vec<Option<String>>,
    values: Vec<TruthValue>,
    by_name: HashMap<String, VarIndex>,
    /// Insertion-order cursor for `next_undefined`, so repeated scans don't
    /// restart from variable 1 every time (an implementation convenience;
    /// semantics match a plain linear scan).
    scan_cursor: usize,
}

impl VarTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, name: Option<String>) -> VarIndex {
        self.names.push(name);
        self.values.push(TruthValue::Undefined);
        VarIndex::from_one_based(self.names.len() as u32)
    }

    /// Returns the index bound to `name`, interning it with an `Undefined`
    /// value if this is the first time `name` has been seen. The same name
    /// always maps to the same index within one table.
    pub fn intern(&mut self, name: &str) -> VarIndex {
        if let Some(&v) = self.by_name.get(name) {
            return v;
        }
        let v = self.push(Some(name.to_string()));
        self.by_name.insert(name.to_string(), v);
        v
    }

    /// Allocates a new anonymous variable, distinct from any interned name.
    pub fn fresh(&mut self) -> VarIndex {
        self.push(None)
    }

    fn slot(&self, v: VarIndex) -> usize {
        (v.get() - 1) as usize
    }

    /// The variable's current truth value.
    pub fn value(&self, v: VarIndex) -> TruthValue {
        self.values[self.slot(v)]
    }

    /// Sets the variable's current truth value.
    pub fn set_value(&mut self, v: VarIndex, t: TruthValue) {
        let idx = self.slot(v);
        self.values[idx] = t;
    }

    /// The value a literal evaluates to under the current assignment.
    pub fn literal_value(&self, lit: Literal) -> TruthValue {
        self.value(lit.var()).under(lit.is_positive())
    }

    /// A name for `v` suitable for pretty-printing. Interned variables
    /// return their source name; fresh (anonymous) variables return a
    /// synthesized placeholder such as `_t3`.
    pub fn name_of(&self, v: VarIndex) -> String {
        match &self.names[self.slot(v)] {
            Some(name) => name.clone(),
            None => format!("_t{}", v.get()),
        }
    }

    /// Some variable that is currently `Undefined`, scanned in insertion
    /// order starting from the last point of progress; `None` if every
    /// variable is assigned. This is the solver's sole branching source.
    pub fn next_undefined(&mut self) -> Option<VarIndex> {
        while self.scan_cursor < self.values.len() {
            if self.values[self.scan_cursor] == TruthValue::Undefined {
                return Some(VarIndex::from_one_based((self.scan_cursor + 1) as u32));
            }
            self.scan_cursor += 1;
        }
        None
    }

    /// Resets the `next_undefined` scan cursor to the start. Backtracking
    /// can re-undefine an earlier variable, so the solver rewinds the
    /// cursor whenever it unassigns a variable during unwind.
    pub fn reset_scan_cursor(&mut self) {
        self.scan_cursor = 0;
    }

    /// Number of variables (named and fresh) allocated so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` if no variable has been allocated.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(name, index)` for every interned (non-anonymous) variable
    /// in insertion order. Used when the driver echoes the source-to-DIMACS
    /// variable mapping in `convert` mode.
    pub fn iter_interned(&self) -> impl Iterator<Item = (&str, VarIndex)> {
        self.names.iter().enumerate().filter_map(|(i, name)| {
            name.as_deref()
                .map(|n| (n, VarIndex::from_one_based((i + 1) as u32)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_index() {
        let mut vt = VarTable::new();
        let a1 = vt.intern("a");
        let a2 = vt.intern("a");
        assert_eq!(a1, a2);
    }

    #[test]
    fn fresh_variables_are_distinct() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let f1 = vt.fresh();
        let f2 = vt.fresh();
        assert_ne!(a, f1);
        assert_ne!(f1, f2);
    }

    #[test]
    fn literal_polarity() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        vt.set_value(a, TruthValue::True);
        assert_eq!(vt.literal_value(Literal::positive(a)), TruthValue::True);
        assert_eq!(vt.literal_value(Literal::negative(a)), TruthValue::False);
    }

    #[test]
    fn next_undefined_in_insertion_order() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let b = vt.intern("b");
        assert_eq!(vt.next_undefined(), Some(a));
        vt.set_value(a, TruthValue::True);
        vt.reset_scan_cursor();
        assert_eq!(vt.next_undefined(), Some(b));
        vt.set_value(b, TruthValue::True);
        vt.reset_scan_cursor();
        assert_eq!(vt.next_undefined(), None);
    }

    #[test]
    fn name_of_anonymous_variable_is_stable() {
        let mut vt = VarTable::new();
        let f = vt.fresh();
        assert_eq!(vt.name_of(f), vt.name_of(f));
        assert!(vt.name_of(f).starts_with('_'));
    }

    #[test]
    fn is_empty_before_first_variable_and_not_after() {
        let mut vt = VarTable::new();
        assert!(vt.is_empty());
        assert_eq!(vt.len(), 0);
        vt.intern("a");
        assert!(!vt.is_empty());
        assert_eq!(vt.len(), 1);
    }

    #[test]
    fn iter_interned_skips_fresh_variables() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let b = vt.intern("b");
        vt.fresh();
        let named: Vec<(&str, VarIndex)> = vt.iter_interned().collect();
        assert_eq!(named, vec![("a", a), ("b", b)]);
    }
}
