//! Clauses and conjunctive normal form.
//!
//! Every clause the Tseitin encoder produces has at most three literals, so
//! [`Clause`] is a fixed-arity container rather than a `Vec`: no
//! heap allocation per clause, and the zero-padding rule ("zeros denote
//! absent slots") is enforced once here instead of scattered through the
//! encoder.

use crate::vars::{Literal, TruthValue, VarTable};

/// A disjunction of up to three literals. Unused slots are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    slots: [Option<Literal>; 3],
}

impl Clause {
    /// Builds a clause from up to three literals; pass `None` for absent
    /// slots. This is the sole clause constructor, matching the reference
    /// implementation's `ternary(a, b, c)` factory.
    pub fn ternary(a: Option<Literal>, b: Option<Literal>, c: Option<Literal>) -> Self {
        Clause { slots: [a, b, c] }
    }

    /// A clause with a single literal.
    pub fn unary(a: Literal) -> Self {
        Clause::ternary(Some(a), None, None)
    }

    /// A clause with two literals.
    pub fn binary(a: Literal, b: Literal) -> Self {
        Clause::ternary(Some(a), Some(b), None)
    }

    /// The live (non-absent) literals in this clause, in slot order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Number of live literals (0 to 3).
    pub fn len(&self) -> usize {
        self.literals().count()
    }

    /// `true` for the empty clause (no literals), which is unsatisfiable
    /// under any assignment.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// This clause's truth value under `vt`'s current assignment: `True` if
    /// any literal is satisfied, `False` if every literal is falsified,
    /// `Undefined` otherwise.
    pub fn eval(&self, vt: &VarTable) -> TruthValue {
        let mut saw_undefined = false;
        for lit in self.literals() {
            match vt.literal_value(lit) {
                TruthValue::True => return TruthValue::True,
                TruthValue::Undefined => saw_undefined = true,
                TruthValue::False => {}
            }
        }
        if saw_undefined {
            TruthValue::Undefined
        } else {
            TruthValue::False
        }
    }

    /// The clause's unit literal: if exactly one literal is `Undefined` and
    /// every other literal is falsified, that literal must be made true to
    /// satisfy the clause. Returns `None` if the clause is not a unit
    /// clause under the current assignment (including when it is already
    /// satisfied or already falsified).
    pub fn unit_literal(&self, vt: &VarTable) -> Option<Literal> {
        let mut candidate = None;
        for lit in self.literals() {
            match vt.literal_value(lit) {
                TruthValue::True => return None,
                TruthValue::Undefined => {
                    if candidate.is_some() {
                        return None;
                    }
                    candidate = Some(lit);
                }
                TruthValue::False => {}
            }
        }
        candidate
    }
}

impl std::fmt::Display for Clause {
    /// The DIMACS dialect from the external-interfaces contract: literals
    /// space-separated, terminated by a `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for lit in self.literals() {
            write!(f, "{} ", lit)?;
        }
        write!(f, "0")
    }
}

/// An ordered sequence of clauses, interpreted as their conjunction.
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    /// An empty conjunction, vacuously `True`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause. Insertion order is preserved and observable
    /// through [`Cnf::eval`] and unit propagation, since both scan clauses
    /// front-to-back.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// The clauses, in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// `true` if this CNF has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The conjunction's value under `vt`'s current assignment: `False` as
    /// soon as any clause is falsified, `True` once every clause is
    /// satisfied, `Undefined` otherwise.
    pub fn eval(&self, vt: &VarTable) -> TruthValue {
        let mut all_true = true;
        for clause in &self.clauses {
            match clause.eval(vt) {
                TruthValue::False => return TruthValue::False,
                TruthValue::Undefined => all_true = false,
                TruthValue::True => {}
            }
        }
        if all_true {
            TruthValue::True
        } else {
            TruthValue::Undefined
        }
    }
}

impl std::fmt::Display for Cnf {
    /// One clause per line, DIMACS dialect, matching spec.md's `convert`
    /// output contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::VarTable;

    #[test]
    fn empty_cnf_is_true() {
        let vt = VarTable::new();
        let cnf = Cnf::new();
        assert!(cnf.is_empty());
        assert_eq!(cnf.eval(&vt), TruthValue::True);
    }

    #[test]
    fn adding_a_clause_makes_a_cnf_non_empty() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let mut cnf = Cnf::new();
        cnf.add_clause(Clause::unary(Literal::positive(a)));
        assert!(!cnf.is_empty());
        assert_eq!(cnf.len(), 1);
    }

    #[test]
    fn empty_clause_is_unsat() {
        let vt = VarTable::new();
        let mut cnf = Cnf::new();
        cnf.add_clause(Clause::ternary(None, None, None));
        assert_eq!(cnf.eval(&vt), TruthValue::False);
    }

    #[test]
    fn unit_literal_requires_exactly_one_undefined() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let b = vt.intern("b");
        let clause = Clause::binary(Literal::negative(a), Literal::positive(b));
        // both undefined -> not a unit clause
        assert_eq!(clause.unit_literal(&vt), None);

        vt.set_value(a, TruthValue::True); // falsifies ¬a, leaving b as the unit literal
        assert_eq!(clause.unit_literal(&vt), Some(Literal::positive(b)));

        vt.set_value(b, TruthValue::True); // clause now satisfied, no unit literal
        assert_eq!(clause.unit_literal(&vt), None);
    }

    #[test]
    fn clause_display_is_dimacs_dialect() {
        let mut vt = VarTable::new();
        let a = vt.intern("a");
        let b = vt.intern("b");
        let clause = Clause::binary(Literal::positive(a), Literal::negative(b));
        assert_eq!(clause.to_string(), "1 -2 0");
    }
}
