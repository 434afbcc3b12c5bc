//! Tseitin transformation: formula AST to equisatisfiable CNF.
//!
//! Each connective introduces one fresh auxiliary variable `r` and a fixed
//! set of clauses implementing `r <=> connective(...)` in both directions.
//! The clause emission order below is part of the contract: the DPLL
//! solver's unit-propagation behavior depends on clause order, so anything
//! that compares clause sequences needs to see exactly these orderings.

use crate::ast::Formula;
use crate::cnf::{Clause, Cnf};
use crate::vars::{Literal, VarIndex, VarTable};

fn pos(v: VarIndex) -> Literal {
    Literal::positive(v)
}

fn neg(v: VarIndex) -> Literal {
    -pos(v)
}

/// Recursively encodes the subtree rooted at `f`, emitting clauses into
/// `cnf` and returning the `VarIndex` whose truth is equivalent to `f`'s
/// under every model the emitted clauses admit.
fn encode(vt: &mut VarTable, cnf: &mut Cnf, f: &Formula) -> VarIndex {
    match f {
        Formula::Var(v) => *v,

        Formula::Not(a) => {
            let a = encode(vt, cnf, a);
            let r = vt.fresh();
            log::trace!("tseitin: r{} <=> !{}", r.get(), a.get());
            cnf.add_clause(Clause::binary(neg(r), neg(a)));
            cnf.add_clause(Clause::binary(pos(a), pos(r)));
            r
        }

        Formula::And(a, b) => {
            let a = encode(vt, cnf, a);
            let b = encode(vt, cnf, b);
            let r = vt.fresh();
            log::trace!("tseitin: r{} <=> ({} && {})", r.get(), a.get(), b.get());
            cnf.add_clause(Clause::binary(neg(r), pos(a)));
            cnf.add_clause(Clause::binary(neg(r), pos(b)));
            cnf.add_clause(Clause::ternary(Some(neg(a)), Some(neg(b)), Some(pos(r))));
            r
        }

        Formula::Or(a, b) => {
            let a = encode(vt, cnf, a);
            let b = encode(vt, cnf, b);
            let r = vt.fresh();
            log::trace!("tseitin: r{} <=> ({} || {})", r.get(), a.get(), b.get());
            cnf.add_clause(Clause::ternary(Some(neg(r)), Some(pos(a)), Some(pos(b))));
            cnf.add_clause(Clause::binary(neg(a), pos(r)));
            cnf.add_clause(Clause::binary(neg(b), pos(r)));
            r
        }

        Formula::Implies(a, b) => {
            let a = encode(vt, cnf, a);
            let b = encode(vt, cnf, b);
            let r = vt.fresh();
            log::trace!("tseitin: r{} <=> ({} => {})", r.get(), a.get(), b.get());
            cnf.add_clause(Clause::ternary(Some(neg(r)), Some(neg(a)), Some(pos(b))));
            cnf.add_clause(Clause::binary(pos(a), pos(r)));
            cnf.add_clause(Clause::binary(neg(b), pos(r)));
            r
        }

        Formula::Equiv(a, b) => {
            let a = encode(vt, cnf, a);
            let b = encode(vt, cnf, b);
            let r = vt.fresh();
            log::trace!("tseitin: r{} <=> ({} <=> {})", r.get(), a.get(), b.get());
            cnf.add_clause(Clause::ternary(Some(neg(r)), Some(neg(a)), Some(pos(b))));
            cnf.add_clause(Clause::ternary(Some(neg(r)), Some(neg(b)), Some(pos(a))));
            cnf.add_clause(Clause::ternary(Some(pos(r)), Some(neg(a)), Some(neg(b))));
            cnf.add_clause(Clause::ternary(Some(pos(r)), Some(pos(a)), Some(pos(b))));
            r
        }
    }
}

/// Builds the equisatisfiable CNF for `f`: encodes the formula structurally,
/// then appends the unit clause `(x)` forcing the root auxiliary (or, for a
/// bare-variable root, the variable itself) true in every model.
pub fn to_cnf(vt: &mut VarTable, f: &Formula) -> Cnf {
    let mut cnf = Cnf::new();
    let x = encode(vt, &mut cnf, f);
    log::debug!(
        "tseitin: encoded formula into {} clauses over {} variables, root={}",
        cnf.len(),
        vt.len(),
        x.get()
    );
    cnf.add_clause(Clause::unary(pos(x)));
    cnf
}
