//! # propsat
//!
//! A Tseitin-encoding, DPLL-based propositional satisfiability engine.
//!
//! `propsat` takes a reverse-Polish propositional formula, structurally
//! transforms it into an equisatisfiable CNF via the Tseitin
//! transformation, and decides satisfiability with a chronological DPLL
//! search (decision, unit propagation, conflict-driven backtracking — no
//! clause learning, no watched literals).
//!
//! ## Architecture
//!
//! - [`vars`]: variable interning, fresh auxiliaries, and the mutable
//!   three-valued assignment
//! - [`cnf`]: fixed-arity clauses and the CNF they form
//! - [`ast`]: the propositional formula tree and its pretty-printer
//! - [`lexer`] / [`parser`]: reverse-Polish tokenizing and parsing
//! - [`tseitin`]: the AST-to-CNF transformation
//! - [`solver`]: the DPLL search
//! - [`error`]: the crate's error type
//!
//! ## Quick start
//!
//! ```
//! use propsat::{parser, tseitin, vars::VarTable, solver::dpll::is_satisfiable};
//!
//! let mut vt = VarTable::new();
//! let formula = parser::parse(&mut vt, "a b ||").unwrap(); // a || b
//! let cnf = tseitin::to_cnf(&mut vt, &formula);
//! assert!(is_satisfiable(&mut vt, &cnf));
//! ```

pub mod ast;
pub mod cli;
pub mod cnf;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod solver;
pub mod tseitin;
pub mod vars;

pub use error::{PropSatError, Result};
pub use solver::dpll::is_satisfiable;
