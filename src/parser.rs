//! Reverse-Polish propositional formula parser.
//!
//! Tokens are consumed left to right against a working stack of partial
//! AST nodes: variables push a leaf, `!` pops one operand and pushes the
//! unary node, and each binary operator pops two operands — right operand
//! first, then left — and pushes the binary node with children ordered
//! `(left, right)`. At end of input the stack must hold exactly one node.

use crate::ast::{BinaryKind, Formula};
use crate::error::{PropSatError, Result};
use crate::lexer::tokenize;
use crate::vars::VarTable;

/// Tokens longer than this are rejected, matching the fixed 32-byte
/// (31 content + terminator) input-buffer contract of the external
/// tokenizer this parser was designed against.
pub const MAX_TOKEN_LEN: usize = 31;

/// The classification of a single token.
enum TokenKind {
    Var,
    Not,
    Binary(BinaryKind),
}

/// Classifies `token`, or reports it as invalid.
///
/// A token is a variable iff it matches `[A-Za-z][A-Za-z0-9]*`; the five
/// connective spellings are recognized literally; anything else is a
/// parse error.
fn to_kind(token: &str) -> Result<TokenKind> {
    match token {
        "&&" => Ok(TokenKind::Binary(BinaryKind::And)),
        "||" => Ok(TokenKind::Binary(BinaryKind::Or)),
        "!" => Ok(TokenKind::Not),
        "=>" => Ok(TokenKind::Binary(BinaryKind::Implies)),
        "<=>" => Ok(TokenKind::Binary(BinaryKind::Equiv)),
        _ if is_variable_name(token) => Ok(TokenKind::Var),
        _ => Err(PropSatError::InvalidToken {
            token: token.to_string(),
        }),
    }
}

fn is_variable_name(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

/// Parses a reverse-Polish token stream into a single [`Formula`], interning
/// variable names into `vt` as they're encountered.
pub fn parse(vt: &mut VarTable, input: &str) -> Result<Formula> {
    let mut stack: Vec<Formula> = Vec::new();

    for token in tokenize(input) {
        if token.len() > MAX_TOKEN_LEN {
            return Err(PropSatError::TokenTooLong {
                token: token.to_string(),
                max: MAX_TOKEN_LEN,
            });
        }

        match to_kind(token)? {
            TokenKind::Var => stack.push(Formula::mk_var(vt, token)),
            TokenKind::Not => {
                let operand = stack.pop().ok_or(PropSatError::StackUnderflow { op: "!" })?;
                stack.push(Formula::mk_unary(operand));
            }
            TokenKind::Binary(kind) => {
                let right = stack
                    .pop()
                    .ok_or(PropSatError::StackUnderflow { op: "binary operator" })?;
                let left = stack
                    .pop()
                    .ok_or(PropSatError::StackUnderflow { op: "binary operator" })?;
                stack.push(Formula::mk_binary(kind, left, right));
            }
        }
    }

    match stack.len() {
        0 => Err(PropSatError::EmptyInput),
        1 => Ok(stack.pop().unwrap()),
        n => Err(PropSatError::TrailingOperands { remaining: n }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_variable() {
        let mut vt = VarTable::new();
        let f = parse(&mut vt, "a").unwrap();
        assert_eq!(f, Formula::Var(vt.intern("a")));
    }

    #[test]
    fn negation() {
        let mut vt = VarTable::new();
        let f = parse(&mut vt, "a !").unwrap();
        assert!(matches!(f, Formula::Not(_)));
    }

    #[test]
    fn binary_operands_in_left_right_order() {
        let mut vt = VarTable::new();
        let f = parse(&mut vt, "a b =>").unwrap();
        let a = vt.intern("a");
        let b = vt.intern("b");
        match f {
            Formula::Implies(l, r) => {
                assert_eq!(*l, Formula::Var(a));
                assert_eq!(*r, Formula::Var(b));
            }
            _ => panic!("expected Implies"),
        }
    }

    #[test]
    fn scenario_five_implies_and_not() {
        // a b => a && b ! &&  ==  (a=>b) && a && !b
        let mut vt = VarTable::new();
        let f = parse(&mut vt, "a b => a && b ! &&").unwrap();
        assert!(matches!(f, Formula::And(_, _)));
    }

    #[test]
    fn unary_on_empty_stack_is_an_error() {
        let mut vt = VarTable::new();
        assert!(matches!(
            parse(&mut vt, "!"),
            Err(PropSatError::StackUnderflow { op: "!" })
        ));
    }

    #[test]
    fn binary_with_one_operand_is_an_error() {
        let mut vt = VarTable::new();
        assert!(matches!(
            parse(&mut vt, "a &&"),
            Err(PropSatError::StackUnderflow { .. })
        ));
    }

    #[test]
    fn trailing_operands_is_an_error() {
        let mut vt = VarTable::new();
        assert!(matches!(
            parse(&mut vt, "a b"),
            Err(PropSatError::TrailingOperands { remaining: 2 })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut vt = VarTable::new();
        assert!(matches!(parse(&mut vt, ""), Err(PropSatError::EmptyInput)));
    }

    #[test]
    fn invalid_token_is_an_error() {
        let mut vt = VarTable::new();
        assert!(matches!(
            parse(&mut vt, "3x"),
            Err(PropSatError::InvalidToken { .. })
        ));
    }

    #[test]
    fn over_long_token_is_an_error() {
        let mut vt = VarTable::new();
        let long = "a".repeat(32);
        assert!(matches!(
            parse(&mut vt, &long),
            Err(PropSatError::TokenTooLong { .. })
        ));
    }

    #[test]
    fn max_length_token_is_accepted() {
        let mut vt = VarTable::new();
        let ok = "a".repeat(MAX_TOKEN_LEN);
        assert!(parse(&mut vt, &ok).is_ok());
    }
}
