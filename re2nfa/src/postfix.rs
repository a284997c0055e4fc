//! Shunting-yard conversion of an annotated infix expression into postfix (Reverse Polish)
//! order. Expects concatenation to already be explicit; see [`crate::concat`].

use crate::compiler::{CompileError, CompileResult};

/// Binding strength of an operator, higher binds tighter. `None` for operands and parentheses.
fn precedence(op: char) -> Option<u8> {
    match op {
        '*' => Some(3),
        '.' => Some(2),
        '|' => Some(1),
        _ => None,
    }
}

/// `*` is right-associative; `.` and `|` are left-associative.
fn left_associative(op: char) -> bool {
    op != '*'
}

/// Convert an infix expression with explicit concatenation into postfix order.
///
/// Literals pass straight to the output. An operator first pops every stacked operator that is
/// not `(` and binds strictly tighter, or equally tight when the incoming operator is
/// left-associative. `)` pops to the matching `(`; both parentheses are discarded. Unmatched
/// parentheses on either side are reported as [`CompileError::UnbalancedParen`].
pub fn convert_postfix(infix: &str) -> CompileResult<String> {
    let mut output = String::with_capacity(infix.len());
    let mut stack: Vec<char> = Vec::new();

    for token in infix.chars() {
        match token {
            '(' => stack.push(token),
            ')' => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => output.push(op),
                    None => return Err(CompileError::UnbalancedParen("missing '('")),
                }
            },
            _ => match precedence(token) {
                Some(prec) => {
                    while let Some(&top) = stack.last() {
                        if top == '(' {
                            break;
                        }

                        let top_prec = precedence(top).unwrap_or(0);
                        if top_prec > prec || (top_prec == prec && left_associative(token)) {
                            output.push(top);
                            stack.pop();
                        } else {
                            break;
                        }
                    }
                    stack.push(token);
                }
                None => output.push(token),
            },
        }
    }

    while let Some(op) = stack.pop() {
        if op == '(' || op == ')' {
            return Err(CompileError::UnbalancedParen("unmatched '('"));
        }
        output.push(op);
    }

    Ok(output)
}
