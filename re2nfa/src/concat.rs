//! Rewrites an infix regular expression so that every implicit concatenation is marked with an
//! explicit `.` operator, ready for postfix conversion.

/// Insert an explicit `.` between adjacent tokens that are implicitly concatenated.
///
/// A `.` is emitted after the current character when the current character can end a
/// sub-expression (a literal, `)`, or `*`) and the next character can begin one (a literal or
/// `(`). No structural validation happens here; unbalanced parentheses surface later during
/// postfix conversion. Inputs of length 0 or 1 are returned unchanged.
pub fn add_concat_operator(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut result = String::with_capacity(chars.len() * 2);

    for (i, &cur) in chars.iter().enumerate() {
        result.push(cur);
        if let Some(&next) = chars.get(i + 1) {
            if ends_expression(cur) && begins_expression(next) {
                result.push('.');
            }
        }
    }

    result
}

// `.` is excluded on both sides so the rewrite is idempotent on already-annotated input.
fn ends_expression(c: char) -> bool {
    !matches!(c, '(' | '|' | '.')
}

fn begins_expression(c: char) -> bool {
    !matches!(c, ')' | '|' | '*' | '.')
}
