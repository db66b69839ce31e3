//! Compiler for the compact tag-grammar strings.
//!
//! Grammar: `<REGEX>` matches one token whose tag matches REGEX;
//! concatenation is sequence; `(...)` groups; `A|B` alternation (lowest
//! precedence — it splits the remainder of the string into two alternative
//! continuations); postfix `*`, `+`, `?` quantify the immediately preceding
//! atom or group, greedy.

use lexweave_foundation::{Error, Result};
use regex::Regex;

use crate::pattern::{Pattern, RepeatKind};

/// Compiles a grammar string into a [`Pattern`].
///
/// # Errors
///
/// Returns [`ErrorKind::PatternSyntax`] for an unterminated tag or group, a
/// quantifier with no preceding atom, an unrecognized quantifier symbol, or
/// a tag whose regex does not parse.
///
/// [`ErrorKind::PatternSyntax`]: lexweave_foundation::ErrorKind::PatternSyntax
pub fn compile(grammar: &str) -> Result<Pattern> {
    let chars: Vec<char> = grammar.chars().collect();
    let (pattern, stop) = sequence(&chars, 0, false)?;
    debug_assert_eq!(stop, chars.len());
    Ok(pattern)
}

/// Parses a sequence of atoms until end of input, a closing `)` (when
/// `in_group`), or a `|` that takes the remainder as an alternative.
///
/// Returns the parsed pattern and the index one past the last character it
/// consumed (the index after `)` when stopping at a group close).
fn sequence(chars: &[char], start: usize, in_group: bool) -> Result<(Pattern, usize)> {
    let mut elements: Vec<Pattern> = Vec::new();
    let mut i = start;

    while i < chars.len() {
        match chars[i] {
            '<' => {
                let close = find(chars, i + 1, '>')
                    .ok_or_else(|| Error::pattern_syntax("unterminated tag", i))?;
                let expression: String = chars[i + 1..close].iter().collect();
                let regex = Regex::new(&expression).map_err(|e| {
                    Error::pattern_syntax(format!("invalid tag expression: {e}"), i)
                })?;
                elements.push(Pattern::Tag(regex));
                i = close + 1;
            }
            '(' => {
                let (group, after) = sequence(chars, i + 1, true)?;
                elements.push(group);
                i = after;
            }
            ')' => {
                if in_group {
                    return Ok((collapse(elements), i + 1));
                }
                return Err(Error::pattern_syntax("unmatched ')'", i));
            }
            '|' => {
                let (rest, after) = sequence(chars, i + 1, in_group)?;
                let alternate =
                    Pattern::Alternate(Box::new(collapse(elements)), Box::new(rest));
                return Ok((alternate, after));
            }
            quantifier @ ('*' | '+' | '?') => {
                let kind = match quantifier {
                    '*' => RepeatKind::ZeroOrMore,
                    '+' => RepeatKind::OneOrMore,
                    _ => RepeatKind::ZeroOrOne,
                };
                let inner = elements.pop().ok_or_else(|| {
                    Error::pattern_syntax("quantifier with no preceding atom", i)
                })?;
                elements.push(Pattern::Repeat {
                    inner: Box::new(inner),
                    kind,
                });
                i += 1;
            }
            other => {
                return Err(Error::pattern_syntax(
                    format!("unrecognized quantifier symbol '{other}'"),
                    i,
                ));
            }
        }
    }

    if in_group {
        return Err(Error::pattern_syntax("unterminated group", start));
    }
    Ok((collapse(elements), i))
}

/// Wraps parsed elements in a sequence, unwrapping the trivial single case.
fn collapse(mut elements: Vec<Pattern>) -> Pattern {
    if elements.len() == 1 {
        elements.pop().expect("length checked")
    } else {
        Pattern::Sequence(elements)
    }
}

fn find(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars[from..].iter().position(|&c| c == needle).map(|p| from + p)
}
