//! Brace-balanced line scanner: finds candidate JSON object fragments in
//! free-form model output.
//!
//! Works line by line, so it tolerates objects embedded in explanatory
//! prose. Depth counting is purely textual; braces inside string literals
//! are counted too, so an unbalanced brace in a field value desynchronizes
//! the capture (known limitation, the later salvage tiers pick up the
//! pieces).

/// Scanner state: either waiting for a line that opens an object, or
/// accumulating lines until the brace depth returns to zero.
enum State {
    Idle,
    Capturing { text: String, depth: i64 },
}

/// Scan `response` for brace-balanced candidate fragments.
///
/// A capture starts on any line whose trimmed form begins with `{` and ends
/// on the line where the running `{`/`}` delta returns to zero (the opening
/// line itself may close the capture). Lines outside a capture that do not
/// open one are ignored. An unclosed capture at end of input is discarded.
pub fn balanced_fragments(response: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut state = State::Idle;

    for line in response.lines() {
        let trimmed = line.trim();
        state = match state {
            State::Idle => {
                if trimmed.starts_with('{') {
                    step(trimmed.to_string(), brace_delta(trimmed), &mut fragments)
                } else {
                    State::Idle
                }
            }
            State::Capturing { mut text, depth } => {
                text.push_str(trimmed);
                step(text, depth + brace_delta(trimmed), &mut fragments)
            }
        };
    }

    fragments
}

/// Advance one capture step: emit the accumulated text when depth hits zero.
fn step(text: String, depth: i64, fragments: &mut Vec<String>) -> State {
    if depth == 0 {
        fragments.push(text);
        State::Idle
    } else {
        State::Capturing { text, depth }
    }
}

fn brace_delta(line: &str) -> i64 {
    let opens = line.matches('{').count() as i64;
    let closes = line.matches('}').count() as i64;
    opens - closes
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_object() {
        let frags = balanced_fragments(r#"{"a": 1}"#);
        assert_eq!(frags, vec![r#"{"a": 1}"#.to_string()]);
    }

    #[test]
    fn multi_line_object() {
        let frags = balanced_fragments("{\n  \"a\": 1,\n  \"b\": 2\n}");
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0], r#"{"a": 1,"b": 2}"#);
    }

    #[test]
    fn object_among_prose() {
        let text = "Here are the samples:\n{\n\"a\": 1\n}\nHope this helps!";
        let frags = balanced_fragments(text);
        assert_eq!(frags.len(), 1);
    }

    #[test]
    fn several_objects() {
        let text = "{\n\"a\": 1\n}\nsome chatter\n{\n\"b\": 2\n}";
        assert_eq!(balanced_fragments(text).len(), 2);
    }

    #[test]
    fn nested_braces() {
        let text = "{\n\"outer\": {\n\"inner\": 1\n}\n}";
        let frags = balanced_fragments(text);
        assert_eq!(frags.len(), 1);
        assert!(frags[0].starts_with('{') && frags[0].ends_with('}'));
    }

    #[test]
    fn unclosed_capture_discarded() {
        let frags = balanced_fragments("{\n\"a\": 1,");
        assert!(frags.is_empty());
    }

    #[test]
    fn prose_only() {
        assert!(balanced_fragments("nothing json-like here\nat all").is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(balanced_fragments("").is_empty());
    }

    #[test]
    fn lines_before_open_ignored() {
        // A `}` on its own line while idle must not underflow into a capture.
        let frags = balanced_fragments("}\n{\n\"a\": 1\n}");
        assert_eq!(frags.len(), 1);
    }

    #[test]
    fn brace_in_string_desynchronizes() {
        // Documented limitation: a literal `{` inside a string value keeps
        // the depth above zero, so the fragment is never emitted.
        let frags = balanced_fragments("{\n\"a\": \"curly { inside\"\n}");
        assert!(frags.is_empty());
    }

    #[test]
    fn single_line_object_as_last_line() {
        // The opening line may also be the closing line, even at EOF.
        let frags = balanced_fragments("prose first\n{\"a\": 1}");
        assert_eq!(frags.len(), 1);
    }
}
