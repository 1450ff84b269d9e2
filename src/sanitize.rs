// src/sanitize.rs
//! Best-effort cleanup of generator output. Models sometimes wrap the
//! document in a markdown code fence despite being told not to; recover the
//! bare document. Never fails; sanitizing clean text is a no-op.

/// Strip optional leading/trailing code fences and surrounding whitespace.
///
/// Leading strip applies only when the very first line is an opening fence
/// (three backticks plus an optional language tag); trailing strip applies
/// only when the final line is a bare closing fence. The two checks are
/// independent, so an unpaired fence is still removed. Repeated fences are
/// stripped too, which keeps the whole thing idempotent.
pub fn strip_code_fence(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    while is_opening_fence(text.lines().next().unwrap_or("")) {
        text = match text.split_once('\n') {
            Some((_, rest)) => rest.trim().to_string(),
            // Fence with no body.
            None => String::new(),
        };
    }

    while text
        .lines()
        .last()
        .map(is_closing_fence)
        .unwrap_or(false)
    {
        match text.rfind("```") {
            Some(idx) => {
                text.truncate(idx);
                text = text.trim().to_string();
            }
            None => break,
        }
    }

    text
}

fn is_opening_fence(line: &str) -> bool {
    let line = line.trim();
    line.strip_prefix("```")
        .map(|tag| tag.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(false)
}

fn is_closing_fence(line: &str) -> bool {
    line.trim() == "```"
}
