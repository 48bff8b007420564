const COMMENT: &str = "//";

/// A comment-free, trimmed, non-blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based index into the raw source lines
    pub idx: usize,
    pub text: &'a str,
}

pub fn normalize<'a>(raw: &[&'a str]) -> Vec<Line<'a>> {
    raw.iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let code = match line.find(COMMENT) {
                Some(pos) => &line[..pos],
                None => line,
            };
            let text = code.trim();
            if text.is_empty() {
                None
            } else {
                Some(Line { idx, text })
            }
        })
        .collect()
}
