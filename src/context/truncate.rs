//! 截断工具
//!
//! 上下文的每个 section 有固定的字符上限，超出时截断并留标记。

fn clamp_to_char_boundary(s: &str, mut idx: usize) -> usize {
    idx = idx.min(s.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// 保留头部，截断尾部
pub fn truncate_end(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let cut = clamp_to_char_boundary(text, max_len);
    format!("{}\n... [truncated]", &text[..cut])
}

/// 保留头尾，截断中间（用于文件摘录）
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let half = (max_len / 2).saturating_sub(20);
    if half == 0 {
        return truncate_end(text, max_len);
    }

    let head_end = clamp_to_char_boundary(text, half);
    let tail_start = clamp_to_char_boundary(text, text.len().saturating_sub(half));

    format!(
        "{}\n\n... [truncated] ...\n\n{}",
        &text[..head_end],
        &text[tail_start..]
    )
}
