/// Join an api base and a path with exactly one `/` between them.
pub fn join_url(api_base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if api_base.ends_with('/') {
        format!("{}{}", api_base, path)
    } else {
        format!("{}/{}", api_base, path)
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}…", &s[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:11434", "api/chat"), "http://localhost:11434/api/chat");
        assert_eq!(join_url("http://localhost:11434/", "api/chat"), "http://localhost:11434/api/chat");
        assert_eq!(join_url("http://localhost:11434/v1/", "/chat/completions"), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("模型加载失败了", 4), "模型加载…");
    }
}
