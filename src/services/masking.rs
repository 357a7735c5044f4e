/// Display form of an API key. Never returns the full key.
pub fn mask_key(key: &str) -> Option<String> {
    let chars: Vec<char> = key.chars().collect();
    let first = *chars.first()?;
    if chars.len() <= 8 {
        return Some(format!("{}***", first));
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    Some(format!("{}…{}", head, tail))
}
