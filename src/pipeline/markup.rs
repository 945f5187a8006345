//! Minimal wiki-markup scanning shared by filters and analyses

/// Namespace prefixes marking a title as outside the main article space
const NAMESPACES: &[&str] = &[
    "Category",
    "File",
    "Image",
    "Template",
    "Wikipedia",
    "Help",
    "Portal",
    "Talk",
    "User",
    "MediaWiki",
    "Special",
];

/// The namespace prefix of a title, if it has a recognized one
pub(crate) fn namespace_of(title: &str) -> Option<&'static str> {
    let (prefix, _) = title.split_once(':')?;
    NAMESPACES
        .iter()
        .find(|ns| prefix.trim().eq_ignore_ascii_case(ns))
        .copied()
}

/// Extract `[[target]]` / `[[target|display]]` link targets in order
///
/// Display text after `|` is discarded. Targets are trimmed but otherwise
/// returned raw, namespace prefixes included; callers decide what counts
/// as an article link.
pub(crate) fn wiki_links(text: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut chars = text.chars().peekable();
    let mut in_link = false;
    let mut link_text = String::new();

    while let Some(c) = chars.next() {
        if c == '[' && chars.peek() == Some(&'[') {
            chars.next(); // consume second '['
            in_link = true;
            link_text.clear();
        } else if in_link && c == ']' && chars.peek() == Some(&']') {
            chars.next(); // consume second ']'
            in_link = false;

            let target = match link_text.find('|') {
                Some(pipe_pos) => link_text[..pipe_pos].trim(),
                None => link_text.trim(),
            };
            if !target.is_empty() {
                links.push(target.to_string());
            }
        } else if in_link {
            link_text.push(c);
        }
    }

    links
}

/// Category tags: `[[Category:Name]]` → `Name`
pub(crate) fn categories(text: &str) -> Vec<String> {
    wiki_links(text)
        .into_iter()
        .filter_map(|target| {
            let (prefix, name) = target.split_once(':')?;
            if prefix.trim().eq_ignore_ascii_case("Category") {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Case-insensitive test for a `{{name` template opener
pub(crate) fn has_template(text: &str, name: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    let needle = format!("{{{{{}", name.to_ascii_lowercase());
    lower.contains(&needle)
}
