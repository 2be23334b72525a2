//! Google Drive link resolution.
//!
//! Source records carry a single share/viewer link per catalog; the preview,
//! download, and thumbnail URLs are all derived from the file identifier
//! embedded in it.

/// Minimum length for the bare-token fallback. Real Drive file ids are
/// well above this; ordinary URL path segments stay below it.
const MIN_FALLBACK_ID_LEN: usize = 25;

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_absolute_url(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Extract a Drive file identifier from a share or viewer link.
///
/// Strategies, in priority order: `/file/d/<id>` path segment, `id=` query
/// parameter, then the first run of 25+ identifier characters.
pub fn extract_drive_id(link: &str) -> Option<String> {
    if link.is_empty() {
        return None;
    }
    if let Some(id) = extract_path_segment_id(link) {
        return Some(id);
    }
    if let Some(id) = extract_query_param_id(link) {
        return Some(id);
    }
    extract_long_token(link)
}

fn extract_path_segment_id(link: &str) -> Option<String> {
    const MARKER: &str = "/file/d/";
    let start = link.find(MARKER)? + MARKER.len();
    let id: String = link[start..].chars().take_while(|&c| is_id_char(c)).collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn extract_query_param_id(link: &str) -> Option<String> {
    let mut from = 0;
    while let Some(found) = link[from..].find("id=") {
        let at = from + found;
        // Only `?id=` and `&id=` count; `uid=` and friends do not.
        let delimited = at > 0 && matches!(link.as_bytes()[at - 1], b'?' | b'&');
        if delimited {
            let id: String = link[at + 3..].chars().take_while(|&c| is_id_char(c)).collect();
            if !id.is_empty() {
                return Some(id);
            }
        }
        from = at + 3;
    }
    None
}

fn extract_long_token(link: &str) -> Option<String> {
    let mut run = String::new();
    for c in link.chars() {
        if is_id_char(c) {
            run.push(c);
        } else {
            if run.len() >= MIN_FALLBACK_ID_LEN {
                return Some(run);
            }
            run.clear();
        }
    }
    if run.len() >= MIN_FALLBACK_ID_LEN {
        Some(run)
    } else {
        None
    }
}

/// Viewer-style preview URL. Falls back to the original link when no id is
/// found and the link can stand on its own as an absolute URL.
pub fn preview_url(link: &str) -> Option<String> {
    match extract_drive_id(link) {
        Some(id) => Some(format!("https://drive.google.com/file/d/{id}/preview")),
        None if is_absolute_url(link) => Some(link.to_string()),
        None => None,
    }
}

/// Direct-download URL, with the same fallback policy as [`preview_url`].
pub fn download_url(link: &str) -> Option<String> {
    match extract_drive_id(link) {
        Some(id) => Some(format!("https://drive.google.com/uc?export=download&id={id}")),
        None if is_absolute_url(link) => Some(link.to_string()),
        None => None,
    }
}

/// Sized thumbnail URL. No fallback: an unresolvable link has no thumbnail.
pub fn thumb_url(link: &str) -> Option<String> {
    extract_drive_id(link)
        .map(|id| format!("https://drive.google.com/thumbnail?id={id}&sz=w1000"))
}
