//! Module identifier normalization and classification.
//!
//! Build tools hand out ids such as `/src/App.vue?vue&type=style&index=0&lang.css`
//! or `/src//utils.ts?v=1a2b#hmr`. Everything in the graph is keyed by the
//! normalized form produced here.

/// Marker of a Vue SFC style sub-request; such modules are dropped from the graph.
const STYLE_VARIANT_MARKER: &str = "vue&type=style";

/// Directory segment that marks third-party packages.
const DEPENDENCY_DIR: &str = "node_modules";

/// Strip query string and fragment, and collapse runs of `/` into one.
///
/// ```
/// use modviz_graph::module_id::normalize_module_id;
///
/// assert_eq!(normalize_module_id("/src//App.vue?vue&type=script#x"), "/src/App.vue");
/// assert_eq!(normalize_module_id("/src/main.ts"), "/src/main.ts");
/// ```
pub fn normalize_module_id(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut normalized = String::with_capacity(end);
    let mut previous_slash = false;
    for ch in raw[..end].chars() {
        if ch == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        normalized.push(ch);
    }
    normalized
}

/// True for style sub-resources of a single-file component.
///
/// A `.vue` file with a `<style>` block shows up twice in the build graph
/// (script and style); the style half only adds noise.
pub fn is_style_variant(id: &str) -> bool {
    id.contains(STYLE_VARIANT_MARKER)
}

/// True if any path segment is the third-party dependency directory.
pub fn is_node_module(id: &str) -> bool {
    id.split('/').any(|segment| segment == DEPENDENCY_DIR)
}

/// Last path segment of an id.
pub fn display_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// The id with the first occurrence of the project root removed.
pub fn strip_root(id: &str, root: &str) -> String {
    if root.is_empty() {
        id.to_string()
    } else {
        id.replacen(root, "", 1)
    }
}

/// True if the id lies under the project root. An empty root contains everything.
pub fn is_under_root(id: &str, root: &str) -> bool {
    id.starts_with(root)
}

/// File extension used as the render group, or `"unknown"`.
pub fn file_group(id: &str) -> &str {
    match id.rsplit_once('.') {
        Some((_, ext))
            if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            ext
        }
        _ => "unknown",
    }
}
