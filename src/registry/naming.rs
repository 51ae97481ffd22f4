//! Component name canonicalization.
//!
//! Directory names and handles are written in whatever casing the author
//! prefers (`call-to-action`, `call_to_action`, `callToAction`). All of them
//! map to one upper-camel identifier (`CallToAction`) which is the key used by
//! the registry and the first segment of every view identifier.

/// Canonicalize a directory name or handle segment.
///
/// Splits on `-`, `_` and spaces, uppercases the first letter of every word
/// and joins them. The remainder of each word keeps its original casing, so
/// already-canonical names are returned unchanged.
///
/// ```
/// use kompo::registry::canonicalize;
///
/// assert_eq!(canonicalize("button"), "Button");
/// assert_eq!(canonicalize("call-to-action"), "CallToAction");
/// assert_eq!(canonicalize("CallToAction"), "CallToAction");
/// ```
pub fn canonicalize(name: &str) -> String {
    name.split(['-', '_', ' '])
        .map(upper_first)
        .collect::<String>()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase namespace used when registering a component's fieldsets.
pub fn fieldset_namespace(directory: &str) -> String {
    directory.to_lowercase()
}
