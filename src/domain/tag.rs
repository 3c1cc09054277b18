//! Shortcode tag resolution

/// Tag registered when nothing else claims it
pub const DEFAULT_TAG: &str = "year";

/// Tag used when [`DEFAULT_TAG`] is already taken by another shortcode
pub const FALLBACK_TAG: &str = "runthings_year";

/// Pick the tag to register.
///
/// Falls back to [`FALLBACK_TAG`] when `exists` reports `default_tag` as
/// taken, then passes the candidate through `override_tag`. Whatever the
/// override returns is used as-is, including an empty string.
pub fn resolve_tag<E, O>(default_tag: &str, exists: E, override_tag: O) -> String
where
    E: FnOnce(&str) -> bool,
    O: FnOnce(String) -> String,
{
    let candidate = if exists(default_tag) {
        FALLBACK_TAG.to_string()
    } else {
        default_tag.to_string()
    };

    let resolved = override_tag(candidate.clone());
    tracing::debug!(default_tag, %candidate, %resolved, "resolved shortcode tag");
    resolved
}

/// The tag chosen once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegistration {
    resolved_tag: String,
}

impl TagRegistration {
    /// Resolve the tag for `default_tag` and freeze the result
    pub fn resolve<E, O>(default_tag: &str, exists: E, override_tag: O) -> Self
    where
        E: FnOnce(&str) -> bool,
        O: FnOnce(String) -> String,
    {
        TagRegistration {
            resolved_tag: resolve_tag(default_tag, exists, override_tag),
        }
    }

    pub fn tag(&self) -> &str {
        &self.resolved_tag
    }
}
