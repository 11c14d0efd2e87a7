//! Error macros for oralgrade

/// Macro for creating invalid frontmatter errors
#[macro_export]
macro_rules! bail_frontmatter {
    ($path:expr, $reason:expr) => {
        return Err($crate::error::OralgradeError::InvalidFrontmatter {
            path: $path.to_path_buf(),
            reason: $reason.to_string(),
        })
    };
}
