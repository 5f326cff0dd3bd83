use anyhow::Result;

/// Trait for building configuration structs
///
/// Implementors read from the environment (or any other source) and are
/// cached by the caller, typically behind a `tokio::sync::OnceCell`.
pub trait ConfigBuilder: Clone + Send + Sync + 'static {
    /// Build the configuration from the process environment
    fn build() -> Result<Self> {
        Self::build_from(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    fn build_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>;
}
