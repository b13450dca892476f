/// Worker configuration for a bridge.
///
/// Every [`Cursor`](super::Cursor) owns one worker thread holding the
/// suspended producer. Combinators that open bridges internally use
/// [`BridgeConfig::default`].
///
/// ```rust
/// use seqtools::prelude::*;
/// use seqtools::bridge::BridgeConfig;
///
/// let config = BridgeConfig::new()
///     .with_name("numbers")
///     .with_stack_size(256 * 1024);
/// let mut cursor = count().cursor_with(&config).unwrap();
/// assert_eq!(cursor.advance(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Name given to the worker thread.
    pub name: Option<String>,
    /// Stack size of the worker thread in bytes; the platform default when `None`.
    pub stack_size: Option<usize>,
}

impl BridgeConfig {
    pub(crate) const DEFAULT_NAME: &'static str = "seqtools-bridge";

    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker thread name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the worker thread stack size.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub(crate) fn thread_builder(&self) -> std::thread::Builder {
        let name = self.name.as_deref().unwrap_or(Self::DEFAULT_NAME);
        let builder = std::thread::Builder::new().name(name.to_owned());
        match self.stack_size {
            Some(bytes) => builder.stack_size(bytes),
            None => builder,
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            name: Some(Self::DEFAULT_NAME.to_owned()),
            stack_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_worker() {
        let config = BridgeConfig::default();
        assert_eq!(config.name.as_deref(), Some("seqtools-bridge"));
        assert_eq!(config.stack_size, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BridgeConfig::new().with_name("tee").with_stack_size(64 * 1024);
        assert_eq!(config.name.as_deref(), Some("tee"));
        assert_eq!(config.stack_size, Some(64 * 1024));
    }
}
