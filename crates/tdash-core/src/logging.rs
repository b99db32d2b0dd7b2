#![forbid(unsafe_code)]

//! Debug events for the rendering crates.
//!
//! With the `tracing` feature, `tdash_core::debug!` is `tracing::debug!`.
//! Without it the macro expands to nothing, so drawing code can log
//! structured fields without depending on `tracing` itself.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Discards its arguments when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }
}

/// Install a global JSON subscriber filtered by `filter` (an `EnvFilter`
/// directive such as `"tdash_render=debug"`).
///
/// Fails if the directive does not parse or a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::EnvFilter;

    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
