macro_rules! adebug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(target: "offscreen_adapter", $($arg)+);
    };
}
