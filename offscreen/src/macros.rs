// All core events go to the `offscreen` target. Without the `tracing` feature they expand to
// nothing, so arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! offscreen_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!(target: "offscreen", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! offscreen_event {
    ($level:ident, $($arg:tt)+) => {};
}

macro_rules! otrace {
    ($($arg:tt)+) => { offscreen_event!(trace, $($arg)+) };
}

macro_rules! odebug {
    ($($arg:tt)+) => { offscreen_event!(debug, $($arg)+) };
}

macro_rules! owarn {
    ($($arg:tt)+) => { offscreen_event!(warn, $($arg)+) };
}
