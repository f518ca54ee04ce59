/// Crate-local logging shim: events go to the `visibility_sensor` target when the
/// `tracing` feature is enabled, and compile to nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "visibility_sensor", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => { vlog!(trace, $($tt)*) };
}

macro_rules! vdebug {
    ($($tt:tt)*) => { vlog!(debug, $($tt)*) };
}

macro_rules! vwarn {
    ($($tt:tt)*) => { vlog!(warn, $($tt)*) };
}
