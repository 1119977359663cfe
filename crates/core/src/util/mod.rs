pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, and outputs the value of the expression after logging the
/// elapsed time. The log level defaults to `Debug`.
///
/// ```
/// let spiral = hexgrid::timed!("Spiral", hexgrid::Hex::new(0i64, 0).spiral(10));
/// assert_eq!(spiral.len(), 331);
/// ```
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, $crate::log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        $crate::log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}
