//! Error macros for routefind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a malformed input record
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::RouteError::malformed($line, format!($($arg)*)))
    };
}
