/// Returns the version of the folio crates, as shown by `folio --version`.
pub const fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $pred:expr)?) => {
        match ($expr) {
            $pat $(if $pred)? => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat $(if $pred)?)
            ),
        }
    };
}
