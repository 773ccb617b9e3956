//! Procedural macros for `sunset`.
//!
//! Provides `#[deprecated_fn]`, which makes every call to a function emit
//! a deprecation notice before the original body runs.

use proc_macro::TokenStream;

mod args;
mod expand;

/// Deprecate a function.
///
/// ```text
/// #[deprecated_fn("use new_api() instead")]
/// #[deprecated_fn("gone in 2.0", severity = "pending-removal", since = "1.4")]
/// ```
///
/// The function keeps its name, signature, visibility and attributes. A
/// non-async function additionally becomes `#[track_caller]`, so the
/// notice points at the line that called it. Async functions emit when
/// their future is first polled and report the annotated function. So do
/// receiver-less functions named `main`, since a binary's entry point
/// cannot be `#[track_caller]`.
///
/// Expansion fails for items that are not functions with a body, for
/// `const fn` and `extern` functions, and for unknown severities.
#[proc_macro_attribute]
pub fn deprecated_fn(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand::deprecated_fn(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
