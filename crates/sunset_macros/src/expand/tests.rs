use super::*;
use pretty_assertions::assert_eq;

fn expand(attr: TokenStream2, item: TokenStream2) -> String {
    deprecated_fn(attr, item).unwrap().to_string()
}

fn expand_err(attr: TokenStream2, item: TokenStream2) -> String {
    deprecated_fn(attr, item).unwrap_err().to_string()
}

#[test]
fn plain_function_gains_track_caller_and_notice() {
    let out = expand(
        quote! { "use new_api() instead" },
        quote! { pub fn old_api(x: i32, y: i32) -> i32 { x + y } },
    );
    assert!(out.contains("# [track_caller]"), "{out}");
    assert!(out.contains("pub fn old_api (x : i32 , y : i32) -> i32"), "{out}");
    assert!(out.contains("\"use new_api() instead\""), "{out}");
    assert!(out.contains("Severity :: Deprecation"), "{out}");
    assert!(out.contains(":: core :: option :: Option :: None"), "{out}");
    assert!(out.contains(":: sunset :: __private :: notify"), "{out}");
}

#[test]
fn notice_is_emitted_before_the_body() {
    let out = expand(
        quote! { "old" },
        quote! { fn f() { body_marker(); } },
    );
    let notify = out.find("notify").unwrap();
    let body = out.find("body_marker").unwrap();
    assert!(notify < body);
}

#[test]
fn severity_and_since_are_forwarded() {
    let out = expand(
        quote! { "gone in 2.0", severity = "pending-removal", since = "1.4", },
        quote! { fn f() {} },
    );
    assert!(out.contains("Severity :: PendingRemoval"), "{out}");
    assert!(out.contains(":: core :: option :: Option :: Some (\"1.4\")"), "{out}");
}

#[test]
fn docs_and_attributes_are_kept() {
    let out = expand(
        quote! { "old" },
        quote! {
            /// Adds numbers.
            #[inline]
            pub(crate) fn f() {}
        },
    );
    assert!(out.contains("# [doc") && out.contains("Adds numbers."), "{out}");
    assert!(out.contains("# [inline]"), "{out}");
    assert!(out.contains("pub (crate) fn f ()"), "{out}");
}

#[test]
fn existing_track_caller_is_not_duplicated() {
    let out = expand(quote! { "old" }, quote! { #[track_caller] fn f() {} });
    assert_eq!(out.matches("track_caller").count(), 1);
}

#[test]
fn async_functions_are_not_tracked() {
    let out = expand(quote! { "old" }, quote! { async fn f() -> u8 { 1 } });
    assert!(!out.contains("track_caller"), "{out}");
    assert!(out.contains("async fn f () -> u8"), "{out}");
}

#[test]
fn methods_are_accepted() {
    let out = expand(quote! { "old" }, quote! { pub fn len(&self) -> usize { 0 } });
    assert!(out.contains("pub fn len (& self) -> usize"), "{out}");
}

#[test]
fn unknown_severity_is_rejected() {
    let err = expand_err(quote! { "old", severity = "user-warning" }, quote! { fn f() {} });
    assert!(err.starts_with("invalid severity `user-warning`"), "{err}");
}

#[test]
fn non_functions_are_invalid_targets() {
    let err = expand_err(quote! { "old" }, quote! { struct Old; });
    assert!(err.starts_with("invalid target"), "{err}");
}

#[test]
fn bodiless_trait_methods_are_invalid_targets() {
    let err = expand_err(quote! { "old" }, quote! { fn f(&self); });
    assert!(err.starts_with("invalid target"), "{err}");
}

#[test]
fn inner_attributes_stay_inside_the_body() {
    let out = expand(
        quote! { "old" },
        quote! { fn f() -> i32 { #![allow(unused)] let x = 1; x } },
    );
    assert!(out.starts_with("# [track_caller] fn f () -> i32 {"), "{out}");
    let inner = out.find("# ! [allow (unused)]").unwrap();
    let notice = out.find("const __SUNSET_NOTICE").unwrap();
    assert!(inner < notice, "{out}");
}

#[test]
fn inner_and_outer_attributes_are_split() {
    let out = expand(
        quote! { "old" },
        quote! {
            #[inline]
            fn f() { #![allow(clippy::let_and_return)] }
        },
    );
    let outer = out.find("# [inline]").unwrap();
    let body = out.find("fn f () {").unwrap();
    let inner = out.find("# ! [allow").unwrap();
    assert!(outer < body && body < inner, "{out}");
}

#[test]
fn entry_point_main_is_not_tracked() {
    let out = expand(quote! { "old" }, quote! { fn main() { run(); } });
    assert!(!out.contains("track_caller"), "{out}");
    assert!(out.contains(":: sunset :: __private :: notify"), "{out}");
}

#[test]
fn methods_named_main_are_tracked() {
    let out = expand(quote! { "old" }, quote! { fn main(&self) {} });
    assert!(out.contains("# [track_caller]"), "{out}");
}

#[test]
fn const_and_extern_are_rejected() {
    let constant = expand_err(quote! { "old" }, quote! { const fn f() {} });
    assert!(constant.contains("`const fn`"), "{constant}");
    let external = expand_err(quote! { "old" }, quote! { extern "C" fn f() {} });
    assert!(external.contains("`extern`"), "{external}");
}

#[test]
fn message_is_required() {
    let missing = expand_err(quote! {}, quote! { fn f() {} });
    assert!(missing.starts_with("expected a deprecation message"), "{missing}");
    let empty = expand_err(quote! { "  " }, quote! { fn f() {} });
    assert_eq!(empty, "deprecation message must not be empty");
}

#[test]
fn unknown_and_duplicate_keys_are_rejected() {
    let unknown = expand_err(quote! { "old", until = "3.0" }, quote! { fn f() {} });
    assert_eq!(unknown, "unknown key `until`: expected `severity` or `since`");
    let twice = expand_err(quote! { "old", since = "1", since = "2" }, quote! { fn f() {} });
    assert_eq!(twice, "`since` given more than once");
}
