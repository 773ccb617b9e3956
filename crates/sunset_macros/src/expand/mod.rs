//! Code generation for `#[deprecated_fn]`.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{AttrStyle, FnArg, Ident, ItemFn};

use crate::args::DeprecationArgs;

pub fn deprecated_fn(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let args: DeprecationArgs = syn::parse2(attr)?;
    let function = parse_target(item)?;

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = function;

    let message = &args.message;
    let severity = Ident::new(args.severity.variant_name(), Span::call_site());
    let since = match &args.since {
        Some(since) => quote! { ::core::option::Option::Some(#since) },
        None => quote! { ::core::option::Option::None },
    };

    // Inner attributes (`#![...]`) belong at the top of the body.
    let (inner, outer): (Vec<_>, Vec<_>) = attrs
        .into_iter()
        .partition(|a| matches!(a.style, AttrStyle::Inner(_)));

    // Async bodies run inside a future, where the caller is not tracked,
    // and an entry-point `main` may not be `#[track_caller]`.
    let already_tracked = outer.iter().any(|a| a.path().is_ident("track_caller"));
    let track_caller =
        if sig.asyncness.is_none() && !already_tracked && !may_be_entry_point(&sig) {
            quote! { #[track_caller] }
        } else {
            quote! {}
        };

    Ok(quote! {
        #(#outer)*
        #track_caller
        #vis #sig {
            #(#inner)*
            const __SUNSET_NOTICE: ::sunset::__private::NoticeTemplate =
                ::sunset::__private::NoticeTemplate::from_static(
                    #message,
                    ::sunset::__private::Severity::#severity,
                    #since,
                );
            ::sunset::__private::notify(&__SUNSET_NOTICE);
            #block
        }
    })
}

/// Whether `sig` could be a binary's `main`, which rejects `#[track_caller]`.
///
/// Methods taking `self` never are. Receiver-less associated functions
/// named `main` cannot be told apart and are treated like the entry point.
fn may_be_entry_point(sig: &syn::Signature) -> bool {
    sig.ident == "main" && !matches!(sig.inputs.first(), Some(FnArg::Receiver(_)))
}

/// Parse the annotated item, rejecting anything that cannot be wrapped.
fn parse_target(item: TokenStream2) -> syn::Result<ItemFn> {
    let function: ItemFn = syn::parse2(item.clone()).map_err(|_| {
        syn::Error::new_spanned(
            &item,
            "invalid target: #[deprecated_fn] can only be applied to functions with a body",
        )
    })?;

    let sig = &function.sig;
    if let Some(constness) = &sig.constness {
        return Err(syn::Error::new_spanned(
            constness,
            "invalid target: #[deprecated_fn] cannot be applied to `const fn`",
        ));
    }
    if let Some(abi) = &sig.abi {
        return Err(syn::Error::new_spanned(
            abi,
            "invalid target: #[deprecated_fn] cannot be applied to `extern` functions",
        ));
    }

    Ok(function)
}

#[cfg(test)]
mod tests;
