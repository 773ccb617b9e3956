//! Parsing of `#[deprecated_fn("message", key = "value", ...)]` arguments.

use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr, Token};

use sunset_diagnostic::Severity;

/// Arguments of one `#[deprecated_fn]` attribute.
pub struct DeprecationArgs {
    pub message: LitStr,
    pub severity: Severity,
    pub since: Option<LitStr>,
}

impl Parse for DeprecationArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error(
                "expected a deprecation message, e.g. #[deprecated_fn(\"use new_api() instead\")]",
            ));
        }

        let message: LitStr = input.parse()?;
        if message.value().trim().is_empty() {
            return Err(syn::Error::new(
                message.span(),
                "deprecation message must not be empty",
            ));
        }

        let mut severity: Option<Severity> = None;
        let mut since: Option<LitStr> = None;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            // Trailing comma
            if input.is_empty() {
                break;
            }

            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            if key == "severity" {
                if severity.is_some() {
                    return Err(duplicate(&key));
                }
                let parsed = value
                    .value()
                    .parse::<Severity>()
                    .map_err(|err| syn::Error::new(value.span(), err))?;
                severity = Some(parsed);
            } else if key == "since" {
                if since.is_some() {
                    return Err(duplicate(&key));
                }
                since = Some(value);
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    format!("unknown key `{key}`: expected `severity` or `since`"),
                ));
            }
        }

        Ok(DeprecationArgs {
            message,
            severity: severity.unwrap_or_default(),
            since,
        })
    }
}

fn duplicate(key: &Ident) -> syn::Error {
    syn::Error::new(key.span(), format!("`{key}` given more than once"))
}
