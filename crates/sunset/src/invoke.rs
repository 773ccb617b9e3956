//! Calling a target with its arguments packed in a tuple.
//!
//! Stable Rust cannot implement the `Fn*` traits for a wrapper type, so a
//! [`Deprecated`](crate::Deprecated) callable takes its arguments as one
//! tuple: `old_api.call((1, 2))`. Implemented for arities 0 through 8.

/// A shared-reference callable taking `Args` as a tuple.
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

/// A mutable callable taking `Args` as a tuple.
pub trait InvokeMut<Args> {
    type Output;

    fn invoke_mut(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Invoke<($($arg,)*)> for F
        where
            F: Fn($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> R {
                (*self)($($arg),*)
            }
        }

        impl<F, R, $($arg),*> InvokeMut<($($arg,)*)> for F
        where
            F: FnMut($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn invoke_mut(&mut self, ($($arg,)*): ($($arg,)*)) -> R {
                (*self)($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A);
impl_invoke!(A, B);
impl_invoke!(A, B, C);
impl_invoke!(A, B, C, D);
impl_invoke!(A, B, C, D, E);
impl_invoke!(A, B, C, D, E, G);
impl_invoke!(A, B, C, D, E, G, H);
impl_invoke!(A, B, C, D, E, G, H, I);
