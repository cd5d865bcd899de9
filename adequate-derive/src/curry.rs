//! Expansion of `curry!`.
//!
//! Accepted forms:
//!
//! 1. `curry!(|a: A, b: B, c: C| body)`: the arity is the parameter count
//! 2. `curry!(function, 3)`: any expression followed by an integer arity
//! 3. `curry!(|a, b| body, 2)`: a closure with an explicit, matching arity
//!
//! The expansion stores the function in an `Rc` and returns one `move`
//! closure per parameter. Each level moves its argument into an `Rc` so the
//! returned closures are `Fn` and every partial application can be called
//! again; the arguments are cloned out when the last one arrives.
//!
//! ```text
//! curry!(add3, 3)
//!
//! {
//!     let __adequate_function = Rc::new(add3);
//!     move |__adequate_argument_0| {
//!         let __adequate_function = Rc::clone(&__adequate_function);
//!         let __adequate_argument_0 = Rc::new(__adequate_argument_0);
//!         move |__adequate_argument_1| {
//!             let __adequate_function = Rc::clone(&__adequate_function);
//!             let __adequate_argument_0 = Rc::clone(&__adequate_argument_0);
//!             let __adequate_argument_1 = Rc::new(__adequate_argument_1);
//!             move |__adequate_argument_2| {
//!                 __adequate_function(
//!                     Rc::unwrap_or_clone(Rc::clone(&__adequate_argument_0)),
//!                     Rc::unwrap_or_clone(Rc::clone(&__adequate_argument_1)),
//!                     __adequate_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{Expr, LitInt, Token};

const MINIMUM_ARITY: usize = 2;

/// The parsed arguments of `curry!`.
pub struct CurryInput {
    function: Expr,
    arity: usize,
}

impl Parse for CurryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let function: Expr = input.parse()?;

        let explicit_arity = if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            let literal: LitInt = input.parse()?;
            input.parse::<Option<Token![,]>>()?;
            Some((literal.base10_parse::<usize>()?, literal))
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("curry! takes a closure, or a function and its arity"));
        }

        let arity = match (&function, explicit_arity) {
            (Expr::Closure(closure), Some((arity, literal))) if closure.inputs.len() != arity => {
                return Err(syn::Error::new(
                    literal.span(),
                    format!(
                        "curry! arity {arity} does not match the closure's {} parameters",
                        closure.inputs.len()
                    ),
                ));
            }
            (_, Some((arity, _))) => arity,
            (Expr::Closure(closure), None) => closure.inputs.len(),
            (other, None) => {
                return Err(syn::Error::new_spanned(
                    other,
                    "curry! needs the arity of a non-closure function: curry!(function, 2)",
                ));
            }
        };

        if arity < MINIMUM_ARITY {
            return Err(syn::Error::new_spanned(
                &function,
                "curry! requires a function with at least 2 parameters",
            ));
        }

        Ok(Self { function, arity })
    }
}

/// Generates the nested closures for `input`.
pub fn expand(input: &CurryInput) -> TokenStream {
    let arguments: Vec<Ident> = (0..input.arity)
        .map(|index| format_ident!("__adequate_argument_{}", index))
        .collect();
    let function = &input.function;

    let body = arguments
        .iter()
        .enumerate()
        .rev()
        .fold(call_with_all(&arguments), |inner, (index, argument)| {
            if index + 1 == arguments.len() {
                return quote! { move |#argument| { #inner } };
            }
            let earlier = &arguments[..index];
            quote! {
                move |#argument| {
                    let __adequate_function = ::std::rc::Rc::clone(&__adequate_function);
                    #( let #earlier = ::std::rc::Rc::clone(&#earlier); )*
                    let #argument = ::std::rc::Rc::new(#argument);
                    #inner
                }
            }
        });

    quote! {
        {
            let __adequate_function = ::std::rc::Rc::new(#function);
            #body
        }
    }
}

/// The innermost call: every captured argument cloned out, the last passed as is.
fn call_with_all(arguments: &[Ident]) -> TokenStream {
    let (last, captured) = match arguments.split_last() {
        Some(split) => split,
        None => return quote! { __adequate_function() },
    };
    quote! {
        __adequate_function(
            #( ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#captured)), )*
            #last
        )
    }
}
