mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The report of the error is customized using the `error` attribute by adding the corresponding
/// tags to it:
/// ```
/// use cas_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of file", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                      |
/// | --------- | -------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.              |
/// | `labels`  | An array of label texts, one for each span of the error, in order.               |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.     |
/// | `note`    | Optional note with extra context, displayed after the help text.                 |
///
/// Each tag accepts an expression that should evaluate to something implementing
/// [`ToString`]. For structs with named fields, the expression is evaluated with the members of
/// the struct in scope, so they can be used in the expression.
///
/// The generated code refers to the `ariadne` and `cas_error` crates by name, so both must be
/// dependencies of the crate using the derive.
///
/// [`ErrorKind`]: https://docs.rs/cas-error/latest/cas_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl cas_error::ErrorKind for #name {
            #target
        }
    }.into()
}
