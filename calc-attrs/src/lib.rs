mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or a unit struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use calc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     category = Expression,
///     message = "unexpected end of input",
///     labels = ["add something here"],
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                       |
/// | ----------- | --------------------------------------------------------------------------------- |
/// | `category`  | One of `Token`, `Expression`, `FunctionCall`, `Argument`. Defaults to `Expression`. |
/// | `message`   | The single-line message of the error. Required.                                   |
/// | `labels`    | An array of label texts, one for each span the error points at.                   |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it.      |
///
/// Each tag except `category` accepts an expression. For structs with named fields, the
/// expression is evaluated with the members of the struct in scope (as references), so they can
/// be used in the expression. `self` is also available.
///
/// The generated implementation refers to the `calc_error` and `ariadne` crates, so both must be
/// dependencies of the crate deriving the trait.
///
/// [`ErrorKind`]: https://docs.rs/calc-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}
