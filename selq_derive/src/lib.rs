use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod binary;

/// Generates `where_<variant>` and `or_where_<variant>` on `crate::Builder`
/// for every unit variant of an operator enum.
#[proc_macro_derive(BinaryOperator)]
pub fn operator_methods(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    binary::operator_methods_impl(&input).into()
}
