use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::DeriveInput;

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct BinaryDeriveInput {
    ident: syn::Ident,
    data: ast::Data<BinaryVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct BinaryVariant {
    ident: syn::Ident,
}

pub fn operator_methods_impl(input: &DeriveInput) -> TokenStream {
    let enum_info = match BinaryDeriveInput::from_derive_input(input) {
        Ok(v) => v,
        Err(e) => return e.write_errors(),
    };

    let enum_name = &enum_info.ident;

    let Some(variants) = enum_info.data.take_enum() else {
        return syn::Error::new_spanned(&input.ident, "BinaryOperator only supports enums")
            .to_compile_error();
    };

    let methods = variants.iter().map(|var| {
        let var_name = &var.ident;
        let snake = var_name.to_string().to_snake_case();
        let where_fn = format_ident!("where_{}", snake);
        let or_where_fn = format_ident!("or_where_{}", snake);
        let where_doc = format!("Appends a `{enum_name}::{var_name}` comparison joined with `AND`.");
        let or_where_doc = format!("Appends a `{enum_name}::{var_name}` comparison joined with `OR`.");

        quote! {
            #[doc = #where_doc]
            pub fn #where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoIdent,
                V: crate::IntoBind,
            {
                self.and_where(column, (#enum_name::#var_name, value))
            }

            #[doc = #or_where_doc]
            pub fn #or_where_fn<C, V>(&mut self, column: C, value: V) -> &mut Self
            where
                C: crate::IntoIdent,
                V: crate::IntoBind,
            {
                self.or().#where_fn(column, value)
            }
        }
    });

    quote! {
        impl crate::Builder {
            #(#methods)*
        }
    }
}
