extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit};

/// Reads `#[status_code = "NOT_FOUND"]` or `#[status_code = 404]`.
fn find_status_code(attrs: &[Attribute]) -> syn::Result<Option<proc_macro2::TokenStream>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("status_code")) else {
        return Ok(None);
    };

    let meta = attr.meta.require_name_value()?;

    let Expr::Lit(expr) = &meta.value else {
        return Err(syn::Error::new(
            meta.value.span(),
            "expected a status code name or number",
        ));
    };

    match &expr.lit {
        Lit::Int(int) => {
            let code = int.base10_parse::<u16>()?;

            if !(100..=999).contains(&code) {
                return Err(syn::Error::new(int.span(), "status code out of range"));
            }

            Ok(Some(quote! {
                actix_web::http::StatusCode::from_u16(#code)
                    .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
            }))
        }
        Lit::Str(code) => {
            let value = code.value();

            if let Ok(ident) = syn::parse_str::<syn::Ident>(&value) {
                return Ok(Some(quote! { actix_web::http::StatusCode::#ident }));
            }

            match syn::parse_str::<syn::Path>(&value) {
                Ok(path) if path.segments.len() > 1 => Ok(Some(quote! { #path })),
                _ => Err(syn::Error::new(
                    code.span(),
                    format!("'{}' is not a status code name or path", value),
                )),
            }
        }
        other => Err(syn::Error::new(
            other.span(),
            "expected a status code name or number",
        )),
    }
}

fn impl_rem(ast: &syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &ast.ident;

    let syn::Data::Enum(data) = &ast.data else {
        return Err(syn::Error::new(ast.span(), "only enums are supported"));
    };

    let mut status_code_arms = Vec::with_capacity(data.variants.len() + 1);

    for variant in &data.variants {
        if let Some(status_code) = find_status_code(&variant.attrs)? {
            let variant_name = &variant.ident;

            status_code_arms.push(quote! { #name::#variant_name { .. } => #status_code, });
        }
    }

    if status_code_arms.len() < data.variants.len() {
        let status_code = find_status_code(&ast.attrs)?
            .unwrap_or_else(|| quote! { actix_web::http::StatusCode::INTERNAL_SERVER_ERROR });

        status_code_arms.push(quote! { _ => #status_code, });
    }

    Ok(quote! {
        impl actix_web::ResponseError for #name {
            fn status_code(&self) -> actix_web::http::StatusCode {
                match self {
                    #(#status_code_arms)*
                }
            }

            fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
                actix_web::HttpResponse::build(self.status_code())
                    .json(crate::utility::error::ResponseErrorMessage::new(self.clone()))
            }
        }
    })
}

/// Implements `actix_web::ResponseError` for an error enum.
///
/// Each variant may carry `#[status_code = ...]`; variants without one fall back
/// to the enum-level attribute, or `500 Internal Server Error` if there is none.
/// The enum must be `Clone + Display + Serialize`.
#[proc_macro_derive(ResponseErrorMessage, attributes(status_code))]
pub fn rem_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    impl_rem(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
