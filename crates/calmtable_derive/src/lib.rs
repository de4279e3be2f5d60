use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{FoundCrate, crate_name};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

#[proc_macro_derive(TableRecord, attributes(column))]
pub fn derive_table_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            input.ident,
            "TableRecord derive currently supports only non-generic structs",
        )
        .to_compile_error()
        .into();
    }

    let record_ident = input.ident;

    let named_fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return syn::Error::new(
                    Span::call_site(),
                    "TableRecord derive requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new(
                Span::call_site(),
                "TableRecord derive is only supported on structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let calmtable = calmtable_path();
    let mut column_defs = Vec::new();
    let mut inserts = Vec::new();

    for field in named_fields {
        let Some(field_ident) = field.ident else {
            continue;
        };
        let options = match ColumnOptions::parse(&field.attrs) {
            Ok(options) => options,
            Err(error) => return error.to_compile_error().into(),
        };
        if options.skip {
            continue;
        }

        let rust_name = field_ident.to_string();
        let key = options.field.unwrap_or_else(|| to_camel_case(&rust_name));
        let title = options.title.unwrap_or_else(|| to_title_case(&rust_name));

        column_defs.push(quote! {
            #calmtable::Column::new(#title, #key)
        });
        inserts.push(quote! {
            record.insert(
                #key,
                ::core::convert::Into::<#calmtable::CellValue>::into(
                    ::core::clone::Clone::clone(&self.#field_ident),
                ),
            );
        });
    }

    quote! {
        impl #calmtable::TableRecord for #record_ident {
            fn columns() -> ::std::vec::Vec<#calmtable::Column> {
                ::std::vec![#(#column_defs),*]
            }

            fn to_record(&self) -> #calmtable::Record {
                let mut record = #calmtable::Record::new();
                #(#inserts)*
                record
            }
        }
    }
    .into()
}

#[derive(Default)]
struct ColumnOptions {
    title: Option<String>,
    field: Option<String>,
    skip: bool,
}

impl ColumnOptions {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("column")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("title") {
                    options.title = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("field") {
                    options.field = Some(meta.value()?.parse::<LitStr>()?.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `title`, `field` or `skip`"))
                }
            })?;
        }
        Ok(options)
    }
}

fn calmtable_path() -> TokenStream2 {
    match crate_name("calmtable") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) => quote!(crate),
        Err(_) => quote!(::calmtable),
    }
}

fn to_camel_case(input: &str) -> String {
    let mut out = String::new();
    for segment in input.split('_').filter(|segment| !segment.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            if out.is_empty() {
                out.push(first.to_ascii_lowercase());
            } else {
                out.push(first.to_ascii_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

fn to_title_case(input: &str) -> String {
    input
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
