//! Derive macros for aoc-solver day modules
//!
//! - `AocSolver` writes the `Solver` impl that dispatches a part number to the matching
//!   `PartSolver<N>` impl.
//! - `AutoRegisterSolver` submits the type to the plugin inventory so the runner finds it
//!   without any hand-maintained list of days.

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, Fields, LitInt, LitStr, Token, parse_macro_input};

/// Derive `aoc_solver::Solver` from `PartSolver<1>..=PartSolver<max_parts>` impls
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: optional, defaults to 2
///
/// Part numbers outside `1..=max_parts` produce `SolveError::PartNotImplemented`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Day25;
///
/// impl AocParser for Day25 { /* ... */ }
/// impl PartSolver<1> for Day25 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut max_parts: u8 = 2;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("aoc_solver")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let lit: LitInt = meta.value()?.parse()?;
                max_parts = lit.base10_parse()?;
                if max_parts == 0 {
                    return Err(syn::Error::new_spanned(lit, "max_parts must be at least 1"));
                }
                Ok(())
            } else {
                Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
            }
        })?;
    }

    let parts: Vec<Literal> = (1..=max_parts).map(Literal::u8_suffixed).collect();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #( #parts => <Self as ::aoc_solver::PartSolver<#parts>>::solve(shared), )*
                    _ => ::core::result::Result::Err(
                        ::aoc_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Derive macro for registering a day module with the plugin inventory
///
/// # Attributes
///
/// - `year`: required, 2015 or later
/// - `day`: required, 1-25
/// - `title`: optional puzzle title, defaults to the type name
/// - `tags`: optional array of string literals used for filtering
///
/// The type must be a unit struct implementing `Solver`; anything else fails to compile
/// with an error pointing at the type.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc(year = 2015, day = 1, title = "Not Quite Lisp", tags = ["easy"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    match &input.data {
        syn::Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AutoRegisterSolver can only be derived for unit structs",
            ));
        }
    }

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires an #[aoc(...)] attribute")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<(u8, LitInt)> = None;
    let mut title: Option<LitStr> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u16 = lit.base10_parse()?;
            if value < 2015 {
                return Err(syn::Error::new_spanned(lit, "Advent of Code started in 2015"));
            }
            year = Some(value);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            day = Some((lit.base10_parse()?, lit));
        } else if meta.path.is_ident("title") {
            title = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("tags") {
            let value = meta.value()?;
            let content;
            syn::bracketed!(content in value);
            tags.extend(Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?);
        } else {
            return Err(meta.error("unsupported aoc attribute, expected year, day, title or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let (day, day_lit) = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;
    check_calendar(year, day).map_err(|msg| syn::Error::new_spanned(day_lit, msg))?;
    let title = title.unwrap_or_else(|| LitStr::new(&name.to_string(), Span::call_site()));

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                title: #title,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

/// Days run 1..=25 up to 2024 and 1..=12 from 2025 on
fn check_calendar(year: u16, day: u8) -> Result<(), String> {
    let last = if year < 2025 { 25 } else { 12 };
    if (1..=last).contains(&day) {
        Ok(())
    } else {
        Err(format!("day must be between 1 and {} for {}", last, year))
    }
}
