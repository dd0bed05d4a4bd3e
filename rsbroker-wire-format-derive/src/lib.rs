use proc_macro2::TokenStream;
use proc_macro_error::{abort, abort_call_site, proc_macro_error};
use quote::quote;
use syn::{Data, Field, Ident};
use synstructure::{decl_derive, VariantInfo};

fn wire_format_write_derive(s: synstructure::Structure) -> TokenStream {
    let wire_size = s.fold(quote!(0), |acc, bi| {
        quote!(#acc + ::rsbroker_wire_format::WireFormatWrite::wire_size(#bi))
    });
    let write_into = s.each(|bi| {
        quote!( ::rsbroker_wire_format::WireFormatWrite::write_into(#bi, writer)?; )
    });

    s.gen_impl(quote! {
        gen impl ::rsbroker_wire_format::WireFormatWrite for @Self {
            fn wire_size(&self) -> usize {
                match *self { #wire_size }
            }

            fn write_into<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                match *self { #write_into }
                Ok(())
            }
        }
    })
}
decl_derive!([WireFormatWrite] => #[proc_macro_error] wire_format_write_derive);

/// Fields are parsed in declaration order, each with its own `WireFormatParse` impl.
fn wire_format_parse_derive(s: synstructure::Structure) -> TokenStream {
    match &s.ast().data {
        Data::Struct(_) => (),
        _ => abort_call_site!("WireFormatParse can only be derived for structs"),
    };
    let variant: &VariantInfo = &s.variants()[0];

    let parse = variant.bindings().iter().map(|bi| {
        let field = bi.ast();
        let name = field_name(field);
        let ty = &field.ty;
        quote! {
            let (input, #name) =
                <#ty as ::rsbroker_wire_format::WireFormatParse>::parse(input)?;
        }
    });

    let construct = variant.construct(|field, _| {
        let name = field_name(field);
        quote!( #name )
    });

    s.gen_impl(quote! {
        gen impl ::rsbroker_wire_format::WireFormatParse for @Self {
            fn parse(
                input: &[u8],
            ) -> ::rsbroker_wire_format::IResult<&[u8], Self, ::rsbroker_wire_format::error::ParseError> {
                #(#parse)*
                Ok((input, #construct))
            }
        }
    })
}
decl_derive!([WireFormatParse] => #[proc_macro_error] wire_format_parse_derive);

fn field_name(field: &Field) -> &Ident {
    match field.ident.as_ref() {
        Some(ident) => ident,
        None => abort!(field, "only structs with named fields are supported"),
    }
}
