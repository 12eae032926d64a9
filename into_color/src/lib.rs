use proc_macro::TokenStream;
use syn::{parse_macro_input, LitStr};
use quote::quote;

/// Turns a `"#rrggbb"` or `"#rrggbbaa"` literal into an `[u8; 4]` RGBA array
/// at compile time. Alpha defaults to `0xff`.
#[proc_macro]
pub fn as_color(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);

    match parse_hex(&input.value()) {
        Ok([r, g, b, a]) => quote! { [#r, #g, #b, #a] }.into(),
        Err(msg) => syn::Error::new(input.span(), msg).to_compile_error().into(),
    }
}

fn parse_hex(color_str: &str) -> Result<[u8; 4], &'static str> {
    let digits = color_str
        .strip_prefix('#')
        .ok_or("Color string must start with '#'")?;
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err("Expected #rrggbb or #rrggbbaa");
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| "Unable to parse hex")
    };

    let a = if digits.len() == 8 { channel(6)? } else { u8::MAX };
    Ok([channel(0)?, channel(2)?, channel(4)?, a])
}
