use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Attribute, Expr, Ident, LitStr, Path, Token, braced, bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Convert PascalCase to lowercase words, e.g. `LParen` to `l paren`.
fn to_words(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push(' ');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

pub struct DeclareKindsInput {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
    pub derives: Vec<Path>,
    pub kinds: Vec<KindDef>,
}

pub struct KindDef {
    pub attrs: Vec<Attribute>,
    pub literal: Option<LitStr>,
    pub fmt_str: Option<LitStr>,
    pub name: Ident,
    pub discriminant: Option<Expr>,
}

impl Parse for DeclareKindsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = Vec::new();
        let mut name: Option<Ident> = None;
        let mut derives = Vec::new();
        let mut kinds = Vec::new();

        while !input.is_empty() {
            if input.peek(Token![#]) {
                let attr = input.call(Attribute::parse_outer)?;
                attrs.extend(attr);
                continue;
            }

            let ident: Ident = input.parse()?;
            input.parse::<Token![:]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "derives" => {
                    let content;
                    bracketed!(content in input);
                    derives = Punctuated::<Path, Token![,]>::parse_terminated(&content)?
                        .into_iter()
                        .collect();
                }
                "kinds" => {
                    let content;
                    braced!(content in input);
                    while !content.is_empty() {
                        kinds.push(content.parse()?);
                        if content.peek(Token![,]) {
                            content.parse::<Token![,]>()?;
                        }
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown field: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name = name.ok_or_else(|| syn::Error::new(input.span(), "missing `name` field"))?;
        if kinds.is_empty() {
            return Err(syn::Error::new(name.span(), "`kinds` must declare at least one kind"));
        }

        Ok(Self {
            attrs,
            name,
            derives,
            kinds,
        })
    }
}

impl Parse for KindDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = Vec::new();
        let mut literal = None;
        let mut fmt_str = None;

        while input.peek(Token![#]) {
            let attr_list = input.call(Attribute::parse_outer)?;
            for attr in attr_list {
                if attr.path().is_ident("literal") {
                    literal = Some(attr.parse_args()?);
                } else if attr.path().is_ident("fmt") {
                    fmt_str = Some(attr.parse_args()?);
                } else {
                    attrs.push(attr);
                }
            }
        }

        let name: Ident = input.parse()?;

        let discriminant = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        Ok(Self {
            attrs,
            literal,
            fmt_str,
            name,
            discriminant,
        })
    }
}

pub fn expand(input: DeclareKindsInput) -> syn::Result<TokenStream> {
    let DeclareKindsInput {
        attrs,
        name,
        derives,
        kinds,
    } = input;

    let extra_derives = if derives.is_empty() {
        quote! {}
    } else {
        quote! { , #(#derives),* }
    };

    let variants: Vec<_> = kinds
        .iter()
        .map(|k| {
            let KindDef {
                attrs,
                name,
                discriminant,
                ..
            } = k;
            match discriminant {
                Some(expr) => quote! {
                    #(#attrs)*
                    #name = #expr
                },
                None => quote! {
                    #(#attrs)*
                    #name
                },
            }
        })
        .collect();

    let literal_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = &k.name;
            let literal = k
                .literal
                .as_ref()
                .map(LitStr::value)
                .unwrap_or_else(|| variant.to_string());
            quote! { #name::#variant => #literal }
        })
        .collect();

    let describe_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = &k.name;
            let text = k
                .fmt_str
                .as_ref()
                .map(LitStr::value)
                .unwrap_or_else(|| to_words(&variant.to_string()));
            quote! { #name::#variant => #text }
        })
        .collect();

    let all: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = &k.name;
            quote! { #name::#variant }
        })
        .collect();

    let output = quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash #extra_derives)]
        #(#attrs)*
        pub enum #name {
            #(#variants),*
        }

        impl #name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [#name] = &[#(#all),*];

            /// Symbolic name registered for this kind.
            pub const fn literal(&self) -> &'static str {
                match self {
                    #(#literal_arms),*
                }
            }

            /// Human-readable description used by `Display`.
            pub const fn describe(&self) -> &'static str {
                match self {
                    #(#describe_arms),*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.describe())
            }
        }

        impl ::relex::Kind for #name {
            fn literals() -> ::relex::LiteralTable<Self> {
                Self::ALL
                    .iter()
                    .map(|kind| (*kind, kind.literal()))
                    .collect()
            }
        }
    };

    Ok(output)
}
