#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Procedural macros for the relex lexing toolkit.
//!
//! - [`declare_kinds!`]: Generates a token-kind enum with its literal table
//!
//! # Quick Start
//!
//! ```ignore
//! relex::declare_kinds! {
//!     name: CalcKind,
//!     kinds: {
//!         Number,
//!         Plus,
//!     },
//! }
//! ```
use proc_macro::TokenStream;
use syn::parse_macro_input;

mod declare_kinds;

/// Generates a token-kind enum usable as `Rules::Kind`.
///
/// # Syntax
///
/// ```ignore
/// declare_kinds! {
///     // Optional: outer attributes (docs, cfgs) for the enum
///     /// Kinds produced by the calculator scanner.
///
///     // Required: the enum name
///     name: CalcKind,
///
///     // Optional: derives added to the defaults
///     // (Debug, Clone, Copy, PartialEq, Eq, Hash)
///     derives: [PartialOrd, Ord],
///
///     // Required: unit variants, optionally with discriminants
///     kinds: {
///         // Registered literal name (defaults to the variant name)
///         #[literal("T_NUMBER")]
///         Number = 1,
///
///         // Display text (defaults to lowercase words: "l paren")
///         #[fmt("`(`")]
///         LParen,
///     },
/// }
/// ```
///
/// # Generated Code
///
/// - The enum, with the default derives plus `derives`
/// - `ALL`: every kind in declaration order
/// - `literal()` / `describe()`: the symbolic name and display text
/// - `Display`, using `describe()`
/// - `relex::Kind`, registering every `literal()` so that
///   `Scanner::literal` resolves names without extra setup
#[proc_macro]
pub fn declare_kinds(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as declare_kinds::DeclareKindsInput);
    declare_kinds::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
