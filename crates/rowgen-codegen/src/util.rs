use proc_macro2::TokenStream;
use rowgen_core::{Error, Result};

use std::str::FromStr;

pub(crate) fn int(v: usize) -> TokenStream {
    TokenStream::from_str(&v.to_string()).expect("failed to parse int")
}

/// Parses a Rust type or path written as text (engine accessor tables, the
/// document's custom mapper paths) into tokens.
pub(crate) fn ty(path: &str) -> Result<TokenStream> {
    TokenStream::from_str(path)
        .map_err(|_| Error::invalid_document(format!("`{path}` is not a valid Rust path")))
}
