use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl,
    Pat, ReturnType, Type, Visibility,
};

/// Generates a consuming `with_*` twin for every public setter in the impl
/// block, for builder-style construction.
///
/// A setter is a `pub fn` taking `&mut self` and returning either nothing or
/// `&mut Self`. A `set_` or `add_` name prefix is replaced with `with_`;
/// other names get `with_` prepended.
#[proc_macro_attribute]
pub fn impl_with(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemImpl);
    let with_fns: Vec<_> = input
        .items
        .iter()
        .filter_map(|item| {
            if let ImplItem::Fn(item) = item {
                make_with_fn(item)
            } else {
                None
            }
        })
        .collect();
    input.items.extend(with_fns);
    quote! { #input }.into()
}

fn make_with_fn(setter: &ImplItemFn) -> Option<ImplItem> {
    if !matches!(setter.vis, Visibility::Public(_)) {
        return None;
    }
    if !takes_ref_mut_self(setter) || !returns_unit_or_mut_self(&setter.sig.output) {
        return None;
    }
    let mut with_fn = setter.clone();
    with_fn.sig.ident = Ident::new(
        &with_name(&setter.sig.ident.to_string()),
        setter.sig.ident.span(),
    );
    let mut inputs = Vec::new();
    let mut arg_names = Vec::new();
    for (index, arg) in setter.sig.inputs.iter().enumerate() {
        match arg {
            FnArg::Receiver(_) => {
                inputs.push(quote! { mut self });
            }
            FnArg::Typed(arg) => {
                let ty = &arg.ty;
                let name = if let Pat::Ident(pat) = &*arg.pat {
                    pat.ident.clone()
                } else {
                    Ident::new(&format!("arg{index}"), arg.span())
                };
                inputs.push(quote! { #name: #ty });
                arg_names.push(name);
            }
        }
    }
    let setter_name = &setter.sig.ident;
    with_fn.sig.inputs = parse_quote! { #(#inputs),* };
    with_fn.sig.output = parse_quote! { -> Self };
    with_fn.block = parse_quote! { {
        self.#setter_name(#(#arg_names,)*);
        self
    } };
    Some(ImplItem::Fn(with_fn))
}

fn with_name(setter_name: &str) -> String {
    let stripped = setter_name
        .strip_prefix("set_")
        .or_else(|| setter_name.strip_prefix("add_"))
        .unwrap_or(setter_name);
    format!("with_{stripped}")
}

fn takes_ref_mut_self(setter: &ImplItemFn) -> bool {
    let Some(FnArg::Receiver(receiver)) = setter.sig.inputs.iter().next() else {
        return false;
    };
    receiver.reference.is_some() && receiver.mutability.is_some()
}

fn returns_unit_or_mut_self(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return true;
    };
    let Type::Reference(reference) = &**ty else {
        return false;
    };
    reference.mutability.is_some()
        && matches!(&*reference.elem, Type::Path(path) if path.path.is_ident("Self"))
}
