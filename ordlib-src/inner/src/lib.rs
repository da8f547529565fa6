/// Re-exports each listed crate both as a module and as a glob, so
/// that a category crate shows its members inline in rustdoc.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident,)* ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
