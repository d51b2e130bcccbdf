/// Declare the terms of a vocabulary as `static` [`NsTerm`](crate::ns::NsTerm)s,
/// in the module where it is invoked.
///
/// Arguments: the conventional prefix label (with its colon), the namespace IRI,
/// then the local names of the terms. Local names that are not valid Rust identifiers
/// go after a `;`, as `identifier, "local name"` pairs.
///
/// The module also gets `LABEL` and `PREFIX` statics,
/// and a test per term checking that its IRI is valid,
/// so that terms can be built unchecked at runtime.
#[macro_export]
macro_rules! namespace {
    ($label:expr, $iri_prefix:expr, $($suffix:ident),*; $($r_id:ident, $r_sf:expr),*) => {
        /// Conventional prefix label of this namespace.
        pub static LABEL: &str = $label;
        /// Namespace IRI.
        pub static PREFIX: &str = $iri_prefix;
        $($crate::ns_iri!(LABEL, PREFIX, $suffix);)*
        $($crate::ns_iri!(LABEL, PREFIX, $r_id, $r_sf);)*

    };
    ($label:expr, $iri_prefix:expr, $($suffix:ident),*) => {
        namespace!($label, $iri_prefix, $($suffix),*;);
    };
}

/// Declare a single vocabulary term; used by [`namespace!`].
///
/// The resulting IRI is not checked.
#[macro_export]
macro_rules! ns_iri {
    ($label:expr, $prefix:expr, $ident:ident) => {
        $crate::ns_iri!($label, $prefix, $ident, stringify!($ident));
    };
    ($label:expr, $prefix:expr, $ident:ident, $suffix:expr) => {
        #[allow(non_upper_case_globals)]
        /// Vocabulary term.
        pub static $ident: $crate::ns::NsTerm =
            $crate::ns::NsTerm::new_unchecked($label, $prefix, $suffix);
    };
}
