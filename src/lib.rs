//! MySQL query analysis: syntax and schema diagnostics, hover and completion
//! lookups for SQL embedded in host-language source.
reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(sql);
reexport!(logic);
reexport!(oracle);
reexport!(metadata);
reexport!(diagnostic);
reexport!(autocomplete);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
