/// Analysis modules: post-scan summaries over an [`ExtensionMap`].
///
/// [`ExtensionMap`]: crate::model::ExtensionMap
pub mod extensions;

pub use extensions::{extension_stats, ExtensionStats};
