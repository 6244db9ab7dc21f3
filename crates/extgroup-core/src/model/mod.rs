/// Data model for scan results.
///
/// A scan produces one [`FileRecord`] per kept file, bucketed by extension
/// key inside an [`ExtensionMap`].
pub mod extension_map;
pub mod file_record;
pub mod size;

pub use extension_map::ExtensionMap;
pub use file_record::{extension_key, extension_key_os, FileRecord, DATE_DISPLAY_FORMAT};
