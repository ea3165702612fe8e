// Druidic Core Library
// Latin text to Elder Futhark runes and Tengwar glyphs

pub mod engine;
pub mod legend;
pub mod registry;
pub mod request;
pub mod script;

#[cfg(feature = "settings")]
pub mod settings;

pub use engine::{FutharkEngine, TengwarEngine, Transliterator, WordSeparator};
pub use legend::LegendEntry;
pub use registry::{engine_for, legend_for, metadata_for, resolve, transliterate};
pub use request::{TransliterationRequest, TransliterationResult};
pub use script::{Script, ScriptMetadata};

#[cfg(feature = "settings")]
pub use settings::{Settings, SettingsError};
