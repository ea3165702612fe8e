// Druidic Script Registry
// Resolves script selectors and owns the process-wide engine instances

use crate::engine::{FutharkEngine, TengwarEngine, Transliterator};
use crate::{LegendEntry, Script, ScriptMetadata, TransliterationRequest, TransliterationResult};

static FUTHARK: FutharkEngine = FutharkEngine::new();
static TENGWAR: TengwarEngine = TengwarEngine::new();

/// Parse a script selector, falling back to the default script when it
/// matches nothing. Never fails.
pub fn resolve(selector: &str) -> Script {
    match selector.trim().parse::<Script>() {
        Ok(script) => script,
        Err(_) => {
            log::debug!(
                "unrecognized script selector {:?}, using {}",
                selector,
                Script::default()
            );
            Script::default()
        }
    }
}

/// [`resolve`] for a selector that may be missing
pub fn resolve_opt(selector: Option<&str>) -> Script {
    selector.map(resolve).unwrap_or_default()
}

/// The engine that writes `script`
pub fn engine_for(script: Script) -> &'static dyn Transliterator {
    match script {
        Script::ElderFuthark => &FUTHARK,
        Script::Tengwar => &TENGWAR,
    }
}

pub fn legend_for(script: Script) -> &'static [LegendEntry] {
    engine_for(script).legend()
}

pub fn metadata_for(script: Script) -> &'static ScriptMetadata {
    script.metadata()
}

/// Run a request through the engine for its script
pub fn transliterate(request: &TransliterationRequest) -> TransliterationResult {
    engine_for(request.script()).transliterate(request)
}

/// Every registered script, in declaration order
pub fn scripts() -> impl Iterator<Item = Script> {
    Script::all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        assert_eq!(resolve("ELDER_FUTHARK"), Script::ElderFuthark);
        assert_eq!(resolve("TENGWAR"), Script::Tengwar);
        assert_eq!(resolve("  tengwar\n"), Script::Tengwar);
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(resolve("INVALID"), Script::ElderFuthark);
        assert_eq!(resolve(""), Script::ElderFuthark);
        assert_eq!(resolve_opt(None), Script::ElderFuthark);
        assert_eq!(resolve_opt(Some("TENGWAR")), Script::Tengwar);
    }

    #[test]
    fn test_engine_for_matches_script() {
        for script in scripts() {
            assert_eq!(engine_for(script).script(), script);
        }
    }

    #[test]
    fn test_metadata_for_is_script_metadata() {
        for script in scripts() {
            assert_eq!(metadata_for(script), script.metadata());
        }
    }
}
