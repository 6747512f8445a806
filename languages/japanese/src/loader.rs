use std::path::Path;

use yomi_core::dictionary::LoadError;

use crate::glossary::Glossary;

pub struct GlossaryLoader;

impl GlossaryLoader {
    /// Load a glossary from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Glossary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading glossary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let glossary = Glossary::from_json(&json)?;
        tracing::info!("Loaded {} glossary entries", glossary.entry_count());
        Ok(glossary)
    }

    /// Load and merge glossaries in order, later files win.
    /// Unreadable files are skipped with a warning.
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Glossary {
        let mut glossary = Glossary::new();

        for path in paths {
            let path = path.as_ref();
            match Self::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging glossary from: {}", path.display());
                    glossary = glossary.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load glossary from {}: {}", path.display(), e);
                }
            }
        }

        glossary
    }
}
