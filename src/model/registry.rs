use crate::constants::RESERVED_MODULES;

/// Import targets for the dispatch table, in the order their files were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_reserved(module: &str) -> bool {
        RESERVED_MODULES.contains(&module)
    }

    /// Appends `module` unless it is reserved or already present.
    /// Returns whether the registry changed.
    pub fn register(&mut self, module: &str) -> bool {
        if Self::is_reserved(module) || self.contains(module) {
            return false;
        }
        self.modules.push(module.to_string());
        true
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.modules
    }
}
