use std::collections::BTreeMap;
use std::sync::Arc;

use crate::contract::ToolContract;
use crate::error::ConfigurationError;

/// Every registered tool contract, keyed by tool name.
///
/// Built once at startup and never mutated afterwards; share it behind an
/// `Arc` for concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    contracts: BTreeMap<String, Arc<ToolContract>>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, contract: ToolContract) -> Result<(), ConfigurationError> {
        if self.contracts.contains_key(contract.name()) {
            return Err(ConfigurationError::DuplicateTool(contract.name().to_string()));
        }
        self.contracts
            .insert(contract.name().to_string(), Arc::new(contract));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<ToolContract>> {
        self.contracts.get(name).cloned()
    }

    /// Registered tool names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
