use std::collections::HashMap;

use crate::capability::VARIABLE_BLUR_TYPE;
use crate::capability::filter::{FilterBuilder, FilterKernel};
use crate::foundation::error::{BlurError, BlurResult};

pub type FilterCtor = fn() -> FilterBuilder;

/// Name-indexed table of filter constructors.
#[derive(Clone, Default)]
pub struct FilterRegistry {
    ctors: HashMap<&'static str, FilterCtor>,
}

impl FilterRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_builtin_filters() -> Self {
        let mut reg = Self::empty();
        reg.register(VARIABLE_BLUR_TYPE, || {
            FilterBuilder::new(VARIABLE_BLUR_TYPE, FilterKernel::CpuVariableBlur)
        });
        reg
    }

    pub fn register(&mut self, type_name: &'static str, ctor: FilterCtor) {
        self.ctors.insert(type_name, ctor);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.ctors.contains_key(type_name)
    }

    pub fn filter_with_type(&self, type_name: &str) -> BlurResult<FilterBuilder> {
        let ctor = self.ctors.get(type_name).ok_or_else(|| {
            BlurError::capability_unavailable(format!(
                "no filter registered for type '{type_name}'"
            ))
        })?;
        let builder = ctor();
        if builder.type_name() != type_name {
            return Err(BlurError::capability_unavailable(format!(
                "filter type '{type_name}' rejected: constructor produced '{}'",
                builder.type_name()
            )));
        }
        Ok(builder)
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.ctors.keys().collect();
        names.sort();
        f.debug_struct("FilterRegistry").field("types", &names).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capability/registry.rs"]
mod tests;
