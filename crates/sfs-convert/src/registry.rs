use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::converter::{
    BoolConverter, FloatConverter, IntConverter, StringConverter, ValueConverter,
};
use crate::error::{ConvertError, ConvertResult};

/// Registered strategies, keyed by the type they produce.
///
/// Each slot holds an `Arc<dyn ValueConverter<T>>` erased behind `Any`, so a
/// lookup by `TypeId::of::<T>()` always downcasts to the right strategy.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, (&'static str, Box<dyn Any + Send + Sync>)>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in strategy registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register::<i8>(IntConverter)
            .register::<i16>(IntConverter)
            .register::<i32>(IntConverter)
            .register::<i64>(IntConverter)
            .register::<i128>(IntConverter)
            .register::<isize>(IntConverter)
            .register::<f32>(FloatConverter)
            .register::<f64>(FloatConverter)
            .register::<bool>(BoolConverter)
            .register::<String>(StringConverter);
        registry
    }

    /// Register (or replace) the strategy producing `T`.
    pub fn register<T: 'static>(
        &mut self,
        converter: impl ValueConverter<T> + 'static,
    ) -> &mut Self {
        let converter: Arc<dyn ValueConverter<T>> = Arc::new(converter);
        self.converters
            .insert(TypeId::of::<T>(), (type_name::<T>(), Box::new(converter)));
        self
    }

    /// Whether a strategy producing `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// The strategy producing `T`.
    pub fn get<T: 'static>(&self) -> ConvertResult<Arc<dyn ValueConverter<T>>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|(_, slot)| slot.downcast_ref::<Arc<dyn ValueConverter<T>>>())
            .cloned()
            .ok_or(ConvertError::NoConverterRegistered {
                type_name: type_name::<T>(),
            })
    }

    /// Parse `raw` with the strategy registered for `T`.
    pub fn parse<T: 'static>(&self, raw: &str) -> ConvertResult<T> {
        let converter = self.get::<T>()?;
        let value = converter.parse(raw);
        if value.is_err() {
            debug!(raw, target = type_name::<T>(), "conversion failed");
        }
        value
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&str> = self.converters.values().map(|(name, _)| *name).collect();
        types.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("types", &types)
            .finish()
    }
}
