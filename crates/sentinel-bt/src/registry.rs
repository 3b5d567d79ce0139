use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use sentinel_core::{Action, Condition};
use sentinel_nav::{MoveAction, MoveParams};

use crate::actions::{ListenAction, LookAction, ScanAction};
use crate::conditions::{HeardNoiseWithin, PlayerVisible};
use crate::ParamError;

/// Builds one leaf from its JSON parameter block (an object, possibly empty).
pub type Factory<T> = Box<dyn Fn(&Value) -> Result<Box<T>, ParamError>>;

/// Name-keyed leaf factories.
///
/// Consulted only while a tree is being loaded. Registering an existing name
/// replaces the previous factory.
pub struct Registry<T: ?Sized> {
    factories: BTreeMap<String, Factory<T>>,
}

pub type ActionRegistry = Registry<dyn Action>;
pub type ConditionRegistry = Registry<dyn Condition>;

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }
}

impl<T: ?Sized> core::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Box<T>, ParamError> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// `None` if `name` is not registered.
    pub fn create(&self, name: &str, params: &Value) -> Option<Result<Box<T>, ParamError>> {
        self.factories.get(name).map(|factory| factory(params))
    }
}

/// Deserialize a parameter block into its typed form.
pub fn parse_params<P: DeserializeOwned>(params: &Value) -> Result<P, ParamError> {
    Ok(<P as Deserialize>::deserialize(params)?)
}

impl ActionRegistry {
    /// `listen`, `look`, `scan`, `move`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("listen", |p| {
                Ok(Box::new(ListenAction::from_params(parse_params(p)?)) as Box<dyn Action>)
            })
            .register("look", |p| {
                Ok(Box::new(LookAction::from_params(parse_params(p)?)?) as Box<dyn Action>)
            })
            .register("scan", |p| {
                Ok(Box::new(ScanAction::new(parse_params(p)?)) as Box<dyn Action>)
            })
            .register("move", |p| {
                let params: MoveParams = parse_params(p)?;
                Ok(Box::new(MoveAction::from_params(params)) as Box<dyn Action>)
            });
        registry
    }
}

impl ConditionRegistry {
    /// `playerVisible`, `heardNoiseWithin`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("playerVisible", |p| {
                Ok(Box::new(PlayerVisible::from_params(parse_params(p)?)) as Box<dyn Condition>)
            })
            .register("heardNoiseWithin", |p| {
                Ok(Box::new(HeardNoiseWithin::from_params(parse_params(p)?)) as Box<dyn Condition>)
            });
        registry
    }
}

/// The pair of registries a loader needs.
#[derive(Debug, Default)]
pub struct Registries {
    pub actions: ActionRegistry,
    pub conditions: ConditionRegistry,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        Self {
            actions: ActionRegistry::with_builtins(),
            conditions: ConditionRegistry::with_builtins(),
        }
    }
}
