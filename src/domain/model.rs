use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::ports::TenantAccount;
use crate::utils::error::{ProvisionError, Result};

/// A single setting value as the admin API will receive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// `0` and `false` are values, not blanks.
    pub fn is_blank(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::Text(s) => s.trim().is_empty(),
            ParamValue::List(items) => items.is_empty(),
            ParamValue::Bool(_) | ParamValue::Integer(_) | ParamValue::Float(_) => false,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => Ok(()),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::List(items) => {
                let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Top-level setting: either a scalar or a mapping exactly one level deep.
/// A mapping inside a nested mapping does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Nested(BTreeMap<String, ParamValue>),
    Scalar(ParamValue),
}

impl From<ParamValue> for SettingValue {
    fn from(value: ParamValue) -> Self {
        SettingValue::Scalar(value)
    }
}

/// Snake-cased collection settings attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, SettingValue>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.0.insert(key.into(), SettingValue::Scalar(value.into()));
        self
    }

    pub fn insert_nested<K, I, V>(&mut self, key: K, entries: I) -> &mut Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (String, V)>,
        V: Into<ParamValue>,
    {
        let nested = entries.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.0.insert(key.into(), SettingValue::Nested(nested));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flattened, camel-cased parameters. Keys never carry structure and
/// values are never blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatParameters(BTreeMap<String, ParamValue>);

impl FlatParameters {
    pub(crate) fn from_map(map: BTreeMap<String, ParamValue>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

/// URL-safe collection name. Built by [`crate::core::naming::parameterize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    pub(crate) fn new_unchecked(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEndpoint {
    pub collection: String,
    pub url: String,
}

/// In-memory account record, the smallest thing that satisfies [`TenantAccount`].
#[derive(Debug, Clone, Default)]
pub struct Account {
    pub tenant: String,
    pub solr_collection_options: Settings,
    solr_endpoint: Option<CollectionEndpoint>,
}

impl Account {
    pub fn new(tenant: impl Into<String>, solr_collection_options: Settings) -> Self {
        Self {
            tenant: tenant.into(),
            solr_collection_options,
            solr_endpoint: None,
        }
    }

    pub fn solr_endpoint(&self) -> Option<&CollectionEndpoint> {
        self.solr_endpoint.as_ref()
    }
}

impl TenantAccount for Account {
    fn tenant(&self) -> &str {
        &self.tenant
    }

    fn solr_collection_options(&self) -> &Settings {
        &self.solr_collection_options
    }

    fn create_solr_endpoint(&mut self, endpoint: CollectionEndpoint) -> Result<()> {
        if let Some(existing) = &self.solr_endpoint {
            return Err(ProvisionError::EndpointAlreadyAttached {
                collection: existing.collection.clone(),
            });
        }
        self.solr_endpoint = Some(endpoint);
        Ok(())
    }
}
