pub mod collection_options;
pub mod naming;
pub mod provisioner;

pub use crate::domain::model::{CollectionEndpoint, FlatParameters, Settings};
pub use crate::domain::ports::{AdminApi, TenantAccount};
pub use crate::utils::error::Result;
