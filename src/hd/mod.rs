//! Hydra scene-index emulation of legacy scene delegates.
//!
//! A scene-index layer holds one [`LegacyPrimDataSource`] per visible prim.
//! Consumers traverse it through the container protocol; the owning layer
//! routes change notifications to [`LegacyPrimDataSource::prim_dirtied`] as
//! [`DataSourceLocatorSet`] values.

mod data_source;
mod ext_computation;
mod legacy_prim;
mod locator;
mod scene_delegate;
mod tokens;

pub use data_source::*;
pub use ext_computation::*;
pub use legacy_prim::*;
pub use locator::*;
pub use scene_delegate::*;
pub use tokens::*;
