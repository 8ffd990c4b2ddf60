//! Emulation of legacy [Hydra](https://openusd.org) scene delegates as
//! hierarchical scene-index data sources, in pure Rust.
//!
//! The central type is [`hd::LegacyPrimDataSource`], a prim-level container
//! data source that answers the scene-index container protocol
//! (`has` / `get_names` / `get`) by translating each request into imperative
//! queries against a legacy [`hd::SceneDelegate`].

pub mod gf;
pub mod hd;
pub mod sdf;
pub mod tf;
pub mod vt;

pub(crate) use tf::declare_public_tokens;
