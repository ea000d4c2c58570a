//! Typed fields for YAML documents, with human friendly file sizes and
//! durations.
//!
//! This crate sits between the settings of an application and the YAML
//! documents they are stored in:
//!
//! * The [`yaml`] module reads typed fields out of a parsed document, using a
//!   default value when a field is missing, and writes the same types back
//!   through an [`Emitter`][yaml::Emitter].
//! * The [`quantity`] module formats and parses file sizes like `2.50 MB`
//!   and durations like `1h 30m`.
//! * The [`enums`] module stores enumerations by name, through a table
//!   generated by [`named_enum!`].
//!
//! <br>
//!
//! ## Reading and writing settings
//!
//! ```
//! use yamlfields::{named_enum, yaml};
//!
//! named_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     enum Compression {
//!         None = "none",
//!         Zstd = "zstd",
//!     }
//! }
//!
//! let node: serde_yaml::Value = serde_yaml::from_str(
//!     r#"
//!     name: photos
//!     compression: zstd
//!     max-size: 2.50 GB
//!     interval: 1h 30m
//!     exclude: "*.tmp, *.bak"
//!     "#,
//! )?;
//!
//! let name = yaml::string_from(&node, "name", "")?;
//! let compression = yaml::enum_from(&node, "compression", Compression::None)?;
//! let max_size = yaml::file_size_from(&node, "max-size", 0)?;
//! let interval = yaml::duration_from(&node, "interval", 0)?;
//! let exclude = yaml::lenient_string_list_from(&node, "exclude", Vec::new())?;
//! let verbose = yaml::bool_from(&node, "verbose", false)?;
//!
//! assert_eq!(name, "photos");
//! assert_eq!(compression, Compression::Zstd);
//! assert_eq!(max_size, 2_500_000_000);
//! assert_eq!(interval, 5400);
//! assert_eq!(exclude.items, ["*.tmp", "*.bak"]);
//! assert!(exclude.needs_save);
//! assert!(!verbose);
//!
//! let mut out = yaml::Emitter::new();
//! out.string("name", &name);
//! out.named("compression", compression);
//! out.file_size("max-size", max_size);
//! out.duration("interval", interval);
//! out.string_list("exclude", &exclude.items, true);
//!
//! assert_eq!(
//!     out.as_str(),
//!     "name: photos\ncompression: zstd\nmax-size: 2500000000\ninterval: 5400\nexclude: ['*.tmp', '*.bak']\n"
//! );
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! <br>
//!
//! ## Features
//!
//! * `yaml` (default) enables the [`yaml`] module.
//! * `serde` implements `Serialize` and `Deserialize` for
//!   [`quantity::Duration`] and [`quantity::FileSize`]. They serialize as
//!   integers and deserialize from either integers or strings.

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod enums;
pub mod quantity;

#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub mod yaml;
