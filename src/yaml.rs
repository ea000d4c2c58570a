//! Typed access to the fields of YAML documents.
//!
//! Documents are parsed with [`serde_yaml`] into a [`serde_yaml::Value`].
//! The functions in this module read a single field out of such a node,
//! falling back to a default when the field is missing or `null`. A field
//! which is present but has the wrong shape produces an [`Error`].
//!
//! Documents are written with an [`Emitter`], which has a method for each
//! type that can be read. Anything written by an [`Emitter`] reads back as
//! the same value.
//!
//! File sizes and durations are special. They are written as raw integers
//! by default, but can be read both from integers and from their human
//! readable forms like `2.50 MB` or `1h 30m`. See the [`quantity`] module.
//!
//! # Examples
//!
//! ```
//! use yamlfields::yaml;
//!
//! let mut out = yaml::Emitter::new();
//! out.string("name", "nightly");
//! out.duration("interval", 86_400);
//! out.string_list("paths", &["/home", "/etc"], false);
//!
//! let node: serde_yaml::Value = serde_yaml::from_str(out.as_str())?;
//!
//! assert_eq!(yaml::string_from(&node, "name", "")?, "nightly");
//! assert_eq!(yaml::duration_from(&node, "interval", 0)?, 86_400);
//! assert_eq!(yaml::string_list_from(&node, "paths", Vec::new())?, ["/home", "/etc"]);
//! assert_eq!(yaml::u64_from(&node, "retries", 3)?, 3);
//! # Ok::<_, anyhow::Error>(())
//! ```
//!
//! [`quantity`]: crate::quantity


mod error;
pub use self::error::{Error, ErrorKind};

mod read;
pub use self::read::{
    bool_from, date_from, date_time_from, duration_from, enum_from, file_size_from, i32_from,
    lenient_string_list_from, read, string_from, string_list_from, u64_from, FromYaml,
    StringList,
};

mod emitter;
pub use self::emitter::{Emitter, Options, QuantityStyle};

mod scalar;
