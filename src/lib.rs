//! Declare a JSON shape once, check untyped values against it at run time.
//!
//! Descriptors are built with the functions in [`ty`] and validated with
//! [`validate()`]. Validation is fail-fast: the verdict is `Ok(())` or the
//! first [`Failure`], keyed by the dotted path of the offending field
//! (`user.address.zip`, `items.2`, or `""` for the root).
//!
//! ```
//! use json_shape::{ty, validate, Fields};
//! use serde_json::json;
//!
//! let user = ty::object(
//!     Fields::new().field("name", ty::string()).field("tags", ty::array(ty::string())),
//!     Fields::new().field("age", ty::number()),
//! );
//!
//! assert!(validate(user.as_descriptor(), &json!({"name": "ada", "tags": []})).is_ok());
//!
//! let failure = validate(user.as_descriptor(), &json!({"name": "ada", "tags": ["a", 1]})).unwrap_err();
//! assert_eq!(failure.to_report(), json!({"tags.1": "Expecting string but got number."}));
//! ```
//!
//! [`Schema`] ties a descriptor to the Rust type it describes, for callers
//! that want a typed view after validation.

pub mod checks;
pub mod descriptor;
pub mod error;
pub mod path_de;
pub mod schema;
pub mod ty;
pub mod validate;

pub use descriptor::{Check, Config, Descriptor, Fields, Kind, ObjectDescriptor, ObjectShape};
pub use error::Error;
pub use schema::{Conforms, Schema};
pub use validate::{validate, FieldPath, Failure, PathSegment};
