//! Typed façade: a descriptor paired with the Rust type it describes.
//!
//! `T` exists only at compile time. Values stay `serde_json::Value` until a
//! caller asks for a typed view, which always goes through validation first
//! unless the caller explicitly opts out with [`Schema::assume_conforms`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::Descriptor;
use crate::error::Error;
use crate::path_de;
use crate::validate::{self, Failure};

// ------------------------------- Schema ---------------------------------- //

pub struct Schema<T = Value> {
    descriptor: Descriptor,
    shape: PhantomData<fn() -> T>,
}

impl<T> Schema<T> {
    pub fn new(descriptor: impl Into<Descriptor>) -> Self {
        Self { descriptor: descriptor.into(), shape: PhantomData }
    }

    pub fn descriptor(&self) -> &Descriptor { &self.descriptor }

    pub fn validate(&self, value: &Value) -> Result<(), Failure> {
        validate::validate(&self.descriptor, value)
    }

    /// Validate a batch in parallel. Results line up with `values`.
    pub fn validate_all(&self, values: &[Value]) -> Vec<Result<(), Failure>> {
        values.par_iter().map(|v| self.validate(v)).collect()
    }

    /// Validate and keep the value, tagged as conforming to `T`.
    pub fn check(&self, value: Value) -> Result<Conforms<T>, Failure> {
        self.validate(&value)?;
        Ok(Conforms::new(value))
    }

    /// Tag `value` as conforming to `T` WITHOUT validating it. Only for
    /// values the caller already trusts (e.g. produced by its own code).
    pub fn assume_conforms(&self, value: Value) -> Conforms<T> {
        Conforms::new(value)
    }
}

impl<T: DeserializeOwned> Schema<T> {
    /// Validate, then deserialize into `T`.
    pub fn parse(&self, value: Value) -> Result<T, Error> {
        self.check(value)?.deserialize()
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self { descriptor: self.descriptor.clone(), shape: PhantomData }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("descriptor", &self.descriptor)
            .field("shape", &std::any::type_name::<T>())
            .finish()
    }
}

// ------------------------------ Conforms --------------------------------- //

/// A JSON value vouched for as matching `T`'s descriptor.
pub struct Conforms<T> {
    value: Value,
    shape: PhantomData<fn() -> T>,
}

impl<T> Conforms<T> {
    fn new(value: Value) -> Self {
        Self { value, shape: PhantomData }
    }

    pub fn as_value(&self) -> &Value { &self.value }

    pub fn into_inner(self) -> Value { self.value }
}

impl<T: DeserializeOwned> Conforms<T> {
    pub fn deserialize(self) -> Result<T, Error> {
        path_de::from_value_with_path(self.value)
    }
}

impl<T> Deref for Conforms<T> {
    type Target = Value;
    fn deref(&self) -> &Value { &self.value }
}

impl<T> Clone for Conforms<T> {
    fn clone(&self) -> Self { Self::new(self.value.clone()) }
}

impl<T> fmt::Debug for Conforms<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Conforms").field(&self.value).finish()
    }
}

// ------------------------------- Tests ------------------------------------ //
