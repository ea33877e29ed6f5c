#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when the value of an [absent](crate::option::Option::Absent) option is accessed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
#[error("attempted to get the value of an absent option")]
pub struct EmptyValueAccess;
