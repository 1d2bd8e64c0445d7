//! Wire contracts shared between the frontend and the report server.
//!
//! The server itself lives elsewhere; everything it exposes to this
//! repository is described here.

pub mod usecases;
