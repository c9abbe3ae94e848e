//! Unit tests for the overlay module.
//!
//! Tests are organised by concept: field enumerations, patches, command
//! definitions, handlers, dispatch and the registration manifest.
