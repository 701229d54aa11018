//! userd Protocol Buffers
//!
//! Message types and gRPC service bindings for the `userd.v1` API, generated
//! from `proto/userd.proto` with `prost` and `tonic`.
//!
//! The generated module is committed so building the workspace does not
//! require `protoc`. To regenerate after editing the proto file, run
//! `tonic-build` against `proto/userd.proto` and replace
//! `src/generated/userd.v1.rs` with the output.

/// Generated types and services for the `userd.v1` package
pub mod v1 {
    #![allow(clippy::pedantic)]

    include!("generated/userd.v1.rs");
}
