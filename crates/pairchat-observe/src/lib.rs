//! Observability setup for pairchat: the global tracing subscriber and its
//! optional OpenTelemetry bridge.

pub mod tracing_setup;
