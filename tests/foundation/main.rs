//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityId, EntityKind and its roles, Request, and Error.
