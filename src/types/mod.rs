// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource instances returned by the client.

pub mod resource;

pub use resource::Resource;
