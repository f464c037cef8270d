// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod stream;
pub mod token;

pub use activity::ActivitySummary;
pub use stream::{GpsPoint, StreamSet, LATLNG_STREAM};
pub use token::AccessToken;
