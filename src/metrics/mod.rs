// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derived-metrics layer: health scoring, goal projection, benchmark
//! comparison, due-date classification, ratios, and recurrence expansion.
//! No I/O, no shared state; untrusted inputs degrade instead of panicking.

pub mod goal;
pub mod health;
pub mod performance;
pub mod ratio;
pub mod recurrence;
pub mod schedule;
