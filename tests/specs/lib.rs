// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec tests for the `tl` CLI live in `cli/` and are wired up as test
//! targets of the cli crate, which provides the binary under test.
