// venvctl: Python virtual environment utilities
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! Each command is a single linear sequence: validate arguments against the
//! environment locator, then either print a derived value on stdout or
//! invoke the process runner once. No command depends on another, except
//! `install --activate` chaining into the activate body.

pub mod activate;
pub mod config;
pub mod delete;
pub mod install;
pub mod scripts;
pub mod spyder;
