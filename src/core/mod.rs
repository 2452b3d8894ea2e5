//! # Core Application Logic
//!
//! This module contains the book-list presentation core.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • BookListState (snapshot) │
//!                    │  • BookListAction (events)  │
//!                    │  • update() (reducer)       │
//!                    │  • BookListViewModel (cell) │
//!                    │                             │
//!                    │  No I/O. No UI. Pure.       │
//!                    └─────────────┬───────────────┘
//!                                  │
//!              ┌───────────────────┼───────────────────┐
//!              ▼                   ▼                   ▼
//!       ┌────────────┐      ┌────────────┐      ┌────────────┐
//!       │    TUI     │      │  catalog   │      │   other    │
//!       │  Adapter   │      │ (fetches)  │      │  adapters  │
//!       │ (ratatui)  │      │            │      │  (future)  │
//!       └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: The `Book` value struct, one catalog item
//! - [`state`]: The `BookListState` struct, everything the screen renders
//! - [`action`]: The `BookListAction` enum and the `update()` reducer
//! - [`viewmodel`]: The single-writer observable state container
//! - [`result`]: Outcome combinators for fallible catalog operations
//! - [`text`]: Deferred-resolution UI text
//! - [`config`]: Settings file loading and resolution

pub mod action;
pub mod book;
pub mod config;
pub mod result;
pub mod state;
pub mod text;
pub mod viewmodel;
