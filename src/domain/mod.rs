//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves a code and sends a
//!    [`click_event::ClickEvent`] to a bounded channel (`try_send`, never
//!    blocking the response)
//! 2. [`click_worker::run_click_worker`] drains the channel, derives
//!    device/browser/OS from the User-Agent, and persists the event
//! 3. Insert failures are logged and the event is dropped

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
