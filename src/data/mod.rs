/// Data layer: dataset layout, text parsing, label encoding and loading.
///
/// Architecture:
/// ```text
///  <split>/Inertial Signals/*_<split>.txt    <split>/y_<split>.txt
///        │                                          │
///        ▼                                          ▼
///   ┌──────────┐                               ┌──────────┐
///   │  reader   │  9 × (windows, timesteps)     │  reader   │  labels
///   └──────────┘                               └──────────┘
///        │                                          │
///        ▼                                          ▼
///   ┌──────────┐                               ┌──────────┐
///   │  loader   │  stack → (w, t, 9)            │ encoding  │  one-hot
///   └──────────┘                               └──────────┘
/// ```
/// `layout` turns a `(channel, split)` pair into a path; `model` holds the
/// shared types.

pub mod encoding;
pub mod layout;
pub mod loader;
pub mod model;
pub mod reader;
