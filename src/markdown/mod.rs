//! Markdown module - Minimal heading/link/image grammar
//!
//! Headings: `# Title` or `# Title {#custom-id}`
//! Links: `[text](target)` and reference-style `[text][ref]`
//! Images: `![alt](path)`

pub mod extract;
pub mod headings;
