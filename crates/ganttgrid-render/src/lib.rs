//! # ganttgrid-render
//!
//! Rendering pipeline for ganttgrid charts.
//!
//! This crate provides:
//! - Grid markup rendering into caller-owned containers
//! - PNG export through a host-supplied rasterization capability
//! - One-step configuration loading from JSON files
//!
//! ## Example
//!
//! ```rust
//! use ganttgrid_core::{ChartConfig, Page};
//! use ganttgrid_render::{GanttChart, DEFAULT_CONTAINER_ID};
//!
//! let config = ChartConfig::from_json(
//!     r#"{
//!         "title": "Release Plan",
//!         "weeks": 4,
//!         "swimlanes": [
//!             {"name": "Backend", "tasks": [{"name": "API", "start": 1, "end": 3}]}
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut page = Page::new();
//! page.insert(DEFAULT_CONTAINER_ID);
//!
//! let chart = GanttChart::new(config).unwrap();
//! chart.render(&mut page, DEFAULT_CONTAINER_ID);
//! assert!(!page.get(DEFAULT_CONTAINER_ID).unwrap().is_empty());
//! ```

pub mod chart;
pub mod export;
pub mod loader;

pub use chart::{GanttChart, DEFAULT_CONTAINER_ID};
pub use export::{Exporter, DEFAULT_EXPORT_FILENAME};
pub use loader::{load_chart, LoadError};
