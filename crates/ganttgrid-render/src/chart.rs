//! Gantt grid renderer
//!
//! Transforms a validated [`ChartConfig`] into a CSS-grid markup structure:
//! a title element followed by one grid holding every row — a header row,
//! then for each swimlane a header row plus one row per task. Each row is a
//! label cell and a bar area spanning all period columns; task bars are
//! positioned inside the bar area via `grid-column` spans.
//!
//! Appearance beyond bar position and the optional direct fill is left to
//! an external stylesheet, keyed off the class names and `data-*`
//! attributes the renderer emits.

use ganttgrid_core::config::{ChartConfig, ConfigError, Swimlane, TaskSpec};
use ganttgrid_core::markup::{Container, Element, Page};

/// Conventional container id charts mount into
pub const DEFAULT_CONTAINER_ID: &str = "gantt-chart-container";

/// Gantt chart renderer.
///
/// Owns its configuration, immutable for the chart's lifetime; rendering
/// keeps no other state, so re-rendering into the same container
/// reproduces an identical structure.
#[derive(Clone, Debug)]
pub struct GanttChart {
    config: ChartConfig,
    /// Minimum label column width in pixels
    label_min_px: u32,
    /// Label column flex ratio, relative to one period column
    label_flex: f64,
}

impl GanttChart {
    /// Create a chart, validating the configuration first.
    ///
    /// Fails synchronously with a [`ConfigError`] naming the missing or
    /// invalid field; no rendering is attempted on an invalid config.
    pub fn new(config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            label_min_px: 220,
            label_flex: 1.5,
        })
    }

    /// Configure the minimum label column width in pixels
    pub fn label_min_px(mut self, px: u32) -> Self {
        self.label_min_px = px;
        self
    }

    /// Configure the label column flex ratio
    pub fn label_flex(mut self, flex: f64) -> Self {
        self.label_flex = flex;
        self
    }

    /// The validated configuration this chart renders
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render into the container registered under `container_id`.
    ///
    /// A missing container is logged and aborts the render without
    /// mutating anything; all other malformed input degrades per-row.
    pub fn render(&self, page: &mut Page, container_id: &str) {
        let Some(container) = page.get_mut(container_id) else {
            tracing::error!(container = container_id, "container element not found");
            return;
        };
        self.render_into(container);
    }

    /// Render into a container handle, replacing any existing content
    pub fn render_into(&self, container: &mut Container) {
        container.clear();
        container.append(self.build_title());
        container.append(self.build_grid());
    }

    fn build_title(&self) -> Element {
        Element::new("div")
            .set("class", "gantt-title")
            .text(&self.config.title)
    }

    /// One wide label column followed by `weeks` equal period columns
    fn build_grid(&self) -> Element {
        let mut grid = Element::new("div").set("class", "gantt-grid").set(
            "style",
            format!(
                "grid-template-columns: minmax({}px, {}fr) repeat({}, 1fr)",
                self.label_min_px, self.label_flex, self.config.weeks
            ),
        );

        grid = self.add_header_row(grid);
        for lane in &self.config.swimlanes {
            grid = self.add_swimlane(grid, lane);
        }
        grid
    }

    /// Header row: one empty label cell, then one cell per period column
    fn add_header_row(&self, mut grid: Element) -> Element {
        grid = grid.add(Element::new("div").set("class", "gantt-header gantt-header-label"));
        for i in 1..=self.config.weeks {
            grid = grid.add(
                Element::new("div")
                    .set("class", "gantt-header")
                    .text(format!("{}{}", self.config.week_label, i)),
            );
        }
        grid
    }

    /// Swimlane header row, then one row per task
    fn add_swimlane(&self, mut grid: Element, lane: &Swimlane) -> Element {
        grid = grid
            .add(
                Element::new("div")
                    .set("class", "gantt-row-label swimlane")
                    .text(&lane.name),
            )
            .add(self.bar_area("swimlane"));

        for task in &lane.tasks {
            grid = self.add_task_row(grid, task);
        }
        grid
    }

    /// Task row: label cell plus bar area; the bar itself only when the
    /// task carries both span endpoints.
    fn add_task_row(&self, grid: Element, task: &TaskSpec) -> Element {
        let mut area = self.bar_area("task");
        if let (Some(start), Some(end)) = (task.start, task.end) {
            area = area.add(self.build_bar(task, start, end));
        }

        grid.add(
            Element::new("div")
                .set("class", "gantt-row-label task")
                .text(&task.name),
        )
        .add(area)
    }

    /// Bar area spanning all period columns, with one marker cell per
    /// period (tagged with its 1-based index) for vertical separators
    fn bar_area(&self, kind: &str) -> Element {
        let mut area = Element::new("div").set("class", format!("gantt-bar-area {kind}"));
        for i in 1..=self.config.weeks {
            area = area.add(Element::new("span").set("data-col", i));
        }
        area
    }

    /// The span is passed through uninterpreted: out-of-range or inverted
    /// coordinates yield an empty or off-grid bar rather than an error.
    fn build_bar(&self, task: &TaskSpec, start: i64, end: i64) -> Element {
        let mut bar = Element::new("div").set("class", "gantt-bar");
        let mut style = format!("grid-column: {start} / {end}");

        if let Some(key) = &task.color {
            bar = bar.set("data-color", key);
            if let Some(value) = self.config.resolve_color(key) {
                style.push_str(&format!("; background-color: {value}"));
            }
        }
        bar = bar.set("style", style);

        if task.show_label {
            bar = bar.text(&task.name);
        }
        bar
    }
}
