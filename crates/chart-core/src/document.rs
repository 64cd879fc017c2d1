// File: crates/chart-core/src/document.rs
// Summary: Headless host document: named render containers and a one-shot ready signal.
// Notes:
// - Handlers registered with `ready` run once, in registration order, when
//   `fire_ready` is called; a handler registered after that runs immediately.
// - `highcharts("#id", options)` is the render entry point: it renders the
//   options into the container and keeps the PNG bytes there.

use std::collections::BTreeMap;
use std::mem;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::chart::{Chart, RenderOptions};
use crate::error::{ChartError, ChartResult};
use crate::options::ChartOptions;
use crate::types::{HEIGHT, WIDTH};

type ReadyHandler = Box<dyn FnOnce(&mut Document) -> ChartResult<()>>;

/// A render target inside the document.
#[derive(Clone, Debug)]
pub struct Container {
    pub width: i32,
    pub height: i32,
    /// When set, every render is also written to this PNG file.
    pub output: Option<PathBuf>,
    rendered: Option<Vec<u8>>,
    options: Option<ChartOptions>,
}

impl Container {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, output: None, rendered: None, options: None }
    }

    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// PNG bytes of the last chart rendered into this container.
    pub fn rendered_png(&self) -> Option<&[u8]> {
        self.rendered.as_deref()
    }

    /// Options of the last chart rendered into this container.
    pub fn chart_options(&self) -> Option<&ChartOptions> {
        self.options.as_ref()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// `#c1` and `c1` name the same container.
fn container_key(selector: &str) -> &str {
    selector.trim().trim_start_matches('#')
}

#[derive(Default)]
pub struct Document {
    containers: BTreeMap<String, Container>,
    pending: Vec<ReadyHandler>,
    ready: bool,
    render: RenderOptions,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Theme, insets and label settings used for every render; width and height
    /// come from the target container.
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn add_container(&mut self, selector: &str, container: Container) {
        self.containers.insert(container_key(selector).to_string(), container);
    }

    pub fn container(&self, selector: &str) -> Option<&Container> {
        self.containers.get(container_key(selector))
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Run `handler` once the document is ready.
    pub fn ready<F>(&mut self, handler: F) -> ChartResult<()>
    where
        F: FnOnce(&mut Document) -> ChartResult<()> + 'static,
    {
        if self.ready {
            return handler(self);
        }
        self.pending.push(Box::new(handler));
        Ok(())
    }

    /// Signal readiness. Runs every queued handler; returns the first error
    /// after all of them ran. Later calls do nothing.
    pub fn fire_ready(&mut self) -> ChartResult<()> {
        if self.ready {
            debug!("document already ready");
            return Ok(());
        }
        self.ready = true;
        let handlers = mem::take(&mut self.pending);
        debug!(handlers = handlers.len(), "document ready");
        let mut first_err = None;
        for handler in handlers {
            if let Err(e) = handler(self) {
                warn!(error = %e, "ready handler failed");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Render `options` into the container named by `selector`.
    pub fn highcharts(&mut self, selector: &str, options: ChartOptions) -> ChartResult<()> {
        let container = self
            .containers
            .get_mut(container_key(selector))
            .ok_or_else(|| ChartError::MissingContainer(selector.to_string()))?;
        let chart = Chart::new(options)?;
        let opts = RenderOptions {
            width: container.width,
            height: container.height,
            ..self.render.clone()
        };
        let bytes = chart.render_to_png_bytes(&opts)?;
        if let Some(path) = &container.output {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &bytes)?;
        }
        info!(
            container = selector,
            series = chart.options.series.len(),
            categories = chart.options.category_count(),
            bytes = bytes.len(),
            "rendered chart"
        );
        container.rendered = Some(bytes);
        container.options = Some(chart.options);
        Ok(())
    }
}
