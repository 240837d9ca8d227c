//! Progress reporting hooks for the partition engine.
//!
//! The engine never writes to the console. Callers that want feedback pass an
//! observer; the CLI wires [`LogProgress`] so reports go through the `log`
//! facade.

/// Receives progress events while a partition is computed.
pub trait ProgressObserver {
    /// Called once before grouping, with the universe size and relation size.
    fn on_start(&mut self, _nodes: usize, _pairs: usize) {}

    /// Called for every component as it is emitted. `found` is 1-based.
    fn on_component(&mut self, _found: usize, _size: usize) {}

    /// Called once with the final component count.
    fn on_finish(&mut self, _components: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Observer that forwards events to the `log` facade.
///
/// Per-component events are logged at `debug`; start/finish at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_start(&mut self, nodes: usize, pairs: usize) {
        log::info!("partitioning {nodes} nodes over {pairs} pairs");
    }

    fn on_component(&mut self, found: usize, size: usize) {
        log::debug!("component {found} detected ({size} nodes)");
    }

    fn on_finish(&mut self, components: usize) {
        log::info!("found {components} connected components");
    }
}

/// Observer that records every event, for tests and callers that want counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProgress {
    pub started: Option<(usize, usize)>,
    pub component_sizes: Vec<usize>,
    pub finished: Option<usize>,
}

impl ProgressObserver for RecordingProgress {
    fn on_start(&mut self, nodes: usize, pairs: usize) {
        self.started = Some((nodes, pairs));
    }

    fn on_component(&mut self, found: usize, size: usize) {
        debug_assert_eq!(found, self.component_sizes.len() + 1);
        self.component_sizes.push(size);
    }

    fn on_finish(&mut self, components: usize) {
        self.finished = Some(components);
    }
}
