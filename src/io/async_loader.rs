//! Asynchronous order file loading.
//!
//! Order documents are small, but loading them on the UI thread would still
//! freeze the frame during disk access on slow media. Files load in a
//! background thread; the GUI polls for completion once per frame.

use eframe::egui;
use ouvrage::{generate_demo_order, Order, OrderReader};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::io::LoadingState;

/// Result of a completed order loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded order
        order: Order,
        /// Path to the file that was loaded (None for demo orders)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of order files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Order, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading an order file asynchronously from the specified path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the order file to load
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = OrderReader::new().read(&path).map_err(|e| format!("{e:#}"));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates and loads the demo order in-memory.
    ///
    /// The demo order is generated synchronously (no background thread).
    pub fn load_demo_order(&mut self) -> Result<Order, String> {
        Ok(generate_demo_order())
    }

    /// Checks if background loading has completed and returns the result.
    ///
    /// Should be called once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(order) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { order, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_demo_order_loading() {
        let mut loader = AsyncLoader::new();
        let result = loader.load_demo_order();
        assert!(result.is_ok(), "Demo order loading should succeed");
        assert!(!result.unwrap().lines.is_empty());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        let result = loader.check_completion();
        assert!(matches!(result, LoadResult::None));
    }
}
