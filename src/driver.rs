//! Invocation driver.
//!
//! One [`Driver::run`] call is one complete invocation: load the page
//! index, fetch only the entities that page needs, derive its view, paint
//! the page and footer, push the frame to the sink, persist the toggled
//! index. Control flow is strictly linear; there is no loop or timer here
//! by design, since scheduling belongs to whatever invokes the process.

use chrono::Local;

use crate::client::Client;
use crate::config::Config;
use crate::error::Error;
use crate::page::{Page, PageStore};
use crate::render;
use crate::sink::DisplaySink;
use crate::surface::Frame;
use crate::views::{EventView, StatusView};

/// Orchestrates one render invocation.
///
/// # Example
///
/// ```rust,no_run
/// use inkboard::{Config, Driver, PpmSink};
///
/// # fn example() -> Result<(), inkboard::Error> {
/// let config = Config::from_env()?;
/// let mut sink = PpmSink::new(config.output_path.clone());
/// let rendered = Driver::new(config).run(&mut sink)?;
/// println!("rendered page token {}", rendered.token());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Driver {
    config: Config,
    client: Client,
    store: PageStore,
}

impl Driver {
    /// Build a driver from configuration.
    pub fn new(config: Config) -> Self {
        let client = Client::from_config(&config);
        let store = PageStore::new(config.state_path.clone());
        Self {
            config,
            client,
            store,
        }
    }

    /// Execute one invocation and return the page that was rendered.
    ///
    /// Entity fetches and derivations degrade into sentinel values and
    /// never fail the run; only frame delivery and page-index persistence
    /// can return an error.
    pub fn run(&self, sink: &mut dyn DisplaySink) -> Result<Page, Error> {
        let page = self.store.load();
        tracing::info!("rendering page {}", page.token());

        let mut frame = Frame::new(sink.size());
        match page {
            Page::Status => render::draw_status_page(&mut frame, &self.fetch_status()),
            Page::Event => render::draw_event_page(&mut frame, &self.fetch_event()),
        }
        render::draw_footer(&mut frame, Local::now().naive_local());

        sink.push(&frame)?;
        self.store.save(page.next())?;

        tracing::info!("page {} delivered, next is {}", page.token(), page.next().token());
        Ok(page)
    }

    fn fetch_status(&self) -> StatusView {
        let entities = &self.config.entities;
        StatusView::derive(
            &self.client.fetch(&entities.openings),
            &self.client.fetch(&entities.door_last_opened),
            &self.client.fetch(&entities.alarm),
        )
    }

    fn fetch_event(&self) -> EventView {
        let reading = self.client.fetch(&self.config.entities.calendar);
        EventView::derive(&reading, Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PanelColor;

    /// Sink that keeps the last delivered frame in memory.
    struct CaptureSink {
        frames: Vec<Frame>,
    }

    impl CaptureSink {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }
    }

    impl DisplaySink for CaptureSink {
        fn push(&mut self, frame: &Frame) -> Result<(), Error> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    /// Sink that always rejects the frame.
    struct RejectingSink;

    impl DisplaySink for RejectingSink {
        fn push(&mut self, _frame: &Frame) -> Result<(), Error> {
            Err(Error::Sink("panel unavailable".to_string()))
        }
    }

    fn offline_config(name: &str) -> Config {
        // Port 9 is not listening, so every fetch degrades to the sentinel.
        let state = std::env::temp_dir().join(format!(
            "inkboard-driver-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&state);
        Config::new("http://127.0.0.1:9/", "token")
            .with_state_path(state)
            .with_timeout_secs(1)
    }

    #[test]
    fn test_run_degrades_offline_and_toggles() {
        let config = offline_config("toggle");
        let state_path = config.state_path.clone();
        let driver = Driver::new(config);
        let mut sink = CaptureSink::new();

        // No state file: first run renders the status page.
        let rendered = driver.run(&mut sink).unwrap();
        assert_eq!(rendered, Page::Status);
        assert_eq!(std::fs::read_to_string(&state_path).unwrap(), "2");

        // Second run picks up the toggled index.
        let rendered = driver.run(&mut sink).unwrap();
        assert_eq!(rendered, Page::Event);
        assert_eq!(std::fs::read_to_string(&state_path).unwrap(), "1");

        assert_eq!(sink.frames.len(), 2);
        // Sentinel alarm state is an alert, so the offline status page
        // still carries red ink; the run itself stays healthy.
        assert!(sink.frames[0].count_of(PanelColor::Red) > 0);

        let _ = std::fs::remove_file(&state_path);
    }

    #[test]
    fn test_sink_failure_propagates_and_keeps_page() {
        let config = offline_config("reject");
        let state_path = config.state_path.clone();
        let driver = Driver::new(config);

        let err = driver.run(&mut RejectingSink).unwrap_err();
        assert!(matches!(err, Error::Sink(_)));
        // The index is only persisted after successful delivery, so the
        // next run retries the same page.
        assert!(!state_path.exists());
    }

    #[test]
    fn test_persistence_failure_propagates() {
        let config = Config::new("http://127.0.0.1:9/", "token")
            .with_state_path("/nonexistent-dir/inkboard/page_state.txt")
            .with_timeout_secs(1);
        let driver = Driver::new(config);
        let mut sink = CaptureSink::new();

        let err = driver.run(&mut sink).unwrap_err();
        assert!(matches!(err, Error::PageState(_)));
        // The frame itself was still delivered before the failure.
        assert_eq!(sink.frames.len(), 1);
    }
}
