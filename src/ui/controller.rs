//! MVC Controller - Mediates between Model (PortfolioSource) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Drive the view state machine (idle, loading, loaded, failed)
//! - Fetch all five resources through the injected `PortfolioSource`
//! - Track the active section while loaded
//! - Provide data to View in UI-friendly format
//!
//! # Architecture
//!
//! The Controller owns the view state but doesn't know about GTK4 widgets.
//! It lives on the UI thread (`Rc`, `RefCell`); the fetch itself is handed
//! out as a `Send` future so the GUI can run it on the tokio runtime and
//! feed the outcome back through `finish_load`.

use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::{self, ApiError, PortfolioSource};
use crate::config::RetryPolicy;
use crate::core::{
    render_section, LoadStatus, Portfolio, Section, SectionView, TransitionError, ViewState,
    LOAD_FAILED_MESSAGE,
};

/// Which transition starts a load
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadKind {
    /// First load on window creation
    Initial,
    /// User-initiated retry after a failure
    Retry,
}

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Where portfolio data comes from (live client or mock)
    source: Arc<dyn PortfolioSource>,
    /// Automatic retry policy (single attempt by default)
    retry_policy: RetryPolicy,
    /// Current view state, mutated only on the UI thread
    state: RefCell<ViewState>,
}

impl Controller {
    /// Creates an idle Controller reading from `source`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use portfolio_viewer::api::MockSource;
    /// use portfolio_viewer::ui::Controller;
    /// use std::sync::Arc;
    ///
    /// # async fn example() {
    /// let controller = Controller::new(Arc::new(MockSource::sample()));
    /// controller.load().await.ok();
    /// assert!(controller.portfolio().is_some());
    /// # }
    /// ```
    pub fn new(source: Arc<dyn PortfolioSource>) -> Self {
        Self {
            source,
            retry_policy: RetryPolicy::default(),
            state: RefCell::new(ViewState::Idle),
        }
    }

    /// Replaces the retry policy applied to every load
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// `Idle → Loading`
    pub fn begin_load(&self) -> Result<(), TransitionError> {
        self.state.borrow_mut().begin_load()?;
        info!("loading portfolio");
        Ok(())
    }

    /// `Failed → Loading` (user pressed Retry)
    pub fn retry(&self) -> Result<(), TransitionError> {
        self.state.borrow_mut().retry()?;
        info!("retrying portfolio load");
        Ok(())
    }

    /// Runs the transition that `kind` asks for
    ///
    /// On error the state is unchanged and no fetch should be started.
    pub fn start_load(&self, kind: LoadKind) -> Result<(), TransitionError> {
        match kind {
            LoadKind::Initial => self.begin_load(),
            LoadKind::Retry => self.retry(),
        }
    }

    /// Returns a future that fetches all five resources
    ///
    /// The future owns everything it needs, so it can be spawned on another
    /// executor. It does not touch the view state; hand its output to
    /// [`finish_load`](Self::finish_load).
    pub fn fetch_task(&self) -> impl Future<Output = Result<Portfolio, ApiError>> + Send + 'static {
        let source = Arc::clone(&self.source);
        let policy = self.retry_policy.clone();
        async move { api::fetch_with_policy(source.as_ref(), &policy).await }
    }

    /// `Loading → Loaded | Failed`
    pub fn finish_load(&self, outcome: Result<Portfolio, ApiError>) -> Result<(), TransitionError> {
        if let Err(error) = &outcome {
            warn!(%error, "portfolio unavailable");
        }
        self.state.borrow_mut().finish_load(outcome)?;
        debug!(status = %self.status(), "load finished");
        Ok(())
    }

    /// Initial load: begin, fetch, finish
    ///
    /// A fetch failure is not an error of this method; it lands the
    /// controller in `Failed`. Only an illegal transition is reported.
    pub async fn load(&self) -> Result<LoadStatus, TransitionError> {
        self.begin_load()?;
        let outcome = self.fetch_task().await;
        self.finish_load(outcome)?;
        Ok(self.status())
    }

    /// Manual retry: retry, fetch, finish
    pub async fn retry_load(&self) -> Result<LoadStatus, TransitionError> {
        self.retry()?;
        let outcome = self.fetch_task().await;
        self.finish_load(outcome)?;
        Ok(self.status())
    }

    /// Switches the visible section (no I/O)
    ///
    /// Returns false when nothing is loaded yet.
    pub fn select_section(&self, section: Section) -> bool {
        let changed = self.active_section() != Some(section);
        let selected = self.state.borrow_mut().select_section(section);
        if selected && changed {
            debug!(%section, "section selected");
        }
        selected
    }

    pub fn status(&self) -> LoadStatus {
        self.state.borrow().status()
    }

    /// Snapshot of the whole view state
    pub fn view_state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Loaded data, if any
    pub fn portfolio(&self) -> Option<Portfolio> {
        self.state.borrow().portfolio().cloned()
    }

    pub fn active_section(&self) -> Option<Section> {
        self.state.borrow().active_section()
    }

    /// Error captured by the last failed load
    pub fn error(&self) -> Option<ApiError> {
        self.state.borrow().error().cloned()
    }

    /// Generic text for the user when the load failed
    pub fn user_message(&self) -> Option<&'static str> {
        match self.status() {
            LoadStatus::Failed => Some(LOAD_FAILED_MESSAGE),
            _ => None,
        }
    }

    /// Display model for the active section
    pub fn current_section_view(&self) -> Option<SectionView> {
        let state = self.state.borrow();
        let portfolio = state.portfolio()?;
        let section = state.active_section()?;
        Some(render_section(portfolio, section))
    }

    /// Display model for any section, while loaded
    pub fn section_view(&self, section: Section) -> Option<SectionView> {
        self.state
            .borrow()
            .portfolio()
            .map(|portfolio| render_section(portfolio, section))
    }

    /// The data source's liveness check
    pub async fn health_check(&self) -> Result<crate::core::HealthStatus, ApiError> {
        self.source.health_check().await
    }
}
