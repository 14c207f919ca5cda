//! The storefront view instance.
//!
//! A `StorefrontView` owns the only mutable state on the page: the menu flag
//! and the product loader. Fetching happens in a one-shot task returned by
//! [`StorefrontView::mount`]; the host runs it on its local executor and the
//! outcome comes back through the view's update queue, so state only ever
//! changes on the thread that renders.

use std::future::Future;

use fragrance_core::{LoadState, MenuVisibility, MountId, Product, StorefrontConfig};
use fragrance_data::{CatalogError, CatalogSource, LoadTicket, ProductLoader};
use fragrance_streaming::Shell;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};
use tracing::{debug, info};

use crate::content::StaticContent;
use crate::page::{page_shell, render_page, render_section, PageModel, SectionId};

/// Messages applied by [`StorefrontView::update`].
#[derive(Debug)]
pub enum ViewMsg {
    /// Outcome of the load task started by `mount`.
    CatalogLoaded {
        ticket: LoadTicket,
        result: Result<Vec<Product>, CatalogError>,
    },
    OpenMenu,
    CloseMenu,
}

pub struct StorefrontView {
    id: MountId,
    content: StaticContent,
    cart_count: u32,
    menu: MenuVisibility,
    loader: ProductLoader,
    tx: UnboundedSender<ViewMsg>,
    rx: UnboundedReceiver<ViewMsg>,
}

impl StorefrontView {
    pub fn new(content: StaticContent, cart_count: u32) -> Self {
        let (tx, rx) = mpsc::unbounded();
        Self {
            id: MountId::next(),
            content,
            cart_count,
            menu: MenuVisibility::closed(),
            loader: ProductLoader::new(),
            tx,
            rx,
        }
    }

    /// A view with the default copy and the configured cart badge.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(StaticContent::default(), config.cart_count)
    }

    pub fn mount_id(&self) -> MountId {
        self.id
    }

    pub fn state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn menu(&self) -> MenuVisibility {
        self.menu
    }

    pub fn content(&self) -> &StaticContent {
        &self.content
    }

    /// Handle for posting messages from event sources outside the view.
    pub fn sender(&self) -> UnboundedSender<ViewMsg> {
        self.tx.clone()
    }

    /// Start a load cycle and return the task that performs the fetch.
    ///
    /// The state is `Pending` as soon as this returns. The task does not borrow
    /// the view; if the view is gone when it finishes, the result is dropped.
    pub fn mount<S>(&mut self, source: S) -> impl Future<Output = ()> + 'static
    where
        S: CatalogSource + 'static,
    {
        let ticket = self.loader.begin();
        let tx = self.tx.clone();
        let mount = self.id;
        info!(mount = %mount, cycle = ticket.cycle(), "view mounted");

        async move {
            let result = source.fetch_catalog().await;
            if tx
                .unbounded_send(ViewMsg::CatalogLoaded { ticket, result })
                .is_err()
            {
                debug!(mount = %mount, "view dropped before catalog arrived");
            }
        }
    }

    /// Abandon the current load cycle. A result arriving later is discarded.
    pub fn unmount(&mut self) {
        self.loader.abandon();
        info!(mount = %self.id, "view unmounted");
    }

    /// Apply one message. Returns `true` if anything visible changed.
    pub fn update(&mut self, msg: ViewMsg) -> bool {
        match msg {
            ViewMsg::CatalogLoaded { ticket, result } => self.loader.resolve(ticket, result),
            ViewMsg::OpenMenu => {
                let changed = !self.menu.is_open();
                self.open_menu();
                changed
            }
            ViewMsg::CloseMenu => {
                let changed = self.menu.is_open();
                self.close_menu();
                changed
            }
        }
    }

    /// Apply every queued message without waiting. Returns how many changed
    /// the view.
    pub fn poll_updates(&mut self) -> usize {
        let mut changed = 0;
        while let Some(Some(msg)) = self.rx.next().now_or_never() {
            if self.update(msg) {
                changed += 1;
            }
        }
        changed
    }

    /// Wait for the next queued message and apply it.
    pub async fn next_update(&mut self) -> bool {
        match self.rx.next().await {
            Some(msg) => self.update(msg),
            None => false,
        }
    }

    pub fn open_menu(&mut self) {
        self.menu.open();
        debug!(mount = %self.id, "menu opened");
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
        debug!(mount = %self.id, "menu closed");
    }

    pub fn model(&self) -> PageModel<'_> {
        PageModel {
            content: &self.content,
            state: self.loader.state(),
            menu: self.menu,
            cart_count: self.cart_count,
        }
    }

    /// Render the full HTML document for the current state.
    pub fn render(&self) -> String {
        render_page(&self.model())
    }

    pub fn render_section(&self, section: SectionId) -> String {
        render_section(&self.model(), section)
    }

    pub fn shell(&self) -> Shell {
        page_shell(&self.content)
    }
}
