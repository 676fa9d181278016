//! The navigation and refresh protocol.
//!
//! `navigate()` is the only forward path: history push, then route set, then
//! the partial refresh spawn, then scroll reset, in that order, so a rapid
//! double-navigation always leaves the latest route in place even when an
//! earlier refresh is still in flight. Back/forward restore a route from
//! history and remount its view but perform no snapshot refresh at all; that
//! asymmetry is part of the contract.

use std::sync::Arc;

use tracing::debug;

use crate::router::Route;
use crate::views::{View, ViewContext};

use super::messages::AppMessage;
use super::App;

impl App {
    /// Forward navigation to a route.
    pub fn navigate(&mut self, route: Route) {
        self.history.push(route);
        self.set_route(route);
        if route == Route::Dashboard {
            self.spawn_full_refresh();
        } else {
            self.spawn_navbar_refresh();
        }
        self.scroll = 0;
        self.mark_dirty();
    }

    /// History back. Remounts the view for the restored route without
    /// refreshing the dashboard snapshot.
    pub fn go_back(&mut self) {
        if let Some(route) = self.history.back() {
            self.set_route(route);
            self.scroll = 0;
            self.mark_dirty();
        }
    }

    /// History forward; same no-refresh rule as [`App::go_back`].
    pub fn go_forward(&mut self) {
        if let Some(route) = self.history.forward() {
            self.set_route(route);
            self.scroll = 0;
            self.mark_dirty();
        }
    }

    /// Set the route and mount its view under a fresh generation, orphaning
    /// whatever the previous view still had in flight.
    fn set_route(&mut self, route: Route) {
        if let View::Lesson(lesson) = &mut self.view {
            lesson.flush_all_drafts(&self.storage);
        }
        self.route = route;
        self.view_generation += 1;
        let ctx = ViewContext {
            client: Arc::clone(&self.client),
            tx: self.message_tx.clone(),
            generation: self.view_generation,
        };
        self.view = View::mount(route, ctx, &self.storage);
    }

    /// Concurrently re-fetch skills, progress, and the review queue. A
    /// failed review fetch degrades to a zero count; failed skills or
    /// progress keep their cached values. None of it is user-visible.
    pub fn spawn_full_refresh(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let (skills, progress, queue) = tokio::join!(
                client.list_skills(),
                client.progress(),
                client.review_queue(),
            );
            let skills = skills
                .inspect_err(|e| debug!("dashboard skills refresh failed: {e}"))
                .ok();
            let progress = progress
                .inspect_err(|e| debug!("dashboard progress refresh failed: {e}"))
                .ok();
            let review_count = queue
                .inspect_err(|e| debug!("review queue refresh failed: {e}"))
                .map(|q| q.cards.len())
                .unwrap_or(0);
            let _ = tx.send(AppMessage::DashboardRefreshed {
                skills,
                progress,
                review_count,
            });
        });
    }

    /// Re-fetch progress and review count only; the skills list is not shown
    /// off-dashboard and is left stale on purpose.
    pub fn spawn_navbar_refresh(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let (progress, queue) = tokio::join!(client.progress(), client.review_queue());
            let progress = progress
                .inspect_err(|e| debug!("navbar progress refresh failed: {e}"))
                .ok();
            let review_count = queue
                .inspect_err(|e| debug!("navbar review queue refresh failed: {e}"))
                .map(|q| q.cards.len())
                .unwrap_or(0);
            let _ = tx.send(AppMessage::NavbarRefreshed {
                progress,
                review_count,
            });
        });
    }
}
