//! Progress view: stats, achievements, and the daily-XP chart, fetched
//! concurrently. The export link is opened in the system handler rather
//! than fetched.

use crate::app::messages::{Effect, ViewEvent};
use crate::models::{Achievement, ChartData, Progress};
use crate::notifications::ToastKind;

use super::ViewContext;

pub struct ProgressView {
    ctx: ViewContext,
    pub stats: Option<Progress>,
    pub achievements: Vec<Achievement>,
    pub charts: Option<ChartData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProgressView {
    pub fn mount(ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            stats: None,
            achievements: Vec::new(),
            charts: None,
            loading: true,
            error: None,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let (stats, achievements, charts) = tokio::join!(
                ctx.client.progress(),
                ctx.client.achievements(),
                ctx.client.charts(),
            );
            ctx.send(ViewEvent::ProgressStatsLoaded {
                stats: stats.map_err(|e| e.to_string()),
                achievements: achievements.map_err(|e| e.to_string()),
                charts: charts.map_err(|e| e.to_string()),
            });
        });
        view
    }

    /// Open the CSV export in the default browser.
    pub fn open_export(&self) -> Vec<Effect> {
        match open::that(self.ctx.client.export_url()) {
            Ok(()) => vec![Effect::Toast {
                message: "Export opened in browser".to_string(),
                kind: ToastKind::Info,
            }],
            Err(_) => vec![Effect::Toast {
                message: "Could not open export".to_string(),
                kind: ToastKind::Error,
            }],
        }
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        if let ViewEvent::ProgressStatsLoaded {
            stats,
            achievements,
            charts,
        } = event
        {
            self.loading = false;
            match stats {
                Ok(stats) => self.stats = Some(stats),
                Err(e) => self.error = Some(e),
            }
            // Achievements and charts degrade to empty panels.
            if let Ok(achievements) = achievements {
                self.achievements = achievements;
            }
            if let Ok(charts) = charts {
                self.charts = Some(charts);
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::tests::test_ctx;

    #[tokio::test]
    async fn stats_failure_is_inline_error() {
        let (ctx, _rx) = test_ctx();
        let mut view = ProgressView::mount(ctx);
        view.apply(ViewEvent::ProgressStatsLoaded {
            stats: Err("down".into()),
            achievements: Ok(vec![]),
            charts: Err("down".into()),
        });
        assert!(!view.loading);
        assert!(view.error.is_some());
        assert!(view.charts.is_none());
    }

    #[tokio::test]
    async fn partial_failures_keep_the_rest() {
        let (ctx, _rx) = test_ctx();
        let mut view = ProgressView::mount(ctx);
        view.apply(ViewEvent::ProgressStatsLoaded {
            stats: Ok(Progress::default()),
            achievements: Err("down".into()),
            charts: Ok(ChartData::default()),
        });
        assert!(view.stats.is_some());
        assert!(view.achievements.is_empty());
        assert!(view.charts.is_some());
        assert!(view.error.is_none());
    }
}
