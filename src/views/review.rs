//! Spaced-repetition review: walk the due queue card by card, reveal, rate.
//!
//! A rating failure still advances the queue; the card simply comes back on
//! the server's schedule. The navbar count is refreshed once, when the
//! session completes.

use crate::app::messages::{Effect, ViewEvent};
use crate::models::{Quality, ReviewCard};
use crate::notifications::ToastKind;

use super::ViewContext;

pub struct ReviewView {
    ctx: ViewContext,
    pub cards: Vec<ReviewCard>,
    pub current: usize,
    pub revealed: bool,
    pub loading: bool,
    pub rating: bool,
    pub completed: bool,
    pub error: Option<String>,
    /// XP accumulated across the session, shown on the completion screen.
    pub xp_earned: i64,
    pub reviewed_count: usize,
}

impl ReviewView {
    pub fn mount(ctx: ViewContext) -> Self {
        let view = Self {
            ctx,
            cards: Vec::new(),
            current: 0,
            revealed: false,
            loading: true,
            rating: false,
            completed: false,
            error: None,
            xp_earned: 0,
            reviewed_count: 0,
        };
        let ctx = view.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.review_queue().await;
            ctx.send(ViewEvent::ReviewQueueLoaded(
                result.map_err(|e| e.to_string()),
            ));
        });
        view
    }

    pub fn current_card(&self) -> Option<&ReviewCard> {
        self.cards.get(self.current)
    }

    pub fn reveal(&mut self) {
        if !self.completed {
            self.revealed = true;
        }
    }

    /// Rate the current card. Only available once the answer is revealed.
    pub fn rate(&mut self, quality: Quality) {
        if !self.revealed || self.rating || self.completed {
            return;
        }
        let card_id = match self.current_card() {
            Some(card) => card.id,
            None => return,
        };
        self.rating = true;
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let result = ctx.client.rate_card(card_id, quality).await;
            ctx.send(ViewEvent::CardRated(result.map_err(|e| e.to_string())));
        });
    }

    pub fn apply(&mut self, event: ViewEvent) -> Vec<Effect> {
        match event {
            ViewEvent::ReviewQueueLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(queue) => {
                        self.completed = queue.cards.is_empty();
                        self.cards = queue.cards;
                    }
                    Err(e) => self.error = Some(e),
                }
                Vec::new()
            }
            ViewEvent::CardRated(result) => {
                self.rating = false;
                let mut effects = Vec::new();
                match result {
                    Ok(rated) => {
                        self.xp_earned += rated.xp_earned;
                        if !rated.new_achievements.is_empty() {
                            effects.push(Effect::Achievements(rated.new_achievements));
                        }
                    }
                    Err(_) => effects.push(Effect::Toast {
                        message: "Could not record rating".to_string(),
                        kind: ToastKind::Error,
                    }),
                }
                // Advance regardless; a failed rating just resurfaces later.
                self.reviewed_count += 1;
                self.revealed = false;
                if self.current + 1 < self.cards.len() {
                    self.current += 1;
                } else {
                    self.completed = true;
                    effects.push(Effect::RefreshNavbar);
                }
                effects
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RateResult, ReviewQueue};
    use crate::views::tests::test_ctx;

    fn card(id: i64) -> ReviewCard {
        ReviewCard {
            id,
            lesson_id: Some(1),
            question: format!("Q{id}"),
            answer: format!("A{id}"),
            lesson_topic: None,
            next_review_at: None,
            repetitions: None,
        }
    }

    fn rated(xp: i64) -> RateResult {
        RateResult {
            xp_earned: xp,
            next_review_days: 3,
            new_achievements: vec![],
        }
    }

    fn loaded_view(count: i64) -> ReviewView {
        let (ctx, _rx) = test_ctx();
        let mut view = ReviewView::mount(ctx);
        let cards = (1..=count).map(card).collect();
        view.apply(ViewEvent::ReviewQueueLoaded(Ok(ReviewQueue { cards })));
        view
    }

    #[tokio::test]
    async fn empty_queue_is_already_complete() {
        let view = loaded_view(0);
        assert!(view.completed);
    }

    #[tokio::test]
    async fn rating_requires_reveal() {
        let mut view = loaded_view(2);
        view.rate(Quality::Good);
        assert!(!view.rating);
        view.reveal();
        view.rate(Quality::Good);
        assert!(view.rating);
    }

    #[tokio::test]
    async fn three_cards_complete_after_third_with_one_navbar_refresh() {
        let mut view = loaded_view(3);
        let mut navbar_refreshes = 0;
        for n in 1..=3 {
            view.reveal();
            view.rate(Quality::Good);
            let effects = view.apply(ViewEvent::CardRated(Ok(rated(5))));
            navbar_refreshes += effects
                .iter()
                .filter(|e| **e == Effect::RefreshNavbar)
                .count();
            assert_eq!(view.completed, n == 3);
        }
        assert_eq!(navbar_refreshes, 1);
        assert_eq!(view.xp_earned, 15);
    }

    #[tokio::test]
    async fn failed_rating_still_advances() {
        let mut view = loaded_view(2);
        view.reveal();
        view.rate(Quality::Again);
        let effects = view.apply(ViewEvent::CardRated(Err("500".into())));
        assert_eq!(view.current, 1);
        assert!(!view.revealed);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Toast { kind: ToastKind::Error, .. })));
    }
}
