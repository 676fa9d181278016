//! Typed route table.
//!
//! Routes are parsed once per navigation into a [`Route`] value instead of
//! being pattern-matched out of a path string at each use site. The
//! [`History`] stack models browser-style back/forward navigation.

/// All navigable destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    /// The "learn something new" picker.
    NewSkill,
    /// Skill detail with its lesson plan.
    Skill(i64),
    /// Generated cheat sheet for a skill.
    Cheatsheet(i64),
    /// Capstone project for a skill.
    Project(i64),
    /// A lesson body.
    Lesson(i64),
    /// The quiz attached to a lesson.
    Quiz(i64),
    /// Tutor chat, optionally scoped to a skill.
    Chat(Option<i64>),
    /// Spaced-repetition review session.
    Review,
    /// Progress stats and achievements.
    Progress,
}

impl Route {
    /// Parse a path string into a typed route. Unknown paths are `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == "/" {
            return Some(Route::Dashboard);
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["skills", "new"] => Some(Route::NewSkill),
            ["skills", id] => id.parse().ok().map(Route::Skill),
            ["skills", id, "cheatsheet"] => id.parse().ok().map(Route::Cheatsheet),
            ["skills", id, "project"] => id.parse().ok().map(Route::Project),
            ["lessons", id] => id.parse().ok().map(Route::Lesson),
            ["lessons", id, "quiz"] => id.parse().ok().map(Route::Quiz),
            ["chat"] => Some(Route::Chat(None)),
            ["chat", id] => id.parse().ok().map(|id| Route::Chat(Some(id))),
            ["review"] => Some(Route::Review),
            ["progress"] => Some(Route::Progress),
            _ => None,
        }
    }

    /// The canonical path string for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::NewSkill => "/skills/new".to_string(),
            Route::Skill(id) => format!("/skills/{}", id),
            Route::Cheatsheet(id) => format!("/skills/{}/cheatsheet", id),
            Route::Project(id) => format!("/skills/{}/project", id),
            Route::Lesson(id) => format!("/lessons/{}", id),
            Route::Quiz(id) => format!("/lessons/{}/quiz", id),
            Route::Chat(None) => "/chat".to_string(),
            Route::Chat(Some(id)) => format!("/chat/{}", id),
            Route::Review => "/review".to_string(),
            Route::Progress => "/progress".to_string(),
        }
    }

    /// Short title used in the UI header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::NewSkill => "New Skill",
            Route::Skill(_) => "Skill",
            Route::Cheatsheet(_) => "Cheat Sheet",
            Route::Project(_) => "Project",
            Route::Lesson(_) => "Lesson",
            Route::Quiz(_) => "Quiz",
            Route::Chat(_) => "Tutor Chat",
            Route::Review => "Review",
            Route::Progress => "Progress",
        }
    }
}

/// Browser-style navigation history.
///
/// `push` truncates any forward entries, like a browser does after
/// navigating from a mid-history position.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
    position: usize,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            position: 0,
        }
    }

    /// The route at the current history position.
    pub fn current(&self) -> Route {
        self.entries[self.position]
    }

    /// Push a new entry, discarding anything forward of the cursor.
    pub fn push(&mut self, route: Route) {
        self.entries.truncate(self.position + 1);
        self.entries.push(route);
        self.position += 1;
    }

    /// Step back. Returns the new current route if there was one.
    pub fn back(&mut self) -> Option<Route> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.current())
    }

    /// Step forward. Returns the new current route if there was one.
    pub fn forward(&mut self) -> Option<Route> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(self.current())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
        assert_eq!(Route::parse(""), Some(Route::Dashboard));
    }

    #[test]
    fn test_parse_typed_ids() {
        assert_eq!(Route::parse("/skills/12"), Some(Route::Skill(12)));
        assert_eq!(Route::parse("/lessons/7"), Some(Route::Lesson(7)));
        assert_eq!(Route::parse("/lessons/7/quiz"), Some(Route::Quiz(7)));
        assert_eq!(Route::parse("/chat/3"), Some(Route::Chat(Some(3))));
        assert_eq!(Route::parse("/chat"), Some(Route::Chat(None)));
        assert_eq!(
            Route::parse("/skills/4/cheatsheet"),
            Some(Route::Cheatsheet(4))
        );
        assert_eq!(Route::parse("/skills/4/project"), Some(Route::Project(4)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_ids() {
        assert_eq!(Route::parse("/skills/new"), Some(Route::NewSkill));
        assert_eq!(Route::parse("/skills/abc"), None);
        assert_eq!(Route::parse("/lessons/"), None);
    }

    #[test]
    fn test_parse_unknown_path() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/skills/1/unknown"), None);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Dashboard,
            Route::NewSkill,
            Route::Skill(5),
            Route::Cheatsheet(5),
            Route::Project(5),
            Route::Lesson(9),
            Route::Quiz(9),
            Route::Chat(None),
            Route::Chat(Some(2)),
            Route::Review,
            Route::Progress,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_history_back_and_forward() {
        let mut history = History::default();
        history.push(Route::Skill(1));
        history.push(Route::Lesson(2));

        assert_eq!(history.back(), Some(Route::Skill(1)));
        assert_eq!(history.back(), Some(Route::Dashboard));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(Route::Skill(1)));
        assert_eq!(history.forward(), Some(Route::Lesson(2)));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_history_push_truncates_forward_entries() {
        let mut history = History::default();
        history.push(Route::Review);
        history.back();
        history.push(Route::Progress);

        // The Review entry is gone
        assert_eq!(history.forward(), None);
        assert_eq!(history.current(), Route::Progress);
        assert_eq!(history.back(), Some(Route::Dashboard));
    }
}
