use crate::views::{esc, Page};

pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        title: "Welcome to MyCommunityHub",
        subtitle: "Stay Connected to Your Local Community",
        description: "Discover what's happening around you and connect with your neighbors",
        emoji: "🏘️",
    },
    Slide {
        title: "Get Alerts Instantly",
        subtitle: "Never Miss Important Updates",
        description: "Receive timely notifications about power cuts, weather alerts, and government schemes",
        emoji: "🔔",
    },
    Slide {
        title: "Share News, Events & More",
        subtitle: "Be Part of Your Community",
        description: "Share local news, organize events, and help your neighbors stay informed",
        emoji: "📢",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub current: usize,
}

impl State {
    pub fn is_last(&self) -> bool {
        self.current + 1 >= SLIDES.len()
    }

    /// Advances one slide. Returns `true` when the carousel is finished.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return true;
        }
        self.current += 1;
        false
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn jump(&mut self, index: usize) {
        if index < SLIDES.len() {
            self.current = index;
        }
    }
}

pub fn render(state: &State) -> Page {
    let slide = &SLIDES[state.current.min(SLIDES.len() - 1)];
    let dots: String = (0..SLIDES.len())
        .map(|i| {
            format!(
                r#"<button class="dot{}" data-action="onboarding-jump" data-index="{}" aria-label="Slide {}"></button>"#,
                if i == state.current { " active" } else { "" },
                i,
                i + 1
            )
        })
        .collect();
    let previous = if state.current > 0 {
        r#"<button data-action="onboarding-previous">Back</button>"#
    } else {
        ""
    };
    let next_label = if state.is_last() { "Get Started" } else { "Next" };
    let body = format!(
        r#"<section class="onboarding">
<div class="slide-emoji">{emoji}</div>
<h1>{title}</h1>
<h2>{subtitle}</h2>
<p class="muted">{description}</p>
<div class="dots">{dots}</div>
<div class="actions">{previous}<button data-action="onboarding-next">{next}</button></div>
<button class="link" data-action="onboarding-skip">Skip</button>
</section>"#,
        emoji = slide.emoji,
        title = esc(slide.title),
        subtitle = esc(slide.subtitle),
        description = esc(slide.description),
        dots = dots,
        previous = previous,
        next = next_label,
    );
    Page::new("Welcome", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_finishes_on_last_slide() {
        let mut state = State::default();
        assert!(!state.next());
        assert!(!state.next());
        assert!(state.is_last());
        assert!(state.next());
        assert_eq!(state.current, 2);
    }

    #[test]
    fn previous_stops_at_first() {
        let mut state = State::default();
        state.previous();
        assert_eq!(state.current, 0);
        state.jump(7);
        assert_eq!(state.current, 0);
        state.jump(1);
        assert_eq!(state.current, 1);
    }

    #[test]
    fn last_slide_offers_get_started() {
        let page = render(&State { current: 2 });
        assert!(page.body.contains("Get Started"));
        assert!(page.body.contains("Share News, Events &amp; More"));
        assert!(render(&State::default()).body.contains(">Next<"));
    }
}
