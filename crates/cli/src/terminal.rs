//! Terminal display surface.

use owo_colors::OwoColorize;
use tracing::{debug, error};

use clave_core::{
    DisplaySurface, Notification, NotifyDuration, ResultPayload, ResultView, SubmissionState,
};

const GAUGE_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub json: bool,
}

/// Renders results to stdout and notices to stderr.
pub struct TerminalSurface {
    options: RenderOptions,
}

impl TerminalSurface {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl DisplaySurface for TerminalSurface {
    fn state_changed(&self, from: SubmissionState, to: SubmissionState) {
        debug!("{:?} -> {:?}", from, to);
    }

    fn loading_started(&self) {
        if !self.options.json {
            eprintln!("Analyzing...");
        }
    }

    fn loading_stopped(&self) {}

    fn notify(&self, notification: Notification) {
        debug!(kind = ?notification.kind, "Notification");
        let message = notification.message;
        match (self.options.color, notification.duration) {
            (true, NotifyDuration::Long) => eprintln!("{}", message.red().bold()),
            (true, NotifyDuration::Short) => eprintln!("{}", message.red()),
            (false, _) => eprintln!("{}", message),
        }
    }

    fn navigate(&self, payload: ResultPayload) {
        let view = ResultView::from_payload(&payload);
        if self.options.json {
            match serde_json::to_string_pretty(&view) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize result: {}", e),
            }
        } else {
            println!("{}", render_card(&view, self.options.color));
        }
    }
}

/// Render the result screen as text.
///
/// Translation falls back to a placeholder; focus, cultural context and key
/// expression render empty when absent.
pub fn render_card(view: &ResultView, color: bool) -> String {
    let headline = if color {
        let (r, g, b) = view.tint.rgb();
        let padded = format!(" {} ", view.headline);
        padded
            .black()
            .on_truecolor(r, g, b)
            .bold()
            .to_string()
    } else {
        format!("[{}] {}", view.tint.token(), view.headline)
    };

    let mut lines = vec![
        format!("Input:            {}", view.input_text),
        format!("Translation:      {}", view.translation),
        String::new(),
        headline,
        format!(
            "Confidence:       {} {}",
            view.confidence_text(),
            gauge(view.confidence_gauge())
        ),
        format!("Agreement:        {}", view.agreement_line),
        String::new(),
        format!(
            "Key expression:   {}",
            view.key_expression.as_deref().unwrap_or_default()
        ),
        format!(
            "Focus:            {}",
            view.analysis_focus.as_deref().unwrap_or_default()
        ),
        format!(
            "Cultural context: {}",
            view.cultural_context.as_deref().unwrap_or_default()
        ),
    ];

    for line in lines.iter_mut() {
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
    }
    lines.join("\n")
}

fn gauge(value: u8) -> String {
    let filled = usize::from(value) * GAUGE_WIDTH / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ResultPayload {
        ResultPayload {
            input_text: "I am so happy today".to_string(),
            sentiment: "positive".to_string(),
            confidence: 0.92,
            analysis_focus: None,
            cultural_context: Some("Plain English, no switch".to_string()),
            key_expression: Some("so happy".to_string()),
            translation: None,
            agreement: "3/3".to_string(),
        }
    }

    #[test]
    fn test_render_card_plain() {
        let card = render_card(&ResultView::from_payload(&payload()), false);

        assert!(card.contains("[pastel-blue] 😊 Positive"));
        assert!(card.contains("Confidence:       92% [██████████████████░░]"));
        assert!(card.contains("Agreement:        3/3 ✓"));
        assert!(card.contains("Translation:      No translation available"));
        assert!(card.contains("Key expression:   so happy"));
        assert!(card.lines().any(|l| l == "Focus:"));
    }

    #[test]
    fn test_gauge_bounds() {
        assert_eq!(gauge(0), format!("[{}]", "░".repeat(GAUGE_WIDTH)));
        assert_eq!(gauge(100), format!("[{}]", "█".repeat(GAUGE_WIDTH)));
    }

    #[test]
    fn test_render_card_colored_keeps_headline() {
        let card = render_card(&ResultView::from_payload(&payload()), true);
        assert!(card.contains("😊 Positive"));
        assert!(card.contains('\u{1b}'));
    }
}
